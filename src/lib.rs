//! # GCView
//!
//! Display configuration for garbage-collector visualization: unit
//! formatters, per-space field metadata, and histogram chart definitions.
//!
//! The crate is the declarative layer in front of a rendering tool. It maps
//! each named memory space a runtime announces (a heap summary, a rosalloc
//! space, a large-object map, ...) to grouping rules, per-field display
//! metadata, and histogram specifications, and it supplies the pure
//! value-to-string formatters that scale raw samples into display units.
//! The rendering layer itself — charts, tables, menus — is a separate
//! component that reads this configuration by name.
//!
//! ## Quick Start
//!
//! ```rust
//! use gcview::presets;
//!
//! let view = presets::art();
//!
//! // Raw samples arrive in base units; formatting scales and labels them.
//! assert_eq!(view.format("Summary", "Heap Capacity", 1_048_576.0), "1 MB");
//!
//! // Fields flagged for exclusion never show up in menu enumerations.
//! let summary = view.space_config("Summary").expect("summary space");
//! assert!(summary.menu_fields().all(|name| name != "GC Type"));
//! ```
//!
//! Lookups never fail: an unknown space or field resolves to identity
//! formatting with no unit, so the renderer can feed any slot name through
//! without guarding.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Page-set codes are exact small integers carried in f64 samples
#![allow(clippy::float_cmp)]

/// Display-configuration descriptor types and the lookup registry.
pub mod config;

/// Error types for gcview operations.
pub mod error;

/// Unit formatters for raw GC samples.
pub mod format;

/// Built-in display configuration for the ART runtime.
pub mod presets;

pub use error::{Error, Result};

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use gcview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{
        ChartKind, EventConfig, FieldConfig, GroupConfig, HistogramConfig, SeriesConfig,
        SpaceConfig, ViewConfig,
    };
    pub use crate::error::{Error, Result};
    pub use crate::format::Formatter;
    pub use crate::presets::{art, art_config, STANDARD_PAGE_SIZE};
}
