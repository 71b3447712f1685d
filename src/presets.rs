//! Built-in display configuration for the ART runtime.
//!
//! One fully-populated [`ViewConfig`] per supported runtime; currently only
//! ART. Field and slot names here must match the names the runtime emits,
//! misspellings included, or lookups silently fall back to identity
//! formatting.

use crate::config::{
    FieldConfig, GroupConfig, HistogramConfig, SeriesConfig, SpaceConfig, ViewConfig,
};
use crate::format::Formatter;
use once_cell::sync::Lazy;

/// Page granularity of the runtime's page-backed spaces, in bytes.
pub const STANDARD_PAGE_SIZE: u64 = 1024 * 1024;

static ART: Lazy<ViewConfig> = Lazy::new(art_config);

/// The process-wide display configuration for the ART runtime.
///
/// Built once on first access and immutable thereafter.
#[must_use]
pub fn art() -> &'static ViewConfig {
    &ART
}

/// Builds an owned copy of the ART display configuration.
///
/// The table declares no event counters and three spaces: the heap summary,
/// the main rosalloc space, and the memory-mapped large object space.
#[must_use]
pub fn art_config() -> ViewConfig {
    ViewConfig::new()
        .space(summary_space())
        .space(rosalloc_space())
        .space(large_object_space())
}

fn summary_space() -> SpaceConfig {
    SpaceConfig::new("Summary")
        .group(GroupConfig::named("GC Summary", "GC ID").labels("GC Type"))
        .field(FieldConfig::new("GC Type").exclude_from_menu())
        .field(FieldConfig::new("GC Count").formatter(Formatter::Count))
        .field(FieldConfig::new("Heap Capacity").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Heap Footprint").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Heap Allocated Size").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Heap Allocated Object Count").formatter(Formatter::Count))
        .expand_at_start()
        .histogram(
            HistogramConfig::new("GC Info")
                .labels("GC Type")
                .series(SeriesConfig::new(&["GC Count"], Formatter::Count)),
        )
        .histogram(HistogramConfig::new("Heap Info").series(SeriesConfig::new(
            &["Heap Capacity", "Heap Footprint", "Heap Allocated Size"],
            Formatter::Megabytes,
        )))
}

fn rosalloc_space() -> SpaceConfig {
    SpaceConfig::new("main rosalloc space")
        .group(GroupConfig::default_key("Pages Kind"))
        .group(GroupConfig::named("Empty/Release Kind", "Empty/Release Pages ID"))
        .group(GroupConfig::named("Large Object Kind", "Large Object ID"))
        .group(GroupConfig::named("Run Kind", "Run ID"))
        .group(GroupConfig::named("Run Distribution", "Bracket ID"))
        .field(FieldConfig::new("Space Capacity").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Space Footprint").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Space Allocated Size").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Space Allocated Object Count").formatter(Formatter::Count))
        .field(FieldConfig::new("Count of Empty Kind").formatter(Formatter::Count))
        .field(FieldConfig::new("Count of Release Kind").formatter(Formatter::Count))
        .field(FieldConfig::new("Count of Empty/Release Kind").formatter(Formatter::Count))
        .field(FieldConfig::new("Count of Large Object kind").formatter(Formatter::Count))
        .field(FieldConfig::new("Count of Run Kind").formatter(Formatter::Count))
        .field(FieldConfig::new("Continous Pages Kind").exclude_from_menu())
        .field(FieldConfig::new("Empty/Release Pages Size").formatter(Formatter::Kilobytes))
        .field(FieldConfig::new("Empty/Release Pages Address Range").exclude_from_menu())
        .field(FieldConfig::new("Large Object Size").formatter(Formatter::Kilobytes))
        .field(FieldConfig::new("Large Object Address Range").exclude_from_menu())
        .field(
            FieldConfig::new("Run Size")
                .exclude_from_menu()
                .formatter(Formatter::Kilobytes),
        )
        .field(FieldConfig::new("Run Address Range").exclude_from_menu())
        .field(FieldConfig::new("Run Allocated Size").formatter(Formatter::Bytes))
        .field(FieldConfig::new("Run Allocated Object Count").formatter(Formatter::Count))
        .field(
            FieldConfig::new("Run Bracket Size")
                .exclude_from_menu()
                .formatter(Formatter::Bytes),
        )
        .field(
            FieldConfig::new("Run total slots Num")
                .exclude_from_menu()
                .formatter(Formatter::Count),
        )
        .field(FieldConfig::new("Run is Local").formatter(Formatter::Bool))
        .field(FieldConfig::new("Run is to be Bulk Freed").formatter(Formatter::Bool))
        .field(FieldConfig::new("Run is Full").formatter(Formatter::Bool))
        .field(
            FieldConfig::new("Bracket Size")
                .exclude_from_menu()
                .formatter(Formatter::Bytes),
        )
        .field(
            FieldConfig::new("Population Of The Same Bracket Size")
                .exclude_from_menu()
                .formatter(Formatter::Count),
        )
        .field(
            FieldConfig::new("Total Allocated Bytes Of The Same Bracket Size")
                .exclude_from_menu()
                .formatter(Formatter::Kilobytes),
        )
        .histogram(HistogramConfig::new("Space Info").series(SeriesConfig::new(
            &["Space Capacity", "Space Footprint", "Space Allocated Size"],
            Formatter::Megabytes,
        )))
        .histogram(
            HistogramConfig::new("Page Set Distribution").series(SeriesConfig::new(
                &[
                    "Empty Pages Set Count",
                    "Large Object Set Count",
                    "Run Set Count",
                ],
                Formatter::Count,
            )),
        )
        .histogram(
            HistogramConfig::new("Run Distribution")
                .series(SeriesConfig::new(
                    &["Population Of The Same Bracket Size"],
                    Formatter::Count,
                ))
                .secondary(SeriesConfig::new(
                    &["Total Allocated Bytes Of The Same Bracket Size"],
                    Formatter::Kilobytes,
                )),
        )
}

fn large_object_space() -> SpaceConfig {
    SpaceConfig::new("mem map large object space")
        .group(GroupConfig::default_key("Large Object Info"))
        .group(GroupConfig::named("Large Object Info", "Large Object ID"))
        .group(GroupConfig::named("MemMap Info", "MemMap ID"))
        .field(FieldConfig::new("Bytes Allocated").formatter(Formatter::Kilobytes))
        .field(FieldConfig::new("Objects Allocated").formatter(Formatter::Count))
        .field(FieldConfig::new("Total Bytes Allocated").formatter(Formatter::Megabytes))
        .field(FieldConfig::new("Total Object Allocated").formatter(Formatter::Count))
        .field(FieldConfig::new("Object Address Range").exclude_from_menu())
        .field(FieldConfig::new("Object Length").formatter(Formatter::Kilobytes))
        .field(FieldConfig::new("MemMap Range").exclude_from_menu())
        .field(FieldConfig::new("MemMap Size").formatter(Formatter::Kilobytes))
        .field(FieldConfig::new("Is MemMap").formatter(Formatter::Bool))
}
