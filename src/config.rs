//! Display-configuration descriptor types and the lookup registry.
//!
//! A [`ViewConfig`] maps each named memory space to its grouping rules,
//! per-field display metadata, and histogram chart definitions. Everything is
//! referenced by name and resolved at lookup time; a lookup that finds
//! nothing falls back to default formatting instead of failing.
//!
//! The serialized form uses the configuration vocabulary the rendering layer
//! already consumes (`Spaces`, `Groups`, `Data`, `SlotName`,
//! `ExcludeFromMenu`, ...).

use crate::error::{Error, Result};
use crate::format::Formatter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display metadata for a single named field within a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldConfig {
    /// Field name, as emitted by the runtime.
    pub name: String,

    /// Hide this field from menu enumerations.
    #[serde(default)]
    pub exclude_from_menu: bool,

    /// Formatter applied to raw samples of this field.
    #[serde(default)]
    pub formatter: Formatter,
}

impl FieldConfig {
    /// Creates a field shown in menus with default (identity) formatting.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exclude_from_menu: false,
            formatter: Formatter::Identity,
        }
    }

    /// Sets the formatter for this field.
    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Hides this field from menu enumerations.
    #[must_use]
    pub fn exclude_from_menu(mut self) -> Self {
        self.exclude_from_menu = true;
        self
    }
}

/// A grouping rule: which slot's value identifies the row within a grouped
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupConfig {
    /// Group label; `None` is the space's default grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name of the slot whose value keys the rows of this group.
    pub slot_name: String,

    /// Optional slot whose value labels each row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
}

impl GroupConfig {
    /// Creates a named group keyed by `slot_name`.
    #[must_use]
    pub fn named(name: impl Into<String>, slot_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            slot_name: slot_name.into(),
            labels: None,
        }
    }

    /// Creates the default (unlabeled) group keyed by `slot_name`.
    #[must_use]
    pub fn default_key(slot_name: impl Into<String>) -> Self {
        Self {
            name: None,
            slot_name: slot_name.into(),
            labels: None,
        }
    }

    /// Sets the slot that labels each row.
    #[must_use]
    pub fn labels(mut self, labels: impl Into<String>) -> Self {
        self.labels = Some(labels.into());
        self
    }
}

/// Chart kind for a histogram definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Bar chart.
    #[default]
    Bars,
}

/// One data series of a histogram: the named fields it charts and the
/// formatter scaling their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeriesConfig {
    /// Field names charted by this series, in display order.
    pub names: Vec<String>,

    /// Formatter applied to every value of the series.
    #[serde(default)]
    pub formatter: Formatter,
}

impl SeriesConfig {
    /// Creates a series over the given field names.
    #[must_use]
    pub fn new(names: &[&str], formatter: Formatter) -> Self {
        Self {
            names: names.iter().map(|n| (*n).to_string()).collect(),
            formatter,
        }
    }
}

/// A histogram chart definition grouping one or more named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistogramConfig {
    /// Chart title.
    pub name: String,

    /// Chart kind.
    #[serde(rename = "Type", default)]
    pub kind: ChartKind,

    /// Whether the series are stacked.
    #[serde(default)]
    pub stacked: bool,

    /// Optional slot whose value labels each bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,

    /// Primary data series.
    #[serde(rename = "Data")]
    pub series: SeriesConfig,

    /// Optional secondary data series, charted on its own scale.
    #[serde(rename = "Data1", default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SeriesConfig>,
}

impl HistogramConfig {
    /// Creates an unstacked bar histogram with an empty primary series.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChartKind::Bars,
            stacked: false,
            labels: None,
            series: SeriesConfig::default(),
            secondary: None,
        }
    }

    /// Sets the chart kind.
    #[must_use]
    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets whether series are stacked.
    #[must_use]
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Sets the slot that labels each bar.
    #[must_use]
    pub fn labels(mut self, labels: impl Into<String>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    /// Sets the primary data series.
    #[must_use]
    pub fn series(mut self, series: SeriesConfig) -> Self {
        self.series = series;
        self
    }

    /// Sets the secondary data series.
    #[must_use]
    pub fn secondary(mut self, series: SeriesConfig) -> Self {
        self.secondary = Some(series);
        self
    }
}

/// A named event counter shown in the event table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventConfig {
    /// Event name.
    pub name: String,

    /// Formatter applied to the event's count.
    #[serde(default)]
    pub formatter: Formatter,
}

impl EventConfig {
    /// Creates an event counter with count formatting.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formatter: Formatter::Count,
        }
    }

    /// Sets the formatter for this event's count.
    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }
}

/// Display configuration for one named memory space.
///
/// Fields and histograms keep declaration order; menus and chart lists are
/// ordered displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpaceConfig {
    /// Space name, as announced by the runtime.
    pub name: String,

    /// Grouping rules for this space.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,

    /// Per-field display metadata, in declaration order.
    #[serde(rename = "Data", default)]
    pub fields: Vec<FieldConfig>,

    /// Expand this space's section when the view first opens.
    #[serde(default)]
    pub expand_at_start: bool,

    /// Histogram chart definitions, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub histograms: Vec<HistogramConfig>,
}

impl SpaceConfig {
    /// Creates an empty space configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            fields: Vec::new(),
            expand_at_start: false,
            histograms: Vec::new(),
        }
    }

    /// Adds a grouping rule.
    #[must_use]
    pub fn group(mut self, group: GroupConfig) -> Self {
        self.groups.push(group);
        self
    }

    /// Adds a field descriptor.
    #[must_use]
    pub fn field(mut self, field: FieldConfig) -> Self {
        self.fields.push(field);
        self
    }

    /// Expands this space's section when the view first opens.
    #[must_use]
    pub fn expand_at_start(mut self) -> Self {
        self.expand_at_start = true;
        self
    }

    /// Adds a histogram definition.
    #[must_use]
    pub fn histogram(mut self, histogram: HistogramConfig) -> Self {
        self.histograms.push(histogram);
        self
    }

    /// Looks up a field descriptor by name.
    #[must_use]
    pub fn field_config(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a grouping rule by label; `None` finds the default group.
    #[must_use]
    pub fn group_config(&self, name: Option<&str>) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.name.as_deref() == name)
    }

    /// Field names eligible for menu enumeration, in declaration order.
    pub fn menu_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| !f.exclude_from_menu)
            .map(|f| f.name.as_str())
    }
}

/// The root display-configuration record: event counters plus per-space
/// display metadata.
///
/// # Examples
/// ```
/// use gcview::config::{FieldConfig, SpaceConfig, ViewConfig};
/// use gcview::format::Formatter;
///
/// let view = ViewConfig::new().space(
///     SpaceConfig::new("Summary")
///         .field(FieldConfig::new("Heap Capacity").formatter(Formatter::Megabytes)),
/// );
/// assert_eq!(view.format("Summary", "Heap Capacity", 1_048_576.0), "1 MB");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewConfig {
    /// Named event counters; may be empty.
    #[serde(default)]
    pub events: Vec<EventConfig>,

    /// Per-space display configuration.
    #[serde(default)]
    pub spaces: Vec<SpaceConfig>,
}

impl ViewConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event counter.
    #[must_use]
    pub fn event(mut self, event: EventConfig) -> Self {
        self.events.push(event);
        self
    }

    /// Adds a space configuration.
    #[must_use]
    pub fn space(mut self, space: SpaceConfig) -> Self {
        self.spaces.push(space);
        self
    }

    /// Looks up a space by name.
    #[must_use]
    pub fn space_config(&self, name: &str) -> Option<&SpaceConfig> {
        self.spaces.iter().find(|s| s.name == name)
    }

    /// Returns the formatter configured for a field, or the identity
    /// formatter when the space or field is unknown. Never fails.
    #[must_use]
    pub fn formatter(&self, space: &str, field: &str) -> Formatter {
        self.space_config(space)
            .and_then(|s| s.field_config(field))
            .map(|f| f.formatter)
            .unwrap_or_default()
    }

    /// Formats a raw sample of the given field with its configured
    /// formatter, falling back to bare identity display.
    #[must_use]
    pub fn format(&self, space: &str, field: &str, raw: f64) -> String {
        self.formatter(space, field).format_raw(raw)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.display().to_string())
            } else {
                Error::Io(err)
            }
        })?;
        Self::from_json(&content)
    }

    /// Writes the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
