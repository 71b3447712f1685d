//! Unit formatters for raw GC samples.
//!
//! Every formatter is a pure value-to-display rule: `transform` rescales a raw
//! sample into the display unit, `format_value` renders the rescaled value,
//! and `unit_str` names the unit the rendering layer appends. Raw samples
//! arrive in base units (bytes, seconds, counts, enumerated codes); the only
//! state a formatter carries is its variant.

use serde::{Deserialize, Serialize};

// sic — existing consumers match this exact string
const LABEL_NOT_COMMITTED: &str = "Not Commmited";
const LABEL_COMMITTED: &str = "Committed";

/// A pure value-to-display-string conversion rule with an associated unit.
///
/// The default formatter is [`Formatter::Identity`], which renders the raw
/// value unchanged with no unit. Lookups that find no configured formatter
/// fall back to it silently.
///
/// # Examples
/// ```
/// use gcview::format::Formatter;
/// assert_eq!(Formatter::Megabytes.format_raw(1_048_576.0), "1 MB");
/// assert_eq!(Formatter::Count.format_raw(3.0), "3 count");
/// assert_eq!(Formatter::Identity.format_raw(42.0), "42");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formatter {
    /// Raw value, no unit.
    #[default]
    Identity,
    /// Raw count of objects, pages, or collections.
    Count,
    /// Byte count, unscaled.
    Bytes,
    /// Byte count displayed in kilobytes (1024 bytes).
    Kilobytes,
    /// Byte count displayed in megabytes (1024² bytes).
    Megabytes,
    /// Duration sampled in seconds, displayed in milliseconds.
    MillisFromSecs,
    /// Duration sampled in seconds, displayed as-is.
    Secs,
    /// Boolean flag rendered as a commit-state label.
    Bool,
    /// Enumerated page-set code: 0 empty, 1 large object, anything else run.
    PageSetType,
}

impl Formatter {
    /// Rescales a raw sample into this formatter's display unit.
    ///
    /// # Examples
    /// ```
    /// use gcview::format::Formatter;
    /// assert_eq!(Formatter::Kilobytes.transform(1536.0), 1.5);
    /// assert_eq!(Formatter::MillisFromSecs.transform(0.25), 250.0);
    /// assert_eq!(Formatter::Bytes.transform(512.0), 512.0);
    /// ```
    #[must_use]
    pub fn transform(self, raw: f64) -> f64 {
        match self {
            Self::Kilobytes => raw / 1024.0,
            Self::Megabytes => raw / (1024.0 * 1024.0),
            Self::MillisFromSecs => raw * 1000.0,
            _ => raw,
        }
    }

    /// Renders an already-transformed value, without the unit suffix.
    ///
    /// Numeric variants use the shortest round-trip display of the value, so
    /// unit conversion decides the precision and nothing is rounded away.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Bool => {
                if value != 0.0 && !value.is_nan() {
                    LABEL_COMMITTED.to_string()
                } else {
                    LABEL_NOT_COMMITTED.to_string()
                }
            }
            Self::PageSetType => {
                if value == 0.0 {
                    "Empty Page".to_string()
                } else if value == 1.0 {
                    "LargeObject".to_string()
                } else {
                    "Run".to_string()
                }
            }
            _ => format!("{value}"),
        }
    }

    /// The unit suffix the rendering layer appends, empty for unitless
    /// formatters.
    #[must_use]
    pub fn unit_str(self) -> &'static str {
        match self {
            Self::Identity | Self::Bool | Self::PageSetType => "",
            Self::Count => "count",
            Self::Bytes => "bytes",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::MillisFromSecs => "ms",
            Self::Secs => "sec",
        }
    }

    /// Applies `transform` then `format_value`, appending the unit suffix
    /// when there is one.
    ///
    /// # Examples
    /// ```
    /// use gcview::format::Formatter;
    /// assert_eq!(Formatter::Kilobytes.format_raw(1536.0), "1.5 KB");
    /// assert_eq!(Formatter::Bool.format_raw(1.0), "Committed");
    /// ```
    #[must_use]
    pub fn format_raw(self, raw: f64) -> String {
        let value = self.format_value(self.transform(raw));
        let unit = self.unit_str();
        if unit.is_empty() {
            value
        } else {
            format!("{value} {unit}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod byte_tests {
        use super::*;

        #[test]
        fn bytes_are_unscaled() {
            assert_eq!(Formatter::Bytes.format_raw(512.0), "512 bytes");
            assert_eq!(Formatter::Bytes.transform(512.0), 512.0);
        }

        #[test]
        fn kilobytes_divide_by_1024() {
            assert_eq!(Formatter::Kilobytes.transform(2048.0), 2.0);
            assert_eq!(Formatter::Kilobytes.format_raw(1536.0), "1.5 KB");
        }

        #[test]
        fn megabytes_divide_by_1024_squared() {
            assert_eq!(Formatter::Megabytes.transform(1_048_576.0), 1.0);
            assert_eq!(Formatter::Megabytes.format_raw(1_048_576.0), "1 MB");
            assert_eq!(Formatter::Megabytes.format_raw(1_572_864.0), "1.5 MB");
        }

        #[test]
        fn zero_bytes() {
            assert_eq!(Formatter::Megabytes.format_raw(0.0), "0 MB");
        }
    }

    mod time_tests {
        use super::*;

        #[test]
        fn millis_scale_up_from_seconds() {
            assert_eq!(Formatter::MillisFromSecs.transform(0.005), 5.0);
            assert_eq!(Formatter::MillisFromSecs.format_raw(0.25), "250 ms");
        }

        #[test]
        fn seconds_pass_through() {
            assert_eq!(Formatter::Secs.transform(12.0), 12.0);
            assert_eq!(Formatter::Secs.format_raw(12.0), "12 sec");
        }
    }

    mod count_tests {
        use super::*;

        #[test]
        fn counts_are_identity_with_unit() {
            assert_eq!(Formatter::Count.transform(7.0), 7.0);
            assert_eq!(Formatter::Count.format_raw(7.0), "7 count");
        }
    }

    mod bool_tests {
        use super::*;

        #[test]
        fn truthy_is_committed() {
            assert_eq!(Formatter::Bool.format_value(1.0), "Committed");
            assert_eq!(Formatter::Bool.format_value(-3.0), "Committed");
        }

        #[test]
        fn falsy_is_not_committed() {
            assert_eq!(Formatter::Bool.format_value(0.0), "Not Commmited");
            assert_eq!(Formatter::Bool.format_value(f64::NAN), "Not Commmited");
        }

        #[test]
        fn no_unit_suffix() {
            assert_eq!(Formatter::Bool.format_raw(1.0), "Committed");
        }
    }

    mod page_set_tests {
        use super::*;

        #[test]
        fn code_zero_is_empty_page() {
            assert_eq!(Formatter::PageSetType.format_value(0.0), "Empty Page");
        }

        #[test]
        fn code_one_is_large_object() {
            assert_eq!(Formatter::PageSetType.format_value(1.0), "LargeObject");
        }

        #[test]
        fn any_other_code_is_run() {
            assert_eq!(Formatter::PageSetType.format_value(2.0), "Run");
            assert_eq!(Formatter::PageSetType.format_value(7.0), "Run");
            assert_eq!(Formatter::PageSetType.format_value(-1.0), "Run");
        }
    }

    mod identity_tests {
        use super::*;

        #[test]
        fn identity_is_the_default() {
            assert_eq!(Formatter::default(), Formatter::Identity);
        }

        #[test]
        fn identity_renders_bare_value() {
            assert_eq!(Formatter::Identity.format_raw(42.0), "42");
            assert_eq!(Formatter::Identity.format_raw(1.25), "1.25");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn formatter_round_trips_through_json() {
            let json = serde_json::to_string(&Formatter::Megabytes).expect("serialize");
            assert_eq!(json, "\"Megabytes\"");
            let back: Formatter = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, Formatter::Megabytes);
        }
    }
}
