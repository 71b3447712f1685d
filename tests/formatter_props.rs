//! Property tests for the unit formatters.

// Power-of-two scaling is exact, so the assertions compare floats directly
#![allow(clippy::float_cmp)]

use gcview::format::Formatter;
use proptest::prelude::*;

proptest! {
    // Dividing by a power of two only shifts the exponent, so byte scaling
    // is exact for any sample that fits in f64.
    #[test]
    fn kilobyte_scaling_is_exact(bytes in any::<u32>()) {
        let raw = f64::from(bytes);
        let scaled = Formatter::Kilobytes.transform(raw);
        prop_assert_eq!(scaled * 1024.0, raw);
    }

    #[test]
    fn megabyte_scaling_is_exact(bytes in any::<u32>()) {
        let raw = f64::from(bytes);
        let scaled = Formatter::Megabytes.transform(raw);
        prop_assert_eq!(scaled * 1024.0 * 1024.0, raw);
    }

    #[test]
    fn milliseconds_scale_up_a_thousandfold(secs in 0u32..1_000_000) {
        let raw = f64::from(secs);
        prop_assert_eq!(Formatter::MillisFromSecs.transform(raw), raw * 1000.0);
    }

    #[test]
    fn unit_formatters_append_their_suffix(raw in any::<u32>()) {
        let raw = f64::from(raw);
        for formatter in [
            Formatter::Count,
            Formatter::Bytes,
            Formatter::Kilobytes,
            Formatter::Megabytes,
            Formatter::MillisFromSecs,
            Formatter::Secs,
        ] {
            let rendered = formatter.format_raw(raw);
            prop_assert!(
                rendered.ends_with(formatter.unit_str()),
                "{:?} rendered {:?}",
                formatter,
                rendered
            );
        }
    }

    #[test]
    fn identity_transforms_are_lossless(raw in any::<u32>()) {
        let raw = f64::from(raw);
        for formatter in [Formatter::Identity, Formatter::Count, Formatter::Bytes, Formatter::Secs] {
            prop_assert_eq!(formatter.transform(raw), raw);
        }
    }

    #[test]
    fn nonzero_flags_are_committed(flag in prop::num::f64::NORMAL) {
        prop_assert_eq!(Formatter::Bool.format_value(flag), "Committed");
    }

    #[test]
    fn page_set_codes_other_than_zero_and_one_are_runs(code in 2u32..10_000) {
        prop_assert_eq!(Formatter::PageSetType.format_value(f64::from(code)), "Run");
    }
}
