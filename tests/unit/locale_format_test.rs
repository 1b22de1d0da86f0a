// Locale number handling: decimal-comma parsing and locale re-formatting.
//
// The export uses a decimal comma on input; output cells use a comma
// decimal separator and a period thousands separator. Formatting an
// already-formatted value and re-parsing it must round-trip.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vatsum::core::locale::{format_amount, parse_amount};

proptest! {
    #[test]
    fn test_format_then_parse_round_trips(cents in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let value = Decimal::new(cents, 2);

        let text = format_amount(value);
        let parsed = parse_amount(&text).unwrap();

        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn test_reformatting_formatted_text_is_stable(cents in 0i64..1_000_000_000_000i64) {
        let value = Decimal::new(cents, 2);

        let once = format_amount(value);
        let again = format_amount(parse_amount(&once).unwrap());

        prop_assert_eq!(once, again);
    }

    #[test]
    fn test_plain_comma_notation_always_parses(units in 0u32..1_000_000u32, cents in 0u32..100u32) {
        let raw = format!("{},{:02}", units, cents);

        let parsed = parse_amount(&raw).unwrap();
        let expected = Decimal::from(units) + Decimal::new(cents as i64, 2);

        prop_assert_eq!(parsed, expected);
    }
}

#[test]
fn test_specific_locale_values() {
    assert_eq!(parse_amount("1234,56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("1.234,56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("0,75").unwrap(), dec!(0.75));

    assert_eq!(format_amount(dec!(1234.5)), "1.234,50");
    assert_eq!(format_amount(dec!(150)), "150,00");
    assert_eq!(format_amount(dec!(24.75)), "24,75");
}

#[test]
fn test_machine_notation_passes_through() {
    assert_eq!(parse_amount("1234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("22").unwrap(), dec!(22));
}

#[test]
fn test_double_comma_is_rejected() {
    assert!(parse_amount("12,34,56").is_err());
}

#[test]
fn test_empty_and_garbage_are_rejected() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("  ").is_err());
    assert!(parse_amount("n/a").is_err());
}
