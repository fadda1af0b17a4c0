//! Property-based tests for the VAT code table.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::code::TaxCode;

/// Strategy to generate any code in the fixed table.
fn tax_code_strategy() -> impl Strategy<Value = TaxCode> {
    prop_oneof![
        Just(TaxCode::Vat5),
        Just(TaxCode::Vat15),
        Just(TaxCode::Exempt),
        Just(TaxCode::ZeroRated),
    ]
}

proptest! {
    /// Every rate the table can produce is one of 0, 5, or 15 percent.
    #[test]
    fn rates_stay_within_the_published_set(code in tax_code_strategy()) {
        let rate = code.rate();
        let known = [Decimal::ZERO, Decimal::from(5), Decimal::from(15)];
        prop_assert!(known.contains(&rate));
    }

    /// The wire string of a code always resolves back to the same code.
    #[test]
    fn wire_string_resolves_back(code in tax_code_strategy()) {
        prop_assert_eq!(TaxCode::from_code(code.as_str()), Some(code));
        prop_assert_eq!(code.as_str().parse::<TaxCode>().ok(), Some(code));
    }

    /// Strings outside the table, including the empty string, resolve to
    /// untaxed rather than any code.
    #[test]
    fn foreign_strings_resolve_to_untaxed(
        raw in ".*".prop_filter(
            "outside the table",
            |s| !matches!(s.as_str(), "VAT_5" | "VAT_15" | "EXEMPT" | "ZERO_RATED"),
        ),
    ) {
        prop_assert_eq!(TaxCode::from_code(&raw), None);
    }
}
