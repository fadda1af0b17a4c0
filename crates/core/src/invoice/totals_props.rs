//! Property-based tests for the totals engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::tax::TaxCode;

use super::line::LineItem;
use super::totals::{header_totals, line_derived};
use super::types::DocumentKind;

/// Strategy to generate a unit amount between 0.00 and 1,000,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a quantity between 0.1 and 1,000.0.
fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Strategy to generate any tax selection, including untaxed.
fn tax_strategy() -> impl Strategy<Value = Option<TaxCode>> {
    prop_oneof![
        Just(None),
        Just(Some(TaxCode::Vat5)),
        Just(Some(TaxCode::Vat15)),
        Just(Some(TaxCode::Exempt)),
        Just(Some(TaxCode::ZeroRated)),
    ]
}

/// Strategy to generate any document kind.
fn kind_strategy() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![
        Just(DocumentKind::PurchaseInvoice),
        Just(DocumentKind::SalesInvoice),
        Just(DocumentKind::PurchaseReturn),
        Just(DocumentKind::SalesReturn),
    ]
}

/// Strategy to generate one populated line item.
fn item_strategy() -> impl Strategy<Value = LineItem> {
    (amount_strategy(), quantity_strategy(), tax_strategy(), any::<bool>()).prop_map(
        |(unit_amount, quantity, tax_code, tax_included)| LineItem {
            quantity,
            unit_amount,
            tax_code,
            tax_included,
            ..LineItem::new()
        },
    )
}

/// Strategy to generate a discount percentage from 0.00 to 200.00, beyond
/// the nominal 0-100 range since the engine never clamps it.
fn discount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..20_000).prop_map(|basis| Decimal::new(basis, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The engine is a pure function: same inputs, same totals.
    #[test]
    fn totals_are_deterministic(
        kind in kind_strategy(),
        items in prop::collection::vec(item_strategy(), 1..8),
        discount in discount_strategy(),
    ) {
        let first = header_totals(kind, &items, discount);
        let second = header_totals(kind, &items, discount);
        prop_assert_eq!(first, second);
    }

    /// The grand total always follows the cascade: discount the goods
    /// value, then add the aggregated VAT. Net mirrors grand.
    #[test]
    fn grand_total_follows_the_discount_cascade(
        kind in kind_strategy(),
        items in prop::collection::vec(item_strategy(), 1..8),
        discount in discount_strategy(),
    ) {
        let totals = header_totals(kind, &items, discount);

        let mut subtotal = Decimal::ZERO;
        let mut vat = Decimal::ZERO;
        for item in &items {
            let derived = line_derived(kind, item);
            subtotal += derived.line_subtotal;
            vat += derived.vat_amount;
        }

        prop_assert_eq!(totals.subtotal, subtotal);
        prop_assert_eq!(totals.total_vat_amount, vat);
        let after_discount = subtotal - subtotal * discount / Decimal::ONE_HUNDRED;
        prop_assert_eq!(totals.grand_total, after_discount + vat);
        prop_assert_eq!(totals.net_amount, totals.grand_total);
    }

    /// VAT is never negative for non-negative line inputs.
    #[test]
    fn vat_never_negative_for_nonnegative_inputs(
        kind in kind_strategy(),
        item in item_strategy(),
    ) {
        let derived = line_derived(kind, &item);
        prop_assert!(derived.vat_amount >= Decimal::ZERO);
    }

    /// The displayed line total is always the pre-tax subtotal, for every
    /// kind and tax selection.
    #[test]
    fn line_total_always_equals_line_subtotal(
        kind in kind_strategy(),
        item in item_strategy(),
    ) {
        let derived = line_derived(kind, &item);
        prop_assert_eq!(derived.line_total, derived.line_subtotal);
    }

    /// Return kinds price a line by its bare unit amount: any entered
    /// quantity produces the same derived amounts as a quantity of one.
    #[test]
    fn return_kinds_ignore_quantity(
        kind in prop_oneof![Just(DocumentKind::PurchaseReturn), Just(DocumentKind::SalesReturn)],
        item in item_strategy(),
    ) {
        let unit = LineItem { quantity: Decimal::ONE, ..item.clone() };
        prop_assert_eq!(line_derived(kind, &item), line_derived(kind, &unit));
        prop_assert_eq!(line_derived(kind, &item).line_subtotal, item.unit_amount);
    }

    /// A tax-exclusive line's VAT is exactly subtotal times rate over one
    /// hundred.
    #[test]
    fn exclusive_vat_matches_the_rate_formula(
        kind in kind_strategy(),
        item in item_strategy(),
    ) {
        let exclusive = LineItem { tax_included: false, ..item };
        let derived = line_derived(kind, &exclusive);
        let rate = exclusive.tax_code.map_or(Decimal::ZERO, TaxCode::rate);
        prop_assert_eq!(derived.vat_amount, derived.line_subtotal * rate / Decimal::ONE_HUNDRED);
    }

    /// Untaxed, exempt, and zero-rated lines are numerically identical:
    /// no VAT either way, inclusive or not.
    #[test]
    fn zero_rate_paths_agree(
        kind in kind_strategy(),
        item in item_strategy(),
        included in any::<bool>(),
    ) {
        let variants = [None, Some(TaxCode::Exempt), Some(TaxCode::ZeroRated)];
        let derived: Vec<_> = variants
            .into_iter()
            .map(|tax_code| {
                let line = LineItem { tax_code, tax_included: included, ..item.clone() };
                line_derived(kind, &line)
            })
            .collect();
        prop_assert_eq!(derived[0], derived[1]);
        prop_assert_eq!(derived[1], derived[2]);
        prop_assert_eq!(derived[0].vat_amount, Decimal::ZERO);
    }
}
