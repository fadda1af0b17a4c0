//! Pure totals computation.
//!
//! Every derived amount on a document is recomputed from scratch by these
//! functions on every change, spreadsheet-style. There is no incremental
//! update path and no cached intermediate sum, so a stale aggregate after
//! a partial update cannot exist.

use rust_decimal::Decimal;

use crate::tax::TaxCode;

use super::line::LineItem;
use super::types::{DocumentKind, HeaderTotals, LineDerived};

/// Computes the derived amounts for one line.
///
/// The VAT of a tax-inclusive line is backed out of the entered amount
/// (`subtotal * rate / (100 + rate)`); a tax-exclusive line adds it on top
/// (`subtotal * rate / 100`). Either way the line total stays the pre-tax
/// subtotal: VAT is aggregated only at the header.
#[must_use]
pub fn line_derived(kind: DocumentKind, item: &LineItem) -> LineDerived {
    let effective_quantity = if kind.multiplies_quantity() {
        item.quantity
    } else {
        Decimal::ONE
    };
    let line_subtotal = item.unit_amount * effective_quantity;

    let rate = item.tax_code.map_or(Decimal::ZERO, TaxCode::rate);
    let vat_amount = if item.tax_included {
        line_subtotal * rate / (Decimal::ONE_HUNDRED + rate)
    } else {
        line_subtotal * rate / Decimal::ONE_HUNDRED
    };

    LineDerived {
        line_subtotal,
        vat_amount,
        line_total: line_subtotal,
    }
}

/// Computes the header aggregates from the full line collection.
///
/// The discount applies to the goods value only: each line's VAT was
/// computed on its pre-discount subtotal, and the discounted goods value
/// and the VAT sum meet again in the grand total.
#[must_use]
pub fn header_totals(
    kind: DocumentKind,
    items: &[LineItem],
    discount_percent: Decimal,
) -> HeaderTotals {
    let mut subtotal = Decimal::ZERO;
    let mut total_vat_amount = Decimal::ZERO;
    for item in items {
        let derived = line_derived(kind, item);
        subtotal += derived.line_subtotal;
        total_vat_amount += derived.vat_amount;
    }

    let discount_amount = subtotal * discount_percent / Decimal::ONE_HUNDRED;
    let after_discount = subtotal - discount_amount;
    let grand_total = after_discount + total_vat_amount;

    HeaderTotals {
        subtotal,
        total_vat_amount,
        grand_total,
        net_amount: grand_total,
    }
}
