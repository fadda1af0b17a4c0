//! Document-level domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four document entry flows sharing one computation engine.
///
/// The kind parameterizes every behavior that differs between flows, so
/// the quirks stay declared in one place instead of four page copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Vendor invoice for goods/services received.
    PurchaseInvoice,
    /// Customer invoice for goods/services delivered.
    SalesInvoice,
    /// Goods returned to a vendor.
    PurchaseReturn,
    /// Goods returned by a customer.
    SalesReturn,
}

impl DocumentKind {
    /// Whether line subtotals multiply unit amount by quantity.
    ///
    /// Return flows enter a bare cost per line and ignore quantity
    /// entirely; the asymmetry with invoice flows is deliberate and must
    /// not be unified without a product decision.
    #[must_use]
    pub const fn multiplies_quantity(self) -> bool {
        matches!(self, Self::PurchaseInvoice | Self::SalesInvoice)
    }

    /// Whether the document carries a journal-line collection.
    #[must_use]
    pub const fn carries_journal(self) -> bool {
        matches!(self, Self::PurchaseInvoice | Self::SalesInvoice)
    }

    /// Whether this is a sales-side document.
    ///
    /// Sales documents use `referenceNo`/`date`/`price` wire names where
    /// purchase documents use `voucherNo`/`voucherDate`/`cost`.
    #[must_use]
    pub const fn is_sales(self) -> bool {
        matches!(self, Self::SalesInvoice | Self::SalesReturn)
    }
}

/// Header-level aggregate totals, always recomputed from the line
/// collection and never mutated directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderTotals {
    /// Sum of line subtotals, before discount and tax.
    pub subtotal: Decimal,
    /// Sum of per-line VAT amounts.
    pub total_vat_amount: Decimal,
    /// Post-discount, post-tax payable/receivable amount.
    pub grand_total: Decimal,
    /// Mirrors `grand_total`; reserved for payment-applied balances.
    pub net_amount: Decimal,
}

/// Per-line derived amounts, refreshed on every recompute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDerived {
    /// Unit amount times effective quantity, before tax.
    pub line_subtotal: Decimal,
    /// VAT attributable to this line, aggregated only at the header.
    pub vat_amount: Decimal,
    /// Displayed per-line total. Equals `line_subtotal`: the line total
    /// excludes the line's own VAT.
    pub line_total: Decimal,
}

/// Aggregate for one invoice/return document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// Document number (voucher or reference, depending on kind).
    pub voucher_no: String,
    /// Issue date of the document.
    pub issue_date: NaiveDate,
    /// Payment/refund term length in calendar days.
    pub days: i64,
    /// Derived payment due date; stays stale when `days` drops to zero.
    pub due_date: Option<NaiveDate>,
    /// Discount percentage applied to the goods value. Not clamped: values
    /// outside 0-100 flow through the arithmetic unmodified.
    pub discount_percent: Decimal,
    /// Whether the document is denominated in a foreign currency.
    pub foreign_currency: bool,
    /// Currency code. Informational, passed through to the payload.
    pub currency: String,
    /// Exchange rate. Informational only, never applied to totals.
    pub currency_rate: Decimal,
    /// Derived aggregate totals.
    pub totals: HeaderTotals,
}

impl InvoiceHeader {
    /// Creates an empty header issued on the given date.
    #[must_use]
    pub fn new(issue_date: NaiveDate) -> Self {
        Self {
            voucher_no: String::new(),
            issue_date,
            days: 0,
            due_date: None,
            discount_percent: Decimal::ZERO,
            foreign_currency: false,
            currency: String::new(),
            currency_rate: Decimal::ZERO,
            totals: HeaderTotals::default(),
        }
    }
}
