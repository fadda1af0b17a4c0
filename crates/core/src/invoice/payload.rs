//! Submission payload assembly.
//!
//! The backend expects one JSON shape per document kind, differing only in
//! field names and where the item array sits: invoice kinds nest it on the
//! first journal line (`purchaseItems`/`saleItems`), return kinds embed it
//! at the top level (`purchaseReturnItems`/`saleReturnItems`). Sales
//! documents label the document number `referenceNo` and the issue date
//! `date`; purchase documents use `voucherNo`/`voucherDate`.
//!
//! Monetary fields go out as JSON numbers, identifiers as integers, dates
//! as ISO-8601 datetime strings at midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::tax::TaxCode;

use super::draft::InvoiceDraft;
use super::journal::{EntrySide, JournalLine};
use super::line::LineItem;
use super::types::DocumentKind;

/// One line item as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    /// Catalog item identifier, zero when unselected.
    pub item_id: i64,
    /// Unit of measure identifier, zero when unselected.
    pub unit_id: i64,
    /// Entered quantity; omitted for return kinds, which never collect it.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub quantity: Option<Decimal>,
    /// Unit cost; present on purchase documents.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub cost: Option<Decimal>,
    /// Unit price; present on sales documents.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    /// Tax code string; empty for an untaxed line.
    pub tax_code: String,
    /// Whether the entered amount already contains tax.
    pub tax_included: bool,
    /// Pre-tax line subtotal.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// VAT attributable to this line.
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_amount: Decimal,
    /// Displayed line total (pre-tax).
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// One journal line as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLinePayload {
    /// Chart of accounts identifier, zero when unselected.
    pub account_id: i64,
    /// `Dr` or `Cr`.
    pub entry_type: EntrySide,
    /// Manually entered line amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Bank name, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Cheque number, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheque_no: Option<String>,
    /// Cheque date, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheque_date: Option<DateTime<Utc>>,
    /// Full item array, nested on the first line of purchase invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_items: Option<Vec<LineItemPayload>>,
    /// Full item array, nested on the first line of sales invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_items: Option<Vec<LineItemPayload>>,
}

/// The assembled document, ready for the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    /// Document number for purchase documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_no: Option<String>,
    /// Document number for sales documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    /// Issue date for purchase documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_date: Option<DateTime<Utc>>,
    /// Issue date for sales documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Payment/refund term length in days.
    pub days: i64,
    /// Derived due date; omitted while unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the document is denominated in a foreign currency.
    pub foreign_currency: bool,
    /// Currency code.
    pub currency: String,
    /// Exchange rate, informational.
    #[serde(with = "rust_decimal::serde::float")]
    pub currency_rate: Decimal,
    /// Discount percentage.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    /// Pre-discount, pre-tax goods value.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Aggregated VAT.
    #[serde(rename = "totalVATAmount", with = "rust_decimal::serde::float")]
    pub total_vat_amount: Decimal,
    /// Post-discount, post-tax amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
    /// Mirrors the grand total.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_amount: Decimal,
    /// Journal lines; invoice kinds only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<JournalLinePayload>>,
    /// Item array embedded at the top level; purchase returns only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_return_items: Option<Vec<LineItemPayload>>,
    /// Item array embedded at the top level; sales returns only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_return_items: Option<Vec<LineItemPayload>>,
}

fn at_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

impl LineItemPayload {
    /// Converts a line item to its wire form for the given kind.
    #[must_use]
    pub fn from_item(kind: DocumentKind, item: &LineItem) -> Self {
        Self {
            item_id: item.item_id.into_inner(),
            unit_id: item.unit_id.into_inner(),
            quantity: kind.multiplies_quantity().then_some(item.quantity),
            cost: (!kind.is_sales()).then_some(item.unit_amount),
            price: kind.is_sales().then_some(item.unit_amount),
            tax_code: item.tax_code.map_or("", TaxCode::as_str).to_string(),
            tax_included: item.tax_included,
            subtotal: item.derived.line_subtotal,
            vat_amount: item.derived.vat_amount,
            total: item.derived.line_total,
        }
    }
}

impl JournalLinePayload {
    /// Converts a journal line to its wire form, without nested items.
    #[must_use]
    pub fn from_line(line: &JournalLine) -> Self {
        Self {
            account_id: line.account_id.into_inner(),
            entry_type: line.entry_side,
            amount: line.amount,
            bank_name: line.bank_name.clone(),
            cheque_no: line.cheque_no.clone(),
            cheque_date: line.cheque_date.map(at_midnight_utc),
            purchase_items: None,
            sale_items: None,
        }
    }
}

impl DocumentPayload {
    /// Assembles the full submission value for a draft.
    #[must_use]
    pub fn from_draft(draft: &InvoiceDraft) -> Self {
        let kind = draft.kind;
        let header = &draft.header;
        let issued = at_midnight_utc(header.issue_date);
        let items: Vec<LineItemPayload> = draft
            .items
            .iter()
            .map(|item| LineItemPayload::from_item(kind, item))
            .collect();

        let (voucher_no, reference_no, voucher_date, date) = if kind.is_sales() {
            (None, Some(header.voucher_no.clone()), None, Some(issued))
        } else {
            (Some(header.voucher_no.clone()), None, Some(issued), None)
        };

        let mut lines = None;
        let mut purchase_return_items = None;
        let mut sale_return_items = None;
        if kind.carries_journal() {
            let mut journal: Vec<JournalLinePayload> =
                draft.journal.iter().map(JournalLinePayload::from_line).collect();
            if let Some(first) = journal.first_mut() {
                if kind.is_sales() {
                    first.sale_items = Some(items);
                } else {
                    first.purchase_items = Some(items);
                }
            }
            lines = Some(journal);
        } else if kind.is_sales() {
            sale_return_items = Some(items);
        } else {
            purchase_return_items = Some(items);
        }

        Self {
            voucher_no,
            reference_no,
            voucher_date,
            date,
            days: header.days,
            due_date: header.due_date.map(at_midnight_utc),
            foreign_currency: header.foreign_currency,
            currency: header.currency.clone(),
            currency_rate: header.currency_rate,
            discount: header.discount_percent,
            subtotal: header.totals.subtotal,
            total_vat_amount: header.totals.total_vat_amount,
            grand_total: header.totals.grand_total,
            net_amount: header.totals.net_amount,
            lines,
            purchase_return_items,
            sale_return_items,
        }
    }
}
