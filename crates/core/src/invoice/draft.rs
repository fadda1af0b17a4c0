//! In-progress document state.
//!
//! `InvoiceDraft` is the single state container behind all four entry
//! flows. Every mutator follows the same contract: apply the edit, then
//! recompute every derived field from scratch. Callers that mutate the
//! public fields directly must call [`InvoiceDraft::recompute`] themselves
//! to restore the derived state.

use chrono::{NaiveDate, Utc};
use daftar_shared::types::{AccountId, ItemId, UnitId, parse_amount, parse_count, parse_quantity};

use crate::tax::TaxCode;

use super::journal::{EntrySide, JournalLine};
use super::line::LineItem;
use super::payload::DocumentPayload;
use super::terms;
use super::totals;
use super::types::{DocumentKind, InvoiceHeader};

/// One invoice or return document being entered.
///
/// Both collections keep a floor of one row: the forms always render at
/// least one line, so removing the last remaining row is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    /// Which of the four flows this draft belongs to.
    pub kind: DocumentKind,
    /// Header fields and derived totals.
    pub header: InvoiceHeader,
    /// Line items, never empty.
    pub items: Vec<LineItem>,
    /// Journal lines; seeded for invoice kinds, unused by return kinds.
    pub journal: Vec<JournalLine>,
}

impl InvoiceDraft {
    /// Creates a draft issued today.
    #[must_use]
    pub fn new(kind: DocumentKind) -> Self {
        Self::with_issue_date(kind, Utc::now().date_naive())
    }

    /// Creates a draft issued on the given date, seeded with one default
    /// line item and, for invoice kinds, one default journal line.
    #[must_use]
    pub fn with_issue_date(kind: DocumentKind, issue_date: NaiveDate) -> Self {
        let journal = if kind.carries_journal() {
            vec![JournalLine::new()]
        } else {
            Vec::new()
        };
        Self {
            kind,
            header: InvoiceHeader::new(issue_date),
            items: vec![LineItem::new()],
            journal,
        }
    }

    /// Recomputes every derived field from the current inputs: all line
    /// amounts, the header totals, and the due date.
    pub fn recompute(&mut self) {
        for item in &mut self.items {
            item.derived = totals::line_derived(self.kind, item);
        }
        self.header.totals =
            totals::header_totals(self.kind, &self.items, self.header.discount_percent);
        self.header.due_date =
            terms::due_date(self.header.issue_date, self.header.days, self.header.due_date);
    }

    /// Assembles the submission payload for this draft's kind.
    #[must_use]
    pub fn payload(&self) -> DocumentPayload {
        DocumentPayload::from_draft(self)
    }

    // ========== Line item collection ==========

    /// Appends a default line item row.
    pub fn add_line_item(&mut self) {
        self.items.push(LineItem::new());
        self.recompute();
    }

    /// Removes the line item at `index`. Removing the sole remaining row
    /// (or an out-of-range index) is a no-op.
    pub fn remove_line_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
            self.recompute();
        }
    }

    /// Sets a line's catalog item from a form value.
    pub fn set_item_id(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.item_id = ItemId::from_field(raw);
            self.recompute();
        }
    }

    /// Sets a line's unit of measure from a form value.
    pub fn set_item_unit_id(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_id = UnitId::from_field(raw);
            self.recompute();
        }
    }

    /// Sets a line's quantity from a form value; malformed input falls
    /// back to one unit.
    pub fn set_item_quantity(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = parse_quantity(raw);
            self.recompute();
        }
    }

    /// Sets a line's unit cost/price from a form value; malformed input
    /// falls back to zero.
    pub fn set_item_unit_amount(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_amount = parse_amount(raw);
            self.recompute();
        }
    }

    /// Sets a line's tax code from a form value; anything outside the
    /// fixed table leaves the line untaxed.
    pub fn set_item_tax_code(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.tax_code = TaxCode::from_code(raw);
            self.recompute();
        }
    }

    /// Marks a line's entered amount as containing (or excluding) tax.
    pub fn set_item_tax_included(&mut self, index: usize, included: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.tax_included = included;
            self.recompute();
        }
    }

    // ========== Journal line collection ==========

    /// Appends a default journal line row.
    pub fn add_journal_line(&mut self) {
        self.journal.push(JournalLine::new());
        self.recompute();
    }

    /// Removes the journal line at `index`, keeping the one-row floor.
    pub fn remove_journal_line(&mut self, index: usize) {
        if self.journal.len() > 1 && index < self.journal.len() {
            self.journal.remove(index);
            self.recompute();
        }
    }

    /// Sets a journal line's account from a form value.
    pub fn set_journal_account_id(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.journal.get_mut(index) {
            line.account_id = AccountId::from_field(raw);
            self.recompute();
        }
    }

    /// Sets a journal line's side from a form value (`Dr`/`Cr`); unknown
    /// values fall back to debit.
    pub fn set_journal_entry_side(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.journal.get_mut(index) {
            line.entry_side = EntrySide::from_field(raw);
            self.recompute();
        }
    }

    /// Sets a journal line's manually entered amount.
    pub fn set_journal_amount(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.journal.get_mut(index) {
            line.amount = parse_amount(raw);
            self.recompute();
        }
    }

    /// Sets a journal line's bank name; an empty value clears it.
    pub fn set_journal_bank_name(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.journal.get_mut(index) {
            line.bank_name = non_empty(raw);
            self.recompute();
        }
    }

    /// Sets a journal line's cheque number; an empty value clears it.
    pub fn set_journal_cheque_no(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.journal.get_mut(index) {
            line.cheque_no = non_empty(raw);
            self.recompute();
        }
    }

    /// Sets or clears a journal line's cheque date.
    pub fn set_journal_cheque_date(&mut self, index: usize, date: Option<NaiveDate>) {
        if let Some(line) = self.journal.get_mut(index) {
            line.cheque_date = date;
            self.recompute();
        }
    }

    // ========== Header fields ==========

    /// Sets the document number (voucher or reference, per kind).
    pub fn set_voucher_no(&mut self, raw: &str) {
        self.header.voucher_no = raw.to_string();
        self.recompute();
    }

    /// Sets the issue date, re-deriving the due date.
    pub fn set_issue_date(&mut self, date: NaiveDate) {
        self.header.issue_date = date;
        self.recompute();
    }

    /// Sets the payment term from a form value; malformed input falls
    /// back to zero days.
    pub fn set_days(&mut self, raw: &str) {
        self.header.days = parse_count(raw);
        self.recompute();
    }

    /// Sets the discount percentage from a form value. The value is not
    /// clamped; entries beyond 100 drive the goods value negative.
    pub fn set_discount_percent(&mut self, raw: &str) {
        self.header.discount_percent = parse_amount(raw);
        self.recompute();
    }

    /// Flags the document as foreign-currency.
    pub fn set_foreign_currency(&mut self, foreign: bool) {
        self.header.foreign_currency = foreign;
        self.recompute();
    }

    /// Sets the currency code.
    pub fn set_currency(&mut self, raw: &str) {
        self.header.currency = raw.to_string();
        self.recompute();
    }

    /// Sets the exchange rate from a form value. Informational only.
    pub fn set_currency_rate(&mut self, raw: &str) {
        self.header.currency_rate = parse_amount(raw);
        self.recompute();
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
