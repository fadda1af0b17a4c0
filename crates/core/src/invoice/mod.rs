//! Invoice and return documents.
//!
//! This module implements the four document entry flows:
//! - Line items and their derived amounts
//! - Journal lines (double-entry, invoice kinds only)
//! - Pure totals computation (VAT, discount cascade, grand total)
//! - Payment-term due dates
//! - The draft container (mutate, then recompute)
//! - Submission payload assembly

pub mod draft;
pub mod journal;
pub mod line;
pub mod payload;
pub mod terms;
pub mod totals;
pub mod types;

#[cfg(test)]
mod totals_props;

pub use draft::InvoiceDraft;
pub use journal::{EntrySide, JournalLine, ParseEntrySideError};
pub use line::LineItem;
pub use payload::{DocumentPayload, JournalLinePayload, LineItemPayload};
pub use terms::due_date;
pub use totals::{header_totals, line_derived};
pub use types::{DocumentKind, HeaderTotals, InvoiceHeader, LineDerived};
