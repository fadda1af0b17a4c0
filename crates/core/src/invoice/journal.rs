//! Journal line domain types.

use chrono::NaiveDate;
use daftar_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side of a double-entry journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySide {
    /// Debit entry.
    #[serde(rename = "Dr")]
    Debit,
    /// Credit entry.
    #[serde(rename = "Cr")]
    Credit,
}

/// Error returned when an entry-side string is neither `Dr` nor `Cr`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown entry side: {0:?}")]
pub struct ParseEntrySideError(pub String);

impl EntrySide {
    /// Resolves a form value, defaulting to debit on anything unknown.
    /// New journal rows start as debits.
    #[must_use]
    pub fn from_field(input: &str) -> Self {
        input.parse().unwrap_or(Self::Debit)
    }

    /// Returns the wire form, `Dr` or `Cr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "Dr",
            Self::Credit => "Cr",
        }
    }
}

impl std::fmt::Display for EntrySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntrySide {
    type Err = ParseEntrySideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dr" => Ok(Self::Debit),
            "Cr" => Ok(Self::Credit),
            _ => Err(ParseEntrySideError(s.to_string())),
        }
    }
}

/// A double-entry accounting line attached to an invoice header.
///
/// The amount is entered manually and is not derived from the line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Chart of accounts reference, zero when unselected.
    pub account_id: AccountId,
    /// Debit or credit.
    pub entry_side: EntrySide,
    /// Manually entered amount.
    pub amount: Decimal,
    /// Bank name, for bank-settled lines.
    pub bank_name: Option<String>,
    /// Cheque number, when settled by cheque.
    pub cheque_no: Option<String>,
    /// Cheque date, when settled by cheque.
    pub cheque_date: Option<NaiveDate>,
}

impl JournalLine {
    /// Creates a fresh row with the entry-form defaults: a zero-amount
    /// debit with no banking metadata.
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_id: AccountId::default(),
            entry_side: EntrySide::Debit,
            amount: Decimal::ZERO,
            bank_name: None,
            cheque_no: None,
            cheque_date: None,
        }
    }
}

impl Default for JournalLine {
    fn default() -> Self {
        Self::new()
    }
}
