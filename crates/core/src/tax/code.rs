//! The fixed VAT code table.
//!
//! CRITICAL: the code set is closed. Unknown codes are unrepresentable past
//! this boundary, so downstream reporting can never silently merge "no tax
//! at all" with an explicit zero-rate code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// VAT codes recognized by the invoice forms.
///
/// An untaxed line carries no code at all (`Option::None`), which is
/// semantically distinct from [`TaxCode::Exempt`] and
/// [`TaxCode::ZeroRated`] even though all three produce zero VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCode {
    /// Standard reduced rate, 5%.
    #[serde(rename = "VAT_5")]
    Vat5,
    /// Standard rate, 15%.
    #[serde(rename = "VAT_15")]
    Vat15,
    /// Exempt supply, 0%.
    #[serde(rename = "EXEMPT")]
    Exempt,
    /// Zero-rated supply, 0%.
    #[serde(rename = "ZERO_RATED")]
    ZeroRated,
}

/// Error returned when a tax code string is not in the fixed table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tax code: {0:?}")]
pub struct ParseTaxCodeError(pub String);

impl TaxCode {
    /// Looks up a wire/form code, returning `None` for anything outside
    /// the table (including the empty string, which forms send for an
    /// untaxed line). This is the lenient, form-facing resolver.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "VAT_5" => Some(Self::Vat5),
            "VAT_15" => Some(Self::Vat15),
            "EXEMPT" => Some(Self::Exempt),
            "ZERO_RATED" => Some(Self::ZeroRated),
            _ => None,
        }
    }

    /// Returns the wire/form code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vat5 => "VAT_5",
            Self::Vat15 => "VAT_15",
            Self::Exempt => "EXEMPT",
            Self::ZeroRated => "ZERO_RATED",
        }
    }

    /// Returns the percentage rate for this code.
    #[must_use]
    pub fn rate(self) -> Decimal {
        match self {
            Self::Vat5 => Decimal::from(5),
            Self::Vat15 => Decimal::from(15),
            Self::Exempt | Self::ZeroRated => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for TaxCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaxCode {
    type Err = ParseTaxCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseTaxCodeError(s.to_string()))
    }
}
