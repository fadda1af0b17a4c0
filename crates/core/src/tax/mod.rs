//! VAT code vocabulary and rates.
//!
//! This module implements the fixed tax table:
//! - Closed set of VAT codes with their percentage rates
//! - Lenient code resolution for entry forms
//! - Strict parsing for callers that need rejection instead of defaults

pub mod code;

#[cfg(test)]
mod props;

pub use code::{ParseTaxCodeError, TaxCode};
