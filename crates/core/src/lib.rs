//! Invoice computation engine for Daftar.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, tax rules, and document calculations live here.
//!
//! # Modules
//!
//! - `tax` - VAT code vocabulary and rates
//! - `invoice` - Invoice/return documents: lines, journals, totals, drafts

pub mod invoice;
pub mod tax;
