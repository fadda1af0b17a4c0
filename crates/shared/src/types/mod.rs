//! Common types used across the application.

pub mod field;
pub mod id;

pub use field::{parse_amount, parse_count, parse_identifier, parse_quantity};
pub use id::*;
