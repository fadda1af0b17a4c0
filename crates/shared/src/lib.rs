//! Shared foundation types for Daftar.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe references to catalog entities
//! - Lenient form-field parsing with centralized default policies

pub mod types;
