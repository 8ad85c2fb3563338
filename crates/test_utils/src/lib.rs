//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! proforma ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built templates, dates and amounts
//! - `builders`: Builder patterns for journal lines and forms
//! - `assertions`: Custom assertion helpers for journal lines
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
