//! Core Kernel - Foundational types for the proforma ledger
//!
//! This crate provides the building blocks used by the ledger domain:
//! - Decimal amounts with two-place currency formatting
//! - Tri-state amount fields for debit/credit inputs
//! - Strongly typed identifiers

pub mod amount;
pub mod identifiers;
pub mod error;

pub use amount::{Amount, AmountError, AmountField, CURRENCY_DECIMAL_PLACES, MAX_INPUT_MAGNITUDE};
pub use identifiers::{AccountId, JournalEntryId, TemplateId, TransactionId};
pub use error::CoreError;
