//! Ledger Domain - Proforma Templates and Double-Entry Validation
//!
//! This crate holds the bookkeeping logic behind the accounting dashboard's
//! forms. Rendering is left to the caller; everything here is a pure
//! function of its inputs or a small piece of form state.
//!
//! # Proforma Expansion
//!
//! A [`ProformaExpander`] is built from a [`TemplateCatalog`] and turns a
//! template id plus a total into ordered [`JournalLine`]s, splitting the
//! total by percentage or fixed amount and placing each value on the debit
//! or credit side.
//!
//! # Balance Validation
//!
//! [`balance::is_balanced`] and [`balance::has_minimum_lines`] gate
//! submission: total debits must equal total credits and an entry needs at
//! least two lines. Empty or unreadable amounts count as zero.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{JournalEntryForm, ProformaExpander};
//!
//! let expander = ProformaExpander::default();
//! let mut form = JournalEntryForm::new();
//! form.apply_template(&expander, "payment", Amount::new(dec!(250.50)));
//! assert!(form.can_submit());
//! ```

pub mod account;
pub mod balance;
pub mod error;
pub mod form;
pub mod journal;
pub mod proforma;
pub mod register;
pub mod transaction;

pub use account::{Account, AccountDraft, AccountType, ChartOfAccounts};
pub use balance::{
    has_minimum_lines, is_balanced, BalanceCheck, BalanceStatus, JournalTotals,
    BALANCE_TOLERANCE, MINIMUM_LINES,
};
pub use error::{FieldError, LedgerError};
pub use form::JournalEntryForm;
pub use journal::{JournalEntry, JournalLine};
pub use proforma::{LineBasis, Polarity, ProformaExpander, Template, TemplateCatalog, TemplateLine};
pub use register::JournalRegister;
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionStatus};
