//! CLI error handling

use core_kernel::{AmountError, CoreError};
use domain_ledger::LedgerError;
use thiserror::Error;

/// Errors surfaced by the preview command
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Catalog error: {0}")]
    Catalog(LedgerError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
