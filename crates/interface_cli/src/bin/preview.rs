//! Proforma preview binary
//!
//! Expands a proforma template against a total and prints the resulting
//! journal lines, column totals and balance status as JSON.
//!
//! # Usage
//!
//! ```bash
//! PROFORMA_TEMPLATE=sales-with-tax PROFORMA_AMOUNT=1000 cargo run --bin proforma-preview
//! ```
//!
//! # Environment Variables
//!
//! * `PROFORMA_TEMPLATE` - Template id (default: sales)
//! * `PROFORMA_AMOUNT` - Total amount (default: 0)
//! * `PROFORMA_CATALOG_PATH` - TOML or JSON catalog replacing the built-in templates
//! * `PROFORMA_STRICT` - Fail on unknown templates or unreadable amounts (default: false)
//! * `PROFORMA_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `PROFORMA_LOG_FORMAT` - pretty or json (default: pretty)

use anyhow::Context;
use interface_cli::{catalog, preview, telemetry, PreviewConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = PreviewConfig::from_env().context("failed to read PROFORMA_* configuration")?;
    telemetry::init_tracing(&config.log_level, config.log_format);
    config.validate()?;

    tracing::debug!(
        template = %config.template,
        amount = %config.amount,
        "Starting proforma preview"
    );

    let expander = catalog::expander_for(&config)?;
    let report = preview::build_report(&expander, &config)?;

    if !report.balanced {
        tracing::warn!(
            debit = %report.totals.debit,
            credit = %report.totals.credit,
            "Expanded entry is unbalanced"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
