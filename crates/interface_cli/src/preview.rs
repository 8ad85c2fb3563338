//! Proforma preview reports

use serde::Serialize;

use core_kernel::Amount;
use domain_ledger::{balance, JournalLine, JournalTotals, ProformaExpander};
use crate::config::PreviewConfig;
use crate::error::CliError;

/// What the preview command prints
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub template: String,
    pub total: String,
    pub lines: Vec<JournalLine>,
    pub totals: PreviewTotals,
    pub balanced: bool,
    pub can_submit: bool,
}

/// Column totals formatted for display
#[derive(Debug, Clone, Serialize)]
pub struct PreviewTotals {
    pub debit: String,
    pub credit: String,
}

impl From<JournalTotals> for PreviewTotals {
    fn from(totals: JournalTotals) -> Self {
        Self {
            debit: totals.debit.to_fixed(),
            credit: totals.credit.to_fixed(),
        }
    }
}

/// Expands the configured template and checks the result
///
/// In strict mode an unknown template or an unreadable or negative amount
/// is an error; otherwise they fall back to blank lines and a zero total.
pub fn build_report(
    expander: &ProformaExpander,
    config: &PreviewConfig,
) -> Result<PreviewReport, CliError> {
    let (total, lines) = if config.strict {
        let total = Amount::parse_non_negative(&config.amount)?;
        (total, expander.try_expand(&config.template, total)?)
    } else {
        let total = Amount::parse_lenient(&config.amount);
        (total, expander.expand(&config.template, total))
    };

    let report = balance::check(&lines);
    Ok(PreviewReport {
        template: config.template.clone(),
        total: total.to_fixed(),
        lines,
        totals: report.totals.into(),
        balanced: report.balanced,
        can_submit: report.can_submit(),
    })
}
