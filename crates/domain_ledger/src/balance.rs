//! Double-entry balance validation
//!
//! A journal entry may be submitted only when its debits equal its credits
//! and it has at least two lines. Both checks are pure reports over the
//! lines; nothing here mutates them.
//!
//! Empty and unreadable amount fields count as zero so that totals can be
//! recomputed on every keystroke while a number is still being typed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, AmountError};
use crate::journal::JournalLine;

/// Largest debit/credit difference still treated as balanced
///
/// Amounts are decimal, so this only matters for lines carrying more than
/// two decimal places. It is well below one cent and must stay that way.
pub const BALANCE_TOLERANCE: Decimal = dec!(0.001);

/// A journal entry needs at least one debit leg and one credit leg
pub const MINIMUM_LINES: usize = 2;

/// Summed debit and credit columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JournalTotals {
    pub debit: Amount,
    pub credit: Amount,
}

impl JournalTotals {
    /// Sums both columns, failing if either overflows
    pub fn try_compute(lines: &[JournalLine]) -> Result<Self, AmountError> {
        lines.iter().try_fold(Self::default(), |totals, line| {
            Ok(Self {
                debit: totals.debit.checked_add(line.debit_amount())?,
                credit: totals.credit.checked_add(line.credit_amount())?,
            })
        })
    }

    /// Sums both columns for display
    ///
    /// A column that overflows is clamped; use [`try_compute`](Self::try_compute)
    /// when the exact figure matters.
    pub fn compute(lines: &[JournalLine]) -> Self {
        lines.iter().fold(Self::default(), |totals, line| Self {
            debit: totals.debit.saturating_add(line.debit_amount()),
            credit: totals.credit.saturating_add(line.credit_amount()),
        })
    }

    /// Debits minus credits
    pub fn difference(&self) -> Amount {
        self.debit.saturating_sub(self.credit)
    }

    pub fn is_balanced(&self) -> bool {
        self.difference().value().abs() < BALANCE_TOLERANCE
    }

    pub fn status(&self) -> BalanceStatus {
        if self.is_balanced() {
            BalanceStatus::Balanced
        } else {
            BalanceStatus::Unbalanced
        }
    }
}

/// The two-state submission gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    Balanced,
    Unbalanced,
}

/// Returns true when total debits equal total credits
///
/// Columns too large to sum are reported as unbalanced.
pub fn is_balanced(lines: &[JournalLine]) -> bool {
    JournalTotals::try_compute(lines).map_or(false, |totals| totals.is_balanced())
}

/// Returns true when there are enough lines to form an entry
pub fn has_minimum_lines(lines: &[JournalLine]) -> bool {
    lines.len() >= MINIMUM_LINES
}

/// Everything the form needs to decide whether submission is allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    pub totals: JournalTotals,
    pub line_count: usize,
    pub balanced: bool,
    pub enough_lines: bool,
}

impl BalanceCheck {
    pub fn can_submit(&self) -> bool {
        self.balanced && self.enough_lines
    }
}

/// Runs both predicates over the lines
pub fn check(lines: &[JournalLine]) -> BalanceCheck {
    let (totals, balanced) = match JournalTotals::try_compute(lines) {
        Ok(totals) => (totals, totals.is_balanced()),
        Err(_) => (JournalTotals::compute(lines), false),
    };
    BalanceCheck {
        totals,
        line_count: lines.len(),
        balanced,
        enough_lines: has_minimum_lines(lines),
    }
}
