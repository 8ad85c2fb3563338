//! Journal lines and entries
//!
//! A `JournalLine` is the editable unit the forms work with: an account, an
//! optional note and two amount fields. A `JournalEntry` is what a submitted,
//! validated form becomes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, AmountField, JournalEntryId};
use crate::balance::JournalTotals;
use crate::proforma::Polarity;

/// One account-level debit or credit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account name
    pub account: String,
    /// Free-text note for this line
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub debit: AmountField,
    #[serde(default)]
    pub credit: AmountField,
}

impl JournalLine {
    /// A line with nothing filled in
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a debit line
    pub fn debit(account: impl Into<String>, amount: Amount) -> Self {
        Self {
            account: account.into(),
            description: String::new(),
            debit: AmountField::currency(amount),
            credit: AmountField::Empty,
        }
    }

    /// Creates a credit line
    pub fn credit(account: impl Into<String>, amount: Amount) -> Self {
        Self {
            account: account.into(),
            description: String::new(),
            debit: AmountField::Empty,
            credit: AmountField::currency(amount),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Debit contribution, zero when empty or unreadable
    pub fn debit_amount(&self) -> Amount {
        self.debit.as_amount()
    }

    /// Credit contribution, zero when empty or unreadable
    pub fn credit_amount(&self) -> Amount {
        self.credit.as_amount()
    }

    /// True when both sides carry a nonzero amount
    ///
    /// The forms never produce this, but lines deserialised from elsewhere can.
    pub fn has_both_sides(&self) -> bool {
        !self.debit_amount().is_zero() && !self.credit_amount().is_zero()
    }

    /// Which side this line was entered on, if exactly one
    pub fn polarity(&self) -> Option<Polarity> {
        match (self.debit.is_entered(), self.credit.is_entered()) {
            (true, false) => Some(Polarity::Debit),
            (false, true) => Some(Polarity::Credit),
            _ => None,
        }
    }

    /// True when no field has been filled in
    pub fn is_blank(&self) -> bool {
        self.account.is_empty()
            && self.description.is_empty()
            && !self.debit.is_entered()
            && !self.credit.is_entered()
    }
}

/// A dated, referenced, balanced set of journal lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub date: NaiveDate,
    /// Reference code, e.g. `JE-001`
    pub reference: String,
    pub description: String,
    pub lines: Vec<JournalLine>,
    pub totals: JournalTotals,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_line_is_blank() {
        let line = JournalLine::empty();
        assert!(line.is_blank());
        assert_eq!(line.polarity(), None);
    }

    #[test]
    fn test_debit_line() {
        let line = JournalLine::debit("Cash", Amount::new(dec!(250.5)));
        assert_eq!(line.debit.display(), "250.50");
        assert_eq!(line.credit, AmountField::Empty);
        assert_eq!(line.polarity(), Some(Polarity::Debit));
        assert!(line.credit_amount().is_zero());
    }

    #[test]
    fn test_has_both_sides() {
        let mut line = JournalLine::debit("Cash", Amount::new(dec!(10)));
        assert!(!line.has_both_sides());
        line.credit = AmountField::parse("5");
        assert!(line.has_both_sides());
        assert_eq!(line.polarity(), None);
    }
}
