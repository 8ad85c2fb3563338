//! Journal entry form state
//!
//! Holds the lines a user is editing and applies the interaction rules of
//! the journal entry dialog: typing an amount on one side clears the other
//! side, an entry keeps at least two lines, and applying a template
//! replaces every line. Submission runs the balance checks and turns the
//! form into a [`JournalEntry`].

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Amount, AmountField, JournalEntryId};
use crate::balance::{self, BalanceCheck, JournalTotals, MINIMUM_LINES};
use crate::error::{FieldError, LedgerError};
use crate::journal::{JournalEntry, JournalLine};
use crate::proforma::ProformaExpander;

/// Date format used by the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An in-progress journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryForm {
    pub date: Option<NaiveDate>,
    pub reference: String,
    pub description: String,
    lines: Vec<JournalLine>,
}

impl Default for JournalEntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalEntryForm {
    /// A fresh form dated today with two blank lines
    pub fn new() -> Self {
        Self::dated(Utc::now().date_naive())
    }

    /// A fresh form with a given date
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            reference: String::new(),
            description: String::new(),
            lines: vec![JournalLine::empty(); MINIMUM_LINES],
        }
    }

    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Reads the date input; unreadable text clears the date
    pub fn set_date(&mut self, input: &str) {
        self.date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok();
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_account(
        &mut self,
        index: usize,
        account: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.line_mut(index)?.account = account.into();
        Ok(())
    }

    pub fn set_line_description(
        &mut self,
        index: usize,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.line_mut(index)?.description = description.into();
        Ok(())
    }

    /// Stores a debit; a non-empty debit clears the credit
    pub fn set_debit(&mut self, index: usize, input: &str) -> Result<(), LedgerError> {
        let line = self.line_mut(index)?;
        line.debit = AmountField::parse(input);
        if line.debit.is_entered() {
            line.credit = AmountField::Empty;
        }
        Ok(())
    }

    /// Stores a credit; a non-empty credit clears the debit
    pub fn set_credit(&mut self, index: usize, input: &str) -> Result<(), LedgerError> {
        let line = self.line_mut(index)?;
        line.credit = AmountField::parse(input);
        if line.credit.is_entered() {
            line.debit = AmountField::Empty;
        }
        Ok(())
    }

    /// Appends a blank line
    pub fn add_line(&mut self) {
        self.lines.push(JournalLine::empty());
    }

    /// Removes a line, keeping at least two
    pub fn remove_line(&mut self, index: usize) -> Result<JournalLine, LedgerError> {
        if index >= self.lines.len() {
            return Err(LedgerError::LineNotFound(index));
        }
        if self.lines.len() <= MINIMUM_LINES {
            return Err(LedgerError::MinimumLines {
                required: MINIMUM_LINES,
                actual: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// True when the remove control should be enabled
    pub fn can_remove_lines(&self) -> bool {
        self.lines.len() > MINIMUM_LINES
    }

    /// Replaces every line with a template expansion
    pub fn apply_template(
        &mut self,
        expander: &ProformaExpander,
        template_id: &str,
        total: Amount,
    ) {
        self.lines = expander.expand(template_id, total);
        debug!(
            template = template_id,
            lines = self.lines.len(),
            "Applied template to journal entry form"
        );
    }

    /// Replaces every line wholesale
    pub fn replace_lines(&mut self, lines: Vec<JournalLine>) {
        self.lines = lines;
    }

    pub fn totals(&self) -> JournalTotals {
        JournalTotals::compute(&self.lines)
    }

    pub fn check(&self) -> BalanceCheck {
        balance::check(&self.lines)
    }

    pub fn can_submit(&self) -> bool {
        self.check().can_submit()
    }

    /// Collects every field-level problem
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.date.is_none() {
            errors.push(FieldError::new("date", "Date is required"));
        }
        if self.reference.trim().is_empty() {
            errors.push(FieldError::new("reference", "Reference number is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.account.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("lines.{}.account", index),
                    "Account is required",
                ));
            }
        }

        let report = self.check();
        if !report.enough_lines {
            errors.push(FieldError::new("lines", "At least two lines are required"));
        }
        if !report.balanced {
            errors.push(FieldError::new("lines", "Total debits must equal total credits"));
        }

        errors
    }

    /// Turns the form into an entry and resets it to a fresh form dated today
    pub fn submit(&mut self) -> Result<JournalEntry, LedgerError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(LedgerError::Validation(errors));
        }
        let date = self.date.ok_or_else(|| {
            LedgerError::Validation(vec![FieldError::new("date", "Date is required")])
        })?;

        let entry = JournalEntry {
            id: JournalEntryId::new_v7(),
            date,
            reference: self.reference.trim().to_string(),
            description: self.description.trim().to_string(),
            totals: self.totals(),
            lines: std::mem::take(&mut self.lines),
            created_at: Utc::now(),
        };

        *self = Self::new();
        Ok(entry)
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut JournalLine, LedgerError> {
        self.lines.get_mut(index).ok_or(LedgerError::LineNotFound(index))
    }
}
