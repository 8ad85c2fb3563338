//! Test Data Builders
//!
//! Builders for journal lines and filled-in forms, so tests only spell out
//! the fields they care about.

use chrono::NaiveDate;
use core_kernel::AmountField;
use domain_ledger::{JournalEntryForm, JournalLine};

use crate::fixtures::DateFixtures;

/// Builder for journal lines as a user would type them
#[derive(Debug, Clone, Default)]
pub struct JournalLineBuilder {
    account: String,
    description: String,
    debit: String,
    credit: String,
}

impl JournalLineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn debit(mut self, debit: impl Into<String>) -> Self {
        self.debit = debit.into();
        self
    }

    pub fn credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = credit.into();
        self
    }

    pub fn build(self) -> JournalLine {
        JournalLine {
            account: self.account,
            description: self.description,
            debit: AmountField::parse(&self.debit),
            credit: AmountField::parse(&self.credit),
        }
    }
}

/// Shorthand for a debit line
pub fn debit_line(account: &str, amount: &str) -> JournalLine {
    JournalLineBuilder::new().account(account).debit(amount).build()
}

/// Shorthand for a credit line
pub fn credit_line(account: &str, amount: &str) -> JournalLine {
    JournalLineBuilder::new().account(account).credit(amount).build()
}

/// Builder for a journal entry form with header fields filled in
pub struct JournalEntryFormBuilder {
    date: NaiveDate,
    reference: String,
    description: String,
    lines: Vec<JournalLine>,
}

impl Default for JournalEntryFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalEntryFormBuilder {
    pub fn new() -> Self {
        Self {
            date: DateFixtures::posting_date(),
            reference: "JE-001".to_string(),
            description: "Monthly rent".to_string(),
            lines: vec![
                debit_line("Rent Expense", "1200.00"),
                credit_line("Cash", "1200.00"),
            ],
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn lines(mut self, lines: Vec<JournalLine>) -> Self {
        self.lines = lines;
        self
    }

    pub fn build(self) -> JournalEntryForm {
        let mut form = JournalEntryForm::dated(self.date);
        form.set_reference(self.reference);
        form.set_description(self.description);
        form.replace_lines(self.lines);
        form
    }
}
