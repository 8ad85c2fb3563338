//! Business transactions and their journal previews
//!
//! A transaction is entered as a single amount under one of four kinds.
//! Each kind is backed by a proforma template, so the form can show the
//! journal lines the transaction will produce while the amount is typed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Amount, AmountField, TransactionId};
use crate::error::{FieldError, LedgerError};
use crate::journal::JournalLine;
use crate::proforma::ProformaExpander;

/// Kind of transaction, one per tab of the transaction dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[default]
    Invoice,
    Payment,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 4] = [
        TransactionKind::Invoice,
        TransactionKind::Payment,
        TransactionKind::Expense,
        TransactionKind::Transfer,
    ];

    /// Template used to preview this kind's journal lines
    pub fn template_id(&self) -> &'static str {
        match self {
            TransactionKind::Invoice => "sales",
            TransactionKind::Payment => "payment",
            TransactionKind::Expense => "purchase",
            TransactionKind::Transfer => "vendor-payment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Invoice => "Invoice",
            TransactionKind::Payment => "Payment",
            TransactionKind::Expense => "Expense",
            TransactionKind::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LedgerError::Validation(vec![FieldError::new(
                    "type",
                    "Transaction type is required",
                )])
            })
    }
}

/// Processing state of a recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub reference: String,
    /// Customer or vendor
    pub counterparty: String,
    pub amount: Amount,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// The transaction dialog's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub date: Option<NaiveDate>,
    pub kind: TransactionKind,
    pub reference: String,
    pub counterparty: String,
    pub amount: AmountField,
    pub description: String,
    pub status: TransactionStatus,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            kind,
            reference: String::new(),
            counterparty: String::new(),
            amount: AmountField::Empty,
            description: String::new(),
            status: TransactionStatus::default(),
        }
    }

    pub fn set_amount(&mut self, input: &str) {
        self.amount = AmountField::parse(input);
    }

    /// Journal lines this transaction would produce
    ///
    /// `None` until a nonzero amount has been entered.
    pub fn journal_preview(&self, expander: &ProformaExpander) -> Option<Vec<JournalLine>> {
        let amount = self.amount.as_amount();
        if amount.is_zero() {
            return None;
        }
        Some(expander.expand(self.kind.template_id(), amount))
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.date.is_none() {
            errors.push(FieldError::new("date", "Date is required"));
        }
        if self.reference.trim().is_empty() {
            errors.push(FieldError::new("reference", "Reference number is required"));
        }
        if self.counterparty.trim().is_empty() {
            errors.push(FieldError::new("customer", "Customer/Vendor name is required"));
        }
        if !self.amount.as_amount().is_positive() {
            errors.push(FieldError::new("amount", "Amount must be greater than zero"));
        }
        errors
    }

    /// Records the transaction along with its journal lines
    pub fn submit(
        &self,
        expander: &ProformaExpander,
    ) -> Result<(Transaction, Vec<JournalLine>), LedgerError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(LedgerError::Validation(errors));
        }
        let date = self.date.ok_or_else(|| {
            LedgerError::Validation(vec![FieldError::new("date", "Date is required")])
        })?;
        let amount = self.amount.as_amount();
        let description = Some(self.description.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let transaction = Transaction {
            id: TransactionId::new_v7(),
            date,
            kind: self.kind,
            reference: self.reference.trim().to_string(),
            counterparty: self.counterparty.trim().to_string(),
            amount,
            description,
            status: self.status,
            created_at: Utc::now(),
        };
        let lines = expander.expand(self.kind.template_id(), amount);
        Ok((transaction, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_templates() {
        assert_eq!(TransactionKind::Invoice.template_id(), "sales");
        assert_eq!(TransactionKind::Expense.template_id(), "purchase");
        assert_eq!(TransactionKind::Transfer.template_id(), "vendor-payment");
    }

    #[test]
    fn test_kind_from_label() {
        assert_eq!("payment".parse::<TransactionKind>().unwrap(), TransactionKind::Payment);
        assert!("refund".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_preview_waits_for_amount() {
        let expander = ProformaExpander::default();
        let mut draft = TransactionDraft::new(
            TransactionKind::Payment,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        assert!(draft.journal_preview(&expander).is_none());

        draft.set_amount("250.50");
        let lines = draft.journal_preview(&expander).unwrap();
        assert_eq!(lines[0].account, "Cash");
        assert_eq!(lines[0].debit.display(), "250.50");
    }
}
