//! Chart of accounts
//!
//! Accounts are referenced by name from journal lines and templates. The
//! account dialog produces an [`AccountDraft`] which validates into an
//! [`Account`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{AccountId, Amount};
use crate::error::{FieldError, LedgerError};

/// Types of accounts in the chart of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Asset accounts (debit normal balance)
    Asset,
    /// Liability accounts (credit normal balance)
    Liability,
    /// Equity accounts (credit normal balance)
    Equity,
    /// Revenue accounts (credit normal balance)
    Revenue,
    /// Expense accounts (debit normal balance)
    Expense,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        AccountType::Asset,
        AccountType::Liability,
        AccountType::Equity,
        AccountType::Revenue,
        AccountType::Expense,
    ];

    /// Returns true if this account type has a debit normal balance
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Asset => "Asset",
            AccountType::Liability => "Liability",
            AccountType::Equity => "Equity",
            AccountType::Revenue => "Revenue",
            AccountType::Expense => "Expense",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LedgerError::Validation(vec![FieldError::new("type", "Account type is required")])
            })
    }
}

/// An account in the chart of accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Account code (e.g., "1000")
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    /// Opening balance
    pub balance: Amount,
    pub is_active: bool,
}

impl Account {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: AccountId::new_v7(),
            code: code.into(),
            name: name.into(),
            account_type,
            balance: Amount::zero(),
            is_active: true,
        }
    }

    pub fn with_balance(mut self, balance: Amount) -> Self {
        self.balance = balance;
        self
    }
}

/// The account dialog's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub code: String,
    pub name: String,
    /// Selected type label, empty until chosen
    pub account_type: String,
    /// Opening balance as typed
    pub balance: String,
    pub active: bool,
}

impl Default for AccountDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            account_type: String::new(),
            balance: String::new(),
            active: true,
        }
    }
}

impl AccountDraft {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.code.trim().chars().count() < 3 {
            errors.push(FieldError::new("code", "Account code must be at least 3 characters"));
        }
        if self.name.trim().chars().count() < 2 {
            errors.push(FieldError::new("name", "Account name is required"));
        }
        if self.account_type.parse::<AccountType>().is_err() {
            errors.push(FieldError::new("type", "Account type is required"));
        }
        errors
    }

    /// Builds the account; an unreadable balance counts as zero
    pub fn submit(&self) -> Result<Account, LedgerError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(LedgerError::Validation(errors));
        }
        let account_type = self.account_type.parse()?;
        let mut account = Account::new(self.code.trim(), self.name.trim(), account_type)
            .with_balance(Amount::parse_lenient(&self.balance));
        account.is_active = self.active;
        Ok(account)
    }
}

/// The accounts the built-in templates post to
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    accounts: Vec<Account>,
}

impl ChartOfAccounts {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Account::new("1000", "Cash", AccountType::Asset),
            Account::new("1100", "Accounts Receivable", AccountType::Asset),
            Account::new("1200", "Office Supplies", AccountType::Asset),
            Account::new("2000", "Accounts Payable", AccountType::Liability),
            Account::new("2100", "Sales Tax Payable", AccountType::Liability),
            Account::new("3000", "Retained Earnings", AccountType::Equity),
            Account::new("4000", "Sales Revenue", AccountType::Revenue),
            Account::new("5000", "Rent Expense", AccountType::Expense),
            Account::new("5100", "Salary Expense", AccountType::Expense),
        ])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_is_debit_normal() {
        assert!(AccountType::Asset.is_debit_normal());
        assert!(AccountType::Expense.is_debit_normal());
        assert!(!AccountType::Liability.is_debit_normal());
        assert!(!AccountType::Revenue.is_debit_normal());
    }

    #[test]
    fn test_draft_requires_fields() {
        let errors = AccountDraft::default().validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["code", "name", "type"]);
    }

    #[test]
    fn test_draft_submit_parses_balance_leniently() {
        let draft = AccountDraft {
            code: "1300".to_string(),
            name: "Petty Cash".to_string(),
            account_type: "asset".to_string(),
            balance: "n/a".to_string(),
            active: false,
        };
        let account = draft.submit().unwrap();
        assert_eq!(account.account_type, AccountType::Asset);
        assert!(account.balance.is_zero());
        assert!(!account.is_active);
    }
}
