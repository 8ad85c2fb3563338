//! Tests for the journal entry, transaction and account forms and the
//! journal register

use core_kernel::{Amount, AmountError, AmountField};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_ledger::{
    AccountDraft, AccountType, ChartOfAccounts, JournalEntryForm, JournalLine, JournalRegister,
    LedgerError, TransactionDraft, TransactionKind, TransactionStatus,
};
use test_utils::{
    assert_balanced, credit_line, debit_line, DateFixtures, JournalEntryFormBuilder,
    TemplateFixtures,
};

fn field_messages(error: &LedgerError) -> Vec<String> {
    error.field_errors().iter().map(|e| e.message.clone()).collect()
}

// ============================================================================
// Journal Entry Form Tests
// ============================================================================

mod journal_form_tests {
    use super::*;

    #[test]
    fn test_manual_entry_submits() {
        let mut form = JournalEntryForm::dated(DateFixtures::posting_date());
        form.set_reference("JE-042");
        form.set_description("Office supplies");
        form.set_account(0, "Office Supplies").unwrap();
        form.set_debit(0, "75.20").unwrap();
        form.set_account(1, "Cash").unwrap();
        form.set_credit(1, "75.20").unwrap();

        assert!(form.can_submit());
        let entry = form.submit().unwrap();

        assert_eq!(entry.reference, "JE-042");
        assert_eq!(entry.date, DateFixtures::posting_date());
        assert_eq!(entry.line_count(), 2);
        assert_eq!(entry.totals.debit, Amount::new(dec!(75.20)));
        assert_balanced(&entry.lines);
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = JournalEntryFormBuilder::new().build();
        form.submit().unwrap();

        assert_eq!(form.reference, "");
        assert_eq!(form.lines().len(), 2);
        assert!(form.lines().iter().all(|l| l.is_blank()));
        assert_eq!(form.date, Some(chrono::Utc::now().date_naive()));
    }

    #[test]
    fn test_unbalanced_entry_is_rejected() {
        let mut form = JournalEntryFormBuilder::new()
            .lines(vec![debit_line("Cash", "100.00"), credit_line("Sales Revenue", "99.99")])
            .build();

        assert!(!form.can_submit());
        let err = form.submit().unwrap_err();
        assert_eq!(field_messages(&err), vec!["Total debits must equal total credits"]);
        // a rejected submission leaves the lines in place
        assert_eq!(form.lines().len(), 2);
    }

    #[test]
    fn test_single_line_is_rejected() {
        let mut form = JournalEntryFormBuilder::new()
            .lines(vec![debit_line("Cash", "0")])
            .build();
        let err = form.submit().unwrap_err();
        assert!(field_messages(&err).contains(&"At least two lines are required".to_string()));
    }

    #[test]
    fn test_required_header_fields() {
        let mut form = JournalEntryFormBuilder::new()
            .reference("  ")
            .description("")
            .build();
        form.set_date("");

        let fields: Vec<String> = form.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["date", "reference", "description"]);
    }

    #[test]
    fn test_every_line_needs_an_account() {
        let form = JournalEntryFormBuilder::new()
            .lines(vec![debit_line("Cash", "10"), credit_line("", "10")])
            .build();
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "lines.1.account");
        assert_eq!(errors[0].message, "Account is required");
    }

    #[test]
    fn test_typing_credit_clears_debit() {
        let mut form = JournalEntryForm::dated(DateFixtures::posting_date());
        form.set_debit(0, "15").unwrap();
        form.set_credit(0, "15").unwrap();

        let line = &form.lines()[0];
        assert_eq!(line.debit, AmountField::Empty);
        assert_eq!(line.credit.display(), "15");
    }

    #[test]
    fn test_cannot_remove_below_two_lines() {
        let mut form = JournalEntryForm::dated(DateFixtures::posting_date());
        let err = form.remove_line(0).unwrap_err();
        assert!(matches!(err, LedgerError::MinimumLines { required: 2, actual: 2 }));

        form.add_line();
        assert!(form.can_remove_lines());
        form.remove_line(2).unwrap();
        assert_eq!(form.lines().len(), 2);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut form = JournalEntryForm::dated(DateFixtures::posting_date());
        form.add_line();
        assert!(matches!(form.remove_line(9), Err(LedgerError::LineNotFound(9))));
    }

    #[test]
    fn test_apply_template_replaces_lines() {
        let expander = TemplateFixtures::standard_expander();
        let mut form = JournalEntryForm::dated(DateFixtures::posting_date());
        form.add_line();
        form.add_line();
        form.set_account(3, "Rent Expense").unwrap();

        form.apply_template(&expander, "sales-with-tax", Amount::new(dec!(1000)));
        assert_eq!(form.lines().len(), 3);
        assert!(form.lines().iter().all(|l| l.account != "Rent Expense"));

        form.apply_template(&expander, "payment", Amount::new(dec!(20)));
        assert_eq!(form.lines().len(), 2);
        assert_eq!(form.lines()[0].account, "Cash");
        assert!(form.check().can_submit());
    }

    #[test]
    fn test_totals_track_edits() {
        let mut form = JournalEntryForm::dated(DateFixtures::posting_date());
        form.set_debit(0, "10").unwrap();
        form.set_credit(1, "4").unwrap();
        let totals = form.totals();
        assert_eq!(totals.difference(), Amount::new(dec!(6)));

        form.set_credit(1, "10").unwrap();
        assert!(form.totals().is_balanced());
    }
}

// ============================================================================
// Transaction Form Tests
// ============================================================================

mod transaction_tests {
    use super::*;

    fn draft(kind: TransactionKind) -> TransactionDraft {
        let mut draft = TransactionDraft::new(kind, DateFixtures::posting_date());
        draft.reference = "INV-1001".to_string();
        draft.counterparty = "Acme Corp".to_string();
        draft.set_amount("1000");
        draft
    }

    #[test]
    fn test_each_kind_previews_its_template() {
        let expander = TemplateFixtures::standard_expander();
        let expected = [
            (TransactionKind::Invoice, "Accounts Receivable"),
            (TransactionKind::Payment, "Cash"),
            (TransactionKind::Expense, "Office Supplies"),
            (TransactionKind::Transfer, "Accounts Payable"),
        ];
        for (kind, first_account) in expected {
            let lines = draft(kind).journal_preview(&expander).unwrap();
            assert_eq!(lines[0].account, first_account, "{}", kind);
            assert_balanced(&lines);
        }
    }

    #[test]
    fn test_submit_returns_transaction_and_lines() {
        let expander = TemplateFixtures::standard_expander();
        let (transaction, lines) = draft(TransactionKind::Invoice).submit(&expander).unwrap();

        assert_eq!(transaction.kind, TransactionKind::Invoice);
        assert_eq!(transaction.status, TransactionStatus::Pending);
        assert_eq!(transaction.amount, Amount::new(dec!(1000)));
        assert_eq!(transaction.description, None);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_amount_must_be_positive() {
        let expander = TemplateFixtures::standard_expander();
        let mut draft = draft(TransactionKind::Payment);
        draft.set_amount("0");
        let err = draft.submit(&expander).unwrap_err();
        assert_eq!(field_messages(&err), vec!["Amount must be greater than zero"]);

        draft.set_amount("-5");
        assert!(!draft.validate().is_empty());
    }

    #[test]
    fn test_required_fields() {
        let draft = TransactionDraft::new(TransactionKind::Expense, DateFixtures::year_end());
        let fields: Vec<String> = draft.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["reference", "customer", "amount"]);
    }
}

// ============================================================================
// Account Tests
// ============================================================================

mod account_tests {
    use super::*;

    #[test]
    fn test_standard_chart_covers_template_accounts() {
        let chart = ChartOfAccounts::standard();
        for template in TemplateFixtures::standard_catalog().iter() {
            for line in &template.lines {
                assert!(
                    chart.find_by_name(&line.account).is_some(),
                    "{} missing from chart",
                    line.account
                );
            }
        }
    }

    #[test]
    fn test_draft_submit() {
        let draft = AccountDraft {
            code: "2200".to_string(),
            name: "Accrued Wages".to_string(),
            account_type: "Liability".to_string(),
            balance: "1500.75".to_string(),
            ..AccountDraft::default()
        };
        let account = draft.submit().unwrap();
        assert_eq!(account.account_type, AccountType::Liability);
        assert_eq!(account.balance, Amount::new(dec!(1500.75)));
        assert!(account.is_active);
    }

    #[test]
    fn test_short_code_rejected() {
        let draft = AccountDraft {
            code: "12".to_string(),
            name: "Cash".to_string(),
            account_type: "Asset".to_string(),
            ..AccountDraft::default()
        };
        let err = draft.submit().unwrap_err();
        assert_eq!(field_messages(&err), vec!["Account code must be at least 3 characters"]);
    }
}

// ============================================================================
// Register Tests
// ============================================================================

mod register_tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut register = JournalRegister::new();
        let entry = JournalEntryFormBuilder::new().build().submit().unwrap();
        let id = register.record(entry).unwrap();

        assert_eq!(register.len(), 1);
        assert_eq!(register.get(&id).map(|e| e.reference.as_str()), Some("JE-001"));
        assert_eq!(register.total_debits(), Amount::new(dec!(1200)));
    }

    #[test]
    fn test_record_rejects_tampered_entry() {
        let mut register = JournalRegister::new();
        let mut entry = JournalEntryFormBuilder::new().build().submit().unwrap();
        entry.lines[1].credit = AmountField::parse("1100.00");

        let err = register.record(entry).unwrap_err();
        assert!(matches!(err, LedgerError::UnbalancedEntry { .. }));
        assert!(register.is_empty());
    }

    #[test]
    fn test_record_rejects_overflowing_entry() {
        let mut register = JournalRegister::new();
        let mut entry = JournalEntryFormBuilder::new().build().submit().unwrap();
        let max = AmountField::Value(Amount::new(Decimal::MAX));
        entry.lines[0].debit = max.clone();
        entry.lines.push(JournalLine { debit: max, ..JournalLine::empty() });

        let err = register.record(entry).unwrap_err();
        assert!(matches!(err, LedgerError::Amount(AmountError::Overflow)));
        assert!(register.is_empty());
    }

    #[test]
    fn test_record_rejects_short_entry() {
        let mut register = JournalRegister::new();
        let mut entry = JournalEntryFormBuilder::new().build().submit().unwrap();
        entry.lines.truncate(1);
        assert!(matches!(
            register.record(entry),
            Err(LedgerError::MinimumLines { .. })
        ));
    }
}
