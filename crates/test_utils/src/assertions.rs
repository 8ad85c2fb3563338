//! Custom Test Assertions
//!
//! Assertion helpers for journal lines that print the offending totals or
//! lines instead of a bare `false`.

use domain_ledger::{is_balanced, JournalLine, JournalTotals, Polarity, Template};

/// Asserts that the lines balance
pub fn assert_balanced(lines: &[JournalLine]) {
    let totals = JournalTotals::compute(lines);
    assert!(
        is_balanced(lines),
        "Expected balanced lines: debit={}, credit={}, lines={:?}",
        totals.debit,
        totals.credit,
        lines
    );
}

/// Asserts that the lines do not balance
pub fn assert_unbalanced(lines: &[JournalLine]) {
    let totals = JournalTotals::compute(lines);
    assert!(
        !is_balanced(lines),
        "Expected unbalanced lines: debit={}, credit={}",
        totals.debit,
        totals.credit
    );
}

/// Asserts that expanded lines follow the template's accounts and sides
pub fn assert_matches_template(lines: &[JournalLine], template: &Template) {
    assert_eq!(
        lines.len(),
        template.lines.len(),
        "Line count differs from template {}",
        template.id
    );
    for (index, (line, template_line)) in lines.iter().zip(&template.lines).enumerate() {
        assert_eq!(line.account, template_line.account, "Account mismatch at line {}", index);
        assert_eq!(
            line.description, template_line.description,
            "Description mismatch at line {}",
            index
        );
        match template_line.polarity {
            Polarity::Debit => {
                assert!(line.debit.is_entered(), "Line {} should carry a debit", index);
                assert!(!line.credit.is_entered(), "Line {} credit should be empty", index);
            }
            Polarity::Credit => {
                assert!(line.credit.is_entered(), "Line {} should carry a credit", index);
                assert!(!line.debit.is_entered(), "Line {} debit should be empty", index);
            }
        }
    }
}

/// Asserts that every entered amount is formatted with two decimals
pub fn assert_two_decimal_places(lines: &[JournalLine]) {
    for line in lines {
        for field in [&line.debit, &line.credit] {
            if field.is_entered() {
                let text = field.display();
                let decimals = text.split('.').nth(1).map(str::len);
                assert_eq!(decimals, Some(2), "Amount {:?} is not two-decimal", text);
            }
        }
    }
}
