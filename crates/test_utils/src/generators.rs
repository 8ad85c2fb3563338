//! Property-Based Test Generators
//!
//! Proptest strategies for totals and for templates whose percentage
//! splits add up to exactly 100 on each side.

use core_kernel::Amount;
use domain_ledger::{Template, TemplateLine};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Non-negative totals in whole cents, up to ten million
pub fn total_strategy() -> impl Strategy<Value = Amount> {
    (0i64..1_000_000_000i64).prop_map(Amount::from_minor)
}

/// Non-negative totals with up to four decimal places
pub fn precise_total_strategy() -> impl Strategy<Value = Amount> {
    (0i64..100_000_000_000i64).prop_map(|minor| Amount::new(Decimal::new(minor, 4)))
}

/// Percentages with two decimal places that sum to exactly 100
pub fn percentage_split_strategy(max_parts: usize) -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(1u32..1000u32, 1..=max_parts).prop_map(|weights| {
        let total: u32 = weights.iter().sum();
        let mut remaining: i64 = 10_000;
        let mut basis_points = Vec::with_capacity(weights.len());
        for (index, weight) in weights.iter().enumerate() {
            let share = if index == weights.len() - 1 {
                remaining
            } else {
                i64::from(*weight) * 10_000 / i64::from(total)
            };
            remaining -= share;
            basis_points.push(share);
        }
        basis_points
            .into_iter()
            .map(|bp| Decimal::new(bp, 2))
            .collect()
    })
}

/// Templates whose debit side and credit side each sum to 100%
pub fn balanced_template_strategy() -> impl Strategy<Value = Template> {
    (percentage_split_strategy(4), percentage_split_strategy(4), any::<bool>()).prop_map(
        |(debits, credits, credits_first)| {
            let debit_lines = debits
                .into_iter()
                .enumerate()
                .map(|(i, pct)| TemplateLine::debit_percent(format!("Debit {}", i), "", pct));
            let credit_lines = credits
                .into_iter()
                .enumerate()
                .map(|(i, pct)| TemplateLine::credit_percent(format!("Credit {}", i), "", pct));

            let lines: Vec<TemplateLine> = if credits_first {
                credit_lines.chain(debit_lines).collect()
            } else {
                debit_lines.chain(credit_lines).collect()
            };
            lines
                .into_iter()
                .fold(Template::new("generated", "Generated", ""), Template::line)
        },
    )
}
