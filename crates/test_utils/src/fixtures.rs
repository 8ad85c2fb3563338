//! Pre-built Test Fixtures
//!
//! Ready-to-use templates, dates and amounts. The standard catalog is
//! built once and shared.

use chrono::NaiveDate;
use core_kernel::Amount;
use domain_ledger::{ProformaExpander, Template, TemplateCatalog, TemplateLine};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

static STANDARD_CATALOG: Lazy<TemplateCatalog> = Lazy::new(TemplateCatalog::standard);

/// Fixture for template catalogs
pub struct TemplateFixtures;

impl TemplateFixtures {
    /// The built-in catalog
    pub fn standard_catalog() -> TemplateCatalog {
        STANDARD_CATALOG.clone()
    }

    /// An expander over the built-in catalog
    pub fn standard_expander() -> ProformaExpander {
        ProformaExpander::new(Self::standard_catalog())
    }

    /// A template mixing a fixed fee with percentage splits
    ///
    /// The fee is debited and credited as fixed amounts, so the template
    /// balances for any total even though it is not a pure percentage split.
    pub fn card_sale_with_fee() -> Template {
        Template::new("card-sale", "Card Sale", "Card sale with processor fee")
            .line(TemplateLine::debit_percent("Cash", "Card settlement", dec!(100)))
            .line(TemplateLine::debit_fixed("Bank Fees", "Processor fee", Amount::new(dec!(2.50))))
            .line(TemplateLine::credit_percent("Sales Revenue", "Card sale", dec!(100)))
            .line(TemplateLine::credit_fixed(
                "Cash",
                "Processor fee withheld",
                Amount::new(dec!(2.50)),
            ))
    }

    /// A deliberately lopsided template: credits only cover 90%
    pub fn lopsided() -> Template {
        Template::new("lopsided", "Lopsided", "Credits short of debits")
            .line(TemplateLine::debit_percent("Cash", "", dec!(100)))
            .line(TemplateLine::credit_percent("Sales Revenue", "", dec!(90)))
    }

    /// A three-way credit split with repeating thirds
    pub fn three_way_split() -> Template {
        Template::new("three-way", "Three Way Split", "Revenue split across three lines")
            .line(TemplateLine::debit_percent("Accounts Receivable", "", dec!(100)))
            .line(TemplateLine::credit_percent("Product Revenue", "", dec!(33.34)))
            .line(TemplateLine::credit_percent("Service Revenue", "", dec!(33.33)))
            .line(TemplateLine::credit_percent("Support Revenue", "", dec!(33.33)))
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn posting_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    pub fn year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// Fixture for amounts
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn thousand() -> Amount {
        Amount::new(dec!(1000.00))
    }

    pub fn with_cents() -> Amount {
        Amount::new(dec!(250.50))
    }

    /// Splits 91/9 exactly on a half cent
    pub fn midpoint_total() -> Amount {
        Amount::new(dec!(0.50))
    }
}
