//! Proforma templates and their expansion into journal lines
//!
//! A proforma template describes a recurring business event (a sale, a
//! vendor payment, payroll) as an ordered list of lines, each taking a
//! percentage of the transaction total or a fixed amount and landing on the
//! debit or credit side. Expanding a template against a total produces the
//! journal lines a user would otherwise type by hand.
//!
//! # Rounding
//!
//! Every generated amount is rounded to two decimal places, midpoints away
//! from zero. When the percentage lines on one side of a template add up to
//! exactly 100, that side is reconciled to the rounded total: cents lost or
//! gained by rounding are moved onto the lines whose rounding error was
//! largest. A 91%/9% split of `0.50` therefore yields `0.45` and `0.05`
//! rather than `0.46` and `0.05`, and the entry still balances.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{ProformaExpander, TemplateCatalog};
//!
//! let expander = ProformaExpander::new(TemplateCatalog::standard());
//! let lines = expander.expand("sales-with-tax", Amount::new(dec!(1000)));
//! assert_eq!(lines[1].credit.display(), "910.00");
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use core_kernel::{Amount, AmountField, TemplateId};
use crate::error::LedgerError;
use crate::journal::JournalLine;

/// Which side of the entry a template line lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Debit,
    Credit,
}

impl Polarity {
    pub fn is_debit(&self) -> bool {
        matches!(self, Polarity::Debit)
    }
}

/// How a template line derives its amount from the total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBasis {
    /// Share of the total, 0 to 100
    Percentage(Decimal),
    /// Fixed amount regardless of the total
    Fixed(Amount),
    /// Contributes zero
    None,
}

/// One line of a proforma template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateLineDef", into = "TemplateLineDef")]
pub struct TemplateLine {
    pub account: String,
    pub description: String,
    pub polarity: Polarity,
    pub basis: LineBasis,
}

impl TemplateLine {
    pub fn new(
        account: impl Into<String>,
        description: impl Into<String>,
        polarity: Polarity,
        basis: LineBasis,
    ) -> Self {
        Self {
            account: account.into(),
            description: description.into(),
            polarity,
            basis,
        }
    }

    pub fn debit_percent(
        account: impl Into<String>,
        description: impl Into<String>,
        percentage: Decimal,
    ) -> Self {
        Self::new(account, description, Polarity::Debit, LineBasis::Percentage(percentage))
    }

    pub fn credit_percent(
        account: impl Into<String>,
        description: impl Into<String>,
        percentage: Decimal,
    ) -> Self {
        Self::new(account, description, Polarity::Credit, LineBasis::Percentage(percentage))
    }

    pub fn debit_fixed(
        account: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self::new(account, description, Polarity::Debit, LineBasis::Fixed(amount))
    }

    pub fn credit_fixed(
        account: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self::new(account, description, Polarity::Credit, LineBasis::Fixed(amount))
    }

    /// Unrounded amount of this line for a given total
    pub fn amount_for(&self, total: Amount) -> Amount {
        match self.basis {
            LineBasis::Percentage(percentage) => Amount::percent_of(percentage, total),
            LineBasis::Fixed(amount) => amount,
            LineBasis::None => Amount::zero(),
        }
    }

    pub fn percentage(&self) -> Option<Decimal> {
        match self.basis {
            LineBasis::Percentage(percentage) => Some(percentage),
            _ => None,
        }
    }
}

/// Authoring shape of a template line
///
/// Catalog files describe a line as `{account, description, isDebit,
/// percentage?, fixedAmount?}`. The lowercase and snake_case aliases cover
/// loaders that fold key case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateLineDef {
    account: String,
    #[serde(default)]
    description: String,
    #[serde(alias = "isdebit", alias = "is_debit")]
    is_debit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    percentage: Option<Decimal>,
    #[serde(
        default,
        alias = "fixedamount",
        alias = "fixed_amount",
        skip_serializing_if = "Option::is_none"
    )]
    fixed_amount: Option<Decimal>,
}

impl TryFrom<TemplateLineDef> for TemplateLine {
    type Error = String;

    fn try_from(def: TemplateLineDef) -> Result<Self, Self::Error> {
        let basis = match (def.percentage, def.fixed_amount) {
            (Some(_), Some(_)) => {
                return Err(format!(
                    "line for {} has both a percentage and a fixed amount",
                    def.account
                ))
            }
            (Some(percentage), None) => LineBasis::Percentage(percentage),
            (None, Some(amount)) => LineBasis::Fixed(Amount::new(amount)),
            (None, None) => LineBasis::None,
        };
        let polarity = if def.is_debit { Polarity::Debit } else { Polarity::Credit };
        Ok(TemplateLine::new(def.account, def.description, polarity, basis))
    }
}

impl From<TemplateLine> for TemplateLineDef {
    fn from(line: TemplateLine) -> Self {
        let (percentage, fixed_amount) = match line.basis {
            LineBasis::Percentage(percentage) => (Some(percentage), None),
            LineBasis::Fixed(amount) => (None, Some(amount.value())),
            LineBasis::None => (None, None),
        };
        Self {
            account: line.account,
            description: line.description,
            is_debit: line.polarity.is_debit(),
            percentage,
            fixed_amount,
        }
    }
}

/// A reusable pattern expanding one total into several journal lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub lines: Vec<TemplateLine>,
}

impl Template {
    pub fn new(
        id: impl Into<TemplateId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a line
    pub fn line(mut self, line: TemplateLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Sum of the percentages on one side
    pub fn percentage_total(&self, polarity: Polarity) -> Decimal {
        self.lines
            .iter()
            .filter(|line| line.polarity == polarity)
            .filter_map(TemplateLine::percentage)
            .sum()
    }

    /// True when the template balances for any total
    ///
    /// That holds when both sides are pure percentage splits of 100.
    pub fn is_self_balancing(&self) -> bool {
        let all_percentages = self.lines.iter().all(|line| line.percentage().is_some());
        all_percentages
            && self.percentage_total(Polarity::Debit) == dec!(100)
            && self.percentage_total(Polarity::Credit) == dec!(100)
    }

    fn validate(&self) -> Result<(), LedgerError> {
        if self.id.as_str().trim().is_empty() {
            return Err(LedgerError::invalid_template(self.id.as_str(), "empty id"));
        }
        for line in &self.lines {
            match line.basis {
                LineBasis::Percentage(percentage)
                    if percentage < Decimal::ZERO || percentage > dec!(100) =>
                {
                    return Err(LedgerError::invalid_template(
                        self.id.as_str(),
                        format!(
                            "percentage {} for {} is outside 0..=100",
                            percentage, line.account
                        ),
                    ));
                }
                LineBasis::Fixed(amount) if amount.is_negative() => {
                    return Err(LedgerError::invalid_template(
                        self.id.as_str(),
                        format!("fixed amount {} for {} is negative", amount, line.account),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// The immutable, ordered set of templates available to the expander
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range amounts
    ///
    /// Percentages are not required to add up to 100. Templates that do not
    /// balance on their own are accepted and reported at debug level.
    pub fn new(templates: Vec<Template>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::new();
        for template in &templates {
            template.validate()?;
            if !seen.insert(template.id.clone()) {
                return Err(LedgerError::DuplicateTemplate(template.id.to_string()));
            }
            if !template.is_self_balancing() {
                debug!(template = %template.id, "Template does not balance for every total");
            }
        }
        Ok(Self { templates })
    }

    /// The built-in catalog of common transactions
    pub fn standard() -> Self {
        Self {
            templates: standard_templates(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn ids(&self) -> Vec<&TemplateId> {
        self.templates.iter().map(|template| &template.id).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn standard_templates() -> Vec<Template> {
    let full = dec!(100);
    vec![
        Template::new("sales", "Sales Transaction", "Record a sale on account")
            .line(TemplateLine::debit_percent("Accounts Receivable", "Customer invoice", full))
            .line(TemplateLine::credit_percent("Sales Revenue", "Sales revenue", full)),
        Template::new("sales-with-tax", "Sales with Tax", "Record a taxable sale on account")
            .line(TemplateLine::debit_percent("Accounts Receivable", "Customer invoice", full))
            .line(TemplateLine::credit_percent("Sales Revenue", "Sales revenue", dec!(91)))
            .line(TemplateLine::credit_percent(
                "Sales Tax Payable",
                "Sales tax collected",
                dec!(9),
            )),
        Template::new("purchase", "Purchase Transaction", "Record a purchase on account")
            .line(TemplateLine::debit_percent("Office Supplies", "Purchase of supplies", full))
            .line(TemplateLine::credit_percent("Accounts Payable", "Vendor invoice", full)),
        Template::new("payment", "Customer Payment", "Record payment received from customer")
            .line(TemplateLine::debit_percent("Cash", "Customer payment", full))
            .line(TemplateLine::credit_percent("Accounts Receivable", "Customer payment", full)),
        Template::new("vendor-payment", "Vendor Payment", "Record payment made to vendor")
            .line(TemplateLine::debit_percent("Accounts Payable", "Vendor payment", full))
            .line(TemplateLine::credit_percent("Cash", "Vendor payment", full)),
        Template::new("payroll", "Payroll Entry", "Record bi-weekly payroll")
            .line(TemplateLine::debit_percent("Salary Expense", "Bi-weekly payroll", full))
            .line(TemplateLine::credit_percent("Cash", "Bi-weekly payroll", full)),
    ]
}

/// Expands templates from a catalog into journal lines
#[derive(Debug, Clone)]
pub struct ProformaExpander {
    catalog: TemplateCatalog,
}

impl ProformaExpander {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Expands a template against a total
    ///
    /// An unknown template id yields two blank lines, the same starting
    /// point as a fresh journal entry. A negative total is treated as zero.
    pub fn expand(&self, template_id: &str, total: Amount) -> Vec<JournalLine> {
        match self.catalog.get(template_id) {
            Some(template) => expand_template(template, total),
            None => {
                warn!(template = template_id, "Unknown proforma template, using blank lines");
                vec![JournalLine::empty(), JournalLine::empty()]
            }
        }
    }

    /// Expands a template against a total typed by the user
    ///
    /// Unreadable input counts as zero.
    pub fn expand_input(&self, template_id: &str, raw_total: &str) -> Vec<JournalLine> {
        self.expand(template_id, Amount::parse_lenient(raw_total))
    }

    /// Like [`expand`](Self::expand), but reports an unknown template
    pub fn try_expand(
        &self,
        template_id: &str,
        total: Amount,
    ) -> Result<Vec<JournalLine>, LedgerError> {
        let template = self
            .catalog
            .get(template_id)
            .ok_or_else(|| LedgerError::TemplateNotFound(template_id.to_string()))?;
        Ok(expand_template(template, total))
    }
}

impl Default for ProformaExpander {
    fn default() -> Self {
        Self::new(TemplateCatalog::standard())
    }
}

fn expand_template(template: &Template, total: Amount) -> Vec<JournalLine> {
    let total = if total.is_negative() { Amount::zero() } else { total };
    let mut amounts: Vec<Amount> = template
        .lines
        .iter()
        .map(|line| line.amount_for(total).round_currency())
        .collect();

    for polarity in [Polarity::Debit, Polarity::Credit] {
        if template.percentage_total(polarity) == dec!(100) {
            reconcile_side(template, polarity, total, &mut amounts);
        }
    }

    debug!(template = %template.id, %total, lines = amounts.len(), "Expanded proforma template");

    template
        .lines
        .iter()
        .zip(amounts)
        .map(|(line, amount)| {
            let (debit, credit) = match line.polarity {
                Polarity::Debit => (AmountField::currency(amount), AmountField::Empty),
                Polarity::Credit => (AmountField::Empty, AmountField::currency(amount)),
            };
            JournalLine {
                account: line.account.clone(),
                description: line.description.clone(),
                debit,
                credit,
            }
        })
        .collect()
}

/// Makes the percentage lines of one side add up to the rounded total
///
/// Each line is first rounded on its own. Any leftover cents go one at a
/// time to the lines with the largest rounding error in the matching
/// direction, earlier lines first on ties.
fn reconcile_side(template: &Template, polarity: Polarity, total: Amount, amounts: &mut [Amount]) {
    let cent = Amount::from_minor(1);
    let target = total.round_currency();

    // (index, exact share of the rounded total)
    let shares: Vec<(usize, Amount)> = template
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.polarity == polarity)
        .filter_map(|(index, line)| {
            line.percentage()
                .map(|percentage| (index, Amount::percent_of(percentage, target)))
        })
        .collect();

    for (index, exact) in &shares {
        amounts[*index] = exact.round_currency();
    }

    let allocated: Amount = shares.iter().map(|(index, _)| amounts[*index]).sum();
    let residual = target - allocated;
    if residual.is_zero() {
        return;
    }

    let mut candidates: Vec<(usize, Decimal)> = shares
        .iter()
        .map(|(index, exact)| {
            let error = (*exact - amounts[*index]).value();
            let error = if residual.is_positive() { error } else { -error };
            (*index, error)
        })
        .filter(|(_, error)| *error > Decimal::ZERO)
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let mut remaining = residual.abs();
    for (index, _) in candidates {
        if remaining.is_zero() {
            break;
        }
        amounts[index] = if residual.is_positive() {
            amounts[index] + cent
        } else {
            amounts[index] - cent
        };
        remaining = remaining - cent;
    }
}
