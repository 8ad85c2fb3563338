//! Monetary amounts with precise decimal arithmetic
//!
//! Journal amounts are currency-agnostic: a ledger line only carries a
//! magnitude, and every amount shown to a user is formatted with two decimal
//! places. `Amount` wraps `rust_decimal::Decimal` so that percentage splits
//! and totals never accumulate binary floating-point error.
//!
//! Form inputs are modelled separately by [`AmountField`], which keeps the
//! difference between "nothing entered", "a number" and "text that is not a
//! number yet" explicit instead of overloading the empty string as zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places used for every displayed amount
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Largest magnitude accepted from typed input
///
/// Keeps column totals far below `Decimal::MAX` however many lines an entry
/// has.
pub const MAX_INPUT_MAGNITUDE: Decimal = dec!(1000000000000000000);

/// Errors that can occur when reading an amount strictly
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Malformed amount: {0:?}")]
    Malformed(String),

    #[error("Amount must not be negative: {0}")]
    Negative(String),

    #[error("Amount is out of range: {0}")]
    OutOfRange(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new amount
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, CURRENCY_DECIMAL_PLACES))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: Amount) -> Result<Amount, AmountError> {
        self.0.checked_add(other.0).map(Amount).ok_or(AmountError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: Amount) -> Result<Amount, AmountError> {
        self.0.checked_sub(other.0).map(Amount).ok_or(AmountError::Overflow)
    }

    /// Addition clamped to the representable range
    pub fn saturating_add(&self, other: Amount) -> Amount {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtraction clamped to the representable range
    pub fn saturating_sub(&self, other: Amount) -> Amount {
        Self(self.0.saturating_sub(other.0))
    }

    /// Rounds to two decimal places, midpoints away from zero
    ///
    /// The result always carries a scale of two so that its `Display`
    /// output is the same text the dashboard shows (`910` becomes `910.00`).
    pub fn round_currency(&self) -> Self {
        let mut rounded = self.0.round_dp_with_strategy(
            CURRENCY_DECIMAL_PLACES,
            RoundingStrategy::MidpointAwayFromZero,
        );
        rounded.rescale(CURRENCY_DECIMAL_PLACES);
        Self(rounded)
    }

    /// Formats with exactly two decimal places
    pub fn to_fixed(&self) -> String {
        self.round_currency().0.to_string()
    }

    /// Computes `percentage` percent of `total`, unrounded
    pub fn percent_of(percentage: Decimal, total: Amount) -> Self {
        Self(percentage / dec!(100) * total.0)
    }

    /// Parses a user-entered amount, treating anything unreadable as zero
    ///
    /// Used for live recomputation while a field is still being typed.
    pub fn parse_lenient(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }

    /// Parses an amount that must be present and non-negative
    pub fn parse_non_negative(input: &str) -> Result<Self, AmountError> {
        let amount: Amount = input.parse()?;
        if amount.is_negative() {
            return Err(AmountError::Negative(input.trim().to_string()));
        }
        Ok(amount)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|_| AmountError::Malformed(trimmed.to_string()))?;
        if value.abs() > MAX_INPUT_MAGNITUDE {
            return Err(AmountError::OutOfRange(trimmed.to_string()));
        }
        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The state of a debit or credit input
///
/// An `Empty` field means "not entered"; it counts as zero in totals but,
/// unlike an explicit `0.00`, it does not claim that side of the line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AmountField {
    #[default]
    Empty,
    Value(Amount),
    Malformed(String),
}

impl AmountField {
    /// Reads raw input text
    ///
    /// Text that is not a number, or a number beyond
    /// [`MAX_INPUT_MAGNITUDE`], is kept as `Malformed`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return AmountField::Empty;
        }
        match trimmed.parse::<Amount>() {
            Ok(amount) => AmountField::Value(amount),
            Err(_) => AmountField::Malformed(trimmed.to_string()),
        }
    }

    /// Wraps an already-computed amount, formatted for display
    pub fn currency(amount: Amount) -> Self {
        AmountField::Value(amount.round_currency())
    }

    /// The amount this field contributes to totals
    pub fn as_amount(&self) -> Amount {
        match self {
            AmountField::Value(amount) => *amount,
            AmountField::Empty | AmountField::Malformed(_) => Amount::zero(),
        }
    }

    /// True when the user typed something into the field
    pub fn is_entered(&self) -> bool {
        !matches!(self, AmountField::Empty)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, AmountField::Malformed(_))
    }

    /// The text shown in the input
    pub fn display(&self) -> String {
        match self {
            AmountField::Empty => String::new(),
            AmountField::Value(amount) => amount.value().to_string(),
            AmountField::Malformed(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<&str> for AmountField {
    fn from(input: &str) -> Self {
        AmountField::parse(input)
    }
}

impl Serialize for AmountField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for AmountField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AmountField::parse(&raw))
    }
}
