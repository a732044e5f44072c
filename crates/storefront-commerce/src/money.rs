//! Money type for representing monetary values.
//!
//! Amounts are integer cents. Catalog documents carry decimal prices
//! (`89.99`), which are converted once at load time by [`decimal`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Store currency. Catalog prices are US dollars, so this is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Ordering compares the amount first, so sorting a slice of prices sorts by
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// US dollars from cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount, rounded to the cent.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(89.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 8999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Apply a rate given in basis points (800 = 8%), rounding half up to the
    /// cent.
    pub fn apply_rate_bps(&self, bps: u32) -> Money {
        let scaled = self.amount_cents as i128 * bps as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        Money::new(rounded as i64, self.currency)
    }

    /// Sum an iterator of Money values, saturating on overflow.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| {
            Money::new(acc.amount_cents.saturating_add(m.amount_cents), currency)
        })
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating addition; the result keeps the left-hand currency.
    fn add(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch");
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter for prices written as decimal numbers in USD.
///
/// Use with `#[serde(with = "crate::money::decimal")]`.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::USD))
    }

    /// Same as the parent module for `Option<Money>`.
    pub mod option {
        use super::{Currency, Money};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(m) => serializer.serialize_some(&m.to_decimal()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            let amount = Option::<f64>::deserialize(deserializer)?;
            Ok(amount.map(|a| Money::from_decimal(a, Currency::USD)))
        }
    }
}
