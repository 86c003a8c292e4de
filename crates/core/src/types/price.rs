//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Catalog prices must be strictly positive.
    #[error("price must be positive (got {0})")]
    NotPositive(Decimal),
}

/// A US dollar amount.
///
/// Amounts are kept in dollars, not cents, and formatted with two decimal
/// places.
///
/// ```
/// use f1_street_core::Price;
///
/// let tee = Price::from_cents(4500).unwrap();
/// assert_eq!(tee.to_string(), "$45.00");
/// assert_eq!(tee.times(3).to_string(), "$135.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    amount: Decimal,
}

impl Price {
    /// Create a catalog price, rejecting zero and negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `amount <= 0`.
    pub fn positive(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive(amount));
        }
        Ok(Self { amount })
    }

    /// Create a catalog price from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `cents <= 0`.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::positive(Decimal::new(cents, 2))
    }

    /// The zero amount, the identity for [`Sum`].
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// The amount in dollars.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.amount
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.amount)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self {
            amount: iter.map(|price| price.amount).sum(),
        }
    }
}
