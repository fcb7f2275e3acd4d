use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::ValidationError;

/// A monetary amount in centavos.
///
/// This is the only representation that is stored or summed. The `R$ 50,00`
/// text form is produced by [`Money::format_brl`] and never parsed back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest accepted price: R$ 999999999,99. Keeps any realistic day's
    /// total far from `u64::MAX`.
    pub const MAX_PRICE: Money = Money(99_999_999_999);

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    /// Read a price typed by the operator.
    ///
    /// Every non-digit is dropped and the digits that remain are the amount in
    /// centavos, so `"5000"`, `"50,00"` and `"R$ 50,00"` all mean fifty reais.
    pub fn from_input(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(ValidationError::NegativePrice);
        }
        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(ValidationError::MissingPrice);
        }
        let price = digits
            .parse::<u64>()
            .map(Self)
            .map_err(|e| ValidationError::InvalidPrice(format!("{trimmed}: {e}")))?;
        price.check_bounds()?;
        Ok(price)
    }

    pub fn check_bounds(&self) -> Result<(), ValidationError> {
        if *self > Self::MAX_PRICE {
            return Err(ValidationError::InvalidPrice(format!(
                "{} exceeds the maximum of {}",
                self.format_brl(),
                Self::MAX_PRICE.format_brl()
            )));
        }
        Ok(())
    }

    /// `R$ 1234,56`. No thousands separator.
    pub fn format_brl(&self) -> String {
        format!("R$ {},{:02}", self.0 / 100, self.0 % 100)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl Add for Money {
    type Output = Money;

    // Saturates instead of wrapping; bounded prices never get there.
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_brl())
    }
}
