use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Represents a monthly monetary value in BRL.
///
/// This is a wrapper around `rust_decimal::Decimal` so fee arithmetic stays exact
/// and amounts cannot be confused with rates or head counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Clamps negative amounts to zero.
    pub fn non_negative(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Rounds to centavos, half away from zero.
    pub fn round_cents(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

// Out-of-range results saturate at the `Decimal` bounds instead of panicking.
fn saturate(result: Option<Decimal>, negative: bool) -> Decimal {
    result.unwrap_or(if negative { Decimal::MIN } else { Decimal::MAX })
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(saturate(self.0.checked_add(rhs.0), self.0.is_sign_negative()))
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(saturate(self.0.checked_sub(rhs.0), self.0 < rhs.0))
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        let negative = self.0.is_sign_negative() != rhs.is_sign_negative();
        Self(saturate(self.0.checked_mul(rhs), negative))
    }
}

/// A fee rate expressed as a fraction of a base amount (`0.0098` is 0.98%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub const fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction)
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }

    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Applies the rate to a base amount.
    pub fn of(&self, base: Money) -> Money {
        base * self.0
    }
}
