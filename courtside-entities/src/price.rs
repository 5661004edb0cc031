use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

/// An amount of money in minor currency units (e.g. cents).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Applies the tax rate and rounds to the nearest minor unit.
    ///
    /// Returns `None` if the taxed amount is not representable.
    pub fn with_tax(self, tax: TaxRate) -> Option<Self> {
        let taxed = ((self.0 as f64) * (1.0 + tax.0)).round();
        // `i64::MAX as f64` is 2^63 which is already out of range
        if !taxed.is_finite() || taxed < i64::MIN as f64 || taxed >= i64::MAX as f64 {
            return None;
        }
        Some(Self(taxed as i64))
    }
}

impl From<i64> for Price {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Price> for i64 {
    fn from(from: Price) -> Self {
        from.0
    }
}

/// Saturating addition, use [`Price::checked_add`] to detect overflows.
impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

/// A relative tax rate, e.g. `0.18` for 18%.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct TaxRate(f64);

impl TaxRate {
    pub const fn new(rate: f64) -> Self {
        Self(rate)
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<TaxRate> for f64 {
    fn from(from: TaxRate) -> Self {
        from.0
    }
}
