//! 32-bit integer value with wraparound arithmetic.
//!
//! `ScalarInt` wraps `i32` (C `int`) and intentionally does NOT implement
//! `Add`, `Sub`, `Mul`, `Div`, `Rem`, or `Neg`. Every arithmetic operation is a
//! named method that states its overflow behavior: the modeled constructs
//! wrap, they never trap.

use std::fmt;

/// A 32-bit signed integer with explicit wraparound arithmetic.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct ScalarInt(i32);

impl ScalarInt {
    /// The zero value (false).
    pub const ZERO: Self = Self(0);

    /// The one value (true).
    pub const ONE: Self = Self(1);

    /// The minimum value (`i32::MIN`).
    pub const MIN: Self = Self(i32::MIN);

    /// The maximum value (`i32::MAX`).
    pub const MAX: Self = Self(i32::MAX);

    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Extract the raw `i32` value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// C truthiness: anything non-zero.
    #[inline]
    pub const fn is_truthy(self) -> bool {
        self.0 != 0
    }

    /// `1` for true, `0` for false.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Truncating division. `None` only for a zero divisor;
    /// `MIN / -1` wraps to `MIN`.
    #[inline]
    #[must_use]
    pub const fn wrapping_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        match self.0.checked_div(rhs.0) {
            Some(quotient) => Some(Self(quotient)),
            // MIN / -1
            None => Some(Self(self.0.wrapping_neg())),
        }
    }

    /// Truncating remainder; the sign follows the dividend. `None` only for a
    /// zero divisor; `MIN % -1` is `0`.
    #[inline]
    #[must_use]
    pub const fn wrapping_rem(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        match self.0.checked_rem(rhs.0) {
            Some(remainder) => Some(Self(remainder)),
            // MIN % -1
            None => Some(Self::ZERO),
        }
    }

    /// Negation; `-MIN` wraps to `MIN`.
    #[inline]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl From<i32> for ScalarInt {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests;
