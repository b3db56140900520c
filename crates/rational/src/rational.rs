// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Rational number arithmetic implementation.

use crate::errors::RationalError;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// Computes the greatest common divisor of two big integers.
///
/// Standard Euclidean algorithm on absolute values, so the result is
/// invariant under sign changes of either argument. `gcd(a, 0) = |a|`
/// and `gcd(0, 0) = 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// An exact rational number in canonical reduced form.
///
/// The numerator and denominator are stored as `BigInt` to support
/// arbitrary precision arithmetic. After every construction and every
/// arithmetic operation the value satisfies:
///
/// - the denominator is strictly positive, and
/// - `gcd(|numerator|, denominator) == 1`.
///
/// Two equal rationals therefore always compare equal structurally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    /// Numerator, sign carrier.
    pub(crate) num: BigInt,
    /// Denominator, always positive.
    pub(crate) den: BigInt,
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Rational {
    /// Creates a rational from a numerator and denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns `RationalError::ZeroDenominator` if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self, RationalError> {
        if den.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::normalized(num, den))
    }

    /// Creates a rational with denominator 1.
    pub fn from_integer(num: BigInt) -> Self {
        Self {
            num,
            den: BigInt::one(),
        }
    }

    /// The rational zero, `0/1`.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The rational one, `1/1`.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// Restores canonical form. `den` must be nonzero.
    fn normalized(mut num: BigInt, mut den: BigInt) -> Self {
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = gcd(&num, &den);
        if !g.is_one() {
            num = num / &g;
            den = den / &g;
        }
        Self { num, den }
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    /// Returns the denominator.
    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    /// Checks if the rational is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Checks if the rational is an integer, i.e. has denominator 1.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Extracts the integer value, or `None` if the denominator is not 1.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.num.clone())
        } else {
            None
        }
    }

    /// Adds two rationals.
    ///
    /// Cross-multiplies onto the common denominator and reduces:
    /// `a/b + c/d = (a*d + c*b) / (b*d)`.
    pub fn add(&self, other: &Self) -> Self {
        let num = &self.num * &other.den + &other.num * &self.den;
        let den = &self.den * &other.den;
        Self::normalized(num, den)
    }

    /// Multiplies two rationals.
    ///
    /// `a/b * c/d = (a*c) / (b*d)`, reduced.
    pub fn mul(&self, other: &Self) -> Self {
        let num = &self.num * &other.num;
        let den = &self.den * &other.den;
        Self::normalized(num, den)
    }
}
