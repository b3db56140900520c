// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Rational Library
//!
//! Exact rational arithmetic over big integers, designed for polynomial
//! secret reconstruction where floating point would silently corrupt the
//! result for large secrets.
//!
//! ## Features
//!
//! - Uses `num-bigint` for numerator and denominator representation.
//! - Canonical reduced form: positive denominator, gcd(|num|, den) = 1,
//!   restored after every construction and arithmetic operation.
//! - Addition and multiplication with automatic reduction; no division is
//!   ever performed on values, only on their common factors.
//!
//! ## Mathematical Background
//!
//! Lagrange interpolation at x = 0 produces basis weights of the form
//! `-x_j / (x_i - x_j)`. Accumulating these in Q and checking the final
//! denominator once is the only way to recover an exact integer secret:
//! per-term integer division loses information whenever a single term's
//! denominator does not divide its numerator, even though the full sum is
//! integral.

pub mod errors;
pub mod rational;

pub use errors::RationalError;
pub use rational::{gcd, Rational};
