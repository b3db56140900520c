// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for share decoding and secret reconstruction.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while decoding shares or reconstructing a secret.
///
/// Every variant is terminal for the reconstruction attempt: the inputs
/// are defective and retrying cannot change the outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconstructError {
    /// Base outside the supported range 2..=36
    #[error("Unsupported base {base}: must be between 2 and 36")]
    UnsupportedBase { base: u32 },

    /// A character in a share value is not a digit of the stated base
    #[error("Invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// A share value is the empty string
    #[error("Share value is empty")]
    EmptyValue,

    /// Two selected points share the same x-coordinate
    #[error("Duplicate abscissa x = {x}: share x-values must be distinct")]
    DuplicateAbscissa { x: BigInt },

    /// Fewer points available than the threshold requires
    #[error("Insufficient shares: {available} available, {needed} needed")]
    InsufficientShares { available: usize, needed: usize },

    /// The interpolated value has a non-trivial denominator
    #[error("Interpolated secret is not an integer: {numerator}/{denominator}")]
    NonIntegerSecret {
        numerator: BigInt,
        denominator: BigInt,
    },
}
