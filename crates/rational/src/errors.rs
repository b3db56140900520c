// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for rational arithmetic.

use thiserror::Error;

/// Errors that can occur when constructing a rational number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    /// Zero denominator
    #[error("Denominator must be nonzero")]
    ZeroDenominator,
}
