// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Share records and decoded share points.

use crate::decode::decode;
use crate::errors::ReconstructError;
use num_bigint::BigInt;
use std::fmt;

/// A raw share as supplied at the input boundary: an x-coordinate, a
/// numeric base and the share value as a digit string in that base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRecord {
    pub x: BigInt,
    pub base: u32,
    pub digits: String,
}

impl ShareRecord {
    pub fn new(x: BigInt, base: u32, digits: impl Into<String>) -> Self {
        Self {
            x,
            base,
            digits: digits.into(),
        }
    }

    /// Decodes the digit string, yielding the share as an exact point.
    pub fn decode(&self) -> Result<SharePoint, ReconstructError> {
        let y = decode(&self.digits, self.base)?;
        Ok(SharePoint::new(self.x.clone(), y))
    }
}

/// A decoded (x, y) sample of the shared polynomial.
///
/// Immutable once created; x-values must be pairwise distinct within any
/// set handed to the interpolator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePoint {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
}

impl SharePoint {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for SharePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Decodes a batch of records in their given order.
pub fn decode_records(records: &[ShareRecord]) -> Result<Vec<SharePoint>, ReconstructError> {
    records.iter().map(|r| r.decode()).collect()
}
