// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reconstruction driver: subset selection and integer extraction.

use crate::errors::ReconstructError;
use crate::interpolate::interpolate_at_zero;
use crate::share::{decode_records, SharePoint, ShareRecord};
use num_bigint::BigInt;
use tracing::debug;

/// Reconstructs the secret from the first `threshold` points.
///
/// Selection is stable and deterministic: the first `threshold` points in
/// their given order. The interpolated value must come out with
/// denominator 1; anything else means the selected shares are
/// inconsistent or were decoded from malformed data, and is reported
/// rather than truncated.
///
/// # Errors
///
/// - `InsufficientShares` if fewer than `threshold` points are available.
/// - `DuplicateAbscissa` if the selected points repeat an x-coordinate.
/// - `NonIntegerSecret` if the exact result is not an integer.
pub fn reconstruct_secret(
    points: &[SharePoint],
    threshold: usize,
) -> Result<BigInt, ReconstructError> {
    if points.len() < threshold {
        return Err(ReconstructError::InsufficientShares {
            available: points.len(),
            needed: threshold,
        });
    }

    let selected = &points[..threshold];
    debug!(threshold, available = points.len(), "selected shares");

    let value = interpolate_at_zero(selected)?;
    match value.to_integer() {
        Some(secret) => {
            debug!(%secret, "reconstructed secret");
            Ok(secret)
        }
        None => Err(ReconstructError::NonIntegerSecret {
            numerator: value.numerator().clone(),
            denominator: value.denominator().clone(),
        }),
    }
}

/// Decodes raw share records and reconstructs the secret from them.
pub fn reconstruct_from_records(
    records: &[ShareRecord],
    threshold: usize,
) -> Result<BigInt, ReconstructError> {
    let points = decode_records(records)?;
    for point in &points {
        debug!(%point, "decoded share");
    }
    reconstruct_secret(&points, threshold)
}
