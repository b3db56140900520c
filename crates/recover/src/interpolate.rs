// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation at x = 0 over exact rationals.

use crate::errors::ReconstructError;
use crate::share::SharePoint;
use unshard_rational::Rational;

/// Interpolates the polynomial through `points` and evaluates it at x = 0.
///
/// For each point i the Lagrange basis weight at zero is
///
/// ```text
/// L_i = Π_{j ≠ i}  -x_j / (x_i - x_j)
/// ```
///
/// and the result is `Σ L_i * y_i`, accumulated as a reduced rational.
/// Exact rational addition is commutative and associative, so the reduced
/// result is independent of the iteration order over `points`.
///
/// # Errors
///
/// Returns `DuplicateAbscissa` if two points share an x-coordinate; the
/// basis denominator `x_i - x_j` would be zero.
pub fn interpolate_at_zero(points: &[SharePoint]) -> Result<Rational, ReconstructError> {
    for (i, point) in points.iter().enumerate() {
        for other in &points[i + 1..] {
            if point.x() == other.x() {
                return Err(ReconstructError::DuplicateAbscissa {
                    x: point.x().clone(),
                });
            }
        }
    }

    let mut total = Rational::zero();
    for (i, point) in points.iter().enumerate() {
        let mut basis = Rational::one();
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let factor = Rational::new(-other.x(), point.x() - other.x()).map_err(|_| {
                ReconstructError::DuplicateAbscissa {
                    x: other.x().clone(),
                }
            })?;
            basis = basis.mul(&factor);
        }
        total = total.add(&basis.mul(&Rational::from_integer(point.y().clone())));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::Zero;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn point(x: i64, y: i64) -> SharePoint {
        SharePoint::new(BigInt::from(x), BigInt::from(y))
    }

    /// Horner evaluation of a polynomial given ascending coefficients.
    fn eval(coefficients: &[BigInt], x: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for c in coefficients.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    #[test]
    fn test_recovers_constant_term() {
        // P(x) = x^2 + 3 sampled at x = 1, 2, 3
        let points = vec![point(1, 4), point(2, 7), point(3, 12)];
        let secret = interpolate_at_zero(&points).unwrap();
        assert_eq!(secret, Rational::from_integer(BigInt::from(3)));
    }

    #[test]
    fn test_order_independence() {
        let points = vec![point(1, 4), point(2, 7), point(3, 12)];
        let expected = interpolate_at_zero(&points).unwrap();

        let mut reversed = points.clone();
        reversed.reverse();
        assert_eq!(interpolate_at_zero(&reversed).unwrap(), expected);

        let mut rotated = points.clone();
        rotated.rotate_left(1);
        assert_eq!(interpolate_at_zero(&rotated).unwrap(), expected);
    }

    #[test]
    fn test_duplicate_abscissa() {
        let points = vec![point(1, 4), point(2, 7), point(2, 9)];
        assert_eq!(
            interpolate_at_zero(&points),
            Err(ReconstructError::DuplicateAbscissa {
                x: BigInt::from(2)
            })
        );
    }

    #[test]
    fn test_fractional_result_is_preserved() {
        // Points off any integer-constant polynomial of degree 2: the
        // exact value at zero is 1/3 and must not be truncated here.
        let points = vec![point(1, 1), point(2, 2), point(4, 5)];
        let value = interpolate_at_zero(&points).unwrap();
        assert_eq!(value, Rational::new(BigInt::from(1), BigInt::from(3)).unwrap());
    }

    #[test]
    fn test_single_point() {
        // Degree 0: P(0) is the lone y-value.
        let points = vec![point(5, 42)];
        let value = interpolate_at_zero(&points).unwrap();
        assert_eq!(value, Rational::from_integer(BigInt::from(42)));
    }

    #[test]
    fn test_random_polynomials_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let k = rng.gen_range(2..=6usize);
            let coefficients: Vec<BigInt> = (0..k)
                .map(|_| BigInt::from(rng.gen_range(-1_000_000_000i64..=1_000_000_000)))
                .collect();

            let n = k + 2;
            let points: Vec<SharePoint> = (1..=n)
                .map(|x| {
                    let x = BigInt::from(x as i64);
                    let y = eval(&coefficients, &x);
                    SharePoint::new(x, y)
                })
                .collect();

            // Any k of the n consistent points recover the constant term.
            for start in 0..=(n - k) {
                let value = interpolate_at_zero(&points[start..start + k]).unwrap();
                assert_eq!(value, Rational::from_integer(coefficients[0].clone()));
            }
        }
    }
}
