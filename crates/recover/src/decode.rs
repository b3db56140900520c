// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Positional base decoding of share values.

use crate::errors::ReconstructError;
use num_bigint::BigInt;
use num_traits::Zero;

/// Decodes a digit string in the given base to a big integer.
///
/// The digit alphabet is `'0'..='9'` followed by `'a'..='z'`, matched
/// case-insensitively. The accumulated value is unbounded: each digit
/// folds in as `value = value * base + digit` over `BigInt`.
///
/// # Errors
///
/// - `UnsupportedBase` if `base` is outside 2..=36.
/// - `EmptyValue` if `digits` is empty.
/// - `InvalidDigit` if a character is not in the alphabet or its value
///   is not below `base`.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, ReconstructError> {
    if !(2..=36).contains(&base) {
        return Err(ReconstructError::UnsupportedBase { base });
    }
    if digits.is_empty() {
        return Err(ReconstructError::EmptyValue);
    }

    let mut value = BigInt::zero();
    for c in digits.chars() {
        let d = c
            .to_digit(base)
            .ok_or(ReconstructError::InvalidDigit { digit: c, base })?;
        value = value * base + d;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode("12", 10).unwrap(), BigInt::from(12));
        assert_eq!(decode("213", 4).unwrap(), BigInt::from(39));
        assert_eq!(decode("0", 16).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("aEd7", 15).unwrap(), decode("AeD7", 15).unwrap());
        assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
    }

    #[test]
    fn test_decode_exceeds_machine_width() {
        let digits = "1".repeat(200);
        let value = decode(&digits, 2).unwrap();
        let expected = (BigInt::from(1) << 200) - 1;
        assert_eq!(value, expected);
    }

    #[test]
    fn test_decode_round_trip() {
        for base in [2u32, 3, 8, 15, 16, 36] {
            let n = BigInt::parse_bytes(b"987654321098765432109876543210", 10).unwrap();
            let encoded = n.to_str_radix(base);
            assert_eq!(decode(&encoded, base).unwrap(), n);
        }
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            decode("g", 10),
            Err(ReconstructError::InvalidDigit {
                digit: 'g',
                base: 10
            })
        );
        // '2' is a valid character but not a base-2 digit
        assert_eq!(
            decode("102", 2),
            Err(ReconstructError::InvalidDigit {
                digit: '2',
                base: 2
            })
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(decode("", 10), Err(ReconstructError::EmptyValue));
    }

    #[test]
    fn test_unsupported_base() {
        assert_eq!(
            decode("10", 1),
            Err(ReconstructError::UnsupportedBase { base: 1 })
        );
        assert_eq!(
            decode("10", 37),
            Err(ReconstructError::UnsupportedBase { base: 37 })
        );
    }
}
