use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Result, ShareError};

/// Digit symbols in value order. Input is matched case-insensitively.
pub const DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

// Position of `c` in DIGITS, if any
fn digit_value(c: char) -> Option<u32> {
    DIGITS.find(c.to_ascii_lowercase()).map(|pos| pos as u32)
}

/// Decode an unsigned string of base-`base` digits into an integer.
///
/// Digits are accumulated most-significant first as `value * base + digit`.
/// The empty string decodes to zero.
pub fn decode(s: &str, base: u32) -> Result<BigUint> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ShareError::UnsupportedBase(base));
    }

    let mut value = BigUint::zero();
    for c in s.chars() {
        let digit = match digit_value(c) {
            Some(d) if d < base => d,
            _ => return Err(ShareError::InvalidDigit { digit: c, base }),
        };
        value = value * base + digit;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode("ff", 16).unwrap(), BigUint::from(255u32));
        assert_eq!(decode("FF", 16).unwrap(), BigUint::from(255u32));
    }

    #[test]
    fn test_decode_binary_and_base36() {
        assert_eq!(decode("111", 2).unwrap(), BigUint::from(7u32));
        assert_eq!(decode("zz", 36).unwrap(), BigUint::from(36u32 * 36 - 1));
    }

    #[test]
    fn test_empty_string_is_zero() {
        for base in MIN_BASE..=MAX_BASE {
            assert!(decode("", base).unwrap().is_zero());
        }
    }

    #[test]
    fn test_rejects_digit_out_of_range() {
        let err = decode("1739", 8).unwrap_err();
        assert_eq!(err, ShareError::InvalidDigit { digit: '9', base: 8 });
        assert_eq!(err.to_string(), "Invalid digit '9' for base 8");
    }

    #[test]
    fn test_rejects_symbols_outside_alphabet() {
        assert!(matches!(
            decode("12-3", 10),
            Err(ShareError::InvalidDigit { digit: '-', base: 10 })
        ));
        assert!(matches!(
            decode("é", 36),
            Err(ShareError::InvalidDigit { digit: 'é', .. })
        ));
    }

    #[test]
    fn test_rejects_unsupported_base() {
        assert_eq!(decode("0", 1).unwrap_err(), ShareError::UnsupportedBase(1));
        assert_eq!(decode("0", 37).unwrap_err(), ShareError::UnsupportedBase(37));
    }

    #[test]
    fn test_large_value() {
        // 2^128 in hex
        let value = decode("100000000000000000000000000000000", 16).unwrap();
        assert_eq!(value, BigUint::from(1u8) << 128);
    }

    proptest! {
        #[test]
        fn prop_matches_std_radix(n in any::<u64>(), base in MIN_BASE..=MAX_BASE) {
            let encoded = BigUint::from(n).to_str_radix(base);
            prop_assert_eq!(decode(&encoded, base).unwrap(), BigUint::from(n));
        }

        #[test]
        fn prop_case_insensitive(s in "[0-9a-zA-Z]{0,40}") {
            prop_assert_eq!(decode(&s, 36), decode(&s.to_ascii_uppercase(), 36));
            prop_assert_eq!(decode(&s, 36), decode(&s.to_ascii_lowercase(), 36));
        }

        #[test]
        fn prop_rejects_digits_at_or_above_base(base in MIN_BASE..MAX_BASE, prefix in "[01]{0,8}") {
            let bad = DIGITS.chars().nth(base as usize).unwrap();
            let input = format!("{prefix}{bad}");
            let rejected = matches!(decode(&input, base), Err(ShareError::InvalidDigit { .. }));
            prop_assert!(rejected);
        }
    }
}
