//! Base conversion by repeated division.
//!
//! Digits are produced least-significant first by dividing the magnitude by
//! the base until it reaches zero, then reversed. Negative numbers are
//! written as a `-` followed by the digits of their magnitude; there is no
//! two's-complement form. Integers have no size limit, and no library radix
//! formatting is used.

use crate::error::{ReportError, Result};
use num::bigint::{BigInt, BigUint, Sign};
use num::{Integer as _, ToPrimitive as _, Zero as _};

/// Digit alphabet shared by every supported base.
pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// A validated base together with the alphabet used for its digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix {
    base: u32,
    digits: &'static [char; 16],
}

impl Radix {
    pub const BINARY: Self = Self {
        base: 2,
        digits: &HEX_DIGITS,
    };
    pub const HEX: Self = Self {
        base: 16,
        digits: &HEX_DIGITS,
    };

    /// # Errors
    ///
    /// Returns [`ReportError::InvalidRadix`] unless `2 <= base <= 16`.
    pub fn new(base: u32) -> Result<Self> {
        if !(2..=16).contains(&base) {
            return Err(ReportError::InvalidRadix(base));
        }
        Ok(Self {
            base,
            digits: &HEX_DIGITS,
        })
    }

    fn digit(self, remainder: &BigUint) -> char {
        // remainder < base <= 16, so the lookup always hits
        remainder
            .to_usize()
            .and_then(|index| self.digits.get(index))
            .copied()
            .unwrap_or('?')
    }
}

/// Render `number` in `radix`. Zero is `"0"` in every base.
pub fn to_base(number: &BigInt, radix: Radix) -> String {
    if number.is_zero() {
        return "0".to_owned();
    }

    let base = BigUint::from(radix.base);
    let mut magnitude = number.magnitude().clone();
    let mut digits = Vec::new();

    while !magnitude.is_zero() {
        let (quotient, remainder) = magnitude.div_rem(&base);
        digits.push(radix.digit(&remainder));
        magnitude = quotient;
    }

    if number.sign() == Sign::Minus {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// One input integer with its binary and hexadecimal forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub value: BigInt,
    pub binary: String,
    pub hex: String,
}

impl Conversion {
    pub fn of(value: BigInt) -> Self {
        Self {
            binary: to_base(&value, Radix::BINARY),
            hex: to_base(&value, Radix::HEX),
            value,
        }
    }
}
