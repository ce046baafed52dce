//! The signed arbitrary-precision integer type.

use crate::arith::{self, BASE, DIGIT_WIDTH};
use crate::digits::{Digit, DigitVec};
use crate::error::{Error, ErrorCode, Result};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use core::str::FromStr;

/// An integer of unbounded magnitude, stored as a sign and a little-endian
/// sequence of base-10^9 digits.
///
/// The representation is canonical: no most-significant zero digits are kept
/// (zero itself is the single digit `0`), and the sign flag of zero is always
/// positive, so structural equality is numeric equality.
///
/// ```
/// use longint::BigInt;
///
/// let a: BigInt = "123456789123456789123456789".parse().unwrap();
/// let b = BigInt::from(1_000_000_007_i64);
/// assert_eq!((&a * &b).to_string(), "123456789987654312987654312864197523");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) digits: DigitVec,
}

impl BigInt {
    /// Zero.
    pub fn new() -> Self {
        let mut digits = DigitVec::new();
        digits.push(0);
        BigInt {
            negative: false,
            digits,
        }
    }

    /// True for the single canonical representation of zero.
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// -1, 0, or 1.
    pub fn sign(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// Adds one in place.
    pub fn increment(&mut self) {
        if self.negative {
            arith::isub_one(&mut self.digits);
            self.normalize_zero();
        } else {
            arith::iadd_one(&mut self.digits);
        }
    }

    /// Subtracts one in place.
    pub fn decrement(&mut self) {
        if self.negative {
            arith::iadd_one(&mut self.digits);
        } else if self.is_zero() {
            self.digits[0] = 1;
            self.negative = true;
        } else {
            arith::isub_one(&mut self.digits);
        }
    }

    /// Truncating division: `(quotient, remainder)` such that
    /// `quotient * divisor + remainder == self`, with the quotient rounded
    /// toward zero and the remainder taking the dividend's sign.
    ///
    /// Errors when `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::division_by_zero());
        }
        if self.is_zero() {
            return Ok((BigInt::new(), BigInt::new()));
        }

        match arith::compare(&self.digits, &divisor.digits) {
            Ordering::Less => Ok((BigInt::new(), self.clone())),
            Ordering::Equal => {
                let mut one = DigitVec::new();
                one.push(1);
                let quotient = BigInt {
                    negative: self.negative != divisor.negative,
                    digits: one,
                };
                Ok((quotient, BigInt::new()))
            }
            Ordering::Greater => {
                let (q, r) = arith::div_rem(&self.digits, &divisor.digits);
                let mut quotient = BigInt {
                    negative: self.negative != divisor.negative,
                    digits: q,
                };
                let mut remainder = BigInt {
                    negative: self.negative,
                    digits: r,
                };
                quotient.normalize_zero();
                remainder.normalize_zero();
                Ok((quotient, remainder))
            }
        }
    }

    /// Truncating division by a native divisor in a single pass over the
    /// digits, avoiding the long-division machinery. Agrees with
    /// [`div_rem`](BigInt::div_rem) for every `i32` divisor.
    ///
    /// Errors when `divisor` is zero.
    pub fn div_rem_small(&self, divisor: i32) -> Result<(BigInt, i32)> {
        if divisor == 0 {
            return Err(Error::division_by_zero());
        }

        let negative = self.negative != (divisor < 0);
        let magnitude = divisor.unsigned_abs() as u64;
        if magnitude == 1 {
            let mut quotient = BigInt {
                negative,
                digits: self.digits.clone(),
            };
            quotient.normalize_zero();
            return Ok((quotient, 0));
        }

        let mut digits = DigitVec::with_capacity(self.digits.len());
        let mut carry: u64 = 0;
        for &digit in self.digits.iter().rev() {
            let current = carry * BASE + digit as u64;
            digits.push((current / magnitude) as Digit);
            carry = current % magnitude;
        }
        digits.as_mut_slice().reverse();
        arith::normalize(&mut digits);

        let mut quotient = BigInt { negative, digits };
        quotient.normalize_zero();
        // carry < |divisor| <= 2^31, so both signs fit an i32.
        let remainder = if self.negative {
            -(carry as i64)
        } else {
            carry as i64
        };
        Ok((quotient, remainder as i32))
    }

    /// The value shifted right by `power` decimal digits, truncating toward
    /// zero. Equivalent to dividing by `10^power` but O(n).
    pub fn div_pow10(&self, power: usize) -> BigInt {
        let skip = power / DIGIT_WIDTH;
        if skip >= self.digits.len() {
            return BigInt::new();
        }

        let small = 10u64.pow((power % DIGIT_WIDTH) as u32);
        let mut digits;
        if small == 1 {
            digits = DigitVec::from_slice(&self.digits[skip..]);
        } else {
            let scale = BASE / small;
            digits = DigitVec::with_capacity(self.digits.len() - skip);
            for i in skip..self.digits.len() {
                let mut digit = self.digits[i] as u64 / small;
                if i + 1 < self.digits.len() {
                    digit += self.digits[i + 1] as u64 % small * scale;
                }
                digits.push(digit as Digit);
            }
        }
        arith::normalize(&mut digits);

        let mut result = BigInt {
            negative: self.negative,
            digits,
        };
        result.normalize_zero();
        result
    }

    /// The lowest `power` decimal digits of the value, with the value's own
    /// sign. Equivalent to the remainder of dividing by `10^power` but O(n).
    pub fn rem_pow10(&self, power: usize) -> BigInt {
        let skip = power / DIGIT_WIDTH;
        if skip >= self.digits.len() {
            return self.clone();
        }

        let small = 10u64.pow((power % DIGIT_WIDTH) as u32);
        let mut digits = DigitVec::from_slice(&self.digits[..skip]);
        digits.push((self.digits[skip] as u64 % small) as Digit);
        arith::normalize(&mut digits);

        let mut result = BigInt {
            negative: self.negative,
            digits,
        };
        result.normalize_zero();
        result
    }

    /// Parses a decimal string: optional leading spaces or tabs, an optional
    /// `+` or `-`, then one or more ASCII digits and nothing else.
    ///
    /// Malformed input is reported with the byte position of the offending
    /// character, never silently coerced.
    pub fn from_decimal_str(input: &str) -> Result<BigInt> {
        let bytes = input.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
            pos += 1;
        }
        let mut negative = false;
        if pos < bytes.len() {
            match bytes[pos] {
                b'+' => pos += 1,
                b'-' => {
                    negative = true;
                    pos += 1;
                }
                _ => {}
            }
        }

        let decimal = &bytes[pos..];
        if decimal.is_empty() {
            return Err(Error::syntax(ErrorCode::ExpectedDigit, pos));
        }
        for (i, &byte) in decimal.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(Error::syntax(ErrorCode::InvalidDigit, pos + i));
            }
        }

        let mut digits = DigitVec::with_capacity(decimal.len() / DIGIT_WIDTH + 1);
        for chunk in decimal.rchunks(DIGIT_WIDTH) {
            let mut value: Digit = 0;
            for &byte in chunk {
                value = value * 10 + (byte - b'0') as Digit;
            }
            digits.push(value);
        }
        arith::normalize(&mut digits);

        let mut result = BigInt { negative, digits };
        result.normalize_zero();
        Ok(result)
    }

    /// Converts to an `i64`, failing with a conversion error when the
    /// magnitude does not fit in two digit groups (absolute value at most
    /// `10^18 - 1`).
    pub fn to_i64(&self) -> Result<i64> {
        if self.digits.len() > 2 {
            return Err(Error::number_out_of_range());
        }
        let mut value = self.digits[0] as i64;
        if self.digits.len() == 2 {
            value += self.digits[1] as i64 * BASE as i64;
        }
        Ok(if self.negative { -value } else { value })
    }

    /// Combine `rhs` into `self` by signed addition.
    pub(crate) fn add_assign_ref(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            arith::iadd_shifted(&mut self.digits, &rhs.digits, 0);
            return;
        }
        match arith::compare(&self.digits, &rhs.digits) {
            Ordering::Less => {
                let mut larger = rhs.digits.clone();
                arith::isub(&mut larger, &self.digits);
                self.digits = larger;
                self.negative = rhs.negative;
            }
            Ordering::Equal | Ordering::Greater => {
                arith::isub(&mut self.digits, &rhs.digits);
            }
        }
        self.normalize_zero();
    }

    /// Re-establish the canonical sign of zero after a mutation that may
    /// have produced a zero magnitude.
    pub(crate) fn normalize_zero(&mut self) {
        if self.digits.len() == 1 && self.digits[0] == 0 {
            self.negative = false;
        }
    }

    fn from_magnitude(negative: bool, mut magnitude: u64) -> BigInt {
        let mut digits = DigitVec::new();
        loop {
            digits.push((magnitude % BASE) as Digit);
            magnitude /= BASE;
            if magnitude == 0 {
                break;
            }
        }
        let mut result = BigInt { negative, digits };
        result.normalize_zero();
        result
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> Self {
                    BigInt::from_magnitude(false, value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> Self {
                    // unsigned_abs keeps the most negative value exact.
                    BigInt::from_magnitude(value < 0, value.unsigned_abs() as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<i64> {
        value.to_i64()
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<i64> {
        value.to_i64()
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::from_decimal_str(s)
    }
}

impl Display for BigInt {
    /// Writes the plain decimal form: a `-` for negative values, then the
    /// most significant digit group unpadded and every lower group
    /// zero-padded to nine characters.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let mut buffer = itoa::Buffer::new();
        let mut groups = self.digits.iter().rev();
        match groups.next() {
            Some(top) => f.write_str(buffer.format(*top))?,
            None => return Ok(()),
        }
        for group in groups {
            let formatted = buffer.format(*group);
            f.write_str(&"00000000"[..DIGIT_WIDTH - formatted.len()])?;
            f.write_str(formatted)?;
        }
        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => arith::compare(&self.digits, &other.digits),
            // Between negatives the larger magnitude is the smaller value.
            (true, true) => arith::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.digits.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn increment_decrement_test() {
        let mut n = BigInt::from(-1);
        n.increment();
        assert!(n.is_zero());
        assert_eq!(n.sign(), 0);
        n.increment();
        assert_eq!(n, BigInt::from(1));

        n.decrement();
        n.decrement();
        assert_eq!(n, BigInt::from(-1));

        let mut n = BigInt::from(1_000_000_000_u64);
        n.decrement();
        assert_eq!(n.to_string(), "999999999");
    }

    #[test]
    fn to_i64_boundary_test() {
        let fits: BigInt = "999999999999999999".parse().unwrap();
        assert_eq!(fits.to_i64().unwrap(), 999_999_999_999_999_999);
        assert_eq!(i64::try_from(&-fits).unwrap(), -999_999_999_999_999_999);

        let three_groups: BigInt = "1000000000000000000".parse().unwrap();
        let err = three_groups.to_i64().unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn div_rem_small_test() {
        let n: BigInt = "123456789123456789123456789".parse().unwrap();
        let (q, r) = n.div_rem_small(1000).unwrap();
        assert_eq!(q.to_string(), "123456789123456789123456");
        assert_eq!(r, 789);

        let (q, r) = (-&n).div_rem_small(1000).unwrap();
        assert_eq!(q.to_string(), "-123456789123456789123456");
        assert_eq!(r, -789);

        let (q, r) = n.div_rem_small(-1).unwrap();
        assert_eq!(q.to_string(), "-123456789123456789123456789");
        assert_eq!(r, 0);

        assert!(n.div_rem_small(0).unwrap_err().is_arithmetic());

        // The most negative divisor has no positive i32 counterpart.
        let (q, r) = BigInt::from(i32::MIN as i64 * 3 - 1)
            .div_rem_small(i32::MIN)
            .unwrap();
        assert_eq!(q, BigInt::from(3));
        assert_eq!(r, -1);
    }

    #[test]
    fn pow10_shift_test() {
        let q: BigInt = "123456789123456789123456789".parse().unwrap();
        assert_eq!(q.div_pow10(7).to_string(), "12345678912345678912");
        assert_eq!(q.rem_pow10(7).to_string(), "3456789");
        assert_eq!(q.div_pow10(0), q);
        assert!(q.rem_pow10(0).is_zero());
        assert!(q.div_pow10(100).is_zero());
        assert_eq!(q.rem_pow10(100), q);

        let negative = -&q;
        assert_eq!(negative.div_pow10(9).to_string(), "-123456789123456789");
        assert_eq!(negative.rem_pow10(9).to_string(), "-123456789");
    }

    #[test]
    fn ordering_test() {
        let values: [BigInt; 5] = [
            "-1000000000000".parse().unwrap(),
            BigInt::from(-1),
            BigInt::new(),
            BigInt::from(1),
            "1000000000000".parse().unwrap(),
        ];
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{:?} vs {:?}", a, b);
            }
        }
    }
}
