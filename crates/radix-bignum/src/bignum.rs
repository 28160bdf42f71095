//! Big number type and basic digit operations.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use radix_types::ArithError;

use crate::sign::Sign;

/// Digit type for big number representation: one positional "word".
pub type Digit = u64;
/// Double-width type for digit arithmetic intermediates.
pub type DoubleDigit = u128;

/// Radix used when none is given: `floor(sqrt(i64::MAX))`.
pub const DEFAULT_BASE: Digit = 3_037_000_499;

/// A heap-allocated signed integer in positional notation over a fixed radix.
///
/// Internally represented as a little-endian sequence of digits, each in
/// `[0, base)`. Storage may hold zero digits above the most significant
/// nonzero one; those are never visible to arithmetic.
#[derive(Clone)]
pub struct BigNumber {
    /// Little-endian digits (digits[0] is the least significant).
    digits: Vec<Digit>,
    /// Radix of the representation, at least 2.
    base: Digit,
    /// Sign; ignored when the value is zero.
    sign: Sign,
    /// One past the index of the most significant nonzero digit.
    len: usize,
}

/// Reject radixes below 2.
pub fn check_base(base: Digit) -> Result<(), ArithError> {
    if base < 2 {
        return Err(ArithError::InvalidBase(base));
    }
    Ok(())
}

/// Index one past the highest nonzero digit.
pub(crate) fn significant_len_of(digits: &[Digit]) -> usize {
    digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

impl BigNumber {
    /// Create a zero-valued BigNumber in the default base.
    pub fn zero() -> Self {
        Self::zero_in(DEFAULT_BASE)
    }

    /// Create a BigNumber in the default base from an `i64`.
    pub fn from_i64(value: i64) -> Self {
        Self::from_signed_native(value, DEFAULT_BASE)
    }

    /// Create a BigNumber in the default base from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self::from_native(value, DEFAULT_BASE)
    }

    /// Create a BigNumber from an `i64` in the given base.
    pub fn with_base(value: i64, base: Digit) -> Result<Self, ArithError> {
        check_base(base)?;
        Ok(Self::from_signed_native(value, base))
    }

    /// Create a BigNumber from a `u64` in the given base.
    pub fn from_u64_in(value: u64, base: Digit) -> Result<Self, ArithError> {
        check_base(base)?;
        Ok(Self::from_native(value, base))
    }

    /// Create a BigNumber from little-endian digits.
    ///
    /// Fails if the base is below 2 or any digit is not below the base.
    pub fn from_digits(digits: Vec<Digit>, base: Digit, sign: Sign) -> Result<Self, ArithError> {
        check_base(base)?;
        if let Some(&digit) = digits.iter().find(|&&d| d >= base) {
            return Err(ArithError::DigitOutOfRange { digit, base });
        }
        Ok(Self::from_raw(digits, base, sign))
    }

    pub(crate) fn zero_in(base: Digit) -> Self {
        Self {
            digits: Vec::new(),
            base,
            sign: Sign::Positive,
            len: 0,
        }
    }

    pub(crate) fn one_in(base: Digit) -> Self {
        Self::from_native(1, base)
    }

    /// Repeated division by `base`; the base must already be valid.
    pub(crate) fn from_native(mut value: u64, base: Digit) -> Self {
        let mut n = Self::zero_in(base);
        while value >= base {
            n.push_digit(value % base);
            value /= base;
        }
        n.push_digit(value);
        n
    }

    pub(crate) fn from_signed_native(value: i64, base: Digit) -> Self {
        Self::from_native(value.unsigned_abs(), base).into_signed(Sign::of(value))
    }

    /// Wrap already-validated digits, recomputing the significant length.
    pub(crate) fn from_raw(digits: Vec<Digit>, base: Digit, sign: Sign) -> Self {
        let len = significant_len_of(&digits);
        Self {
            digits,
            base,
            sign,
            len,
        }
    }

    /// Total number of stored digits, including non-significant high zeros.
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// Number of digits up to and including the most significant nonzero one.
    pub fn significant_len(&self) -> usize {
        self.len
    }

    /// Radix of this number.
    pub fn base(&self) -> Digit {
        self.base
    }

    /// Stored sign. Zero is never negative; see [`BigNumber::is_negative`].
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    /// Return true if this number is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// The significant digits, least significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.len]
    }

    pub(crate) fn storage(&self) -> &[Digit] {
        &self.digits
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Vec<Digit> {
        &mut self.digits
    }

    pub(crate) fn set_significant_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Digit at index 0, or `None` for zero.
    pub fn least_significant_digit(&self) -> Option<Digit> {
        self.digits().first().copied()
    }

    /// Highest nonzero digit, or `None` for zero.
    pub fn most_significant_digit(&self) -> Option<Digit> {
        self.digits().last().copied()
    }

    /// Append a digit at the most significant end.
    ///
    /// The digit must be below the base.
    pub fn push_digit(&mut self, value: Digit) {
        debug_assert!(value < self.base, "digit {value} out of range for base {}", self.base);
        self.digits.push(value);
        if value != 0 {
            self.len = self.digits.len();
        }
    }

    /// Insert `count` zero digits at the least significant end,
    /// multiplying the value by `base^count`. Zero stays zero.
    pub fn prepend_zero_digits(&mut self, count: usize) {
        if count == 0 || self.is_zero() {
            return;
        }
        self.digits.splice(0..0, std::iter::repeat(0).take(count));
        self.len += count;
    }

    /// Grow storage by `count` zero digits at the most significant end.
    /// The value is unchanged.
    pub fn append_zero_digits(&mut self, count: usize) {
        self.digits.resize(self.digits.len() + count, 0);
    }

    /// Copy the storage window `[from, to)` into a new number with the same
    /// base and sign.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > self.size()`.
    pub fn split_by_digit_range(&self, from: usize, to: usize) -> BigNumber {
        Self::from_raw(self.digits[from..to].to_vec(), self.base, self.sign)
    }

    /// Same value with the opposite sign.
    pub fn negate(&self) -> BigNumber {
        self.with_sign(self.sign.negate())
    }

    /// Absolute value.
    pub fn abs(&self) -> BigNumber {
        self.with_sign(Sign::Positive)
    }

    /// Same magnitude with the given sign.
    pub fn with_sign(&self, sign: Sign) -> BigNumber {
        self.clone().into_signed(sign)
    }

    pub(crate) fn into_signed(mut self, sign: Sign) -> BigNumber {
        self.sign = sign;
        self
    }

    /// `other` expressed in this number's base, borrowing when no conversion is needed.
    pub(crate) fn aligned<'a>(&self, other: &'a BigNumber) -> Cow<'a, BigNumber> {
        if other.base == self.base {
            Cow::Borrowed(other)
        } else {
            Cow::Owned(other.rebased(self.base))
        }
    }

    /// Three-way comparison.
    ///
    /// Numbers with different significant lengths are ordered by length
    /// alone, regardless of sign. Equal lengths are ordered by the sign of
    /// `self - other`, so for two non-negative values this is the ordinary
    /// numeric order.
    pub fn compare(&self, other: &BigNumber) -> Ordering {
        let other = self.aligned(other);
        if self.len != other.len {
            return self.len.cmp(&other.len);
        }
        let difference = self.subtract(&other);
        if difference.is_zero() {
            Ordering::Equal
        } else if difference.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl FromStr for BigNumber {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_decimal())
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({})", self.render_raw())
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        let other = self.aligned(other);
        self.digits() == other.digits() && (self.is_zero() || self.sign == other.sign)
    }
}

impl Eq for BigNumber {}
