//! Multiplication, exponentiation and factorial.

use radix_types::ArithError;

use crate::bignum::{BigNumber, Digit, DoubleDigit};
use crate::sign::Sign;

impl BigNumber {
    /// Multiply: self * other.
    pub fn multiply(&self, other: &BigNumber) -> BigNumber {
        let other = self.aligned(other);
        if self.is_zero() || other.is_zero() {
            return BigNumber::zero_in(self.base());
        }
        multiply_unsigned(self, &other).into_signed(self.sign().multiply(other.sign()))
    }

    /// Multiply by a native integer.
    ///
    /// Factors below the base use a single multiply-with-carry pass; larger
    /// ones are promoted to a BigNumber.
    pub fn multiply_by_native(&self, k: i64) -> BigNumber {
        let magnitude = k.unsigned_abs();
        if magnitude >= self.base() {
            return self.multiply(&BigNumber::from_signed_native(k, self.base()));
        }
        scale(self, magnitude).into_signed(self.sign().multiply(Sign::of(k)))
    }

    /// Raise to a native power by recursive squaring.
    ///
    /// `x^0` is one for every `x`, zero included.
    pub fn power(&self, exponent: u64) -> BigNumber {
        if exponent == 0 {
            return BigNumber::one_in(self.base());
        }
        if self.is_zero() {
            return BigNumber::zero_in(self.base());
        }
        if exponent % 2 == 0 {
            let half = self.power(exponent / 2);
            half.multiply(&half)
        } else {
            self.multiply(&self.power(exponent - 1))
        }
    }

    /// Raise to a BigNumber power.
    ///
    /// Walks the exponent's digits from most to least significant in the
    /// exponent's own base: `result = result^base * self^digit`.
    #[tracing::instrument(level = "trace", skip_all, fields(
        exponent_base = exponent.base(),
        exponent_digits = exponent.significant_len()
    ))]
    pub fn power_big(&self, exponent: &BigNumber) -> Result<BigNumber, ArithError> {
        if exponent.is_negative() {
            return Err(ArithError::NegativeExponent);
        }
        let mut result = BigNumber::one_in(self.base());
        for digit in exponent.significant_digits().rev() {
            result = result.power(exponent.base()).multiply(&self.power(digit));
        }
        Ok(result)
    }

    /// Factorial: `self * (self - 1) * ... * 1`, with `0! = 1`.
    #[tracing::instrument(level = "trace", skip_all, fields(digits = self.significant_len()))]
    pub fn factorial(&self) -> Result<BigNumber, ArithError> {
        if self.is_negative() {
            return Err(ArithError::NegativeFactorialArgument);
        }
        let one = BigNumber::one_in(self.base());
        if self.is_zero() {
            return Ok(one);
        }
        let mut product = self.abs();
        let mut factor = product.subtract(&one);
        while !factor.is_zero() {
            product = product.multiply(&factor);
            factor = factor.subtract(&one);
        }
        Ok(product)
    }
}

/// `|a| * k` by one multiply-with-carry pass; `k` must be below the base.
fn scale(a: &BigNumber, k: Digit) -> BigNumber {
    let base = a.base() as DoubleDigit;
    let k = k as DoubleDigit;
    let mut c = BigNumber::zero_in(a.base());
    let mut carry: DoubleDigit = 0;
    for digit in a.significant_digits() {
        let partial = digit as DoubleDigit * k + carry;
        carry = partial / base;
        c.push_digit((partial % base) as Digit);
    }
    if carry != 0 {
        c.push_digit(carry as Digit);
    }
    c
}

/// `|a| * |b|` by Karatsuba splitting down to single-digit operands.
///
/// ```text
/// a = a1*B^m + a0,  b = b1*B^m + b0,  m = ceil(min(len a, len b) / 2)
/// a*b = a1*b1*B^2m + ((a0+a1)*(b0+b1) - a1*b1 - a0*b0)*B^m + a0*b0
/// ```
fn multiply_unsigned(a: &BigNumber, b: &BigNumber) -> BigNumber {
    match (a.significant_len(), b.significant_len()) {
        (0, _) | (_, 0) => return BigNumber::zero_in(a.base()),
        (1, _) => return scale(b, a.digits()[0]),
        (_, 1) => return scale(a, b.digits()[0]),
        _ => {}
    }

    let middle = a.significant_len().min(b.significant_len()).div_ceil(2);
    let (a_low, a_high) = halves(a, middle);
    let (b_low, b_high) = halves(b, middle);

    let low = multiply_unsigned(&a_low, &b_low);
    let mut high = multiply_unsigned(&a_high, &b_high);
    let mut cross = multiply_unsigned(&a_low.add(&a_high), &b_low.add(&b_high))
        .subtract(&high.add(&low));

    cross.prepend_zero_digits(middle);
    high.prepend_zero_digits(2 * middle);
    high.add(&cross).add(&low)
}

/// Positive low and high parts of `n` split below digit `middle`.
fn halves(n: &BigNumber, middle: usize) -> (BigNumber, BigNumber) {
    let len = n.significant_len();
    let low = n.split_by_digit_range(0, middle).into_signed(Sign::Positive);
    let high = n.split_by_digit_range(middle, len).into_signed(Sign::Positive);
    (low, high)
}
