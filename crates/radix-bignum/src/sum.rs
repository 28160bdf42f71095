//! Addition and subtraction.
//!
//! All helpers take magnitudes plus an explicit sign, so no operand is
//! ever mutated to reuse the unsigned algorithms.

use crate::bignum::{BigNumber, Digit, DoubleDigit};
use crate::sign::Sign;

impl BigNumber {
    /// Add two BigNumbers: self + other.
    pub fn add(&self, other: &BigNumber) -> BigNumber {
        let other = self.aligned(other);
        signed_sum(self, self.sign(), &other, other.sign())
    }

    /// Subtract: self - other.
    pub fn subtract(&self, other: &BigNumber) -> BigNumber {
        let other = self.aligned(other);
        signed_sum(self, self.sign(), &other, other.sign().negate())
    }
}

/// `a_sign*|a| + b_sign*|b|`.
fn signed_sum(a: &BigNumber, a_sign: Sign, b: &BigNumber, b_sign: Sign) -> BigNumber {
    if a.is_zero() {
        return b.with_sign(b_sign);
    }
    if b.is_zero() {
        return a.with_sign(a_sign);
    }
    if a_sign != b_sign {
        return difference(a, a_sign, b, b_sign);
    }
    sum_magnitudes(a, b, a_sign)
}

/// `|a| + |b|` with carry propagation, tagged with `sign`.
fn sum_magnitudes(a: &BigNumber, b: &BigNumber, sign: Sign) -> BigNumber {
    let (long, short) = if a.significant_len() >= b.significant_len() {
        (a, b)
    } else {
        (b, a)
    };
    let base = a.base() as DoubleDigit;
    let mut c = BigNumber::zero_in(a.base());
    let mut carry: DoubleDigit = 0;

    let mut rest = long.significant_digits();
    let paired = rest.by_ref().take(short.significant_len());
    for (x, y) in paired.zip(short.significant_digits()) {
        let partial = x as DoubleDigit + y as DoubleDigit + carry;
        carry = partial / base;
        c.push_digit((partial % base) as Digit);
    }
    for x in rest {
        let partial = x as DoubleDigit + carry;
        carry = partial / base;
        c.push_digit((partial % base) as Digit);
    }
    if carry != 0 {
        c.push_digit(carry as Digit);
    }
    c.into_signed(sign)
}

/// `a_sign*|a| + b_sign*|b|` for opposite signs, without knowing which
/// magnitude is larger.
fn difference(a: &BigNumber, a_sign: Sign, b: &BigNumber, b_sign: Sign) -> BigNumber {
    let a_key = (a.significant_len(), a.most_significant_digit());
    let b_key = (b.significant_len(), b.most_significant_digit());
    if a_key == b_key {
        // Order is not decidable from the leading digit alone.
        return complement_difference(a, a_sign, b, b_sign);
    }
    if a_key < b_key {
        return borrow_difference(b, b_sign, a);
    }
    borrow_difference(a, a_sign, b)
}

/// `|larger| - |smaller|` by borrow propagation, tagged with `sign`.
fn borrow_difference(larger: &BigNumber, sign: Sign, smaller: &BigNumber) -> BigNumber {
    let base = larger.base() as DoubleDigit;
    let mut c = BigNumber::zero_in(larger.base());
    let mut borrow: DoubleDigit = 0;

    let mut rest = larger.significant_digits();
    let paired = rest.by_ref().take(smaller.significant_len());
    for (x, y) in paired.zip(smaller.significant_digits()) {
        let (x, subtrahend) = (x as DoubleDigit, y as DoubleDigit + borrow);
        if x >= subtrahend {
            c.push_digit((x - subtrahend) as Digit);
            borrow = 0;
        } else {
            c.push_digit((x + base - subtrahend) as Digit);
            borrow = 1;
        }
    }
    for x in rest {
        if borrow != 0 && x == 0 {
            c.push_digit((base - 1) as Digit);
        } else {
            c.push_digit(x - borrow as Digit);
            borrow = 0;
        }
    }
    c.into_signed(sign)
}

/// `a_sign*|a| + b_sign*|b|` for same-length operands with equal leading
/// digits, via base complement.
///
/// Adds `|a|` to the base complement of `|b|`. A final carry means
/// `|a| >= |b|` and the digits are the answer; otherwise the digits are the
/// complement of `|b| - |a|` and are complemented back.
fn complement_difference(a: &BigNumber, a_sign: Sign, b: &BigNumber, b_sign: Sign) -> BigNumber {
    let base = a.base() as DoubleDigit;
    let mut c = BigNumber::zero_in(a.base());
    let mut carry: DoubleDigit = 0;

    let mut cursor = c.cursor();
    let mut complementing = false;
    for (x, y) in a.significant_digits().zip(b.significant_digits()) {
        let partial = if complementing {
            x as DoubleDigit + (base - 1 - y as DoubleDigit) + carry
        } else if y == 0 {
            // Low zeros of b leave a's digits untouched.
            cursor.insert(x);
            continue;
        } else {
            complementing = true;
            x as DoubleDigit + (base - y as DoubleDigit)
        };
        carry = partial / base;
        cursor.insert((partial % base) as Digit);
    }

    if carry != 0 {
        return c.into_signed(a_sign);
    }

    let mut cursor = c.cursor();
    let mut complementing = false;
    while let Ok(digit) = cursor.next_digit() {
        if complementing {
            cursor.set((base - 1) as Digit - digit);
        } else if digit != 0 {
            complementing = true;
            cursor.set(base as Digit - digit);
        }
    }
    c.into_signed(b_sign)
}
