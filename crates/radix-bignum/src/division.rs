//! Division, modulo and integer square root.
//!
//! The general quotient and the square root are found by binary search.
//! Each probe compares `mid` and then one neighbour in the direction of the
//! mismatch, which lets the search return as soon as the answer is bracketed
//! instead of bisecting down to a one-element interval.

use std::cmp::Ordering;

use radix_types::ArithError;

use crate::bignum::{BigNumber, Digit, DoubleDigit};
use crate::sign::Sign;

/// Quotient and remainder of a division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionResult {
    pub quotient: BigNumber,
    pub remainder: BigNumber,
}

impl BigNumber {
    /// Division with remainder: `self = quotient * divisor + remainder`.
    ///
    /// The remainder takes the divisor's sign and `|remainder| < |divisor|`,
    /// so the quotient is rounded toward negative infinity when the operand
    /// signs differ.
    pub fn divide(&self, divisor: &BigNumber) -> Result<DivisionResult, ArithError> {
        let divisor = self.aligned(divisor);
        if divisor.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(DivisionResult {
                quotient: BigNumber::zero_in(self.base()),
                remainder: self.clone(),
            });
        }
        let magnitude = divisor.abs();
        let (quotient, remainder) = divide_unsigned(&self.abs(), &magnitude);
        Ok(apply_signs(
            quotient,
            remainder,
            self.sign(),
            divisor.sign(),
            &magnitude,
        ))
    }

    /// Remainder of [`BigNumber::divide`].
    pub fn modulo(&self, divisor: &BigNumber) -> Result<BigNumber, ArithError> {
        Ok(self.divide(divisor)?.remainder)
    }

    /// Divide by a native integer.
    ///
    /// Divisors below the base use word-at-a-time long division; larger ones
    /// are promoted to a BigNumber.
    pub fn divide_by_native(&self, k: i64) -> Result<DivisionResult, ArithError> {
        if k == 0 {
            return Err(ArithError::DivideByZero);
        }
        let magnitude = k.unsigned_abs();
        if magnitude >= self.base() {
            return self.divide(&BigNumber::from_signed_native(k, self.base()));
        }
        let (quotient, remainder) = short_divide(self, magnitude);
        Ok(apply_signs(
            quotient,
            remainder,
            self.sign(),
            Sign::of(k),
            &BigNumber::from_native(magnitude, self.base()),
        ))
    }

    /// Largest integer whose square does not exceed `self`.
    #[tracing::instrument(level = "trace", skip_all, fields(digits = self.significant_len()))]
    pub fn integer_square_root(&self) -> Result<BigNumber, ArithError> {
        if self.is_negative() {
            return Err(ArithError::NegativeRadicand);
        }
        let base = self.base();
        let one = BigNumber::one_in(base);
        if self.compare(&BigNumber::from_native(2, base)) == Ordering::Less {
            return Ok(self.abs());
        }

        let mut low = one.clone();
        let mut high = halve(self);
        let mut probes = 0u32;
        while low.compare(&high) != Ordering::Greater {
            probes += 1;
            let mid = halve(&low.add(&high));
            let verdict = match mid.multiply(&mid).compare(self) {
                Ordering::Equal => Some(mid),
                Ordering::Less => {
                    let next = mid.add(&one);
                    match next.multiply(&next).compare(self) {
                        Ordering::Equal => Some(next),
                        Ordering::Greater => Some(mid),
                        Ordering::Less => {
                            low = next;
                            None
                        }
                    }
                }
                Ordering::Greater => {
                    let prev = mid.subtract(&one);
                    if prev.multiply(&prev).compare(self) != Ordering::Greater {
                        Some(prev)
                    } else {
                        high = prev;
                        None
                    }
                }
            };
            if let Some(root) = verdict {
                tracing::debug!(probes, "square root search finished");
                return Ok(root);
            }
        }
        unreachable!("square root escaped the search interval")
    }
}

/// Give the quotient and remainder magnitudes their signs.
///
/// Same-sign operands (or an exact division) keep the truncated quotient.
/// Otherwise the quotient is pushed one step further from zero and the
/// remainder becomes `|divisor| - remainder`, keeping `q*b + r == a`.
fn apply_signs(
    quotient: BigNumber,
    remainder: BigNumber,
    dividend_sign: Sign,
    divisor_sign: Sign,
    divisor_magnitude: &BigNumber,
) -> DivisionResult {
    let quotient_sign = dividend_sign.multiply(divisor_sign);
    if dividend_sign == divisor_sign || remainder.is_zero() {
        return DivisionResult {
            quotient: quotient.into_signed(quotient_sign),
            remainder: remainder.into_signed(divisor_sign),
        };
    }
    let one = BigNumber::one_in(quotient.base());
    DivisionResult {
        quotient: quotient.add(&one).into_signed(quotient_sign),
        remainder: divisor_magnitude.subtract(&remainder).into_signed(divisor_sign),
    }
}

/// `|a| / k` by long division from the most significant digit.
///
/// Valid for any `k` in `[1, base]`: the running value stays below
/// `k * base`, which fits a double digit.
fn short_divide(a: &BigNumber, k: Digit) -> (BigNumber, BigNumber) {
    let base = a.base() as DoubleDigit;
    let divisor = k as DoubleDigit;
    let mut quotient = vec![0; a.significant_len()];
    let mut running: DoubleDigit = 0;
    for (i, digit) in a.significant_digits().enumerate().rev() {
        running = running * base + digit as DoubleDigit;
        quotient[i] = (running / divisor) as Digit;
        running %= divisor;
    }
    (
        BigNumber::from_raw(quotient, a.base(), Sign::Positive),
        BigNumber::from_native(running as Digit, a.base()),
    )
}

fn halve(n: &BigNumber) -> BigNumber {
    short_divide(n, 2).0
}

/// `|a| / |b|` by binary search on the quotient. Both operands must be
/// non-negative and `b` nonzero.
#[tracing::instrument(level = "trace", skip_all, fields(
    dividend_digits = a.significant_len(),
    divisor_digits = b.significant_len()
))]
fn divide_unsigned(a: &BigNumber, b: &BigNumber) -> (BigNumber, BigNumber) {
    let base = a.base();
    let zero = BigNumber::zero_in(base);
    let one = BigNumber::one_in(base);
    match a.compare(b) {
        Ordering::Less => return (zero, a.clone()),
        Ordering::Equal => return (one, zero),
        Ordering::Greater => {}
    }

    // The quotient lies in [1, b] when b^2 > a and in [b, a] otherwise.
    let (mut low, mut high) = match b.power(2).compare(a) {
        Ordering::Equal => return (b.clone(), zero),
        Ordering::Greater => (one.clone(), b.clone()),
        Ordering::Less => (b.clone(), a.clone()),
    };

    let mut probes = 0u32;
    while low.compare(&high) != Ordering::Greater {
        probes += 1;
        let mid = halve(&low.add(&high));
        let product = mid.multiply(b);
        let verdict = match product.compare(a) {
            Ordering::Equal => Some((mid, zero.clone())),
            Ordering::Less => {
                let next = product.add(b);
                match next.compare(a) {
                    Ordering::Equal => Some((mid.add(&one), zero.clone())),
                    Ordering::Greater => Some((mid, a.subtract(&product))),
                    Ordering::Less => {
                        low = mid.add(&one);
                        None
                    }
                }
            }
            Ordering::Greater => {
                let prev = product.subtract(b);
                match prev.compare(a) {
                    Ordering::Equal => Some((mid.subtract(&one), zero.clone())),
                    Ordering::Less => Some((mid.subtract(&one), a.subtract(&prev))),
                    Ordering::Greater => {
                        high = mid.subtract(&one);
                        None
                    }
                }
            }
        };
        if let Some(result) = verdict {
            tracing::debug!(probes, "quotient search finished");
            return result;
        }
    }
    unreachable!("quotient escaped the search interval")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: i64) -> BigNumber {
        BigNumber::with_base(value, 10).unwrap()
    }

    fn check_division(a: i64, b: i64) {
        let result = decimal(a).divide(&decimal(b)).unwrap();
        let (q, r) = (a.div_euclid(b), a.rem_euclid(b));
        // Floored division: remainder shares the divisor's sign.
        let (q, r) = if b < 0 && r != 0 { (q - 1, r + b) } else { (q, r) };
        assert_eq!(result.quotient, decimal(q), "{a} / {b}");
        assert_eq!(result.remainder, decimal(r), "{a} % {b}");
    }

    #[test]
    fn test_div_rem() {
        let a = BigNumber::from_u64(100);
        let b = BigNumber::from_u64(7);
        let result = a.divide(&b).unwrap();
        assert_eq!(result.quotient, BigNumber::from_u64(14));
        assert_eq!(result.remainder, BigNumber::from_u64(2));
    }

    #[test]
    fn test_div_by_zero() {
        let a = BigNumber::from_u64(100);
        let b = BigNumber::zero();
        assert_eq!(a.divide(&b), Err(ArithError::DivideByZero));
        assert_eq!(a.modulo(&b), Err(ArithError::DivideByZero));
        assert_eq!(a.divide_by_native(0), Err(ArithError::DivideByZero));
        assert_eq!(b.divide(&b), Err(ArithError::DivideByZero));
    }

    #[test]
    fn test_div_zero_dividend() {
        let result = decimal(0).divide(&decimal(-9)).unwrap();
        assert!(result.quotient.is_zero());
        assert!(result.remainder.is_zero());
    }

    #[test]
    fn test_div_search_bounds() {
        // a < b, a == b, b^2 == a, b^2 > a, b^2 < a
        check_division(5, 9);
        check_division(9, 9);
        check_division(81, 9);
        check_division(50, 9);
        check_division(1_000, 9);
        check_division(1_000_000_007, 97);
    }

    #[test]
    fn test_div_exhaustive_small() {
        for a in 0..200 {
            for b in 1..40 {
                check_division(a, b);
            }
        }
    }

    #[test]
    fn test_div_signs() {
        for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (-1, 5), (6, -3), (-100, 7)] {
            check_division(a, b);
        }
    }

    #[test]
    fn test_div_multi_digit_default_base() {
        let a: BigNumber = "121932631112635269".parse().unwrap();
        let b: BigNumber = "987654321".parse().unwrap();
        let result = a.divide(&b).unwrap();
        assert_eq!(result.quotient.render_decimal(), "123456789");
        assert!(result.remainder.is_zero());

        let c = a.add(&b).add(&BigNumber::from_u64(1000));
        let result = c.divide(&b).unwrap();
        assert_eq!(result.quotient.render_decimal(), "123456790");
        assert_eq!(result.remainder.render_decimal(), "1000");
    }

    #[test]
    fn test_modulo() {
        assert_eq!(decimal(100).modulo(&decimal(7)).unwrap(), decimal(2));
        assert_eq!(decimal(-100).modulo(&decimal(7)).unwrap(), decimal(5));
    }

    #[test]
    fn test_divide_by_native() {
        let result = decimal(1_234).divide_by_native(7).unwrap();
        assert_eq!(result.quotient, decimal(176));
        assert_eq!(result.remainder, decimal(2));

        let result = decimal(1_234).divide_by_native(-7).unwrap();
        assert_eq!(result.quotient, decimal(-177));
        assert_eq!(result.remainder, decimal(-5));

        // Divisor at or above the base is promoted.
        let result = decimal(1_234).divide_by_native(100).unwrap();
        assert_eq!(result.quotient, decimal(12));
        assert_eq!(result.remainder, decimal(34));
    }

    #[test]
    fn test_divide_in_base_two() {
        let a = BigNumber::with_base(1_000, 2).unwrap();
        let b = BigNumber::with_base(3, 2).unwrap();
        let result = a.divide(&b).unwrap();
        assert_eq!(result.quotient, decimal(333));
        assert_eq!(result.remainder, decimal(1));
        assert_eq!(a.divide_by_native(2).unwrap().quotient, decimal(500));
    }

    #[test]
    fn test_integer_square_root() {
        assert_eq!(decimal(10).integer_square_root().unwrap().render_decimal(), "3");
        for n in 0..300i64 {
            let root = decimal(n).integer_square_root().unwrap();
            let expected = (n as f64).sqrt().floor() as i64;
            assert_eq!(root, decimal(expected), "isqrt({n})");
        }
    }

    #[test]
    fn test_integer_square_root_large() {
        let square: BigNumber = "15241578753238836774881877789971041".parse().unwrap();
        let root = square.integer_square_root().unwrap();
        assert_eq!(root.render_decimal(), "123456789012345679");
        let above = square.add(&BigNumber::from_u64(1));
        assert_eq!(above.integer_square_root().unwrap(), root);
        let below = square.subtract(&BigNumber::from_u64(1));
        assert_eq!(
            below.integer_square_root().unwrap().render_decimal(),
            "123456789012345678"
        );
    }

    #[test]
    fn test_integer_square_root_negative() {
        assert_eq!(
            decimal(-4).integer_square_root(),
            Err(ArithError::NegativeRadicand)
        );
    }
}
