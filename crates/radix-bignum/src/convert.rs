//! Radix conversion, decimal parsing and rendering.

use std::fmt::Write;

use radix_types::ArithError;

use crate::bignum::{check_base, BigNumber, Digit, DEFAULT_BASE};

impl BigNumber {
    /// Parse a non-negative decimal literal into the default base.
    pub fn from_decimal(s: &str) -> Result<Self, ArithError> {
        Self::from_decimal_in(s, DEFAULT_BASE)
    }

    /// Parse a non-negative decimal literal into the given base.
    ///
    /// Every character must be an ASCII digit; nothing is skipped.
    pub fn from_decimal_in(s: &str, base: Digit) -> Result<Self, ArithError> {
        check_base(base)?;
        if s.is_empty() {
            return Err(ArithError::EmptyLiteral);
        }
        let mut acc = Self::zero_in(base);
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(ArithError::InvalidDigit(c))?;
            acc = acc
                .multiply_by_native(10)
                .add(&Self::from_native(u64::from(digit), base));
        }
        Ok(acc)
    }

    /// Re-express this value in `new_base`. The sign is preserved.
    pub fn convert_to_base(&self, new_base: Digit) -> Result<BigNumber, ArithError> {
        check_base(new_base)?;
        Ok(self.rebased(new_base))
    }

    /// Horner evaluation from the most significant digit, computed entirely
    /// in `new_base`. The base must already be valid.
    #[tracing::instrument(level = "trace", skip_all, fields(
        from = self.base(),
        to = new_base,
        digits = self.significant_len()
    ))]
    pub(crate) fn rebased(&self, new_base: Digit) -> BigNumber {
        if new_base == self.base() {
            return self.clone();
        }
        let radix = Self::from_native(self.base(), new_base);
        let mut acc = Self::zero_in(new_base);
        for digit in self.significant_digits().rev() {
            acc = acc
                .multiply(&radix)
                .add(&Self::from_native(digit, new_base));
        }
        acc.into_signed(self.sign())
    }

    /// Decimal text, with a leading `-` for negative values.
    pub fn render_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let decimal = self.rebased(10);
        let mut out = String::with_capacity(decimal.significant_len() + 1);
        if self.is_negative() {
            out.push('-');
        }
        for digit in decimal.significant_digits().rev() {
            // Base-10 digits are always below 10.
            out.push(char::from(b'0' + digit as u8));
        }
        out
    }

    /// Raw dump: `base:` then the digits least significant first, then
    /// ` -` for negative values. Zero renders as `base:0`.
    pub fn render_raw(&self) -> String {
        let mut out = format!("{}:", self.base());
        if self.is_zero() {
            out.push('0');
            return out;
        }
        for (i, digit) in self.significant_digits().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{digit}");
        }
        if self.is_negative() {
            out.push_str(" -");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::Sign;

    #[test]
    fn test_from_decimal() {
        let n = BigNumber::from_decimal_in("9071", 10).unwrap();
        assert_eq!(n.digits(), &[1, 7, 0, 9]);
        let n: BigNumber = "00042".parse().unwrap();
        assert_eq!(n, BigNumber::from_u64(42));
    }

    #[test]
    fn test_from_decimal_rejects_bad_input() {
        assert_eq!(BigNumber::from_decimal(""), Err(ArithError::EmptyLiteral));
        assert_eq!(
            BigNumber::from_decimal("12a4"),
            Err(ArithError::InvalidDigit('a'))
        );
        assert_eq!(
            BigNumber::from_decimal("-5"),
            Err(ArithError::InvalidDigit('-'))
        );
        assert_eq!(
            BigNumber::from_decimal(" 5"),
            Err(ArithError::InvalidDigit(' '))
        );
        assert_eq!(
            BigNumber::from_decimal_in("5", 1),
            Err(ArithError::InvalidBase(1))
        );
    }

    #[test]
    fn test_render_decimal() {
        let n = BigNumber::from_decimal("98765432109876543210").unwrap();
        assert_eq!(n.render_decimal(), "98765432109876543210");
        assert_eq!(n.negate().render_decimal(), "-98765432109876543210");
        assert_eq!(n.to_string(), "98765432109876543210");
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(BigNumber::zero().render_decimal(), "0");
        assert_eq!(BigNumber::zero().negate().render_decimal(), "0");
        assert_eq!(BigNumber::with_base(0, 7).unwrap().render_raw(), "7:0");
    }

    #[test]
    fn test_render_raw() {
        let n = BigNumber::with_base(1234, 10).unwrap();
        assert_eq!(n.render_raw(), "10:4 3 2 1");
        assert_eq!(n.negate().render_raw(), "10:4 3 2 1 -");

        let mut padded = n.clone();
        padded.append_zero_digits(3);
        assert_eq!(padded.render_raw(), "10:4 3 2 1");
    }

    #[test]
    fn test_convert_to_base() {
        let n = BigNumber::with_base(255, 10).unwrap();
        let hex = n.convert_to_base(16).unwrap();
        assert_eq!(hex.base(), 16);
        assert_eq!(hex.digits(), &[15, 15]);

        let binary = n.convert_to_base(2).unwrap();
        assert_eq!(binary.digits(), &[1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(binary, n);
    }

    #[test]
    fn test_convert_preserves_sign() {
        let n = BigNumber::with_base(-100, 10).unwrap();
        let m = n.convert_to_base(3).unwrap();
        assert_eq!(m.sign(), Sign::Negative);
        assert_eq!(m.render_raw(), "3:1 0 2 0 1 -");
        assert_eq!(m.render_decimal(), "-100");
    }

    #[test]
    fn test_convert_round_trip() {
        let n = BigNumber::from_decimal("340282366920938463463374607431768211457").unwrap();
        for base in [2, 3, 10, 255, 1 << 32, u64::MAX] {
            let there = n.convert_to_base(base).unwrap();
            let back = there.convert_to_base(DEFAULT_BASE).unwrap();
            assert_eq!(back.digits(), n.digits(), "via base {base}");
        }
    }

    #[test]
    fn test_convert_invalid_base() {
        assert_eq!(
            BigNumber::from_u64(5).convert_to_base(1),
            Err(ArithError::InvalidBase(1))
        );
    }
}
