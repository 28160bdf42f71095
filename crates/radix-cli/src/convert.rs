//! Base conversion command.

use std::io::Write;

use radix_bignum::{BigNumber, Digit};

/// Print the raw digit dump of a decimal value re-expressed in `to`.
pub fn run(value: &str, to: Digit) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    write_converted(&mut stdout.lock(), value, to)
}

fn write_converted<W: Write>(
    out: &mut W,
    value: &str,
    to: Digit,
) -> Result<(), Box<dyn std::error::Error>> {
    let (negative, magnitude) = match value.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, value),
    };
    let mut n = BigNumber::from_decimal(magnitude)?;
    if negative {
        n = n.negate();
    }
    let converted = n.convert_to_base(to)?;
    writeln!(out, "{}", converted.render_raw())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: &str, to: Digit) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        write_converted(&mut out, value, to)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_cli_convert() {
        assert_eq!(convert("255", 16).unwrap(), "16:15 15\n");
        assert_eq!(convert("-100", 3).unwrap(), "3:1 0 2 0 1 -\n");
        assert_eq!(convert("0", 2).unwrap(), "2:0\n");
    }

    #[test]
    fn test_cli_convert_errors() {
        assert!(convert("12x", 10).is_err());
        assert!(convert("12", 1).is_err());
        assert!(convert("", 10).is_err());
    }
}
