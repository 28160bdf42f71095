#![no_main]
use libfuzzer_sys::fuzz_target;
use radix_bignum::{BigNumber, Digit, Sign};

fn number(bytes: &[u8], base: Digit, negative: bool) -> Option<BigNumber> {
    let digits = bytes.iter().map(|&b| Digit::from(b) % base).collect();
    let sign = if negative { Sign::Negative } else { Sign::Positive };
    BigNumber::from_digits(digits, base, sign).ok()
}

fuzz_target!(|data: &[u8]| {
    let [flags, base, rest @ ..] = data else {
        return;
    };
    let base = Digit::from(*base).max(2);
    let split = rest.len() / 2;
    let (Some(a), Some(b)) = (
        number(&rest[..split], base, flags & 1 != 0),
        number(&rest[split..], base, flags & 2 != 0),
    ) else {
        return;
    };
    if b.is_zero() {
        assert!(a.divide(&b).is_err());
        return;
    }
    let result = a.divide(&b).unwrap();
    assert_eq!(result.quotient.multiply(&b).add(&result.remainder), a);
    assert_eq!(
        result.remainder.abs().compare(&b.abs()),
        std::cmp::Ordering::Less
    );
});
