#![no_main]
use libfuzzer_sys::fuzz_target;
use radix_bignum::BigNumber;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(n) = text.parse::<BigNumber>() {
        let rendered = n.render_decimal();
        let trimmed = text.trim_start_matches('0');
        assert_eq!(rendered, if trimmed.is_empty() { "0" } else { trimmed });
    }
});
