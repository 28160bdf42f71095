#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision integer arithmetic over a configurable radix."]

mod bignum;
mod convert;
mod digits;
mod division;
mod product;
mod sign;
mod sum;

pub use bignum::{check_base, BigNumber, Digit, DoubleDigit, DEFAULT_BASE};
pub use digits::{DigitCursor, Digits};
pub use division::DivisionResult;
pub use radix_types::ArithError;
pub use sign::Sign;
