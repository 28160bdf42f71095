#![forbid(unsafe_code)]
#![doc = "Error types shared by the radixnum arithmetic engine and its script interpreter."]

pub mod error;

pub use error::*;
