use thiserror::Error;

/// Errors produced by fallible [`BigInteger`](crate::BigInteger) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The input is not an optionally signed run of decimal digits.
    #[error("invalid decimal integer: {input:?}")]
    InvalidFormat { input: String },

    #[error("division by zero")]
    DivisionByZero,

    /// Only base 10 text is supported.
    #[error("unsupported radix {radix}, only base 10 is supported")]
    UnsupportedRadix { radix: u32 },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
