//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision signed integers with the full arithmetic, comparison,
//!   bitwise and shift operator set. Bitwise operators behave as if the value were represented in
//!   two's-complement notation.
//! - [`DigitVec`]: the copy-on-write word storage behind a [`BigInteger`]. Single word values are
//!   stored inline, longer ones are shared between copies until one of them is written.
//!
//! Only decimal text is supported for parsing and printing.

mod big_int;
mod cache;
mod constants;
mod digit_vec;
mod error;

pub use big_int::BigInteger;
pub use digit_vec::DigitVec;
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
