//! Bitwise operators over an infinite-precision two's-complement view of the
//! sign-magnitude value.

use super::{BigInteger, Combine};
use crate::cache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }
    /// Same function on the sign bits, i.e. on the infinite extension words.
    fn apply_sign(self, a: bool, b: bool) -> bool {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }
}

impl BigInteger {
    /// Word that repeats forever above the stored two's-complement words.
    fn sign_extension(&self) -> u32 {
        if self.negative { u32::MAX } else { 0 }
    }
    /// Two's-complement words of `self`, sign-extended to `len` words.
    /// A negative value `-m` is stored as `!(m - 1)`.
    pub(crate) fn to_twos_complement(&self, len: usize) -> Vec<u32> {
        let mut words = if self.negative {
            let mut w = BigInteger::sub_mag(self.mag.as_slice(), &[1]);
            w.iter_mut().for_each(|x| *x = !*x);
            w
        } else {
            self.mag.as_slice().to_vec()
        };
        debug_assert!(words.len() <= len);
        words.resize(len, self.sign_extension());
        words
    }
    /// Inverse of [`to_twos_complement`](Self::to_twos_complement): the
    /// magnitude of a negative pattern `p` is `!p + 1`.
    pub(crate) fn from_twos_complement(mut words: Vec<u32>, negative: bool) -> BigInteger {
        if negative {
            words.iter_mut().for_each(|x| *x = !*x);
            words = BigInteger::add_mag(&words, &[1]);
        }
        BigInteger::from_parts(words, negative)
    }
    pub(crate) fn bit_op(&self, rhs: &BigInteger, op: BitOp) -> BigInteger {
        // one extra word so the sign extension is always stored explicitly
        let len = self.mag.len().max(rhs.mag.len()) + 1;
        let x = self.to_twos_complement(len);
        let y = rhs.to_twos_complement(len);
        let words = x.iter().zip(&y).map(|(a, b)| op.apply(*a, *b)).collect();
        BigInteger::from_twos_complement(words, op.apply_sign(self.negative, rhs.negative))
    }
    /// `!x == -(x + 1)`
    pub(crate) fn not_ref(&self) -> BigInteger {
        self.combine(&cache::POS_CACHE[1], Combine::Add).negated()
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_twos_complement_view() {
    assert_eq!(big("5").to_twos_complement(2), vec![5, 0]);
    assert_eq!(big("-1").to_twos_complement(2), vec![u32::MAX, u32::MAX]);
    assert_eq!(big("-4294967296").to_twos_complement(3), vec![0, u32::MAX, u32::MAX]);
    for s in ["-1", "-2", "-4294967295", "-4294967296", "-18446744073709551617", "0", "12"] {
        let a = big(s);
        let words = a.to_twos_complement(4);
        assert_eq!(BigInteger::from_twos_complement(words, a.is_negative()), a);
    }
}

#[test]
fn test_and_or_xor() {
    assert_eq!((big("255") & big("15")).to_string(), "15");
    assert_eq!((big("255") ^ big("255")).to_string(), "0");
    assert_eq!((big("240") | big("15")).to_string(), "255");
    assert_eq!((big("-1") & big("255")).to_string(), "255");
    assert_eq!((big("-256") & big("255")).to_string(), "0");
    assert_eq!((big("-256") | big("255")).to_string(), "-1");
    assert_eq!((big("-6") & big("-3")).to_string(), "-8");
    assert_eq!((big("-6") | big("-3")).to_string(), "-1");
    assert_eq!((big("-6") ^ big("-3")).to_string(), "7");
    assert_eq!((big("6") ^ big("-3")).to_string(), "-5");
    assert_eq!((big("-4294967296") & big("18446744073709551615")).to_string(), "18446744069414584320");
    assert_eq!((big("-18446744073709551616") | big("1")).to_string(), "-18446744073709551615");
    assert_eq!((big("-4294967296") ^ big("4294967295")).to_string(), "-1");
}

#[test]
fn test_not() {
    assert_eq!((!big("0")).to_string(), "-1");
    assert_eq!((!big("-1")).to_string(), "0");
    assert_eq!((!big("4294967295")).to_string(), "-4294967296");
    assert_eq!((!big("-4294967296")).to_string(), "4294967295");
}
