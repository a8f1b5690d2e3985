//! Truncating division: single-word long division and Knuth's Algorithm D.

use super::{BigInteger, ZERO};
use crate::constants::WORD_BITS;
use crate::digit_vec::DigitVec;
use crate::error::{BigIntError, Result};

impl BigInteger {
    /// Quotient and remainder of truncating division. The quotient's sign is
    /// the XOR of the operand signs, the remainder takes the dividend's sign,
    /// so `q * rhs + r == self`.
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((ZERO, ZERO));
        }
        let (q, r) = BigInteger::div_rem_mag(self.mag.as_slice(), rhs.mag.as_slice());
        Ok((
            BigInteger::from_parts(q, self.negative != rhs.negative),
            BigInteger::from_parts(r, self.negative),
        ))
    }
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.div_rem(rhs).map(|(q, _)| q)
    }
    pub fn checked_rem(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
    /// Division by one unsigned word.
    pub fn div_rem_u32(&self, divisor: u32) -> Result<(BigInteger, BigInteger)> {
        if divisor == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let mut q = self.mag.clone();
        let r = BigInteger::div_rem_word_in_place(q.as_mut_slice(), divisor);
        q.trim();
        Ok((
            BigInteger::from_raw(q, self.negative),
            BigInteger::from_raw(DigitVec::from_word(r), self.negative),
        ))
    }
    /// Division by a signed word, done on absolute values.
    pub fn div_rem_i32(&self, divisor: i32) -> Result<(BigInteger, BigInteger)> {
        // unsigned_abs, not negation: i32::MIN has no positive counterpart
        let (q, r) = self.div_rem_u32(divisor.unsigned_abs())?;
        if divisor < 0 {
            Ok((q.negated(), r))
        } else {
            Ok((q, r))
        }
    }
    /// `self /= divisor` on the stored words, used by `/=` with an `i32`.
    pub(crate) fn div_assign_i32(&mut self, divisor: i32) {
        if divisor == 0 {
            panic!("{}", BigIntError::DivisionByZero);
        }
        BigInteger::div_rem_word_in_place(self.mag.as_mut_slice(), divisor.unsigned_abs());
        self.mag.trim();
        self.negative = self.negative != (divisor < 0) && !self.mag.is_zero();
    }
    /// Panicking form used by the `/` and `%` operators.
    pub(crate) fn div_rem_ref(&self, rhs: &BigInteger) -> (BigInteger, BigInteger) {
        match self.div_rem(rhs) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }
}

// Magnitude division
impl BigInteger {
    /// Long division of `mag` by `divisor`, most significant word first, with
    /// a 64-bit running remainder. `mag` is overwritten by the quotient.
    pub(crate) fn div_rem_word_in_place(mag: &mut [u32], divisor: u32) -> u32 {
        let divisor = divisor as u64;
        let mut r: u64 = 0;
        for word in mag.iter_mut().rev() {
            let sum: u64 = (r << WORD_BITS) + *word as u64;
            *word = (sum / divisor) as u32;
            r = sum % divisor;
        }
        r as u32
    }
    fn div_rem_mag(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
        if u.len() < v.len() {
            return (vec![0], u.to_vec());
        }
        if v.len() == 1 {
            let mut q = u.to_vec();
            let r = BigInteger::div_rem_word_in_place(&mut q, v[0]);
            return (q, vec![r]);
        }
        BigInteger::divide_knuth(u, v)
    }
    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
    /// Requires `v.len() >= 2` and `u.len() >= v.len()`.
    fn divide_knuth(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
        let n = v.len();
        let m = u.len() - n;

        // D1 normalize
        // d = b / (v[n-1] + 1) with b = 2^32 scales v[n-1] to at least b / 2,
        // which keeps every quotient estimate within 2 of the true digit.
        let factor = ((1u64 << WORD_BITS) / (v[n - 1] as u64 + 1)) as u32;
        let vn = BigInteger::mul_word(v, factor);
        debug_assert_eq!(vn.len(), n);
        debug_assert!(vn[n - 1] >= 1 << (WORD_BITS - 1));
        let mut un = BigInteger::mul_word(u, factor);
        un.resize(u.len() + 1, 0);
        log::trace!("knuth division: {} by {} words, normalization factor {}", u.len(), n, factor);

        let v_top = vn[n - 1] as u64;
        let mut q = vec![0u32; m + 1];
        // D2 loop over j
        for j in (0..=m).rev() {
            // D3 estimate qhat from the top two words
            let sum = ((un[j + n] as u64) << WORD_BITS) + un[j + n - 1] as u64;
            let mut qhat = (sum / v_top).min(u32::MAX as u64) as u32;

            // D4 multiply and subtract, D6 add back while negative
            let window = &mut un[j..=j + n];
            let mut negative = BigInteger::mul_sub(window, &vn, qhat);
            let mut corrections = 0;
            while negative {
                qhat -= 1;
                corrections += 1;
                negative = !BigInteger::add_back(window, &vn);
            }
            if corrections > 0 {
                log::trace!("knuth division: quotient word {} corrected {} time(s)", j, corrections);
            }
            q[j] = qhat;
        }

        // D8 unnormalize the remainder
        let mut r = un;
        r.truncate(n);
        BigInteger::div_rem_word_in_place(&mut r, factor);
        (q, r)
    }
    /// `window -= qhat * v`, `window` being one word longer than `v`.
    /// Returns whether the result went negative.
    fn mul_sub(window: &mut [u32], v: &[u32], qhat: u32) -> bool {
        let mut carry: u64 = 0;
        let mut borrow = false;
        for (w, &v_word) in window.iter_mut().zip(v) {
            let product = (v_word as u64) * (qhat as u64) + carry;
            carry = product >> WORD_BITS;
            let (diff, b1) = w.overflowing_sub(product as u32);
            let (diff, b2) = diff.overflowing_sub(borrow as u32);
            *w = diff;
            borrow = b1 || b2;
        }
        let top = &mut window[v.len()];
        let (diff, b1) = top.overflowing_sub(carry as u32);
        let (diff, b2) = diff.overflowing_sub(borrow as u32);
        *top = diff;
        b1 || b2
    }
    /// `window += v`. Returns the carry out of the top word, which is set
    /// exactly when a negative window crosses back to non-negative.
    fn add_back(window: &mut [u32], v: &[u32]) -> bool {
        let mut carry = false;
        for (w, &v_word) in window.iter_mut().zip(v) {
            let (sum, c1) = w.overflowing_add(v_word);
            let (sum, c2) = sum.overflowing_add(carry as u32);
            *w = sum;
            carry = c1 || c2;
        }
        let top = &mut window[v.len()];
        let (sum, c) = top.overflowing_add(carry as u32);
        *top = sum;
        c
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_div() {
    // divide one word
    assert_eq!((big("120") / big("13")).to_string(), "9");
    assert_eq!(
        (big("10000000000000000000000000000000000") / big("1000")).to_string(),
        "10000000000000000000000000000000"
    );
    // dividend shorter than divisor
    assert_eq!((big("5") / big("18446744073709551616")).to_string(), "0");
    assert_eq!((big("-5") % big("18446744073709551616")).to_string(), "-5");
    // divide Knuth
    let a = big("1248712878947821648762389057105328957928307412789503279510743095710237597120874921095912870947802197472145678765432456789765");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    assert_eq!((&a / &b).to_string(), "219883006422631368000485661268054");
    assert_eq!((&a % &b).to_string(), "4318342152689633046553548418509387303649961237390530425212527887333632821387676914841885461");
}

#[test]
fn test_div_signs() {
    let cases = [
        ("7", "2", "3", "1"),
        ("-7", "2", "-3", "-1"),
        ("7", "-2", "-3", "1"),
        ("-7", "-2", "3", "-1"),
        ("-6", "3", "-2", "0"),
    ];
    for (a, b, q, r) in cases {
        assert_eq!((big(a) / big(b)).to_string(), q, "{} / {}", a, b);
        assert_eq!((big(a) % big(b)).to_string(), r, "{} % {}", a, b);
    }
    assert!(!(big("-6") % big("3")).is_negative());
}

#[test]
fn test_div_same_length() {
    // equal word counts, quotient 0 or 1
    let a = big("18446744073709551615");
    let b = big("18446744073709551614");
    assert_eq!((&a / &b).to_string(), "1");
    assert_eq!((&a % &b).to_string(), "1");
    assert_eq!((&b / &a).to_string(), "0");
    assert_eq!((&b % &a).to_string(), "18446744073709551614");
    assert_eq!((&a / &a).to_string(), "1");
}

#[test]
fn test_div_add_back() {
    // top divisor word is 1, so the factor is 2^31 and estimates overshoot
    let a = big("340282366920938463463374607431768211455");
    let b = big("4294967297");
    assert_eq!((&a / &b).to_string(), "79228162495817593524129366015");
    assert_eq!((&a % &b).to_string(), "0");

    let a = big("-6277101735386680763835789423207666416102355444464034512895");
    let b = big("18446744073709551617");
    assert_eq!((&a / &b).to_string(), "-340282366920938463444927863358058659840");
    assert_eq!((&a % &b).to_string(), "-18446744073709551615");
}

#[test]
fn test_div_by_word() {
    let a = big("-100000000000000000000");
    let (q, r) = a.div_rem_u32(7).unwrap();
    assert_eq!(q.to_string(), "-14285714285714285714");
    assert_eq!(r.to_string(), "-2");
    let (q, r) = a.div_rem_i32(-7).unwrap();
    assert_eq!(q.to_string(), "14285714285714285714");
    assert_eq!(r.to_string(), "-2");
    let (q, _) = big("4294967296").div_rem_i32(i32::MIN).unwrap();
    assert_eq!(q.to_string(), "-2");
    assert_eq!((big("-7") / 2).to_string(), "-3");
    assert_eq!((big("-7") % -2).to_string(), "-1");
    assert_eq!(big("4294967295").div_rem_u32(u32::MAX), Ok((big("1"), big("0"))));

    let mut x = big("-100000000000000000000");
    x /= -7;
    assert_eq!(x.to_string(), "14285714285714285714");
    x /= i32::MIN;
    assert_eq!(x.to_string(), "-6652304104");
    let mut small = big("-3");
    small /= 4;
    assert_eq!(small, big("0"));
    assert!(!small.is_negative());
}

#[test]
fn test_div_by_zero() {
    assert_eq!(big("1").div_rem(&big("0")), Err(BigIntError::DivisionByZero));
    assert_eq!(big("1").checked_div(&big("-0")), Err(BigIntError::DivisionByZero));
    assert_eq!(big("0").checked_rem(&big("0")), Err(BigIntError::DivisionByZero));
    assert_eq!(big("1").div_rem_u32(0), Err(BigIntError::DivisionByZero));
    assert_eq!(big("1").div_rem_i32(0), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_by_zero() {
    let _ = big("1") / big("0");
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_operator_by_zero() {
    let _ = big("1") % 0;
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_assign_by_zero() {
    let mut x = big("18446744073709551616");
    x /= 0;
}
