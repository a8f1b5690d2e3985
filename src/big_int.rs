//! # BigInteger
//! Arbitrary-precision signed integers stored as a sign flag and a magnitude of
//! 32-bit words. Bitwise operations behave as if the value were stored in
//! infinite-precision two's-complement notation.
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b: BigInteger = "-900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a - &b).to_string(), "10900000000000");
//! assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "-11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10).to_string(), "10240000000000000");
//! assert_eq!((&b >> 10).to_string(), "-878906250");
//! assert_eq!((&a + 1).to_string(), "10000000000001");
//!
//! let mut c = a.clone();
//! c <<= 3;
//! c -= &b;
//! assert_eq!(c.to_string(), "80900000000000");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::cache;
use crate::constants::*;
use crate::digit_vec::DigitVec;
use crate::error::{BigIntError, Result};

mod bitwise;
mod division;
#[cfg(feature = "num-traits")]
mod num_impls;
mod ops;

pub(crate) use bitwise::BitOp;

pub const ZERO: BigInteger = BigInteger { mag: DigitVec::from_word(0), negative: false };

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    mag: DigitVec,
    negative: bool,
}

/// How [`BigInteger::combine`] joins two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combine {
    Add,
    Sub,
}

// Construction
impl BigInteger {
    /// Wraps a magnitude, clearing the sign if the magnitude is zero.
    pub(crate) fn from_raw(mag: DigitVec, negative: bool) -> Self {
        let negative = negative && !mag.is_zero();
        BigInteger { mag, negative }
    }
    /// Builds a value from little-endian words that may carry leading zeros.
    pub(crate) fn from_parts(words: Vec<u32>, negative: bool) -> Self {
        let mut mag = DigitVec::from_vec(words);
        mag.trim();
        BigInteger::from_raw(mag, negative)
    }
    fn value_of(val: u128, negative: bool) -> Self {
        if let Some(cached) = cache::small(val, negative) {
            return cached;
        }
        let mut words = Vec::with_capacity(4);
        let mut rest = val;
        while rest != 0 {
            words.push(rest as u32);
            rest >>= WORD_BITS;
        }
        BigInteger::from_parts(words, negative)
    }
    pub fn zero() -> Self {
        ZERO
    }
    /// Little-endian words of the absolute value.
    pub fn magnitude(&self) -> &DigitVec {
        &self.mag
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        ZERO
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN representable
            BigInteger::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_integer!(i8, i16, i32, i64, i128, isize);

// Parsing
impl FromStr for BigInteger {
    type Err = BigIntError;

    /// Parses an optionally signed run of decimal digits. Leading zeros are
    /// allowed and `"-0"` is zero; anything else, including the empty string,
    /// is rejected.
    fn from_str(val: &str) -> Result<Self> {
        let invalid = || BigIntError::InvalidFormat { input: val.to_string() };

        let (negative, digits) = match val.as_bytes().first() {
            Some(b'-') => (true, &val[1..]),
            Some(b'+') => (false, &val[1..]),
            _ => (false, val),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = digits.trim_start_matches('0').as_bytes();
        if digits.is_empty() {
            return Ok(ZERO);
        }

        // value = value * 10^k + group, one group of at most nine digits at a time
        let mut magnitude = DigitVec::new();
        let mut group_len = digits.len() % DECIMAL_GROUP_DIGITS;
        if group_len == 0 {
            group_len = DECIMAL_GROUP_DIGITS;
        }
        for group in std::iter::once(&digits[..group_len])
            .chain(digits[group_len..].chunks(DECIMAL_GROUP_DIGITS))
        {
            let group_val = group.iter().fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32);
            let radix = 10u32.pow(group.len() as u32);
            BigInteger::destructive_mul_add(&mut magnitude, radix, group_val);
        }
        // the first group is non-zero, so the top word is too
        Ok(BigInteger::from_raw(magnitude, negative))
    }
}

impl BigInteger {
    /// `magnitude = magnitude * radix + addend` in place.
    #[inline(always)]
    fn destructive_mul_add(magnitude: &mut DigitVec, radix: u32, addend: u32) {
        let mut carry = addend as u64;
        for x in magnitude.as_mut_slice() {
            let product = (*x as u64) * (radix as u64) + carry;
            *x = product as u32;
            carry = product >> WORD_BITS;
        }
        if carry != 0 {
            magnitude.push(carry as u32);
        }
    }
}

// Text conversion
impl BigInteger {
    /// Canonical decimal form: no leading zeros, `-` only for negative values.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.magnitude_to_decimal();
        if self.negative {
            let mut s = String::with_capacity(digits.len() + 1);
            s.push('-');
            s.push_str(&digits);
            s
        } else {
            digits
        }
    }
    fn magnitude_to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        // Peel off nine decimal digits per division, least significant first.
        // The first write detaches `tmp` from `self`.
        let mut tmp = self.mag.clone();
        let mut groups = Vec::with_capacity(tmp.len() * 32 / 29 + 1);
        while !(tmp.len() == 1 && tmp[0] == 0) {
            groups.push(BigInteger::div_rem_word_in_place(tmp.as_mut_slice(), DECIMAL_GROUP_RADIX));
            // dividing by less than 2^30 shortens the quotient by at most one word
            if tmp.len() > 1 && tmp.last() == 0 {
                tmp.pop();
            }
        }

        let mut result = String::with_capacity(groups.len() * DECIMAL_GROUP_DIGITS);
        let mut iter = groups.iter().rev();
        if let Some(top) = iter.next() {
            result.push_str(&top.to_string());
        }
        for group in iter {
            result.push_str(&format!("{:0width$}", group, width = DECIMAL_GROUP_DIGITS));
        }
        result
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_decimal())
    }
}

// Comparison
impl BigInteger {
    /// Orders magnitudes by word count, then most significant word first.
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => BigInteger::compare_mag(self.mag.as_slice(), other.mag.as_slice()),
            (true, true) => BigInteger::compare_mag(self.mag.as_slice(), other.mag.as_slice()).reverse(),
        }
    }
}

// Sign and size queries
impl BigInteger {
    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> BigInteger {
        if self.negative {
            BigInteger::from(-1)
        } else if self.is_zero() {
            ZERO
        } else {
            BigInteger::from(1)
        }
    }
    pub fn abs(&self) -> BigInteger {
        BigInteger { mag: self.mag.clone(), negative: false }
    }
    /// Bits needed for the magnitude; zero for zero.
    pub fn bit_length(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            (self.mag.len() - 1) * WORD_BITS as usize + (WORD_BITS - self.mag.last().leading_zeros()) as usize
        }
    }
    /// Sign flipped, zero stays zero.
    pub(crate) fn negated(&self) -> BigInteger {
        BigInteger::from_raw(self.mag.clone(), !self.negative)
    }
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative || self.mag.len() > 4 {
            return None;
        }
        Some(self.mag.iter().rev().fold(0u128, |acc, w| (acc << WORD_BITS) | *w as u128))
    }
    pub fn to_i128(&self) -> Option<i128> {
        if self.mag.len() > 4 {
            return None;
        }
        let mag = self.mag.iter().rev().fold(0u128, |acc, w| (acc << WORD_BITS) | *w as u128);
        if self.negative {
            if mag <= 1 << 127 {
                Some((mag as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(mag).ok()
        }
    }
}

// Addition and subtraction
impl BigInteger {
    /// `self + rhs` or `self - rhs`, decided on magnitudes and signs in one pass.
    pub(crate) fn combine(&self, rhs: &BigInteger, mode: Combine) -> BigInteger {
        let rhs_negative = match mode {
            Combine::Add => rhs.negative,
            Combine::Sub => !rhs.negative,
        };
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return BigInteger::from_raw(rhs.mag.clone(), rhs_negative);
        }

        let x = self.mag.as_slice();
        let y = rhs.mag.as_slice();
        if self.negative == rhs_negative {
            return BigInteger::from_parts(BigInteger::add_mag(x, y), self.negative);
        }
        match BigInteger::compare_mag(x, y) {
            Ordering::Less => BigInteger::from_parts(BigInteger::sub_mag(y, x), rhs_negative),
            Ordering::Equal => ZERO,
            Ordering::Greater => BigInteger::from_parts(BigInteger::sub_mag(x, y), self.negative),
        }
    }
    /// In-place form of [`combine`](Self::combine). The magnitude is written
    /// through the digit store, so it is only copied when another value
    /// still shares it.
    pub(crate) fn combine_assign(&mut self, rhs: &BigInteger, mode: Combine) {
        let rhs_negative = match mode {
            Combine::Add => rhs.negative,
            Combine::Sub => !rhs.negative,
        };
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = BigInteger::from_raw(rhs.mag.clone(), rhs_negative);
            return;
        }

        let y = rhs.mag.as_slice();
        if self.negative == rhs_negative {
            BigInteger::add_assign_mag(&mut self.mag, y);
            return;
        }
        match BigInteger::compare_mag(self.mag.as_slice(), y) {
            Ordering::Less => {
                *self = BigInteger::from_parts(BigInteger::sub_mag(y, self.mag.as_slice()), rhs_negative);
            }
            Ordering::Equal => *self = ZERO,
            Ordering::Greater => BigInteger::sub_assign_mag(&mut self.mag, y),
        }
    }
    /// `mag += y`, stopping once `y` is used up and no carry is left.
    fn add_assign_mag(mag: &mut DigitVec, y: &[u32]) {
        if mag.len() < y.len() {
            mag.resize(y.len());
        }
        let mut sum: u64 = 0;
        for (i, word) in mag.as_mut_slice().iter_mut().enumerate() {
            sum = *word as u64 + y.get(i).copied().unwrap_or(0) as u64 + (sum >> WORD_BITS);
            *word = sum as u32;
            if i + 1 >= y.len() && (sum >> WORD_BITS) == 0 {
                return;
            }
        }
        if (sum >> WORD_BITS) != 0 {
            mag.push(1);
        }
    }
    /// `mag -= y`, requires `mag > y`.
    fn sub_assign_mag(mag: &mut DigitVec, y: &[u32]) {
        let mut difference: i64 = 0;
        for (i, word) in mag.as_mut_slice().iter_mut().enumerate() {
            difference = *word as i64 - y.get(i).copied().unwrap_or(0) as i64 + (difference >> WORD_BITS);
            *word = difference as u32;
            if i + 1 >= y.len() && (difference >> WORD_BITS) == 0 {
                break;
            }
        }
        mag.trim();
    }
    pub(crate) fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut sum: u64 = 0;
        for (i, &word) in long.iter().enumerate() {
            sum = word as u64 + short.get(i).copied().unwrap_or(0) as u64 + (sum >> WORD_BITS);
            result.push(sum as u32);
        }
        if (sum >> WORD_BITS) != 0 {
            result.push(1);
        }
        result
    }
    /// `big - little`, requires `big >= little`.
    pub(crate) fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len());
        let mut difference: i64 = 0;
        for (i, &word) in big.iter().enumerate() {
            difference = word as i64 - little.get(i).copied().unwrap_or(0) as i64 + (difference >> WORD_BITS);
            result.push(difference as u32);
        }
        debug_assert!(difference >> WORD_BITS == 0, "magnitude underflow");
        result
    }
}

// Multiplication
impl BigInteger {
    pub(crate) fn mul_ref(&self, rhs: &BigInteger) -> BigInteger {
        if self.is_zero() || rhs.is_zero() {
            return ZERO;
        }
        let negative = self.negative != rhs.negative;
        BigInteger::from_parts(BigInteger::mul_mag(self.mag.as_slice(), rhs.mag.as_slice()), negative)
    }
    /// Schoolbook product; the result has `x.len() + y.len()` words.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        if y.len() == 1 {
            return BigInteger::mul_word(x, y[0]);
        }
        if x.len() == 1 {
            return BigInteger::mul_word(y, x[0]);
        }

        let y_len = y.len();
        let mut z = vec![0u32; x.len() + y_len];
        for (x_index, &x_word) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            for (y_index, &y_word) in y.iter().enumerate() {
                let product: u64 = (x_word as u64) * (y_word as u64) +
                                   (z[x_index + y_index] as u64) +
                                   carry;
                z[x_index + y_index] = product as u32;
                carry = product >> WORD_BITS;
            }
            z[x_index + y_len] = carry as u32;
        }
        z
    }
    pub(crate) fn mul_word(x: &[u32], y: u32) -> Vec<u32> {
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry: u64 = 0;
        for &word in x {
            let product = (word as u64) * (y as u64) + carry;
            result.push(product as u32);
            carry = product >> WORD_BITS;
        }
        if carry != 0 {
            result.push(carry as u32);
        }
        result
    }
}

// Shifts
impl BigInteger {
    /// Shifts left for a non-negative `count`, right for a negative one.
    ///
    /// # Panics
    /// As [`shl_bits`](Self::shl_bits) for large positive counts.
    pub fn shift(&self, count: i64) -> BigInteger {
        let bits = BigInteger::shift_bits(count);
        if count >= 0 {
            self.shl_bits(bits)
        } else {
            self.shr_bits(bits)
        }
    }
    /// In-place form of [`shift`](Self::shift).
    pub fn shift_assign(&mut self, count: i64) {
        let bits = BigInteger::shift_bits(count);
        if count >= 0 {
            self.shl_assign_bits(bits);
        } else {
            *self = self.shr_bits(bits);
        }
    }
    fn shift_bits(count: i64) -> usize {
        // saturating is exact for right shifts, left shifts that large are rejected
        usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX)
    }
    /// # Panics
    /// If the result would need more than `u32::MAX` words.
    pub fn shl_bits(&self, n: usize) -> BigInteger {
        let mut result = self.clone();
        result.shl_assign_bits(n);
        result
    }
    fn shl_assign_bits(&mut self, n: usize) {
        if n == 0 || self.is_zero() {
            return;
        }
        let n_words = n / WORD_BITS as usize;
        let n_bits = (n % WORD_BITS as usize) as u32;
        let len = self.mag.len();
        match len.checked_add(n_words + 1) {
            Some(words) if words <= MAX_SHIFT_WORDS => {}
            _ => panic!("left shift by {} bits exceeds the maximum of {} words", n, MAX_SHIFT_WORDS),
        }

        if n_bits != 0 {
            let mut carry = 0u32;
            for word in self.mag.as_mut_slice() {
                let shifted = (*word << n_bits) | carry;
                carry = *word >> (WORD_BITS - n_bits);
                *word = shifted;
            }
            if carry != 0 {
                self.mag.push(carry);
            }
        }
        if n_words != 0 {
            let len = self.mag.len();
            self.mag.resize(len + n_words);
            let words = self.mag.as_mut_slice();
            words.copy_within(0..len, n_words);
            words[..n_words].fill(0);
        }
    }
    /// Arithmetic shift, rounding toward negative infinity.
    pub fn shr_bits(&self, n: usize) -> BigInteger {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let n_words = n / WORD_BITS as usize;
        let n_bits = (n % WORD_BITS as usize) as u32;
        let mag = self.mag.as_slice();

        if n_words >= mag.len() {
            return if self.negative { BigInteger::from(-1) } else { ZERO };
        }

        let kept = &mag[n_words..];
        let mut one_lost = mag[..n_words].iter().any(|w| *w != 0);
        let mut result = Vec::with_capacity(kept.len());
        if n_bits == 0 {
            result.extend_from_slice(kept);
        } else {
            one_lost |= (kept[0] << (WORD_BITS - n_bits)) != 0;
            for (i, &word) in kept.iter().enumerate() {
                let high = kept.get(i + 1).map_or(0, |next| next << (WORD_BITS - n_bits));
                result.push((word >> n_bits) | high);
            }
        }

        let mut shifted = BigInteger::from_parts(result, self.negative);
        if self.negative && one_lost {
            shifted.decrement();
        }
        shifted
    }
}

// Increment and decrement
impl BigInteger {
    /// `++x`
    pub fn increment(&mut self) -> &mut Self {
        if self.negative {
            BigInteger::decrement_mag(&mut self.mag);
            self.negative = !self.mag.is_zero();
        } else {
            BigInteger::increment_mag(&mut self.mag);
        }
        self
    }
    /// `--x`
    pub fn decrement(&mut self) -> &mut Self {
        if self.negative {
            BigInteger::increment_mag(&mut self.mag);
        } else if self.is_zero() {
            *self = cache::NEG_CACHE[1].clone();
        } else {
            BigInteger::decrement_mag(&mut self.mag);
        }
        self
    }
    /// `x++`, returns the value before the increment.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        self.increment();
        previous
    }
    /// `x--`, returns the value before the decrement.
    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        self.decrement();
        previous
    }
    fn increment_mag(mag: &mut DigitVec) {
        for i in 0..mag.len() {
            let word = mag[i].wrapping_add(1);
            mag[i] = word;
            if word != 0 {
                return;
            }
        }
        mag.push(1);
    }
    /// Requires a non-zero magnitude.
    fn decrement_mag(mag: &mut DigitVec) {
        for i in 0..mag.len() {
            let word = mag[i];
            mag[i] = word.wrapping_sub(1);
            if word != 0 {
                break;
            }
        }
        mag.trim();
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    assert_eq!(BigInteger::from(12_i8).to_string(), "12");
    assert_eq!(BigInteger::from(-100_i16).to_string(), "-100");
    assert_eq!(BigInteger::from(0_u32).to_string(), "0");
    assert_eq!(BigInteger::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInteger::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInteger::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInteger::from(i128::MIN).to_string(), "-170141183460469231731687303715884105728");
    assert_eq!(BigInteger::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");

    let min = BigInteger::from(i32::MIN);
    assert!(min.is_negative());
    assert_eq!(min.magnitude().as_slice(), &[0x8000_0000]);
}

#[test]
fn test_parse() {
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    assert!(!big("-0").is_negative());
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(big("+42").to_string(), "42");
    assert_eq!(big("-000000000000000000001").to_string(), "-1");
    assert_eq!(big("4294967296").magnitude().as_slice(), &[0, 1]);

    for bad in ["", "-", "+", "12a", " 1", "1 ", "--1", "1-", "0x10", "１"] {
        assert_eq!(
            bad.parse::<BigInteger>(),
            Err(BigIntError::InvalidFormat { input: bad.to_string() }),
            "input {:?}", bad
        );
    }
}

#[test]
fn test_round_trip() {
    for s in [
        "1",
        "-1",
        "999999999",
        "1000000000",
        "-1000000000000000000",
        "4294967295",
        "4294967296",
        "18446744073709551616",
        "123456789012345678901234567890123456789012345678901234567890",
        "-340282366920938463463374607431768211456",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
}

#[test]
fn test_display_flags() {
    let a = big("-1234");
    assert_eq!(format!("{:>8}", a), "   -1234");
    assert_eq!(format!("{:+}", big("1234")), "+1234");
    assert_eq!(format!("{:06}", a), "-01234");
}

#[test]
fn test_compare() {
    let values = ["-100000000000000000000", "-4294967296", "-5", "-1", "0", "1", "7", "4294967296", "100000000000000000000"];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(big(a).cmp(&big(b)), i.cmp(&j), "{} vs {}", a, b);
        }
    }
    assert_eq!(big("-0"), big("0"));
    assert!(big("-3") < big("-2"));
    assert!(big("-3") <= big("-3"));
    assert!(big("3") >= big("2"));
    assert!(big("3") != big("-3"));
}

#[test]
fn test_add_sub_signs() {
    let cases = [
        ("5", "3", "8", "2"),
        ("5", "-3", "2", "8"),
        ("-5", "3", "-2", "-8"),
        ("-5", "-3", "-8", "-2"),
        ("3", "5", "8", "-2"),
        ("3", "-5", "-2", "8"),
        ("-3", "5", "2", "-8"),
        ("-3", "-5", "-8", "2"),
        ("5", "5", "10", "0"),
        ("-5", "5", "0", "-10"),
    ];
    for (a, b, sum, difference) in cases {
        assert_eq!((big(a) + big(b)).to_string(), sum, "{} + {}", a, b);
        assert_eq!((big(a) - big(b)).to_string(), difference, "{} - {}", a, b);
    }
}

#[test]
fn test_add_carry() {
    assert_eq!(
        (big("123456789012345678901234567890") + big("1")).to_string(),
        "123456789012345678901234567891"
    );
    assert_eq!((big("4294967295") + big("1")).magnitude().as_slice(), &[0, 1]);
    assert_eq!(
        (big("340282366920938463463374607431768211455") + big("1")).to_string(),
        "340282366920938463463374607431768211456"
    );
    assert_eq!((big("18446744073709551616") - big("1")).to_string(), "18446744073709551615");
    assert_eq!((big("18446744073709551616") - big("1")).magnitude().len(), 2);
}

#[test]
fn test_mul() {
    assert_eq!(
        (big("1000000000000000000") * big("1000000000000000000")).to_string(),
        "1000000000000000000000000000000000000"
    );
    assert_eq!((big("-12") * big("12")).to_string(), "-144");
    assert_eq!((big("-12") * big("-12")).to_string(), "144");
    assert_eq!((big("-12") * big("0")).to_string(), "0");
    assert!(!(big("-12") * big("0")).is_negative());
    assert_eq!(
        (big("18446744073709551615") * big("18446744073709551615")).to_string(),
        "340282366920938463426481119284349108225"
    );
    assert_eq!(
        (big("-98765432109876543210987654321") * big("12345678901234567890")).to_string(),
        "-1219326311370217952249657064223746380111126352690"
    );
}

#[test]
fn test_shl() {
    assert_eq!((big("1") << 32).magnitude().as_slice(), &[0, 1]);
    assert_eq!((big("1") << 100).to_string(), "1267650600228229401496703205376");
    assert_eq!((big("-3") << 31).to_string(), "-6442450944");
    assert_eq!((big("0") << 70).to_string(), "0");
    assert_eq!((big("5") << 0).to_string(), "5");
    assert_eq!(big("7").shift(65).magnitude().as_slice(), &[0, 0, 14]);
    assert_eq!(big("-4294967295").shl_bits(4).magnitude().as_slice(), &[0xffff_fff0, 0xf]);
    assert_eq!((big("5") << -1).to_string(), "2");
}

#[test]
fn test_shr() {
    assert_eq!((big("1267650600228229401496703205376") >> 100).to_string(), "1");
    assert_eq!((big("-1") >> 1).to_string(), "-1");
    assert_eq!((big("-4") >> 1).to_string(), "-2");
    assert_eq!((big("-5") >> 1).to_string(), "-3");
    assert_eq!((big("-4294967296") >> 32).to_string(), "-1");
    assert_eq!((big("-4294967297") >> 32).to_string(), "-2");
    assert_eq!((big("-18446744073709551616") >> 33).to_string(), "-2147483648");
    assert_eq!((big("7") >> 100).to_string(), "0");
    assert_eq!((big("-7") >> 100).to_string(), "-1");
    assert_eq!((big("7") >> -2).to_string(), "28");
}

#[test]
fn test_increment_decrement() {
    let mut a = big("-1");
    assert_eq!(a.post_increment().to_string(), "-1");
    assert_eq!(a.to_string(), "0");
    a.increment().increment();
    assert_eq!(a.to_string(), "2");
    assert_eq!(a.post_decrement().to_string(), "2");
    a.decrement().decrement();
    assert_eq!(a.to_string(), "-1");

    let mut b = big("4294967295");
    b.increment();
    assert_eq!(b.magnitude().as_slice(), &[0, 1]);
    b.decrement();
    assert!(b.magnitude().is_inline());
}

#[test]
fn test_value_semantics() {
    let a = big("123456789012345678901234567890");
    let mut b = a.clone();
    assert!(a.magnitude().is_shared());
    b += big("1");
    assert_eq!(a.to_string(), "123456789012345678901234567890");
    assert_eq!(b.to_string(), "123456789012345678901234567891");
    assert!(!a.magnitude().is_shared());
}

#[test]
fn test_compound_assign_in_place() {
    let mut a = big("123456789012345678901234567890");
    let buffer = a.magnitude().as_slice().as_ptr();
    a += big("1");
    a -= 5;
    a.increment();
    a /= 7;
    assert_eq!(a.to_string(), "17636684144620811271604938269");
    assert_eq!(a.magnitude().as_slice().as_ptr(), buffer);
}

#[test]
fn test_compound_assign_shared() {
    let a = big("55340232221128654853");
    assert_eq!(a.magnitude().as_slice(), &[5, 0, 3]);
    let mut b = a.clone();
    b += big("18446744073709551616");
    assert_eq!(a.to_string(), "55340232221128654853");
    assert_eq!(b.to_string(), "73786976294838206469");
    assert!(!a.magnitude().is_shared());

    let mut c = a.clone();
    c <<= 40;
    c.decrement();
    assert_eq!(a.magnitude().as_slice(), &[5, 0, 3]);
    assert_eq!(c, big("55340232221128654853").shl_bits(40) - big("1"));

    // sign changes and cancellation
    let mut x = big("5");
    x -= big("18446744073709551616");
    assert_eq!(x.to_string(), "-18446744073709551611");
    x += big("18446744073709551611");
    assert_eq!(x, big("0"));
    assert!(!x.is_negative());
    x -= big("4294967296");
    assert_eq!(x.to_string(), "-4294967296");
}

#[test]
#[should_panic(expected = "exceeds the maximum")]
fn test_shl_too_far() {
    let _ = big("1").shl_bits(usize::MAX);
}

#[test]
fn test_queries() {
    assert_eq!(big("-17").abs().to_string(), "17");
    assert_eq!(big("-17").signum().to_string(), "-1");
    assert_eq!(big("0").signum().to_string(), "0");
    assert_eq!(big("17").signum().to_string(), "1");
    assert_eq!(big("0").bit_length(), 0);
    assert_eq!(big("255").bit_length(), 8);
    assert_eq!(big("-4294967296").bit_length(), 33);
    assert!(big("3").is_positive());
    assert!(!big("0").is_positive());
    assert_eq!(big("-170141183460469231731687303715884105728").to_i128(), Some(i128::MIN));
    assert_eq!(big("170141183460469231731687303715884105728").to_i128(), None);
    assert_eq!(big("340282366920938463463374607431768211455").to_u128(), Some(u128::MAX));
    assert_eq!(big("-1").to_u128(), None);
}
