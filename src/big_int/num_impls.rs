use num_traits::{Num, One, Signed, ToPrimitive, Zero};

use super::{BigInteger, ZERO};
use crate::error::BigIntError;

impl Zero for BigInteger {
    fn zero() -> Self {
        ZERO
    }
    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        BigInteger::from(1)
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = BigIntError;

    /// Decimal only.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, BigIntError> {
        if radix != 10 {
            return Err(BigIntError::UnsupportedRadix { radix });
        }
        s.parse()
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }
    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other { ZERO } else { self - other }
    }
    fn signum(&self) -> Self {
        BigInteger::signum(self)
    }
    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }
    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }
    fn to_i128(&self) -> Option<i128> {
        BigInteger::to_i128(self)
    }
    fn to_u128(&self) -> Option<u128> {
        BigInteger::to_u128(self)
    }
}

#[test]
fn test_num_traits() {
    let a = BigInteger::from_str_radix("-123", 10).unwrap();
    assert_eq!(a.to_string(), "-123");
    assert_eq!(
        BigInteger::from_str_radix("ff", 16),
        Err(BigIntError::UnsupportedRadix { radix: 16 })
    );
    assert!(Zero::is_zero(&<BigInteger as Zero>::zero()));
    assert_eq!(<BigInteger as One>::one().to_string(), "1");
    assert_eq!(Signed::abs_sub(&BigInteger::from(3), &BigInteger::from(5)).to_string(), "0");
    assert_eq!(Signed::abs_sub(&BigInteger::from(5), &BigInteger::from(3)).to_string(), "2");
    assert_eq!(Signed::signum(&a).to_string(), "-1");
    assert_eq!(ToPrimitive::to_i64(&a), Some(-123));
    assert_eq!(ToPrimitive::to_u64(&a), None);
    assert_eq!(ToPrimitive::to_i64(&BigInteger::from(i64::MIN)), Some(i64::MIN));
    assert_eq!(ToPrimitive::to_u64(&BigInteger::from(u64::MAX)), Some(u64::MAX));
    assert_eq!(ToPrimitive::to_i64(&BigInteger::from(u64::MAX)), None);
}
