use lazy_static::*;

use crate::constants::*;
use crate::digit_vec::DigitVec;
use crate::BigInteger;

lazy_static! {
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInteger::from_raw(DigitVec::from_word(i as u32), false));
    pub static ref NEG_CACHE: [BigInteger; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInteger::from_raw(DigitVec::from_word(i as u32), i != 0));
}

/// Cached value for `value`, negated if `negative`, when it is small enough.
pub fn small(value: u128, negative: bool) -> Option<BigInteger> {
    if value > MAX_CONSTANT as u128 {
        return None;
    }
    let cache: &[BigInteger; MAX_CONSTANT + 1] = if negative { &NEG_CACHE } else { &POS_CACHE };
    Some(cache[value as usize].clone())
}

#[test]
fn test_small() {
    assert_eq!(small(0, true).map(|v| v.to_string()), Some("0".to_string()));
    assert_eq!(small(7, true).map(|v| v.to_string()), Some("-7".to_string()));
    assert_eq!(small(16, false).map(|v| v.to_string()), Some("16".to_string()));
    assert!(small(17, false).is_none());
}
