//! Operator impls. Every binary operator has a `&BigInteger op &BigInteger`
//! form and a compound-assignment form; owned left operands go through the
//! compound assignment so their storage is reused when nothing else holds it.

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};

use super::{BigInteger, BitOp, Combine, ZERO};

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident,
     |$a:ident, $b:ident| $body:expr, |$lhs:ident, $rhs:ident| $assign_body:expr) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                let $a = self;
                let $b = rhs;
                $body
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: BigInteger) -> BigInteger {
                self.$assign_method(&rhs);
                self
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: &BigInteger) -> BigInteger {
                self.$assign_method(rhs);
                self
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$method(&rhs)
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                let $lhs = self;
                let $rhs = rhs;
                $assign_body
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                self.$assign_method(&rhs);
            }
        }
    };
}

// `i32` is the only primitive right-hand side, so integer literals infer.
macro_rules! forward_i32_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<i32> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: i32) -> BigInteger {
                self.$method(&BigInteger::from(rhs))
            }
        }

        impl $imp<i32> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: i32) -> BigInteger {
                self.$assign_method(rhs);
                self
            }
        }

        impl $assign_imp<i32> for BigInteger {
            fn $assign_method(&mut self, rhs: i32) {
                self.$assign_method(&BigInteger::from(rhs));
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign,
               |a, b| a.combine(b, Combine::Add), |x, y| x.combine_assign(y, Combine::Add));
forward_binop!(impl Sub, sub, SubAssign, sub_assign,
               |a, b| a.combine(b, Combine::Sub), |x, y| x.combine_assign(y, Combine::Sub));
forward_binop!(impl Mul, mul, MulAssign, mul_assign,
               |a, b| a.mul_ref(b), |x, y| *x = x.mul_ref(y));
forward_binop!(impl Div, div, DivAssign, div_assign,
               |a, b| a.div_rem_ref(b).0, |x, y| *x = x.div_rem_ref(y).0);
forward_binop!(impl Rem, rem, RemAssign, rem_assign,
               |a, b| a.div_rem_ref(b).1, |x, y| *x = x.div_rem_ref(y).1);
forward_binop!(impl BitAnd, bitand, BitAndAssign, bitand_assign,
               |a, b| a.bit_op(b, BitOp::And), |x, y| *x = x.bit_op(y, BitOp::And));
forward_binop!(impl BitOr, bitor, BitOrAssign, bitor_assign,
               |a, b| a.bit_op(b, BitOp::Or), |x, y| *x = x.bit_op(y, BitOp::Or));
forward_binop!(impl BitXor, bitxor, BitXorAssign, bitxor_assign,
               |a, b| a.bit_op(b, BitOp::Xor), |x, y| *x = x.bit_op(y, BitOp::Xor));

forward_i32_binop!(impl Add, add, AddAssign, add_assign);
forward_i32_binop!(impl Sub, sub, SubAssign, sub_assign);
forward_i32_binop!(impl Mul, mul, MulAssign, mul_assign);
forward_i32_binop!(impl BitAnd, bitand, BitAndAssign, bitand_assign);
forward_i32_binop!(impl BitOr, bitor, BitOrAssign, bitor_assign);
forward_i32_binop!(impl BitXor, bitxor, BitXorAssign, bitxor_assign);

// Division by one machine word skips the general path.
impl Div<i32> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: i32) -> BigInteger {
        self.clone() / rhs
    }
}

impl Div<i32> for BigInteger {
    type Output = BigInteger;

    fn div(mut self, rhs: i32) -> BigInteger {
        self /= rhs;
        self
    }
}

impl DivAssign<i32> for BigInteger {
    fn div_assign(&mut self, rhs: i32) {
        self.div_assign_i32(rhs);
    }
}

impl Rem<i32> for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: i32) -> BigInteger {
        match self.div_rem_i32(rhs) {
            Ok((_, r)) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Rem<i32> for BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: i32) -> BigInteger {
        (&self).rem(rhs)
    }
}

impl RemAssign<i32> for BigInteger {
    fn rem_assign(&mut self, rhs: i32) {
        *self = (&*self).rem(rhs);
    }
}

// Shifts by a signed bit count; a negative count shifts the other way.
impl Shl<i32> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, n: i32) -> BigInteger {
        self.shift(n as i64)
    }
}

impl Shl<i32> for BigInteger {
    type Output = BigInteger;

    fn shl(mut self, n: i32) -> BigInteger {
        self.shift_assign(n as i64);
        self
    }
}

impl ShlAssign<i32> for BigInteger {
    fn shl_assign(&mut self, n: i32) {
        self.shift_assign(n as i64);
    }
}

impl Shr<i32> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, n: i32) -> BigInteger {
        self.shift(-(n as i64))
    }
}

impl Shr<i32> for BigInteger {
    type Output = BigInteger;

    fn shr(self, n: i32) -> BigInteger {
        self.shift(-(n as i64))
    }
}

impl ShrAssign<i32> for BigInteger {
    fn shr_assign(&mut self, n: i32) {
        self.shift_assign(-(n as i64));
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negated()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negated()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        self.not_ref()
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        self.not_ref()
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> BigInteger {
        iter.fold(ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> BigInteger {
        iter.fold(ZERO, |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> BigInteger {
        iter.fold(BigInteger::from(1), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> BigInteger {
        iter.fold(BigInteger::from(1), |acc, x| acc * x)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_operator_forms() {
    let a = big("100000000000000000000");
    let b = big("-3");
    assert_eq!(&a + &b, a.clone() + b.clone());
    assert_eq!(&a - b.clone(), a.clone() - &b);
    assert_eq!((&a * &b).to_string(), "-300000000000000000000");
    assert_eq!((&a / &b).to_string(), "-33333333333333333333");
    assert_eq!((&a % &b).to_string(), "1");
    assert_eq!((-&b).to_string(), "3");
    assert_eq!((-big("0")).to_string(), "0");
    assert!(!(-big("0")).is_negative());
}

#[test]
fn test_compound_assign() {
    let mut x = big("10");
    x += big("5");
    x -= &big("3");
    x *= 4;
    x /= 5;
    x %= 7;
    assert_eq!(x.to_string(), "2");

    x <<= 40;
    assert_eq!(x.to_string(), "2199023255552");
    x >>= 39;
    assert_eq!(x.to_string(), "4");
    x |= 3;
    x &= 6;
    x ^= big("-1");
    assert_eq!(x.to_string(), "-7");
    x /= -2;
    assert_eq!(x.to_string(), "3");
    x /= &big("2");
    assert_eq!(x.to_string(), "1");
    x -= 1;
    x -= 1;
    assert_eq!(x.to_string(), "-1");
}

#[test]
fn test_primitive_rhs() {
    let a = big("4294967295");
    assert_eq!((&a + 1).to_string(), "4294967296");
    assert_eq!((&a - i32::MAX).to_string(), "2147483648");
    assert_eq!((&a * -2).to_string(), "-8589934590");
    assert_eq!((&a / -2).to_string(), "-2147483647");
    assert_eq!((&a % 10).to_string(), "5");
    assert_eq!((&a & 0xff).to_string(), "255");
    assert_eq!((&a | -1).to_string(), "-1");
    assert_eq!((a.clone() ^ 1).to_string(), "4294967294");
    assert_eq!((a << 1 >> 2).to_string(), "2147483647");
}

#[test]
fn test_sum_product() {
    let values = vec![big("4294967295"), big("1"), big("-2")];
    assert_eq!(values.iter().sum::<BigInteger>().to_string(), "4294967294");
    assert_eq!(values.into_iter().product::<BigInteger>().to_string(), "-8589934590");
}
