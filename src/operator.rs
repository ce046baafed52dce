//! Arithmetic operators for [`BigInt`].
//!
//! Every binary operator is provided for all four owned/borrowed operand
//! combinations. The borrowed forms clone the left operand once; the owned
//! forms reuse its storage. Scalar `i64` operands take a single-pass fast
//! path when their magnitude fits below `BASE * BASE`, and fall back to full
//! big-integer arithmetic otherwise.

use crate::arith::{self, BASE};
use crate::bigint::BigInt;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_assign_ref(rhs);
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        self.add_assign_ref(&rhs);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.negative != rhs.negative {
            arith::iadd_shifted(&mut self.digits, &rhs.digits, 0);
            return;
        }
        match arith::compare(&self.digits, &rhs.digits) {
            Ordering::Less => {
                let mut larger = rhs.digits.clone();
                arith::isub(&mut larger, &self.digits);
                self.digits = larger;
                self.negative = !self.negative;
            }
            Ordering::Equal | Ordering::Greater => {
                arith::isub(&mut self.digits, &rhs.digits);
            }
        }
        self.normalize_zero();
    }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self -= &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.digits = arith::mul(&self.digits, &rhs.digits);
        self.negative = self.negative != rhs.negative;
        self.normalize_zero();
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self *= &rhs;
    }
}

macro_rules! impl_binop_via_assign {
    ($imp:ident, $method:ident, $assign_method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> BigInt {
                self.$assign_method(&rhs);
                self
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> BigInt {
                self.$assign_method(rhs);
                self
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(&rhs);
                out
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(rhs);
                out
            }
        }
    };
}

impl_binop_via_assign!(Add, add, add_assign);
impl_binop_via_assign!(Sub, sub, sub_assign);
impl_binop_via_assign!(Mul, mul, mul_assign);

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncating quotient.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`BigInt::div_rem`] to divide
    /// fallibly.
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Remainder of truncating division, taking the dividend's sign.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`BigInt::div_rem`] to divide
    /// fallibly.
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

macro_rules! forward_binop_to_ref_ref {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop_to_ref_ref!(Div, div);
forward_binop_to_ref_ref!(Rem, rem);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

impl DivAssign<BigInt> for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self = &*self / &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

impl RemAssign<BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self = &*self % &rhs;
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl AddAssign<i64> for BigInt {
    fn add_assign(&mut self, rhs: i64) {
        let magnitude = rhs.unsigned_abs();
        if magnitude >= BASE * BASE {
            *self += &BigInt::from(rhs);
            return;
        }
        if self.negative == (rhs < 0) {
            arith::iadd_small(&mut self.digits, magnitude);
        } else if !arith::isub_small(&mut self.digits, magnitude) {
            // The scalar dominated; the difference carries its sign.
            self.negative = !self.negative;
        }
        self.normalize_zero();
    }
}

impl SubAssign<i64> for BigInt {
    fn sub_assign(&mut self, rhs: i64) {
        let magnitude = rhs.unsigned_abs();
        if magnitude >= BASE * BASE {
            *self -= &BigInt::from(rhs);
            return;
        }
        if self.negative == (rhs > 0) {
            arith::iadd_small(&mut self.digits, magnitude);
        } else if !arith::isub_small(&mut self.digits, magnitude) {
            self.negative = !self.negative;
        }
        self.normalize_zero();
    }
}

impl MulAssign<i64> for BigInt {
    fn mul_assign(&mut self, rhs: i64) {
        let magnitude = rhs.unsigned_abs();
        if magnitude >= BASE * BASE {
            *self *= &BigInt::from(rhs);
            return;
        }
        self.negative = self.negative != (rhs < 0);
        arith::imul_small(&mut self.digits, magnitude);
        self.normalize_zero();
    }
}

macro_rules! impl_scalar_binop {
    ($imp:ident, $method:ident, $assign_method:ident) => {
        impl $imp<i64> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: i64) -> BigInt {
                self.$assign_method(rhs);
                self
            }
        }

        impl $imp<i64> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(rhs);
                out
            }
        }
    };
}

impl_scalar_binop!(Add, add, add_assign);
impl_scalar_binop!(Sub, sub, sub_assign);
impl_scalar_binop!(Mul, mul, mul_assign);
