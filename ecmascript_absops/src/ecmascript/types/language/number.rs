// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod radix;

use super::{IntoValue, Value};

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
///
/// The operations on this type never coerce: both operands must already be
/// Numbers.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Number(f64);

impl std::fmt::Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseOp {
    And,
    Xor,
    Or,
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number(value as f64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number(value as f64)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number(value as f64)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl TryFrom<Value> for Number {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Number(n) = value {
            Ok(n)
        } else {
            Err(())
        }
    }
}

impl IntoValue for Number {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl Number {
    pub const NAN: Self = Self(f64::NAN);
    pub const POS_ZERO: Self = Self(0.0);
    pub const NEG_ZERO: Self = Self(-0.0);
    pub const POS_INF: Self = Self(f64::INFINITY);
    pub const NEG_INF: Self = Self(f64::NEG_INFINITY);
    pub const ONE: Self = Self(1.0);

    pub const fn from_f64(value: f64) -> Self {
        Self(value)
    }

    pub const fn into_f64(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn is_pos_zero(self) -> bool {
        self.0 == 0.0 && self.0.is_sign_positive()
    }

    pub fn is_neg_zero(self) -> bool {
        self.0 == 0.0 && self.0.is_sign_negative()
    }

    pub fn is_pos_infinity(self) -> bool {
        self.0 == f64::INFINITY
    }

    pub fn is_neg_infinity(self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_nonzero(self) -> bool {
        self.0 != 0.0
    }

    /// An integral Number is a finite Number whose mathematical value is an
    /// integer.
    pub fn is_integral(self) -> bool {
        self.0.is_finite() && self.0.trunc() == self.0
    }

    fn is_odd_integral(self) -> bool {
        self.is_integral() && (self.0 % 2.0).abs() == 1.0
    }

    /// ### [6.1.6.1.1 Number::unaryMinus ( x )](https://tc39.es/ecma262/#sec-numeric-types-number-unaryMinus)
    pub fn unary_minus(x: Self) -> Self {
        // 1. If x is NaN, return NaN.
        if x.is_nan() {
            return Self::NAN;
        }
        // 2. Return the result of negating x; that is, compute a Number with
        //    the same magnitude but opposite sign.
        Self(-x.0)
    }

    /// ### [6.1.6.1.2 Number::bitwiseNOT ( x )](https://tc39.es/ecma262/#sec-numeric-types-number-bitwiseNOT)
    pub fn bitwise_not(x: Self) -> Self {
        // 1. Let oldValue be ! ToInt32(x).
        let old_value = x.to_int32();
        // 2. Return the result of applying bitwise complement to oldValue.
        Self::from(!old_value)
    }

    /// ### [6.1.6.1.3 Number::exponentiate ( base, exponent )](https://tc39.es/ecma262/#sec-numeric-types-number-exponentiate)
    pub fn exponentiate(base: Self, exponent: Self) -> Self {
        // 1. If exponent is NaN, return NaN.
        if exponent.is_nan() {
            return Self::NAN;
        }

        // 2. If exponent is either +0𝔽 or -0𝔽, return 1𝔽.
        if exponent.0 == 0.0 {
            return Self::ONE;
        }

        // 3. If base is NaN, return NaN.
        if base.is_nan() {
            return Self::NAN;
        }

        // 4. If base is +∞𝔽, then
        if base.is_pos_infinity() {
            // a. If exponent > +0𝔽, return +∞𝔽. Otherwise, return +0𝔽.
            return if exponent.0 > 0.0 {
                Self::POS_INF
            } else {
                Self::POS_ZERO
            };
        }

        // 5. If base is -∞𝔽, then
        if base.is_neg_infinity() {
            return if exponent.0 > 0.0 {
                // a. If exponent > +0𝔽, then
                //    i. If exponent is an odd integral Number, return -∞𝔽.
                //       Otherwise, return +∞𝔽.
                if exponent.is_odd_integral() {
                    Self::NEG_INF
                } else {
                    Self::POS_INF
                }
            } else {
                // b. Else,
                //    i. If exponent is an odd integral Number, return -0𝔽.
                //       Otherwise, return +0𝔽.
                if exponent.is_odd_integral() {
                    Self::NEG_ZERO
                } else {
                    Self::POS_ZERO
                }
            };
        }

        // 6. If base is +0𝔽, then
        if base.is_pos_zero() {
            // a. If exponent > +0𝔽, return +0𝔽. Otherwise, return +∞𝔽.
            return if exponent.0 > 0.0 {
                Self::POS_ZERO
            } else {
                Self::POS_INF
            };
        }

        // 7. If base is -0𝔽, then
        if base.is_neg_zero() {
            return if exponent.0 > 0.0 {
                // a. If exponent > +0𝔽, then
                //    i. If exponent is an odd integral Number, return -0𝔽.
                //       Otherwise, return +0𝔽.
                if exponent.is_odd_integral() {
                    Self::NEG_ZERO
                } else {
                    Self::POS_ZERO
                }
            } else {
                // b. Else,
                //    i. If exponent is an odd integral Number, return -∞𝔽.
                //       Otherwise, return +∞𝔽.
                if exponent.is_odd_integral() {
                    Self::NEG_INF
                } else {
                    Self::POS_INF
                }
            };
        }

        // 8. Assert: base is finite and is neither +0𝔽 nor -0𝔽.
        debug_assert!(base.is_finite() && base.is_nonzero());

        // 9. If exponent is +∞𝔽, then
        if exponent.is_pos_infinity() {
            let base = base.0.abs();
            // a. If abs(ℝ(base)) > 1, return +∞𝔽.
            // b. If abs(ℝ(base)) = 1, return NaN.
            // c. If abs(ℝ(base)) < 1, return +0𝔽.
            return if base > 1.0 {
                Self::POS_INF
            } else if base == 1.0 {
                Self::NAN
            } else {
                Self::POS_ZERO
            };
        }

        // 10. If exponent is -∞𝔽, then
        if exponent.is_neg_infinity() {
            let base = base.0.abs();
            // a. If abs(ℝ(base)) > 1, return +0𝔽.
            // b. If abs(ℝ(base)) = 1, return NaN.
            // c. If abs(ℝ(base)) < 1, return +∞𝔽.
            return if base > 1.0 {
                Self::POS_ZERO
            } else if base == 1.0 {
                Self::NAN
            } else {
                Self::POS_INF
            };
        }

        // 11. Assert: exponent is finite and is neither +0𝔽 nor -0𝔽.
        debug_assert!(exponent.is_finite() && exponent.is_nonzero());

        // 12. If base < -0𝔽 and exponent is not an integral Number, return NaN.
        if base.0 < 0.0 && !exponent.is_integral() {
            return Self::NAN;
        }

        // 13. Return an implementation-approximated Number representing the
        //     result of raising ℝ(base) to the ℝ(exponent) power.
        Self(base.0.powf(exponent.0))
    }

    /// ### [6.1.6.1.4 Number::multiply ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-multiply)
    pub fn multiply(x: Self, y: Self) -> Self {
        Self(x.0 * y.0)
    }

    /// ### [6.1.6.1.5 Number::divide ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-divide)
    pub fn divide(x: Self, y: Self) -> Self {
        Self(x.0 / y.0)
    }

    /// ### [6.1.6.1.6 Number::remainder ( n, d )](https://tc39.es/ecma262/#sec-numeric-types-number-remainder)
    ///
    /// The result takes the sign of the dividend `n`; IEEE 754 `fmod`
    /// produces exactly the values the steps below describe.
    pub fn remainder(n: Self, d: Self) -> Self {
        // 1. If either n or d is NaN, return NaN.
        // 2. If n is either +∞𝔽 or -∞𝔽, return NaN.
        // 3. If d is either +∞𝔽 or -∞𝔽, return n.
        // 4. If d is either +0𝔽 or -0𝔽, return NaN.
        // 5. If n is either +0𝔽 or -0𝔽, return n.
        // 6. Assert: n and d are finite and non-zero.
        // 7-10. Let r be ℝ(n) - (ℝ(d) × q) where q is an integer that is
        //       negative if and only if n and d have opposite sign, and whose
        //       magnitude is as large as possible without exceeding the
        //       magnitude of ℝ(n) / ℝ(d). If r = 0 and n < -0𝔽, return -0𝔽.
        Self(n.0 % d.0)
    }

    /// ### [6.1.6.1.7 Number::add ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-add)
    pub fn add(x: Self, y: Self) -> Self {
        Self(x.0 + y.0)
    }

    /// ### [6.1.6.1.8 Number::subtract ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-subtract)
    pub fn subtract(x: Self, y: Self) -> Self {
        // 1. Return Number::add(x, Number::unaryMinus(y)).
        Self::add(x, Self::unary_minus(y))
    }

    /// ### [6.1.6.1.9 Number::leftShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-leftShift)
    pub fn left_shift(x: Self, y: Self) -> Self {
        // 1. Let lnum be ! ToInt32(x).
        let lnum = x.to_int32();
        // 2. Let rnum be ! ToUint32(y).
        let rnum = y.to_uint32();
        // 3. Let shiftCount be ℝ(rnum) modulo 32.
        let shift_count = rnum % 32;
        // 4. Return the result of left shifting lnum by shiftCount bits.
        Self::from(lnum.wrapping_shl(shift_count))
    }

    /// ### [6.1.6.1.10 Number::signedRightShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-signedRightShift)
    pub fn signed_right_shift(x: Self, y: Self) -> Self {
        // 1. Let lnum be ! ToInt32(x).
        let lnum = x.to_int32();
        // 2. Let rnum be ! ToUint32(y).
        let rnum = y.to_uint32();
        // 3. Let shiftCount be ℝ(rnum) modulo 32.
        let shift_count = rnum % 32;
        // 4. Return the result of performing a sign-extending right shift of
        //    lnum by shiftCount bits.
        Self::from(lnum >> shift_count)
    }

    /// ### [6.1.6.1.11 Number::unsignedRightShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-unsignedRightShift)
    pub fn unsigned_right_shift(x: Self, y: Self) -> Self {
        // 1. Let lnum be ! ToUint32(x).
        let lnum = x.to_uint32();
        // 2. Let rnum be ! ToUint32(y).
        let rnum = y.to_uint32();
        // 3. Let shiftCount be ℝ(rnum) modulo 32.
        let shift_count = rnum % 32;
        // 4. Return the result of performing a zero-filling right shift of
        //    lnum by shiftCount bits.
        Self::from(lnum >> shift_count)
    }

    /// ### [6.1.6.1.12 Number::lessThan ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-lessThan)
    ///
    /// Returns `None` (undefined) if either operand is NaN.
    pub fn less_than(x: Self, y: Self) -> Option<bool> {
        // 1. If x is NaN, return undefined.
        // 2. If y is NaN, return undefined.
        if x.is_nan() || y.is_nan() {
            return None;
        }
        // 3-12. IEEE 754 ordering treats +0 and -0 as equal and orders the
        //       infinities at the ends.
        Some(x.0 < y.0)
    }

    /// ### [6.1.6.1.13 Number::equal ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-equal)
    pub fn equal(x: Self, y: Self) -> bool {
        // 1. If x is NaN, return false.
        // 2. If y is NaN, return false.
        // 3. If x is y, return true.
        // 4. If x is +0𝔽 and y is -0𝔽, return true.
        // 5. If x is -0𝔽 and y is +0𝔽, return true.
        // 6. Return false.
        x.0 == y.0
    }

    /// ### [6.1.6.1.14 Number::sameValue ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-sameValue)
    pub fn same_value(x: Self, y: Self) -> bool {
        // 1. If x is NaN and y is NaN, return true.
        if x.is_nan() && y.is_nan() {
            return true;
        }
        // 2. If x is +0𝔽 and y is -0𝔽, return false.
        // 3. If x is -0𝔽 and y is +0𝔽, return false.
        // 4. If x is y, return true.
        // 5. Return false.
        x.0 == y.0 && x.0.is_sign_negative() == y.0.is_sign_negative()
    }

    /// ### [6.1.6.1.15 Number::sameValueZero ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-sameValueZero)
    pub fn same_value_zero(x: Self, y: Self) -> bool {
        // 1. If x is NaN and y is NaN, return true.
        if x.is_nan() && y.is_nan() {
            return true;
        }
        // 2. If x is +0𝔽 and y is -0𝔽, return true.
        // 3. If x is -0𝔽 and y is +0𝔽, return true.
        // 4. If x is y, return true.
        // 5. Return false.
        x.0 == y.0
    }

    /// ### [6.1.6.1.16 NumberBitwiseOp ( op, x, y )](https://tc39.es/ecma262/#sec-numberbitwiseop)
    pub fn bitwise_op(op: BitwiseOp, x: Self, y: Self) -> Self {
        // 1. Let lnum be ! ToInt32(x).
        // 2. Let rnum be ! ToInt32(y).
        // 3. Let lbits be the 32-bit two's complement bit string representing ℝ(lnum).
        let lbits = x.to_int32();
        // 4. Let rbits be the 32-bit two's complement bit string representing ℝ(rnum).
        let rbits = y.to_int32();
        let result = match op {
            // 5. If op is &, then
            //    a. Let result be the result of applying the bitwise AND
            //       operation to lbits and rbits.
            BitwiseOp::And => lbits & rbits,
            // 6. Else if op is ^, then
            //    a. Let result be the result of applying the bitwise
            //       exclusive OR (XOR) operation to lbits and rbits.
            BitwiseOp::Xor => lbits ^ rbits,
            // 7. Else,
            //    a. Assert: op is |.
            //    b. Let result be the result of applying the bitwise
            //       inclusive OR operation to lbits and rbits.
            BitwiseOp::Or => lbits | rbits,
        };
        // 8. Return the Number value for the integer represented by the 32-bit
        //    two's complement bit string result.
        Self::from(result)
    }

    /// ### [6.1.6.1.17 Number::bitwiseAND ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-bitwiseAND)
    pub fn bitwise_and(x: Self, y: Self) -> Self {
        Self::bitwise_op(BitwiseOp::And, x, y)
    }

    /// ### [6.1.6.1.18 Number::bitwiseXOR ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-bitwiseXOR)
    pub fn bitwise_xor(x: Self, y: Self) -> Self {
        Self::bitwise_op(BitwiseOp::Xor, x, y)
    }

    /// ### [6.1.6.1.19 Number::bitwiseOR ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-bitwiseOR)
    pub fn bitwise_or(x: Self, y: Self) -> Self {
        Self::bitwise_op(BitwiseOp::Or, x, y)
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// `radix` must be in the inclusive interval from 2 to 36.
    pub fn to_string_radix(self, radix: u32) -> std::string::String {
        debug_assert!((2..=36).contains(&radix));
        let x = self.0;
        // 1. If x is NaN, return "NaN".
        if x.is_nan() {
            return "NaN".into();
        }
        // 2. If x is either +0𝔽 or -0𝔽, return "0".
        if x == 0.0 {
            return "0".into();
        }
        // 3. If x < -0𝔽, return the string-concatenation of "-" and
        //    Number::toString(-x, radix).
        // 4. If x is +∞𝔽, return "Infinity".
        if x.is_infinite() {
            return if x > 0.0 { "Infinity" } else { "-Infinity" }.into();
        }
        if radix == 10 {
            // 5-12. The shortest round-tripping decimal digits, laid out as
            //       either an integer, a decimal fraction or exponential
            //       notation depending on the exponent.
            let mut buffer = ryu_js::Buffer::new();
            return buffer.format_finite(x).to_owned();
        }
        radix::to_radix_string(x, radix)
    }

    /// The integer-modulo reduction shared by ToInt32 and friends, applied
    /// to a value that is already a Number.
    fn to_integer_modulo(self, bits: i32) -> f64 {
        let number = self.0;
        // If number is not finite or number is either +0𝔽 or -0𝔽, return +0𝔽.
        if !number.is_finite() || number == 0.0 {
            return 0.0;
        }
        // Let int be truncate(ℝ(number)).
        let int = number.trunc();
        // Let intNbit be int modulo 2^N.
        int.rem_euclid(2f64.powi(bits))
    }

    /// ### [7.1.6 ToInt32 ( argument )](https://tc39.es/ecma262/#sec-toint32)
    /// applied to a Number.
    pub fn to_int32(self) -> i32 {
        self.to_integer_modulo(32) as u32 as i32
    }

    /// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
    /// applied to a Number.
    pub fn to_uint32(self) -> u32 {
        self.to_integer_modulo(32) as u32
    }

    /// ### [7.1.8 ToInt16 ( argument )](https://tc39.es/ecma262/#sec-toint16)
    /// applied to a Number.
    pub fn to_int16(self) -> i16 {
        self.to_integer_modulo(16) as u16 as i16
    }

    /// ### [7.1.9 ToUint16 ( argument )](https://tc39.es/ecma262/#sec-touint16)
    /// applied to a Number.
    pub fn to_uint16(self) -> u16 {
        self.to_integer_modulo(16) as u16
    }

    /// ### [7.1.10 ToInt8 ( argument )](https://tc39.es/ecma262/#sec-toint8)
    /// applied to a Number.
    pub fn to_int8(self) -> i8 {
        self.to_integer_modulo(8) as u8 as i8
    }

    /// ### [7.1.11 ToUint8 ( argument )](https://tc39.es/ecma262/#sec-touint8)
    /// applied to a Number.
    pub fn to_uint8(self) -> u8 {
        self.to_integer_modulo(8) as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn n(value: f64) -> Number {
        Number::from_f64(value)
    }

    #[test]
    fn exponentiate_edge_cases() {
        assert!(Number::exponentiate(n(1.0), n(f64::INFINITY)).is_nan());
        assert!(Number::exponentiate(n(-1.0), n(f64::NEG_INFINITY)).is_nan());
        assert!(Number::exponentiate(n(1.0), Number::NAN).is_nan());
        assert_eq!(Number::exponentiate(Number::NAN, n(0.0)), Number::ONE);
        assert!(Number::exponentiate(n(-8.0), n(0.5)).is_nan());
        assert!(Number::exponentiate(n(-0.0), n(3.0)).is_neg_zero());
        assert!(Number::exponentiate(n(-0.0), n(2.0)).is_pos_zero());
        assert!(Number::exponentiate(n(-0.0), n(-3.0)).is_neg_infinity());
        assert!(Number::exponentiate(n(f64::NEG_INFINITY), n(-1.0)).is_neg_zero());
        assert!(Number::exponentiate(n(f64::NEG_INFINITY), n(2.0)).is_pos_infinity());
        assert!(Number::exponentiate(n(0.5), n(f64::NEG_INFINITY)).is_pos_infinity());
        assert_eq!(Number::exponentiate(n(2.0), n(10.0)), n(1024.0));
    }

    #[test]
    fn arithmetic_follows_ieee() {
        assert_eq!(Number::add(n(0.1), n(0.2)), n(0.30000000000000004));
        assert!(Number::add(n(-0.0), n(-0.0)).is_neg_zero());
        assert!(Number::subtract(n(0.0), n(0.0)).is_pos_zero());
        assert!(Number::divide(n(1.0), n(-0.0)).is_neg_infinity());
        assert!(Number::multiply(n(-1.0), n(0.0)).is_neg_zero());
        assert!(Number::remainder(n(-1.0), n(1.0)).is_neg_zero());
        assert_eq!(Number::remainder(n(-7.0), n(3.0)), n(-1.0));
        assert_eq!(Number::remainder(n(7.0), n(f64::INFINITY)), n(7.0));
        assert!(Number::remainder(n(f64::INFINITY), n(3.0)).is_nan());
        assert!(Number::remainder(n(3.0), n(0.0)).is_nan());
        assert!(Number::unary_minus(n(0.0)).is_neg_zero());
    }

    #[test]
    fn bitwise_and_shifts_wrap_to_32_bits() {
        assert_eq!(Number::bitwise_not(n(0.0)), n(-1.0));
        assert_eq!(Number::bitwise_and(n(4294967295.0), n(1.0)), n(1.0));
        assert_eq!(Number::bitwise_or(n(2147483648.0), n(0.0)), n(-2147483648.0));
        assert_eq!(Number::bitwise_xor(n(5.0), n(3.0)), n(6.0));
        assert_eq!(Number::left_shift(n(1.0), n(33.0)), n(2.0));
        assert_eq!(Number::left_shift(n(1.0), n(31.0)), n(-2147483648.0));
        assert_eq!(Number::signed_right_shift(n(-8.0), n(1.0)), n(-4.0));
        assert_eq!(Number::unsigned_right_shift(n(-1.0), n(0.0)), n(4294967295.0));
        assert_eq!(Number::unsigned_right_shift(n(-1.0), n(32.0)), n(4294967295.0));
        assert_eq!(Number::unsigned_right_shift(n(-8.0), n(-31.0)), n(2147483644.0));
    }

    #[test]
    fn relational_and_sameness() {
        assert_eq!(Number::less_than(Number::NAN, n(1.0)), None);
        assert_eq!(Number::less_than(n(-0.0), n(0.0)), Some(false));
        assert_eq!(Number::less_than(Number::NEG_INF, n(0.0)), Some(true));
        assert!(Number::equal(n(-0.0), n(0.0)));
        assert!(!Number::equal(Number::NAN, Number::NAN));
        assert!(Number::same_value(Number::NAN, Number::NAN));
        assert!(!Number::same_value(n(-0.0), n(0.0)));
        assert!(Number::same_value_zero(n(-0.0), n(0.0)));
        assert!(Number::same_value_zero(Number::NAN, Number::NAN));
    }

    #[test]
    fn to_string_radix_10() {
        assert_eq!(Number::NAN.to_string_radix(10), "NaN");
        assert_eq!(Number::NEG_ZERO.to_string_radix(10), "0");
        assert_eq!(Number::NEG_INF.to_string_radix(10), "-Infinity");
        assert_eq!(n(42.0).to_string_radix(10), "42");
        assert_eq!(n(-2.3).to_string_radix(10), "-2.3");
        assert_eq!(n(1e21).to_string_radix(10), "1e+21");
        assert_eq!(n(1e-7).to_string_radix(10), "1e-7");
        assert_eq!(n(123456789012345680000.0).to_string_radix(10), "123456789012345680000");
        assert_eq!(n(0.000001).to_string_radix(10), "0.000001");
    }

    #[test]
    fn to_int_conversions() {
        assert_eq!(n(4294967296.0).to_int32(), 0);
        assert_eq!(n(2147483648.0).to_int32(), -2147483648);
        assert_eq!(n(-1.0).to_uint32(), 4294967295);
        assert_eq!(n(-1.5).to_uint16(), 65535);
        assert_eq!(n(128.0).to_int8(), -128);
        assert_eq!(n(257.9).to_uint8(), 1);
        assert_eq!(Number::NAN.to_int32(), 0);
        assert_eq!(Number::POS_INF.to_uint32(), 0);
    }
}
