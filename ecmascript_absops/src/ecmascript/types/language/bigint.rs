// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
    cmp::Ordering,
    ops::{Index, IndexMut},
};

use num_bigint::Sign;
use num_traits::{FromPrimitive, ToPrimitive};

use super::{IntoValue, Primitive, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, Heap, indexes::BigIntIndex},
};

#[derive(Debug, Clone)]
pub struct BigIntHeapData {
    pub(crate) data: num_bigint::BigInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct HeapBigInt(pub(crate) BigIntIndex);

/// A BigInt whose value fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SmallBigInt(i64);

impl SmallBigInt {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

/// ### [6.1.6.2 The BigInt Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-bigint-type)
///
/// Values that fit in an `i64` are always stored inline; the heap only holds
/// values outside that range. Two `SmallBigInt`s compare equal exactly when
/// their mathematical values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigInt {
    BigInt(HeapBigInt),
    SmallBigInt(SmallBigInt),
}

impl IntoValue for BigInt {
    fn into_value(self) -> Value {
        Value::BigInt(self)
    }
}

impl From<BigInt> for Primitive {
    fn from(value: BigInt) -> Self {
        Primitive::BigInt(value)
    }
}

impl TryFrom<Value> for BigInt {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::BigInt(x) = value {
            Ok(x)
        } else {
            Err(())
        }
    }
}

impl BigInt {
    pub const fn zero() -> Self {
        Self::SmallBigInt(SmallBigInt::zero())
    }

    pub const fn from_i64(value: i64) -> Self {
        Self::SmallBigInt(SmallBigInt(value))
    }

    pub fn from_u64(agent: &mut Agent, value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::from_i64(value),
            Err(_) => agent.heap.create(BigIntHeapData {
                data: num_bigint::BigInt::from(value),
            }),
        }
    }

    pub fn from_num_bigint(agent: &mut Agent, value: num_bigint::BigInt) -> Self {
        match value.to_i64() {
            Some(value) => Self::from_i64(value),
            None => agent.heap.create(BigIntHeapData { data: value }),
        }
    }

    pub fn to_num_bigint(self, agent: &Agent) -> num_bigint::BigInt {
        match self {
            BigInt::BigInt(x) => agent[x].data.clone(),
            BigInt::SmallBigInt(x) => num_bigint::BigInt::from(x.into_i64()),
        }
    }

    /// Heap BigInts are never zero.
    pub fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// ### [6.1.6.2.1 BigInt::unaryMinus ( x )](https://tc39.es/ecma262/#sec-numeric-types-bigint-unaryMinus)
    pub fn unary_minus(agent: &mut Agent, x: Self) -> Self {
        // 1. If x = 0ℤ, return 0ℤ.
        // 2. Return -x.
        match x {
            BigInt::SmallBigInt(x) => match x.into_i64().checked_neg() {
                Some(value) => Self::from_i64(value),
                None => Self::from_num_bigint(agent, -num_bigint::BigInt::from(x.into_i64())),
            },
            BigInt::BigInt(x) => {
                let negated = -agent[x].data.clone();
                Self::from_num_bigint(agent, negated)
            }
        }
    }

    /// ### [6.1.6.2.12 BigInt::lessThan ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-lessThan)
    pub fn less_than(agent: &Agent, x: Self, y: Self) -> bool {
        // 1. If ℝ(x) < ℝ(y), return true; otherwise return false.
        match (x, y) {
            (BigInt::SmallBigInt(x), BigInt::SmallBigInt(y)) => x.into_i64() < y.into_i64(),
            // A heap BigInt is outside the i64 range, so its sign decides.
            (BigInt::BigInt(x), BigInt::SmallBigInt(_)) => agent[x].data.sign() == Sign::Minus,
            (BigInt::SmallBigInt(_), BigInt::BigInt(y)) => agent[y].data.sign() == Sign::Plus,
            (BigInt::BigInt(x), BigInt::BigInt(y)) => agent[x].data < agent[y].data,
        }
    }

    /// ### [6.1.6.2.13 BigInt::equal ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-equal)
    pub fn equal(agent: &Agent, x: Self, y: Self) -> bool {
        // 1. If ℝ(x) = ℝ(y), return true; otherwise return false.
        match (x, y) {
            (BigInt::SmallBigInt(x), BigInt::SmallBigInt(y)) => x == y,
            (BigInt::BigInt(x), BigInt::BigInt(y)) => x == y || agent[x].data == agent[y].data,
            _ => false,
        }
    }

    /// Compares the mathematical values of a BigInt and a Number without
    /// any loss of precision. Returns `None` if `y` is NaN.
    pub fn compare_to_f64(agent: &Agent, x: Self, y: f64) -> Option<Ordering> {
        if y.is_nan() {
            return None;
        }
        if y == f64::INFINITY {
            return Some(Ordering::Less);
        }
        if y == f64::NEG_INFINITY {
            return Some(Ordering::Greater);
        }
        let truncated = y.trunc();
        // A finite integral f64 converts to a BigInt exactly.
        let y_int = num_bigint::BigInt::from_f64(truncated)?;
        let ordering = match x {
            BigInt::SmallBigInt(x) => num_bigint::BigInt::from(x.into_i64()).cmp(&y_int),
            BigInt::BigInt(x) => agent[x].data.cmp(&y_int),
        };
        Some(match ordering {
            // x equals the integer part of y, so the fraction decides.
            Ordering::Equal if y > truncated => Ordering::Less,
            Ordering::Equal if y < truncated => Ordering::Greater,
            ordering => ordering,
        })
    }

    /// ### [6.1.6.2.21 BigInt::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-bigint-tostring)
    pub fn to_string_radix(self, agent: &Agent, radix: u32) -> std::string::String {
        debug_assert!((2..=36).contains(&radix));
        match self {
            BigInt::SmallBigInt(x) if radix == 10 => x.into_i64().to_string(),
            BigInt::SmallBigInt(x) => num_bigint::BigInt::from(x.into_i64()).to_str_radix(radix),
            BigInt::BigInt(x) => agent[x].data.to_str_radix(radix),
        }
    }

    /// BigInt::asIntN ( 64, x )
    pub(crate) fn as_int64(self, agent: &Agent) -> i64 {
        match self {
            BigInt::SmallBigInt(x) => x.into_i64(),
            BigInt::BigInt(x) => int64_modulo(&agent[x].data) as i64,
        }
    }

    /// BigInt::asUintN ( 64, x )
    pub(crate) fn as_uint64(self, agent: &Agent) -> u64 {
        match self {
            BigInt::SmallBigInt(x) => x.into_i64() as u64,
            BigInt::BigInt(x) => int64_modulo(&agent[x].data),
        }
    }
}

/// ℝ(n) modulo 2^64.
fn int64_modulo(n: &num_bigint::BigInt) -> u64 {
    let modulo = num_bigint::BigInt::from(1u8) << 64;
    let mut remainder: num_bigint::BigInt = n % &modulo;
    if remainder.sign() == Sign::Minus {
        remainder += &modulo;
    }
    remainder.to_u64().unwrap_or_default()
}

impl CreateHeapData<BigIntHeapData, BigInt> for Heap {
    fn create(&mut self, data: BigIntHeapData) -> BigInt {
        debug_assert!(data.data.to_i64().is_none());
        self.bigints.push(data);
        BigInt::BigInt(HeapBigInt(BigIntIndex::last(&self.bigints)))
    }
}

impl Index<HeapBigInt> for Heap {
    type Output = BigIntHeapData;

    fn index(&self, index: HeapBigInt) -> &Self::Output {
        &self.bigints[index.0.into_index()]
    }
}

impl IndexMut<HeapBigInt> for Heap {
    fn index_mut(&mut self, index: HeapBigInt) -> &mut Self::Output {
        &mut self.bigints[index.0.into_index()]
    }
}

impl Index<HeapBigInt> for Agent {
    type Output = BigIntHeapData;

    fn index(&self, index: HeapBigInt) -> &Self::Output {
        &self.heap[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::Options;

    #[test]
    fn small_values_stay_inline() {
        let mut agent = Agent::new(Options::default());
        let value = BigInt::from_num_bigint(&mut agent, num_bigint::BigInt::from(-42));
        assert_eq!(value, BigInt::from_i64(-42));
        assert!(agent.heap.bigints.is_empty());
    }

    #[test]
    fn heap_values_compare_by_value() {
        let mut agent = Agent::new(Options::default());
        let big = num_bigint::BigInt::from(u64::MAX) * num_bigint::BigInt::from(3);
        let a = BigInt::from_num_bigint(&mut agent, big.clone());
        let b = BigInt::from_num_bigint(&mut agent, big);
        assert!(BigInt::equal(&agent, a, b));
        assert!(!BigInt::less_than(&agent, a, b));
        let negative = BigInt::unary_minus(&mut agent, a);
        assert!(BigInt::less_than(&agent, negative, BigInt::from_i64(i64::MIN)));
        assert!(BigInt::less_than(&agent, BigInt::from_i64(i64::MAX), a));
    }

    #[test]
    fn unary_minus_of_i64_min_moves_to_heap() {
        let mut agent = Agent::new(Options::default());
        let negated = BigInt::unary_minus(&mut agent, BigInt::from_i64(i64::MIN));
        assert!(matches!(negated, BigInt::BigInt(_)));
        assert_eq!(negated.to_string_radix(&agent, 10), "9223372036854775808");
    }

    #[test]
    fn compare_to_f64_is_exact() {
        let mut agent = Agent::new(Options::default());
        let x = BigInt::from_i64(9007199254740993);
        // 9007199254740993 is not representable as an f64.
        assert_eq!(BigInt::compare_to_f64(&agent, x, 9007199254740992.0), Some(Ordering::Greater));
        assert_eq!(BigInt::compare_to_f64(&agent, BigInt::from_i64(1), 1.5), Some(Ordering::Less));
        assert_eq!(BigInt::compare_to_f64(&agent, BigInt::from_i64(-1), -1.5), Some(Ordering::Greater));
        assert_eq!(BigInt::compare_to_f64(&agent, BigInt::zero(), -0.0), Some(Ordering::Equal));
        assert_eq!(BigInt::compare_to_f64(&agent, x, f64::NAN), None);
        let huge = BigInt::from_num_bigint(&mut agent, num_bigint::BigInt::from(1u8) << 1100);
        assert_eq!(BigInt::compare_to_f64(&agent, huge, f64::MAX), Some(Ordering::Greater));
        assert_eq!(BigInt::compare_to_f64(&agent, huge, f64::INFINITY), Some(Ordering::Less));
    }

    #[test]
    fn as_int64_wraps() {
        let mut agent = Agent::new(Options::default());
        let two_64 = BigInt::from_num_bigint(&mut agent, num_bigint::BigInt::from(1u8) << 64);
        assert_eq!(two_64.as_int64(&agent), 0);
        let value = BigInt::from_num_bigint(&mut agent, (num_bigint::BigInt::from(1u8) << 64) + 5);
        assert_eq!(value.as_uint64(&agent), 5);
        let below: num_bigint::BigInt =
            -(num_bigint::BigInt::from(1u8) << 64u32) - num_bigint::BigInt::from(1);
        let value = BigInt::from_num_bigint(&mut agent, below);
        assert_eq!(value.as_int64(&agent), -1);
        assert_eq!(value.as_uint64(&agent), u64::MAX);
        assert_eq!(BigInt::from_i64(-1).as_uint64(&agent), u64::MAX);
    }
}
