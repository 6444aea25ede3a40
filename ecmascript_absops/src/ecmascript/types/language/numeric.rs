// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{BigInt, IntoValue, Number, Value};

/// A Number or a BigInt, as produced by ToNumeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Number(Number),
    BigInt(BigInt),
}

impl Numeric {
    pub fn is_bigint(self) -> bool {
        matches!(self, Self::BigInt(_))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl IntoValue for Numeric {
    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl From<Number> for Numeric {
    fn from(value: Number) -> Self {
        Numeric::Number(value)
    }
}

impl From<BigInt> for Numeric {
    fn from(value: BigInt) -> Self {
        Numeric::BigInt(value)
    }
}
