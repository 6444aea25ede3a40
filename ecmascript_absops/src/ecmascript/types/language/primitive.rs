// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{BigInt, IntoValue, Number, String, Symbol, Value};

/// A [`Value`] that is not an Object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Symbol(Symbol),
    Number(Number),
    BigInt(BigInt),
}

impl IntoValue for Primitive {
    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl Primitive {
    pub fn is_boolean(self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    pub fn is_bigint(self) -> bool {
        matches!(self, Self::BigInt(_))
    }

    pub fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl TryFrom<Value> for Primitive {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Undefined => Ok(Primitive::Undefined),
            Value::Null => Ok(Primitive::Null),
            Value::Boolean(data) => Ok(Primitive::Boolean(data)),
            Value::String(data) => Ok(Primitive::String(data)),
            Value::Symbol(data) => Ok(Primitive::Symbol(data)),
            Value::Number(data) => Ok(Primitive::Number(data)),
            Value::BigInt(data) => Ok(Primitive::BigInt(data)),
            Value::Object(_) => Err(()),
        }
    }
}
