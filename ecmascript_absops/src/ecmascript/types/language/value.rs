// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    BigInt, Function, IntoObject, Number, Numeric, Object, Primitive, PropertyKey, String, Symbol,
};
use crate::ecmascript::{
    abstract_operations::testing_and_comparison::is_callable, execution::Agent,
};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(String),

    /// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
    Symbol(Symbol),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    Number(Number),

    /// ### [6.1.6.2 The BigInt Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-bigint-type)
    BigInt(BigInt),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    ///
    /// Function objects are objects too.
    Object(Object),
}

pub trait IntoValue
where
    Self: Sized + Copy,
{
    fn into_value(self) -> Value;
}

impl Value {
    pub fn from_str(agent: &mut Agent, str: &str) -> Value {
        Value::String(String::from_str(agent, str))
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Value {
        Value::String(String::from_string(agent, string))
    }

    pub const fn from_f64(value: f64) -> Value {
        Value::Number(Number::from_f64(value))
    }

    pub const fn nan() -> Self {
        Value::Number(Number::NAN)
    }

    pub const fn pos_zero() -> Self {
        Value::Number(Number::POS_ZERO)
    }

    pub const fn neg_zero() -> Self {
        Value::Number(Number::NEG_ZERO)
    }

    pub const fn pos_inf() -> Self {
        Value::Number(Number::POS_INF)
    }

    pub const fn neg_inf() -> Self {
        Value::Number(Number::NEG_INF)
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_true(self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    pub fn is_false(self) -> bool {
        matches!(self, Value::Boolean(false))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_bigint(self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// True for every object, callable or not.
    pub fn is_object(self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_primitive(self) -> bool {
        !self.is_object()
    }

    pub fn is_property_key(self) -> bool {
        matches!(self, Value::String(_) | Value::Symbol(_))
    }

    pub fn is_property_name(self) -> bool {
        self.is_string()
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    pub fn is_pos_zero(self) -> bool {
        matches!(self, Value::Number(n) if n.is_pos_zero())
    }

    pub fn is_neg_zero(self) -> bool {
        matches!(self, Value::Number(n) if n.is_neg_zero())
    }

    pub fn is_empty_string(self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// ### [13.5.3 The typeof Operator](https://tc39.es/ecma262/#sec-typeof-operator)
    pub fn type_of(self, agent: &Agent) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Object(_) => {
                if is_callable(agent, self) {
                    "function"
                } else {
                    "object"
                }
            }
        }
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from_f64(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Object(value.into_object())
    }
}

impl From<Option<Function>> for Value {
    fn from(value: Option<Function>) -> Self {
        value.map_or(Value::Undefined, Value::from)
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        match value {
            Primitive::Undefined => Value::Undefined,
            Primitive::Null => Value::Null,
            Primitive::Boolean(b) => Value::Boolean(b),
            Primitive::String(s) => Value::String(s),
            Primitive::Symbol(s) => Value::Symbol(s),
            Primitive::Number(n) => Value::Number(n),
            Primitive::BigInt(b) => Value::BigInt(b),
        }
    }
}

impl From<Numeric> for Value {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Number(n) => Value::Number(n),
            Numeric::BigInt(b) => Value::BigInt(b),
        }
    }
}

impl From<PropertyKey> for Value {
    fn from(value: PropertyKey) -> Self {
        match value {
            PropertyKey::String(s) => Value::String(s),
            PropertyKey::Symbol(s) => Value::Symbol(s),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{Options, ProtoIntrinsics},
    };

    #[test]
    fn functions_convert_to_object_values() {
        let agent = Agent::new(Options::default());
        let function = agent.current_realm().intrinsics().throw_type_error();
        assert_eq!(Value::from(function), Value::Object(function.into_object()));
        assert_eq!(Value::from(Some(function)), Value::Object(function.into_object()));
        assert_eq!(Value::from(None::<Function>), Value::Undefined);
    }

    #[test]
    fn classification_is_total_and_exclusive() {
        let mut agent = Agent::new(Options::default());
        let object = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object), None);
        let function = agent.current_realm().intrinsics().throw_type_error();
        let values = [
            Value::Undefined,
            Value::Null,
            Value::Boolean(false),
            Value::from_str(&mut agent, "foo"),
            Value::Symbol(Symbol::new(&mut agent, None)),
            Value::from(42),
            Value::BigInt(BigInt::from_i64(42)),
            Value::Object(object),
            Value::Object(function.into_object()),
        ];
        for value in values {
            let classifications = [
                value.is_undefined(),
                value.is_null(),
                value.is_boolean(),
                value.is_string(),
                value.is_symbol(),
                value.is_number(),
                value.is_bigint(),
                value.is_object(),
            ];
            assert_eq!(classifications.iter().filter(|c| **c).count(), 1);
        }
    }

    #[test]
    fn property_keys_and_names() {
        let mut agent = Agent::new(Options::default());
        let string = Value::from_str(&mut agent, "key");
        let symbol = Value::Symbol(Symbol::new(&mut agent, None));
        assert!(string.is_property_key());
        assert!(string.is_property_name());
        assert!(symbol.is_property_key());
        assert!(!symbol.is_property_name());
        assert!(!Value::from(1).is_property_key());
        assert!(!Value::Undefined.is_property_name());
    }

    #[test]
    fn type_of_distinguishes_functions() {
        let mut agent = Agent::new(Options::default());
        let object = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object), None);
        let function = agent.current_realm().intrinsics().throw_type_error();
        assert_eq!(Value::Null.type_of(&agent), "object");
        assert_eq!(Value::Object(object).type_of(&agent), "object");
        assert_eq!(Value::from(function).type_of(&agent), "function");
        assert_eq!(Value::BigInt(BigInt::from_i64(1)).type_of(&agent), "bigint");
    }
}
