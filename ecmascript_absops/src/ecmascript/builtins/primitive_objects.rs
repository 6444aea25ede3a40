// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wrapper objects for primitive values and the prototypes they inherit
//! from.
//!
//! A String wrapper is a [String exotic object](https://tc39.es/ecma262/#sec-string-exotic-objects):
//! its code units are readable as non-writable, enumerable index properties.

use super::{
    ArgumentsList, Behaviour, Builtin, BuiltinGetter,
    ordinary::{is_compatible_property_descriptor, ordinary_define_own_property},
};
use crate::{
    ecmascript::{
        abstract_operations::type_conversion::{
            canonical_numeric_index_string, to_integer_or_infinity,
        },
        builders::OrdinaryObjectBuilder,
        execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
        types::{
            BigInt, IntoValue, Number, Object, ObjectHeapData, ObjectKind, PropertyDescriptor,
            PropertyEntry, PropertyKey, String, Symbol, Value,
        },
    },
    heap::{CreateHeapData, heap_constants::WellKnownSymbolIndexes},
};

/// The \[\[BooleanData]], \[\[NumberData]], \[\[StringData]],
/// \[\[SymbolData]] or \[\[BigIntData]] internal slot of a wrapper object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveObjectData {
    Boolean(bool),
    String(String),
    Symbol(Symbol),
    Number(Number),
    BigInt(BigInt),
}

impl PrimitiveObjectData {
    fn proto_intrinsics(self) -> ProtoIntrinsics {
        match self {
            PrimitiveObjectData::Boolean(_) => ProtoIntrinsics::Boolean,
            PrimitiveObjectData::String(_) => ProtoIntrinsics::String,
            PrimitiveObjectData::Symbol(_) => ProtoIntrinsics::Symbol,
            PrimitiveObjectData::Number(_) => ProtoIntrinsics::Number,
            PrimitiveObjectData::BigInt(_) => ProtoIntrinsics::BigInt,
        }
    }
}

/// Wraps a primitive in an object whose prototype is the intrinsic
/// prototype of its type.
pub(crate) fn primitive_object_create(agent: &mut Agent, data: PrimitiveObjectData) -> Object {
    let prototype = agent
        .current_realm()
        .intrinsics()
        .get_intrinsic_default_proto(data.proto_intrinsics());
    let object = agent.heap.create(ObjectHeapData::new(
        Some(prototype),
        ObjectKind::PrimitiveObject(data),
    ));
    if let PrimitiveObjectData::String(string) = data {
        // ### [10.4.3.4 StringCreate ( value, prototype )](https://tc39.es/ecma262/#sec-stringcreate)
        // 8. Let length be the length of value.
        // 9. Perform ! DefinePropertyOrThrow(S, "length", PropertyDescriptor {
        //    [[Value]]: 𝔽(length), [[Writable]]: false, [[Enumerable]]: false,
        //    [[Configurable]]: false }).
        let length = string.utf16_len(agent) as u32;
        let key = PropertyKey::from_str(agent, "length");
        agent[object].properties.set(PropertyEntry::new_data(
            key,
            Value::from(length),
            false,
            false,
            false,
        ));
    }
    object
}

/// ### [10.4.3.2 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-string-exotic-objects-defineownproperty-p-desc)
pub(crate) fn string_define_own_property(
    agent: &mut Agent,
    object: Object,
    string: String,
    property_key: PropertyKey,
    property_descriptor: PropertyDescriptor,
) -> bool {
    // 1. Let stringDesc be StringGetOwnProperty(S, P).
    // 2. If stringDesc is not undefined, then
    if let Some(string_descriptor) = string_get_own_property(agent, string, property_key) {
        // a. Let extensible be S.[[Extensible]].
        let extensible = agent[object].extensible;
        // b. Return IsCompatiblePropertyDescriptor(extensible, Desc, stringDesc).
        return is_compatible_property_descriptor(
            agent,
            extensible,
            property_descriptor,
            Some(string_descriptor),
        );
    }
    // 3. Return ! OrdinaryDefineOwnProperty(S, P, Desc).
    ordinary_define_own_property(agent, object, property_key, property_descriptor)
}

/// ### [10.4.3.5 StringGetOwnProperty ( S, P )](https://tc39.es/ecma262/#sec-stringgetownproperty)
pub(crate) fn string_get_own_property(
    agent: &mut Agent,
    string: String,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If P is not a String, return undefined.
    let PropertyKey::String(key) = property_key else {
        return None;
    };
    // 2. Let index be CanonicalNumericIndexString(P).
    // 3. If index is undefined, return undefined.
    let index = canonical_numeric_index_string(agent, key)?;
    // 4. If IsIntegralNumber(index) is false, return undefined.
    if !index.is_integral() {
        return None;
    }
    // 5. If index is -0𝔽 or index < -0𝔽, return undefined.
    let index = index.into_f64();
    if index.is_sign_negative() {
        return None;
    }
    // 6. Let str be S.[[StringData]].
    // 7. Assert: str is a String.
    // 8. Let len be the length of str.
    // 9. If ℝ(index) ≥ len, return undefined.
    let code_unit = *string.code_units(agent).get(index as usize)?;
    // 10. Let resultStr be the substring of str from ℝ(index) to ℝ(index) + 1.
    let result = String::from_code_units(agent, &[code_unit]);
    // 11. Return the PropertyDescriptor { [[Value]]: resultStr, [[Writable]]: false, [[Enumerable]]: true, [[Configurable]]: false }.
    Some(PropertyDescriptor {
        value: Some(result.into_value()),
        writable: Some(false),
        enumerable: Some(true),
        configurable: Some(false),
        ..Default::default()
    })
}

pub(crate) struct PrimitivePrototypes;

struct BooleanPrototypeToString;
impl Builtin for BooleanPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::boolean_to_string);
}

struct BooleanPrototypeValueOf;
impl Builtin for BooleanPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::boolean_value_of);
}

struct NumberPrototypeToString;
impl Builtin for NumberPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::number_to_string);
}

struct NumberPrototypeValueOf;
impl Builtin for NumberPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::number_value_of);
}

struct StringPrototypeToString;
impl Builtin for StringPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::string_value_of);
}

struct StringPrototypeValueOf;
impl Builtin for StringPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::string_value_of);
}

struct BigIntPrototypeToString;
impl Builtin for BigIntPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::big_int_to_string);
}

struct BigIntPrototypeValueOf;
impl Builtin for BigIntPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::big_int_value_of);
}

struct SymbolPrototypeGetDescription;
impl Builtin for SymbolPrototypeGetDescription {
    const NAME: &'static str = "get description";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::symbol_get_description);
}
impl BuiltinGetter for SymbolPrototypeGetDescription {}

struct SymbolPrototypeToString;
impl Builtin for SymbolPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::symbol_to_string);
}

struct SymbolPrototypeValueOf;
impl Builtin for SymbolPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::symbol_value_of);
}

struct SymbolPrototypeToPrimitive;
impl Builtin for SymbolPrototypeToPrimitive {
    const NAME: &'static str = "[Symbol.toPrimitive]";

    const KEY: Option<PropertyKey> = Some(WellKnownSymbolIndexes::ToPrimitive.to_property_key());

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(PrimitivePrototypes::symbol_value_of);

    const WRITABLE: bool = false;
}

impl PrimitivePrototypes {
    /// ### [20.3.3.2 Boolean.prototype.toString ( )](https://tc39.es/ecma262/#sec-boolean.prototype.tostring)
    fn boolean_to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let b be ? ThisBooleanValue(this value).
        let b = this_boolean_value(agent, this_value)?;
        // 2. If b is true, return "true"; else return "false".
        Ok(Value::from_str(agent, if b { "true" } else { "false" }))
    }

    /// ### [20.3.3.3 Boolean.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-boolean.prototype.valueof)
    fn boolean_value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisBooleanValue(this value).
        this_boolean_value(agent, this_value).map(Value::Boolean)
    }

    /// ### [21.1.3.6 Number.prototype.toString ( \[ radix \] )](https://tc39.es/ecma262/#sec-number.prototype.tostring)
    fn number_to_string(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let x be ? ThisNumberValue(this value).
        let x = this_number_value(agent, this_value)?;
        // 2. If radix is undefined, let radixMV be 10.
        // 3. Else, let radixMV be ? ToIntegerOrInfinity(radix).
        let radix = arguments.get(0);
        let radix = if radix.is_undefined() {
            10.0
        } else {
            to_integer_or_infinity(agent, radix)?
        };
        // 4. If radixMV is not in the inclusive interval from 2 to 36, throw a RangeError exception.
        if !(2.0..=36.0).contains(&radix) {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::RangeError,
                "radix must be an integer at least 2 and no greater than 36",
            ));
        }
        // 5. Return Number::toString(x, radixMV).
        let result = x.to_string_radix(radix as u32);
        Ok(Value::from_string(agent, result))
    }

    /// ### [21.1.3.7 Number.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-number.prototype.valueof)
    fn number_value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisNumberValue(this value).
        this_number_value(agent, this_value).map(Value::Number)
    }

    /// ### [22.1.3.35 String.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-string.prototype.valueof)
    ///
    /// String.prototype.toString has the same steps.
    fn string_value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(Value::String)
    }

    /// ### [21.2.3.3 BigInt.prototype.toString ( \[ radix \] )](https://tc39.es/ecma262/#sec-bigint.prototype.tostring)
    fn big_int_to_string(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let x be ? ThisBigIntValue(this value).
        let x = this_big_int_value(agent, this_value)?;
        // 2. If radix is undefined, let radixMV be 10.
        // 3. Else, let radixMV be ? ToIntegerOrInfinity(radix).
        let radix = arguments.get(0);
        let radix = if radix.is_undefined() {
            10.0
        } else {
            to_integer_or_infinity(agent, radix)?
        };
        // 4. If radixMV is not in the inclusive interval from 2 to 36, throw a RangeError exception.
        if !(2.0..=36.0).contains(&radix) {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::RangeError,
                "radix must be an integer at least 2 and no greater than 36",
            ));
        }
        // 5. Return BigInt::toString(x, radixMV).
        let result = x.to_string_radix(agent, radix as u32);
        Ok(Value::from_string(agent, result))
    }

    /// ### [21.2.3.4 BigInt.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-bigint.prototype.valueof)
    fn big_int_value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisBigIntValue(this value).
        this_big_int_value(agent, this_value).map(Value::BigInt)
    }

    /// ### [20.4.3.2 get Symbol.prototype.description](https://tc39.es/ecma262/#sec-symbol.prototype.description)
    fn symbol_get_description(
        agent: &mut Agent,
        this_value: Value,
        _: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let s be the this value.
        // 2. Let sym be ? ThisSymbolValue(s).
        let sym = this_symbol_value(agent, this_value)?;
        // 3. Return sym.[[Description]].
        Ok(sym
            .descriptor(agent)
            .map_or(Value::Undefined, |description| description.into_value()))
    }

    /// ### [20.4.3.3 Symbol.prototype.toString ( )](https://tc39.es/ecma262/#sec-symbol.prototype.tostring)
    fn symbol_to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let sym be ? ThisSymbolValue(this value).
        let sym = this_symbol_value(agent, this_value)?;
        // 2. Return SymbolDescriptiveString(sym).
        Ok(sym.descriptive_string(agent).into_value())
    }

    /// ### [20.4.3.4 Symbol.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-symbol.prototype.valueof)
    ///
    /// Also the behaviour of Symbol.prototype \[ %Symbol.toPrimitive% \] ( hint ),
    /// which ignores its argument.
    fn symbol_value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisSymbolValue(this value).
        this_symbol_value(agent, this_value).map(Value::Symbol)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let boolean_prototype = intrinsics.boolean_prototype();
        let number_prototype = intrinsics.number_prototype();
        let string_prototype = intrinsics.string_prototype();
        let big_int_prototype = intrinsics.big_int_prototype();
        let symbol_prototype = intrinsics.symbol_prototype();

        // ### [20.3.3 Properties of the Boolean Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-boolean-prototype-object)
        OrdinaryObjectBuilder::new_intrinsic_object(agent, boolean_prototype)
            .with_property_capacity(2)
            .with_prototype(object_prototype)
            .with_kind(ObjectKind::PrimitiveObject(PrimitiveObjectData::Boolean(
                false,
            )))
            .with_builtin_function_property::<BooleanPrototypeToString>()
            .with_builtin_function_property::<BooleanPrototypeValueOf>()
            .build();

        // ### [21.1.3 Properties of the Number Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-number-prototype-object)
        OrdinaryObjectBuilder::new_intrinsic_object(agent, number_prototype)
            .with_property_capacity(2)
            .with_prototype(object_prototype)
            .with_kind(ObjectKind::PrimitiveObject(PrimitiveObjectData::Number(
                Number::POS_ZERO,
            )))
            .with_builtin_function_property::<NumberPrototypeToString>()
            .with_builtin_function_property::<NumberPrototypeValueOf>()
            .build();

        // ### [22.1.3 Properties of the String Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-string-prototype-object)
        let length_key = PropertyKey::from_str(agent, "length");
        OrdinaryObjectBuilder::new_intrinsic_object(agent, string_prototype)
            .with_property_capacity(3)
            .with_prototype(object_prototype)
            .with_kind(ObjectKind::PrimitiveObject(PrimitiveObjectData::String(
                String::EMPTY_STRING,
            )))
            .with_frozen_property(length_key, Value::from(0))
            .with_builtin_function_property::<StringPrototypeToString>()
            .with_builtin_function_property::<StringPrototypeValueOf>()
            .build();

        // ### [21.2.3 Properties of the BigInt Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-bigint-prototype-object)
        let big_int_tag = Value::from_str(agent, "BigInt");
        OrdinaryObjectBuilder::new_intrinsic_object(agent, big_int_prototype)
            .with_property_capacity(3)
            .with_prototype(object_prototype)
            .with_builtin_function_property::<BigIntPrototypeToString>()
            .with_builtin_function_property::<BigIntPrototypeValueOf>()
            .with_readonly_property(WellKnownSymbolIndexes::ToStringTag.into(), big_int_tag)
            .build();

        // ### [20.4.3 Properties of the Symbol Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-symbol-prototype-object)
        let symbol_tag = Value::from_str(agent, "Symbol");
        OrdinaryObjectBuilder::new_intrinsic_object(agent, symbol_prototype)
            .with_property_capacity(5)
            .with_prototype(object_prototype)
            .with_builtin_function_getter_property::<SymbolPrototypeGetDescription>()
            .with_builtin_function_property::<SymbolPrototypeToString>()
            .with_builtin_function_property::<SymbolPrototypeValueOf>()
            .with_builtin_function_property::<SymbolPrototypeToPrimitive>()
            .with_readonly_property(WellKnownSymbolIndexes::ToStringTag.into(), symbol_tag)
            .build();
    }
}

fn primitive_object_data(agent: &Agent, value: Value) -> Option<PrimitiveObjectData> {
    match value {
        Value::Object(object) => match agent[object].kind {
            ObjectKind::PrimitiveObject(data) => Some(data),
            _ => None,
        },
        _ => None,
    }
}

/// ### [20.3.3.3.1 ThisBooleanValue ( value )](https://tc39.es/ecma262/#sec-thisbooleanvalue)
fn this_boolean_value(agent: &mut Agent, value: Value) -> JsResult<bool> {
    match value {
        // 1. If value is a Boolean, return value.
        Value::Boolean(value) => Ok(value),
        // 2. If value is an Object and value has a [[BooleanData]] internal slot, then
        //    a. Let b be value.[[BooleanData]].
        //    b. Assert: b is a Boolean.
        //    c. Return b.
        _ => match primitive_object_data(agent, value) {
            Some(PrimitiveObjectData::Boolean(b)) => Ok(b),
            // 3. Throw a TypeError exception.
            _ => Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Not a Boolean",
            )),
        },
    }
}

/// ### [21.1.3.7.1 ThisNumberValue ( value )](https://tc39.es/ecma262/#sec-thisnumbervalue)
fn this_number_value(agent: &mut Agent, value: Value) -> JsResult<Number> {
    match value {
        Value::Number(value) => Ok(value),
        _ => match primitive_object_data(agent, value) {
            Some(PrimitiveObjectData::Number(n)) => Ok(n),
            _ => Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Not a Number",
            )),
        },
    }
}

/// ### [22.1.3.35.1 ThisStringValue ( value )](https://tc39.es/ecma262/#sec-thisstringvalue)
fn this_string_value(agent: &mut Agent, value: Value) -> JsResult<String> {
    match value {
        Value::String(value) => Ok(value),
        _ => match primitive_object_data(agent, value) {
            Some(PrimitiveObjectData::String(s)) => Ok(s),
            _ => Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Not a String",
            )),
        },
    }
}

/// ### [21.2.3.4.1 ThisBigIntValue ( value )](https://tc39.es/ecma262/#sec-thisbigintvalue)
fn this_big_int_value(agent: &mut Agent, value: Value) -> JsResult<BigInt> {
    match value {
        Value::BigInt(value) => Ok(value),
        _ => match primitive_object_data(agent, value) {
            Some(PrimitiveObjectData::BigInt(b)) => Ok(b),
            _ => Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Not a BigInt",
            )),
        },
    }
}

/// ### [20.4.3.4.1 ThisSymbolValue ( value )](https://tc39.es/ecma262/#sec-thissymbolvalue)
fn this_symbol_value(agent: &mut Agent, value: Value) -> JsResult<Symbol> {
    match value {
        Value::Symbol(value) => Ok(value),
        _ => match primitive_object_data(agent, value) {
            Some(PrimitiveObjectData::Symbol(s)) => Ok(s),
            _ => Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "this is not a symbol",
            )),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::{
            operations_on_objects::{define_property_or_throw, get, has_own_property, invoke},
            type_conversion::to_object,
        },
        execution::Options,
    };

    #[test]
    fn string_wrappers_expose_code_units() {
        let mut agent = Agent::new(Options::default());
        let string = Value::from_str(&mut agent, "ab");
        let wrapper = to_object(&mut agent, string).unwrap();
        let zero = PropertyKey::from_str(&mut agent, "0");
        let two = PropertyKey::from_str(&mut agent, "2");
        let minus_zero = PropertyKey::from_str(&mut agent, "-0");
        let length = PropertyKey::from_str(&mut agent, "length");
        let a = Value::from_str(&mut agent, "a");
        assert_eq!(get(&mut agent, wrapper, zero), Ok(a));
        assert_eq!(get(&mut agent, wrapper, length), Ok(Value::from(2)));
        assert_eq!(get(&mut agent, wrapper, two), Ok(Value::Undefined));
        assert_eq!(has_own_property(&mut agent, wrapper, minus_zero), Ok(false));
        let descriptor = wrapper
            .internal_get_own_property(&mut agent, zero)
            .unwrap()
            .unwrap();
        assert_eq!(descriptor.writable, Some(false));
        assert_eq!(descriptor.enumerable, Some(true));
        assert_eq!(descriptor.configurable, Some(false));
    }

    #[test]
    fn string_indices_cannot_be_redefined() {
        let mut agent = Agent::new(Options::default());
        let string = Value::from_str(&mut agent, "ab");
        let wrapper = to_object(&mut agent, string).unwrap();
        let zero = PropertyKey::from_str(&mut agent, "0");
        let a = Value::from_str(&mut agent, "a");
        let b = Value::from_str(&mut agent, "b");
        let same = PropertyDescriptor {
            value: Some(a),
            ..Default::default()
        };
        assert_eq!(
            wrapper.internal_define_own_property(&mut agent, zero, same),
            Ok(true)
        );
        let different = PropertyDescriptor {
            value: Some(b),
            ..Default::default()
        };
        assert_eq!(
            wrapper.internal_define_own_property(&mut agent, zero, different),
            Ok(false)
        );
        let three = PropertyKey::from_str(&mut agent, "3");
        define_property_or_throw(
            &mut agent,
            wrapper,
            three,
            PropertyDescriptor::new_data_descriptor(b),
        )
        .unwrap();
        assert_eq!(get(&mut agent, wrapper, three), Ok(b));
    }

    #[test]
    fn number_to_string_with_radix() {
        let mut agent = Agent::new(Options::default());
        let to_string = PropertyKey::from_str(&mut agent, "toString");
        let arguments = [Value::from(16)];
        let result = invoke(
            &mut agent,
            Value::from(255),
            to_string,
            Some(ArgumentsList::new(&arguments)),
        )
        .unwrap();
        let expected = Value::from_str(&mut agent, "ff");
        assert_eq!(result, expected);

        let arguments = [Value::from(37)];
        let error = invoke(
            &mut agent,
            Value::from(255),
            to_string,
            Some(ArgumentsList::new(&arguments)),
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
    }

    #[test]
    fn big_int_to_string_with_radix() {
        let mut agent = Agent::new(Options::default());
        let to_string = PropertyKey::from_str(&mut agent, "toString");
        let arguments = [Value::from(2)];
        let result = invoke(
            &mut agent,
            Value::BigInt(BigInt::from_i64(-5)),
            to_string,
            Some(ArgumentsList::new(&arguments)),
        )
        .unwrap();
        let expected = Value::from_str(&mut agent, "-101");
        assert_eq!(result, expected);
    }

    #[test]
    fn value_of_unwraps_wrappers() {
        let mut agent = Agent::new(Options::default());
        let value_of = PropertyKey::from_str(&mut agent, "valueOf");
        let wrapper = to_object(&mut agent, Value::Boolean(true)).unwrap();
        assert_eq!(
            invoke(&mut agent, wrapper.into_value(), value_of, None),
            Ok(Value::Boolean(true))
        );
        let boolean_prototype = agent.current_realm().intrinsics().boolean_prototype();
        assert_eq!(
            invoke(&mut agent, boolean_prototype.into_value(), value_of, None),
            Ok(Value::Boolean(false))
        );
    }

    #[test]
    fn value_of_rejects_other_receivers() {
        let mut agent = Agent::new(Options::default());
        let value_of = PropertyKey::from_str(&mut agent, "valueOf");
        let boolean_prototype = agent.current_realm().intrinsics().boolean_prototype();
        let boolean_value_of = get(&mut agent, boolean_prototype, value_of).unwrap();
        let boolean_value_of =
            crate::ecmascript::types::Function::from_value(&agent, boolean_value_of).unwrap();
        let error = boolean_value_of
            .internal_call(&mut agent, Value::from(1), ArgumentsList::default())
            .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn symbols_describe_themselves() {
        let mut agent = Agent::new(Options::default());
        let description = String::from_str(&mut agent, "tag");
        let symbol = Value::Symbol(Symbol::new(&mut agent, Some(description)));
        let to_string = PropertyKey::from_str(&mut agent, "toString");
        let description_key = PropertyKey::from_str(&mut agent, "description");
        let result = invoke(&mut agent, symbol, to_string, None).unwrap();
        let expected = Value::from_str(&mut agent, "Symbol(tag)");
        assert_eq!(result, expected);
        let wrapper = to_object(&mut agent, symbol).unwrap();
        assert_eq!(
            get(&mut agent, wrapper, description_key),
            Ok(description.into_value())
        );
        assert_eq!(
            invoke(
                &mut agent,
                wrapper.into_value(),
                WellKnownSymbolIndexes::ToPrimitive.into(),
                None
            ),
            Ok(symbol)
        );
    }
}
