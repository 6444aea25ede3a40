// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations. The conversion abstract
//! operations are polymorphic; they can accept a value of any ECMAScript
//! language type. But no other specification types are used with these
//! operations.
//!
//! The BigInt type has no implicit conversions in the ECMAScript language;
//! programmers must call BigInt explicitly to convert values from other types.

use num_traits::ToPrimitive;

use super::operations_on_objects::{call_function, get, get_method, get_v};
use crate::{
    ecmascript::{
        builtins::{ArgumentsList, PrimitiveObjectData, primitive_object_create},
        execution::{Agent, ExceptionType, JsResult},
        types::{
            BigInt, Function, IntoValue, Number, Numeric, Object, Primitive, PropertyKey, String,
            Value,
        },
    },
    heap::heap_constants::WellKnownSymbolIndexes,
};

/// 2^53 - 1
const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

impl PreferredType {
    fn hint(preferred_type: Option<Self>) -> &'static str {
        match preferred_type {
            None => "default",
            Some(PreferredType::String) => "string",
            Some(PreferredType::Number) => "number",
        }
    }
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type.
///
/// > NOTE: When ToPrimitive is called without a hint, then it generally
/// > behaves as if the hint were NUMBER. However, objects may over-ride this
/// > behaviour by defining a @@toPrimitive method. Of the objects defined in
/// > this specification only Dates and Symbol objects over-ride the default
/// > ToPrimitive behaviour.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Primitive> {
    // 1. If input is an Object, then
    let Value::Object(object) = input else {
        // 2. Return input.
        return Ok(to_primitive_unchecked(input));
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_method(agent, input, WellKnownSymbolIndexes::ToPrimitive.into())?;
    // b. If exoticToPrim is not undefined, then
    if let Some(exotic_to_prim) = exotic_to_prim {
        // i. If preferredType is not present, then
        //     1. Let hint be "default".
        // ii. Else if preferredType is STRING, then
        //     1. Let hint be "string".
        // iii. Else,
        //     1. Assert: preferredType is NUMBER.
        //     2. Let hint be "number".
        let hint = PreferredType::hint(preferred_type);
        log::trace!("ToPrimitive: calling @@toPrimitive with hint {hint}");
        let hint = Value::from_str(agent, hint);
        // iv. Let result be ? Call(exoticToPrim, input, « hint »).
        let result = call_function(
            agent,
            exotic_to_prim,
            input,
            Some(ArgumentsList::new(&[hint])),
        )?;
        // v. If result is not an Object, return result.
        // vi. Throw a TypeError exception.
        Primitive::try_from(result).map_err(|_| {
            agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Cannot convert object to primitive value",
            )
        })
    } else {
        // c. If preferredType is not present, let preferredType be NUMBER.
        // d. Return ? OrdinaryToPrimitive(input, preferredType).
        ordinary_to_primitive(
            agent,
            object,
            preferred_type.unwrap_or(PreferredType::Number),
        )
    }
}

fn to_primitive_unchecked(value: Value) -> Primitive {
    match value {
        Value::Undefined => Primitive::Undefined,
        Value::Null => Primitive::Null,
        Value::Boolean(bool) => Primitive::Boolean(bool),
        Value::String(string) => Primitive::String(string),
        Value::Symbol(symbol) => Primitive::Symbol(symbol),
        Value::Number(number) => Primitive::Number(number),
        Value::BigInt(bigint) => Primitive::BigInt(bigint),
        Value::Object(_) => unreachable!("Objects are not primitives"),
    }
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Primitive> {
    let to_string_key = PropertyKey::from_str(agent, "toString");
    let value_of_key = PropertyKey::from_str(agent, "valueOf");
    let method_names = match hint {
        // 1. If hint is STRING, then
        //     a. Let methodNames be « "toString", "valueOf" ».
        PreferredType::String => [to_string_key, value_of_key],
        // 2. Else,
        //     a. Let methodNames be « "valueOf", "toString" ».
        PreferredType::Number => [value_of_key, to_string_key],
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if let Some(method) = Function::from_value(agent, method) {
            // i. Let result be ? Call(method, O).
            let result = call_function(agent, method, o.into_value(), None)?;
            // ii. If result is not an Object, return result.
            if let Ok(result) = Primitive::try_from(result) {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception_with_static_message(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
///
/// The abstract operation ToBoolean takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It converts argument to a value of
/// type Boolean.
pub fn to_boolean(_agent: &Agent, argument: Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(bool) => bool,
        // 2. If argument is one of undefined, null, +0𝔽, -0𝔽, NaN, 0ℤ, or the
        //    empty String, return false.
        Value::Undefined | Value::Null => false,
        Value::Number(number) => number.is_nonzero() && !number.is_nan(),
        Value::BigInt(bigint) => !bigint.is_zero(),
        Value::String(string) => !string.is_empty(),
        // 3. NOTE: This step is replaced in section B.3.6.1.
        // 4. Return true.
        Value::Symbol(_) | Value::Object(_) => true,
    }
}

/// ### [7.1.3 ToNumeric ( value )](https://tc39.es/ecma262/#sec-tonumeric)
///
/// The abstract operation ToNumeric takes argument value (an ECMAScript
/// language value) and returns either a normal completion containing either a
/// Number or a BigInt, or a throw completion. It returns value converted to a
/// Number or a BigInt.
pub fn to_numeric(agent: &mut Agent, value: Value) -> JsResult<Numeric> {
    // 1. Let primValue be ? ToPrimitive(value, NUMBER).
    let prim_value = to_primitive(agent, value, Some(PreferredType::Number))?;
    // 2. If primValue is a BigInt, return primValue.
    if let Primitive::BigInt(bigint) = prim_value {
        return Ok(Numeric::BigInt(bigint));
    }
    // 3. Return ? ToNumber(primValue).
    to_number(agent, prim_value.into_value()).map(Numeric::Number)
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
///
/// The abstract operation ToNumber takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a Number
/// or a throw completion. It converts argument to a value of type Number.
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<Number> {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Number(number) => Ok(number),
        // 2. If argument is either a Symbol or a BigInt, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a number",
        )),
        Value::BigInt(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a BigInt value to a number",
        )),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Ok(Number::NAN),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Ok(Number::POS_ZERO),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Ok(Number::ONE),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(string) => Ok(string_to_number(agent, string)),
        // 7. Assert: argument is an Object.
        Value::Object(_) => {
            // 8. Let primValue be ? ToPrimitive(argument, NUMBER).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::Number))?;
            // 9. Assert: primValue is not an Object.
            // 10. Return ? ToNumber(primValue).
            to_number(agent, prim_value.into_value())
        }
    }
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// The abstract operation StringToNumber takes argument str (a String) and
/// returns a Number.
pub fn string_to_number(agent: &Agent, str: String) -> Number {
    // A lone surrogate can never be part of a StringNumericLiteral.
    let Some(str) = str.as_str(agent) else {
        return Number::NAN;
    };
    // 1. Let literal be ParseText(str, StringNumericLiteral).
    // 2. If literal is a List of errors, return NaN.
    // 3. Return the StringNumericValue of literal.
    Number::from_f64(parse_string_numeric_literal(str).unwrap_or(f64::NAN))
}

/// ### [7.1.4.1 StringNumericLiteral](https://tc39.es/ecma262/#sec-tonumber-applied-to-the-string-type)
fn parse_string_numeric_literal(text: &str) -> Option<f64> {
    let text = text.trim_matches(is_str_white_space_char);
    // StringNumericLiteral ::: StrWhiteSpace_opt
    if text.is_empty() {
        return Some(0.0);
    }
    // NonDecimalIntegerLiteral
    if let Some((radix, digits)) = split_non_decimal_prefix(text) {
        return parse_non_decimal_digits(digits, radix)?.to_f64();
    }
    // StrDecimalLiteral ::: + StrUnsignedDecimalLiteral | - StrUnsignedDecimalLiteral
    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let value = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_str_unsigned_decimal_literal(unsigned) {
        fast_float::parse::<f64, _>(unsigned).ok()?
    } else {
        return None;
    };
    Some(if negative { -value } else { value })
}

/// StrWhiteSpaceChar ::: WhiteSpace | LineTerminator
fn is_str_white_space_char(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Splits a `0x`, `0o` or `0b` prefix off of a NonDecimalIntegerLiteral.
fn split_non_decimal_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn parse_non_decimal_digits(digits: &str, radix: u32) -> Option<num_bigint::BigInt> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    num_bigint::BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// StrUnsignedDecimalLiteral without the `Infinity` alternative:
///
/// ```text
/// DecimalDigits . DecimalDigits_opt ExponentPart_opt
/// . DecimalDigits ExponentPart_opt
/// DecimalDigits ExponentPart_opt
/// ```
fn is_str_unsigned_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }
    i == bytes.len()
}

/// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
///
/// The abstract operation ToIntegerOrInfinity takes argument argument (an
/// ECMAScript language value) and returns either a normal completion
/// containing either an integer, +∞, or -∞, or a throw completion. It
/// converts argument to an integer representing its Number value with
/// fractional part truncated, or to +∞ or -∞ when that Number value is
/// infinite.
pub fn to_integer_or_infinity(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?.into_f64();
    // 2. If number is one of NaN, +0𝔽, or -0𝔽, return 0.
    if number.is_nan() || number == 0.0 {
        return Ok(0.0);
    }
    // 3. If number is +∞𝔽, return +∞.
    // 4. If number is -∞𝔽, return -∞.
    if number.is_infinite() {
        return Ok(number);
    }
    // 5. Let integer be floor(abs(ℝ(number))).
    // 6. If number < -0𝔽, set integer to -integer.
    // 7. Return integer.
    let integer = number.trunc();
    // Mathematical values have no negative zero.
    Ok(if integer == 0.0 { 0.0 } else { integer })
}

/// ### [7.1.6 ToInt32 ( argument )](https://tc39.es/ecma262/#sec-toint32)
pub fn to_int32(agent: &mut Agent, argument: Value) -> JsResult<i32> {
    // 1. Let number be ? ToNumber(argument).
    // 2-5. Return int32bit modulo 2^32 in the signed range.
    Ok(to_number(agent, argument)?.to_int32())
}

/// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
pub fn to_uint32(agent: &mut Agent, argument: Value) -> JsResult<u32> {
    Ok(to_number(agent, argument)?.to_uint32())
}

/// ### [7.1.8 ToInt16 ( argument )](https://tc39.es/ecma262/#sec-toint16)
pub fn to_int16(agent: &mut Agent, argument: Value) -> JsResult<i16> {
    Ok(to_number(agent, argument)?.to_int16())
}

/// ### [7.1.9 ToUint16 ( argument )](https://tc39.es/ecma262/#sec-touint16)
pub fn to_uint16(agent: &mut Agent, argument: Value) -> JsResult<u16> {
    Ok(to_number(agent, argument)?.to_uint16())
}

/// ### [7.1.10 ToInt8 ( argument )](https://tc39.es/ecma262/#sec-toint8)
pub fn to_int8(agent: &mut Agent, argument: Value) -> JsResult<i8> {
    Ok(to_number(agent, argument)?.to_int8())
}

/// ### [7.1.11 ToUint8 ( argument )](https://tc39.es/ecma262/#sec-touint8)
pub fn to_uint8(agent: &mut Agent, argument: Value) -> JsResult<u8> {
    Ok(to_number(agent, argument)?.to_uint8())
}

/// ### [7.1.12 ToUint8Clamp ( argument )](https://tc39.es/ecma262/#sec-touint8clamp)
///
/// Unlike the other ECMAScript integer conversion abstract operation,
/// ToUint8Clamp rounds rather than truncates non-integral values, with ties
/// going to the even integer.
pub fn to_uint8_clamp(agent: &mut Agent, argument: Value) -> JsResult<u8> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?.into_f64();
    // 2. If number is NaN, return +0𝔽.
    if number.is_nan() {
        return Ok(0);
    }
    // 3. Let mv be the extended mathematical value of number.
    // 4. Let clamped be the result of clamping mv between 0 and 255.
    let clamped = number.clamp(0.0, 255.0);
    // 5. Let f be floor(clamped).
    let f = clamped.floor();
    // 6. If clamped < f + 0.5, return 𝔽(f).
    if clamped < f + 0.5 {
        return Ok(f as u8);
    }
    // 7. If clamped > f + 0.5, return 𝔽(f + 1).
    if clamped > f + 0.5 {
        return Ok(f as u8 + 1);
    }
    // 8. If f is even, return 𝔽(f). Otherwise, return 𝔽(f + 1).
    if f % 2.0 == 0.0 {
        Ok(f as u8)
    } else {
        Ok(f as u8 + 1)
    }
}

/// ### [7.1.13 ToBigInt ( argument )](https://tc39.es/ecma262/#sec-tobigint)
///
/// The abstract operation ToBigInt takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a BigInt
/// or a throw completion. It converts argument to a BigInt value, or throws
/// if an implicit conversion from Number would be required.
pub fn to_big_int(agent: &mut Agent, argument: Value) -> JsResult<BigInt> {
    // 1. Let prim be ? ToPrimitive(argument, NUMBER).
    let prim = to_primitive(agent, argument, Some(PreferredType::Number))?;
    // 2. Return the value that prim corresponds to in Table 12.
    match prim {
        Primitive::Undefined => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert undefined to a BigInt",
        )),
        Primitive::Null => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert null to a BigInt",
        )),
        Primitive::Boolean(bool) => Ok(BigInt::from_i64(bool as i64)),
        Primitive::BigInt(bigint) => Ok(bigint),
        Primitive::Number(number) => {
            let message = format!("Cannot convert {} to a BigInt", number.to_string_radix(10));
            Err(agent.throw_exception(ExceptionType::TypeError, message))
        }
        Primitive::String(string) => string_to_big_int(agent, string).ok_or_else(|| {
            let message = format!("Cannot convert {} to a BigInt", string.to_string_lossy(agent));
            agent.throw_exception(ExceptionType::SyntaxError, message)
        }),
        Primitive::Symbol(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a BigInt",
        )),
    }
}

/// ### [7.1.14 StringToBigInt ( str )](https://tc39.es/ecma262/#sec-stringtobigint)
///
/// The abstract operation StringToBigInt takes argument str (a String) and
/// returns a BigInt or undefined.
pub fn string_to_big_int(agent: &mut Agent, str: String) -> Option<BigInt> {
    // 1. Let literal be ParseText(str, StringIntegerLiteral).
    // 2. If literal is a List of errors, return undefined.
    // 3. Let mv be the MV of literal.
    // 4. Assert: mv is an integer.
    let mv = parse_string_integer_literal(str.as_str(agent)?)?;
    // 5. Return ℤ(mv).
    Some(BigInt::from_num_bigint(agent, mv))
}

/// ### [7.1.14.1 StringIntegerLiteral Grammar](https://tc39.es/ecma262/#sec-stringintegerliteral-grammar)
fn parse_string_integer_literal(text: &str) -> Option<num_bigint::BigInt> {
    let text = text.trim_matches(is_str_white_space_char);
    if text.is_empty() {
        return Some(num_bigint::BigInt::default());
    }
    if let Some((radix, digits)) = split_non_decimal_prefix(text) {
        return parse_non_decimal_digits(digits, radix);
    }
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    // parse_bytes understands the optional sign.
    num_bigint::BigInt::parse_bytes(text.as_bytes(), 10)
}

/// ### [7.1.15 ToBigInt64 ( argument )](https://tc39.es/ecma262/#sec-tobigint64)
pub fn to_big_int64(agent: &mut Agent, argument: Value) -> JsResult<i64> {
    // 1. Let n be ? ToBigInt(argument).
    let n = to_big_int(agent, argument)?;
    // 2. Let int64bit be ℝ(n) modulo 2^64.
    // 3. If int64bit ≥ 2^63, return ℤ(int64bit - 2^64); otherwise return ℤ(int64bit).
    Ok(n.as_int64(agent))
}

/// ### [7.1.16 ToBigUint64 ( argument )](https://tc39.es/ecma262/#sec-tobiguint64)
pub fn to_big_uint64(agent: &mut Agent, argument: Value) -> JsResult<u64> {
    // 1. Let n be ? ToBigInt(argument).
    let n = to_big_int(agent, argument)?;
    // 2. Let int64bit be ℝ(n) modulo 2^64.
    // 3. Return ℤ(int64bit).
    Ok(n.as_uint64(agent))
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
///
/// The abstract operation ToString takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a String
/// or a throw completion. It converts argument to a value of type String.
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 1. If argument is a String, return argument.
        Value::String(string) => Ok(string),
        // 2. If argument is a Symbol, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a string",
        )),
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(String::from_str(agent, "undefined")),
        // 4. If argument is null, return "null".
        Value::Null => Ok(String::from_str(agent, "null")),
        // 5. If argument is true, return "true".
        Value::Boolean(true) => Ok(String::from_str(agent, "true")),
        // 6. If argument is false, return "false".
        Value::Boolean(false) => Ok(String::from_str(agent, "false")),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Number(number) => Ok(String::from_string(agent, number.to_string_radix(10))),
        // 8. If argument is a BigInt, return BigInt::toString(argument, 10).
        Value::BigInt(bigint) => {
            let string = bigint.to_string_radix(agent, 10);
            Ok(String::from_string(agent, string))
        }
        // 9. Assert: argument is an Object.
        Value::Object(_) => {
            // 10. Let primValue be ? ToPrimitive(argument, STRING).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::String))?;
            // 11. Assert: primValue is not an Object.
            // 12. Return ? ToString(primValue).
            to_string(agent, prim_value.into_value())
        }
    }
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// The abstract operation ToObject takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an Object
/// or a throw completion. It converts argument to a value of type Object
/// according to [Table 13](https://tc39.es/ecma262/#table-toobject-conversions):
pub fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    let data = match argument {
        Value::Undefined | Value::Null => {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Cannot convert undefined or null to object",
            ));
        }
        // Return a new Boolean object whose [[BooleanData]] internal slot is set to argument.
        Value::Boolean(bool) => PrimitiveObjectData::Boolean(bool),
        // Return a new Number object whose [[NumberData]] internal slot is set to argument.
        Value::Number(number) => PrimitiveObjectData::Number(number),
        // Return a new String object whose [[StringData]] internal slot is set to argument.
        Value::String(string) => PrimitiveObjectData::String(string),
        // Return a new Symbol object whose [[SymbolData]] internal slot is set to argument.
        Value::Symbol(symbol) => PrimitiveObjectData::Symbol(symbol),
        // Return a new BigInt object whose [[BigIntData]] internal slot is set to argument.
        Value::BigInt(bigint) => PrimitiveObjectData::BigInt(bigint),
        // Return argument.
        Value::Object(object) => return Ok(object),
    };
    Ok(primitive_object_create(agent, data))
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
///
/// The abstract operation ToPropertyKey takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a
/// property key or a throw completion. It converts argument to a value that
/// can be used as a property key.
pub fn to_property_key(agent: &mut Agent, argument: Value) -> JsResult<PropertyKey> {
    // 1. Let key be ? ToPrimitive(argument, STRING).
    let key = to_primitive(agent, argument, Some(PreferredType::String))?;
    // 2. If key is a Symbol, then
    if let Primitive::Symbol(symbol) = key {
        // a. Return key.
        return Ok(PropertyKey::Symbol(symbol));
    }
    // 3. Return ! ToString(key).
    to_string(agent, key.into_value()).map(PropertyKey::String)
}

/// ### [7.1.20 ToLength ( argument )](https://tc39.es/ecma262/#sec-tolength)
///
/// The abstract operation ToLength takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an
/// integral Number or a throw completion. It clamps argument to an integral
/// Number suitable for use as the length of an array-like object.
pub fn to_length(agent: &mut Agent, argument: Value) -> JsResult<u64> {
    // 1. Let len be ? ToIntegerOrInfinity(argument).
    let len = to_integer_or_infinity(agent, argument)?;
    // 2. If len ≤ 0, return +0𝔽.
    if len <= 0.0 {
        return Ok(0);
    }
    // 3. Return 𝔽(min(len, 2^53 - 1)).
    Ok(len.min(MAX_SAFE_INTEGER) as u64)
}

/// ### [7.1.21 CanonicalNumericIndexString ( argument )](https://tc39.es/ecma262/#sec-canonicalnumericindexstring)
///
/// The abstract operation CanonicalNumericIndexString takes argument argument
/// (a String) and returns a Number or undefined. If argument is either "-0"
/// or exactly matches ToString(n) for some Number value n, it returns the
/// respective Number value. Otherwise, it returns undefined.
pub fn canonical_numeric_index_string(agent: &Agent, argument: String) -> Option<Number> {
    let text = argument.as_str(agent)?;
    // 1. If argument is "-0", return -0𝔽.
    if text == "-0" {
        return Some(Number::NEG_ZERO);
    }
    if !agent.options().disable_fast_paths
        && let Some(integer) = short_integer_index(text)
    {
        return Some(Number::from(integer));
    }
    // 2. Let n be ! ToNumber(argument).
    let n = string_to_number(agent, argument);
    // 3. If ! ToString(n) is argument, return n.
    // 4. Return undefined.
    (n.to_string_radix(10) == text).then_some(n)
}

/// Strings of at most four ASCII characters matching `-?[1-9][0-9]*` are
/// always canonical.
fn short_integer_index(text: &str) -> Option<i32> {
    if text.len() > 4 {
        return None;
    }
    let digits = text.strip_prefix('-').unwrap_or(text);
    let bytes = digits.as_bytes();
    if !matches!(bytes.first(), Some(b'1'..=b'9')) || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let magnitude = bytes
        .iter()
        .fold(0, |acc, &digit| acc * 10 + i32::from(digit - b'0'));
    Some(if digits.len() < text.len() {
        -magnitude
    } else {
        magnitude
    })
}

/// Selects the RangeError message thrown by [`to_index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexErrorContext {
    #[default]
    Generic,
    TypedArrayLength,
    ArrayBufferLength,
    DataViewLength,
}

impl IndexErrorContext {
    const fn message(self) -> &'static str {
        match self {
            IndexErrorContext::Generic => "Invalid value: not (convertible to) a safe integer",
            IndexErrorContext::TypedArrayLength => "Invalid typed array length",
            IndexErrorContext::ArrayBufferLength => "Invalid array buffer length",
            IndexErrorContext::DataViewLength => "Invalid DataView length",
        }
    }
}

/// ### [7.1.22 ToIndex ( value )](https://tc39.es/ecma262/#sec-toindex)
///
/// The abstract operation ToIndex takes argument value (an ECMAScript
/// language value) and returns either a normal completion containing a
/// non-negative integer or a throw completion. It converts value to an
/// integer and returns that integer if it is non-negative and corresponds
/// with an integer index. Otherwise, it throws an exception.
pub fn to_index(agent: &mut Agent, value: Value, context: IndexErrorContext) -> JsResult<u64> {
    // 1. Let integer be ? ToIntegerOrInfinity(value).
    let integer = to_integer_or_infinity(agent, value)?;
    // 2. If integer is not in the inclusive interval from 0 to 2^53 - 1, throw a RangeError exception.
    if !(0.0..=MAX_SAFE_INTEGER).contains(&integer) {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::RangeError,
            context.message(),
        ));
    }
    // 3. Return integer.
    Ok(integer as u64)
}

/// Invokes the method found under `key`, if any. Returns `None` without
/// calling anything when `value` has no callable at that key.
pub fn try_invoke(
    agent: &mut Agent,
    value: Value,
    key: PropertyKey,
    arguments: ArgumentsList,
) -> JsResult<Option<Value>> {
    let method = get_v(agent, value, key)?;
    let Some(method) = Function::from_value(agent, method) else {
        return Ok(None);
    };
    log::trace!("calling hook {key:?}");
    call_function(agent, method, value, Some(arguments)).map(Some)
}
