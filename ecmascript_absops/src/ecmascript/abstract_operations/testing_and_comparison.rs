// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use std::cmp::Ordering;

use super::{
    operations_on_objects::get,
    type_conversion::{
        PreferredType, string_to_big_int, to_boolean, to_number, to_numeric, to_primitive,
    },
};
use crate::{
    ecmascript::{
        builtins::proxy_target,
        execution::{Agent, ExceptionType, JsResult},
        types::{BigInt, IntoValue, Number, Numeric, Object, ObjectKind, Primitive, String, Value},
    },
    heap::heap_constants::WellKnownSymbolIndexes,
};

/// ### [7.2.1 RequireObjectCoercible ( argument )](https://tc39.es/ecma262/#sec-requireobjectcoercible)
///
/// The abstract operation RequireObjectCoercible takes argument argument (an
/// ECMAScript language value) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion. It throws an
/// error if argument is a value that cannot be converted to an Object using
/// ToObject.
pub fn require_object_coercible(agent: &mut Agent, argument: Value) -> JsResult<Value> {
    if argument.is_undefined() || argument.is_null() {
        Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert undefined or null to object",
        ))
    } else {
        Ok(argument)
    }
}

/// ### [7.2.2 IsArray ( argument )](https://tc39.es/ecma262/#sec-isarray)
///
/// The abstract operation IsArray takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a Boolean
/// or a throw completion.
pub fn is_array(agent: &mut Agent, argument: Value) -> JsResult<bool> {
    // 1. If argument is not an Object, return false.
    let Value::Object(mut object) = argument else {
        return Ok(false);
    };
    loop {
        match agent[object].kind {
            // 2. If argument is an Array exotic object, return true.
            ObjectKind::Array => return Ok(true),
            // 3. If argument is a Proxy exotic object, then
            //     a. Perform ? ValidateNonRevokedProxy(argument).
            //     b. Let proxyTarget be argument.[[ProxyTarget]].
            //     c. Return ? IsArray(proxyTarget).
            ObjectKind::Proxy(_) => object = proxy_target(agent, object)?,
            // 4. Return false.
            _ => return Ok(false),
        }
    }
}

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// The abstract operation IsCallable takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// callable function with a \[\[Call\]\] internal method.
pub fn is_callable(agent: &Agent, argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    match argument {
        Value::Object(object) => object.is_callable(agent),
        _ => false,
    }
}

/// ### [7.2.4 IsConstructor ( argument )](https://tc39.es/ecma262/#sec-isconstructor)
///
/// The abstract operation IsConstructor takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// function object with a \[\[Construct\]\] internal method.
///
/// Only the presence of the internal method is inspected; no user code runs.
pub fn is_constructor(agent: &Agent, argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Construct]] internal method, return true.
    // 3. Return false.
    match argument {
        Value::Object(object) => object.is_constructor(agent),
        _ => false,
    }
}

/// ### [7.2.5 IsExtensible ( O )](https://tc39.es/ecma262/#sec-isextensible-o)
///
/// The abstract operation IsExtensible takes argument O (an Object) and
/// returns either a normal completion containing a Boolean or a throw
/// completion. It is used to determine whether additional properties can be
/// added to O.
pub fn is_extensible(agent: &mut Agent, o: Object) -> JsResult<bool> {
    // 1. Return ? O.[[IsExtensible]]().
    o.internal_is_extensible(agent)
}

/// ### [7.2.6 IsRegExp ( argument )](https://tc39.es/ecma262/#sec-isregexp)
///
/// The abstract operation IsRegExp takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a Boolean
/// or a throw completion.
pub fn is_reg_exp(agent: &mut Agent, argument: Value) -> JsResult<bool> {
    // 1. If argument is not an Object, return false.
    let Value::Object(argument) = argument else {
        return Ok(false);
    };
    // 2. Let matcher be ? Get(argument, @@match).
    let matcher = get(agent, argument, WellKnownSymbolIndexes::Match.into())?;
    // 3. If matcher is not undefined, return ToBoolean(matcher).
    if !matcher.is_undefined() {
        return Ok(to_boolean(agent, matcher));
    }
    // 4. If argument has a [[RegExpMatcher]] internal slot, return true.
    // 5. Return false.
    Ok(matches!(agent[argument].kind, ObjectKind::RegExp(_)))
}

/// ### [7.2.7 Static Semantics: IsStringWellFormedUnicode ( string )](https://tc39.es/ecma262/#sec-isstringwellformedunicode)
pub fn is_string_well_formed_unicode(agent: &Agent, string: String) -> bool {
    string.is_well_formed(agent)
}

/// ### [7.2.8 SameType ( x, y )](https://tc39.es/ecma262/#sec-sametype)
///
/// The abstract operation SameType takes arguments x (an ECMAScript language
/// value) and y (an ECMAScript language value) and returns a Boolean. It
/// determines whether or not the two arguments are the same type.
pub fn is_same_type(x: Value, y: Value) -> bool {
    std::mem::discriminant(&x) == std::mem::discriminant(&y)
}

/// ### [7.2.9 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
///
/// The abstract operation SameValue takes arguments x (an ECMAScript language
/// value) and y (an ECMAScript language value) and returns a Boolean. It
/// determines whether or not the two arguments are the same value.
pub fn same_value(agent: &Agent, x: Value, y: Value) -> bool {
    // 1. If SameType(x, y) is false, return false.
    // 2. If x is a Number, then
    //     a. Return Number::sameValue(x, y).
    // 3. Return SameValueNonNumber(x, y).
    match (x, y) {
        (Value::Number(x), Value::Number(y)) => Number::same_value(x, y),
        _ => is_same_type(x, y) && same_value_non_number(agent, x, y),
    }
}

/// ### [7.2.10 SameValueZero ( x, y )](https://tc39.es/ecma262/#sec-samevaluezero)
///
/// The abstract operation SameValueZero takes arguments x (an ECMAScript
/// language value) and y (an ECMAScript language value) and returns a
/// Boolean. It determines whether or not the two arguments are the same value
/// (ignoring the difference between +0𝔽 and -0𝔽).
pub fn same_value_zero(agent: &Agent, x: Value, y: Value) -> bool {
    match (x, y) {
        (Value::Number(x), Value::Number(y)) => Number::same_value_zero(x, y),
        _ => is_same_type(x, y) && same_value_non_number(agent, x, y),
    }
}

/// ### [7.2.11 SameValueNonNumber ( x, y )](https://tc39.es/ecma262/#sec-samevaluenonnumber)
///
/// The abstract operation SameValueNonNumber takes arguments x (an ECMAScript
/// language value, but not a Number) and y (an ECMAScript language value, but
/// not a Number) and returns a Boolean.
pub fn same_value_non_number(agent: &Agent, x: Value, y: Value) -> bool {
    // 1. Assert: SameType(x, y) is true.
    debug_assert!(is_same_type(x, y));
    match (x, y) {
        // 2. If x is either null or undefined, return true.
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        // 3. If x is a BigInt, then
        //     a. Return BigInt::equal(x, y).
        (Value::BigInt(x), Value::BigInt(y)) => BigInt::equal(agent, x, y),
        // 4. If x is a String, then
        //     a. If x and y have the same length and the same code units in
        //        the same positions, return true; otherwise, return false.
        // Strings are interned, so equal contents means equal handles.
        (Value::String(x), Value::String(y)) => x == y,
        // 5. If x is a Boolean, then
        //     a. If x and y are both true or both false, return true; otherwise, return false.
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        // 6. NOTE: All other ECMAScript language values are compared by identity.
        // 7. If x is y, return true; otherwise, return false.
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x == y,
        _ => false,
    }
}

/// ### [7.2.12 IsLessThan ( x, y, LeftFirst )](https://tc39.es/ecma262/#sec-islessthan)
///
/// The abstract operation IsLessThan takes arguments x (an ECMAScript language
/// value), y (an ECMAScript language value), and LeftFirst (a Boolean) and
/// returns either a normal completion containing either a Boolean or
/// undefined, or a throw completion. It provides the semantics for the
/// comparison x < y, returning true, false, or undefined (which indicates that
/// at least one operand is NaN). The LeftFirst flag is used to control the
/// order in which operations with potentially visible side-effects are
/// performed upon x and y. It is necessary because ECMAScript specifies left
/// to right evaluation of expressions.
pub fn is_less_than<const LEFT_FIRST: bool>(
    agent: &mut Agent,
    x: Value,
    y: Value,
) -> JsResult<Option<bool>> {
    // 1. If LeftFirst is true, then
    let (px, py) = if LEFT_FIRST {
        // a. Let px be ? ToPrimitive(x, NUMBER).
        let px = to_primitive(agent, x, Some(PreferredType::Number))?;
        // b. Let py be ? ToPrimitive(y, NUMBER).
        let py = to_primitive(agent, y, Some(PreferredType::Number))?;
        (px, py)
    } else {
        // 2. Else,
        //     a. NOTE: The order of evaluation needs to be reversed to preserve left to right evaluation.
        //     b. Let py be ? ToPrimitive(y, NUMBER).
        let py = to_primitive(agent, y, Some(PreferredType::Number))?;
        //     c. Let px be ? ToPrimitive(x, NUMBER).
        let px = to_primitive(agent, x, Some(PreferredType::Number))?;
        (px, py)
    };

    match (px, py) {
        // 3. If px is a String and py is a String, then
        (Primitive::String(px), Primitive::String(py)) => {
            // a. Let lx be the length of px.
            // b. Let ly be the length of py.
            // c. For each integer i such that 0 ≤ i < min(lx, ly), in ascending order, do
            //     i. Let cx be the numeric value of the code unit at index i within px.
            //     ii. Let cy be the numeric value of the code unit at index i within py.
            //     iii. If cx < cy, return true.
            //     iv. If cx > cy, return false.
            // d. If lx < ly, return true. Otherwise, return false.
            Ok(Some(px.code_units(agent) < py.code_units(agent)))
        }
        // 4. Else,
        //     a. If px is a BigInt and py is a String, then
        (Primitive::BigInt(px), Primitive::String(py)) => {
            // i. Let ny be StringToBigInt(py).
            // ii. If ny is undefined, return undefined.
            let Some(ny) = string_to_big_int(agent, py) else {
                return Ok(None);
            };
            // iii. Return BigInt::lessThan(px, ny).
            Ok(Some(BigInt::less_than(agent, px, ny)))
        }
        //     b. If px is a String and py is a BigInt, then
        (Primitive::String(px), Primitive::BigInt(py)) => {
            // i. Let nx be StringToBigInt(px).
            // ii. If nx is undefined, return undefined.
            let Some(nx) = string_to_big_int(agent, px) else {
                return Ok(None);
            };
            // iii. Return BigInt::lessThan(nx, py).
            Ok(Some(BigInt::less_than(agent, nx, py)))
        }
        _ => {
            // c. NOTE: Because px and py are primitive values, evaluation order is not important.
            // d. Let nx be ? ToNumeric(px).
            let nx = to_numeric(agent, px.into_value())?;
            // e. Let ny be ? ToNumeric(py).
            let ny = to_numeric(agent, py.into_value())?;
            match (nx, ny) {
                // f. If SameType(nx, ny) is true, then
                //     i. If nx is a Number, then
                //         1. Return Number::lessThan(nx, ny).
                (Numeric::Number(nx), Numeric::Number(ny)) => Ok(Number::less_than(nx, ny)),
                //     ii. Else,
                //         1. Assert: nx is a BigInt.
                //         2. Return BigInt::lessThan(nx, ny).
                (Numeric::BigInt(nx), Numeric::BigInt(ny)) => {
                    Ok(Some(BigInt::less_than(agent, nx, ny)))
                }
                // g. Assert: nx is a BigInt and ny is a Number, or nx is a Number and ny is a BigInt.
                // h. If nx or ny is NaN, return undefined.
                // i. If nx is -∞𝔽 or ny is +∞𝔽, return true.
                // j. If nx is +∞𝔽 or ny is -∞𝔽, return false.
                // k. If ℝ(nx) < ℝ(ny), return true; otherwise return false.
                (Numeric::BigInt(nx), Numeric::Number(ny)) => {
                    Ok(BigInt::compare_to_f64(agent, nx, ny.into_f64())
                        .map(|ordering| ordering == Ordering::Less))
                }
                (Numeric::Number(nx), Numeric::BigInt(ny)) => {
                    Ok(BigInt::compare_to_f64(agent, ny, nx.into_f64())
                        .map(|ordering| ordering == Ordering::Greater))
                }
            }
        }
    }
}

/// ### [7.2.13 IsLooselyEqual ( x, y )](https://tc39.es/ecma262/#sec-islooselyequal)
///
/// The abstract operation IsLooselyEqual takes arguments x (an ECMAScript
/// language value) and y (an ECMAScript language value) and returns either a
/// normal completion containing a Boolean or a throw completion. It provides
/// the semantics for the == operator.
pub fn is_loosely_equal(agent: &mut Agent, x: Value, y: Value) -> JsResult<bool> {
    // 1. If SameType(x, y) is true, then
    if is_same_type(x, y) {
        // a. Return IsStrictlyEqual(x, y).
        return Ok(is_strictly_equal(agent, x, y));
    }
    match (x, y) {
        // 2. If x is null and y is undefined, return true.
        // 3. If x is undefined and y is null, return true.
        (Value::Null, Value::Undefined) | (Value::Undefined, Value::Null) => Ok(true),
        // 4. NOTE: This step is replaced in section B.3.6.2.
        // 5. If x is a Number and y is a String, return ! IsLooselyEqual(x, ! ToNumber(y)).
        (Value::Number(_), Value::String(_)) => {
            let y = to_number(agent, y)?;
            is_loosely_equal(agent, x, y.into_value())
        }
        // 6. If x is a String and y is a Number, return ! IsLooselyEqual(! ToNumber(x), y).
        (Value::String(_), Value::Number(_)) => {
            let x = to_number(agent, x)?;
            is_loosely_equal(agent, x.into_value(), y)
        }
        // 7. If x is a BigInt and y is a String, then
        (Value::BigInt(_), Value::String(y)) => {
            // a. Let n be StringToBigInt(y).
            // b. If n is undefined, return false.
            let Some(n) = string_to_big_int(agent, y) else {
                return Ok(false);
            };
            // c. Return ! IsLooselyEqual(x, n).
            is_loosely_equal(agent, x, n.into_value())
        }
        // 8. If x is a String and y is a BigInt, return ! IsLooselyEqual(y, x).
        (Value::String(_), Value::BigInt(_)) => is_loosely_equal(agent, y, x),
        // 9. If x is a Boolean, return ! IsLooselyEqual(! ToNumber(x), y).
        (Value::Boolean(_), _) => {
            let x = to_number(agent, x)?;
            is_loosely_equal(agent, x.into_value(), y)
        }
        // 10. If y is a Boolean, return ! IsLooselyEqual(x, ! ToNumber(y)).
        (_, Value::Boolean(_)) => {
            let y = to_number(agent, y)?;
            is_loosely_equal(agent, x, y.into_value())
        }
        // 11. If x is either a String, a Number, a BigInt, or a Symbol and y is an Object, return ! IsLooselyEqual(x, ? ToPrimitive(y)).
        (Value::String(_) | Value::Number(_) | Value::BigInt(_) | Value::Symbol(_), Value::Object(_)) => {
            let y = to_primitive(agent, y, None)?;
            is_loosely_equal(agent, x, y.into_value())
        }
        // 12. If x is an Object and y is either a String, a Number, a BigInt, or a Symbol, return ! IsLooselyEqual(? ToPrimitive(x), y).
        (Value::Object(_), Value::String(_) | Value::Number(_) | Value::BigInt(_) | Value::Symbol(_)) => {
            let x = to_primitive(agent, x, None)?;
            is_loosely_equal(agent, x.into_value(), y)
        }
        // 13. If x is a BigInt and y is a Number, or if x is a Number and y is a BigInt, then
        //     a. If x is not finite or y is not finite, return false.
        //     b. If ℝ(x) = ℝ(y), return true; otherwise return false.
        (Value::BigInt(x), Value::Number(y)) | (Value::Number(y), Value::BigInt(x)) => {
            Ok(BigInt::compare_to_f64(agent, x, y.into_f64()) == Some(Ordering::Equal))
        }
        // 14. Return false.
        _ => Ok(false),
    }
}

/// ### [7.2.14 IsStrictlyEqual ( x, y )](https://tc39.es/ecma262/#sec-isstrictlyequal)
///
/// The abstract operation IsStrictlyEqual takes arguments x (an ECMAScript
/// language value) and y (an ECMAScript language value) and returns a
/// Boolean. It provides the semantics for the === operator.
pub fn is_strictly_equal(agent: &Agent, x: Value, y: Value) -> bool {
    // 1. If SameType(x, y) is false, return false.
    if !is_same_type(x, y) {
        return false;
    }
    // 2. If x is a Number, then
    if let (Value::Number(x), Value::Number(y)) = (x, y) {
        // a. Return Number::equal(x, y).
        return Number::equal(x, y);
    }
    // 3. Return SameValueNonNumber(x, y).
    same_value_non_number(agent, x, y)
}

/// ### [6.2.6 IsIntegralNumber ( argument )](https://tc39.es/ecma262/2022/#sec-isintegralnumber)
///
/// Returns true if argument is a finite Number with an integral mathematical
/// value.
pub fn is_integral_number(_agent: &Agent, argument: Value) -> bool {
    matches!(argument, Value::Number(number) if number.is_integral())
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::ecmascript::{
        abstract_operations::{
            operations_on_objects::{create_data_property_or_throw, define_property_or_throw},
            test_hooks::{define_value, host_constructor, host_function, plain_object},
        },
        builtins::{
            array_create, proxy_create, proxy_revoke, reg_exp_create,
        },
        execution::Options,
        types::{PropertyDescriptor, PropertyKey, Symbol},
    };

    #[test]
    fn require_object_coercible_passes_values_through() {
        let mut agent = Agent::new(Options::default());
        assert_eq!(
            require_object_coercible(&mut agent, Value::from(1)),
            Ok(Value::from(1))
        );
        let error = require_object_coercible(&mut agent, Value::Null).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        assert!(require_object_coercible(&mut agent, Value::Undefined).is_err());
    }

    #[test]
    fn is_array_follows_proxies() {
        let mut agent = Agent::new(Options::default());
        let array = array_create(&mut agent, 0, None).unwrap();
        let handler = plain_object(&mut agent).into_value();
        let proxy = proxy_create(&mut agent, array.into_value(), handler).unwrap();
        assert_eq!(is_array(&mut agent, array.into_value()), Ok(true));
        assert_eq!(is_array(&mut agent, proxy.into_value()), Ok(true));
        let object = plain_object(&mut agent).into_value();
        assert_eq!(is_array(&mut agent, object), Ok(false));
        assert_eq!(is_array(&mut agent, Value::Null), Ok(false));

        proxy_revoke(&mut agent, proxy);
        let error = is_array(&mut agent, proxy.into_value()).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn is_constructor_does_not_run_the_body() {
        let mut agent = Agent::new(Options::default());
        let ran = Rc::new(RefCell::new(false));
        let body_ran = ran.clone();
        let constructor = host_constructor(&mut agent, "C", move |_, this, _, _| {
            *body_ran.borrow_mut() = true;
            Ok(this)
        });
        assert!(is_constructor(&agent, constructor.into_value()));
        assert!(!*ran.borrow());

        let arrow = host_function(&mut agent, "arrow", |_, _, _, _| Ok(Value::Undefined));
        assert!(is_callable(&agent, arrow.into_value()));
        assert!(!is_constructor(&agent, arrow.into_value()));
        assert!(!is_constructor(&agent, Value::from(1)));
        let throw_type_error = agent.current_realm().intrinsics().throw_type_error();
        assert!(!is_constructor(&agent, throw_type_error.into_value()));
        let array_constructor = agent.current_realm().intrinsics().array();
        assert!(is_constructor(&agent, array_constructor.into_value()));
        let object = plain_object(&mut agent).into_value();
        assert!(!is_callable(&agent, object));
    }

    /// Installs accessors that count reads of `key` and returns the counter.
    fn count_reads(
        agent: &mut Agent,
        object: Object,
        key: PropertyKey,
        value: Value,
    ) -> Rc<RefCell<u32>> {
        let reads = Rc::new(RefCell::new(0));
        let getter_reads = reads.clone();
        let getter = host_function(agent, "get", move |_, _, _, _| {
            *getter_reads.borrow_mut() += 1;
            Ok(value)
        });
        define_property_or_throw(
            agent,
            object,
            key,
            PropertyDescriptor {
                get: Some(Some(getter)),
                configurable: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        reads
    }

    #[test]
    fn is_reg_exp_reads_match_exactly_once() {
        for matcher in [Value::Boolean(true), Value::from(0)] {
            let mut agent = Agent::new(Options::default());
            let regexp = reg_exp_create(&mut agent, Value::Undefined, Value::Undefined).unwrap();
            let match_reads = count_reads(
                &mut agent,
                regexp,
                WellKnownSymbolIndexes::Match.into(),
                matcher,
            );
            let source = PropertyKey::from_str(&mut agent, "source");
            let source_reads = count_reads(&mut agent, regexp, source, Value::Undefined);
            let flags = PropertyKey::from_str(&mut agent, "flags");
            let flags_reads = count_reads(&mut agent, regexp, flags, Value::Undefined);
            let last_index = PropertyKey::from_str(&mut agent, "lastIndex");
            let last_index_before = regexp
                .internal_get_own_property(&mut agent, last_index)
                .unwrap();

            let expected = to_boolean(&agent, matcher);
            assert_eq!(is_reg_exp(&mut agent, regexp.into_value()), Ok(expected));
            assert_eq!(*match_reads.borrow(), 1);
            assert_eq!(*source_reads.borrow(), 0);
            assert_eq!(*flags_reads.borrow(), 0);
            assert_eq!(
                regexp.internal_get_own_property(&mut agent, last_index).unwrap(),
                last_index_before
            );
        }
    }

    #[test]
    fn is_reg_exp_falls_back_to_the_matcher_slot() {
        let mut agent = Agent::new(Options::default());
        let regexp = reg_exp_create(&mut agent, Value::Undefined, Value::Undefined).unwrap();
        assert_eq!(is_reg_exp(&mut agent, regexp.into_value()), Ok(true));
        let object = plain_object(&mut agent);
        assert_eq!(is_reg_exp(&mut agent, object.into_value()), Ok(false));
        create_data_property_or_throw(
            &mut agent,
            object,
            WellKnownSymbolIndexes::Match.into(),
            Value::from(1),
        )
        .unwrap();
        assert_eq!(is_reg_exp(&mut agent, object.into_value()), Ok(true));
        let text = Value::from_str(&mut agent, "/a/");
        assert_eq!(is_reg_exp(&mut agent, text), Ok(false));
    }

    #[test]
    fn same_value_distinguishes_zeroes() {
        let mut agent = Agent::new(Options::default());
        assert!(!same_value(&agent, Value::pos_zero(), Value::neg_zero()));
        assert!(same_value(&agent, Value::nan(), Value::nan()));
        assert!(same_value_zero(&agent, Value::pos_zero(), Value::neg_zero()));
        assert!(same_value_zero(&agent, Value::nan(), Value::nan()));
        assert!(!is_strictly_equal(&agent, Value::nan(), Value::nan()));
        assert!(is_strictly_equal(&agent, Value::pos_zero(), Value::neg_zero()));

        let a = Value::from_str(&mut agent, "same");
        let b = Value::from_str(&mut agent, "same");
        assert!(same_value(&agent, a, b));
        let large = BigInt::from_u64(&mut agent, u64::MAX);
        let also_large = BigInt::from_u64(&mut agent, u64::MAX);
        assert!(same_value(&agent, large.into_value(), also_large.into_value()));
        let symbol = Symbol::new(&mut agent, None).into_value();
        let other_symbol = Symbol::new(&mut agent, None).into_value();
        assert!(!same_value(&agent, symbol, other_symbol));
        assert!(!same_value(&agent, Value::from(1), a));
    }

    #[test]
    fn same_type_treats_functions_as_objects() {
        let mut agent = Agent::new(Options::default());
        let function = host_function(&mut agent, "f", |_, _, _, _| Ok(Value::Undefined));
        let object = plain_object(&mut agent);
        assert!(is_same_type(function.into_value(), object.into_value()));
        assert!(!is_same_type(Value::Null, Value::Undefined));
        assert!(!is_same_type(Value::Null, object.into_value()));
        assert!(is_same_type(Value::Boolean(true), Value::Boolean(false)));
    }

    fn recording_object(
        agent: &mut Agent,
        calls: &Rc<RefCell<Vec<&'static str>>>,
        marker: &'static str,
        result: Value,
    ) -> Value {
        let object = plain_object(agent);
        let calls = calls.clone();
        let value_of = host_function(agent, "valueOf", move |_, _, _, _| {
            calls.borrow_mut().push(marker);
            Ok(result)
        });
        define_value(agent, object, "valueOf", value_of.into_value());
        object.into_value()
    }

    #[test]
    fn is_less_than_evaluation_order() {
        let mut agent = Agent::new(Options::default());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let left = recording_object(&mut agent, &calls, "valueOf left", Value::from(1));
        let right = recording_object(&mut agent, &calls, "valueOf right", Value::from(2));

        assert_eq!(is_less_than::<true>(&mut agent, left, right), Ok(Some(true)));
        assert_eq!(*calls.borrow(), ["valueOf left", "valueOf right"]);

        calls.borrow_mut().clear();
        assert_eq!(is_less_than::<false>(&mut agent, left, right), Ok(Some(true)));
        assert_eq!(*calls.borrow(), ["valueOf right", "valueOf left"]);
    }

    #[test]
    fn is_less_than_comparisons() {
        let mut agent = Agent::new(Options::default());
        assert_eq!(
            is_less_than::<true>(&mut agent, Value::nan(), Value::from(1)),
            Ok(None)
        );
        let a = Value::from_str(&mut agent, "a");
        let ab = Value::from_str(&mut agent, "ab");
        let b = Value::from_str(&mut agent, "b");
        assert_eq!(is_less_than::<true>(&mut agent, a, ab), Ok(Some(true)));
        assert_eq!(is_less_than::<true>(&mut agent, b, ab), Ok(Some(false)));
        // Code unit order, not code point order.
        let astral = Value::from_str(&mut agent, "\u{1F600}");
        let private_use = Value::from_str(&mut agent, "\u{E000}");
        assert_eq!(
            is_less_than::<true>(&mut agent, astral, private_use),
            Ok(Some(true))
        );

        let ten = Value::from_str(&mut agent, "10");
        let nine = Value::from_str(&mut agent, "9");
        assert_eq!(is_less_than::<true>(&mut agent, ten, nine), Ok(Some(true)));
        assert_eq!(
            is_less_than::<true>(&mut agent, ten, Value::from(9)),
            Ok(Some(false))
        );
    }

    #[test]
    fn is_less_than_compares_bigints_exactly() {
        let mut agent = Agent::new(Options::default());
        // 2^53 + 1 is not representable as a Number.
        let big = BigInt::from_i64(9007199254740993).into_value();
        let rounded = Value::from(9007199254740992.0);
        assert_eq!(is_less_than::<true>(&mut agent, rounded, big), Ok(Some(true)));
        assert_eq!(is_less_than::<true>(&mut agent, big, rounded), Ok(Some(false)));
        let text = Value::from_str(&mut agent, "9007199254740994");
        assert_eq!(is_less_than::<true>(&mut agent, big, text), Ok(Some(true)));
        assert_eq!(is_less_than::<true>(&mut agent, text, big), Ok(Some(false)));
        let not_an_integer = Value::from_str(&mut agent, "1.5");
        assert_eq!(
            is_less_than::<true>(&mut agent, big, not_an_integer),
            Ok(None)
        );
        assert_eq!(
            is_less_than::<true>(&mut agent, big, Value::pos_inf()),
            Ok(Some(true))
        );
        assert_eq!(
            is_less_than::<true>(&mut agent, Value::from(0.5), BigInt::from_i64(1).into_value()),
            Ok(Some(true))
        );
        let symbol = Symbol::new(&mut agent, None).into_value();
        assert!(is_less_than::<true>(&mut agent, symbol, Value::from(1)).is_err());
    }

    #[test]
    fn loose_equality() {
        let mut agent = Agent::new(Options::default());
        assert_eq!(is_loosely_equal(&mut agent, Value::Null, Value::Undefined), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, Value::Null, Value::from(0)), Ok(false));
        let one = Value::from_str(&mut agent, "1");
        assert_eq!(is_loosely_equal(&mut agent, Value::from(1), one), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, Value::Boolean(true), one), Ok(true));
        let big_one = BigInt::from_i64(1).into_value();
        assert_eq!(is_loosely_equal(&mut agent, big_one, one), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, one, big_one), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, big_one, Value::from(1)), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, big_one, Value::from(1.5)), Ok(false));
        assert_eq!(is_loosely_equal(&mut agent, big_one, Value::nan()), Ok(false));
        let garbage = Value::from_str(&mut agent, "x");
        assert_eq!(is_loosely_equal(&mut agent, big_one, garbage), Ok(false));

        let wrapped = recording_object(
            &mut agent,
            &Rc::new(RefCell::new(Vec::new())),
            "valueOf",
            Value::from(1),
        );
        assert_eq!(is_loosely_equal(&mut agent, wrapped, Value::from(1)), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, one, wrapped), Ok(true));
        assert_eq!(is_loosely_equal(&mut agent, wrapped, wrapped), Ok(true));
        let other = plain_object(&mut agent).into_value();
        assert_eq!(is_loosely_equal(&mut agent, wrapped, other), Ok(false));
    }

    #[test]
    fn integral_numbers() {
        let mut agent = Agent::new(Options::default());
        assert!(is_integral_number(&agent, Value::from(3)));
        assert!(is_integral_number(&agent, Value::neg_zero()));
        assert!(!is_integral_number(&agent, Value::from(3.5)));
        assert!(!is_integral_number(&agent, Value::pos_inf()));
        let text = Value::from_str(&mut agent, "3");
        assert!(!is_integral_number(&agent, text));
    }

    #[test]
    fn well_formed_strings() {
        let mut agent = Agent::new(Options::default());
        let well_formed = String::from_str(&mut agent, "a\u{1F600}");
        assert!(is_string_well_formed_unicode(&agent, well_formed));
        let lone = String::from_code_units(&mut agent, &[0x61, 0xD800]);
        assert!(!is_string_well_formed_unicode(&agent, lone));
    }

    #[test]
    fn is_extensible_reflects_prevent_extensions() {
        let mut agent = Agent::new(Options::default());
        let object = plain_object(&mut agent);
        assert_eq!(is_extensible(&mut agent, object), Ok(true));
        object.internal_prevent_extensions(&mut agent).unwrap();
        assert_eq!(is_extensible(&mut agent, object), Ok(false));
    }
}
