// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::{
    testing_and_comparison::is_callable,
    type_conversion::{to_length, to_object},
};
use crate::ecmascript::{
    builtins::{ArgumentsList, array_create},
    execution::{Agent, ExceptionType, JsResult},
    types::{Function, IntoObject, Object, PropertyDescriptor, PropertyKey, Value},
};

/// Formats `value` for "is not callable" style messages: primitives with a
/// printable form are shown next to their type.
fn describe_value(agent: &Agent, value: Value) -> std::string::String {
    let type_of = value.type_of(agent);
    match value {
        Value::Number(number) => format!("{type_of} {}", number.to_string_radix(10)),
        Value::String(string) => format!("{type_of} {}", string.to_string_lossy(agent)),
        Value::Boolean(boolean) => format!("{type_of} {boolean}"),
        _ => type_of.to_owned(),
    }
}

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
///
/// The abstract operation Get takes arguments O (an Object) and P (a property
/// key) and returns either a normal completion containing an ECMAScript
/// language value or a throw completion. It is used to retrieve the value of a
/// specific property of an object.
pub fn get(agent: &mut Agent, o: impl IntoObject, p: PropertyKey) -> JsResult<Value> {
    let o = o.into_object();
    // 1. Return ? O.[[Get]](P, O).
    o.internal_get(agent, p, o.into())
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// The abstract operation GetV takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion. It is used
/// to retrieve the value of a specific property of an ECMAScript language
/// value. If the value is not an object, the property lookup is performed
/// using a wrapper object appropriate for the type of the value.
pub fn get_v(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Value> {
    // 1. Let O be ? ToObject(V).
    let o = to_object(agent, v)?;
    // 2. Return ? O.[[Get]](P, V).
    o.internal_get(agent, p, v)
}

/// ### [7.3.4 Set ( O, P, V, Throw )](https://tc39.es/ecma262/#sec-set-o-p-v-throw)
///
/// The abstract operation Set takes arguments O (an Object), P (a property
/// key), V (an ECMAScript language value), and Throw (a Boolean) and returns
/// either a normal completion containing UNUSED or a throw completion. It is
/// used to set the value of a specific property of an object. V is the new
/// value for the property.
pub fn set(agent: &mut Agent, o: Object, p: PropertyKey, v: Value, throw: bool) -> JsResult<()> {
    // 1. Let success be ? O.[[Set]](P, V, O).
    let success = o.internal_set(agent, p, v, o.into())?;
    // 2. If success is false and Throw is true, throw a TypeError exception.
    if !success && throw {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Could not set property",
        ));
    }
    // 3. Return UNUSED.
    Ok(())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
///
/// The abstract operation CreateDataProperty takes arguments O (an Object), P
/// (a property key), and V (an ECMAScript language value) and returns either a
/// normal completion containing a Boolean or a throw completion. It is used to
/// create a new own property of an object.
///
/// > NOTE: This abstract operation creates a property whose attributes are
/// > set to the same defaults used for properties created by the ECMAScript
/// > language assignment operator. Normally, the property will not already
/// > exist. If it does exist and is not configurable or if O is not
/// > extensible, \[\[DefineOwnProperty]] will return false.
pub fn create_data_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<bool> {
    // 1. Let newDesc be the PropertyDescriptor { [[Value]]: V, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let new_desc = PropertyDescriptor::new_data_descriptor(value);
    // 2. Return ? O.[[DefineOwnProperty]](P, newDesc).
    object.internal_define_own_property(agent, property_key, new_desc)
}

/// ### [7.3.6 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
///
/// The abstract operation CreateDataPropertyOrThrow takes arguments O (an
/// Object), P (a property key), and V (an ECMAScript language value) and
/// returns either a normal completion containing UNUSED or a throw completion.
/// It is used to create a new own property of an object. It throws a
/// TypeError exception if the requested property update cannot be performed.
pub fn create_data_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<()> {
    // 1. Let success be ? CreateDataProperty(O, P, V).
    let success = create_data_property(agent, object, property_key, value)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Could not create property",
        ))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.7 CreateNonEnumerableDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createnonenumerabledatapropertyorthrow)
///
/// The abstract operation CreateNonEnumerableDataPropertyOrThrow takes
/// arguments O (an Object), P (a property key), and V (an ECMAScript language
/// value) and returns UNUSED. It is used to create a new non-enumerable own
/// property of an ordinary object.
pub fn create_non_enumerable_data_property_or_throw(
    agent: &mut Agent,
    o: Object,
    p: PropertyKey,
    v: Value,
) -> JsResult<()> {
    // 1. Assert: O is an ordinary, extensible object with no non-configurable properties.
    // 2. Let newDesc be the PropertyDescriptor { [[Value]]: V, [[Writable]]: true, [[Enumerable]]: false, [[Configurable]]: true }.
    let new_desc = PropertyDescriptor {
        value: Some(v),
        writable: Some(true),
        enumerable: Some(false),
        configurable: Some(true),
        ..Default::default()
    };
    // 3. Perform ! DefinePropertyOrThrow(O, P, newDesc).
    define_property_or_throw(agent, o, p, new_desc)
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
///
/// The abstract operation DefinePropertyOrThrow takes arguments O (an Object),
/// P (a property key), and desc (a Property Descriptor) and returns either a
/// normal completion containing UNUSED or a throw completion. It is used to
/// call the \[\[DefineOwnProperty]] internal method of an object in a way that
/// will throw a TypeError exception if the requested property update cannot
/// be performed.
pub fn define_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    desc: PropertyDescriptor,
) -> JsResult<()> {
    // 1. Let success be ? O.[[DefineOwnProperty]](P, desc).
    let success = object.internal_define_own_property(agent, property_key, desc)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Failed to define property on object",
        ))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.9 DeletePropertyOrThrow ( O, P )](https://tc39.es/ecma262/#sec-deletepropertyorthrow)
pub fn delete_property_or_throw(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<()> {
    // 1. Let success be ? O.[[Delete]](P).
    let success = o.internal_delete(agent, p)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Failed to delete property",
        ))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.10 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// The abstract operation GetMethod takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing either a function object or undefined, or a throw completion.
/// It is used to get the value of a specific property of an ECMAScript
/// language value when the value of the property is expected to be a
/// function.
pub fn get_method(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Option<Function>> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, v, p)?;
    // 2. If func is either undefined or null, return undefined.
    if func.is_undefined() || func.is_null() {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    // 4. Return func.
    match Function::from_value(agent, func) {
        Some(func) => Ok(Some(func)),
        None => {
            let message = format!("{} is not callable", describe_value(agent, func));
            Err(agent.throw_exception(ExceptionType::TypeError, message))
        }
    }
}

/// ### [7.3.11 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
///
/// The abstract operation HasProperty takes arguments O (an Object) and P (a
/// property key) and returns either a normal completion containing a Boolean
/// or a throw completion. It is used to determine whether an object has a
/// property with the specified property key. The property may be either own
/// or inherited.
pub fn has_property(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<bool> {
    // 1. Return ? O.[[HasProperty]](P).
    o.internal_has_property(agent, p)
}

/// ### [7.3.12 HasOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-hasownproperty)
///
/// The abstract operation HasOwnProperty takes arguments O (an Object) and P
/// (a property key) and returns either a normal completion containing a
/// Boolean or a throw completion. It is used to determine whether an object
/// has an own property with the specified property key.
pub fn has_own_property(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let desc = o.internal_get_own_property(agent, p)?;
    // 2. If desc is undefined, return false.
    // 3. Return true.
    Ok(desc.is_some())
}

/// ### [7.3.13 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// The abstract operation Call takes arguments F (an ECMAScript language
/// value) and V (an ECMAScript language value) and optional argument
/// argumentsList (a List of ECMAScript language values) and returns either a
/// normal completion containing an ECMAScript language value or a throw
/// completion. It is used to call the \[\[Call]] internal method of a function
/// object. F is the function object, V is an ECMAScript language value that is
/// the this value of the \[\[Call]], and argumentsList is the value passed to
/// the corresponding argument of the internal method. If argumentsList is not
/// present, a new empty List is used as its value.
pub fn call(
    agent: &mut Agent,
    f: Value,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    if !is_callable(agent, f) {
        let message = format!("{} is not a function", describe_value(agent, f));
        return Err(agent.throw_exception(ExceptionType::TypeError, message));
    }
    // 3. Return ? F.[[Call]](V, argumentsList).
    let Value::Object(f) = f else {
        unreachable!();
    };
    Function(f).internal_call(agent, v, arguments_list)
}

/// Call for a value already known to be callable.
pub fn call_function(
    agent: &mut Agent,
    f: Function,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    let arguments_list = arguments_list.unwrap_or_default();
    f.internal_call(agent, v, arguments_list)
}

/// ### [7.3.14 Construct ( F \[ , argumentsList \[ , newTarget \] \] )](https://tc39.es/ecma262/#sec-construct)
///
/// The abstract operation Construct takes argument F (a constructor) and
/// optional arguments argumentsList (a List of ECMAScript language values) and
/// newTarget (a constructor) and returns either a normal completion containing
/// an Object or a throw completion. It is used to call the \[\[Construct]]
/// internal method of a function object. argumentsList and newTarget are the
/// values to be passed as the corresponding arguments of the internal method.
/// If argumentsList is not present, a new empty List is used as its value. If
/// newTarget is not present, F is used as its value.
pub fn construct(
    agent: &mut Agent,
    f: Function,
    arguments_list: Option<ArgumentsList>,
    new_target: Option<Function>,
) -> JsResult<Object> {
    // 1. If newTarget is not present, set newTarget to F.
    let new_target = new_target.unwrap_or(f);
    // 2. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    if !f.is_constructor(agent) {
        let message = format!("{} is not a constructor", describe_value(agent, f.into()));
        return Err(agent.throw_exception(ExceptionType::TypeError, message));
    }
    // 3. Return ? F.[[Construct]](argumentsList, newTarget).
    f.internal_construct(agent, arguments_list, new_target)
}

/// ### [7.3.18 CreateArrayFromList ( elements )](https://tc39.es/ecma262/#sec-createarrayfromlist)
///
/// The abstract operation CreateArrayFromList takes argument elements (a List
/// of ECMAScript language values) and returns an Array. It is used to create
/// an Array whose elements are provided by elements.
pub fn create_array_from_list(agent: &mut Agent, elements: &[Value]) -> JsResult<Object> {
    // 1. Let array be ! ArrayCreate(0).
    let array = array_create(agent, 0, None)?;
    // 2. Let n be 0.
    // 3. For each element e of elements, do
    for (n, e) in (0u32..).zip(elements.iter().copied()) {
        // a. Perform ! CreateDataPropertyOrThrow(array, ! ToString(𝔽(n)), e).
        let key = PropertyKey::from_array_index(agent, n);
        create_data_property_or_throw(agent, array, key, e)?;
        // b. Set n to n + 1.
    }
    // 4. Return array.
    Ok(array)
}

/// ### [7.3.19 LengthOfArrayLike ( obj )](https://tc39.es/ecma262/#sec-lengthofarraylike)
///
/// The abstract operation LengthOfArrayLike takes argument obj (an Object) and
/// returns either a normal completion containing a non-negative integer or a
/// throw completion. It returns the value of the "length" property of an
/// array-like object.
pub fn length_of_array_like(agent: &mut Agent, obj: Object) -> JsResult<u64> {
    // 1. Return ℝ(? ToLength(? Get(obj, "length"))).
    let key = PropertyKey::from_str(agent, "length");
    let property = get(agent, obj, key)?;
    to_length(agent, property)
}

/// ### [7.3.20 Invoke ( V, P \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-invoke)
///
/// The abstract operation Invoke takes arguments V (an ECMAScript language
/// value) and P (a property key) and optional argument argumentsList (a List
/// of ECMAScript language values) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion. It is used
/// to call a method property of an ECMAScript language value. V serves as
/// both the lookup point for the property and the this value of the call.
/// argumentsList is the list of arguments values passed to the method. If
/// argumentsList is not present, a new empty List is used as its value.
pub fn invoke(
    agent: &mut Agent,
    v: Value,
    p: PropertyKey,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    // 2. Let func be ? GetV(V, P).
    let func = get_v(agent, v, p)?;
    // 3. Return ? Call(func, V, argumentsList).
    call(agent, func, v, Some(arguments_list))
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::ecmascript::{
        abstract_operations::{
            test_hooks::{define_value, host_constructor, host_function, plain_object},
            testing_and_comparison::is_array,
        },
        execution::Options,
        types::{IntoValue, Number, Symbol},
    };

    #[test]
    fn get_method_skips_nullish_values() {
        let mut agent = Agent::new(Options::default());
        let object = plain_object(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "method");
        assert_eq!(get_method(&mut agent, object.into_value(), key), Ok(None));
        define_value(&mut agent, object, "method", Value::Null);
        assert_eq!(get_method(&mut agent, object.into_value(), key), Ok(None));
        let method = host_function(&mut agent, "method", |_, _, _, _| Ok(Value::Undefined));
        define_value(&mut agent, object, "method", method.into_value());
        assert_eq!(
            get_method(&mut agent, object.into_value(), key),
            Ok(Some(method))
        );
    }

    #[test]
    fn get_method_messages() {
        let mut agent = Agent::new(Options::default());
        let object = plain_object(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "method");
        let nested = plain_object(&mut agent);
        let text = Value::from_str(&mut agent, "hi");
        let cases = [
            (Value::from(42), "number 42 is not callable"),
            (text, "string hi is not callable"),
            (Value::Boolean(true), "boolean true is not callable"),
            (nested.into_value(), "object is not callable"),
        ];
        for (value, message) in cases {
            define_value(&mut agent, object, "method", value);
            let error = get_method(&mut agent, object.into_value(), key).unwrap_err();
            assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
            assert_eq!(error.message(&agent).as_deref(), Some(message));
        }
    }

    #[test]
    fn get_v_looks_up_on_the_primitive_prototype() {
        let mut agent = Agent::new(Options::default());
        let text = Value::from_str(&mut agent, "abc");
        let length = PropertyKey::from_str(&mut agent, "length");
        assert_eq!(get_v(&mut agent, text, length), Ok(Value::from(3)));
        assert!(get_v(&mut agent, Value::Undefined, length).is_err());
        let to_string = PropertyKey::from_str(&mut agent, "toString");
        let method = get_v(&mut agent, Value::from(1), to_string).unwrap();
        assert!(is_callable(&agent, method));
    }

    #[test]
    fn call_passes_this_and_arguments() {
        let mut agent = Agent::new(Options::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = seen.clone();
        let f = host_function(&mut agent, "f", move |_, this, arguments, _| {
            record.borrow_mut().push(this);
            record.borrow_mut().extend(arguments.iter().copied());
            Ok(Value::from(arguments.len() as u32))
        });
        let arguments = [Value::from(1), Value::Null];
        assert_eq!(
            call(
                &mut agent,
                f.into_value(),
                Value::Boolean(true),
                Some(ArgumentsList::new(&arguments))
            ),
            Ok(Value::from(2))
        );
        assert_eq!(
            *seen.borrow(),
            [Value::Boolean(true), Value::from(1), Value::Null]
        );

        let error = call(&mut agent, Value::from(1), Value::Undefined, None).unwrap_err();
        assert_eq!(
            error.message(&agent).as_deref(),
            Some("number 1 is not a function")
        );
        let object = plain_object(&mut agent).into_value();
        let error = call(&mut agent, object, Value::Undefined, None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn construct_defaults_new_target() {
        let mut agent = Agent::new(Options::default());
        let seen_new_target = Rc::new(RefCell::new(None));
        let record = seen_new_target.clone();
        let c = host_constructor(&mut agent, "C", move |agent, _, _, new_target| {
            *record.borrow_mut() = new_target;
            Ok(plain_object(agent).into_value())
        });
        construct(&mut agent, c, None, None).unwrap();
        assert_eq!(*seen_new_target.borrow(), Some(c.into_object()));

        let f = host_function(&mut agent, "f", |_, _, _, _| Ok(Value::Undefined));
        let error = construct(&mut agent, f, None, None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn invoke_uses_the_value_as_this() {
        let mut agent = Agent::new(Options::default());
        let object = plain_object(&mut agent);
        let method = host_function(&mut agent, "method", |_, this, _, _| Ok(this));
        define_value(&mut agent, object, "method", method.into_value());
        let key = PropertyKey::from_str(&mut agent, "method");
        assert_eq!(
            invoke(&mut agent, object.into_value(), key, None),
            Ok(object.into_value())
        );
        let missing = PropertyKey::from_str(&mut agent, "missing");
        let error = invoke(&mut agent, object.into_value(), missing, None).unwrap_err();
        assert_eq!(
            error.message(&agent).as_deref(),
            Some("undefined is not a function")
        );
    }

    #[test]
    fn property_helpers() {
        let mut agent = Agent::new(Options::default());
        let object = plain_object(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "hidden");
        create_non_enumerable_data_property_or_throw(&mut agent, object, key, Value::from(1))
            .unwrap();
        let desc = object
            .internal_get_own_property(&mut agent, key)
            .unwrap()
            .unwrap();
        assert_eq!(desc.enumerable, Some(false));
        assert_eq!(desc.writable, Some(true));
        assert!(has_own_property(&mut agent, object, key).unwrap());

        delete_property_or_throw(&mut agent, object, key).unwrap();
        assert!(!has_own_property(&mut agent, object, key).unwrap());

        let to_string = PropertyKey::from_str(&mut agent, "toString");
        assert!(has_property(&mut agent, object, to_string).unwrap());
        assert!(!has_own_property(&mut agent, object, to_string).unwrap());

        let fixed = PropertyKey::from_str(&mut agent, "fixed");
        define_property_or_throw(
            &mut agent,
            object,
            fixed,
            PropertyDescriptor {
                value: Some(Value::Null),
                configurable: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        let error = delete_property_or_throw(&mut agent, object, fixed).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        assert!(create_data_property_or_throw(&mut agent, object, fixed, Value::from(1)).is_err());
        assert_eq!(
            create_data_property(&mut agent, object, fixed, Value::from(1)),
            Ok(false)
        );
    }

    #[test]
    fn arrays_from_lists() {
        let mut agent = Agent::new(Options::default());
        let symbol = Symbol::new(&mut agent, None).into_value();
        let array = create_array_from_list(&mut agent, &[Value::from(1), symbol]).unwrap();
        assert_eq!(is_array(&mut agent, array.into_value()), Ok(true));
        assert_eq!(length_of_array_like(&mut agent, array), Ok(2));
        let second = PropertyKey::from_array_index(&mut agent, 1);
        assert_eq!(get(&mut agent, array, second), Ok(symbol));

        let object = plain_object(&mut agent);
        assert_eq!(length_of_array_like(&mut agent, object), Ok(0));
        define_value(&mut agent, object, "length", Value::from(Number::from(-3)));
        assert_eq!(length_of_array_like(&mut agent, object), Ok(0));
        define_value(&mut agent, object, "length", Value::from(2.7));
        assert_eq!(length_of_array_like(&mut agent, object), Ok(2));
    }
}
