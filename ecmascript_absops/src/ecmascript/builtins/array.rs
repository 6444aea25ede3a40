// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.4.2 Array Exotic Objects](https://tc39.es/ecma262/#sec-array-exotic-objects)
//!
//! Arrays keep their `length` as an ordinary own data property; the exotic
//! \[\[DefineOwnProperty]] keeps it in sync with the array indexes.

use super::{
    ArgumentsList, Behaviour, Builtin,
    ordinary::{
        get_prototype_from_constructor, ordinary_define_own_property, ordinary_delete,
        ordinary_object_create_with_intrinsics,
    },
};
use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::{create_data_property_or_throw, set},
        testing_and_comparison::is_array,
        type_conversion::{to_number, to_uint32},
    },
    builders::{BuiltinFunctionBuilder, OrdinaryObjectBuilder},
    execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
    types::{
        Function, IntoValue, Object, ObjectKind, PropertyDescriptor, PropertyEntry, PropertyKey,
        PropertyValue, Value,
    },
};

const MAX_ARRAY_LENGTH: u64 = u32::MAX as u64;

/// ### [10.4.2.1 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-array-exotic-objects-defineownproperty-p-desc)
pub(crate) fn array_define_own_property(
    agent: &mut Agent,
    a: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    let length_key = PropertyKey::from_str(agent, "length");
    // 1. If P is "length", then
    if property_key == length_key {
        // a. Return ? ArraySetLength(A, Desc).
        return array_set_length(agent, a, length_key, descriptor);
    }
    // 2. Else if P is an array index, then
    if let Some(index) = property_key.as_array_index(agent) {
        // a. Let lengthDesc be OrdinaryGetOwnProperty(A, "length").
        // b. Assert: lengthDesc is not undefined.
        // c. Assert: IsDataDescriptor(lengthDesc) is true.
        // d. Assert: lengthDesc.[[Configurable]] is false.
        let (length, length_writable) = array_length(agent, a, length_key);
        // e. Let length be lengthDesc.[[Value]].
        // f. Assert: length is a non-negative integral Number.
        // g. Let index be ! ToUint32(P).
        // h. If index ≥ length and lengthDesc.[[Writable]] is false, return false.
        if index >= length && !length_writable {
            return Ok(false);
        }
        // i. Let succeeded be ! OrdinaryDefineOwnProperty(A, P, Desc).
        // j. If succeeded is false, return false.
        if !ordinary_define_own_property(agent, a, property_key, descriptor) {
            return Ok(false);
        }
        // k. If index ≥ length, then
        if index >= length {
            // i. Set lengthDesc.[[Value]] to index + 1𝔽.
            // ii. Set succeeded to ! OrdinaryDefineOwnProperty(A, "length", lengthDesc).
            // iii. Assert: succeeded is true.
            set_array_length(agent, a, length_key, index + 1);
        }
        // l. Return true.
        return Ok(true);
    }
    // 3. Return ! OrdinaryDefineOwnProperty(A, P, Desc).
    Ok(ordinary_define_own_property(
        agent,
        a,
        property_key,
        descriptor,
    ))
}

/// Reads the `length` data property every Array carries.
fn array_length(agent: &Agent, a: Object, length_key: PropertyKey) -> (u32, bool) {
    match agent[a].properties.get(length_key).map(|entry| entry.value) {
        Some(PropertyValue::Data {
            value: Value::Number(length),
            writable,
        }) => (length.into_f64() as u32, writable),
        _ => unreachable!("Array without a length data property"),
    }
}

fn set_array_length(agent: &mut Agent, a: Object, length_key: PropertyKey, length: u32) {
    if let Some(entry) = agent[a].properties.get_mut(length_key)
        && let PropertyValue::Data { value, .. } = &mut entry.value
    {
        *value = Value::from(length);
    }
}

/// ### [10.4.2.2 ArrayCreate ( length \[ , proto \] )](https://tc39.es/ecma262/#sec-arraycreate)
///
/// The abstract operation ArrayCreate takes argument length (a non-negative
/// integer) and optional argument proto (an Object) and returns either a
/// normal completion containing an Array exotic object or a throw completion.
/// It is used to specify the creation of new Arrays.
pub fn array_create(agent: &mut Agent, length: u64, proto: Option<Object>) -> JsResult<Object> {
    // 1. If length > 2**32 - 1, throw a RangeError exception.
    if length > MAX_ARRAY_LENGTH {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::RangeError,
            "Invalid array length",
        ));
    }
    // 2. If proto is not present, set proto to %Array.prototype%.
    // 3. Let A be MakeBasicObject(« [[Prototype]], [[Extensible]] »).
    // 4. Set A.[[Prototype]] to proto.
    // 5. Set A.[[DefineOwnProperty]] as specified in 10.4.2.1.
    let a = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Array), proto);
    // 6. Perform ! OrdinaryDefineOwnProperty(A, "length", PropertyDescriptor { [[Value]]: 𝔽(length), [[Writable]]: true, [[Enumerable]]: false, [[Configurable]]: false }).
    let length_key = PropertyKey::from_str(agent, "length");
    set_array_length(agent, a, length_key, length as u32);
    // 7. Return A.
    Ok(a)
}

/// ### [10.4.2.4 ArraySetLength ( A, Desc )](https://tc39.es/ecma262/#sec-arraysetlength)
///
/// The abstract operation ArraySetLength takes arguments A (an Array) and
/// Desc (a Property Descriptor) and returns either a normal completion
/// containing a Boolean or a throw completion.
fn array_set_length(
    agent: &mut Agent,
    a: Object,
    length_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. If Desc does not have a [[Value]] field, then
    let Some(descriptor_value) = descriptor.value else {
        // a. Return ! OrdinaryDefineOwnProperty(A, "length", Desc).
        return Ok(ordinary_define_own_property(
            agent, a, length_key, descriptor,
        ));
    };
    // 2. Let newLenDesc be a copy of Desc.
    let mut new_len_descriptor = descriptor;
    // 3. Let newLen be ? ToUint32(Desc.[[Value]]).
    let new_len = to_uint32(agent, descriptor_value)?;
    // 4. Let numberLen be ? ToNumber(Desc.[[Value]]).
    let number_len = to_number(agent, descriptor_value)?;
    // 5. If SameValueZero(newLen, numberLen) is false, throw a RangeError exception.
    if f64::from(new_len) != number_len.into_f64() {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::RangeError,
            "Invalid array length",
        ));
    }
    // 6. Set newLenDesc.[[Value]] to newLen.
    new_len_descriptor.value = Some(Value::from(new_len));
    // 7. Let oldLenDesc be OrdinaryGetOwnProperty(A, "length").
    // 8. Assert: oldLenDesc is not undefined.
    // 9. Assert: IsDataDescriptor(oldLenDesc) is true.
    // 10. Let oldLen be oldLenDesc.[[Value]].
    let (old_len, old_len_writable) = array_length(agent, a, length_key);
    // 11. If newLen ≥ oldLen, then
    if new_len >= old_len {
        // a. Return ! OrdinaryDefineOwnProperty(A, "length", newLenDesc).
        return Ok(ordinary_define_own_property(
            agent,
            a,
            length_key,
            new_len_descriptor,
        ));
    }
    // 12. If oldLenDesc.[[Writable]] is false, return false.
    if !old_len_writable {
        return Ok(false);
    }
    // 13. If newLenDesc does not have a [[Writable]] field or newLenDesc.[[Writable]] is true, then
    //     a. Let newWritable be true.
    // 14. Else,
    //     a. NOTE: Setting the [[Writable]] attribute to false is deferred in
    //        case any elements cannot be deleted.
    //     b. Let newWritable be false.
    //     c. Set newLenDesc.[[Writable]] to true.
    let new_writable = new_len_descriptor.writable != Some(false);
    new_len_descriptor.writable = Some(true);
    // 15. Let succeeded be ! OrdinaryDefineOwnProperty(A, "length", newLenDesc).
    // 16. If succeeded is false, return false.
    if !ordinary_define_own_property(agent, a, length_key, new_len_descriptor) {
        return Ok(false);
    }
    // 17. For each own property key P of A such that P is an array index and
    //     ! ToUint32(P) ≥ newLen, in descending numeric index order, do
    let mut indexes = agent[a]
        .properties
        .iter()
        .filter_map(|entry| {
            entry
                .key
                .as_array_index(agent)
                .filter(|index| *index >= new_len)
                .map(|index| (index, entry.key))
        })
        .collect::<Vec<_>>();
    indexes.sort_unstable_by(|(x, _), (y, _)| y.cmp(x));
    for (index, key) in indexes {
        // a. Let deleteSucceeded be ! A.[[Delete]](P).
        let delete_succeeded = ordinary_delete(agent, a, key)?;
        // b. If deleteSucceeded is false, then
        if !delete_succeeded {
            // i. Set newLenDesc.[[Value]] to ! ToUint32(P) + 1𝔽.
            set_array_length(agent, a, length_key, index + 1);
            // ii. If newWritable is false, set newLenDesc.[[Writable]] to false.
            // iii. Perform ! OrdinaryDefineOwnProperty(A, "length", newLenDesc).
            if !new_writable {
                freeze_array_length(agent, a, length_key);
            }
            // iv. Return false.
            return Ok(false);
        }
    }
    // 18. If newWritable is false, then
    if !new_writable {
        // a. Set succeeded to ! OrdinaryDefineOwnProperty(A, "length", PropertyDescriptor { [[Writable]]: false }).
        // b. Assert: succeeded is true.
        freeze_array_length(agent, a, length_key);
    }
    // 19. Return true.
    Ok(true)
}

fn freeze_array_length(agent: &mut Agent, a: Object, length_key: PropertyKey) {
    let succeeded = ordinary_define_own_property(
        agent,
        a,
        length_key,
        PropertyDescriptor {
            writable: Some(false),
            ..Default::default()
        },
    );
    debug_assert!(succeeded);
}

pub(crate) struct ArrayConstructor;

impl Builtin for ArrayConstructor {
    const NAME: &'static str = "Array";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(ArrayConstructor::constructor);
}

struct ArrayIsArray;
impl Builtin for ArrayIsArray {
    const NAME: &'static str = "isArray";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayConstructor::is_array);
}

impl ArrayConstructor {
    /// ### [23.1.1.1 Array ( ...values )](https://tc39.es/ecma262/#sec-array)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is undefined, let newTarget be the active function object; else let newTarget be NewTarget.
        let new_target = match new_target {
            Some(new_target) => Function(new_target),
            None => agent.current_realm().intrinsics().array(),
        };
        // 2. Let proto be ? GetPrototypeFromConstructor(newTarget, "%Array.prototype%").
        let proto = get_prototype_from_constructor(agent, new_target, ProtoIntrinsics::Array)?;
        // 3. Let numberOfArgs be the number of elements in values.
        // 4. If numberOfArgs = 0, then
        if arguments.is_empty() {
            // a. Return ! ArrayCreate(0, proto).
            return Ok(array_create(agent, 0, Some(proto))?.into_value());
        }
        // 5. Else if numberOfArgs = 1, then
        if arguments.len() == 1 {
            // a. Let len be values[0].
            let len = arguments.get(0);
            // b. Let array be ! ArrayCreate(0, proto).
            let array = array_create(agent, 0, Some(proto))?;
            // c. If len is not a Number, then
            let int_len = if let Value::Number(number) = len {
                // d. Else,
                // i. Let intLen be ! ToUint32(len).
                let int_len = number.to_uint32();
                // ii. If SameValueZero(intLen, len) is false, throw a RangeError exception.
                if f64::from(int_len) != number.into_f64() {
                    return Err(agent.throw_exception_with_static_message(
                        ExceptionType::RangeError,
                        "Invalid array length",
                    ));
                }
                int_len
            } else {
                // i. Perform ! CreateDataPropertyOrThrow(array, "0", len).
                let zero = PropertyKey::from_array_index(agent, 0);
                create_data_property_or_throw(agent, array, zero, len)?;
                // ii. Let intLen be 1𝔽.
                1
            };
            // e. Perform ! Set(array, "length", intLen, true).
            let length_key = PropertyKey::from_str(agent, "length");
            set(agent, array, length_key, Value::from(int_len), true)?;
            // f. Return array.
            return Ok(array.into_value());
        }
        // 6. Else,
        // a. Assert: numberOfArgs ≥ 2.
        // b. Let array be ? ArrayCreate(numberOfArgs, proto).
        let array = array_create(agent, arguments.len() as u64, Some(proto))?;
        // c. Let k be 0.
        // d. Repeat, while k < numberOfArgs,
        for (k, item_k) in arguments.iter().enumerate() {
            // i. Let Pk be ! ToString(𝔽(k)).
            let pk = PropertyKey::from_array_index(agent, k as u32);
            // ii. Let itemK be values[k].
            // iii. Perform ! CreateDataPropertyOrThrow(array, Pk, itemK).
            create_data_property_or_throw(agent, array, pk, *item_k)?;
            // iv. Set k to k + 1.
        }
        // e. Assert: The mathematical value of array's "length" property is numberOfArgs.
        // f. Return array.
        Ok(array.into_value())
    }

    /// ### [23.1.2.2 Array.isArray ( arg )](https://tc39.es/ecma262/#sec-array.isarray)
    fn is_array(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? IsArray(arg).
        is_array(agent, arguments.get(0)).map(Value::Boolean)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let array_prototype = intrinsics.array_prototype();
        let this = intrinsics.array();

        let prototype_key = PropertyKey::from_str(agent, "prototype");
        BuiltinFunctionBuilder::new_intrinsic_function::<ArrayConstructor>(
            agent,
            this.into(),
        )
        .with_property_capacity(2)
        .with_builtin_function_property::<ArrayIsArray>()
        .with_frozen_property(prototype_key, array_prototype.into_value())
        .build();

        // ### [23.1.3 Properties of the Array Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-array-prototype-object)
        let length_key = PropertyKey::from_str(agent, "length");
        let constructor_key = PropertyKey::from_str(agent, "constructor");
        let array_prototype = OrdinaryObjectBuilder::new_intrinsic_object(agent, array_prototype)
            .with_property_capacity(1)
            .with_prototype(object_prototype)
            .with_kind(ObjectKind::Array)
            .with_data_property(constructor_key, this.into_value())
            .build();
        // The length is appended last so that the builder keeps its
        // capacity check.
        agent[array_prototype].properties.set(PropertyEntry::new_data(
            length_key,
            Value::from(0),
            true,
            false,
            false,
        ));
    }
}
