// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{ErrorHeapData, RegExpHeapData};
use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, create_data_property, get},
            testing_and_comparison::same_value,
        },
        execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
        types::{
            Function, IntoObject, Object, ObjectHeapData, ObjectKind, PropertyDescriptor,
            PropertyEntry, PropertyKey, PropertyValue, Value,
        },
    },
    heap::CreateHeapData,
};

/// ### [10.1.1.1 OrdinaryGetPrototypeOf ( O )](https://tc39.es/ecma262/#sec-ordinarygetprototypeof)
pub(crate) fn ordinary_get_prototype_of(agent: &Agent, object: Object) -> Option<Object> {
    // 1. Return O.[[Prototype]].
    agent[object].prototype
}

/// ### [10.1.2.1 OrdinarySetPrototypeOf ( O, V )](https://tc39.es/ecma262/#sec-ordinarysetprototypeof)
pub(crate) fn ordinary_set_prototype_of(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
) -> bool {
    // 1. Let current be O.[[Prototype]].
    let current = agent[object].prototype;

    // 2. If SameValue(V, current) is true, return true.
    if prototype == current {
        return true;
    }

    // 3. Let extensible be O.[[Extensible]].
    // 4. If extensible is false, return false.
    if !agent[object].extensible {
        return false;
    }

    // 5. Let p be V.
    let mut p = prototype;
    // 6. Let done be false.
    // 7. Repeat, while done is false,
    // a. If p is null, then
    //    i. Set done to true.
    while let Some(p_inner) = p {
        // b. Else if SameValue(p, O) is true, then
        if p_inner == object {
            // i. Return false.
            return false;
        }
        // c. Else,
        // i. If p.[[GetPrototypeOf]] is not the ordinary object internal
        //    method defined in 10.1.1, set done to true.
        if matches!(agent[p_inner].kind, ObjectKind::Proxy(_)) {
            break;
        }
        // ii. Else, set p to p.[[Prototype]].
        p = agent[p_inner].prototype;
    }

    // 8. Set O.[[Prototype]] to V.
    agent[object].prototype = prototype;

    // 9. Return true.
    true
}

/// ### [10.1.3.1 OrdinaryIsExtensible ( O )](https://tc39.es/ecma262/#sec-ordinaryisextensible)
pub(crate) fn ordinary_is_extensible(agent: &Agent, object: Object) -> bool {
    // 1. Return O.[[Extensible]].
    agent[object].extensible
}

/// ### [10.1.4.1 OrdinaryPreventExtensions ( O )](https://tc39.es/ecma262/#sec-ordinarypreventextensions)
pub(crate) fn ordinary_prevent_extensions(agent: &mut Agent, object: Object) -> bool {
    // 1. Set O.[[Extensible]] to false.
    agent[object].extensible = false;

    // 2. Return true.
    true
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: Object,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2. Let D be a newly created Property Descriptor with no fields.
    // 3. Let X be O's own property whose key is P.
    // 4. If X is a data property, then
    //    a. Set D.[[Value]] to the value of X's [[Value]] attribute.
    //    b. Set D.[[Writable]] to the value of X's [[Writable]] attribute.
    // 5. Else,
    //    a. Assert: X is an accessor property.
    //    b. Set D.[[Get]] to the value of X's [[Get]] attribute.
    //    c. Set D.[[Set]] to the value of X's [[Set]] attribute.
    // 6. Set D.[[Enumerable]] to the value of X's [[Enumerable]] attribute.
    // 7. Set D.[[Configurable]] to the value of X's [[Configurable]] attribute.
    // 8. Return D.
    agent[object]
        .properties
        .get(property_key)
        .map(|entry| entry.to_property_descriptor())
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    // Note: OrdinaryDefineOwnProperty is only reached by objects whose
    // [[GetOwnProperty]] for P is the ordinary one, so neither step can call
    // into JavaScript.
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = ordinary_get_own_property(agent, object, property_key);

    // 2. Let extensible be ? IsExtensible(O).
    let extensible = agent[object].extensible;

    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    validate_and_apply_property_descriptor(
        agent,
        Some(object),
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// ### [10.1.6.2 IsCompatiblePropertyDescriptor ( Extensible, Desc, Current )](https://tc39.es/ecma262/#sec-iscompatiblepropertydescriptor)
pub(crate) fn is_compatible_property_descriptor(
    agent: &mut Agent,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 1. Return ValidateAndApplyPropertyDescriptor(undefined, "", Extensible, Desc, Current).
    let property_key = PropertyKey::String(crate::ecmascript::types::String::EMPTY_STRING);
    validate_and_apply_property_descriptor(
        agent,
        None,
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// Builds the stored form of a property from a fully populated descriptor.
fn property_entry(
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
    enumerable: bool,
    configurable: bool,
) -> PropertyEntry {
    let value = if descriptor.is_accessor_descriptor() {
        PropertyValue::Accessor {
            get: descriptor.get.unwrap_or(None),
            set: descriptor.set.unwrap_or(None),
        }
    } else {
        PropertyValue::Data {
            value: descriptor.value.unwrap_or(Value::Undefined),
            writable: descriptor.writable.unwrap_or(false),
        }
    };
    PropertyEntry {
        key: property_key,
        value,
        enumerable,
        configurable,
    }
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
pub(crate) fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    object: Option<Object>,
    property_key: PropertyKey,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 1. Assert: IsPropertyKey(P) is true.

    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }

        // b. If O is undefined, return true.
        let Some(object) = object else {
            return true;
        };

        // c. If IsAccessorDescriptor(Desc) is true, then
        //    i. Create an own accessor property named P of object O whose
        //       [[Get]], [[Set]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field in
        //       Desc if Desc has that field, or to the attribute's default
        //       value otherwise.
        // d. Else,
        //    i. Create an own data property named P of object O whose
        //       [[Value]], [[Writable]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field in
        //       Desc if Desc has that field, or to the attribute's default
        //       value otherwise.
        let entry = property_entry(
            property_key,
            descriptor,
            descriptor.enumerable.unwrap_or(false),
            descriptor.configurable.unwrap_or(false),
        );
        agent[object].properties.set(entry);

        // e. Return true.
        return true;
    };

    // 3. Assert: current is a fully populated Property Descriptor.
    debug_assert!(current.is_fully_populated());
    let current_configurable = current.configurable.unwrap_or(false);
    let current_enumerable = current.enumerable.unwrap_or(false);

    // 4. If Desc does not have any fields, return true.
    if !descriptor.has_fields() {
        return true;
    }

    // 5. If current.[[Configurable]] is false, then
    if !current_configurable {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]] is true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }

        // b. If Desc has an [[Enumerable]] field and SameValue(Desc.[[Enumerable]], current.[[Enumerable]])
        //    is false, return false.
        if descriptor.enumerable.is_some() && descriptor.enumerable != current.enumerable {
            return false;
        }

        // c. If IsGenericDescriptor(Desc) is false and SameValue(IsAccessorDescriptor(Desc), IsAccessorDescriptor(current))
        //    is false, return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }

        // d. If IsAccessorDescriptor(current) is true, then
        if current.is_accessor_descriptor() {
            // i. If Desc has a [[Get]] field and SameValue(Desc.[[Get]], current.[[Get]]) is false,
            //    return false.
            if descriptor.get.is_some() && descriptor.get != current.get {
                return false;
            }

            // ii. If Desc has a [[Set]] field and SameValue(Desc.[[Set]], current.[[Set]]) is
            //     false, return false.
            if descriptor.set.is_some() && descriptor.set != current.set {
                return false;
            }
        }
        // e. Else if current.[[Writable]] is false, then
        else if current.writable == Some(false) {
            // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is true, return false.
            if descriptor.writable == Some(true) {
                return false;
            }

            // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]], current.[[Value]])
            //     is false, return false.
            if let Some(desc_value) = descriptor.value {
                let current_value = current.value.unwrap_or(Value::Undefined);
                if !same_value(agent, desc_value, current_value) {
                    return false;
                }
            }
        }
    }

    // 6. If O is not undefined, then
    if let Some(object) = object {
        // a. If IsDataDescriptor(current) is true and IsAccessorDescriptor(Desc) is true, then
        // b. Else if IsAccessorDescriptor(current) is true and IsDataDescriptor(Desc) is true, then
        //    i. If Desc has a [[Configurable]] field, let configurable be
        //       Desc.[[Configurable]]; else let configurable be
        //       current.[[Configurable]].
        //    ii. If Desc has a [[Enumerable]] field, let enumerable be
        //        Desc.[[Enumerable]]; else let enumerable be
        //        current.[[Enumerable]].
        //    iii. Replace the property named P of object O with a property of
        //         the other kind whose [[Configurable]] and [[Enumerable]]
        //         attributes are set to configurable and enumerable,
        //         respectively, and whose remaining attributes are set to the
        //         value of the corresponding field in Desc if Desc has that
        //         field, or to the attribute's default value otherwise.
        let configurable = descriptor.configurable.unwrap_or(current_configurable);
        let enumerable = descriptor.enumerable.unwrap_or(current_enumerable);
        let kind_changes = (current.is_data_descriptor() && descriptor.is_accessor_descriptor())
            || (current.is_accessor_descriptor() && descriptor.is_data_descriptor());
        let entry = if kind_changes {
            property_entry(property_key, descriptor, enumerable, configurable)
        } else {
            // c. Else,
            //    i. For each field of Desc, set the corresponding attribute of
            //       the property named P of object O to the value of the field.
            let merged = PropertyDescriptor {
                value: descriptor.value.or(current.value),
                writable: descriptor.writable.or(current.writable),
                get: descriptor.get.or(current.get),
                set: descriptor.set.or(current.set),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            };
            property_entry(property_key, merged, enumerable, configurable)
        };
        agent[object].properties.set(entry);
    }

    // 7. Return true.
    true
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    let has_own = object.internal_get_own_property(agent, property_key)?;

    // 2. If hasOwn is not undefined, return true.
    if has_own.is_some() {
        return Ok(true);
    }

    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    let parent = object.internal_get_prototype_of(agent)?;

    // 4. If parent is not null, then
    if let Some(parent) = parent {
        // a. Return ? parent.[[HasProperty]](P).
        return parent.internal_has_property(agent, property_key);
    }

    // 5. Return false.
    Ok(false)
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = object.internal_get_own_property(agent, property_key)? else {
        // 2. If desc is undefined, then

        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let Some(parent) = object.internal_get_prototype_of(agent)? else {
            // b. If parent is null, return undefined.
            return Ok(Value::Undefined);
        };

        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };

    // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
    if let Some(value) = descriptor.value {
        debug_assert!(descriptor.is_data_descriptor());
        return Ok(value);
    }

    // 4. Assert: IsAccessorDescriptor(desc) is true.
    debug_assert!(descriptor.is_accessor_descriptor());

    // 5. Let getter be desc.[[Get]].
    // 6. If getter is undefined, return undefined.
    let Some(Some(getter)) = descriptor.get else {
        return Ok(Value::Undefined);
    };

    // 7. Return ? Call(getter, Receiver).
    call_function(agent, getter, receiver, None)
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    let own_descriptor = object.internal_get_own_property(agent, property_key)?;

    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    ordinary_set_with_own_descriptor(agent, object, property_key, value, receiver, own_descriptor)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_descriptor: Option<PropertyDescriptor>,
) -> JsResult<bool> {
    let own_descriptor = if let Some(own_descriptor) = own_descriptor {
        own_descriptor
    } else {
        // 1. If ownDesc is undefined, then
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let parent = object.internal_get_prototype_of(agent)?;

        // b. If parent is not null, then
        if let Some(parent) = parent {
            // i. Return ? parent.[[Set]](P, V, Receiver).
            return parent.internal_set(agent, property_key, value, receiver);
        }
        // c. Else,
        // i. Set ownDesc to the PropertyDescriptor {
        //   [[Value]]: undefined,
        //   [[Writable]]: true,
        //   [[Enumerable]]: true,
        //   [[Configurable]]: true
        // }.
        PropertyDescriptor::new_data_descriptor(Value::Undefined)
    };

    // 2. If IsDataDescriptor(ownDesc) is true, then
    if own_descriptor.is_data_descriptor() {
        // a. If ownDesc.[[Writable]] is false, return false.
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }

        // b. If Receiver is not an Object, return false.
        let Value::Object(receiver) = receiver else {
            return Ok(false);
        };

        // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
        let existing_descriptor = receiver.internal_get_own_property(agent, property_key)?;

        // d. If existingDescriptor is not undefined, then
        if let Some(existing_descriptor) = existing_descriptor {
            // i. If IsAccessorDescriptor(existingDescriptor) is true, return false.
            if existing_descriptor.is_accessor_descriptor() {
                return Ok(false);
            }

            // ii. If existingDescriptor.[[Writable]] is false, return false.
            if existing_descriptor.writable == Some(false) {
                return Ok(false);
            }

            // iii. Let valueDesc be the PropertyDescriptor { [[Value]]: V }.
            let value_descriptor = PropertyDescriptor {
                value: Some(value),
                ..Default::default()
            };

            // iv. Return ? Receiver.[[DefineOwnProperty]](P, valueDesc).
            return receiver.internal_define_own_property(agent, property_key, value_descriptor);
        }
        // e. Else,
        // i. Assert: Receiver does not currently have a property P.
        // ii. Return ? CreateDataProperty(Receiver, P, V).
        return create_data_property(agent, receiver, property_key, value);
    }

    // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
    debug_assert!(own_descriptor.is_accessor_descriptor());

    // 4. Let setter be ownDesc.[[Set]].
    // 5. If setter is undefined, return false.
    let Some(Some(setter)) = own_descriptor.set else {
        return Ok(false);
    };

    // 6. Perform ? Call(setter, Receiver, « V »).
    call_function(
        agent,
        setter,
        receiver,
        Some(super::ArgumentsList::new(&[value])),
    )?;

    // 7. Return true.
    Ok(true)
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let descriptor = object.internal_get_own_property(agent, property_key)?;

    // 2. If desc is undefined, return true.
    let Some(descriptor) = descriptor else {
        return Ok(true);
    };

    // 3. If desc.[[Configurable]] is true, then
    if descriptor.configurable == Some(true) {
        // a. Remove the own property with name P from O.
        agent[object].properties.remove(property_key);

        // b. Return true.
        return Ok(true);
    }

    // 4. Return false.
    Ok(false)
}

fn error_kind(kind: ExceptionType) -> ObjectKind {
    ObjectKind::Error(ErrorHeapData::new(kind, None))
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
///
/// Creates an object whose internal slots match `proto_intrinsics`: Arrays,
/// Errors and RegExps get their exotic behaviour or slots, every other kind
/// starts out ordinary. The prototype defaults to the intrinsic one when no
/// explicit `prototype` is given. Without `proto_intrinsics` the object is
/// ordinary and `prototype` is used as is.
pub fn ordinary_object_create_with_intrinsics(
    agent: &mut Agent,
    proto_intrinsics: Option<ProtoIntrinsics>,
    prototype: Option<Object>,
) -> Object {
    let Some(proto_intrinsics) = proto_intrinsics else {
        return agent
            .heap
            .create(ObjectHeapData::new(prototype, ObjectKind::Ordinary));
    };

    let prototype = prototype.unwrap_or_else(|| {
        agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(proto_intrinsics)
    });
    let kind = match proto_intrinsics {
        ProtoIntrinsics::Array => ObjectKind::Array,
        ProtoIntrinsics::AggregateError => error_kind(ExceptionType::AggregateError),
        ProtoIntrinsics::Error => error_kind(ExceptionType::Error),
        ProtoIntrinsics::EvalError => error_kind(ExceptionType::EvalError),
        ProtoIntrinsics::RangeError => error_kind(ExceptionType::RangeError),
        ProtoIntrinsics::ReferenceError => error_kind(ExceptionType::ReferenceError),
        ProtoIntrinsics::SyntaxError => error_kind(ExceptionType::SyntaxError),
        ProtoIntrinsics::TypeError => error_kind(ExceptionType::TypeError),
        ProtoIntrinsics::UriError => error_kind(ExceptionType::UriError),
        ProtoIntrinsics::RegExp => ObjectKind::RegExp(RegExpHeapData::default()),
        // Wrapper and function slots depend on data only the caller has.
        ProtoIntrinsics::BigInt
        | ProtoIntrinsics::Boolean
        | ProtoIntrinsics::Function
        | ProtoIntrinsics::Number
        | ProtoIntrinsics::Object
        | ProtoIntrinsics::String
        | ProtoIntrinsics::Symbol => ObjectKind::Ordinary,
    };
    let is_array = matches!(kind, ObjectKind::Array);
    let object = agent.heap.create(ObjectHeapData::new(Some(prototype), kind));
    if is_array {
        // Arrays are born with their non-configurable length.
        let length = PropertyKey::from_str(agent, "length");
        agent[object].properties.set(PropertyEntry::new_data(
            length,
            Value::from(0),
            true,
            false,
            false,
        ));
    }
    object
}

/// ### [10.1.13 OrdinaryCreateFromConstructor ( constructor, intrinsicDefaultProto \[ , internalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinarycreatefromconstructor)
///
/// The abstract operation OrdinaryCreateFromConstructor takes arguments
/// constructor (a constructor) and intrinsicDefaultProto (a String) and
/// optional argument internalSlotsList (a List of names of internal slots)
/// and returns either a normal completion containing an Object or a throw
/// completion. It creates an ordinary object whose \[\[Prototype]] value is
/// retrieved from a constructor's "prototype" property, if it exists.
/// Otherwise the intrinsic named by intrinsicDefaultProto is used for
/// \[\[Prototype]].
pub fn ordinary_create_from_constructor(
    agent: &mut Agent,
    constructor: Function,
    intrinsic_default_proto: ProtoIntrinsics,
) -> JsResult<Object> {
    // 1. Assert: intrinsicDefaultProto is this specification's name of an
    //    intrinsic object. The corresponding object must be an intrinsic that
    //    is intended to be used as the [[Prototype]] value of an object.
    // 2. Let proto be ? GetPrototypeFromConstructor(constructor, intrinsicDefaultProto).
    let proto = get_prototype_from_constructor(agent, constructor, intrinsic_default_proto)?;
    // 3. If internalSlotsList is present, let slotsList be internalSlotsList.
    // 4. Else, let slotsList be a new empty List.
    // 5. Return OrdinaryObjectCreate(proto, slotsList).
    Ok(ordinary_object_create_with_intrinsics(
        agent,
        Some(intrinsic_default_proto),
        Some(proto),
    ))
}

/// ### [10.1.14 GetPrototypeFromConstructor ( constructor, intrinsicDefaultProto )](https://tc39.es/ecma262/#sec-getprototypefromconstructor)
///
/// The abstract operation GetPrototypeFromConstructor takes arguments
/// constructor (a function object) and intrinsicDefaultProto (a String) and
/// returns either a normal completion containing an Object or a throw
/// completion. It determines the \[\[Prototype]] value that should be used to
/// create an object corresponding to a specific constructor. The value is
/// retrieved from the constructor's "prototype" property, if it exists.
/// Otherwise the intrinsic named by intrinsicDefaultProto is used for
/// \[\[Prototype]].
pub fn get_prototype_from_constructor(
    agent: &mut Agent,
    constructor: Function,
    intrinsic_default_proto: ProtoIntrinsics,
) -> JsResult<Object> {
    // 1. Assert: intrinsicDefaultProto is this specification's name of an
    //    intrinsic object. The corresponding object must be an intrinsic that
    //    is intended to be used as the [[Prototype]] value of an object.
    // 2. Let proto be ? Get(constructor, "prototype").
    let prototype_key = PropertyKey::from_str(agent, "prototype");
    let proto = get(agent, constructor.into_object(), prototype_key)?;
    match proto {
        Value::Object(proto) => Ok(proto),
        // 3. If proto is not an Object, then
        //    a. Let realm be ? GetFunctionRealm(constructor).
        //    b. Set proto to realm's intrinsic object named intrinsicDefaultProto.
        _ => Ok(agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(intrinsic_default_proto)),
    }
    // 4. Return proto.
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{
            define_property_or_throw, get, has_property, set,
        },
        execution::Options,
    };

    fn new_object(agent: &mut Agent) -> Object {
        ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object), None)
    }

    #[test]
    fn prototype_cycles_are_rejected() {
        let mut agent = Agent::new(Options::default());
        let a = new_object(&mut agent);
        let b = new_object(&mut agent);
        assert!(ordinary_set_prototype_of(&mut agent, b, Some(a)));
        assert!(!ordinary_set_prototype_of(&mut agent, a, Some(b)));
        assert!(!ordinary_set_prototype_of(&mut agent, a, Some(a)));
        assert!(ordinary_prevent_extensions(&mut agent, a));
        assert!(!ordinary_set_prototype_of(&mut agent, a, None));
        let current = ordinary_get_prototype_of(&agent, a);
        assert!(ordinary_set_prototype_of(&mut agent, a, current));
    }

    #[test]
    fn non_configurable_properties_resist_redefinition() {
        let mut agent = Agent::new(Options::default());
        let object = new_object(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "x");
        let frozen = PropertyDescriptor {
            value: Some(Value::from(1)),
            writable: Some(false),
            enumerable: Some(false),
            configurable: Some(false),
            ..Default::default()
        };
        assert!(ordinary_define_own_property(&mut agent, object, key, frozen));
        // Same value is fine.
        assert!(ordinary_define_own_property(
            &mut agent,
            object,
            key,
            PropertyDescriptor {
                value: Some(Value::from(1)),
                ..Default::default()
            }
        ));
        // Different value, writable or configurable are not.
        assert!(!ordinary_define_own_property(
            &mut agent,
            object,
            key,
            PropertyDescriptor {
                value: Some(Value::from(2)),
                ..Default::default()
            }
        ));
        assert!(!ordinary_define_own_property(
            &mut agent,
            object,
            key,
            PropertyDescriptor {
                writable: Some(true),
                ..Default::default()
            }
        ));
        assert!(!ordinary_define_own_property(
            &mut agent,
            object,
            key,
            PropertyDescriptor {
                get: Some(None),
                ..Default::default()
            }
        ));
        assert_eq!(get(&mut agent, object, key), Ok(Value::from(1)));
        assert_eq!(set(&mut agent, object, key, Value::from(3), false), Ok(()));
        assert_eq!(get(&mut agent, object, key), Ok(Value::from(1)));
        assert!(set(&mut agent, object, key, Value::from(3), true).is_err());
    }

    #[test]
    fn data_property_converts_to_accessor() {
        let mut agent = Agent::new(Options::default());
        let object = new_object(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "x");
        define_property_or_throw(
            &mut agent,
            object,
            key,
            PropertyDescriptor::new_data_descriptor(Value::from(1)),
        )
        .unwrap();
        define_property_or_throw(
            &mut agent,
            object,
            key,
            PropertyDescriptor {
                get: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
        let descriptor = ordinary_get_own_property(&agent, object, key).unwrap();
        assert!(descriptor.is_accessor_descriptor());
        assert_eq!(descriptor.enumerable, Some(true));
        assert_eq!(descriptor.configurable, Some(true));
        assert_eq!(descriptor.set, Some(None));
        assert_eq!(get(&mut agent, object, key), Ok(Value::Undefined));
    }

    #[test]
    fn properties_are_inherited() {
        let mut agent = Agent::new(Options::default());
        let parent = new_object(&mut agent);
        let child =
            ordinary_object_create_with_intrinsics(&mut agent, None, Some(parent));
        let key = PropertyKey::from_str(&mut agent, "inherited");
        set(&mut agent, parent, key, Value::from(7), true).unwrap();
        assert_eq!(has_property(&mut agent, child, key), Ok(true));
        assert_eq!(get(&mut agent, child, key), Ok(Value::from(7)));
        // Setting through the child creates an own property on the child.
        set(&mut agent, child, key, Value::from(8), true).unwrap();
        assert_eq!(get(&mut agent, child, key), Ok(Value::from(8)));
        assert_eq!(get(&mut agent, parent, key), Ok(Value::from(7)));
    }

    #[test]
    fn delete_respects_configurable() {
        let mut agent = Agent::new(Options::default());
        let object = new_object(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "x");
        assert_eq!(ordinary_delete(&mut agent, object, key), Ok(true));
        set(&mut agent, object, key, Value::Null, true).unwrap();
        assert_eq!(ordinary_delete(&mut agent, object, key), Ok(true));
        assert!(ordinary_get_own_property(&agent, object, key).is_none());
        define_property_or_throw(
            &mut agent,
            object,
            key,
            PropertyDescriptor {
                value: Some(Value::Null),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(ordinary_delete(&mut agent, object, key), Ok(false));
    }
}
