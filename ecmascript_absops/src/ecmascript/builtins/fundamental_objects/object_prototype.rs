// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{get, has_own_property},
            testing_and_comparison::is_array,
            type_conversion::{to_object, to_property_key},
        },
        builders::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
        execution::{Agent, JsResult},
        types::{IntoValue, ObjectKind, String, Value},
    },
    heap::heap_constants::WellKnownSymbolIndexes,
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeHasOwnProperty;
impl Builtin for ObjectPrototypeHasOwnProperty {
    const NAME: &'static str = "hasOwnProperty";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::has_own_property);
}

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.2 Object.prototype.hasOwnProperty ( V )](https://tc39.es/ecma262/#sec-object.prototype.hasownproperty)
    fn has_own_property(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let P be ? ToPropertyKey(V).
        let p = to_property_key(agent, arguments.get(0))?;
        // 2. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 3. Return ? HasOwnProperty(O, P).
        has_own_property(agent, o, p).map(Value::Boolean)
    }

    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        match this_value {
            // 1. If the this value is undefined, return "[object Undefined]".
            Value::Undefined => return Ok(Value::from_str(agent, "[object Undefined]")),
            // 2. If the this value is null, return "[object Null]".
            Value::Null => return Ok(Value::from_str(agent, "[object Null]")),
            _ => {}
        }
        // 3. Let O be ! ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 4. Let isArray be ? IsArray(O).
        let builtin_tag = if is_array(agent, o.into_value())? {
            // 5. If isArray is true, let builtinTag be "Array".
            "Array"
        } else if o.is_callable(agent) {
            // 7. Else if O has a [[Call]] internal method, let builtinTag be "Function".
            "Function"
        } else {
            match &agent[o].kind {
                // 8. Else if O has an [[ErrorData]] internal slot, let builtinTag be "Error".
                ObjectKind::Error(_) => "Error",
                // 9. Else if O has a [[BooleanData]] internal slot, let builtinTag be "Boolean".
                ObjectKind::PrimitiveObject(PrimitiveObjectData::Boolean(_)) => "Boolean",
                // 10. Else if O has a [[NumberData]] internal slot, let builtinTag be "Number".
                ObjectKind::PrimitiveObject(PrimitiveObjectData::Number(_)) => "Number",
                // 11. Else if O has a [[StringData]] internal slot, let builtinTag be "String".
                ObjectKind::PrimitiveObject(PrimitiveObjectData::String(_)) => "String",
                // 13. Else if O has a [[RegExpMatcher]] internal slot, let builtinTag be "RegExp".
                ObjectKind::RegExp(_) => "RegExp",
                // 14. Else, let builtinTag be "Object".
                _ => "Object",
            }
        };
        // 15. Let tag be ? Get(O, %Symbol.toStringTag%).
        let tag = get(agent, o, WellKnownSymbolIndexes::ToStringTag.into())?;
        // 16. If tag is not a String, set tag to builtinTag.
        let tag = match String::try_from(tag) {
            Ok(tag) => tag.to_string_lossy(agent).into_owned(),
            Err(_) => builtin_tag.to_owned(),
        };
        // 17. Return the string-concatenation of "[object ", tag, and "]".
        Ok(Value::from_string(agent, format!("[object {tag}]")))
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        to_object(agent, this_value).map(IntoValue::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().object_prototype();

        // The Object prototype object has a [[Prototype]] internal slot whose
        // value is null.
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(3)
            .with_builtin_function_property::<ObjectPrototypeHasOwnProperty>()
            .with_builtin_function_property::<ObjectPrototypeToString>()
            .with_builtin_function_property::<ObjectPrototypeValueOf>()
            .build();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{
            call_function, create_data_property_or_throw, invoke,
        },
        builtins::{
            array_create, create_error_object, ordinary::ordinary_object_create_with_intrinsics,
            reg_exp_create,
        },
        execution::{ExceptionType, Options, ProtoIntrinsics},
        types::{BigInt, Function, PropertyKey},
    };

    fn object_to_string(agent: &mut Agent, value: Value) -> std::string::String {
        let object_prototype = agent.current_realm().intrinsics().object_prototype();
        let key = PropertyKey::from_str(agent, "toString");
        let to_string = get(agent, object_prototype, key).unwrap();
        let to_string = Function::from_value(agent, to_string).unwrap();
        let result = call_function(agent, to_string, value, None).unwrap();
        let Value::String(result) = result else {
            panic!("Expected a String");
        };
        result.to_string_lossy(agent).into_owned()
    }

    #[test]
    fn builtin_tags() {
        let mut agent = Agent::new(Options::default());
        assert_eq!(object_to_string(&mut agent, Value::Undefined), "[object Undefined]");
        assert_eq!(object_to_string(&mut agent, Value::Null), "[object Null]");
        assert_eq!(object_to_string(&mut agent, Value::from(1)), "[object Number]");
        assert_eq!(object_to_string(&mut agent, Value::Boolean(false)), "[object Boolean]");
        let text = Value::from_str(&mut agent, "text");
        assert_eq!(object_to_string(&mut agent, text), "[object String]");
        let array = array_create(&mut agent, 0, None).unwrap();
        assert_eq!(
            object_to_string(&mut agent, array.into_value()),
            "[object Array]"
        );
        let error = create_error_object(&mut agent, ExceptionType::TypeError, None);
        assert_eq!(
            object_to_string(&mut agent, error.into_value()),
            "[object Error]"
        );
        let regexp = reg_exp_create(&mut agent, Value::Undefined, Value::Undefined).unwrap();
        assert_eq!(
            object_to_string(&mut agent, regexp.into_value()),
            "[object RegExp]"
        );
        let function_prototype = agent.current_realm().intrinsics().function_prototype();
        assert_eq!(
            object_to_string(&mut agent, function_prototype.into_value()),
            "[object Function]"
        );
        let object =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object), None);
        assert_eq!(
            object_to_string(&mut agent, object.into_value()),
            "[object Object]"
        );
    }

    #[test]
    fn to_string_tag_overrides_builtin_tag() {
        let mut agent = Agent::new(Options::default());
        let big_int = Value::BigInt(BigInt::from_i64(1));
        assert_eq!(object_to_string(&mut agent, big_int), "[object BigInt]");
        let object =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object), None);
        let tag = Value::from_str(&mut agent, "Custom");
        create_data_property_or_throw(
            &mut agent,
            object,
            WellKnownSymbolIndexes::ToStringTag.into(),
            tag,
        )
        .unwrap();
        assert_eq!(
            object_to_string(&mut agent, object.into_value()),
            "[object Custom]"
        );
    }

    #[test]
    fn has_own_property_ignores_the_prototype_chain() {
        let mut agent = Agent::new(Options::default());
        let object =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object), None);
        let key = PropertyKey::from_str(&mut agent, "own");
        create_data_property_or_throw(&mut agent, object, key, Value::Null).unwrap();
        let has_own_property = PropertyKey::from_str(&mut agent, "hasOwnProperty");
        let own = Value::from_str(&mut agent, "own");
        let arguments = [own];
        assert_eq!(
            invoke(
                &mut agent,
                object.into_value(),
                has_own_property,
                Some(ArgumentsList::new(&arguments))
            ),
            Ok(Value::Boolean(true))
        );
        let inherited = Value::from_str(&mut agent, "toString");
        let arguments = [inherited];
        assert_eq!(
            invoke(
                &mut agent,
                object.into_value(),
                has_own_property,
                Some(ArgumentsList::new(&arguments))
            ),
            Ok(Value::Boolean(false))
        );
    }
}
