// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)

use super::{ArgumentsList, Behaviour, Builtin, ordinary::ordinary_object_create_with_intrinsics};
use crate::ecmascript::{
    abstract_operations::{operations_on_objects::get, type_conversion::to_string},
    builders::OrdinaryObjectBuilder,
    execution::{Agent, ExceptionType, JsResult},
    types::{IntoValue, Object, ObjectKind, PropertyEntry, PropertyKey, String, Value},
};

#[derive(Debug, Clone, Copy)]
pub struct ErrorHeapData {
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
}

impl ErrorHeapData {
    pub(crate) fn new(kind: ExceptionType, message: Option<String>) -> Self {
        Self { kind, message }
    }
}

/// Creates an Error object of the given kind with an own `message`
/// property when a message is given.
pub(crate) fn create_error_object(
    agent: &mut Agent,
    kind: ExceptionType,
    message: Option<String>,
) -> Object {
    let object = ordinary_object_create_with_intrinsics(agent, Some(kind.into()), None);
    if let ObjectKind::Error(data) = &mut agent[object].kind {
        data.message = message;
    }
    if let Some(message) = message {
        // 3. If message is not undefined, then
        //    a. Let msg be ? ToString(message).
        //    b. Perform CreateNonEnumerableDataPropertyOrThrow(O, "message", msg).
        let key = PropertyKey::from_str(agent, "message");
        agent[object].properties.set(PropertyEntry::new_data(
            key,
            message.into_value(),
            true,
            false,
            true,
        ));
    }
    object
}

pub(crate) struct ErrorPrototype;

struct ErrorPrototypeToString;
impl Builtin for ErrorPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ErrorPrototype::to_string);
}

impl ErrorPrototype {
    /// ### [20.5.3.4 Error.prototype.toString ( )](https://tc39.es/ecma262/#sec-error.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. If O is not an Object, throw a TypeError exception.
        let Ok(o) = Object::try_from(this_value) else {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "'this' is not an object",
            ));
        };
        // 3. Let name be ? Get(O, "name").
        let key = PropertyKey::from_str(agent, "name");
        let name = get(agent, o, key)?;
        // 4. If name is undefined, set name to "Error"; otherwise set name to ? ToString(name).
        let name = if name.is_undefined() {
            String::from_str(agent, "Error")
        } else {
            to_string(agent, name)?
        };
        // 5. Let msg be ? Get(O, "message").
        let key = PropertyKey::from_str(agent, "message");
        let msg = get(agent, o, key)?;
        // 6. If msg is undefined, set msg to the empty String; otherwise set msg to ? ToString(msg).
        let msg = if msg.is_undefined() {
            String::EMPTY_STRING
        } else {
            to_string(agent, msg)?
        };
        if name.is_empty() {
            // 7. If name is the empty String, return msg.
            Ok(msg.into_value())
        } else if msg.is_empty() {
            // 8. If msg is the empty String, return name.
            Ok(name.into_value())
        } else {
            // 9. Return the string-concatenation of name, the code unit
            //    0x003A (COLON), the code unit 0x0020 (SPACE), and msg.
            let mut code_units = name.code_units(agent);
            code_units.extend_from_slice(&[0x3A, 0x20]);
            code_units.extend(msg.code_units(agent));
            Ok(String::from_code_units(agent, &code_units).into_value())
        }
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.error_prototype();
        let native_errors = [
            (intrinsics.aggregate_error_prototype(), ExceptionType::AggregateError),
            (intrinsics.eval_error_prototype(), ExceptionType::EvalError),
            (intrinsics.range_error_prototype(), ExceptionType::RangeError),
            (intrinsics.reference_error_prototype(), ExceptionType::ReferenceError),
            (intrinsics.syntax_error_prototype(), ExceptionType::SyntaxError),
            (intrinsics.type_error_prototype(), ExceptionType::TypeError),
            (intrinsics.uri_error_prototype(), ExceptionType::UriError),
        ];

        let message_key = PropertyKey::from_str(agent, "message");
        let name_key = PropertyKey::from_str(agent, "name");
        let error_name = Value::from_str(agent, ExceptionType::Error.name());
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(3)
            .with_prototype(object_prototype)
            .with_data_property(message_key, String::EMPTY_STRING.into_value())
            .with_data_property(name_key, error_name)
            .with_builtin_function_property::<ErrorPrototypeToString>()
            .build();

        // ### [20.5.6.3 Properties of the NativeError Prototype Objects](https://tc39.es/ecma262/#sec-properties-of-the-nativeerror-prototype-objects)
        for (prototype, kind) in native_errors {
            let name = Value::from_str(agent, kind.name());
            OrdinaryObjectBuilder::new_intrinsic_object(agent, prototype)
                .with_property_capacity(2)
                .with_prototype(this)
                .with_data_property(message_key, String::EMPTY_STRING.into_value())
                .with_data_property(name_key, name)
                .build();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, get, set},
        execution::Options,
        types::Function,
    };

    fn error_to_string(agent: &mut Agent, this: Value) -> JsResult<Value> {
        let key = PropertyKey::from_str(agent, "toString");
        let error_prototype = agent.current_realm().intrinsics().error_prototype();
        let to_string = get(agent, error_prototype, key)?;
        let to_string = Function::from_value(agent, to_string).unwrap();
        call_function(agent, to_string, this, None)
    }

    #[test]
    fn errors_inherit_their_name() {
        let mut agent = Agent::new(Options::default());
        let message = String::from_str(&mut agent, "out of range");
        let error = create_error_object(&mut agent, ExceptionType::RangeError, Some(message));
        let result = error_to_string(&mut agent, error.into_value()).unwrap();
        let expected = Value::from_str(&mut agent, "RangeError: out of range");
        assert_eq!(result, expected);

        let uri_error = create_error_object(&mut agent, ExceptionType::UriError, None);
        let result = error_to_string(&mut agent, uri_error.into_value()).unwrap();
        let expected = Value::from_str(&mut agent, "URIError");
        assert_eq!(result, expected);
    }

    #[test]
    fn empty_name_returns_message() {
        let mut agent = Agent::new(Options::default());
        let message = String::from_str(&mut agent, "bare");
        let error = create_error_object(&mut agent, ExceptionType::Error, Some(message));
        let name = PropertyKey::from_str(&mut agent, "name");
        set(&mut agent, error, name, String::EMPTY_STRING.into_value(), true).unwrap();
        let result = error_to_string(&mut agent, error.into_value()).unwrap();
        assert_eq!(result, message.into_value());
    }

    #[test]
    fn to_string_requires_an_object() {
        let mut agent = Agent::new(Options::default());
        let error = error_to_string(&mut agent, Value::from(1)).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }
}
