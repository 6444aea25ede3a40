// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::BuiltinFunctionBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, ExceptionType, JsResult},
    types::{IntoObject, PropertyKey, Value},
};

pub(crate) struct FunctionPrototype;
impl Builtin for FunctionPrototype {
    const NAME: &'static str = "";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(Self::behaviour);
}

impl FunctionPrototype {
    /// ### [20.2.3 Properties of the Function Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-function-prototype-object)
    ///
    /// Accepts any arguments and returns undefined when invoked.
    fn behaviour(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::Undefined)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        ThrowTypeError::create_intrinsic(agent);

        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let throw_type_error = intrinsics.throw_type_error();
        let this = intrinsics.function_prototype();

        let caller = PropertyKey::from_str(agent, "caller");
        let arguments = PropertyKey::from_str(agent, "arguments");
        BuiltinFunctionBuilder::new_intrinsic_function::<FunctionPrototype>(agent, this)
            .with_prototype(Some(object_prototype))
            .with_property_capacity(2)
            // 10.2.4 AddRestrictedFunctionProperties ( F, realm )
            .with_accessor_property(caller, Some(throw_type_error), Some(throw_type_error))
            .with_accessor_property(arguments, Some(throw_type_error), Some(throw_type_error))
            .build();
    }
}

struct ThrowTypeError;
impl Builtin for ThrowTypeError {
    const NAME: &'static str = "";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(Self::behaviour);
}

impl ThrowTypeError {
    /// ### [10.2.4.1 %ThrowTypeError% ( )](https://tc39.es/ecma262/#sec-%throwtypeerror%)
    fn behaviour(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Throw a TypeError exception.
        Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "'caller', 'callee', and 'arguments' properties may not be accessed on strict mode functions or the arguments objects for calls to them",
        ))
    }

    fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().throw_type_error();
        // The value of the [[Extensible]] internal slot of this function is false.
        let throw_type_error =
            BuiltinFunctionBuilder::new_intrinsic_function::<ThrowTypeError>(agent, this.into())
                .with_extensible(false)
                .build()
                .into_object();
        // The "length" and "name" properties of this function have the
        // attributes { [[Writable]]: false, [[Enumerable]]: false,
        // [[Configurable]]: false }.
        for key in ["length", "name"] {
            let key = PropertyKey::from_str(agent, key);
            if let Some(entry) = agent[throw_type_error].properties.get_mut(key) {
                entry.configurable = false;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, get},
            testing_and_comparison::{is_callable, is_constructor, is_extensible},
        },
        execution::Options,
        types::{Function, IntoValue},
    };

    #[test]
    fn function_prototype_is_callable() {
        let mut agent = Agent::new(Options::default());
        let intrinsics = agent.current_realm().intrinsics();
        let function_prototype = intrinsics.function_prototype();
        let object_prototype = intrinsics.object_prototype();
        assert!(is_callable(&agent, function_prototype.into_value()));
        assert!(!is_constructor(&agent, function_prototype.into_value()));
        assert_eq!(agent[function_prototype].prototype, Some(object_prototype));
        let f = Function::from_value(&agent, function_prototype.into_value()).unwrap();
        let arguments = [Value::from(1)];
        assert_eq!(
            call_function(&mut agent, f, Value::Null, Some(ArgumentsList::new(&arguments))),
            Ok(Value::Undefined)
        );
    }

    #[test]
    fn restricted_properties_throw() {
        let mut agent = Agent::new(Options::default());
        let function_prototype = agent.current_realm().intrinsics().function_prototype();
        let caller = PropertyKey::from_str(&mut agent, "caller");
        let error = get(&mut agent, function_prototype, caller).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn throw_type_error_is_frozen() {
        let mut agent = Agent::new(Options::default());
        let throw_type_error = agent.current_realm().intrinsics().throw_type_error();
        assert_eq!(
            is_extensible(&mut agent, throw_type_error.into_object()),
            Ok(false)
        );
        let length = PropertyKey::from_str(&mut agent, "length");
        let descriptor = throw_type_error
            .into_object()
            .internal_get_own_property(&mut agent, length)
            .unwrap()
            .unwrap();
        assert_eq!(descriptor.configurable, Some(false));
        assert_eq!(descriptor.value, Some(Value::from(0)));
        let error = call_function(&mut agent, throw_type_error, Value::Undefined, None)
            .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }
}
