// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [7 Abstract Operations](https://tc39.es/ecma262/#sec-abstract-operations)
//!
//! These operations are not a part of the ECMAScript language; they are
//! defined here solely to aid the specification of the semantics of the
//! ECMAScript language.

pub mod operations_on_objects;
pub mod testing_and_comparison;
pub mod type_conversion;

#[cfg(test)]
pub(crate) mod test_hooks {
    //! Host functions that record when user code would have run.

    use std::rc::Rc;

    use crate::ecmascript::{
        abstract_operations::operations_on_objects::create_data_property_or_throw,
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary::ordinary_object_create_with_intrinsics,
        },
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{Function, Object, PropertyKey, Value},
    };

    fn host<F>(agent: &mut Agent, name: &'static str, constructor: bool, behaviour: F) -> Function
    where
        F: Fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value> + 'static,
    {
        create_builtin_function(
            agent,
            Behaviour::Host {
                closure: Rc::new(behaviour),
                constructor,
            },
            BuiltinFunctionArgs::new(0, name),
        )
    }

    pub(crate) fn host_function<F>(agent: &mut Agent, name: &'static str, behaviour: F) -> Function
    where
        F: Fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value> + 'static,
    {
        host(agent, name, false, behaviour)
    }

    pub(crate) fn host_constructor<F>(
        agent: &mut Agent,
        name: &'static str,
        behaviour: F,
    ) -> Function
    where
        F: Fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value> + 'static,
    {
        host(agent, name, true, behaviour)
    }

    pub(crate) fn plain_object(agent: &mut Agent) -> Object {
        ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object), None)
    }

    pub(crate) fn define_value(agent: &mut Agent, object: Object, key: &str, value: Value) {
        let key = PropertyKey::from_str(agent, key);
        create_data_property_or_throw(agent, object, key, value).unwrap();
    }
}
