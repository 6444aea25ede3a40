// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoObject, IntoValue, Object, ObjectKind, Value};
use crate::ecmascript::{
    builtins::{ArgumentsList, builtin_call, builtin_construct, proxy_target},
    execution::{Agent, JsResult},
};

/// ### [Function object](https://tc39.es/ecma262/#function-object)
///
/// An object that supports the \[\[Call]] internal method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Function(pub(crate) Object);

impl Function {
    /// Returns the value as a Function if it is callable.
    pub fn from_value(agent: &Agent, value: Value) -> Option<Function> {
        match value {
            Value::Object(object) if object.is_callable(agent) => Some(Function(object)),
            _ => None,
        }
    }

    pub fn is_constructor(self, agent: &Agent) -> bool {
        self.0.is_constructor(agent)
    }

    /// ### [\[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#table-additional-essential-internal-methods-of-function-objects)
    pub fn internal_call(
        self,
        agent: &mut Agent,
        this_argument: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        log::trace!("[[Call]] {:?}", self.0);
        match &agent[self.0].kind {
            ObjectKind::BuiltinFunction(_) => builtin_call(agent, self, this_argument, arguments_list),
            ObjectKind::Proxy(_) => {
                let target = proxy_target(agent, self.0)?;
                Function(target).internal_call(agent, this_argument, arguments_list)
            }
            _ => unreachable!("Function handle to a non-callable object"),
        }
    }

    /// ### [\[\[Construct\]\] ( argumentsList, newTarget )](https://tc39.es/ecma262/#table-additional-essential-internal-methods-of-function-objects)
    pub fn internal_construct(
        self,
        agent: &mut Agent,
        arguments_list: ArgumentsList,
        new_target: Function,
    ) -> JsResult<Object> {
        log::trace!("[[Construct]] {:?}", self.0);
        debug_assert!(self.is_constructor(agent));
        match &agent[self.0].kind {
            ObjectKind::BuiltinFunction(_) => {
                builtin_construct(agent, self, arguments_list, new_target)
            }
            ObjectKind::Proxy(_) => {
                let target = proxy_target(agent, self.0)?;
                Function(target).internal_construct(agent, arguments_list, new_target)
            }
            _ => unreachable!("Function handle to a non-callable object"),
        }
    }
}

impl IntoObject for Function {
    fn into_object(self) -> Object {
        self.0
    }
}

impl IntoValue for Function {
    fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        value.0
    }
}
