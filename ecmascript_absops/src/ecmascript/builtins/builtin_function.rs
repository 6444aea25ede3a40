// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{ops::Deref, rc::Rc};

use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
        types::{
            Function, IntoObject, Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey,
            String, Value,
        },
    },
    heap::CreateHeapData,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn =
    fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;
/// Host defined behaviour. Receives `Some(new_target)` when invoked through
/// \[\[Construct]].
pub type HostFn = Rc<dyn Fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>>;

#[derive(Clone)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
    Host { closure: HostFn, constructor: bool },
}

impl Behaviour {
    pub(crate) fn is_constructor(&self) -> bool {
        match self {
            Behaviour::Regular(_) => false,
            Behaviour::Constructor(_) => true,
            Behaviour::Host { constructor, .. } => *constructor,
        }
    }
}

impl std::fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behaviour::Regular(_) => f.write_str("Regular"),
            Behaviour::Constructor(_) => f.write_str("Constructor"),
            Behaviour::Host { constructor, .. } => f
                .debug_struct("Host")
                .field("constructor", constructor)
                .finish_non_exhaustive(),
        }
    }
}

pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// Set to Some if this builtin's property key is different from `NAME`.
    const KEY: Option<PropertyKey> = None;

    /// If the builtin function is created as a property then this controls the
    /// property's `[[Writable]]` value.
    const WRITABLE: bool = true;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Enumerable]]` value.
    const ENUMERABLE: bool = false;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Configurable]]` value.
    const CONFIGURABLE: bool = true;
}

/// A builtin installed as the \[\[Get]] of an accessor property. Its `NAME`
/// is the function name, e.g. "get source", and the property key defaults to
/// the name without the "get " prefix.
pub trait BuiltinGetter: Builtin {}

#[derive(Debug)]
pub struct BuiltinFunctionHeapData {
    pub(crate) behaviour: Behaviour,
}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs {
    pub length: u32,
    pub name: &'static str,
    pub prototype: Option<Object>,
    pub prefix: Option<&'static str>,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u32, name: &'static str) -> Self {
        Self {
            length,
            name,
            ..Default::default()
        }
    }
}

/// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
pub(crate) fn builtin_call(
    agent: &mut Agent,
    f: Function,
    this_argument: Value,
    arguments_list: ArgumentsList,
) -> JsResult<Value> {
    // 1. Return ? BuiltinCallOrConstruct(F, thisArgument, argumentsList, undefined).
    builtin_call_or_construct(agent, f, Some(this_argument), arguments_list, None)
}

/// ### [10.3.2 \[\[Construct\]\] ( argumentsList, newTarget )](https://tc39.es/ecma262/#sec-built-in-function-objects-construct-argumentslist-newtarget)
pub(crate) fn builtin_construct(
    agent: &mut Agent,
    f: Function,
    arguments_list: ArgumentsList,
    new_target: Function,
) -> JsResult<Object> {
    // 1. Return ? BuiltinCallOrConstruct(F, uninitialized, argumentsList, newTarget).
    let result = builtin_call_or_construct(agent, f, None, arguments_list, Some(new_target))?;
    match result {
        Value::Object(object) => Ok(object),
        _ => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Constructor did not return an object",
        )),
    }
}

/// ### [10.3.3 BuiltinCallOrConstruct ( F, thisArgument, argumentsList, newTarget )](https://tc39.es/ecma262/#sec-builtincallorconstruct)
fn builtin_call_or_construct(
    agent: &mut Agent,
    f: Function,
    this_argument: Option<Value>,
    arguments_list: ArgumentsList,
    new_target: Option<Function>,
) -> JsResult<Value> {
    let ObjectKind::BuiltinFunction(data) = &agent[f.into_object()].kind else {
        unreachable!("BuiltinCallOrConstruct on a non-builtin function");
    };
    let behaviour = data.behaviour.clone();
    // 10. Let result be the Completion Record that is the result of evaluating
    //     F in a manner that conforms to the specification of F. If
    //     thisArgument is uninitialized, the this value is uninitialized;
    //     otherwise, thisArgument provides the this value. argumentsList
    //     provides the named parameters. newTarget provides the NewTarget value.
    let this_argument = this_argument.unwrap_or(Value::Undefined);
    let new_target = new_target.map(|target| target.into_object());
    match behaviour {
        Behaviour::Regular(func) => {
            if new_target.is_some() {
                Err(agent.throw_exception_with_static_message(
                    ExceptionType::TypeError,
                    "Not a constructor",
                ))
            } else {
                func(agent, this_argument, arguments_list)
            }
        }
        Behaviour::Constructor(func) => func(agent, this_argument, arguments_list, new_target),
        Behaviour::Host { closure, .. } => closure(agent, this_argument, arguments_list, new_target),
    }
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// The abstract operation CreateBuiltinFunction takes arguments behaviour (an
/// Abstract Closure, a set of algorithm steps, or some other definition of a
/// function's behaviour provided in this specification), length (a
/// non-negative integer or +∞), name (a property key or a Private Name), and
/// additionalInternalSlotsList (a List of names of internal slots) and
/// optional arguments realm (a Realm Record), prototype (an Object or null),
/// and prefix (a String) and returns a function object.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> Function {
    // 2. If prototype is not present, set prototype to realm.[[Intrinsics]].[[%Function.prototype%]].
    let prototype = args.prototype.unwrap_or_else(|| {
        agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(ProtoIntrinsics::Function)
    });

    // 11. If prefix is not present, then
    //     a. Perform SetFunctionName(func, name).
    // 12. Else,
    //     a. Perform SetFunctionName(func, name, prefix).
    let initial_name = match args.prefix {
        Some(prefix) => String::from_string(agent, format!("{} {}", prefix, args.name)),
        None => String::from_str(agent, args.name),
    };

    // 5. Let func be a new built-in function object that, when called,
    //    performs the action described by behaviour using the provided
    //    arguments as the values of the corresponding parameters specified by
    //    behaviour.
    // 6. Set func.[[Prototype]] to prototype.
    // 7. Set func.[[Extensible]] to true.
    let mut data = ObjectHeapData::new(
        Some(prototype),
        ObjectKind::BuiltinFunction(BuiltinFunctionHeapData { behaviour }),
    );
    // 10. Perform SetFunctionLength(func, length).
    let length_key = PropertyKey::from_str(agent, "length");
    data.properties.set(PropertyEntry::new_data(
        length_key,
        Value::from(args.length),
        false,
        false,
        true,
    ));
    let name_key = PropertyKey::from_str(agent, "name");
    data.properties.set(PropertyEntry::new_data(
        name_key,
        Value::String(initial_name),
        false,
        false,
        true,
    ));
    // 13. Return func.
    Function(agent.heap.create(data))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, construct, get},
        execution::Options,
    };

    #[test]
    fn create_builtin_function_defines_length_and_name() {
        let mut agent = Agent::new(Options::default());
        fn noop(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
            Ok(Value::Undefined)
        }
        let f = create_builtin_function(
            &mut agent,
            Behaviour::Regular(noop),
            BuiltinFunctionArgs::new(2, "noop"),
        );
        let length = PropertyKey::from_str(&mut agent, "length");
        let name = PropertyKey::from_str(&mut agent, "name");
        assert_eq!(get(&mut agent, f.into_object(), length), Ok(Value::from(2)));
        let noop_name = Value::from_str(&mut agent, "noop");
        assert_eq!(get(&mut agent, f.into_object(), name), Ok(noop_name));
        assert!(!f.is_constructor(&agent));
        assert_eq!(
            agent[f.into_object()].prototype,
            Some(agent.current_realm().intrinsics().function_prototype())
        );
    }

    #[test]
    fn host_closures_see_new_target() {
        let mut agent = Agent::new(Options::default());
        let closure: HostFn = Rc::new(
            |_: &mut Agent, _: Value, args: ArgumentsList, new_target: Option<Object>| {
                match new_target {
                    Some(new_target) => Ok(new_target.into()),
                    None => Ok(Value::from(args.len() as u32)),
                }
            },
        );
        let f = create_builtin_function(
            &mut agent,
            Behaviour::Host {
                closure,
                constructor: true,
            },
            BuiltinFunctionArgs::new(0, "Host"),
        );
        assert!(f.is_constructor(&agent));
        let arguments = [Value::Null, Value::Null];
        let called = call_function(
            &mut agent,
            f,
            Value::Undefined,
            Some(ArgumentsList::new(&arguments)),
        );
        assert_eq!(called, Ok(Value::from(2)));
        let constructed = construct(&mut agent, f, None, None).unwrap();
        assert_eq!(constructed, f.into_object());
    }

    #[test]
    fn construct_requires_an_object_result() {
        let mut agent = Agent::new(Options::default());
        fn returns_primitive(
            _: &mut Agent,
            _: Value,
            _: ArgumentsList,
            _: Option<Object>,
        ) -> JsResult<Value> {
            Ok(Value::from(1))
        }
        let f = create_builtin_function(
            &mut agent,
            Behaviour::Constructor(returns_primitive),
            BuiltinFunctionArgs::new(0, "Primitive"),
        );
        let error = construct(&mut agent, f, None, None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }
}
