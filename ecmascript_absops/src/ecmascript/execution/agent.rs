// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{ProtoIntrinsics, Realm, realm::initialize_intrinsics};
use crate::{
    Heap,
    ecmascript::{
        builtins::create_error_object,
        types::{ObjectKind, String, Value},
    },
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Always take the general path in operations that have a shortcut for
    /// common inputs.
    pub disable_fast_paths: bool,
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown ECMAScript value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// The kind of the thrown Error object, if an Error object was thrown.
    pub fn exception_type(self, agent: &Agent) -> Option<ExceptionType> {
        let Value::Object(object) = self.0 else {
            return None;
        };
        match &agent[object].kind {
            ObjectKind::Error(data) => Some(data.kind),
            _ => None,
        }
    }

    /// The message the thrown Error object was created with.
    pub fn message(self, agent: &Agent) -> Option<std::string::String> {
        let Value::Object(object) = self.0 else {
            return None;
        };
        match &agent[object].kind {
            ObjectKind::Error(data) => data
                .message
                .map(|message| message.to_string_lossy(agent).into_owned()),
            _ => None,
        }
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    pub(crate) realm: Realm,
}

impl Agent {
    /// Creates an agent with all intrinsic objects initialized.
    pub fn new(options: Options) -> Self {
        let mut agent = Self {
            heap: Heap::new(),
            options,
            realm: Realm::default(),
        };
        initialize_intrinsics(&mut agent);
        agent
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn current_realm(&self) -> &Realm {
        &self.realm
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception_with_static_message(
        &mut self,
        kind: ExceptionType,
        message: &'static str,
    ) -> JsError {
        let message = String::from_str(self, message);
        self.throw(kind, message)
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception(&mut self, kind: ExceptionType, message: std::string::String) -> JsError {
        let message = String::from_string(self, message);
        self.throw(kind, message)
    }

    fn throw(&mut self, kind: ExceptionType, message: String) -> JsError {
        log::debug!(
            "throwing {}: {}",
            kind.name(),
            message.to_string_lossy(self)
        );
        let error = create_error_object(self, kind, Some(message));
        JsError::new(Value::Object(error))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    AggregateError,
    EvalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    UriError,
}

impl ExceptionType {
    /// The value of the `name` property on the prototype of this kind of
    /// Error.
    pub const fn name(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::AggregateError => "AggregateError",
            ExceptionType::EvalError => "EvalError",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::ReferenceError => "ReferenceError",
            ExceptionType::SyntaxError => "SyntaxError",
            ExceptionType::TypeError => "TypeError",
            ExceptionType::UriError => "URIError",
        }
    }
}

impl From<ExceptionType> for ProtoIntrinsics {
    fn from(value: ExceptionType) -> Self {
        match value {
            ExceptionType::Error => ProtoIntrinsics::Error,
            ExceptionType::AggregateError => ProtoIntrinsics::AggregateError,
            ExceptionType::EvalError => ProtoIntrinsics::EvalError,
            ExceptionType::RangeError => ProtoIntrinsics::RangeError,
            ExceptionType::ReferenceError => ProtoIntrinsics::ReferenceError,
            ExceptionType::SyntaxError => ProtoIntrinsics::SyntaxError,
            ExceptionType::TypeError => ProtoIntrinsics::TypeError,
            ExceptionType::UriError => ProtoIntrinsics::UriError,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn thrown_errors_carry_kind_and_message() {
        let mut agent = Agent::new(Options::default());
        let error = agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert undefined or null to object",
        );
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        assert_eq!(
            error.message(&agent).as_deref(),
            Some("Cannot convert undefined or null to object")
        );
        let Value::Object(object) = error.value() else {
            panic!("Expected an Error object");
        };
        assert_eq!(
            agent[object].prototype,
            Some(
                agent
                    .current_realm()
                    .intrinsics()
                    .type_error_prototype()
            )
        );
    }

    #[test]
    fn thrown_primitives_have_no_kind() {
        let agent = Agent::new(Options::default());
        let error = JsError::new(Value::from(3));
        assert_eq!(error.exception_type(&agent), None);
        assert_eq!(error.message(&agent), None);
        assert_eq!(error.value(), Value::from(3));
    }
}
