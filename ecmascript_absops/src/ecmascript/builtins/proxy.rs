// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.5 Proxy Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots)
//!
//! Handler traps are not consulted: every internal method of a live proxy
//! behaves as if the handler had no trap for it, forwarding to the target.
//! The handler is only checked to be an object, and a proxy otherwise differs
//! from its target in whether it is callable or a constructor.

use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType, JsResult},
        types::{Object, ObjectHeapData, ObjectKind, Value},
    },
    heap::CreateHeapData,
};

#[derive(Debug, Clone, Copy)]
pub struct ProxyHeapData {
    /// \[\[ProxyTarget]], null once revoked.
    pub(crate) target: Option<Object>,
    /// The proxy has a \[\[Call]] internal method.
    pub(crate) callable: bool,
    /// The proxy has a \[\[Construct]] internal method.
    pub(crate) constructor: bool,
}

/// ### [10.5.14 ValidateNonRevokedProxy ( proxy )](https://tc39.es/ecma262/#sec-validatenonrevokedproxy)
///
/// Returns the \[\[ProxyTarget]] of a proxy that has not been revoked.
pub(crate) fn proxy_target(agent: &mut Agent, proxy: Object) -> JsResult<Object> {
    let ObjectKind::Proxy(data) = agent[proxy].kind else {
        unreachable!("proxy_target called on a non-proxy object");
    };
    // 1. If proxy.[[ProxyTarget]] is null, throw a TypeError exception.
    let Some(target) = data.target else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot perform operation on a revoked proxy",
        ));
    };
    // 3. Return unused.
    Ok(target)
}

/// ### [10.5.15 ProxyCreate ( target, handler )](https://tc39.es/ecma262/#sec-proxycreate)
///
/// The abstract operation ProxyCreate takes arguments target (an ECMAScript
/// language value) and handler (an ECMAScript language value) and returns
/// either a normal completion containing a Proxy exotic object or a throw
/// completion. It is used to specify the creation of new Proxy objects.
pub fn proxy_create(agent: &mut Agent, target: Value, handler: Value) -> JsResult<Object> {
    // 1. If target is not an Object, throw a TypeError exception.
    let Ok(target) = Object::try_from(target) else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Proxy target must be an object",
        ));
    };
    // 2. If handler is not an Object, throw a TypeError exception.
    if !matches!(handler, Value::Object(_)) {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Proxy handler must be an object",
        ));
    }
    // 4. Set P's essential internal methods, except for [[Call]] and
    //    [[Construct]], to the definitions specified in 10.5.
    // 5. If IsCallable(target) is true, then
    //    a. Set P.[[Call]] as specified in 10.5.12.
    //    b. If IsConstructor(target) is true, then
    //       i. Set P.[[Construct]] as specified in 10.5.13.
    let callable = target.is_callable(agent);
    let constructor = callable && target.is_constructor(agent);
    // 3. Let P be MakeBasicObject(« [[ProxyHandler]], [[ProxyTarget]] »).
    // 6. Set P.[[ProxyTarget]] to target.
    let data = ObjectHeapData {
        extensible: true,
        prototype: None,
        properties: Default::default(),
        kind: ObjectKind::Proxy(ProxyHeapData {
            target: Some(target),
            callable,
            constructor,
        }),
    };
    // 8. Return P.
    Ok(agent.heap.create(data))
}

/// ### [28.2.2.1.1 Proxy Revocation Functions](https://tc39.es/ecma262/#sec-proxy-revocation-functions)
///
/// Revokes `proxy`; revoking twice or revoking a non-proxy does nothing.
pub fn proxy_revoke(agent: &mut Agent, proxy: Object) {
    // 3. Set F.[[RevocableProxy]] to null.
    // 4. Assert: p is a Proxy exotic object.
    if let ObjectKind::Proxy(data) = &mut agent[proxy].kind {
        // 5. Set p.[[ProxyTarget]] to null.
        data.target = None;
    }
    // 7. Return undefined.
}

#[cfg(test)]
mod test {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::ecmascript::{
        abstract_operations::{
            operations_on_objects::{get, set},
            test_hooks::{define_value, host_function},
        },
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{Options, ProtoIntrinsics},
        types::{IntoValue, PropertyKey},
    };

    fn new_object(agent: &mut Agent) -> Object {
        ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object), None)
    }

    #[test]
    fn proxies_forward_to_their_target() {
        let mut agent = Agent::new(Options::default());
        let target = new_object(&mut agent);
        let handler = new_object(&mut agent);
        let proxy =
            proxy_create(&mut agent, target.into_value(), handler.into_value()).unwrap();
        let key = PropertyKey::from_str(&mut agent, "x");
        set(&mut agent, proxy, key, Value::from(1), true).unwrap();
        assert_eq!(get(&mut agent, target, key), Ok(Value::from(1)));
        assert_eq!(get(&mut agent, proxy, key), Ok(Value::from(1)));
        let object_prototype = agent.current_realm().intrinsics().object_prototype();
        assert_eq!(
            proxy.internal_get_prototype_of(&mut agent),
            Ok(Some(object_prototype))
        );
        assert!(!proxy.is_callable(&agent));
    }

    #[test]
    fn revoked_proxies_throw() {
        let mut agent = Agent::new(Options::default());
        let target = new_object(&mut agent);
        let handler = new_object(&mut agent);
        let proxy =
            proxy_create(&mut agent, target.into_value(), handler.into_value()).unwrap();
        proxy_revoke(&mut agent, proxy);
        let key = PropertyKey::from_str(&mut agent, "x");
        let error = get(&mut agent, proxy, key).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        assert_eq!(
            error.message(&agent).as_deref(),
            Some("Cannot perform operation on a revoked proxy")
        );
    }

    #[test]
    fn proxy_requires_objects() {
        let mut agent = Agent::new(Options::default());
        let target = new_object(&mut agent);
        let error = proxy_create(&mut agent, target.into_value(), Value::Null).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        let error = proxy_create(&mut agent, Value::from(1), target.into_value()).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn function_proxies_are_callable() {
        let mut agent = Agent::new(Options::default());
        let handler = new_object(&mut agent);
        let throw_type_error = agent.current_realm().intrinsics().throw_type_error();
        let proxy = proxy_create(
            &mut agent,
            throw_type_error.into_value(),
            handler.into_value(),
        )
        .unwrap();
        assert!(proxy.is_callable(&agent));
        assert!(!proxy.is_constructor(&agent));
    }

    #[test]
    fn handler_traps_are_not_consulted() {
        let mut agent = Agent::new(Options::default());
        let target = new_object(&mut agent);
        let handler = new_object(&mut agent);
        let calls = Rc::new(Cell::new(0));
        let trap = {
            let calls = calls.clone();
            host_function(&mut agent, "get", move |_, _, _, _| {
                calls.set(calls.get() + 1);
                Ok(Value::from(2))
            })
        };
        define_value(&mut agent, handler, "get", trap.into_value());
        define_value(&mut agent, target, "x", Value::from(1));
        let proxy =
            proxy_create(&mut agent, target.into_value(), handler.into_value()).unwrap();
        let key = PropertyKey::from_str(&mut agent, "x");
        assert_eq!(get(&mut agent, proxy, key), Ok(Value::from(1)));
        assert_eq!(calls.get(), 0);
    }
}
