// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7.2 Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-object-internal-methods-and-internal-slots)
//!
//! The essential internal methods dispatch on the exotic behaviour of the
//! object. Proxies forward to their target, String and Array exotic objects
//! override the methods they redefine and everything else is ordinary.

use super::{Object, ObjectKind, PropertyKey};
use crate::ecmascript::{
    builtins::{
        PrimitiveObjectData, array_define_own_property,
        ordinary::{
            ordinary_define_own_property, ordinary_delete, ordinary_get,
            ordinary_get_own_property, ordinary_get_prototype_of, ordinary_has_property,
            ordinary_is_extensible, ordinary_prevent_extensions, ordinary_set,
            ordinary_set_prototype_of,
        },
        proxy_target, string_define_own_property, string_get_own_property,
    },
    execution::{Agent, JsResult},
    types::{PropertyDescriptor, String, Value},
};

enum Exotic {
    Ordinary,
    Array,
    String(String),
    Proxy,
}

impl Object {
    fn exotic(self, agent: &Agent) -> Exotic {
        match &agent[self].kind {
            ObjectKind::Array => Exotic::Array,
            ObjectKind::PrimitiveObject(PrimitiveObjectData::String(s)) => Exotic::String(*s),
            ObjectKind::Proxy(_) => Exotic::Proxy,
            _ => Exotic::Ordinary,
        }
    }

    /// ### \[\[GetPrototypeOf\]\] ( )
    pub fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        match self.exotic(agent) {
            Exotic::Proxy => proxy_target(agent, self)?.internal_get_prototype_of(agent),
            _ => Ok(ordinary_get_prototype_of(agent, self)),
        }
    }

    /// ### \[\[SetPrototypeOf\]\] ( V )
    pub fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => {
                proxy_target(agent, self)?.internal_set_prototype_of(agent, prototype)
            }
            _ => Ok(ordinary_set_prototype_of(agent, self, prototype)),
        }
    }

    /// ### \[\[IsExtensible\]\] ( )
    pub fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => proxy_target(agent, self)?.internal_is_extensible(agent),
            _ => Ok(ordinary_is_extensible(agent, self)),
        }
    }

    /// ### \[\[PreventExtensions\]\] ( )
    pub fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => proxy_target(agent, self)?.internal_prevent_extensions(agent),
            _ => Ok(ordinary_prevent_extensions(agent, self)),
        }
    }

    /// ### \[\[GetOwnProperty\]\] ( P )
    pub fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        match self.exotic(agent) {
            Exotic::Proxy => {
                proxy_target(agent, self)?.internal_get_own_property(agent, property_key)
            }
            // ### [10.4.3.1 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-string-exotic-objects-getownproperty-p)
            Exotic::String(string) => {
                // 1. Let desc be OrdinaryGetOwnProperty(S, P).
                // 2. If desc is not undefined, return desc.
                if let Some(descriptor) = ordinary_get_own_property(agent, self, property_key) {
                    return Ok(Some(descriptor));
                }
                // 3. Return StringGetOwnProperty(S, P).
                Ok(string_get_own_property(agent, string, property_key))
            }
            _ => Ok(ordinary_get_own_property(agent, self, property_key)),
        }
    }

    /// ### \[\[DefineOwnProperty\]\] ( P, Desc )
    pub fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => proxy_target(agent, self)?.internal_define_own_property(
                agent,
                property_key,
                property_descriptor,
            ),
            Exotic::String(string) => Ok(string_define_own_property(
                agent,
                self,
                string,
                property_key,
                property_descriptor,
            )),
            Exotic::Array => {
                array_define_own_property(agent, self, property_key, property_descriptor)
            }
            Exotic::Ordinary => Ok(ordinary_define_own_property(
                agent,
                self,
                property_key,
                property_descriptor,
            )),
        }
    }

    /// ### \[\[HasProperty\]\] ( P )
    pub fn internal_has_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => proxy_target(agent, self)?.internal_has_property(agent, property_key),
            _ => ordinary_has_property(agent, self, property_key),
        }
    }

    /// ### \[\[Get\]\] ( P, Receiver )
    pub fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        match self.exotic(agent) {
            Exotic::Proxy => {
                proxy_target(agent, self)?.internal_get(agent, property_key, receiver)
            }
            _ => ordinary_get(agent, self, property_key, receiver),
        }
    }

    /// ### \[\[Set\]\] ( P, V, Receiver )
    pub fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => {
                proxy_target(agent, self)?.internal_set(agent, property_key, value, receiver)
            }
            _ => ordinary_set(agent, self, property_key, value, receiver),
        }
    }

    /// ### \[\[Delete\]\] ( P )
    pub fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        match self.exotic(agent) {
            Exotic::Proxy => proxy_target(agent, self)?.internal_delete(agent, property_key),
            _ => ordinary_delete(agent, self, property_key),
        }
    }
}
