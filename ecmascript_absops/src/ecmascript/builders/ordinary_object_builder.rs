// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    BuiltinFunctionBuilder, CreatorPrototype, CreatorProperties, NoPrototype, NoProperties,
    assert_no_duplicate_keys,
};
use crate::ecmascript::{
    builtins::{Builtin, BuiltinGetter},
    execution::Agent,
    types::{
        IntoValue, Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey,
        PropertyStorage, PropertyValue, Value,
    },
};

pub(crate) struct OrdinaryObjectBuilder<'agent, P, Pr> {
    pub(crate) agent: &'agent mut Agent,
    this: Object,
    prototype: P,
    kind: ObjectKind,
    properties: Pr,
}

impl<'agent> OrdinaryObjectBuilder<'agent, NoPrototype, NoProperties> {
    /// Fills in an intrinsic object slot reserved by the heap.
    #[must_use]
    pub(crate) fn new_intrinsic_object(agent: &'agent mut Agent, this: Object) -> Self {
        Self {
            agent,
            this,
            prototype: NoPrototype,
            kind: ObjectKind::Ordinary,
            properties: NoProperties,
        }
    }
}

impl<P, Pr> OrdinaryObjectBuilder<'_, P, Pr> {
    /// Gives the object internal slots beyond the ordinary ones.
    #[must_use]
    pub(crate) fn with_kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }
}

impl<'agent, Pr> OrdinaryObjectBuilder<'agent, NoPrototype, Pr> {
    #[must_use]
    pub(crate) fn with_prototype(
        self,
        prototype: Object,
    ) -> OrdinaryObjectBuilder<'agent, CreatorPrototype, Pr> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            prototype: CreatorPrototype(Some(prototype)),
            kind: self.kind,
            properties: self.properties,
        }
    }
}

impl<'agent, P> OrdinaryObjectBuilder<'agent, P, NoProperties> {
    #[must_use]
    pub(crate) fn with_property_capacity(
        self,
        cap: usize,
    ) -> OrdinaryObjectBuilder<'agent, P, CreatorProperties> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            prototype: self.prototype,
            kind: self.kind,
            properties: CreatorProperties(Vec::with_capacity(cap)),
        }
    }
}

impl<P> OrdinaryObjectBuilder<'_, P, CreatorProperties> {
    /// Adds a writable, non-enumerable and configurable data property.
    #[must_use]
    pub(crate) fn with_data_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties
            .0
            .push(PropertyEntry::new_data(key, value, true, false, true));
        self
    }

    /// Adds a non-writable, non-enumerable and configurable data property.
    #[must_use]
    pub(crate) fn with_readonly_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties
            .0
            .push(PropertyEntry::new_data(key, value, false, false, true));
        self
    }

    /// Adds a non-writable, non-enumerable and non-configurable data
    /// property.
    #[must_use]
    pub(crate) fn with_frozen_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties
            .0
            .push(PropertyEntry::new_data(key, value, false, false, false));
        self
    }

    #[must_use]
    pub(crate) fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let key = match T::KEY {
            Some(key) => key,
            None => PropertyKey::from_str(self.agent, T::NAME),
        };
        let value = BuiltinFunctionBuilder::new::<T>(self.agent)
            .build()
            .into_value();
        self.properties.0.push(PropertyEntry::new_data(
            key,
            value,
            T::WRITABLE,
            T::ENUMERABLE,
            T::CONFIGURABLE,
        ));
        self
    }

    /// Adds an accessor property with a built-in getter and no setter.
    #[must_use]
    pub(crate) fn with_builtin_function_getter_property<T: BuiltinGetter>(mut self) -> Self {
        let key = match T::KEY {
            Some(key) => key,
            None => {
                let name = T::NAME.strip_prefix("get ").unwrap_or(T::NAME);
                PropertyKey::from_str(self.agent, name)
            }
        };
        let getter = BuiltinFunctionBuilder::new::<T>(self.agent).build();
        self.properties.0.push(PropertyEntry {
            key,
            value: PropertyValue::Accessor {
                get: Some(getter),
                set: None,
            },
            enumerable: T::ENUMERABLE,
            configurable: T::CONFIGURABLE,
        });
        self
    }
}

impl<P: Into<Option<Object>>> OrdinaryObjectBuilder<'_, P, CreatorProperties> {
    pub(crate) fn build(self) -> Object {
        assert_eq!(self.properties.0.len(), self.properties.0.capacity());
        assert_no_duplicate_keys(&self.properties.0);
        build_object(
            self.agent,
            self.this,
            self.prototype.into(),
            self.kind,
            self.properties.0,
        )
    }
}

fn build_object(
    agent: &mut Agent,
    this: Object,
    prototype: Option<Object>,
    kind: ObjectKind,
    properties: Vec<PropertyEntry>,
) -> Object {
    agent[this] = ObjectHeapData {
        extensible: true,
        prototype,
        properties: PropertyStorage::from(properties),
        kind,
    };
    this
}

impl From<NoPrototype> for Option<Object> {
    fn from(_: NoPrototype) -> Self {
        None
    }
}

impl From<CreatorPrototype> for Option<Object> {
    fn from(value: CreatorPrototype) -> Self {
        value.0
    }
}
