// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    CreatorPrototype, CreatorProperties, NoPrototype, NoProperties, assert_no_duplicate_keys,
};
use crate::{
    ecmascript::{
        builtins::{Behaviour, Builtin, BuiltinFunctionHeapData},
        execution::Agent,
        types::{
            Function, IntoValue, Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey,
            PropertyStorage, PropertyValue, String, Value,
        },
    },
    heap::CreateHeapData,
};

pub(crate) struct BuiltinFunctionBuilder<'agent, P, Pr> {
    pub(crate) agent: &'agent mut Agent,
    this: Option<Object>,
    prototype: P,
    extensible: bool,
    length: u8,
    name: String,
    behaviour: Behaviour,
    properties: Pr,
}

impl<'agent> BuiltinFunctionBuilder<'agent, NoPrototype, NoProperties> {
    #[must_use]
    pub(crate) fn new<T: Builtin>(agent: &'agent mut Agent) -> Self {
        let name = String::from_str(agent, T::NAME);
        Self {
            agent,
            this: None,
            prototype: NoPrototype,
            extensible: true,
            length: T::LENGTH,
            name,
            behaviour: T::BEHAVIOUR,
            properties: NoProperties,
        }
    }

    /// Fills in an intrinsic function slot reserved by the heap.
    #[must_use]
    pub(crate) fn new_intrinsic_function<T: Builtin>(
        agent: &'agent mut Agent,
        this: Object,
    ) -> Self {
        let mut builder = Self::new::<T>(agent);
        builder.this = Some(this);
        builder
    }
}

impl<P, Pr> BuiltinFunctionBuilder<'_, P, Pr> {
    #[must_use]
    pub(crate) fn with_extensible(mut self, extensible: bool) -> Self {
        self.extensible = extensible;
        self
    }
}

impl<'agent, Pr> BuiltinFunctionBuilder<'agent, NoPrototype, Pr> {
    /// Overrides the default %Function.prototype% prototype.
    #[must_use]
    pub(crate) fn with_prototype(
        self,
        prototype: Option<Object>,
    ) -> BuiltinFunctionBuilder<'agent, CreatorPrototype, Pr> {
        BuiltinFunctionBuilder {
            agent: self.agent,
            this: self.this,
            prototype: CreatorPrototype(prototype),
            extensible: self.extensible,
            length: self.length,
            name: self.name,
            behaviour: self.behaviour,
            properties: self.properties,
        }
    }
}

impl<'agent, P> BuiltinFunctionBuilder<'agent, P, NoProperties> {
    /// Reserves room for properties beyond `length` and `name`.
    #[must_use]
    pub(crate) fn with_property_capacity(
        self,
        cap: usize,
    ) -> BuiltinFunctionBuilder<'agent, P, CreatorProperties> {
        BuiltinFunctionBuilder {
            agent: self.agent,
            this: self.this,
            prototype: self.prototype,
            extensible: self.extensible,
            length: self.length,
            name: self.name,
            behaviour: self.behaviour,
            properties: CreatorProperties(Vec::with_capacity(cap)),
        }
    }
}

impl<P> BuiltinFunctionBuilder<'_, P, CreatorProperties> {
    /// Adds a non-writable, non-enumerable and non-configurable data
    /// property, such as the `prototype` of a built-in constructor.
    #[must_use]
    pub(crate) fn with_frozen_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties
            .0
            .push(PropertyEntry::new_data(key, value, false, false, false));
        self
    }

    /// Adds a non-enumerable, configurable accessor property.
    #[must_use]
    pub(crate) fn with_accessor_property(
        mut self,
        key: PropertyKey,
        get: Option<Function>,
        set: Option<Function>,
    ) -> Self {
        self.properties.0.push(PropertyEntry {
            key,
            value: PropertyValue::Accessor { get, set },
            enumerable: false,
            configurable: true,
        });
        self
    }

    /// Adds a static method, such as `Array.isArray`.
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
}

pub(crate) trait PrototypeSlot {
    fn resolve(self, agent: &Agent) -> Option<Object>;
}

impl PrototypeSlot for NoPrototype {
    fn resolve(self, agent: &Agent) -> Option<Object> {
        Some(agent.current_realm().intrinsics().function_prototype())
    }
}

impl PrototypeSlot for CreatorPrototype {
    fn resolve(self, _: &Agent) -> Option<Object> {
        self.0
    }
}

impl<P: PrototypeSlot> BuiltinFunctionBuilder<'_, P, NoProperties> {
    pub(crate) fn build(self) -> Function {
        let prototype = self.prototype.resolve(self.agent);
        build_function(
            self.agent,
            self.this,
            prototype,
            self.extensible,
            self.length,
            self.name,
            self.behaviour,
            Vec::new(),
        )
    }
}

impl<P: PrototypeSlot> BuiltinFunctionBuilder<'_, P, CreatorProperties> {
    pub(crate) fn build(self) -> Function {
        assert_eq!(self.properties.0.len(), self.properties.0.capacity());
        let prototype = self.prototype.resolve(self.agent);
        build_function(
            self.agent,
            self.this,
            prototype,
            self.extensible,
            self.length,
            self.name,
            self.behaviour,
            self.properties.0,
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn build_function(
    agent: &mut Agent,
    this: Option<Object>,
    prototype: Option<Object>,
    extensible: bool,
    length: u8,
    name: String,
    behaviour: Behaviour,
    extra_properties: Vec<PropertyEntry>,
) -> Function {
    let length_key = PropertyKey::from_str(agent, "length");
    let name_key = PropertyKey::from_str(agent, "name");
    let mut properties = Vec::with_capacity(extra_properties.len() + 2);
    properties.push(PropertyEntry::new_data(
        length_key,
        Value::from(length as u32),
        false,
        false,
        true,
    ));
    properties.push(PropertyEntry::new_data(
        name_key,
        Value::String(name),
        false,
        false,
        true,
    ));
    properties.extend(extra_properties);
    assert_no_duplicate_keys(&properties);
    let data = ObjectHeapData {
        extensible,
        prototype,
        properties: PropertyStorage::from(properties),
        kind: ObjectKind::BuiltinFunction(BuiltinFunctionHeapData { behaviour }),
    };
    let object = match this {
        Some(this) => {
            agent[this] = data;
            this
        }
        None => agent.heap.create(data),
    };
    Function(object)
}
