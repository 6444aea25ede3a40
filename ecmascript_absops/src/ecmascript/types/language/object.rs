// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod internal_methods;
mod property_key;
mod property_storage;

use std::ops::{Index, IndexMut};

pub use property_key::PropertyKey;
pub(crate) use property_storage::{PropertyEntry, PropertyStorage, PropertyValue};

use super::{IntoValue, Value};
use crate::{
    ecmascript::{
        builtins::{
            BuiltinFunctionHeapData, ErrorHeapData, PrimitiveObjectData, ProxyHeapData,
            RegExpHeapData,
        },
        execution::Agent,
    },
    heap::{CreateHeapData, Heap, indexes::ObjectIndex},
};

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Object(pub(crate) ObjectIndex);

pub trait IntoObject
where
    Self: Sized + Copy,
{
    fn into_object(self) -> Object;
}

impl IntoObject for Object {
    fn into_object(self) -> Object {
        self
    }
}

impl IntoValue for Object {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Object(x) = value {
            Ok(x)
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub struct ObjectHeapData {
    /// \[\[Extensible]]
    pub(crate) extensible: bool,
    /// \[\[Prototype]]
    pub(crate) prototype: Option<Object>,
    pub(crate) properties: PropertyStorage,
    pub(crate) kind: ObjectKind,
}

impl Default for ObjectHeapData {
    fn default() -> Self {
        Self {
            extensible: true,
            prototype: None,
            properties: PropertyStorage::default(),
            kind: ObjectKind::Ordinary,
        }
    }
}

impl ObjectHeapData {
    pub(crate) fn new(prototype: Option<Object>, kind: ObjectKind) -> Self {
        Self {
            extensible: true,
            prototype,
            properties: PropertyStorage::default(),
            kind,
        }
    }
}

/// The internal slots an object carries beyond the ordinary ones.
#[derive(Debug, Default)]
pub(crate) enum ObjectKind {
    #[default]
    Ordinary,
    /// An Array exotic object.
    Array,
    BuiltinFunction(BuiltinFunctionHeapData),
    Error(ErrorHeapData),
    /// Boolean, Number, String, Symbol and BigInt wrapper objects.
    PrimitiveObject(PrimitiveObjectData),
    Proxy(ProxyHeapData),
    RegExp(RegExpHeapData),
}

impl Object {
    /// Does the object have a \[\[Call]] internal method.
    pub fn is_callable(self, agent: &Agent) -> bool {
        match &agent[self].kind {
            ObjectKind::BuiltinFunction(_) => true,
            ObjectKind::Proxy(data) => data.callable,
            _ => false,
        }
    }

    /// Does the object have a \[\[Construct]] internal method.
    pub fn is_constructor(self, agent: &Agent) -> bool {
        match &agent[self].kind {
            ObjectKind::BuiltinFunction(data) => data.behaviour.is_constructor(),
            ObjectKind::Proxy(data) => data.constructor,
            _ => false,
        }
    }
}

impl CreateHeapData<ObjectHeapData, Object> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> Object {
        self.objects.push(data);
        Object(ObjectIndex::last(&self.objects))
    }
}

impl Index<Object> for Heap {
    type Output = ObjectHeapData;

    fn index(&self, index: Object) -> &Self::Output {
        &self.objects[index.0.into_index()]
    }
}

impl IndexMut<Object> for Heap {
    fn index_mut(&mut self, index: Object) -> &mut Self::Output {
        &mut self.objects[index.0.into_index()]
    }
}

impl Index<Object> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: Object) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<Object> for Agent {
    fn index_mut(&mut self, index: Object) -> &mut Self::Output {
        &mut self.heap[index]
    }
}
