// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::PropertyKey;
use crate::ecmascript::types::{Function, PropertyDescriptor, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PropertyValue {
    Data {
        value: Value,
        writable: bool,
    },
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
    },
}

/// A single own property with all of its attributes present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PropertyEntry {
    pub(crate) key: PropertyKey,
    pub(crate) value: PropertyValue,
    pub(crate) enumerable: bool,
    pub(crate) configurable: bool,
}

impl PropertyEntry {
    pub(crate) fn new_data(
        key: PropertyKey,
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            key,
            value: PropertyValue::Data { value, writable },
            enumerable,
            configurable,
        }
    }

    pub(crate) fn to_property_descriptor(self) -> PropertyDescriptor {
        match self.value {
            PropertyValue::Data { value, writable } => PropertyDescriptor {
                value: Some(value),
                writable: Some(writable),
                get: None,
                set: None,
                enumerable: Some(self.enumerable),
                configurable: Some(self.configurable),
            },
            PropertyValue::Accessor { get, set } => PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(get),
                set: Some(set),
                enumerable: Some(self.enumerable),
                configurable: Some(self.configurable),
            },
        }
    }
}

/// Own properties of an object in property creation order.
#[derive(Debug, Default)]
pub(crate) struct PropertyStorage(Vec<PropertyEntry>);

impl PropertyStorage {
    pub(crate) fn get(&self, key: PropertyKey) -> Option<&PropertyEntry> {
        self.0.iter().find(|entry| entry.key == key)
    }

    pub(crate) fn get_mut(&mut self, key: PropertyKey) -> Option<&mut PropertyEntry> {
        self.0.iter_mut().find(|entry| entry.key == key)
    }

    /// Inserts the entry, replacing an existing property with the same key
    /// in place.
    pub(crate) fn set(&mut self, entry: PropertyEntry) {
        match self.get_mut(entry.key) {
            Some(existing) => *existing = entry,
            None => self.0.push(entry),
        }
    }

    pub(crate) fn remove(&mut self, key: PropertyKey) -> bool {
        match self.0.iter().position(|entry| entry.key == key) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.0.iter()
    }
}

impl From<Vec<PropertyEntry>> for PropertyStorage {
    fn from(value: Vec<PropertyEntry>) -> Self {
        Self(value)
    }
}
