// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use super::{IntoValue, Primitive, PropertyKey, String, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{
        CreateHeapData, Heap,
        heap_constants::WellKnownSymbolIndexes,
        indexes::SymbolIndex,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolHeapData {
    /// \[\[Description]]
    pub(crate) descriptor: Option<String>,
}

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(pub(crate) SymbolIndex);

impl Symbol {
    pub fn new(agent: &mut Agent, description: Option<String>) -> Symbol {
        agent.heap.create(SymbolHeapData {
            descriptor: description,
        })
    }

    pub fn descriptor(self, agent: &Agent) -> Option<String> {
        agent[self].descriptor
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    pub fn descriptive_string(self, agent: &mut Agent) -> String {
        // 1. Let desc be sym's [[Description]] value.
        // 2. If desc is undefined, set desc to the empty String.
        // 3. Assert: desc is a String.
        let desc = self
            .descriptor(agent)
            .map(|desc| desc.to_string_lossy(agent).into_owned())
            .unwrap_or_default();
        // 4. Return the string-concatenation of "Symbol(", desc, and ")".
        String::from_string(agent, format!("Symbol({desc})"))
    }
}

impl WellKnownSymbolIndexes {
    pub(crate) const fn to_property_key(self) -> PropertyKey {
        PropertyKey::Symbol(Symbol(SymbolIndex::from_u32_index(self as u32)))
    }
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Symbol(value.into())
    }
}

impl From<WellKnownSymbolIndexes> for PropertyKey {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        PropertyKey::Symbol(value.into())
    }
}

impl From<WellKnownSymbolIndexes> for Value {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Value::Symbol(value.into())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<Symbol> for Primitive {
    fn from(value: Symbol) -> Self {
        Primitive::Symbol(value)
    }
}

impl IntoValue for Symbol {
    fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl TryFrom<Value> for Symbol {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(x) = value {
            Ok(x)
        } else {
            Err(())
        }
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(data);
        Symbol(SymbolIndex::last(&self.symbols))
    }
}

impl Index<Symbol> for Heap {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        &self.symbols[index.0.into_index()]
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        &self.heap[index]
    }
}
