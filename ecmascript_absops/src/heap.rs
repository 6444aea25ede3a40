// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod heap_constants;
pub mod indexes;

use std::hash::{BuildHasher, Hasher};

use hashbrown::HashTable;
use wtf8::{Wtf8, Wtf8Buf};

use self::{
    heap_constants::{
        LAST_INTRINSIC_OBJECT_INDEX, LAST_WELL_KNOWN_SYMBOL_INDEX, WellKnownSymbolIndexes,
    },
    indexes::StringIndex,
};
use crate::ecmascript::types::{
    BigIntHeapData, ObjectHeapData, String, StringHeapData, SymbolHeapData,
};

/// Storage for every heap-allocated value an agent creates.
///
/// Strings are interned: two [`String`] handles are equal exactly when their
/// contents are equal.
#[derive(Debug)]
pub struct Heap {
    pub(crate) bigints: Vec<BigIntHeapData>,
    pub(crate) objects: Vec<ObjectHeapData>,
    pub(crate) strings: Vec<StringHeapData>,
    pub(crate) symbols: Vec<SymbolHeapData>,
    string_lookup_table: HashTable<StringIndex>,
    string_hasher: ahash::RandomState,
}

pub trait CreateHeapData<T, F> {
    /// Creates a [`Value`](crate::ecmascript::types::Value) from the given
    /// data. Allocating the data is **not** guaranteed.
    fn create(&mut self, data: T) -> F;
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            bigints: Vec::with_capacity(64),
            objects: Vec::with_capacity(1024),
            strings: Vec::with_capacity(1024),
            symbols: Vec::with_capacity(64),
            string_lookup_table: HashTable::with_capacity(1024),
            string_hasher: ahash::RandomState::new(),
        };
        let empty_string = heap.alloc_str("");
        debug_assert_eq!(empty_string, String::EMPTY_STRING);
        for symbol in WellKnownSymbolIndexes::ALL {
            let descriptor = heap.alloc_str(symbol.description());
            heap.symbols.push(SymbolHeapData {
                descriptor: Some(descriptor),
            });
        }
        debug_assert_eq!(
            heap.symbols.len(),
            LAST_WELL_KNOWN_SYMBOL_INDEX as usize + 1
        );
        // Intrinsic objects get their final shape when the realm is
        // initialized; until then the slots are plain empty objects.
        for _ in 0..=LAST_INTRINSIC_OBJECT_INDEX {
            heap.objects.push(ObjectHeapData::default());
        }
        heap
    }

    /// Allocate a string onto the heap, reusing an existing allocation with
    /// the same contents.
    pub(crate) fn alloc_str(&mut self, message: &str) -> String {
        self.alloc_wtf8_buf(Wtf8Buf::from_str(message))
    }

    pub(crate) fn alloc_wtf8_buf(&mut self, data: Wtf8Buf) -> String {
        let hash = hash_wtf8(&self.string_hasher, &data);
        let strings = &self.strings;
        if let Some(&index) = self
            .string_lookup_table
            .find(hash, |&index| *strings[index.into_index()].data == *data)
        {
            return String(index);
        }
        self.strings.push(StringHeapData { data });
        let index = StringIndex::last(&self.strings);
        let strings = &self.strings;
        let hasher = &self.string_hasher;
        self.string_lookup_table.insert_unique(hash, index, |&index| {
            hash_wtf8(hasher, &strings[index.into_index()].data)
        });
        String(index)
    }
}

fn hash_wtf8(state: &ahash::RandomState, data: &Wtf8) -> u64 {
    let mut hasher = state.build_hasher();
    for code_point in data.code_points() {
        hasher.write_u32(code_point.to_u32());
    }
    hasher.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strings_are_interned() {
        let mut heap = Heap::new();
        let a = heap.alloc_str("lastIndex");
        let b = heap.alloc_str("lastIndex");
        let c = heap.alloc_str("lastindex");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ill_formed_strings_are_interned() {
        let mut heap = Heap::new();
        let a = heap.alloc_wtf8_buf(Wtf8Buf::from_ill_formed_utf16(&[0x61, 0xD800]));
        let b = heap.alloc_wtf8_buf(Wtf8Buf::from_ill_formed_utf16(&[0x61, 0xD800]));
        let c = heap.alloc_wtf8_buf(Wtf8Buf::from_ill_formed_utf16(&[0x61, 0xDC00]));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
