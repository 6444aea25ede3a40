// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{borrow::Cow, ops::Index};

use wtf8::{Wtf8, Wtf8Buf};

use super::{IntoValue, Primitive, PropertyKey, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{Heap, indexes::StringIndex},
};

#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: Wtf8Buf,
}

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// Strings are interned by the heap, so two handles are equal if and only if
/// the strings have the same sequence of code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct String(pub(crate) StringIndex);

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::String(x) = value {
            Ok(x)
        } else {
            Err(())
        }
    }
}

impl String {
    /// The empty String is always the first string allocated in a heap.
    pub const EMPTY_STRING: String = String(StringIndex::from_u32_index(0));

    pub fn from_str(agent: &mut Agent, str: &str) -> String {
        agent.heap.alloc_str(str)
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> String {
        agent.heap.alloc_wtf8_buf(Wtf8Buf::from_string(string))
    }

    pub fn from_wtf8_buf(agent: &mut Agent, data: Wtf8Buf) -> String {
        agent.heap.alloc_wtf8_buf(data)
    }

    /// Creates a String from UTF-16 code units. Lone surrogates are kept.
    pub fn from_code_units(agent: &mut Agent, code_units: &[u16]) -> String {
        agent
            .heap
            .alloc_wtf8_buf(Wtf8Buf::from_ill_formed_utf16(code_units))
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY_STRING
    }

    pub fn as_wtf8(self, agent: &Agent) -> &Wtf8 {
        &agent[self].data
    }

    /// Returns the string as a `&str` if it contains no lone surrogates.
    pub fn as_str(self, agent: &Agent) -> Option<&str> {
        agent[self].data.as_str()
    }

    pub fn to_string_lossy(self, agent: &Agent) -> Cow<'_, str> {
        agent[self].data.to_string_lossy()
    }

    /// The length of the string in UTF-16 code units.
    pub fn utf16_len(self, agent: &Agent) -> usize {
        agent[self]
            .data
            .code_points()
            .map(|code_point| if code_point.to_u32() > 0xFFFF { 2 } else { 1 })
            .sum()
    }

    /// The UTF-16 code units of the string.
    pub fn code_units(self, agent: &Agent) -> Vec<u16> {
        let data = &agent[self].data;
        let mut code_units = Vec::with_capacity(data.len());
        for code_point in data.code_points() {
            let code_point = code_point.to_u32();
            if code_point > 0xFFFF {
                let code_point = code_point - 0x10000;
                code_units.push(0xD800 | (code_point >> 10) as u16);
                code_units.push(0xDC00 | (code_point & 0x3FF) as u16);
            } else {
                code_units.push(code_point as u16);
            }
        }
        code_units
    }

    /// ### [7.2.9 Static Semantics: IsStringWellFormedUnicode ( string )](https://tc39.es/ecma262/#sec-isstringwellformedunicode)
    ///
    /// A string is well formed if it contains no lone surrogates, which in
    /// WTF-8 is exactly when the bytes are valid UTF-8.
    pub fn is_well_formed(self, agent: &Agent) -> bool {
        agent[self].data.as_str().is_some()
    }
}

/// ### [6.1.4.1 StringIndexOf ( string, searchValue, fromIndex )](https://tc39.es/ecma262/#sec-stringindexof)
///
/// Indexes are in UTF-16 code units. Returns `None` for not-found.
pub fn string_index_of(
    agent: &Agent,
    string: String,
    search_value: String,
    from_index: usize,
) -> Option<usize> {
    let string = string.code_units(agent);
    let search_value = search_value.code_units(agent);
    // 1. Let len be the length of string.
    let len = string.len();
    // 2. If searchValue is the empty String and fromIndex ≤ len, return fromIndex.
    if search_value.is_empty() && from_index <= len {
        return Some(from_index);
    }
    // 3. Let searchLen be the length of searchValue.
    let search_len = search_value.len();
    if search_len > len {
        return None;
    }
    // 4. For each integer i such that fromIndex ≤ i ≤ len - searchLen, in
    //    ascending order, do
    //    a. Let candidate be the substring of string from i to i + searchLen.
    //    b. If candidate is searchValue, return i.
    // 5. Return not-found.
    (from_index..=len - search_len).find(|&i| string[i..i + search_len] == search_value[..])
}

/// ### [6.1.4.2 StringLastIndexOf ( string, searchValue, fromIndex )](https://tc39.es/ecma262/#sec-stringlastindexof)
///
/// Indexes are in UTF-16 code units. A `from_index` past the last possible
/// match position starts the search from that position instead.
pub fn string_last_index_of(
    agent: &Agent,
    string: String,
    search_value: String,
    from_index: usize,
) -> Option<usize> {
    let string = string.code_units(agent);
    let search_value = search_value.code_units(agent);
    // 1. Let len be the length of string.
    let len = string.len();
    // 2. Let searchLen be the length of searchValue.
    let search_len = search_value.len();
    if search_len > len {
        return None;
    }
    // 3. Assert: fromIndex + searchLen ≤ len.
    let from_index = from_index.min(len - search_len);
    // 4. For each integer i such that 0 ≤ i ≤ fromIndex, in descending
    //    order, do
    //    a. Let candidate be the substring of string from i to i + searchLen.
    //    b. If candidate is searchValue, return i.
    // 5. Return not-found.
    (0..=from_index)
        .rev()
        .find(|&i| string[i..i + search_len] == search_value[..])
}

impl Index<String> for Heap {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        &self.strings[index.0.into_index()]
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        &self.heap[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::Options;

    #[test]
    fn empty_string_is_preallocated() {
        let mut agent = Agent::new(Options::default());
        assert_eq!(String::from_str(&mut agent, ""), String::EMPTY_STRING);
        assert!(String::EMPTY_STRING.is_empty());
    }

    #[test]
    fn code_units_split_astral_code_points() {
        let mut agent = Agent::new(Options::default());
        let string = String::from_str(&mut agent, "a😀");
        assert_eq!(string.utf16_len(&agent), 3);
        assert_eq!(string.code_units(&agent), vec![0x61, 0xD83D, 0xDE00]);
        let roundtrip = String::from_code_units(&mut agent, &[0x61, 0xD83D, 0xDE00]);
        assert_eq!(roundtrip, string);
    }

    #[test]
    fn well_formed_unicode() {
        let mut agent = Agent::new(Options::default());
        let well_formed = String::from_str(&mut agent, "abc😀");
        assert!(well_formed.is_well_formed(&agent));
        let lone_lead = String::from_code_units(&mut agent, &[0x61, 0xD83D]);
        assert!(!lone_lead.is_well_formed(&agent));
        let lone_trail = String::from_code_units(&mut agent, &[0xDE00, 0x61]);
        assert!(!lone_trail.is_well_formed(&agent));
        assert!(String::EMPTY_STRING.is_well_formed(&agent));
    }

    #[test]
    fn index_of() {
        let mut agent = Agent::new(Options::default());
        let string = String::from_str(&mut agent, "abcabc");
        let bc = String::from_str(&mut agent, "bc");
        let missing = String::from_str(&mut agent, "cb");
        assert_eq!(string_index_of(&agent, string, bc, 0), Some(1));
        assert_eq!(string_index_of(&agent, string, bc, 2), Some(4));
        assert_eq!(string_index_of(&agent, string, bc, 5), None);
        assert_eq!(string_index_of(&agent, string, missing, 0), None);
        assert_eq!(string_index_of(&agent, string, String::EMPTY_STRING, 6), Some(6));
        assert_eq!(string_index_of(&agent, string, String::EMPTY_STRING, 7), None);
        assert_eq!(string_last_index_of(&agent, string, bc, 6), Some(4));
        assert_eq!(string_last_index_of(&agent, string, bc, 3), Some(1));
        assert_eq!(string_last_index_of(&agent, string, bc, 0), None);
        assert_eq!(string_last_index_of(&agent, string, String::EMPTY_STRING, 2), Some(2));
    }
}
