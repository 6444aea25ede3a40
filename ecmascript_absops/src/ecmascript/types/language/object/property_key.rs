// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::Agent,
    types::{IntoValue, String, Symbol, Value},
};

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys. A
/// _property key_ is either a String or a Symbol. All Strings and Symbols,
/// including the empty String, are valid as property keys. A _property name_
/// is a property key that is a String.
///
/// An _array index_ is a property name `n` such that
/// `CanonicalNumericIndexString(n)` returns an integral Number in the
/// inclusive interval from `+0𝔽` to `𝔽(2**32 - 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        PropertyKey::String(String::from_str(agent, str))
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Self {
        PropertyKey::String(String::from_string(agent, string))
    }

    pub fn is_property_name(self) -> bool {
        matches!(self, PropertyKey::String(_))
    }

    pub fn as_string(self) -> Option<String> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    /// Returns the array index this key denotes, if any.
    ///
    /// Array indexes are written without leading zeroes, so a key is an
    /// array index exactly when it is the decimal form of an integer below
    /// 2^32 - 1.
    pub fn as_array_index(self, agent: &Agent) -> Option<u32> {
        let string = self.as_string()?.as_str(agent)?;
        if string.is_empty()
            || string.len() > 10
            || !string.bytes().all(|b| b.is_ascii_digit())
            || (string.len() > 1 && string.starts_with('0'))
        {
            return None;
        }
        let index: u64 = string.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u64);
        if index < u32::MAX as u64 {
            Some(index as u32)
        } else {
            None
        }
    }

    pub fn from_array_index(agent: &mut Agent, index: u32) -> Self {
        PropertyKey::from_string(agent, index.to_string())
    }
}

impl IntoValue for PropertyKey {
    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl TryFrom<Value> for PropertyKey {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(PropertyKey::String(s)),
            Value::Symbol(s) => Ok(PropertyKey::Symbol(s)),
            _ => Err(()),
        }
    }
}
