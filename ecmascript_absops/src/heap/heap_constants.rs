// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heap constants for initializing the heap
//!
//! These define the order in which intrinsic objects and well-known symbols
//! are placed into the heap vectors. The order is based on the ECMAScript
//! definition found in https://tc39.es/ecma262/

use super::indexes::{ObjectIndex, SymbolIndex};

// +==================================================================+
// | First the list of built-in prototypes and non-prototypal objects |
// +==================================================================+

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntrinsicObjectIndexes {
    // Fundamental objects
    ObjectPrototype,
    FunctionPrototype,
    BooleanPrototype,
    SymbolPrototype,
    ErrorPrototype,
    AggregateErrorPrototype,
    EvalErrorPrototype,
    RangeErrorPrototype,
    ReferenceErrorPrototype,
    SyntaxErrorPrototype,
    TypeErrorPrototype,
    URIErrorPrototype,

    // Numbers and dates
    NumberPrototype,
    BigIntPrototype,

    // Text processing
    StringPrototype,
    RegExpPrototype,
    RegExpStringIteratorPrototype,

    // Indexed collections
    ArrayPrototype,
    ArrayIteratorPrototype,

    // Keyed collections
    MapIteratorPrototype,
    SetIteratorPrototype,

    // Control abstraction objects
    IteratorPrototype,
    AsyncIteratorPrototype,
    GeneratorPrototype,
    AsyncGeneratorPrototype,

    // +===============================================+
    // | Then the list of intrinsic function objects   |
    // +===============================================+
    Array,
    ThrowTypeError,
}

impl From<IntrinsicObjectIndexes> for ObjectIndex {
    fn from(value: IntrinsicObjectIndexes) -> Self {
        ObjectIndex::from_u32_index(value as u32)
    }
}

pub const LAST_INTRINSIC_OBJECT_INDEX: u32 = IntrinsicObjectIndexes::ThrowTypeError as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WellKnownSymbolIndexes {
    AsyncIterator,
    HasInstance,
    IsConcatSpreadable,
    Iterator,
    Match,
    MatchAll,
    Replace,
    Search,
    Species,
    Split,
    ToPrimitive,
    ToStringTag,
    Unscopables,
}

impl WellKnownSymbolIndexes {
    pub(crate) const ALL: [WellKnownSymbolIndexes; 13] = [
        Self::AsyncIterator,
        Self::HasInstance,
        Self::IsConcatSpreadable,
        Self::Iterator,
        Self::Match,
        Self::MatchAll,
        Self::Replace,
        Self::Search,
        Self::Species,
        Self::Split,
        Self::ToPrimitive,
        Self::ToStringTag,
        Self::Unscopables,
    ];

    /// The `[[Description]]` of the well-known symbol.
    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::AsyncIterator => "Symbol.asyncIterator",
            Self::HasInstance => "Symbol.hasInstance",
            Self::IsConcatSpreadable => "Symbol.isConcatSpreadable",
            Self::Iterator => "Symbol.iterator",
            Self::Match => "Symbol.match",
            Self::MatchAll => "Symbol.matchAll",
            Self::Replace => "Symbol.replace",
            Self::Search => "Symbol.search",
            Self::Species => "Symbol.species",
            Self::Split => "Symbol.split",
            Self::ToPrimitive => "Symbol.toPrimitive",
            Self::ToStringTag => "Symbol.toStringTag",
            Self::Unscopables => "Symbol.unscopables",
        }
    }
}

impl From<WellKnownSymbolIndexes> for SymbolIndex {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        SymbolIndex::from_u32_index(value as u32)
    }
}

pub const LAST_WELL_KNOWN_SYMBOL_INDEX: u32 = WellKnownSymbolIndexes::Unscopables as u32;
