// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub use language::{
    BigInt, BitwiseOp, Function, HeapBigInt, IntoObject, IntoValue, Number, Numeric, Object,
    Primitive, PropertyKey, SmallBigInt, String, Symbol, Value, string_index_of,
    string_last_index_of,
};
pub(crate) use language::{
    BigIntHeapData, ObjectHeapData, ObjectKind, PropertyEntry, PropertyStorage, PropertyValue,
    StringHeapData, SymbolHeapData,
};
pub use spec::PropertyDescriptor;
