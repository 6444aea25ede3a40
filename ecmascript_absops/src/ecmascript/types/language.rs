// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod bigint;
mod function;
mod number;
mod numeric;
mod object;
mod primitive;
mod string;
mod symbol;
mod value;

pub use bigint::{BigInt, HeapBigInt, SmallBigInt};
pub(crate) use bigint::BigIntHeapData;
pub use function::Function;
pub use number::{BitwiseOp, Number};
pub use numeric::Numeric;
pub use object::{IntoObject, Object, PropertyKey};
pub(crate) use object::{
    ObjectHeapData, ObjectKind, PropertyEntry, PropertyStorage, PropertyValue,
};
pub use primitive::Primitive;
pub use string::{String, string_index_of, string_last_index_of};
pub(crate) use string::StringHeapData;
pub use symbol::Symbol;
pub(crate) use symbol::SymbolHeapData;
pub use value::{IntoValue, Value};
