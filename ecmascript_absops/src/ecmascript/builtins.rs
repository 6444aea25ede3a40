// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [10 Ordinary and Exotic Objects Behaviours](https://tc39.es/ecma262/#sec-ordinary-and-exotic-objects-behaviours)
//!
//! The objects the abstract operations can observe. An object is ordinary
//! unless its [`ObjectKind`](crate::ecmascript::types::Object) gives it
//! extra internal slots or exotic internal methods:
//!
//! * Arrays keep their `length` in sync with their indexed properties.
//! * String wrapper objects expose the code units of their string.
//! * Proxies forward every internal method to their target.
//! * Built-in functions carry a Rust behaviour for \[\[Call]] and
//!   \[\[Construct]].
//!
//! Error and RegExp objects are ordinary objects with extra internal slots.

pub(crate) mod array;
mod builtin_function;
pub(crate) mod error;
pub(crate) mod fundamental_objects;
pub(crate) mod iteration;
pub mod ordinary;
pub(crate) mod primitive_objects;
pub(crate) mod proxy;
pub(crate) mod regexp;

pub use array::array_create;
pub(crate) use array::array_define_own_property;
pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunctionArgs, BuiltinGetter, ConstructorFn, HostFn,
    RegularFn, create_builtin_function,
};
pub(crate) use builtin_function::{BuiltinFunctionHeapData, builtin_call, builtin_construct};
pub(crate) use error::{ErrorHeapData, create_error_object};
pub(crate) use primitive_objects::{
    PrimitiveObjectData, primitive_object_create, string_define_own_property,
    string_get_own_property,
};
pub(crate) use proxy::{ProxyHeapData, proxy_target};
pub use proxy::{proxy_create, proxy_revoke};
pub(crate) use regexp::RegExpHeapData;
pub use regexp::reg_exp_create;
