// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

pub use intrinsics::{Intrinsics, ProtoIntrinsics};

use super::Agent;
use crate::ecmascript::builtins::{
    array::ArrayConstructor,
    error::ErrorPrototype,
    fundamental_objects::{
        function_prototype::FunctionPrototype, object_prototype::ObjectPrototype,
    },
    iteration::IteratorPrototypes,
    primitive_objects::PrimitivePrototypes,
    regexp::RegExpPrototype,
};

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// All operations run in the single realm owned by the [`Agent`].
#[derive(Debug, Default)]
pub struct Realm {
    intrinsics: Intrinsics,
}

impl Realm {
    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }
}

/// ### [9.3.2 CreateIntrinsics ( realmRec )](https://tc39.es/ecma262/#sec-createintrinsics)
///
/// Intrinsic objects live at fixed heap slots, so they may refer to each
/// other before all of them are initialized.
pub(crate) fn initialize_intrinsics(agent: &mut Agent) {
    ObjectPrototype::create_intrinsic(agent);
    FunctionPrototype::create_intrinsic(agent);
    PrimitivePrototypes::create_intrinsic(agent);
    ErrorPrototype::create_intrinsic(agent);
    ArrayConstructor::create_intrinsic(agent);
    RegExpPrototype::create_intrinsic(agent);
    IteratorPrototypes::create_intrinsic(agent);
}
