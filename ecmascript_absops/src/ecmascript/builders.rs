// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod builtin_function_builder;
pub(crate) mod ordinary_object_builder;

pub(crate) use builtin_function_builder::BuiltinFunctionBuilder;
pub(crate) use ordinary_object_builder::OrdinaryObjectBuilder;

use crate::ecmascript::types::{Object, PropertyEntry};

#[derive(Default, Clone, Copy)]
pub(crate) struct NoPrototype;

#[derive(Clone, Copy)]
pub(crate) struct CreatorPrototype(Option<Object>);

#[derive(Default, Clone, Copy)]
pub(crate) struct NoProperties;

#[derive(Clone)]
pub(crate) struct CreatorProperties(Vec<PropertyEntry>);

/// Fails loudly on a property defined twice by an intrinsic builder.
fn assert_no_duplicate_keys(properties: &[PropertyEntry]) {
    let duplicate = (1..properties.len()).find(|first_index| {
        properties[*first_index..]
            .iter()
            .any(|entry| entry.key == properties[first_index - 1].key)
    });
    if let Some(index) = duplicate {
        panic!("Duplicate key found: {:?}", properties[index - 1].key);
    }
}
