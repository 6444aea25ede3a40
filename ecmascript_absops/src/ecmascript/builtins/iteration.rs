// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [27.1 Iteration](https://tc39.es/ecma262/#sec-iteration)
//!
//! Only the prototype objects exist: there is no iterator protocol to drive
//! them, but their shape and @@toStringTag are observable.

use super::{ArgumentsList, Behaviour, Builtin};
use crate::{
    ecmascript::{
        builders::OrdinaryObjectBuilder,
        execution::{Agent, JsResult},
        types::{Object, PropertyKey, Value},
    },
    heap::heap_constants::WellKnownSymbolIndexes,
};

pub(crate) struct IteratorPrototypes;

struct IteratorPrototypeIterator;
impl Builtin for IteratorPrototypeIterator {
    const NAME: &'static str = "[Symbol.iterator]";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(IteratorPrototypes::return_this);
    const KEY: Option<PropertyKey> = Some(WellKnownSymbolIndexes::Iterator.to_property_key());
}

struct AsyncIteratorPrototypeAsyncIterator;
impl Builtin for AsyncIteratorPrototypeAsyncIterator {
    const NAME: &'static str = "[Symbol.asyncIterator]";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(IteratorPrototypes::return_this);
    const KEY: Option<PropertyKey> =
        Some(WellKnownSymbolIndexes::AsyncIterator.to_property_key());
}

impl IteratorPrototypes {
    /// ### [27.1.4.1 %IteratorPrototype% \[ %Symbol.iterator% \] ( )](https://tc39.es/ecma262/#sec-%iteratorprototype%-%symbol.iterator%)
    ///
    /// Also %AsyncIteratorPrototype% \[ %Symbol.asyncIterator% \].
    fn return_this(_: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return the this value.
        Ok(this_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let iterator_prototype = intrinsics.iterator_prototype();
        let async_iterator_prototype = intrinsics.async_iterator_prototype();
        let tagged = [
            (
                intrinsics.array_iterator_prototype(),
                iterator_prototype,
                "Array Iterator",
            ),
            (
                intrinsics.map_iterator_prototype(),
                iterator_prototype,
                "Map Iterator",
            ),
            (
                intrinsics.set_iterator_prototype(),
                iterator_prototype,
                "Set Iterator",
            ),
            (
                intrinsics.reg_exp_string_iterator_prototype(),
                iterator_prototype,
                "RegExp String Iterator",
            ),
            (intrinsics.generator_prototype(), iterator_prototype, "Generator"),
            (
                intrinsics.async_generator_prototype(),
                async_iterator_prototype,
                "AsyncGenerator",
            ),
        ];
        let object_prototype = intrinsics.object_prototype();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, iterator_prototype)
            .with_property_capacity(1)
            .with_prototype(object_prototype)
            .with_builtin_function_property::<IteratorPrototypeIterator>()
            .build();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, async_iterator_prototype)
            .with_property_capacity(1)
            .with_prototype(object_prototype)
            .with_builtin_function_property::<AsyncIteratorPrototypeAsyncIterator>()
            .build();

        for (this, prototype, tag) in tagged {
            create_tagged_prototype(agent, this, prototype, tag);
        }
    }
}

/// Creates a prototype whose only own property is its
/// `[ %Symbol.toStringTag% ]`, with the attributes { \[\[Writable]]: false,
/// \[\[Enumerable]]: false, \[\[Configurable]]: true }.
fn create_tagged_prototype(agent: &mut Agent, this: Object, prototype: Object, tag: &str) {
    let tag = Value::from_str(agent, tag);
    OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
        .with_property_capacity(1)
        .with_prototype(prototype)
        .with_readonly_property(WellKnownSymbolIndexes::ToStringTag.into(), tag)
        .build();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{get, invoke},
        execution::Options,
        types::IntoValue,
    };

    #[test]
    fn iterator_prototype_returns_this() {
        let mut agent = Agent::new(Options::default());
        let array_iterator_prototype = agent
            .current_realm()
            .intrinsics()
            .array_iterator_prototype();
        let this = array_iterator_prototype.into_value();
        assert_eq!(
            invoke(
                &mut agent,
                this,
                WellKnownSymbolIndexes::Iterator.into(),
                None
            ),
            Ok(this)
        );
        let name = PropertyKey::from_str(&mut agent, "name");
        let iterator = get(
            &mut agent,
            array_iterator_prototype,
            WellKnownSymbolIndexes::Iterator.into(),
        )
        .unwrap();
        let Value::Object(iterator) = iterator else {
            panic!("Expected a function");
        };
        let expected = Value::from_str(&mut agent, "[Symbol.iterator]");
        assert_eq!(get(&mut agent, iterator, name), Ok(expected));
    }

    #[test]
    fn iterator_prototypes_are_tagged() {
        let mut agent = Agent::new(Options::default());
        let intrinsics = agent.current_realm().intrinsics();
        let set_iterator_prototype = intrinsics.set_iterator_prototype();
        let async_generator_prototype = intrinsics.async_generator_prototype();
        let async_iterator_prototype = intrinsics.async_iterator_prototype();
        let tag = get(
            &mut agent,
            set_iterator_prototype,
            WellKnownSymbolIndexes::ToStringTag.into(),
        )
        .unwrap();
        let expected = Value::from_str(&mut agent, "Set Iterator");
        assert_eq!(tag, expected);
        assert_eq!(
            agent[async_generator_prototype].prototype,
            Some(async_iterator_prototype)
        );
        let this = async_generator_prototype.into_value();
        assert_eq!(
            invoke(
                &mut agent,
                this,
                WellKnownSymbolIndexes::AsyncIterator.into(),
                None
            ),
            Ok(this)
        );
    }
}
