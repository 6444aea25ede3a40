// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::types::{Function, Object},
    heap::{heap_constants::IntrinsicObjectIndexes, indexes::ObjectIndex},
};

#[derive(Debug, Clone)]
pub struct Intrinsics {
    /// %Array%
    array: ObjectIndex,
    /// %Array.prototype%
    array_prototype: ObjectIndex,
    /// %ArrayIteratorPrototype%
    array_iterator_prototype: ObjectIndex,
    /// %AsyncGeneratorFunction.prototype.prototype%
    async_generator_prototype: ObjectIndex,
    /// %AsyncIteratorPrototype%
    async_iterator_prototype: ObjectIndex,
    /// %BigInt.prototype%
    big_int_prototype: ObjectIndex,
    /// %Boolean.prototype%
    boolean_prototype: ObjectIndex,
    /// %Error.prototype%
    error_prototype: ObjectIndex,
    /// %AggregateError.prototype%
    aggregate_error_prototype: ObjectIndex,
    /// %EvalError.prototype%
    eval_error_prototype: ObjectIndex,
    /// %Function.prototype%
    function_prototype: ObjectIndex,
    /// %GeneratorFunction.prototype.prototype%
    generator_prototype: ObjectIndex,
    /// %IteratorPrototype%
    iterator_prototype: ObjectIndex,
    /// %MapIteratorPrototype%
    map_iterator_prototype: ObjectIndex,
    /// %Number.prototype%
    number_prototype: ObjectIndex,
    /// %Object.prototype%
    object_prototype: ObjectIndex,
    /// %RangeError.prototype%
    range_error_prototype: ObjectIndex,
    /// %ReferenceError.prototype%
    reference_error_prototype: ObjectIndex,
    /// %RegExp.prototype%
    reg_exp_prototype: ObjectIndex,
    /// %RegExpStringIteratorPrototype%
    reg_exp_string_iterator_prototype: ObjectIndex,
    /// %SetIteratorPrototype%
    set_iterator_prototype: ObjectIndex,
    /// %String.prototype%
    string_prototype: ObjectIndex,
    /// %Symbol.prototype%
    symbol_prototype: ObjectIndex,
    /// %SyntaxError.prototype%
    syntax_error_prototype: ObjectIndex,
    /// %ThrowTypeError%
    throw_type_error: ObjectIndex,
    /// %TypeError.prototype%
    type_error_prototype: ObjectIndex,
    /// %URIError.prototype%
    uri_error_prototype: ObjectIndex,
}

/// Enumeration of intrinsics intended to be used as the \[\[Prototype]] value
/// of an object. Used in GetPrototypeFromConstructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoIntrinsics {
    AggregateError,
    Array,
    BigInt,
    Boolean,
    Error,
    EvalError,
    Function,
    Number,
    Object,
    RangeError,
    ReferenceError,
    RegExp,
    String,
    Symbol,
    SyntaxError,
    TypeError,
    UriError,
}

impl Default for Intrinsics {
    fn default() -> Self {
        Self {
            array: IntrinsicObjectIndexes::Array.into(),
            array_prototype: IntrinsicObjectIndexes::ArrayPrototype.into(),
            array_iterator_prototype: IntrinsicObjectIndexes::ArrayIteratorPrototype.into(),
            async_generator_prototype: IntrinsicObjectIndexes::AsyncGeneratorPrototype.into(),
            async_iterator_prototype: IntrinsicObjectIndexes::AsyncIteratorPrototype.into(),
            big_int_prototype: IntrinsicObjectIndexes::BigIntPrototype.into(),
            boolean_prototype: IntrinsicObjectIndexes::BooleanPrototype.into(),
            error_prototype: IntrinsicObjectIndexes::ErrorPrototype.into(),
            aggregate_error_prototype: IntrinsicObjectIndexes::AggregateErrorPrototype.into(),
            eval_error_prototype: IntrinsicObjectIndexes::EvalErrorPrototype.into(),
            function_prototype: IntrinsicObjectIndexes::FunctionPrototype.into(),
            generator_prototype: IntrinsicObjectIndexes::GeneratorPrototype.into(),
            iterator_prototype: IntrinsicObjectIndexes::IteratorPrototype.into(),
            map_iterator_prototype: IntrinsicObjectIndexes::MapIteratorPrototype.into(),
            number_prototype: IntrinsicObjectIndexes::NumberPrototype.into(),
            object_prototype: IntrinsicObjectIndexes::ObjectPrototype.into(),
            range_error_prototype: IntrinsicObjectIndexes::RangeErrorPrototype.into(),
            reference_error_prototype: IntrinsicObjectIndexes::ReferenceErrorPrototype.into(),
            reg_exp_prototype: IntrinsicObjectIndexes::RegExpPrototype.into(),
            reg_exp_string_iterator_prototype:
                IntrinsicObjectIndexes::RegExpStringIteratorPrototype.into(),
            set_iterator_prototype: IntrinsicObjectIndexes::SetIteratorPrototype.into(),
            string_prototype: IntrinsicObjectIndexes::StringPrototype.into(),
            symbol_prototype: IntrinsicObjectIndexes::SymbolPrototype.into(),
            syntax_error_prototype: IntrinsicObjectIndexes::SyntaxErrorPrototype.into(),
            throw_type_error: IntrinsicObjectIndexes::ThrowTypeError.into(),
            type_error_prototype: IntrinsicObjectIndexes::TypeErrorPrototype.into(),
            uri_error_prototype: IntrinsicObjectIndexes::URIErrorPrototype.into(),
        }
    }
}

impl Intrinsics {
    pub(crate) fn get_intrinsic_default_proto(
        &self,
        intrinsic_default_proto: ProtoIntrinsics,
    ) -> Object {
        match intrinsic_default_proto {
            ProtoIntrinsics::AggregateError => self.aggregate_error_prototype(),
            ProtoIntrinsics::Array => self.array_prototype(),
            ProtoIntrinsics::BigInt => self.big_int_prototype(),
            ProtoIntrinsics::Boolean => self.boolean_prototype(),
            ProtoIntrinsics::Error => self.error_prototype(),
            ProtoIntrinsics::EvalError => self.eval_error_prototype(),
            ProtoIntrinsics::Function => self.function_prototype(),
            ProtoIntrinsics::Number => self.number_prototype(),
            ProtoIntrinsics::Object => self.object_prototype(),
            ProtoIntrinsics::RangeError => self.range_error_prototype(),
            ProtoIntrinsics::ReferenceError => self.reference_error_prototype(),
            ProtoIntrinsics::RegExp => self.reg_exp_prototype(),
            ProtoIntrinsics::String => self.string_prototype(),
            ProtoIntrinsics::Symbol => self.symbol_prototype(),
            ProtoIntrinsics::SyntaxError => self.syntax_error_prototype(),
            ProtoIntrinsics::TypeError => self.type_error_prototype(),
            ProtoIntrinsics::UriError => self.uri_error_prototype(),
        }
    }

    /// %Array%
    pub const fn array(&self) -> Function {
        Function(Object(self.array))
    }

    /// %Array.prototype%
    pub const fn array_prototype(&self) -> Object {
        Object(self.array_prototype)
    }

    /// %ArrayIteratorPrototype%
    pub const fn array_iterator_prototype(&self) -> Object {
        Object(self.array_iterator_prototype)
    }

    /// %AsyncGeneratorFunction.prototype.prototype%
    pub const fn async_generator_prototype(&self) -> Object {
        Object(self.async_generator_prototype)
    }

    /// %AsyncIteratorPrototype%
    pub const fn async_iterator_prototype(&self) -> Object {
        Object(self.async_iterator_prototype)
    }

    /// %BigInt.prototype%
    pub const fn big_int_prototype(&self) -> Object {
        Object(self.big_int_prototype)
    }

    /// %Boolean.prototype%
    pub const fn boolean_prototype(&self) -> Object {
        Object(self.boolean_prototype)
    }

    /// %Error.prototype%
    pub const fn error_prototype(&self) -> Object {
        Object(self.error_prototype)
    }

    /// %AggregateError.prototype%
    pub const fn aggregate_error_prototype(&self) -> Object {
        Object(self.aggregate_error_prototype)
    }

    /// %EvalError.prototype%
    pub const fn eval_error_prototype(&self) -> Object {
        Object(self.eval_error_prototype)
    }

    /// %Function.prototype%
    pub const fn function_prototype(&self) -> Object {
        Object(self.function_prototype)
    }

    /// %GeneratorFunction.prototype.prototype%
    pub const fn generator_prototype(&self) -> Object {
        Object(self.generator_prototype)
    }

    /// %IteratorPrototype%
    pub const fn iterator_prototype(&self) -> Object {
        Object(self.iterator_prototype)
    }

    /// %MapIteratorPrototype%
    pub const fn map_iterator_prototype(&self) -> Object {
        Object(self.map_iterator_prototype)
    }

    /// %Number.prototype%
    pub const fn number_prototype(&self) -> Object {
        Object(self.number_prototype)
    }

    /// %Object.prototype%
    pub const fn object_prototype(&self) -> Object {
        Object(self.object_prototype)
    }

    /// %RangeError.prototype%
    pub const fn range_error_prototype(&self) -> Object {
        Object(self.range_error_prototype)
    }

    /// %ReferenceError.prototype%
    pub const fn reference_error_prototype(&self) -> Object {
        Object(self.reference_error_prototype)
    }

    /// %RegExp.prototype%
    pub const fn reg_exp_prototype(&self) -> Object {
        Object(self.reg_exp_prototype)
    }

    /// %RegExpStringIteratorPrototype%
    pub const fn reg_exp_string_iterator_prototype(&self) -> Object {
        Object(self.reg_exp_string_iterator_prototype)
    }

    /// %SetIteratorPrototype%
    pub const fn set_iterator_prototype(&self) -> Object {
        Object(self.set_iterator_prototype)
    }

    /// %String.prototype%
    pub const fn string_prototype(&self) -> Object {
        Object(self.string_prototype)
    }

    /// %Symbol.prototype%
    pub const fn symbol_prototype(&self) -> Object {
        Object(self.symbol_prototype)
    }

    /// %SyntaxError.prototype%
    pub const fn syntax_error_prototype(&self) -> Object {
        Object(self.syntax_error_prototype)
    }

    /// %ThrowTypeError%
    pub const fn throw_type_error(&self) -> Function {
        Function(Object(self.throw_type_error))
    }

    /// %TypeError.prototype%
    pub const fn type_error_prototype(&self) -> Object {
        Object(self.type_error_prototype)
    }

    /// %URIError.prototype%
    pub const fn uri_error_prototype(&self) -> Object {
        Object(self.uri_error_prototype)
    }
}
