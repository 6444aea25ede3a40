// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [22.2 RegExp (Regular Expression) Objects](https://tc39.es/ecma262/#sec-regexp-regular-expression-objects)
//!
//! RegExp objects carry their source and flags but no matcher: patterns are
//! never compiled or executed.

use super::{
    ArgumentsList, Behaviour, Builtin, BuiltinGetter,
    ordinary::ordinary_object_create_with_intrinsics,
};
use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::{define_property_or_throw, get, set},
        type_conversion::{to_boolean, to_string},
    },
    builders::OrdinaryObjectBuilder,
    execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
    types::{IntoValue, Object, ObjectKind, PropertyDescriptor, PropertyKey, String, Value},
};

/// The flags a RegExp may carry, in the order `get RegExp.prototype.flags`
/// reports them.
const VALID_FLAGS: &str = "dgimsuvy";

#[derive(Debug, Clone, Copy)]
pub struct RegExpHeapData {
    /// \[\[OriginalSource]]
    pub(crate) original_source: String,
    /// \[\[OriginalFlags]]
    pub(crate) original_flags: String,
}

impl Default for RegExpHeapData {
    fn default() -> Self {
        Self {
            original_source: String::EMPTY_STRING,
            original_flags: String::EMPTY_STRING,
        }
    }
}

/// ### [22.2.3.1 RegExpCreate ( P, F )](https://tc39.es/ecma262/#sec-regexpcreate)
///
/// The abstract operation RegExpCreate takes arguments P (an ECMAScript
/// language value) and F (a String or undefined) and returns either a normal
/// completion containing an Object or a throw completion.
pub fn reg_exp_create(agent: &mut Agent, pattern: Value, flags: Value) -> JsResult<Object> {
    // 1. Let obj be ! RegExpAlloc(%RegExp%).
    let obj = reg_exp_alloc(agent)?;
    // 2. Return ? RegExpInitialize(obj, P, F).
    reg_exp_initialize(agent, obj, pattern, flags)
}

/// ### [22.2.3.2 RegExpAlloc ( newTarget )](https://tc39.es/ecma262/#sec-regexpalloc)
fn reg_exp_alloc(agent: &mut Agent) -> JsResult<Object> {
    // 1. Let obj be ? OrdinaryCreateFromConstructor(newTarget, "%RegExp.prototype%", « [[OriginalSource]], [[OriginalFlags]], [[RegExpRecord]], [[RegExpMatcher]] »).
    let obj = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::RegExp), None);
    // 2. Perform ! DefinePropertyOrThrow(obj, "lastIndex", PropertyDescriptor { [[Writable]]: true, [[Enumerable]]: false, [[Configurable]]: false }).
    let last_index = PropertyKey::from_str(agent, "lastIndex");
    define_property_or_throw(
        agent,
        obj,
        last_index,
        PropertyDescriptor {
            writable: Some(true),
            enumerable: Some(false),
            configurable: Some(false),
            ..Default::default()
        },
    )?;
    // 3. Return obj.
    Ok(obj)
}

/// ### [22.2.3.3 RegExpInitialize ( obj, pattern, flags )](https://tc39.es/ecma262/#sec-regexpinitialize)
fn reg_exp_initialize(
    agent: &mut Agent,
    obj: Object,
    pattern: Value,
    flags: Value,
) -> JsResult<Object> {
    // 1. If pattern is undefined, let P be the empty String.
    // 2. Else, let P be ? ToString(pattern).
    let p = if pattern.is_undefined() {
        String::EMPTY_STRING
    } else {
        to_string(agent, pattern)?
    };
    // 3. If flags is undefined, let F be the empty String.
    // 4. Else, let F be ? ToString(flags).
    let f = if flags.is_undefined() {
        String::EMPTY_STRING
    } else {
        to_string(agent, flags)?
    };
    // 5. If F contains any code unit other than "d", "g", "i", "m", "s", "u",
    //    "v", or "y", or if F contains any code unit more than once, throw a
    //    SyntaxError exception.
    let code_units = f.code_units(agent);
    let mut seen = [false; VALID_FLAGS.len()];
    for code_unit in &code_units {
        let position = VALID_FLAGS
            .bytes()
            .position(|flag| u16::from(flag) == *code_unit);
        match position {
            Some(position) if !seen[position] => seen[position] = true,
            _ => {
                return Err(agent.throw_exception(
                    ExceptionType::SyntaxError,
                    format!(
                        "Invalid regular expression flags '{}'",
                        f.to_string_lossy(agent)
                    ),
                ));
            }
        }
    }
    // 9. If F contains "u", let u be true; else let u be false.
    // 10. If F contains "v", let v be true; else let v be false.
    // 13. Let parseResult be ParsePattern(patternText, u, v).
    // 14. If parseResult is a non-empty List of SyntaxError objects, throw a SyntaxError exception.
    let u = has_flag(&code_units, b'u');
    let v = has_flag(&code_units, b'v');
    if u && v {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::SyntaxError,
            "Invalid regular expression flags: 'u' and 'v' are mutually exclusive",
        ));
    }
    // 16. Set obj.[[OriginalSource]] to P.
    // 17. Set obj.[[OriginalFlags]] to F.
    if let ObjectKind::RegExp(data) = &mut agent[obj].kind {
        data.original_source = p;
        data.original_flags = f;
    }
    // 22. Perform ? Set(obj, "lastIndex", +0𝔽, true).
    let last_index = PropertyKey::from_str(agent, "lastIndex");
    set(agent, obj, last_index, Value::from(0), true)?;
    // 23. Return obj.
    Ok(obj)
}

fn has_flag(code_units: &[u16], flag: u8) -> bool {
    code_units.contains(&u16::from(flag))
}

fn reg_exp_data(agent: &Agent, value: Value) -> Option<RegExpHeapData> {
    match value {
        Value::Object(object) => match agent[object].kind {
            ObjectKind::RegExp(data) => Some(data),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) struct RegExpPrototype;

struct RegExpPrototypeGetFlags;
impl Builtin for RegExpPrototypeGetFlags {
    const NAME: &'static str = "get flags";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(RegExpPrototype::get_flags);
}
impl BuiltinGetter for RegExpPrototypeGetFlags {}

struct RegExpPrototypeGetSource;
impl Builtin for RegExpPrototypeGetSource {
    const NAME: &'static str = "get source";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(RegExpPrototype::get_source);
}
impl BuiltinGetter for RegExpPrototypeGetSource {}

struct RegExpPrototypeToString;
impl Builtin for RegExpPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(RegExpPrototype::to_string);
}

macro_rules! flag_getter {
    ($name:ident, $getter:literal, $function:ident, $flag:literal) => {
        struct $name;
        impl Builtin for $name {
            const NAME: &'static str = $getter;
            const LENGTH: u8 = 0;
            const BEHAVIOUR: Behaviour = Behaviour::Regular(RegExpPrototype::$function);
        }
        impl BuiltinGetter for $name {}

        impl RegExpPrototype {
            fn $function(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
                // 1. Let R be the this value.
                // 2. Let cu be the code unit 0x0067 (LATIN SMALL LETTER G), etc.
                // 3. Return ? RegExpHasFlag(R, cu).
                reg_exp_has_flag(agent, this_value, $flag)
            }
        }
    };
}

flag_getter!(RegExpPrototypeGetHasIndices, "get hasIndices", get_has_indices, b'd');
flag_getter!(RegExpPrototypeGetGlobal, "get global", get_global, b'g');
flag_getter!(RegExpPrototypeGetIgnoreCase, "get ignoreCase", get_ignore_case, b'i');
flag_getter!(RegExpPrototypeGetMultiline, "get multiline", get_multiline, b'm');
flag_getter!(RegExpPrototypeGetDotAll, "get dotAll", get_dot_all, b's');
flag_getter!(RegExpPrototypeGetUnicode, "get unicode", get_unicode, b'u');
flag_getter!(RegExpPrototypeGetUnicodeSets, "get unicodeSets", get_unicode_sets, b'v');
flag_getter!(RegExpPrototypeGetSticky, "get sticky", get_sticky, b'y');

/// ### [22.2.6.4.1 RegExpHasFlag ( R, codeUnit )](https://tc39.es/ecma262/#sec-regexphasflag)
fn reg_exp_has_flag(agent: &mut Agent, r: Value, code_unit: u8) -> JsResult<Value> {
    // 1. If R is not an Object, throw a TypeError exception.
    let Value::Object(object) = r else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "RegExp.prototype flag getter called on a non-object",
        ));
    };
    // 2. If R does not have an [[OriginalFlags]] internal slot, then
    let Some(data) = reg_exp_data(agent, r) else {
        // a. If SameValue(R, %RegExp.prototype%) is true, return undefined.
        if object == agent.current_realm().intrinsics().reg_exp_prototype() {
            return Ok(Value::Undefined);
        }
        // b. Otherwise, throw a TypeError exception.
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "RegExp.prototype flag getter called on a non-RegExp",
        ));
    };
    // 3. Let flags be R.[[OriginalFlags]].
    // 4. If flags contains codeUnit, return true.
    // 5. Return false.
    let flags = data.original_flags.code_units(agent);
    Ok(Value::Boolean(has_flag(&flags, code_unit)))
}

impl RegExpPrototype {
    /// ### [22.2.6.4 get RegExp.prototype.flags](https://tc39.es/ecma262/#sec-get-regexp.prototype.flags)
    fn get_flags(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let R be the this value.
        // 2. If R is not an Object, throw a TypeError exception.
        let Value::Object(r) = this_value else {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "get RegExp.prototype.flags called on a non-object",
            ));
        };
        // 3. Let codeUnits be a new empty List.
        let mut code_units = std::string::String::with_capacity(VALID_FLAGS.len());
        // 4. Let hasIndices be ToBoolean(? Get(R, "hasIndices")).
        // 5. If hasIndices is true, append the code unit 0x0064 (LATIN SMALL LETTER D) to codeUnits.
        // ...
        // 18. Let sticky be ToBoolean(? Get(R, "sticky")).
        // 19. If sticky is true, append the code unit 0x0079 (LATIN SMALL LETTER Y) to codeUnits.
        for (name, flag) in [
            ("hasIndices", 'd'),
            ("global", 'g'),
            ("ignoreCase", 'i'),
            ("multiline", 'm'),
            ("dotAll", 's'),
            ("unicode", 'u'),
            ("unicodeSets", 'v'),
            ("sticky", 'y'),
        ] {
            let key = PropertyKey::from_str(agent, name);
            let value = get(agent, r, key)?;
            if to_boolean(agent, value) {
                code_units.push(flag);
            }
        }
        // 20. Return the String value whose code units are the elements of the List codeUnits.
        Ok(Value::from_string(agent, code_units))
    }

    /// ### [22.2.6.13 get RegExp.prototype.source](https://tc39.es/ecma262/#sec-get-regexp.prototype.source)
    fn get_source(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let R be the this value.
        // 2. If R is not an Object, throw a TypeError exception.
        let Value::Object(r) = this_value else {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "get RegExp.prototype.source called on a non-object",
            ));
        };
        // 3. If R does not have an [[OriginalSource]] internal slot, then
        let Some(data) = reg_exp_data(agent, this_value) else {
            // a. If SameValue(R, %RegExp.prototype%) is true, return "(?:)".
            if r == agent.current_realm().intrinsics().reg_exp_prototype() {
                return Ok(Value::from_str(agent, "(?:)"));
            }
            // b. Otherwise, throw a TypeError exception.
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "get RegExp.prototype.source called on a non-RegExp",
            ));
        };
        // 4. Assert: R has an [[OriginalFlags]] internal slot.
        // 5. Let src be R.[[OriginalSource]].
        // 6. Let flags be R.[[OriginalFlags]].
        // 7. Return EscapeRegExpPattern(src, flags).
        Ok(escape_reg_exp_pattern(agent, data.original_source).into_value())
    }

    /// ### [22.2.6.17 RegExp.prototype.toString ( )](https://tc39.es/ecma262/#sec-regexp.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let R be the this value.
        // 2. If R is not an Object, throw a TypeError exception.
        let Value::Object(r) = this_value else {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "RegExp.prototype.toString called on a non-object",
            ));
        };
        // 3. Let pattern be ? ToString(? Get(R, "source")).
        let key = PropertyKey::from_str(agent, "source");
        let pattern = get(agent, r, key)?;
        let pattern = to_string(agent, pattern)?;
        // 4. Let flags be ? ToString(? Get(R, "flags")).
        let key = PropertyKey::from_str(agent, "flags");
        let flags = get(agent, r, key)?;
        let flags = to_string(agent, flags)?;
        // 5. Let result be the string-concatenation of "/", pattern, "/", and flags.
        let mut code_units = vec![u16::from(b'/')];
        code_units.extend(pattern.code_units(agent));
        code_units.push(u16::from(b'/'));
        code_units.extend(flags.code_units(agent));
        // 6. Return result.
        Ok(String::from_code_units(agent, &code_units).into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.reg_exp_prototype();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(11)
            .with_prototype(object_prototype)
            .with_builtin_function_getter_property::<RegExpPrototypeGetDotAll>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetFlags>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetGlobal>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetHasIndices>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetIgnoreCase>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetMultiline>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetSource>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetSticky>()
            .with_builtin_function_property::<RegExpPrototypeToString>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetUnicode>()
            .with_builtin_function_getter_property::<RegExpPrototypeGetUnicodeSets>()
            .build();
    }
}

/// ### [22.2.6.13.1 EscapeRegExpPattern ( P, F )](https://tc39.es/ecma262/#sec-escaperegexppattern)
///
/// Escapes `/` and line terminators so that `/${source}/${flags}` parses
/// back to an equivalent RegExp.
fn escape_reg_exp_pattern(agent: &mut Agent, source: String) -> String {
    if source.is_empty() {
        return String::from_str(agent, "(?:)");
    }
    let code_units = source.code_units(agent);
    let mut escaped = Vec::with_capacity(code_units.len());
    let mut in_class = false;
    let mut iter = code_units.iter().copied();
    while let Some(code_unit) = iter.next() {
        match code_unit {
            0x5C => {
                // An escape sequence is copied as is.
                escaped.push(code_unit);
                if let Some(next) = iter.next() {
                    escaped.push(next);
                }
            }
            0x5B => {
                in_class = true;
                escaped.push(code_unit);
            }
            0x5D => {
                in_class = false;
                escaped.push(code_unit);
            }
            0x2F if !in_class => escaped.extend_from_slice(&[0x5C, 0x2F]),
            0x0A => escaped.extend("\\n".encode_utf16()),
            0x0D => escaped.extend("\\r".encode_utf16()),
            0x2028 => escaped.extend("\\u2028".encode_utf16()),
            0x2029 => escaped.extend("\\u2029".encode_utf16()),
            _ => escaped.push(code_unit),
        }
    }
    String::from_code_units(agent, &escaped)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{get, invoke},
        execution::Options,
    };

    #[test]
    fn reg_exp_create_records_source_and_flags() {
        let mut agent = Agent::new(Options::default());
        let pattern = Value::from_str(&mut agent, "a/b");
        let flags = Value::from_str(&mut agent, "gi");
        let r = reg_exp_create(&mut agent, pattern, flags).unwrap();
        let source = PropertyKey::from_str(&mut agent, "source");
        let flags = PropertyKey::from_str(&mut agent, "flags");
        let global = PropertyKey::from_str(&mut agent, "global");
        let sticky = PropertyKey::from_str(&mut agent, "sticky");
        let last_index = PropertyKey::from_str(&mut agent, "lastIndex");
        let to_string = PropertyKey::from_str(&mut agent, "toString");

        let escaped = Value::from_str(&mut agent, "a\\/b");
        assert_eq!(get(&mut agent, r, source), Ok(escaped));
        let gi = Value::from_str(&mut agent, "gi");
        assert_eq!(get(&mut agent, r, flags), Ok(gi));
        assert_eq!(get(&mut agent, r, global), Ok(Value::Boolean(true)));
        assert_eq!(get(&mut agent, r, sticky), Ok(Value::Boolean(false)));
        assert_eq!(get(&mut agent, r, last_index), Ok(Value::from(0)));
        let printed = Value::from_str(&mut agent, "/a\\/b/gi");
        assert_eq!(invoke(&mut agent, r.into_value(), to_string, None), Ok(printed));
    }

    #[test]
    fn flags_are_reported_in_canonical_order() {
        let mut agent = Agent::new(Options::default());
        let flags = Value::from_str(&mut agent, "ysd");
        let r = reg_exp_create(&mut agent, Value::Undefined, flags).unwrap();
        let key = PropertyKey::from_str(&mut agent, "flags");
        let expected = Value::from_str(&mut agent, "dsy");
        assert_eq!(get(&mut agent, r, key), Ok(expected));
        let key = PropertyKey::from_str(&mut agent, "source");
        let empty = Value::from_str(&mut agent, "(?:)");
        assert_eq!(get(&mut agent, r, key), Ok(empty));
    }

    #[test]
    fn invalid_flags_are_syntax_errors() {
        let mut agent = Agent::new(Options::default());
        for flags in ["gg", "x", "uv"] {
            let flags = Value::from_str(&mut agent, flags);
            let error = reg_exp_create(&mut agent, Value::Undefined, flags).unwrap_err();
            assert_eq!(
                error.exception_type(&agent),
                Some(ExceptionType::SyntaxError)
            );
        }
    }

    #[test]
    fn prototype_getters_on_the_prototype() {
        let mut agent = Agent::new(Options::default());
        let prototype = agent.current_realm().intrinsics().reg_exp_prototype();
        let source = PropertyKey::from_str(&mut agent, "source");
        let global = PropertyKey::from_str(&mut agent, "global");
        let empty = Value::from_str(&mut agent, "(?:)");
        assert_eq!(get(&mut agent, prototype, source), Ok(empty));
        assert_eq!(get(&mut agent, prototype, global), Ok(Value::Undefined));
    }
}
