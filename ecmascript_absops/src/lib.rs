// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ECMAScript abstract operations
//!
//! A transcription of the abstract operations of
//! [ECMA-262 section 7](https://tc39.es/ecma262/#sec-abstract-operations):
//! type conversion, testing and comparison, and operations on objects,
//! together with the Number primitive operations and the minimal object
//! model needed to observe them.
//!
//! All state lives in an [`Agent`](ecmascript::execution::Agent). Values are
//! small `Copy` handles into the agent's [`Heap`](heap::Heap).

pub mod ecmascript;
pub mod heap;

pub use heap::Heap;
