// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the part of Telegram's
//! API that message media is made of, in the form of `struct` ([`types`])
//! and `enum` ([`enums`]).
//!
//! Values of these types are produced by the network layer once a response
//! has been read off the wire. Nothing in this crate reads or writes bytes;
//! it only describes the shape of already-deserialized data so that higher
//! level crates can turn it into friendlier objects.
//!
//! Every boxed type (`enums`) has one variant per constructor, named after
//! the constructor with the type's name stripped (so `messageMediaPhoto`
//! becomes `enums::MessageMedia::Photo(types::MessageMediaPhoto)`).
//! [`enums::MessageMedia`] additionally has an `Unknown` variant, used by
//! the network layer when it reads a media constructor it was not built
//! with, so that new media kinds never make a whole response fail.
//!
//! Fields holding formatting entities or other data unrelated to media are
//! not part of these definitions.
//!
//! # Features
//!
//! The default feature set includes:
//!
//! * `impl-from-type`.
//! * `impl-from-enum`.
//!
//! The available features are:
//!
//! * `impl-from-type`: implements `From<Type> for Enum`.
//! * `impl-from-enum`: implements `TryFrom<Enum> for Type`.
//! * `impl-serde`: implements `serde::Serialize` and `serde::Deserialize`.
//!
//! [`types`]: types/index.html
//! [`enums`]: enums/index.html

#![deny(unsafe_code)]

pub mod enums;
pub mod errors;
pub mod types;
