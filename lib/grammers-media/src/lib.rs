// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Friendly, typed views over the media attached to Telegram messages.
//!
//! Telegram describes the media of a message with a single polymorphic
//! `MessageMedia` type, and a lot of information hides one level deeper
//! (a "document" may really be a sticker, a round video note or a voice
//! message, depending on the attributes it carries). This library turns
//! that raw representation into a [`MediaEnvelope`]: a record in which at
//! most one kind of media is present, tagged with its [`MediaKind`].
//!
//! ```
//! use grammers_media::{ChatMap, MediaEnvelope, MediaKind, tl};
//!
//! let chats = ChatMap::empty();
//! let media = tl::enums::MessageMedia::Dice(tl::types::MessageMediaDice {
//!     value: 4,
//!     emoticon: "🎯".to_string(),
//! });
//!
//! let envelope = MediaEnvelope::decode(Some(media), &chats).unwrap();
//! assert_eq!(envelope.kind(), MediaKind::Dice);
//! assert_eq!(envelope.dice().map(|d| d.value()), Some(4));
//! ```
//!
//! Some media refers to other chats or users (a forwarded story is posted
//! by someone, a giveaway runs in a set of channels). Telegram always sends
//! those next to the media in the same response, as separate lists of users
//! and chats. Build a [`ChatMap`] with them once per response, and use it for
//! every message in that response.
//!
//! Decoding never performs any network request. Anything that needs one
//! (for example, fetching the title of a sticker set) has to happen before
//! or after decoding.
//!
//! # Re-exports
//!
//! ## grammers-media-tl as tl
//!
//! This crate is re-exported wholesale under the [`tl`] namespace. The friendly
//! types expose their raw counterpart in fields called `raw` or prefixed with
//! `raw_`. Keep in mind that **these fields are not part of the semantic
//! versioning guarantees**.
//!
//! # Features
//!
//! * `serde`: implements `serde::Serialize` and `serde::Deserialize` on the raw
//!   definitions and on [`MediaKind`].

#![deny(unsafe_code)]

pub mod chat;
pub mod errors;
pub mod gift;
pub mod media;
pub mod message;
#[cfg(test)]
mod testing;
pub(crate) mod utils;

pub use chat::{Chat, ChatMap, PeerId};
pub use errors::{DecodeError, MalformedMediaError, MissingReferenceError};
pub use gift::UpgradedGift;
pub use grammers_media_tl as tl;
pub use media::{Media, MediaEnvelope, MediaKind};
pub use message::{ExternalReplyInfo, LinkPreviewOptions, MessageOrigin};
