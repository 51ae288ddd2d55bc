// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Friendly media types, and the [`MediaEnvelope`] that holds one of them.
mod attributes;
mod contact;
mod document;
mod envelope;
mod game;
mod geo;
mod giveaway;
mod kind;
mod payments;
mod photo;
pub mod photo_sizes;
mod poll;
mod story;
mod web_page;

pub use contact::{Contact, Dice};
pub use document::{Animation, Audio, Document, Sticker, Video, VideoNote, Voice};
pub use envelope::{Media, MediaEnvelope};
pub use game::Game;
pub use geo::{Location, Venue};
pub use giveaway::{Giveaway, GiveawayWinners};
pub use kind::MediaKind;
pub use payments::{Invoice, PaidMedia, PaidMediaInfo, PaidMediaPreview};
pub use photo::Photo;
pub use photo_sizes::PhotoSize;
pub use poll::Poll;
pub use story::Story;
pub use web_page::WebPage;
