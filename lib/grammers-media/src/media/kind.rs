// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of media a message carries, after looking past the raw constructor.
///
/// A raw document, for example, may turn out to be a sticker, a voice message or a
/// round video note.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MediaKind {
    Audio,
    Document,
    Photo,
    Sticker,
    Video,
    Animation,
    Voice,
    VideoNote,
    Contact,
    Location,
    Venue,
    Poll,
    WebPage,
    Dice,
    Game,
    Story,
    Giveaway,
    GiveawayWinners,
    Invoice,
    PaidMedia,
    /// The message has no media, or the media is not something that can be shown.
    #[default]
    None,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Photo => "photo",
            Self::Sticker => "sticker",
            Self::Video => "video",
            Self::Animation => "animation",
            Self::Voice => "voice",
            Self::VideoNote => "video_note",
            Self::Contact => "contact",
            Self::Location => "location",
            Self::Venue => "venue",
            Self::Poll => "poll",
            Self::WebPage => "web_page",
            Self::Dice => "dice",
            Self::Game => "game",
            Self::Story => "story",
            Self::Giveaway => "giveaway",
            Self::GiveawayWinners => "giveaway_winners",
            Self::Invoice => "invoice",
            Self::PaidMedia => "paid_media",
            Self::None => "none",
        }
    }

    /// Can media of this kind be hidden behind a spoiler?
    pub fn supports_spoiler(&self) -> bool {
        matches!(self, Self::Photo | Self::Animation | Self::Video)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
