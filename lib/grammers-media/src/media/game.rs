// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Animation, Document, Photo};
use grammers_media_tl as tl;

/// An HTML5 game offered by a bot.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub raw: tl::types::Game,
}

impl Game {
    pub fn from_raw_media(game: tl::types::MessageMediaGame) -> Self {
        Self {
            raw: match game.game {
                tl::enums::Game::Game(game) => game,
            },
        }
    }

    pub fn id(&self) -> i64 {
        self.raw.id
    }

    /// Unique name of the game within its bot.
    pub fn short_name(&self) -> &str {
        &self.raw.short_name
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn description(&self) -> &str {
        &self.raw.description
    }

    /// The photo shown in the game's preview.
    pub fn photo(&self) -> Option<Photo> {
        Photo::from_raw_enum(Some(self.raw.photo.clone()))
    }

    /// The animation shown in the game's preview, if any.
    pub fn animation(&self) -> Option<Animation> {
        Document::from_raw_enum(self.raw.document.clone()).map(Animation::from_document)
    }
}
