// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::MediaEnvelope;
use crate::chat::{Chat, ChatMap, PeerId};
use crate::errors::DecodeError;
use crate::utils::{Date, date};
use grammers_media_tl as tl;

/// A story that was forwarded into, or mentioned in, a message.
#[derive(Clone, Debug, PartialEq)]
pub struct Story {
    pub raw: tl::types::MessageMediaStory,
    chat: Chat,
    content: Option<Box<MediaEnvelope>>,
}

impl Story {
    /// Fails if the poster of the story is not in `chats`, or if the story's own media
    /// cannot be decoded.
    pub fn from_raw_media(
        story: tl::types::MessageMediaStory,
        chats: &ChatMap,
    ) -> Result<Self, DecodeError> {
        let chat = chats.resolve(PeerId::from(&story.peer))?.clone();
        let content = match &story.story {
            Some(tl::enums::StoryItem::Item(item)) => Some(Box::new(MediaEnvelope::decode(
                Some((*item.media).clone()),
                chats,
            )?)),
            Some(tl::enums::StoryItem::Deleted(_) | tl::enums::StoryItem::Skipped(_)) | None => {
                None
            }
        };

        Ok(Self {
            raw: story,
            chat,
            content,
        })
    }

    pub fn id(&self) -> i32 {
        self.raw.id
    }

    /// The chat that posted the story.
    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    /// Was the message sent because the story mentioned someone?
    pub fn via_mention(&self) -> bool {
        self.raw.via_mention
    }

    pub fn date(&self) -> Option<Date> {
        match self.raw.story.as_ref()? {
            tl::enums::StoryItem::Deleted(_) => None,
            tl::enums::StoryItem::Skipped(item) => Some(date(item.date)),
            tl::enums::StoryItem::Item(item) => Some(date(item.date)),
        }
    }

    pub fn expire_date(&self) -> Option<Date> {
        match self.raw.story.as_ref()? {
            tl::enums::StoryItem::Deleted(_) => None,
            tl::enums::StoryItem::Skipped(item) => Some(date(item.expire_date)),
            tl::enums::StoryItem::Item(item) => Some(date(item.expire_date)),
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self.raw.story.as_ref()? {
            tl::enums::StoryItem::Item(item) => item.caption.as_deref(),
            _ => None,
        }
    }

    /// Is the story no longer available?
    pub fn is_deleted(&self) -> bool {
        matches!(self.raw.story, Some(tl::enums::StoryItem::Deleted(_)))
    }

    /// The media shown in the story, when it was sent along with the message.
    pub fn media(&self) -> Option<&MediaEnvelope> {
        self.content.as_deref()
    }
}
