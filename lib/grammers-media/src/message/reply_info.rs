// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{LinkPreviewOptions, MessageOrigin};
use crate::chat::{Chat, ChatMap, PeerId};
use crate::errors::DecodeError;
use crate::media::{MediaEnvelope, MediaKind};
use grammers_media_tl as tl;

/// Information about a message that is being replied to, which may come from another chat
/// or forum topic.
///
/// The media of the replied message is decoded the same way the media of any message is,
/// and is available through [`ExternalReplyInfo::media`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExternalReplyInfo {
    origin: MessageOrigin,
    chat: Option<Chat>,
    message_id: Option<i32>,
    link_preview_options: Option<LinkPreviewOptions>,
    media: MediaEnvelope,
}

impl ExternalReplyInfo {
    /// Returns `Ok(None)` for replies to stories and for replies that carry no information
    /// about where the replied message came from.
    pub fn from_raw(
        header: tl::enums::MessageReplyHeader,
        chats: &ChatMap,
    ) -> Result<Option<Self>, DecodeError> {
        let header = match header {
            tl::enums::MessageReplyHeader::Header(header) => header,
            tl::enums::MessageReplyHeader::MessageReplyStoryHeader(_) => return Ok(None),
        };

        let reply_from = match header.reply_from {
            Some(reply_from) => reply_from,
            None => return Ok(None),
        };

        let origin = MessageOrigin::from_raw(reply_from, chats)?;

        // Only replies to other channels name the chat.
        let chat = match header.reply_to_peer_id.as_ref().map(PeerId::from) {
            Some(peer @ PeerId::Channel(_)) => Some(chats.resolve(peer)?.clone()),
            _ => None,
        };

        let link_preview_options = header
            .reply_media
            .as_ref()
            .and_then(LinkPreviewOptions::from_raw_media);

        Ok(Some(Self {
            origin,
            chat,
            message_id: header.reply_to_msg_id,
            link_preview_options,
            media: MediaEnvelope::decode(header.reply_media, chats)?,
        }))
    }

    /// Origin of the message replied to.
    pub fn origin(&self) -> &MessageOrigin {
        &self.origin
    }

    /// Chat the original message belongs to, only known if it is a channel.
    pub fn chat(&self) -> Option<&Chat> {
        self.chat.as_ref()
    }

    /// Identifier of the original message in its chat, if known.
    pub fn message_id(&self) -> Option<i32> {
        self.message_id
    }

    pub fn link_preview_options(&self) -> Option<&LinkPreviewOptions> {
        self.link_preview_options.as_ref()
    }

    /// Media of the original message. Empty if it had none.
    pub fn media(&self) -> &MediaEnvelope {
        &self.media
    }

    pub fn kind(&self) -> MediaKind {
        self.media.kind()
    }

    /// Whether the media of the original message is covered by a spoiler animation.
    pub fn has_media_spoiler(&self) -> bool {
        self.media.has_spoiler()
    }
}
