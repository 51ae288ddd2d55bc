// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::chat::{Chat, ChatMap, PeerId, User};
use crate::errors::MissingReferenceError;
use crate::utils::{Date, date};
use grammers_media_tl as tl;
use log::debug;

/// Where a message originally came from.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageOrigin {
    /// The message was originally sent by a known user.
    User { date: Date, sender_user: User },

    /// The message was originally sent by a user who hides their account in forwards.
    HiddenUser { date: Date, sender_user_name: String },

    /// The message was originally sent on behalf of a group.
    Chat {
        date: Date,
        sender_chat: Chat,
        author_signature: Option<String>,
    },

    /// The message was originally posted in a broadcast channel.
    Channel {
        date: Date,
        chat: Chat,
        message_id: Option<i32>,
        author_signature: Option<String>,
    },
}

impl MessageOrigin {
    /// Senders missing from `chats` are reported as hidden users if the header has their
    /// name, and as an error otherwise.
    pub fn from_raw(
        header: tl::enums::MessageFwdHeader,
        chats: &ChatMap,
    ) -> Result<Self, MissingReferenceError> {
        let tl::enums::MessageFwdHeader::Header(header) = header;
        let date = date(header.date);

        let peer = match &header.from_id {
            Some(peer) => PeerId::from(peer),
            None => {
                return Ok(Self::HiddenUser {
                    date,
                    sender_user_name: header.from_name.unwrap_or_default(),
                });
            }
        };

        let chat = match chats.resolve(peer) {
            Ok(chat) => chat.clone(),
            Err(error) => {
                return match header.from_name {
                    Some(sender_user_name) => {
                        debug!("origin {} not in the chat map, using its name", peer);
                        Ok(Self::HiddenUser {
                            date,
                            sender_user_name,
                        })
                    }
                    None => Err(error),
                };
            }
        };

        Ok(match chat {
            Chat::User(sender_user) => Self::User { date, sender_user },
            Chat::Channel(_) => Self::Channel {
                date,
                chat,
                message_id: header.channel_post,
                author_signature: header.post_author,
            },
            Chat::Group(_) => Self::Chat {
                date,
                sender_chat: chat,
                author_signature: header.post_author,
            },
        })
    }

    /// Date the message was sent originally.
    pub fn date(&self) -> Date {
        match self {
            Self::User { date, .. }
            | Self::HiddenUser { date, .. }
            | Self::Chat { date, .. }
            | Self::Channel { date, .. } => *date,
        }
    }
}
