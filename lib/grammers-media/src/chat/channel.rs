// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::PeerId;
use grammers_media_tl as tl;

/// A broadcast channel.
///
/// In a broadcast channel, only administrators can broadcast messages to all the subscribers.
/// The rest of users can only join and see messages.
///
/// Broadcast channels and megagroups both are treated as "channels" by Telegram's API, but
/// this variant will always represent a broadcast channel. The only difference between a
/// broadcast channel and a megagroup are the permissions (default, and available).
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub raw: tl::types::Channel,
}

impl Channel {
    /// Forbidden channels are filled in with the little information they carry.
    pub(crate) fn from_raw(chat: tl::enums::Chat) -> Self {
        use tl::enums::Chat as C;

        let raw = match chat {
            C::Channel(channel) => channel,
            C::ChannelForbidden(channel) => tl::types::Channel {
                creator: false,
                left: true,
                broadcast: channel.broadcast,
                verified: false,
                megagroup: channel.megagroup,
                restricted: false,
                signatures: false,
                min: false,
                scam: false,
                fake: false,
                gigagroup: false,
                noforwards: false,
                forum: false,
                id: channel.id,
                access_hash: Some(channel.access_hash),
                title: channel.title,
                username: None,
                date: 0,
                participants_count: None,
            },
            C::Empty(_) | C::Chat(_) | C::Forbidden(_) => {
                unreachable!("small group chats are never broadcast channels")
            }
        };

        Self { raw }
    }

    /// Return the identity of this channel.
    pub fn id(&self) -> PeerId {
        PeerId::Channel(self.raw.id)
    }

    /// Return the title of this channel.
    pub fn title(&self) -> &str {
        self.raw.title.as_str()
    }

    /// Return the public @username of this channel, if any.
    pub fn username(&self) -> Option<&str> {
        self.raw.username.as_deref()
    }

    /// Has this channel been verified by Telegram?
    pub fn is_verified(&self) -> bool {
        self.raw.verified
    }

    /// Are messages posted in this channel signed by their author?
    pub fn signatures(&self) -> bool {
        self.raw.signatures
    }
}
