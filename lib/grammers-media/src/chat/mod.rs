// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Users, groups and channels that media can refer to.
mod channel;
mod chat_map;
mod group;
mod user;

use grammers_media_tl as tl;
use std::fmt;

pub use channel::Channel;
pub use chat_map::ChatMap;
pub use group::Group;
pub use user::User;

/// Identity of a peer, as seen from the raw API.
///
/// Users, small group chats and channels (including megagroups) have separate
/// identifier spaces, so the bare identifier alone is not enough to find them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeerId {
    User(i64),
    Chat(i64),
    Channel(i64),
}

impl PeerId {
    /// The identifier without the kind of peer it belongs to.
    pub fn bare_id(&self) -> i64 {
        match *self {
            Self::User(id) | Self::Chat(id) | Self::Channel(id) => id,
        }
    }

    pub fn to_peer(&self) -> tl::enums::Peer {
        match *self {
            Self::User(user_id) => tl::types::PeerUser { user_id }.into(),
            Self::Chat(chat_id) => tl::types::PeerChat { chat_id }.into(),
            Self::Channel(channel_id) => tl::types::PeerChannel { channel_id }.into(),
        }
    }
}

impl From<&tl::enums::Peer> for PeerId {
    fn from(peer: &tl::enums::Peer) -> Self {
        use tl::enums::Peer as P;

        match peer {
            P::User(user) => Self::User(user.user_id),
            P::Chat(chat) => Self::Chat(chat.chat_id),
            P::Channel(channel) => Self::Channel(channel.channel_id),
        }
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user {}", id),
            Self::Chat(id) => write!(f, "chat {}", id),
            Self::Channel(id) => write!(f, "channel {}", id),
        }
    }
}

/// A chat.
///
/// Chats represent places where you can share messages with others.
///
/// * Private conversations with other people are treated as the chat of the user itself.
/// * Conversations in a group, whether it's private or public, are simply known as groups.
/// * Conversations where only administrators broadcast messages are known as channels.
#[derive(Clone, Debug, PartialEq)]
pub enum Chat {
    /// A [`User`].
    User(User),

    /// A [`Group`] chat.
    Group(Group),

    /// A broadcast [`Channel`].
    Channel(Channel),
}

impl Chat {
    pub fn from_user(user: tl::enums::User) -> Self {
        Self::User(User::from_raw(user))
    }

    pub fn from_chat(chat: tl::enums::Chat) -> Self {
        use tl::enums::Chat as C;

        let broadcast = match &chat {
            C::Empty(_) | C::Chat(_) | C::Forbidden(_) => false,
            C::Channel(channel) => channel.broadcast,
            C::ChannelForbidden(channel) => channel.broadcast,
        };

        if broadcast {
            Self::Channel(Channel::from_raw(chat))
        } else {
            Self::Group(Group::from_raw(chat))
        }
    }

    /// Return the identity of this chat.
    ///
    /// This identifier will never change. However, small group chats may be migrated to
    /// megagroups. If this happens, both the old small group chat and the new megagroup
    /// exist as separate chats with different identifiers.
    pub fn id(&self) -> PeerId {
        match self {
            Self::User(user) => user.id(),
            Self::Group(group) => group.id(),
            Self::Channel(channel) => channel.id(),
        }
    }

    /// Return the name of this chat.
    ///
    /// For private conversations (users), this is their first name. For groups and channels,
    /// this is their title.
    ///
    /// The name may be empty if the chat is inaccessible or if the account was deleted.
    pub fn name(&self) -> &str {
        match self {
            Self::User(user) => user.first_name(),
            Self::Group(group) => group.title(),
            Self::Channel(channel) => channel.title(),
        }
    }

    /// Return the public @username of this chat, if any.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.username(),
            Self::Group(group) => group.username(),
            Self::Channel(channel) => channel.username(),
        }
    }
}
