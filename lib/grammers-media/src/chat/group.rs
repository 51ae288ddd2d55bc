// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::PeerId;
use grammers_media_tl as tl;

/// A group chat.
///
/// Telegram's API internally distinguishes between "small group chats" and "megagroups", also
/// known as "supergroups" in the UI of Telegram applications.
///
/// Small group chats are the default, and offer less features than megagroups, but you can
/// join more of them. Certain actions in official clients, like setting a chat's username,
/// silently upgrade the chat to a megagroup.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub raw: tl::enums::Chat,
}

impl Group {
    /// Broadcast channels belong in [`Channel`](super::Channel); use [`Chat::from_chat`]
    /// to pick the right one.
    ///
    /// [`Chat::from_chat`]: super::Chat::from_chat
    pub fn from_raw(chat: tl::enums::Chat) -> Self {
        Self { raw: chat }
    }

    /// Return the identity of this group.
    ///
    /// Megagroups live in the same identifier space as channels.
    pub fn id(&self) -> PeerId {
        use tl::enums::Chat;

        match &self.raw {
            Chat::Empty(chat) => PeerId::Chat(chat.id),
            Chat::Chat(chat) => PeerId::Chat(chat.id),
            Chat::Forbidden(chat) => PeerId::Chat(chat.id),
            Chat::Channel(channel) => PeerId::Channel(channel.id),
            Chat::ChannelForbidden(channel) => PeerId::Channel(channel.id),
        }
    }

    /// Return the title of this group.
    ///
    /// The title may be the empty string if the group is not accessible.
    pub fn title(&self) -> &str {
        use tl::enums::Chat;

        match &self.raw {
            Chat::Empty(_) => "",
            Chat::Chat(chat) => chat.title.as_str(),
            Chat::Forbidden(chat) => chat.title.as_str(),
            Chat::Channel(channel) => channel.title.as_str(),
            Chat::ChannelForbidden(channel) => channel.title.as_str(),
        }
    }

    /// Return the public @username of this group, if any.
    ///
    /// Only megagroups can have a username.
    pub fn username(&self) -> Option<&str> {
        match &self.raw {
            tl::enums::Chat::Channel(channel) => channel.username.as_deref(),
            _ => None,
        }
    }

    /// Is this group a megagroup (also known as supergroup)?
    pub fn is_megagroup(&self) -> bool {
        use tl::enums::Chat;

        match &self.raw {
            Chat::Empty(_) | Chat::Chat(_) | Chat::Forbidden(_) => false,
            Chat::Channel(_) | Chat::ChannelForbidden(_) => true,
        }
    }
}
