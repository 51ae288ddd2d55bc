// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Chat, PeerId, User};
use crate::errors::MissingReferenceError;
use grammers_media_tl as tl;
use std::collections::HashMap;
use std::sync::Arc;

/// Helper structure to efficiently retrieve chats via their peer.
///
/// A lot of responses include the chats related to them in the form of a list of users
/// and chats, making it annoying to extract a specific chat. This structure lets you
/// save those separate vectors in a single place and query them by using a `Peer`.
///
/// The map is never modified after being built, so the same `Arc<ChatMap>` can be shared
/// by any number of threads decoding the messages of one response.
#[derive(Debug, Default)]
pub struct ChatMap {
    map: HashMap<PeerId, Chat>,
}

impl ChatMap {
    /// Create a new chat set.
    ///
    /// If the same peer appears more than once, the last occurrence wins.
    pub fn new<U, C>(users: U, chats: C) -> Arc<Self>
    where
        U: IntoIterator<Item = tl::enums::User>,
        C: IntoIterator<Item = tl::enums::Chat>,
    {
        Arc::new(Self {
            map: users
                .into_iter()
                .map(Chat::from_user)
                .chain(chats.into_iter().map(Chat::from_chat))
                .map(|chat| (chat.id(), chat))
                .collect(),
        })
    }

    /// Create a new empty chat set.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Retrieve the full `Chat` object given its `Peer`.
    pub fn get(&self, peer: &tl::enums::Peer) -> Option<&Chat> {
        self.map.get(&peer.into())
    }

    /// Retrieve the full `Chat` object given its identity.
    pub fn get_by_id(&self, id: PeerId) -> Option<&Chat> {
        self.map.get(&id)
    }

    pub fn get_user(&self, user_id: i64) -> Option<&User> {
        match self.map.get(&PeerId::User(user_id)) {
            Some(Chat::User(user)) => Some(user),
            _ => None,
        }
    }

    /// Retrieve a channel or megagroup by its bare identifier.
    pub fn get_channel(&self, channel_id: i64) -> Option<&Chat> {
        self.map.get(&PeerId::Channel(channel_id))
    }

    /// Iterate over all the chats in the map, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Chat> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn resolve(&self, id: PeerId) -> Result<&Chat, MissingReferenceError> {
        self.map
            .get(&id)
            .ok_or(MissingReferenceError { peer: id })
    }

    pub(crate) fn resolve_user(&self, user_id: i64) -> Result<&User, MissingReferenceError> {
        self.get_user(user_id).ok_or(MissingReferenceError {
            peer: PeerId::User(user_id),
        })
    }
}
