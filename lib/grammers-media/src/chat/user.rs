// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::PeerId;
use grammers_media_tl as tl;

/// A user.
///
/// Users include your contacts, members of a group, bot accounts created by [@BotFather], or
/// anyone with a Telegram account.
///
/// [@BotFather]: https://t.me/BotFather
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub raw: tl::types::User,
}

impl User {
    pub fn from_raw(user: tl::enums::User) -> Self {
        Self {
            raw: match user {
                tl::enums::User::Empty(empty) => tl::types::User {
                    is_self: false,
                    contact: false,
                    mutual_contact: false,
                    deleted: false,
                    bot: false,
                    verified: false,
                    restricted: false,
                    min: false,
                    support: false,
                    scam: false,
                    fake: false,
                    premium: false,
                    id: empty.id,
                    access_hash: None,
                    first_name: None,
                    last_name: None,
                    username: None,
                    phone: None,
                    lang_code: None,
                },
                tl::enums::User::User(user) => user,
            },
        }
    }

    pub fn id(&self) -> PeerId {
        PeerId::User(self.raw.id)
    }

    /// Return the first name of this user.
    ///
    /// The name will be empty if the account was deleted.
    pub fn first_name(&self) -> &str {
        self.raw.first_name.as_deref().unwrap_or("")
    }

    /// Return the last name of this user, if any.
    pub fn last_name(&self) -> Option<&str> {
        self.raw
            .last_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Return the full name of this user.
    ///
    /// This is equal to the user's first name concatenated with the user's last name, if this
    /// is not empty. Otherwise, it equals the user's first name.
    pub fn full_name(&self) -> String {
        match self.last_name() {
            Some(last_name) => format!("{} {}", self.first_name(), last_name),
            None => self.first_name().to_string(),
        }
    }

    /// Return the public @username of this user, if any.
    pub fn username(&self) -> Option<&str> {
        self.raw.username.as_deref()
    }

    /// Return the phone number of this user, if they are not private.
    pub fn phone(&self) -> Option<&str> {
        self.raw.phone.as_deref()
    }

    /// Does this user represent the account that's currently logged in?
    pub fn is_self(&self) -> bool {
        self.raw.is_self
    }

    /// Is this user a bot account?
    pub fn is_bot(&self) -> bool {
        self.raw.bot
    }

    /// Has the account of this user been deleted?
    pub fn is_deleted(&self) -> bool {
        self.raw.deleted
    }

    /// Has this user been verified by Telegram?
    pub fn is_verified(&self) -> bool {
        self.raw.verified
    }

    /// Does this user have a Telegram Premium subscription?
    pub fn is_premium(&self) -> bool {
        self.raw.premium
    }

    /// IETF language tag of the user's language, if known.
    pub fn lang_code(&self) -> Option<&str> {
        self.raw.lang_code.as_deref()
    }
}
