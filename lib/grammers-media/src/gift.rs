// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::chat::PeerId;
use grammers_media_tl as tl;

/// A gift that has been upgraded into a unique, numbered collectible.
#[derive(Clone, Debug, PartialEq)]
pub struct UpgradedGift {
    pub raw: tl::types::StarGiftUnique,
}

impl UpgradedGift {
    pub fn from_raw(gift: tl::types::StarGiftUnique) -> Self {
        Self { raw: gift }
    }

    pub fn id(&self) -> i64 {
        self.raw.id
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    /// Unique name of the gift, used in its link.
    pub fn slug(&self) -> &str {
        &self.raw.slug
    }

    /// Position of this gift among all upgraded gifts of the same type.
    pub fn number(&self) -> i32 {
        self.raw.num
    }

    pub fn total_upgraded_count(&self) -> i32 {
        self.raw.availability_issued
    }

    pub fn max_upgraded_count(&self) -> i32 {
        self.raw.availability_total
    }

    /// Identifier of the user who owns the gift, if the owner is a user.
    pub fn owner_id(&self) -> Option<i64> {
        match self.raw.owner_id.as_ref().map(PeerId::from) {
            Some(PeerId::User(id)) => Some(id),
            _ => None,
        }
    }

    /// Name of the owner, when their account is hidden.
    pub fn owner_name(&self) -> Option<&str> {
        self.raw.owner_name.as_deref()
    }

    /// TON address of the owner, once the gift has been exported to the blockchain.
    pub fn owner_address(&self) -> Option<&str> {
        self.raw.owner_address.as_deref()
    }

    pub fn is_premium_only(&self) -> bool {
        self.raw.require_premium
    }
}

impl From<tl::enums::StarGift> for UpgradedGift {
    fn from(gift: tl::enums::StarGift) -> Self {
        let tl::enums::StarGift::Unique(gift) = gift;
        Self::from_raw(gift)
    }
}
