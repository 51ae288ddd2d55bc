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

/// A giveaway of Telegram Premium subscriptions or Stars, run by one or more channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Giveaway {
    pub raw: tl::types::MessageMediaGiveaway,
    channels: Vec<Chat>,
}

impl Giveaway {
    pub fn from_raw_media(
        giveaway: tl::types::MessageMediaGiveaway,
        chats: &ChatMap,
    ) -> Result<Self, MissingReferenceError> {
        let channels = giveaway
            .channels
            .iter()
            .map(|id| chats.resolve(PeerId::Channel(*id)).cloned())
            .collect::<Result<_, _>>()?;

        Ok(Self {
            raw: giveaway,
            channels,
        })
    }

    /// Channels that the users must join to participate.
    pub fn channels(&self) -> &[Chat] {
        &self.channels
    }

    /// Number of users that will win.
    pub fn quantity(&self) -> i32 {
        self.raw.quantity
    }

    /// Months of Telegram Premium each winner gets, for Premium giveaways.
    pub fn months(&self) -> Option<i32> {
        self.raw.months
    }

    /// Stars shared by the winners, for Stars giveaways.
    pub fn stars(&self) -> Option<i64> {
        self.raw.stars
    }

    /// When the winners will be chosen.
    pub fn until_date(&self) -> Date {
        date(self.raw.until_date)
    }

    /// ISO 3166-1 alpha-2 codes of the countries users must be from. Empty if anyone can join.
    pub fn countries(&self) -> &[String] {
        self.raw.countries_iso2.as_deref().unwrap_or(&[])
    }

    pub fn prize_description(&self) -> Option<&str> {
        self.raw.prize_description.as_deref()
    }

    /// Can only users who join after the giveaway started win?
    pub fn only_new_subscribers(&self) -> bool {
        self.raw.only_new_subscribers
    }

    pub fn winners_are_visible(&self) -> bool {
        self.raw.winners_are_visible
    }
}

/// The results of a [`Giveaway`].
#[derive(Clone, Debug, PartialEq)]
pub struct GiveawayWinners {
    pub raw: tl::types::MessageMediaGiveawayResults,
    chat: Chat,
    winners: Vec<User>,
}

impl GiveawayWinners {
    pub fn from_raw_media(
        results: tl::types::MessageMediaGiveawayResults,
        chats: &ChatMap,
    ) -> Result<Self, MissingReferenceError> {
        let chat = chats.resolve(PeerId::Channel(results.channel_id))?.clone();
        let winners = results
            .winners
            .iter()
            .map(|id| chats.resolve_user(*id).cloned())
            .collect::<Result<_, _>>()?;

        Ok(Self {
            raw: results,
            chat,
            winners,
        })
    }

    /// The channel that ran the giveaway.
    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    pub fn winners(&self) -> &[User] {
        &self.winners
    }

    /// Identifier of the message that launched the giveaway.
    pub fn giveaway_message_id(&self) -> i32 {
        self.raw.launch_msg_id
    }

    pub fn winner_count(&self) -> i32 {
        self.raw.winners_count
    }

    /// Number of prizes nobody claimed.
    pub fn unclaimed_prize_count(&self) -> i32 {
        self.raw.unclaimed_count
    }

    /// Number of other channels that took part, besides [`Self::chat`].
    pub fn additional_chat_count(&self) -> i32 {
        self.raw.additional_peers_count.unwrap_or(0)
    }

    pub fn months(&self) -> Option<i32> {
        self.raw.months
    }

    pub fn stars(&self) -> Option<i64> {
        self.raw.stars
    }

    pub fn until_date(&self) -> Date {
        date(self.raw.until_date)
    }

    pub fn prize_description(&self) -> Option<&str> {
        self.raw.prize_description.as_deref()
    }

    pub fn only_new_subscribers(&self) -> bool {
        self.raw.only_new_subscribers
    }

    /// Was the giveaway cancelled and its prize refunded?
    pub fn was_refunded(&self) -> bool {
        self.raw.refunded
    }
}
