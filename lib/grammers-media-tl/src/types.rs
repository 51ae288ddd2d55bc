// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains all of the bare types, each represented by a
//! `struct`.
//!
//! Field names follow the schema's parameter names, with `type` renamed
//! to `r#type` and `self` renamed to `is_self`. Flag parameters are not
//! stored; `true` flags become `bool` and optional parameters become
//! `Option`.
use crate::enums;

#[cfg(feature = "impl-serde")]
use serde_derive::{Deserialize, Serialize};

// Peers

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PeerUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PeerChannel {
    pub channel_id: i64,
}

// Users and chats

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct UserEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct User {
    pub is_self: bool,
    pub contact: bool,
    pub mutual_contact: bool,
    pub deleted: bool,
    pub bot: bool,
    pub verified: bool,
    pub restricted: bool,
    pub min: bool,
    pub support: bool,
    pub scam: bool,
    pub fake: bool,
    pub premium: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub lang_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct ChatEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct Chat {
    pub creator: bool,
    pub left: bool,
    pub deactivated: bool,
    pub noforwards: bool,
    pub id: i64,
    pub title: String,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct ChatForbidden {
    pub id: i64,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct Channel {
    pub creator: bool,
    pub left: bool,
    pub broadcast: bool,
    pub verified: bool,
    pub megagroup: bool,
    pub restricted: bool,
    pub signatures: bool,
    pub min: bool,
    pub scam: bool,
    pub fake: bool,
    pub gigagroup: bool,
    pub noforwards: bool,
    pub forum: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub date: i32,
    pub participants_count: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
    pub until_date: Option<i32>,
}

// Photos

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct Photo {
    pub has_stickers: bool,
    pub id: i64,
    pub access_hash: i64,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub sizes: Vec<enums::PhotoSize>,
    pub dc_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoSizeEmpty {
    pub r#type: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoSize {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    pub size: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoCachedSize {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoStrippedSize {
    pub r#type: String,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoSizeProgressive {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    pub sizes: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PhotoPathSize {
    pub r#type: String,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub bytes: Vec<u8>,
}

// Documents

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub mime_type: String,
    pub size: i64,
    pub thumbs: Option<Vec<enums::PhotoSize>>,
    pub dc_id: i32,
    pub attributes: Vec<enums::DocumentAttribute>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentAttributeImageSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentAttributeSticker {
    pub mask: bool,
    pub alt: String,
    pub stickerset: enums::InputStickerSet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentAttributeVideo {
    pub round_message: bool,
    pub supports_streaming: bool,
    pub nosound: bool,
    pub duration: f64,
    pub w: i32,
    pub h: i32,
    pub preload_prefix_size: Option<i32>,
    pub video_start_ts: Option<f64>,
    pub video_codec: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentAttributeAudio {
    pub voice: bool,
    pub duration: i32,
    pub title: Option<String>,
    pub performer: Option<String>,
    pub waveform: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentAttributeFilename {
    pub file_name: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct DocumentAttributeCustomEmoji {
    pub free: bool,
    pub text_color: bool,
    pub alt: String,
    pub stickerset: enums::InputStickerSet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct InputStickerSetId {
    pub id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct InputStickerSetShortName {
    pub short_name: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct InputStickerSetDice {
    pub emoticon: String,
}

// Geo

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    pub long: f64,
    pub lat: f64,
    pub access_hash: i64,
    pub accuracy_radius: Option<i32>,
}

// Message media

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaPhoto {
    pub spoiler: bool,
    pub photo: Option<enums::Photo>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaGeo {
    pub geo: enums::GeoPoint,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaContact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub vcard: String,
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaDocument {
    pub nopremium: bool,
    pub spoiler: bool,
    pub video: bool,
    pub round: bool,
    pub voice: bool,
    pub document: Option<enums::Document>,
    pub alt_documents: Option<Vec<enums::Document>>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaWebPage {
    pub force_large_media: bool,
    pub force_small_media: bool,
    pub manual: bool,
    pub safe: bool,
    pub webpage: enums::WebPage,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaVenue {
    pub geo: enums::GeoPoint,
    pub title: String,
    pub address: String,
    pub provider: String,
    pub venue_id: String,
    pub venue_type: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaGame {
    pub game: enums::Game,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaInvoice {
    pub shipping_address_requested: bool,
    pub test: bool,
    pub title: String,
    pub description: String,
    pub photo: Option<enums::WebDocument>,
    pub receipt_msg_id: Option<i32>,
    pub currency: String,
    pub total_amount: i64,
    pub start_param: String,
    pub extended_media: Option<enums::MessageExtendedMedia>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaPoll {
    pub poll: enums::Poll,
    pub results: enums::PollResults,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaDice {
    pub value: i32,
    pub emoticon: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaStory {
    pub via_mention: bool,
    pub peer: enums::Peer,
    pub id: i32,
    pub story: Option<enums::StoryItem>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaGiveaway {
    pub only_new_subscribers: bool,
    pub winners_are_visible: bool,
    pub channels: Vec<i64>,
    pub countries_iso2: Option<Vec<String>>,
    pub prize_description: Option<String>,
    pub quantity: i32,
    pub months: Option<i32>,
    pub stars: Option<i64>,
    pub until_date: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaGiveawayResults {
    pub only_new_subscribers: bool,
    pub refunded: bool,
    pub channel_id: i64,
    pub additional_peers_count: Option<i32>,
    pub launch_msg_id: i32,
    pub winners_count: i32,
    pub unclaimed_count: i32,
    pub winners: Vec<i64>,
    pub months: Option<i32>,
    pub stars: Option<i64>,
    pub prize_description: Option<String>,
    pub until_date: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageMediaPaidMedia {
    pub stars_amount: i64,
    pub extended_media: Vec<enums::MessageExtendedMedia>,
}

// Media payloads

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct Game {
    pub id: i64,
    pub access_hash: i64,
    pub short_name: String,
    pub title: String,
    pub description: String,
    pub photo: enums::Photo,
    pub document: Option<enums::Document>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct WebPageEmpty {
    pub id: i64,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct WebPagePending {
    pub id: i64,
    pub url: Option<String>,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct WebPage {
    pub has_large_media: bool,
    pub id: i64,
    pub url: String,
    pub display_url: String,
    pub hash: i32,
    pub r#type: Option<String>,
    pub site_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<enums::Photo>,
    pub embed_url: Option<String>,
    pub embed_type: Option<String>,
    pub embed_width: Option<i32>,
    pub embed_height: Option<i32>,
    pub duration: Option<i32>,
    pub author: Option<String>,
    pub document: Option<enums::Document>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct WebPageNotModified {
    pub cached_page_views: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct TextWithEntities {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct Poll {
    pub id: i64,
    pub closed: bool,
    pub public_voters: bool,
    pub multiple_choice: bool,
    pub quiz: bool,
    pub question: enums::TextWithEntities,
    pub answers: Vec<enums::PollAnswer>,
    pub close_period: Option<i32>,
    pub close_date: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PollAnswer {
    pub text: enums::TextWithEntities,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub option: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PollResults {
    pub min: bool,
    pub results: Option<Vec<enums::PollAnswerVoters>>,
    pub total_voters: Option<i32>,
    pub recent_voters: Option<Vec<enums::Peer>>,
    pub solution: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct PollAnswerVoters {
    pub chosen: bool,
    pub correct: bool,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub option: Vec<u8>,
    pub voters: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct StoryItemDeleted {
    pub id: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct StoryItemSkipped {
    pub close_friends: bool,
    pub id: i32,
    pub date: i32,
    pub expire_date: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct StoryItem {
    pub pinned: bool,
    pub public: bool,
    pub close_friends: bool,
    pub min: bool,
    pub noforwards: bool,
    pub edited: bool,
    pub id: i32,
    pub date: i32,
    pub from_id: Option<enums::Peer>,
    pub expire_date: i32,
    pub caption: Option<String>,
    pub media: Box<enums::MessageMedia>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct WebDocument {
    pub url: String,
    pub access_hash: i64,
    pub size: i32,
    pub mime_type: String,
    pub attributes: Vec<enums::DocumentAttribute>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct WebDocumentNoProxy {
    pub url: String,
    pub size: i32,
    pub mime_type: String,
    pub attributes: Vec<enums::DocumentAttribute>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageExtendedMediaPreview {
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub thumb: Option<enums::PhotoSize>,
    pub video_duration: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageExtendedMedia {
    pub media: Box<enums::MessageMedia>,
}

// Replies

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageFwdHeader {
    pub imported: bool,
    pub saved_out: bool,
    pub from_id: Option<enums::Peer>,
    pub from_name: Option<String>,
    pub date: i32,
    pub channel_post: Option<i32>,
    pub post_author: Option<String>,
    pub saved_from_peer: Option<enums::Peer>,
    pub saved_from_msg_id: Option<i32>,
    pub psa_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageReplyHeader {
    pub reply_to_scheduled: bool,
    pub forum_topic: bool,
    pub quote: bool,
    pub reply_to_msg_id: Option<i32>,
    pub reply_to_peer_id: Option<enums::Peer>,
    pub reply_from: Option<enums::MessageFwdHeader>,
    pub reply_media: Option<enums::MessageMedia>,
    pub reply_to_top_id: Option<i32>,
    pub quote_text: Option<String>,
    pub quote_offset: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct MessageReplyStoryHeader {
    pub peer: enums::Peer,
    pub story_id: i32,
}

// Gifts

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub struct StarGiftUnique {
    pub require_premium: bool,
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub num: i32,
    pub owner_id: Option<enums::Peer>,
    pub owner_name: Option<String>,
    pub owner_address: Option<String>,
    pub availability_issued: i32,
    pub availability_total: i32,
    pub gift_address: Option<String>,
}
