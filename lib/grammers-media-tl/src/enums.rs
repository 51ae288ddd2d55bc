// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains all of the boxed types, each represented by an
//! `enum`. Constructors without parameters are represented as unit
//! variants.
use crate::types;

#[cfg(feature = "impl-serde")]
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum Photo {
    Empty(types::PhotoEmpty),
    Photo(types::Photo),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum PhotoSize {
    Empty(types::PhotoSizeEmpty),
    Size(types::PhotoSize),
    PhotoCachedSize(types::PhotoCachedSize),
    PhotoStrippedSize(types::PhotoStrippedSize),
    Progressive(types::PhotoSizeProgressive),
    PhotoPathSize(types::PhotoPathSize),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum Document {
    Empty(types::DocumentEmpty),
    Document(types::Document),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum DocumentAttribute {
    ImageSize(types::DocumentAttributeImageSize),
    Animated,
    Sticker(types::DocumentAttributeSticker),
    Video(types::DocumentAttributeVideo),
    Audio(types::DocumentAttributeAudio),
    Filename(types::DocumentAttributeFilename),
    HasStickers,
    CustomEmoji(types::DocumentAttributeCustomEmoji),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum InputStickerSet {
    Empty,
    Id(types::InputStickerSetId),
    ShortName(types::InputStickerSetShortName),
    Dice(types::InputStickerSetDice),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum GeoPoint {
    Empty,
    Point(types::GeoPoint),
}

/// Media attached to a message.
///
/// `Unknown` does not correspond to any constructor. The network layer
/// produces it when it reads a constructor identifier that is not part of
/// the schema these definitions were written against.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum MessageMedia {
    Empty,
    Photo(types::MessageMediaPhoto),
    Geo(types::MessageMediaGeo),
    Contact(types::MessageMediaContact),
    Unsupported,
    Document(types::MessageMediaDocument),
    WebPage(types::MessageMediaWebPage),
    Venue(types::MessageMediaVenue),
    Game(types::MessageMediaGame),
    Invoice(types::MessageMediaInvoice),
    Poll(types::MessageMediaPoll),
    Dice(types::MessageMediaDice),
    Story(types::MessageMediaStory),
    Giveaway(types::MessageMediaGiveaway),
    GiveawayResults(types::MessageMediaGiveawayResults),
    PaidMedia(types::MessageMediaPaidMedia),
    Unknown { constructor_id: u32 },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum Game {
    Game(types::Game),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum WebPage {
    Empty(types::WebPageEmpty),
    Pending(types::WebPagePending),
    WebPage(types::WebPage),
    NotModified(types::WebPageNotModified),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum TextWithEntities {
    Entities(types::TextWithEntities),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum Poll {
    Poll(types::Poll),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum PollAnswer {
    Answer(types::PollAnswer),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum PollResults {
    Results(types::PollResults),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum PollAnswerVoters {
    Voters(types::PollAnswerVoters),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum StoryItem {
    Deleted(types::StoryItemDeleted),
    Skipped(types::StoryItemSkipped),
    Item(types::StoryItem),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum WebDocument {
    Document(types::WebDocument),
    NoProxy(types::WebDocumentNoProxy),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum MessageExtendedMedia {
    Preview(types::MessageExtendedMediaPreview),
    Media(types::MessageExtendedMedia),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum MessageFwdHeader {
    Header(types::MessageFwdHeader),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum MessageReplyHeader {
    Header(types::MessageReplyHeader),
    MessageReplyStoryHeader(types::MessageReplyStoryHeader),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(Serialize, Deserialize))]
pub enum StarGift {
    Unique(types::StarGiftUnique),
}

/// Implements `From<Type> for Enum` and `TryFrom<Enum> for Type` for every
/// variant wrapping a bare type.
macro_rules! impl_conversions {
    ($($ty:ident => $en:ident::$variant:ident,)*) => {
        $(
            #[cfg(feature = "impl-from-type")]
            impl From<types::$ty> for $en {
                fn from(x: types::$ty) -> Self {
                    Self::$variant(x)
                }
            }

            #[cfg(feature = "impl-from-enum")]
            impl TryFrom<$en> for types::$ty {
                type Error = crate::errors::WrongVariant;

                #[allow(unreachable_patterns)]
                fn try_from(x: $en) -> Result<Self, Self::Error> {
                    match x {
                        $en::$variant(x) => Ok(x),
                        _ => Err(crate::errors::WrongVariant),
                    }
                }
            }
        )*
    };
}

impl_conversions! {
    PeerUser => Peer::User,
    PeerChat => Peer::Chat,
    PeerChannel => Peer::Channel,
    UserEmpty => User::Empty,
    User => User::User,
    ChatEmpty => Chat::Empty,
    Chat => Chat::Chat,
    ChatForbidden => Chat::Forbidden,
    Channel => Chat::Channel,
    ChannelForbidden => Chat::ChannelForbidden,
    PhotoEmpty => Photo::Empty,
    Photo => Photo::Photo,
    PhotoSizeEmpty => PhotoSize::Empty,
    PhotoSize => PhotoSize::Size,
    PhotoCachedSize => PhotoSize::PhotoCachedSize,
    PhotoStrippedSize => PhotoSize::PhotoStrippedSize,
    PhotoSizeProgressive => PhotoSize::Progressive,
    PhotoPathSize => PhotoSize::PhotoPathSize,
    DocumentEmpty => Document::Empty,
    Document => Document::Document,
    DocumentAttributeImageSize => DocumentAttribute::ImageSize,
    DocumentAttributeSticker => DocumentAttribute::Sticker,
    DocumentAttributeVideo => DocumentAttribute::Video,
    DocumentAttributeAudio => DocumentAttribute::Audio,
    DocumentAttributeFilename => DocumentAttribute::Filename,
    DocumentAttributeCustomEmoji => DocumentAttribute::CustomEmoji,
    InputStickerSetId => InputStickerSet::Id,
    InputStickerSetShortName => InputStickerSet::ShortName,
    InputStickerSetDice => InputStickerSet::Dice,
    GeoPoint => GeoPoint::Point,
    MessageMediaPhoto => MessageMedia::Photo,
    MessageMediaGeo => MessageMedia::Geo,
    MessageMediaContact => MessageMedia::Contact,
    MessageMediaDocument => MessageMedia::Document,
    MessageMediaWebPage => MessageMedia::WebPage,
    MessageMediaVenue => MessageMedia::Venue,
    MessageMediaGame => MessageMedia::Game,
    MessageMediaInvoice => MessageMedia::Invoice,
    MessageMediaPoll => MessageMedia::Poll,
    MessageMediaDice => MessageMedia::Dice,
    MessageMediaStory => MessageMedia::Story,
    MessageMediaGiveaway => MessageMedia::Giveaway,
    MessageMediaGiveawayResults => MessageMedia::GiveawayResults,
    MessageMediaPaidMedia => MessageMedia::PaidMedia,
    Game => Game::Game,
    WebPageEmpty => WebPage::Empty,
    WebPagePending => WebPage::Pending,
    WebPage => WebPage::WebPage,
    WebPageNotModified => WebPage::NotModified,
    TextWithEntities => TextWithEntities::Entities,
    Poll => Poll::Poll,
    PollAnswer => PollAnswer::Answer,
    PollResults => PollResults::Results,
    PollAnswerVoters => PollAnswerVoters::Voters,
    StoryItemDeleted => StoryItem::Deleted,
    StoryItemSkipped => StoryItem::Skipped,
    StoryItem => StoryItem::Item,
    WebDocument => WebDocument::Document,
    WebDocumentNoProxy => WebDocument::NoProxy,
    MessageExtendedMediaPreview => MessageExtendedMedia::Preview,
    MessageExtendedMedia => MessageExtendedMedia::Media,
    MessageFwdHeader => MessageFwdHeader::Header,
    MessageReplyHeader => MessageReplyHeader::Header,
    MessageReplyStoryHeader => MessageReplyHeader::MessageReplyStoryHeader,
    StarGiftUnique => StarGift::Unique,
}
