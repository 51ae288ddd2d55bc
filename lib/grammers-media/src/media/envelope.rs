// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{
    Animation, Audio, Contact, Dice, Document, Game, Giveaway, GiveawayWinners, Invoice,
    Location, MediaKind, PaidMediaInfo, Photo, Poll, Sticker, Story, Venue, Video, VideoNote,
    Voice, WebPage,
};
use crate::chat::ChatMap;
use crate::errors::{DecodeError, MalformedMediaError};
use grammers_media_tl as tl;
use log::debug;

/// The media of a message, once it is known what it really is.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Media {
    Animation(Animation),
    Audio(Audio),
    Document(Document),
    Photo(Photo),
    Sticker(Sticker),
    Story(Story),
    Video(Video),
    VideoNote(VideoNote),
    Voice(Voice),
    Contact(Contact),
    Dice(Dice),
    Game(Game),
    Giveaway(Giveaway),
    GiveawayWinners(GiveawayWinners),
    Invoice(Invoice),
    Location(Location),
    Poll(Poll),
    Venue(Venue),
    PaidMedia(PaidMediaInfo),
    WebPage(WebPage),
}

impl Media {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Animation(_) => MediaKind::Animation,
            Self::Audio(_) => MediaKind::Audio,
            Self::Document(_) => MediaKind::Document,
            Self::Photo(_) => MediaKind::Photo,
            Self::Sticker(_) => MediaKind::Sticker,
            Self::Story(_) => MediaKind::Story,
            Self::Video(_) => MediaKind::Video,
            Self::VideoNote(_) => MediaKind::VideoNote,
            Self::Voice(_) => MediaKind::Voice,
            Self::Contact(_) => MediaKind::Contact,
            Self::Dice(_) => MediaKind::Dice,
            Self::Game(_) => MediaKind::Game,
            Self::Giveaway(_) => MediaKind::Giveaway,
            Self::GiveawayWinners(_) => MediaKind::GiveawayWinners,
            Self::Invoice(_) => MediaKind::Invoice,
            Self::Location(_) => MediaKind::Location,
            Self::Poll(_) => MediaKind::Poll,
            Self::Venue(_) => MediaKind::Venue,
            Self::PaidMedia(_) => MediaKind::PaidMedia,
            Self::WebPage(_) => MediaKind::WebPage,
        }
    }

    /// Turn a document into the most specific kind of media it can be.
    fn from_document(document: Document) -> Self {
        let kind = document.attributes().kind();
        match kind {
            MediaKind::Animation => Self::Animation(Animation::from_document(document)),
            MediaKind::Sticker => {
                Sticker::from_document(document).map_or_else(Self::Document, Self::Sticker)
            }
            MediaKind::VideoNote => {
                VideoNote::from_document(document).map_or_else(Self::Document, Self::VideoNote)
            }
            MediaKind::Video => {
                Video::from_document(document).map_or_else(Self::Document, Self::Video)
            }
            MediaKind::Voice => {
                Voice::from_document(document).map_or_else(Self::Document, Self::Voice)
            }
            MediaKind::Audio => {
                Audio::from_document(document).map_or_else(Self::Document, Self::Audio)
            }
            _ => Self::Document(document),
        }
    }
}

/// The decoded media of a single message.
///
/// At most one kind of media is ever present. The specific accessors (such as [`Self::photo`]
/// or [`Self::voice`]) return `None` for every kind except the one reported by [`Self::kind`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaEnvelope {
    media: Option<Media>,
}

impl MediaEnvelope {
    /// An envelope without media.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode the raw media of a message.
    ///
    /// `chats` must contain the users and chats sent in the same response as the media.
    ///
    /// Media that cannot be shown (because it is empty, unsupported, unknown to this version
    /// of the library, or a link preview that is not ready yet) results in an empty envelope
    /// rather than an error.
    pub fn decode(
        raw: Option<tl::enums::MessageMedia>,
        chats: &ChatMap,
    ) -> Result<Self, DecodeError> {
        use tl::enums::MessageMedia as M;

        let raw = match raw {
            Some(raw) => raw,
            None => return Ok(Self::empty()),
        };

        let media = match raw {
            M::Empty | M::Unsupported => None,
            M::Unknown { constructor_id } => {
                debug!("ignoring unknown media constructor {:08x}", constructor_id);
                None
            }
            M::Photo(media) => match media.photo {
                Some(tl::enums::Photo::Photo(photo)) => Some(Media::Photo(Photo::from_raw_media(
                    photo,
                    media.spoiler,
                    media.ttl_seconds,
                ))),
                _ => {
                    return Err(MalformedMediaError {
                        kind: MediaKind::Photo,
                        reason: "photo media has no photo",
                    }
                    .into());
                }
            },
            M::Document(media) => match media.document {
                Some(tl::enums::Document::Document(document)) => {
                    Some(Media::from_document(Document::from_raw_media(
                        document,
                        media.spoiler,
                        media.ttl_seconds,
                    )))
                }
                _ => {
                    return Err(MalformedMediaError {
                        kind: MediaKind::Document,
                        reason: "document media has no document",
                    }
                    .into());
                }
            },
            M::Geo(media) => match Location::from_raw(media.geo) {
                Some(location) => Some(Media::Location(location)),
                None => {
                    return Err(MalformedMediaError {
                        kind: MediaKind::Location,
                        reason: "geo media has an empty point",
                    }
                    .into());
                }
            },
            M::Contact(contact) => Some(Media::Contact(Contact::from_raw_media(contact))),
            M::WebPage(media) => match media.webpage {
                tl::enums::WebPage::WebPage(webpage) => {
                    Some(Media::WebPage(WebPage::from_raw(webpage)))
                }
                tl::enums::WebPage::Pending(webpage) => {
                    debug!("dropping web page {} that is still pending", webpage.id);
                    None
                }
                tl::enums::WebPage::Empty(webpage) => {
                    debug!("dropping empty web page {}", webpage.id);
                    None
                }
                tl::enums::WebPage::NotModified(_) => {
                    debug!("dropping web page that was not modified");
                    None
                }
            },
            M::Venue(venue) => Some(Media::Venue(Venue::from_raw_media(venue))),
            M::Game(game) => Some(Media::Game(Game::from_raw_media(game))),
            M::Invoice(invoice) => Some(Media::Invoice(Invoice::from_raw_media(invoice))),
            M::Poll(poll) => Some(Media::Poll(Poll::from_raw_media(poll))),
            M::Dice(dice) => Some(Media::Dice(Dice::from_raw_media(dice))),
            M::Story(story) => Some(Media::Story(Story::from_raw_media(story, chats)?)),
            M::Giveaway(giveaway) => Some(Media::Giveaway(Giveaway::from_raw_media(
                giveaway, chats,
            )?)),
            M::GiveawayResults(results) => Some(Media::GiveawayWinners(
                GiveawayWinners::from_raw_media(results, chats)?,
            )),
            M::PaidMedia(paid) => Some(Media::PaidMedia(PaidMediaInfo::from_raw_media(paid)?)),
        };

        Ok(Self { media })
    }

    /// Decode the media of every message in a response.
    ///
    /// There is one result per input, in the same order. A message that fails to decode does
    /// not affect the others.
    pub fn decode_all<I>(media: I, chats: &ChatMap) -> Vec<Result<Self, DecodeError>>
    where
        I: IntoIterator<Item = Option<tl::enums::MessageMedia>>,
    {
        media
            .into_iter()
            .map(|raw| Self::decode(raw, chats))
            .collect()
    }

    /// The kind of media in this envelope, or [`MediaKind::None`] if it's empty.
    pub fn kind(&self) -> MediaKind {
        self.media
            .as_ref()
            .map(Media::kind)
            .unwrap_or(MediaKind::None)
    }

    /// Is the media hidden behind a spoiler?
    ///
    /// Only photos, animations and videos can have one.
    pub fn has_spoiler(&self) -> bool {
        match &self.media {
            Some(Media::Photo(photo)) => photo.is_spoiler(),
            Some(Media::Animation(animation)) => animation.is_spoiler(),
            Some(Media::Video(video)) => video.is_spoiler(),
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_none()
    }

    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    pub fn into_media(self) -> Option<Media> {
        self.media
    }

    pub fn animation(&self) -> Option<&Animation> {
        match &self.media {
            Some(Media::Animation(animation)) => Some(animation),
            _ => None,
        }
    }

    pub fn audio(&self) -> Option<&Audio> {
        match &self.media {
            Some(Media::Audio(audio)) => Some(audio),
            _ => None,
        }
    }

    /// The document, only if it is not any of the more specific kinds.
    pub fn document(&self) -> Option<&Document> {
        match &self.media {
            Some(Media::Document(document)) => Some(document),
            _ => None,
        }
    }

    pub fn photo(&self) -> Option<&Photo> {
        match &self.media {
            Some(Media::Photo(photo)) => Some(photo),
            _ => None,
        }
    }

    pub fn sticker(&self) -> Option<&Sticker> {
        match &self.media {
            Some(Media::Sticker(sticker)) => Some(sticker),
            _ => None,
        }
    }

    pub fn story(&self) -> Option<&Story> {
        match &self.media {
            Some(Media::Story(story)) => Some(story),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&Video> {
        match &self.media {
            Some(Media::Video(video)) => Some(video),
            _ => None,
        }
    }

    pub fn video_note(&self) -> Option<&VideoNote> {
        match &self.media {
            Some(Media::VideoNote(video_note)) => Some(video_note),
            _ => None,
        }
    }

    pub fn voice(&self) -> Option<&Voice> {
        match &self.media {
            Some(Media::Voice(voice)) => Some(voice),
            _ => None,
        }
    }

    pub fn contact(&self) -> Option<&Contact> {
        match &self.media {
            Some(Media::Contact(contact)) => Some(contact),
            _ => None,
        }
    }

    pub fn dice(&self) -> Option<&Dice> {
        match &self.media {
            Some(Media::Dice(dice)) => Some(dice),
            _ => None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        match &self.media {
            Some(Media::Game(game)) => Some(game),
            _ => None,
        }
    }

    pub fn giveaway(&self) -> Option<&Giveaway> {
        match &self.media {
            Some(Media::Giveaway(giveaway)) => Some(giveaway),
            _ => None,
        }
    }

    pub fn giveaway_winners(&self) -> Option<&GiveawayWinners> {
        match &self.media {
            Some(Media::GiveawayWinners(winners)) => Some(winners),
            _ => None,
        }
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        match &self.media {
            Some(Media::Invoice(invoice)) => Some(invoice),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match &self.media {
            Some(Media::Location(location)) => Some(location),
            _ => None,
        }
    }

    pub fn poll(&self) -> Option<&Poll> {
        match &self.media {
            Some(Media::Poll(poll)) => Some(poll),
            _ => None,
        }
    }

    pub fn venue(&self) -> Option<&Venue> {
        match &self.media {
            Some(Media::Venue(venue)) => Some(venue),
            _ => None,
        }
    }

    pub fn paid_media(&self) -> Option<&PaidMediaInfo> {
        match &self.media {
            Some(Media::PaidMedia(paid)) => Some(paid),
            _ => None,
        }
    }

    pub fn web_page(&self) -> Option<&WebPage> {
        match &self.media {
            Some(Media::WebPage(webpage)) => Some(webpage),
            _ => None,
        }
    }
}

impl From<Media> for MediaEnvelope {
    fn from(media: Media) -> Self {
        Self { media: Some(media) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::PeerId;
    use crate::errors::MissingReferenceError;
    use crate::media::PaidMedia;
    use crate::testing::*;
    use std::sync::Arc;
    use std::thread;

    fn populated_slots(envelope: &MediaEnvelope) -> usize {
        [
            envelope.animation().is_some(),
            envelope.audio().is_some(),
            envelope.document().is_some(),
            envelope.photo().is_some(),
            envelope.sticker().is_some(),
            envelope.story().is_some(),
            envelope.video().is_some(),
            envelope.video_note().is_some(),
            envelope.voice().is_some(),
            envelope.contact().is_some(),
            envelope.dice().is_some(),
            envelope.game().is_some(),
            envelope.giveaway().is_some(),
            envelope.giveaway_winners().is_some(),
            envelope.invoice().is_some(),
            envelope.location().is_some(),
            envelope.poll().is_some(),
            envelope.venue().is_some(),
            envelope.paid_media().is_some(),
            envelope.web_page().is_some(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }

    fn chats() -> Arc<ChatMap> {
        ChatMap::new(
            vec![user(1, "Alice"), user(2, "Bob")],
            vec![channel(100, "News"), group(200, "Friends")],
        )
    }

    fn decode(raw: tl::enums::MessageMedia) -> Result<MediaEnvelope, DecodeError> {
        MediaEnvelope::decode(Some(raw), &chats())
    }

    fn geo_point() -> tl::enums::GeoPoint {
        tl::types::GeoPoint {
            long: 2.17,
            lat: 41.38,
            access_hash: 0,
            accuracy_radius: Some(10),
        }
        .into()
    }

    fn poll_media() -> tl::enums::MessageMedia {
        tl::types::MessageMediaPoll {
            poll: tl::types::Poll {
                id: 1,
                closed: false,
                public_voters: false,
                multiple_choice: false,
                quiz: true,
                question: tl::types::TextWithEntities {
                    text: "Best crab?".into(),
                }
                .into(),
                answers: vec![
                    tl::types::PollAnswer {
                        text: tl::types::TextWithEntities {
                            text: "Ferris".into(),
                        }
                        .into(),
                        option: vec![0],
                    }
                    .into(),
                ],
                close_period: None,
                close_date: None,
            }
            .into(),
            results: tl::types::PollResults {
                min: false,
                results: None,
                total_voters: Some(4),
                recent_voters: None,
                solution: None,
            }
            .into(),
        }
        .into()
    }

    fn every_recognized_media() -> Vec<(tl::enums::MessageMedia, MediaKind)> {
        vec![
            (photo_media(false), MediaKind::Photo),
            (document_media(vec![], false), MediaKind::Document),
            (
                document_media(vec![tl::enums::DocumentAttribute::Animated], false),
                MediaKind::Animation,
            ),
            (document_media(vec![sticker_attr()], false), MediaKind::Sticker),
            (document_media(vec![video_attr(false)], false), MediaKind::Video),
            (document_media(vec![video_attr(true)], false), MediaKind::VideoNote),
            (document_media(vec![audio_attr(false)], false), MediaKind::Audio),
            (document_media(vec![audio_attr(true)], false), MediaKind::Voice),
            (
                tl::types::MessageMediaGeo { geo: geo_point() }.into(),
                MediaKind::Location,
            ),
            (
                tl::types::MessageMediaContact {
                    phone_number: "34600000000".into(),
                    first_name: "Carol".into(),
                    last_name: String::new(),
                    vcard: String::new(),
                    user_id: 0,
                }
                .into(),
                MediaKind::Contact,
            ),
            (
                tl::types::MessageMediaVenue {
                    geo: geo_point(),
                    title: "Sagrada Família".into(),
                    address: "C/ de Mallorca, 401".into(),
                    provider: "foursquare".into(),
                    venue_id: "abc".into(),
                    venue_type: "church".into(),
                }
                .into(),
                MediaKind::Venue,
            ),
            (poll_media(), MediaKind::Poll),
            (
                web_page_media(web_page("https://www.rust-lang.org")),
                MediaKind::WebPage,
            ),
            (
                tl::types::MessageMediaDice {
                    value: 6,
                    emoticon: "🎲".into(),
                }
                .into(),
                MediaKind::Dice,
            ),
            (
                tl::types::MessageMediaGame {
                    game: tl::types::Game {
                        id: 1,
                        access_hash: 2,
                        short_name: "crab".into(),
                        title: "Crab Run".into(),
                        description: "Run!".into(),
                        photo: raw_photo(3).into(),
                        document: None,
                    }
                    .into(),
                }
                .into(),
                MediaKind::Game,
            ),
            (
                tl::types::MessageMediaInvoice {
                    shipping_address_requested: false,
                    test: true,
                    title: "Crab".into(),
                    description: "A plush crab".into(),
                    photo: None,
                    receipt_msg_id: None,
                    currency: "EUR".into(),
                    total_amount: 1999,
                    start_param: "crab".into(),
                    extended_media: None,
                }
                .into(),
                MediaKind::Invoice,
            ),
            (
                story_media(user_peer(1), photo_media(false)),
                MediaKind::Story,
            ),
            (giveaway_media(vec![100]), MediaKind::Giveaway),
            (
                giveaway_results_media(100, vec![1, 2]),
                MediaKind::GiveawayWinners,
            ),
            (
                tl::types::MessageMediaPaidMedia {
                    stars_amount: 50,
                    extended_media: vec![
                        tl::types::MessageExtendedMediaPreview {
                            w: Some(90),
                            h: Some(90),
                            thumb: None,
                            video_duration: None,
                        }
                        .into(),
                    ],
                }
                .into(),
                MediaKind::PaidMedia,
            ),
        ]
    }

    #[test]
    fn absent_media_decodes_to_an_empty_envelope() {
        for chats in [ChatMap::empty(), chats()] {
            let envelope = MediaEnvelope::decode(None, &chats).unwrap();
            assert_eq!(envelope.kind(), MediaKind::None);
            assert!(envelope.is_empty());
            assert!(!envelope.has_spoiler());
            assert_eq!(populated_slots(&envelope), 0);
        }
    }

    #[test]
    fn recognized_media_populates_exactly_one_slot() {
        for (raw, kind) in every_recognized_media() {
            let envelope = decode(raw).unwrap();
            assert_eq!(envelope.kind(), kind);
            assert_eq!(populated_slots(&envelope), 1, "{kind} populated a wrong slot count");
        }
    }

    #[test]
    fn media_without_content_is_empty() {
        use tl::enums::MessageMedia as M;

        for raw in [M::Empty, M::Unsupported, M::Unknown { constructor_id: 0xdeadbeef }] {
            let envelope = decode(raw).unwrap();
            assert_eq!(envelope.kind(), MediaKind::None);
            assert_eq!(populated_slots(&envelope), 0);
        }
    }

    #[test]
    fn unresolved_web_pages_are_empty() {
        let unresolved: [tl::enums::WebPage; 3] = [
            tl::types::WebPageEmpty { id: 1, url: None }.into(),
            tl::types::WebPagePending {
                id: 2,
                url: Some("https://example.com".into()),
                date: 0,
            }
            .into(),
            tl::types::WebPageNotModified {
                cached_page_views: Some(3),
            }
            .into(),
        ];

        for webpage in unresolved {
            let envelope = decode(web_page_media(webpage)).unwrap();
            assert_eq!(envelope.kind(), MediaKind::None);
            assert!(envelope.web_page().is_none());
        }
    }

    #[test]
    fn resolved_web_page_exposes_its_fields() {
        let envelope = decode(web_page_media(web_page("https://www.rust-lang.org"))).unwrap();
        let webpage = envelope.web_page().unwrap();
        assert_eq!(webpage.url(), "https://www.rust-lang.org");
        assert_eq!(webpage.display_url(), "www.rust-lang.org");
        assert_eq!(webpage.site_name(), Some("Rust"));
        assert!(webpage.photo().is_none());
    }

    #[test]
    fn animated_wins_over_video() {
        let envelope = decode(document_media(
            vec![video_attr(false), tl::enums::DocumentAttribute::Animated],
            true,
        ))
        .unwrap();

        assert_eq!(envelope.kind(), MediaKind::Animation);
        assert!(envelope.has_spoiler());
        let animation = envelope.animation().unwrap();
        assert_eq!(animation.duration(), 12.5);
        assert_eq!((animation.width(), animation.height()), (640, 480));
    }

    #[test]
    fn round_videos_never_have_spoilers() {
        let envelope = decode(document_media(vec![video_attr(true)], true)).unwrap();
        assert_eq!(envelope.kind(), MediaKind::VideoNote);
        assert!(!envelope.has_spoiler());
        assert_eq!(envelope.video_note().unwrap().length(), 640);
    }

    #[test]
    fn videos_keep_their_spoiler() {
        let envelope = decode(document_media(vec![video_attr(false)], true)).unwrap();
        assert_eq!(envelope.kind(), MediaKind::Video);
        assert!(envelope.has_spoiler());
        assert!(envelope.video().unwrap().supports_streaming());
    }

    #[test]
    fn photos_keep_their_spoiler() {
        assert!(decode(photo_media(true)).unwrap().has_spoiler());
        assert!(!decode(photo_media(false)).unwrap().has_spoiler());
    }

    #[test]
    fn other_documents_drop_the_spoiler() {
        for attributes in [vec![sticker_attr()], vec![audio_attr(true)], vec![]] {
            let envelope = decode(document_media(attributes, true)).unwrap();
            assert!(!envelope.has_spoiler(), "{} kept the spoiler", envelope.kind());
        }
    }

    #[test]
    fn first_attribute_of_each_kind_wins() {
        let envelope = decode(document_media(
            vec![
                file_name_attr("first.ogg"),
                audio_attr(true),
                audio_attr(false),
                file_name_attr("second.ogg"),
            ],
            false,
        ))
        .unwrap();

        assert_eq!(envelope.kind(), MediaKind::Voice);
        let voice = envelope.voice().unwrap();
        assert_eq!(voice.document.name(), "first.ogg");
        assert_eq!(voice.waveform(), Some(&[0, 31, 7][..]));
    }

    #[test]
    fn decoding_is_idempotent() {
        for (raw, _) in every_recognized_media() {
            assert_eq!(decode(raw.clone()), decode(raw));
        }
    }

    #[test]
    fn story_resolves_its_poster_and_media() {
        let envelope = decode(story_media(user_peer(1), photo_media(true))).unwrap();
        let story = envelope.story().unwrap();
        assert_eq!(story.chat().name(), "Alice");
        assert_eq!(story.caption(), Some("look"));
        assert_eq!(story.media().map(|m| m.kind()), Some(MediaKind::Photo));
        assert!(!envelope.has_spoiler());
    }

    #[test]
    fn story_from_unknown_peer_is_missing_reference() {
        assert_eq!(
            decode(story_media(channel_peer(999), photo_media(false))),
            Err(DecodeError::MissingReference(MissingReferenceError {
                peer: PeerId::Channel(999)
            }))
        );
    }

    #[test]
    fn giveaways_resolve_every_reference() {
        let envelope = decode(giveaway_media(vec![100])).unwrap();
        let giveaway = envelope.giveaway().unwrap();
        assert_eq!(giveaway.channels().len(), 1);
        assert_eq!(giveaway.months(), Some(6));

        assert_eq!(
            decode(giveaway_media(vec![100, 101])),
            Err(MissingReferenceError {
                peer: PeerId::Channel(101)
            }
            .into())
        );

        let envelope = decode(giveaway_results_media(100, vec![1, 2])).unwrap();
        let winners = envelope.giveaway_winners().unwrap();
        assert_eq!(winners.chat().name(), "News");
        assert_eq!(winners.winners().len(), 2);
        assert_eq!(winners.stars(), Some(500));

        assert_eq!(
            decode(giveaway_results_media(100, vec![1, 3])),
            Err(MissingReferenceError {
                peer: PeerId::User(3)
            }
            .into())
        );
        assert_eq!(
            decode(giveaway_results_media(200, vec![])),
            Err(MissingReferenceError {
                peer: PeerId::Channel(200)
            }
            .into())
        );
    }

    #[test]
    fn media_without_payload_is_malformed() {
        let cases: Vec<(tl::enums::MessageMedia, MediaKind)> = vec![
            (
                tl::types::MessageMediaPhoto {
                    spoiler: false,
                    photo: None,
                    ttl_seconds: Some(10),
                }
                .into(),
                MediaKind::Photo,
            ),
            (
                tl::types::MessageMediaPhoto {
                    spoiler: false,
                    photo: Some(tl::types::PhotoEmpty { id: 1 }.into()),
                    ttl_seconds: None,
                }
                .into(),
                MediaKind::Photo,
            ),
            (
                tl::types::MessageMediaDocument {
                    nopremium: false,
                    spoiler: false,
                    video: false,
                    round: false,
                    voice: false,
                    document: Some(tl::types::DocumentEmpty { id: 1 }.into()),
                    alt_documents: None,
                    ttl_seconds: None,
                }
                .into(),
                MediaKind::Document,
            ),
            (
                tl::types::MessageMediaGeo {
                    geo: tl::enums::GeoPoint::Empty,
                }
                .into(),
                MediaKind::Location,
            ),
            (
                tl::types::MessageMediaPaidMedia {
                    stars_amount: 10,
                    extended_media: vec![
                        tl::types::MessageExtendedMedia {
                            media: Box::new(
                                tl::types::MessageMediaDice {
                                    value: 1,
                                    emoticon: "🎲".into(),
                                }
                                .into(),
                            ),
                        }
                        .into(),
                    ],
                }
                .into(),
                MediaKind::PaidMedia,
            ),
        ];

        for (raw, kind) in cases {
            match decode(raw) {
                Err(DecodeError::Malformed(error)) => assert_eq!(error.kind, kind),
                other => panic!("expected malformed {kind}, got {other:?}"),
            }
        }
    }

    #[test]
    fn paid_media_decodes_each_item() {
        let envelope = decode(
            tl::types::MessageMediaPaidMedia {
                stars_amount: 25,
                extended_media: vec![
                    tl::types::MessageExtendedMedia {
                        media: Box::new(photo_media(false)),
                    }
                    .into(),
                    tl::types::MessageExtendedMedia {
                        media: Box::new(document_media(vec![video_attr(false)], false)),
                    }
                    .into(),
                ],
            }
            .into(),
        )
        .unwrap();

        let paid = envelope.paid_media().unwrap();
        assert_eq!(paid.star_count(), 25);
        assert!(matches!(paid.media()[0], PaidMedia::Photo(_)));
        assert!(matches!(paid.media()[1], PaidMedia::Video(_)));
    }

    #[test]
    fn one_failure_does_not_affect_siblings() {
        let results = MediaEnvelope::decode_all(
            vec![
                Some(photo_media(false)),
                Some(story_media(user_peer(404), photo_media(false))),
                None,
                Some(document_media(vec![audio_attr(false)], false)),
            ],
            &chats(),
        );

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().map(|e| e.kind()), Ok(MediaKind::Photo));
        assert!(matches!(results[1], Err(DecodeError::MissingReference(_))));
        assert_eq!(results[2].as_ref().map(|e| e.kind()), Ok(MediaKind::None));
        assert_eq!(results[3].as_ref().map(|e| e.kind()), Ok(MediaKind::Audio));
    }

    #[test]
    fn chats_can_be_shared_between_threads() {
        let chats = chats();
        let expected: Vec<_> = every_recognized_media()
            .into_iter()
            .map(|(raw, _)| MediaEnvelope::decode(Some(raw), &chats))
            .collect();

        thread::scope(|s| {
            for _ in 0..4 {
                let chats = Arc::clone(&chats);
                let expected = &expected;
                s.spawn(move || {
                    let media = every_recognized_media().into_iter().map(|(raw, _)| Some(raw));
                    assert_eq!(&MediaEnvelope::decode_all(media, &chats), expected);
                });
            }
        });
    }
}
