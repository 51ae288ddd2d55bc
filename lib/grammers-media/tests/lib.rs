// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use grammers_media::tl::{enums, types};
use grammers_media::{ChatMap, DecodeError, MediaEnvelope, MediaKind, PeerId};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn init_logging() {
    // Every test tries, only the first one succeeds.
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

fn sticker_document(mime_type: &str) -> enums::MessageMedia {
    types::MessageMediaDocument {
        nopremium: false,
        spoiler: true,
        video: false,
        round: false,
        voice: false,
        document: Some(
            types::Document {
                id: 1,
                access_hash: 2,
                file_reference: Vec::new(),
                date: 1_600_000_000,
                mime_type: mime_type.to_string(),
                size: 20_000,
                thumbs: None,
                dc_id: 4,
                attributes: vec![
                    types::DocumentAttributeImageSize { w: 512, h: 512 }.into(),
                    types::DocumentAttributeSticker {
                        mask: false,
                        alt: "👍".into(),
                        stickerset: enums::InputStickerSet::Empty,
                    }
                    .into(),
                ],
            }
            .into(),
        ),
        alt_documents: None,
        ttl_seconds: None,
    }
    .into()
}

fn dice(value: i32) -> enums::MessageMedia {
    types::MessageMediaDice {
        value,
        emoticon: "🎲".into(),
    }
    .into()
}

#[test]
fn decode_stickers() {
    init_logging();
    let chats = ChatMap::empty();

    let envelope =
        MediaEnvelope::decode(Some(sticker_document("application/x-tgsticker")), &chats).unwrap();

    assert_eq!(envelope.kind(), MediaKind::Sticker);
    assert!(!envelope.has_spoiler());

    let sticker = envelope.sticker().unwrap();
    assert_eq!(sticker.emoji(), "👍");
    assert_eq!(sticker.set_name(), None);
    assert!(sticker.is_animated());
    assert!(!sticker.is_video());
    assert_eq!((sticker.width(), sticker.height()), (512, 512));
}

#[test]
fn decode_location() {
    init_logging();
    let media = types::MessageMediaGeo {
        geo: types::GeoPoint {
            long: 2.1734,
            lat: 41.3851,
            access_hash: 0,
            accuracy_radius: Some(20),
        }
        .into(),
    };

    let envelope = MediaEnvelope::decode(Some(media.into()), &ChatMap::empty()).unwrap();
    let location = envelope.location().unwrap();
    assert_eq!(envelope.kind(), MediaKind::Location);
    assert_eq!(location.latitude(), 41.3851);
    assert_eq!(location.longitude(), 2.1734);
    assert_eq!(location.accuracy_radius(), Some(20));
}

#[test]
fn decode_unknown_media() {
    init_logging();
    let media = enums::MessageMedia::Unknown {
        constructor_id: 0xdeadbeef,
    };

    let envelope = MediaEnvelope::decode(Some(media), &ChatMap::empty()).unwrap();
    assert_eq!(envelope.kind(), MediaKind::None);
    assert!(envelope.is_empty());
    assert_eq!(envelope, MediaEnvelope::empty());
}

#[test]
fn decode_batch() {
    init_logging();
    let chats = ChatMap::new(
        Vec::new(),
        vec![
            types::Channel {
                creator: false,
                left: false,
                broadcast: true,
                verified: true,
                megagroup: false,
                restricted: false,
                signatures: false,
                min: false,
                scam: false,
                fake: false,
                gigagroup: false,
                noforwards: false,
                forum: false,
                id: 10,
                access_hash: Some(1),
                title: "Announcements".into(),
                username: Some("announcements".into()),
                date: 1_500_000_000,
                participants_count: Some(1_000),
            }
            .into(),
        ],
    );

    let giveaway = |channels: Vec<i64>| -> Option<enums::MessageMedia> {
        Some(
            types::MessageMediaGiveaway {
                only_new_subscribers: false,
                winners_are_visible: true,
                channels,
                countries_iso2: Some(vec!["ES".into()]),
                prize_description: None,
                quantity: 1,
                months: None,
                stars: Some(1_000),
                until_date: 1_700_000_000,
            }
            .into(),
        )
    };

    let results = MediaEnvelope::decode_all(
        vec![
            Some(dice(6)),
            giveaway(vec![10, 11]),
            None,
            giveaway(vec![10]),
        ],
        &chats,
    );

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().map(MediaEnvelope::kind), Ok(MediaKind::Dice));
    assert!(matches!(
        results[1],
        Err(DecodeError::MissingReference(ref e)) if e.peer == PeerId::Channel(11)
    ));
    assert_eq!(results[2], Ok(MediaEnvelope::empty()));

    let envelope = results[3].as_ref().unwrap();
    let giveaway = envelope.giveaway().unwrap();
    assert_eq!(envelope.kind(), MediaKind::Giveaway);
    assert_eq!(giveaway.channels().len(), 1);
    assert_eq!(giveaway.channels()[0].username(), Some("announcements"));
}
