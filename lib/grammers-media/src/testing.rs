// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw values shared by the unit tests.
use grammers_media_tl as tl;

pub(crate) fn user(id: i64, first_name: &str) -> tl::enums::User {
    tl::types::User {
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
        id,
        access_hash: Some(id * 3),
        first_name: Some(first_name.to_string()),
        last_name: None,
        username: None,
        phone: None,
        lang_code: None,
    }
    .into()
}

pub(crate) fn channel(id: i64, title: &str) -> tl::enums::Chat {
    tl::types::Channel {
        creator: false,
        left: false,
        broadcast: true,
        verified: false,
        megagroup: false,
        restricted: false,
        signatures: true,
        min: false,
        scam: false,
        fake: false,
        gigagroup: false,
        noforwards: false,
        forum: false,
        id,
        access_hash: Some(id * 7),
        title: title.to_string(),
        username: None,
        date: 1_500_000_000,
        participants_count: None,
    }
    .into()
}

pub(crate) fn group(id: i64, title: &str) -> tl::enums::Chat {
    tl::types::Chat {
        creator: false,
        left: false,
        deactivated: false,
        noforwards: false,
        id,
        title: title.to_string(),
        participants_count: 2,
        date: 1_500_000_000,
        version: 1,
    }
    .into()
}

pub(crate) fn raw_photo(id: i64) -> tl::types::Photo {
    tl::types::Photo {
        has_stickers: false,
        id,
        access_hash: 1,
        file_reference: vec![1, 2, 3],
        date: 1_700_000_000,
        sizes: vec![
            tl::types::PhotoSize {
                r#type: "x".into(),
                w: 800,
                h: 600,
                size: 40_000,
            }
            .into(),
        ],
        dc_id: 2,
    }
}

pub(crate) fn photo_media(spoiler: bool) -> tl::enums::MessageMedia {
    tl::types::MessageMediaPhoto {
        spoiler,
        photo: Some(raw_photo(11).into()),
        ttl_seconds: None,
    }
    .into()
}

pub(crate) fn raw_document(
    mime_type: &str,
    attributes: Vec<tl::enums::DocumentAttribute>,
) -> tl::types::Document {
    tl::types::Document {
        id: 22,
        access_hash: 2,
        file_reference: vec![4, 5, 6],
        date: 1_700_000_000,
        mime_type: mime_type.to_string(),
        size: 1024,
        thumbs: None,
        dc_id: 2,
        attributes,
    }
}

pub(crate) fn document_media(
    attributes: Vec<tl::enums::DocumentAttribute>,
    spoiler: bool,
) -> tl::enums::MessageMedia {
    tl::types::MessageMediaDocument {
        nopremium: false,
        spoiler,
        video: false,
        round: false,
        voice: false,
        document: Some(raw_document("application/octet-stream", attributes).into()),
        alt_documents: None,
        ttl_seconds: None,
    }
    .into()
}

pub(crate) fn video_attr(round_message: bool) -> tl::enums::DocumentAttribute {
    tl::types::DocumentAttributeVideo {
        round_message,
        supports_streaming: true,
        nosound: false,
        duration: 12.5,
        w: 640,
        h: 480,
        preload_prefix_size: None,
        video_start_ts: None,
        video_codec: None,
    }
    .into()
}

pub(crate) fn audio_attr(voice: bool) -> tl::enums::DocumentAttribute {
    tl::types::DocumentAttributeAudio {
        voice,
        duration: 30,
        title: Some("Song".into()),
        performer: Some("Band".into()),
        waveform: voice.then(|| vec![0, 31, 7]),
    }
    .into()
}

pub(crate) fn sticker_attr() -> tl::enums::DocumentAttribute {
    tl::types::DocumentAttributeSticker {
        mask: false,
        alt: "🦀".into(),
        stickerset: tl::types::InputStickerSetShortName {
            short_name: "ferris".into(),
        }
        .into(),
    }
    .into()
}

pub(crate) fn file_name_attr(file_name: &str) -> tl::enums::DocumentAttribute {
    tl::types::DocumentAttributeFilename {
        file_name: file_name.to_string(),
    }
    .into()
}

pub(crate) fn web_page(url: &str) -> tl::enums::WebPage {
    tl::types::WebPage {
        has_large_media: false,
        id: 33,
        url: url.to_string(),
        display_url: url.trim_start_matches("https://").to_string(),
        hash: 0,
        r#type: Some("article".into()),
        site_name: Some("Rust".into()),
        title: Some("The Rust Programming Language".into()),
        description: None,
        photo: None,
        embed_url: None,
        embed_type: None,
        embed_width: None,
        embed_height: None,
        duration: None,
        author: None,
        document: None,
    }
    .into()
}

pub(crate) fn web_page_media(webpage: tl::enums::WebPage) -> tl::enums::MessageMedia {
    tl::types::MessageMediaWebPage {
        force_large_media: false,
        force_small_media: true,
        manual: false,
        safe: false,
        webpage,
    }
    .into()
}

pub(crate) fn story_media(
    peer: tl::enums::Peer,
    media: tl::enums::MessageMedia,
) -> tl::enums::MessageMedia {
    tl::types::MessageMediaStory {
        via_mention: false,
        peer,
        id: 5,
        story: Some(
            tl::types::StoryItem {
                pinned: false,
                public: true,
                close_friends: false,
                min: false,
                noforwards: false,
                edited: false,
                id: 5,
                date: 1_700_000_000,
                from_id: None,
                expire_date: 1_700_086_400,
                caption: Some("look".into()),
                media: Box::new(media),
            }
            .into(),
        ),
    }
    .into()
}

pub(crate) fn giveaway_media(channels: Vec<i64>) -> tl::enums::MessageMedia {
    tl::types::MessageMediaGiveaway {
        only_new_subscribers: true,
        winners_are_visible: false,
        channels,
        countries_iso2: None,
        prize_description: None,
        quantity: 3,
        months: Some(6),
        stars: None,
        until_date: 1_700_000_000,
    }
    .into()
}

pub(crate) fn giveaway_results_media(
    channel_id: i64,
    winners: Vec<i64>,
) -> tl::enums::MessageMedia {
    tl::types::MessageMediaGiveawayResults {
        only_new_subscribers: false,
        refunded: false,
        channel_id,
        additional_peers_count: None,
        launch_msg_id: 100,
        winners_count: winners.len() as i32,
        unclaimed_count: 0,
        winners,
        months: None,
        stars: Some(500),
        prize_description: None,
        until_date: 1_700_000_000,
    }
    .into()
}

pub(crate) fn user_peer(user_id: i64) -> tl::enums::Peer {
    tl::types::PeerUser { user_id }.into()
}

pub(crate) fn channel_peer(channel_id: i64) -> tl::enums::Peer {
    tl::types::PeerChannel { channel_id }.into()
}
