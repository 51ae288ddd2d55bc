// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::photo_sizes::PhotoSize;
use super::{Document, MediaKind, Photo, Video};
use crate::errors::MalformedMediaError;
use grammers_media_tl as tl;

#[derive(Clone, Debug, PartialEq)]
pub struct Invoice {
    pub raw: tl::types::MessageMediaInvoice,
}

impl Invoice {
    pub fn from_raw_media(invoice: tl::types::MessageMediaInvoice) -> Self {
        Self { raw: invoice }
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn description(&self) -> &str {
        &self.raw.description
    }

    /// Three-letter ISO 4217 currency code, or `XTR` for Telegram Stars.
    pub fn currency(&self) -> &str {
        &self.raw.currency
    }

    /// Total price in the smallest units of the currency (cents for USD, for example).
    pub fn total_amount(&self) -> i64 {
        self.raw.total_amount
    }

    /// Unique bot deep-linking parameter that can be used to generate this invoice.
    pub fn start_parameter(&self) -> &str {
        &self.raw.start_param
    }

    /// Identifier of the message with the receipt, once the invoice has been paid.
    pub fn receipt_message_id(&self) -> Option<i32> {
        self.raw.receipt_msg_id
    }

    pub fn is_test(&self) -> bool {
        self.raw.test
    }

    pub fn shipping_address_requested(&self) -> bool {
        self.raw.shipping_address_requested
    }
}

/// Media that has to be paid for with Telegram Stars before it can be seen.
#[derive(Clone, Debug, PartialEq)]
pub struct PaidMediaInfo {
    star_count: i64,
    media: Vec<PaidMedia>,
}

/// One of the items of a [`PaidMediaInfo`].
#[derive(Clone, Debug, PartialEq)]
pub enum PaidMedia {
    /// The media has not been bought yet, so only a blurred preview is known.
    Preview(PaidMediaPreview),
    Photo(Photo),
    Video(Video),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaidMediaPreview {
    pub raw: tl::types::MessageExtendedMediaPreview,
}

impl PaidMediaInfo {
    pub fn from_raw_media(
        paid: tl::types::MessageMediaPaidMedia,
    ) -> Result<Self, MalformedMediaError> {
        Ok(Self {
            star_count: paid.stars_amount,
            media: paid
                .extended_media
                .into_iter()
                .map(PaidMedia::from_raw)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Amount of stars that have to be paid to see the media.
    pub fn star_count(&self) -> i64 {
        self.star_count
    }

    pub fn media(&self) -> &[PaidMedia] {
        &self.media
    }
}

impl PaidMedia {
    fn from_raw(media: tl::enums::MessageExtendedMedia) -> Result<Self, MalformedMediaError> {
        use tl::enums::MessageMedia as M;

        let malformed = |reason| MalformedMediaError {
            kind: MediaKind::PaidMedia,
            reason,
        };

        let media = match media {
            tl::enums::MessageExtendedMedia::Preview(preview) => {
                return Ok(Self::Preview(PaidMediaPreview { raw: preview }));
            }
            tl::enums::MessageExtendedMedia::Media(media) => *media.media,
        };

        match media {
            M::Photo(photo) => match photo.photo {
                Some(tl::enums::Photo::Photo(raw)) => Ok(Self::Photo(Photo::from_raw_media(
                    raw,
                    photo.spoiler,
                    photo.ttl_seconds,
                ))),
                _ => Err(malformed("paid photo has no photo")),
            },
            M::Document(document) => match document.document {
                Some(tl::enums::Document::Document(raw)) => Video::from_document(
                    Document::from_raw_media(raw, document.spoiler, document.ttl_seconds),
                )
                .map(Self::Video)
                .map_err(|_| malformed("paid document is not a video")),
                _ => Err(malformed("paid document has no document")),
            },
            _ => Err(malformed("paid media is neither a photo nor a video")),
        }
    }
}

impl PaidMediaPreview {
    pub fn width(&self) -> Option<i32> {
        self.raw.w
    }

    pub fn height(&self) -> Option<i32> {
        self.raw.h
    }

    /// Duration of the video, in seconds, if the hidden media is a video.
    pub fn video_duration(&self) -> Option<i32> {
        self.raw.video_duration
    }

    /// A heavily blurred thumbnail of the hidden media.
    pub fn thumb(&self) -> Option<PhotoSize> {
        self.raw.thumb.as_ref().map(PhotoSize::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{audio_attr, document_media, photo_media, video_attr};

    fn bought(media: tl::enums::MessageMedia) -> tl::enums::MessageExtendedMedia {
        tl::types::MessageExtendedMedia {
            media: Box::new(media),
        }
        .into()
    }

    fn paid(
        extended_media: Vec<tl::enums::MessageExtendedMedia>,
    ) -> tl::types::MessageMediaPaidMedia {
        tl::types::MessageMediaPaidMedia {
            stars_amount: 50,
            extended_media,
        }
    }

    #[test]
    fn bought_media_is_unwrapped() {
        let info = PaidMediaInfo::from_raw_media(paid(vec![
            bought(photo_media(true)),
            bought(document_media(vec![video_attr(false)], true)),
            tl::types::MessageExtendedMediaPreview {
                w: Some(90),
                h: Some(160),
                thumb: None,
                video_duration: Some(8),
            }
            .into(),
        ]))
        .unwrap();

        assert_eq!(info.star_count(), 50);
        match info.media() {
            [PaidMedia::Photo(photo), PaidMedia::Video(video), PaidMedia::Preview(preview)] => {
                assert!(photo.is_spoiler());
                assert_eq!(video.width(), 640);
                assert_eq!(preview.video_duration(), Some(8));
                assert_eq!(preview.thumb(), None);
            }
            other => panic!("unexpected paid media {other:?}"),
        }
    }

    #[test]
    fn bought_documents_must_be_videos() {
        let audio = document_media(vec![audio_attr(false)], false);
        let error = PaidMediaInfo::from_raw_media(paid(vec![bought(audio)])).unwrap_err();
        assert_eq!(error.kind, MediaKind::PaidMedia);
        assert_eq!(error.reason, "paid document is not a video");
    }
}
