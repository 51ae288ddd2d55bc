// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::photo_sizes::{PhotoSize, VecExt};
use crate::utils::{Date, date};
use grammers_media_tl as tl;

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub raw: tl::types::Photo,
    ttl_seconds: Option<i32>,
    spoiler: bool,
}

impl Photo {
    pub fn from_raw(photo: tl::types::Photo) -> Self {
        Self {
            raw: photo,
            ttl_seconds: None,
            spoiler: false,
        }
    }

    /// Only concrete photos carry anything worth showing.
    pub(crate) fn from_raw_enum(photo: Option<tl::enums::Photo>) -> Option<Self> {
        match photo {
            Some(tl::enums::Photo::Photo(photo)) => Some(Self::from_raw(photo)),
            Some(tl::enums::Photo::Empty(_)) | None => None,
        }
    }

    pub(crate) fn from_raw_media(
        photo: tl::types::Photo,
        spoiler: bool,
        ttl_seconds: Option<i32>,
    ) -> Self {
        Self {
            raw: photo,
            ttl_seconds,
            spoiler,
        }
    }

    pub fn id(&self) -> i64 {
        self.raw.id
    }

    /// The date on which the photo was uploaded.
    pub fn date(&self) -> Date {
        date(self.raw.date)
    }

    /// The size of the photo.
    /// returns 0 if unable to get the size.
    pub fn size(&self) -> i64 {
        match self.thumbs().largest() {
            Some(thumb) => thumb.size() as i64,
            None => 0,
        }
    }

    /// Width of the largest thumb, or 0 if no thumb has known dimensions.
    pub fn width(&self) -> i32 {
        self.largest_dimensions().0
    }

    /// Height of the largest thumb, or 0 if no thumb has known dimensions.
    pub fn height(&self) -> i32 {
        self.largest_dimensions().1
    }

    fn largest_dimensions(&self) -> (i32, i32) {
        self.thumbs()
            .iter()
            .filter_map(PhotoSize::dimensions)
            .max_by_key(|(w, h)| (*w as i64) * (*h as i64))
            .unwrap_or((0, 0))
    }

    /// Get photo thumbs.
    ///
    /// Some low-resolution thumbnails already contain all necessary information that can be
    /// shown to the user, but for other types an additional request to Telegram should be
    /// performed. Check the description of [`PhotoSize`] to get an information about each
    /// particular thumbnail.
    ///
    /// <https://core.telegram.org/api/files#image-thumbnail-types>
    pub fn thumbs(&self) -> Vec<PhotoSize> {
        self.raw.sizes.iter().map(PhotoSize::from_raw).collect()
    }

    /// Returns true if the photo is a spoiler.
    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }

    /// Returns TTL seconds if the photo is self-destructive, None otherwise
    pub fn ttl_seconds(&self) -> Option<i32> {
        self.ttl_seconds
    }

    /// Does the photo have stickers attached to it?
    pub fn has_stickers(&self) -> bool {
        self.raw.has_stickers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_come_from_the_largest_known_thumb() {
        let photo = Photo::from_raw(tl::types::Photo {
            has_stickers: false,
            id: 1,
            access_hash: 2,
            file_reference: vec![3],
            date: 1_700_000_000,
            sizes: vec![
                tl::types::PhotoSize {
                    r#type: "s".into(),
                    w: 90,
                    h: 60,
                    size: 1_000,
                }
                .into(),
                tl::types::PhotoSize {
                    r#type: "x".into(),
                    w: 800,
                    h: 600,
                    size: 50_000,
                }
                .into(),
                tl::types::PhotoPathSize {
                    r#type: "j".into(),
                    bytes: vec![0; 4],
                }
                .into(),
            ],
            dc_id: 2,
        });

        assert_eq!(photo.width(), 800);
        assert_eq!(photo.height(), 600);
        assert_eq!(photo.size(), 50_000);
        assert_eq!(photo.thumbs().len(), 3);
        assert_eq!(photo.date().timestamp(), 1_700_000_000);
        assert!(!photo.is_spoiler());
    }
}
