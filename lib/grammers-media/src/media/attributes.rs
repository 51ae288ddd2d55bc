// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::media::MediaKind;
use grammers_media_tl as tl;
use log::trace;

/// The attributes of a document, at most one of each kind.
///
/// Telegram does not forbid repeating an attribute, so only the first occurrence of each
/// kind is kept.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DocumentAttributes<'a> {
    pub file_name: Option<&'a str>,
    pub animated: bool,
    pub sticker: Option<&'a tl::types::DocumentAttributeSticker>,
    pub video: Option<&'a tl::types::DocumentAttributeVideo>,
    pub audio: Option<&'a tl::types::DocumentAttributeAudio>,
    pub image_size: Option<&'a tl::types::DocumentAttributeImageSize>,
}

impl<'a> DocumentAttributes<'a> {
    pub fn collect(attributes: &'a [tl::enums::DocumentAttribute]) -> Self {
        use tl::enums::DocumentAttribute as A;

        let mut result = Self::default();
        for attribute in attributes {
            match attribute {
                A::Filename(attr) => {
                    result.file_name.get_or_insert(attr.file_name.as_str());
                }
                A::Animated => result.animated = true,
                A::Sticker(attr) => {
                    result.sticker.get_or_insert(attr);
                }
                A::Video(attr) => {
                    result.video.get_or_insert(attr);
                }
                A::Audio(attr) => {
                    result.audio.get_or_insert(attr);
                }
                A::ImageSize(attr) => {
                    result.image_size.get_or_insert(attr);
                }
                A::HasStickers | A::CustomEmoji(_) => {}
            }
        }
        result
    }

    /// Decide what the document really is.
    ///
    /// Animated wins over sticker, which wins over video, which wins over audio.
    pub fn kind(&self) -> MediaKind {
        let kind = if self.animated {
            MediaKind::Animation
        } else if self.sticker.is_some() {
            MediaKind::Sticker
        } else if let Some(video) = self.video {
            if video.round_message {
                MediaKind::VideoNote
            } else {
                MediaKind::Video
            }
        } else if let Some(audio) = self.audio {
            if audio.voice {
                MediaKind::Voice
            } else {
                MediaKind::Audio
            }
        } else {
            MediaKind::Document
        };

        trace!(
            "document classified as {} (animated={}, sticker={}, video={}, audio={})",
            kind,
            self.animated,
            self.sticker.is_some(),
            self.video.is_some(),
            self.audio.is_some()
        );
        kind
    }

    /// Width and height from the video attribute, or the image size one.
    pub fn resolution(&self) -> Option<(i32, i32)> {
        self.video
            .map(|v| (v.w, v.h))
            .or_else(|| self.image_size.map(|i| (i.w, i.h)))
    }
}
