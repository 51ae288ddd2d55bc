// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Documents, and the more specific kinds of media that are sent as documents.
use super::attributes::DocumentAttributes;
use super::photo_sizes::PhotoSize;
use crate::utils::{Date, date};
use grammers_media_tl as tl;

const ANIMATED_STICKER_MIME: &str = "application/x-tgsticker";
const VIDEO_STICKER_MIME: &str = "video/webm";

/// A generic file.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub raw: tl::types::Document,
    ttl_seconds: Option<i32>,
    spoiler: bool,
}

impl Document {
    pub fn from_raw(document: tl::types::Document) -> Self {
        Self {
            raw: document,
            ttl_seconds: None,
            spoiler: false,
        }
    }

    pub(crate) fn from_raw_enum(document: Option<tl::enums::Document>) -> Option<Self> {
        match document {
            Some(tl::enums::Document::Document(document)) => Some(Self::from_raw(document)),
            Some(tl::enums::Document::Empty(_)) | None => None,
        }
    }

    pub(crate) fn from_raw_media(
        document: tl::types::Document,
        spoiler: bool,
        ttl_seconds: Option<i32>,
    ) -> Self {
        Self {
            raw: document,
            ttl_seconds,
            spoiler,
        }
    }

    pub(crate) fn attributes(&self) -> DocumentAttributes<'_> {
        DocumentAttributes::collect(&self.raw.attributes)
    }

    pub fn id(&self) -> i64 {
        self.raw.id
    }

    /// Return the file's name.
    ///
    /// If the file was uploaded with no file name, the returned string will be empty.
    pub fn name(&self) -> &str {
        self.attributes().file_name.unwrap_or("")
    }

    /// Get the file's MIME type.
    pub fn mime_type(&self) -> &str {
        self.raw.mime_type.as_str()
    }

    /// The date on which the file was created.
    pub fn creation_date(&self) -> Date {
        date(self.raw.date)
    }

    /// The size of the file, in bytes.
    pub fn size(&self) -> i64 {
        self.raw.size
    }

    /// Get document thumbs.
    /// <https://core.telegram.org/api/files#image-thumbnail-types>
    pub fn thumbs(&self) -> Vec<PhotoSize> {
        match &self.raw.thumbs {
            Some(thumbs) => thumbs.iter().map(PhotoSize::from_raw).collect(),
            None => vec![],
        }
    }

    /// Width & height of video/image
    pub fn resolution(&self) -> Option<(i32, i32)> {
        self.attributes().resolution()
    }

    /// Returns TTL seconds if the document is self-destructive, None otherwise
    pub fn ttl_seconds(&self) -> Option<i32> {
        self.ttl_seconds
    }

    /// Returns true if the document is a spoiler
    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }
}

/// An animation, also known as a GIF, although Telegram sends them as silent MPEG-4 videos.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub document: Document,
    pub raw_video: Option<tl::types::DocumentAttributeVideo>,
}

impl Animation {
    pub(crate) fn from_document(document: Document) -> Self {
        let raw_video = document.attributes().video.cloned();
        Self {
            document,
            raw_video,
        }
    }

    /// Duration of the animation, in seconds. 0 if unknown.
    pub fn duration(&self) -> f64 {
        self.raw_video.as_ref().map(|v| v.duration).unwrap_or(0.0)
    }

    pub fn width(&self) -> i32 {
        self.document.resolution().map(|(w, _)| w).unwrap_or(0)
    }

    pub fn height(&self) -> i32 {
        self.document.resolution().map(|(_, h)| h).unwrap_or(0)
    }

    pub fn file_name(&self) -> &str {
        self.document.name()
    }

    pub fn is_spoiler(&self) -> bool {
        self.document.is_spoiler()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Video {
    pub document: Document,
    pub raw_video: tl::types::DocumentAttributeVideo,
}

impl Video {
    /// Gives the document back if it lacks the required attribute.
    pub(crate) fn from_document(document: Document) -> Result<Self, Document> {
        let raw_video = document.attributes().video.cloned();
        match raw_video {
            Some(raw_video) => Ok(Self {
                document,
                raw_video,
            }),
            None => Err(document),
        }
    }

    /// Duration of the video, in seconds.
    pub fn duration(&self) -> f64 {
        self.raw_video.duration
    }

    pub fn width(&self) -> i32 {
        self.raw_video.w
    }

    pub fn height(&self) -> i32 {
        self.raw_video.h
    }

    /// Can the video be played before it is fully downloaded?
    pub fn supports_streaming(&self) -> bool {
        self.raw_video.supports_streaming
    }

    pub fn file_name(&self) -> &str {
        self.document.name()
    }

    pub fn ttl_seconds(&self) -> Option<i32> {
        self.document.ttl_seconds()
    }

    pub fn is_spoiler(&self) -> bool {
        self.document.is_spoiler()
    }
}

/// A round video message.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoNote {
    pub document: Document,
    pub raw_video: tl::types::DocumentAttributeVideo,
}

impl VideoNote {
    pub(crate) fn from_document(document: Document) -> Result<Self, Document> {
        let raw_video = document.attributes().video.cloned();
        match raw_video {
            Some(raw_video) => Ok(Self {
                document,
                raw_video,
            }),
            None => Err(document),
        }
    }

    /// Diameter of the video, in pixels.
    pub fn length(&self) -> i32 {
        self.raw_video.w
    }

    /// Duration of the video, in seconds.
    pub fn duration(&self) -> f64 {
        self.raw_video.duration
    }

    pub fn ttl_seconds(&self) -> Option<i32> {
        self.document.ttl_seconds()
    }
}

/// A music file.
#[derive(Clone, Debug, PartialEq)]
pub struct Audio {
    pub document: Document,
    pub raw_audio: tl::types::DocumentAttributeAudio,
}

impl Audio {
    pub(crate) fn from_document(document: Document) -> Result<Self, Document> {
        let raw_audio = document.attributes().audio.cloned();
        match raw_audio {
            Some(raw_audio) => Ok(Self {
                document,
                raw_audio,
            }),
            None => Err(document),
        }
    }

    /// Duration of the audio, in seconds.
    pub fn duration(&self) -> i32 {
        self.raw_audio.duration
    }

    /// Title of audio
    pub fn title(&self) -> Option<&str> {
        self.raw_audio.title.as_deref()
    }

    /// Performer (artist) of audio
    pub fn performer(&self) -> Option<&str> {
        self.raw_audio.performer.as_deref()
    }

    pub fn file_name(&self) -> &str {
        self.document.name()
    }
}

/// A voice message.
#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    pub document: Document,
    pub raw_audio: tl::types::DocumentAttributeAudio,
}

impl Voice {
    pub(crate) fn from_document(document: Document) -> Result<Self, Document> {
        let raw_audio = document.attributes().audio.cloned();
        match raw_audio {
            Some(raw_audio) => Ok(Self {
                document,
                raw_audio,
            }),
            None => Err(document),
        }
    }

    /// Duration of the voice message, in seconds.
    pub fn duration(&self) -> i32 {
        self.raw_audio.duration
    }

    /// The 5-bit packed waveform of the recording, if any.
    pub fn waveform(&self) -> Option<&[u8]> {
        self.raw_audio.waveform.as_deref()
    }

    pub fn ttl_seconds(&self) -> Option<i32> {
        self.document.ttl_seconds()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    pub document: Document,
    pub raw_attrs: tl::types::DocumentAttributeSticker,
}

impl Sticker {
    pub(crate) fn from_document(document: Document) -> Result<Self, Document> {
        let raw_attrs = document.attributes().sticker.cloned();
        match raw_attrs {
            Some(raw_attrs) => Ok(Self {
                document,
                raw_attrs,
            }),
            None => Err(document),
        }
    }

    /// Get the emoji associated with the sticker.
    pub fn emoji(&self) -> &str {
        self.raw_attrs.alt.as_str()
    }

    /// Short name of the sticker set this sticker belongs to.
    ///
    /// Only known when the set is referenced by its short name. Otherwise, the set has to be
    /// fetched to learn its name.
    pub fn set_name(&self) -> Option<&str> {
        match &self.raw_attrs.stickerset {
            tl::enums::InputStickerSet::ShortName(set) => Some(set.short_name.as_str()),
            _ => None,
        }
    }

    /// Raw reference to the sticker set this sticker belongs to.
    pub fn raw_set(&self) -> &tl::enums::InputStickerSet {
        &self.raw_attrs.stickerset
    }

    /// Is this a mask sticker?
    pub fn is_mask(&self) -> bool {
        self.raw_attrs.mask
    }

    pub fn width(&self) -> i32 {
        self.document.resolution().map(|(w, _)| w).unwrap_or(0)
    }

    pub fn height(&self) -> i32 {
        self.document.resolution().map(|(_, h)| h).unwrap_or(0)
    }

    /// Is this sticker an animated (Lottie) sticker?
    pub fn is_animated(&self) -> bool {
        self.document.mime_type() == ANIMATED_STICKER_MIME
    }

    /// Is this sticker a video (WebM) sticker?
    pub fn is_video(&self) -> bool {
        self.document.mime_type() == VIDEO_STICKER_MIME
    }
}
