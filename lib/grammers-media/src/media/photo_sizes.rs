// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use grammers_media_tl as tl;

/// Length of the JPEG header and footer that stripped thumbnails omit.
const STRIPPED_OVERHEAD: usize = 622;

/// One of the thumbnails of a photo or document.
///
/// Since Telegram doesn't store the original photo, it can be presented in different sizes
/// and quality, a.k.a. thumbnails. Each photo preview has a specific type, indicating
/// the resolution and image transform that was applied server-side.
///
/// <https://core.telegram.org/api/files#image-thumbnail-types>
#[derive(Clone, Debug, PartialEq)]
pub enum PhotoSize {
    Empty(SizeEmpty),
    Size(Size),
    Cached(CachedSize),
    Stripped(StrippedSize),
    Progressive(ProgressiveSize),
    Path(PathSize),
}

impl PhotoSize {
    pub fn from_raw(size: &tl::enums::PhotoSize) -> Self {
        use tl::enums::PhotoSize as S;

        match size {
            S::Empty(size) => Self::Empty(SizeEmpty {
                photo_type: size.r#type.clone(),
            }),
            S::Size(size) => Self::Size(Size {
                photo_type: size.r#type.clone(),
                width: size.w,
                height: size.h,
                size: size.size,
            }),
            S::PhotoCachedSize(size) => Self::Cached(CachedSize {
                photo_type: size.r#type.clone(),
                width: size.w,
                height: size.h,
                bytes: size.bytes.clone(),
            }),
            S::PhotoStrippedSize(size) => Self::Stripped(StrippedSize {
                photo_type: size.r#type.clone(),
                bytes: size.bytes.clone(),
            }),
            S::Progressive(size) => Self::Progressive(ProgressiveSize {
                photo_type: size.r#type.clone(),
                width: size.w,
                height: size.h,
                sizes: size.sizes.clone(),
            }),
            S::PhotoPathSize(size) => Self::Path(PathSize {
                photo_type: size.r#type.clone(),
                bytes: size.bytes.clone(),
            }),
        }
    }

    /// Size of the photo thumb, in bytes.
    pub fn size(&self) -> usize {
        match self {
            Self::Empty(_) => 0,
            Self::Size(size) => size.size.max(0) as usize,
            Self::Cached(size) => size.bytes.len(),
            Self::Stripped(size) => {
                if size.is_valid() {
                    size.bytes.len() + STRIPPED_OVERHEAD
                } else {
                    0
                }
            }
            // Each entry is a prefix of the full image, so the last one is the whole file.
            Self::Progressive(size) => {
                size.sizes.iter().copied().max().unwrap_or(0).max(0) as usize
            }
            Self::Path(size) => size.bytes.len(),
        }
    }

    /// Width and height of the thumb, when known.
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        match self {
            Self::Size(size) => Some((size.width, size.height)),
            Self::Cached(size) => Some((size.width, size.height)),
            Self::Progressive(size) => Some((size.width, size.height)),
            Self::Empty(_) | Self::Stripped(_) | Self::Path(_) => None,
        }
    }

    pub fn photo_type(&self) -> &str {
        match self {
            Self::Empty(size) => &size.photo_type,
            Self::Size(size) => &size.photo_type,
            Self::Cached(size) => &size.photo_type,
            Self::Stripped(size) => &size.photo_type,
            Self::Progressive(size) => &size.photo_type,
            Self::Path(size) => &size.photo_type,
        }
    }
}

/// Empty thumbnail. Image with this thumbnail is unavailable.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeEmpty {
    photo_type: String,
}

/// Image description. An additional request to Telegram should be perfomed to download the image
#[derive(Clone, Debug, PartialEq)]
pub struct Size {
    photo_type: String,
    pub width: i32,
    pub height: i32,
    pub size: i32,
}

/// Description of an image and its content.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedSize {
    photo_type: String,

    pub width: i32,
    pub height: i32,
    pub bytes: Vec<u8>,
}

/// A low-resolution compressed JPG payload
#[derive(Clone, Debug, PartialEq)]
pub struct StrippedSize {
    photo_type: String,

    pub bytes: Vec<u8>,
}

impl StrippedSize {
    // https://core.telegram.org/api/files#stripped-thumbnails
    fn is_valid(&self) -> bool {
        self.bytes.len() >= 3 && self.bytes[0] == 0x01
    }
}

/// Progressively encoded photosize
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressiveSize {
    photo_type: String,

    pub width: i32,
    pub height: i32,
    pub sizes: Vec<i32>,
}

/// Messages with animated stickers can have a compressed svg (< 300 bytes) to show the outline
/// of the sticker before fetching the actual lottie animation.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSize {
    photo_type: String,

    pub bytes: Vec<u8>,
}

pub trait VecExt {
    /// Helper method to get the largest photo thumb
    fn largest(&self) -> Option<&PhotoSize>;
}

impl VecExt for [PhotoSize] {
    fn largest(&self) -> Option<&PhotoSize> {
        self.iter().max_by_key(|x| x.size())
    }
}
