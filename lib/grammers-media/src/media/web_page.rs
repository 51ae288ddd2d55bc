// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Document, Photo};
use grammers_media_tl as tl;

/// The preview of a link.
///
/// Only previews that Telegram has finished generating become a `WebPage`.
#[derive(Clone, Debug, PartialEq)]
pub struct WebPage {
    pub raw: tl::types::WebPage,
}

impl WebPage {
    pub fn from_raw(webpage: tl::types::WebPage) -> Self {
        Self { raw: webpage }
    }

    pub fn id(&self) -> i64 {
        self.raw.id
    }

    pub fn url(&self) -> &str {
        &self.raw.url
    }

    /// The URL, shortened for display.
    pub fn display_url(&self) -> &str {
        &self.raw.display_url
    }

    /// Type of the page, such as "article", "photo" or "video".
    pub fn page_type(&self) -> Option<&str> {
        self.raw.r#type.as_deref()
    }

    pub fn site_name(&self) -> Option<&str> {
        self.raw.site_name.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.raw.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.raw.description.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.raw.author.as_deref()
    }

    /// Duration of the content, in seconds.
    pub fn duration(&self) -> Option<i32> {
        self.raw.duration
    }

    pub fn photo(&self) -> Option<Photo> {
        Photo::from_raw_enum(self.raw.photo.clone())
    }

    pub fn document(&self) -> Option<Document> {
        Document::from_raw_enum(self.raw.document.clone())
    }

    pub fn has_large_media(&self) -> bool {
        self.raw.has_large_media
    }
}
