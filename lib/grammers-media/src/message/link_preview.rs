// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use grammers_media_tl as tl;

/// How the preview of a link in a message is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkPreviewOptions {
    pub is_disabled: bool,
    /// The link the preview was generated for.
    pub url: Option<String>,
    pub prefer_small_media: bool,
    pub prefer_large_media: bool,
    /// `None` when the message does not say where the preview goes.
    pub show_above_text: Option<bool>,
}

impl LinkPreviewOptions {
    /// Options of a message whose media is a link preview, or `None` for any other media.
    pub fn from_raw_media(media: &tl::enums::MessageMedia) -> Option<Self> {
        let media = match media {
            tl::enums::MessageMedia::WebPage(media) => media,
            _ => return None,
        };

        let url = match &media.webpage {
            tl::enums::WebPage::WebPage(page) => Some(page.url.clone()),
            tl::enums::WebPage::Empty(page) => page.url.clone(),
            tl::enums::WebPage::Pending(page) => page.url.clone(),
            tl::enums::WebPage::NotModified(_) => None,
        };

        Some(Self {
            is_disabled: false,
            url,
            prefer_small_media: media.force_small_media,
            prefer_large_media: media.force_large_media,
            show_above_text: None,
        })
    }
}
