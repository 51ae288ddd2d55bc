// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Message-level information that carries media of its own.
mod link_preview;
mod origin;
mod reply_info;

pub use link_preview::LinkPreviewOptions;
pub use origin::MessageOrigin;
pub use reply_info::ExternalReplyInfo;
