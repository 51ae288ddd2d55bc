// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur when turning raw media into friendly types.
use crate::chat::PeerId;
use crate::media::MediaKind;
use std::error::Error;
use std::fmt;

/// The media refers to a user or chat that was not present in the [`ChatMap`].
///
/// Telegram sends every peer a response mentions alongside it, so this means
/// the map was built from a different response (or an incomplete one).
///
/// [`ChatMap`]: crate::ChatMap
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingReferenceError {
    pub peer: PeerId,
}

impl Error for MissingReferenceError {}

impl fmt::Display for MissingReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing reference to {} in the chat map", self.peer)
    }
}

/// The media does not have the shape its constructor requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedMediaError {
    /// The kind of media that was being decoded.
    pub kind: MediaKind,
    pub reason: &'static str,
}

impl Error for MalformedMediaError {}

impl fmt::Display for MalformedMediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed {} media: {}", self.kind, self.reason)
    }
}

/// The error type returned when the media of a message cannot be decoded.
///
/// A failure only concerns the message being decoded. Other messages from
/// the same response can (and should) still be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    MissingReference(MissingReferenceError),
    Malformed(MalformedMediaError),
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingReference(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReference(e) => write!(f, "media decode error: {}", e),
            Self::Malformed(e) => write!(f, "media decode error: {}", e),
        }
    }
}

impl From<MissingReferenceError> for DecodeError {
    fn from(error: MissingReferenceError) -> Self {
        Self::MissingReference(error)
    }
}

impl From<MalformedMediaError> for DecodeError {
    fn from(error: MalformedMediaError) -> Self {
        Self::Malformed(error)
    }
}
