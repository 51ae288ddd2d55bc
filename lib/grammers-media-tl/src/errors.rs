// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur when converting between [`types`] and [`enums`].
//!
//! [`types`]: ../types/index.html
//! [`enums`]: ../enums/index.html
use std::error::Error;
use std::fmt;

/// The error type indicating the enumeration is representing a different
/// variant (which is "wrong") and cannot be converted into the desired type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongVariant;

impl Error for WrongVariant {}

impl fmt::Display for WrongVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enum has a different variant than the requested")
    }
}
