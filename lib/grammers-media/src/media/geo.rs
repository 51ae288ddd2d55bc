// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use grammers_media_tl as tl;

/// A point on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub raw: tl::types::GeoPoint,
}

impl Location {
    pub fn from_raw(geo: tl::enums::GeoPoint) -> Option<Self> {
        match geo {
            tl::enums::GeoPoint::Empty => None,
            tl::enums::GeoPoint::Point(point) => Some(Self { raw: point }),
        }
    }

    /// Get the latitude of the location.
    pub fn latitude(&self) -> f64 {
        self.raw.lat
    }

    /// Get the longitude of the location.
    pub fn longitude(&self) -> f64 {
        self.raw.long
    }

    /// Get the accuracy of the geo location in meters.
    pub fn accuracy_radius(&self) -> Option<i32> {
        self.raw.accuracy_radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Venue {
    pub location: Option<Location>,
    pub raw_venue: tl::types::MessageMediaVenue,
}

impl Venue {
    pub fn from_raw_media(venue: tl::types::MessageMediaVenue) -> Self {
        Self {
            location: Location::from_raw(venue.geo.clone()),
            raw_venue: venue,
        }
    }

    /// Get the location of the venue, if it has one.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Get the title of the venue.
    pub fn title(&self) -> &str {
        &self.raw_venue.title
    }

    /// Get the address of the venue.
    pub fn address(&self) -> &str {
        &self.raw_venue.address
    }

    /// Get the provider of the venue location.
    pub fn provider(&self) -> &str {
        &self.raw_venue.provider
    }

    /// Get the id of the venue.
    pub fn venue_id(&self) -> &str {
        &self.raw_venue.venue_id
    }

    /// Get the type of the venue.
    pub fn venue_type(&self) -> &str {
        &self.raw_venue.venue_type
    }
}
