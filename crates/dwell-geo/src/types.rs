//! Reverse-geocoding response types.
//!
//! Only the `address` object of a Nominatim `/reverse?format=json` response is
//! modelled; everything else in the body is ignored.

use dwell_core::Coordinates;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_CITY: &str = "Unknown City";
pub const UNKNOWN_STATE: &str = "Unknown State";

#[derive(Debug, Default, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
}

/// A visitor position with its resolved place name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedLocation {
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
}

impl DetectedLocation {
    /// Build from a geocoder response, preferring `city` over `town` and
    /// `state` over `county`. Missing or empty names fall back to
    /// "Unknown City" / "Unknown State".
    #[must_use]
    pub fn from_response(response: ReverseResponse, coordinates: Coordinates) -> Self {
        let address = response.address.unwrap_or_default();
        let pick = |first: Option<String>, second: Option<String>, fallback: &str| {
            first
                .filter(|s| !s.is_empty())
                .or_else(|| second.filter(|s| !s.is_empty()))
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            city: pick(address.city, address.town, UNKNOWN_CITY),
            state: pick(address.state, address.county, UNKNOWN_STATE),
            coordinates,
        }
    }

    /// `"City, State"`, as written into the booking wizard's location field.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
