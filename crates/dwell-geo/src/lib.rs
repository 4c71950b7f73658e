//! Location detection for the booking wizard: a geolocation capability,
//! a Nominatim reverse-geocoding client, and the resolver tying them together.

pub mod client;
pub mod error;
pub mod resolver;
pub mod types;

pub use client::NominatimClient;
pub use error::GeoError;
pub use resolver::{LocationResolver, PositionSource, ReportedPosition, ReverseGeocoder};
pub use types::DetectedLocation;
