//! HTTP client for the Nominatim reverse-geocoding API.
//!
//! Wraps `reqwest` with a fixed user agent (Nominatim's usage policy rejects
//! anonymous clients), a request timeout, and typed response parsing.

use std::time::Duration;

use async_trait::async_trait;
use dwell_core::Coordinates;
use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::resolver::ReverseGeocoder;
use crate::types::{DetectedLocation, ReverseResponse};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const DEFAULT_USER_AGENT: &str = "dwell/0.1 (lead-capture)";

/// Client for the Nominatim `/reverse` endpoint.
///
/// Use [`NominatimClient::new`] for the public instance or
/// [`NominatimClient::with_base_url`] to point at a self-hosted server or a
/// mock server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeoError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, DEFAULT_USER_AGENT)
    }

    /// Creates a client with a custom base URL and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`GeoError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join("reverse")` appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeoError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up the city and state for a coordinate pair.
    ///
    /// Missing names are filled with "Unknown City" / "Unknown State" rather
    /// than treated as errors.
    ///
    /// # Errors
    ///
    /// - [`GeoError::InvalidBaseUrl`] if the endpoint URL cannot be built.
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the body is not the expected JSON.
    pub async fn reverse(&self, coordinates: Coordinates) -> Result<DetectedLocation, GeoError> {
        let url = self.build_url(coordinates)?;
        let body = self.request_json(&url).await?;

        let response: ReverseResponse =
            serde_json::from_value(body).map_err(|e| GeoError::Deserialize {
                context: format!(
                    "reverse(lat={}, lon={})",
                    coordinates.latitude, coordinates.longitude
                ),
                source: e,
            })?;

        let location = DetectedLocation::from_response(response, coordinates);
        tracing::debug!(
            city = %location.city,
            state = %location.state,
            "reverse geocode resolved"
        );
        Ok(location)
    }

    fn build_url(&self, coordinates: Coordinates) -> Result<Url, GeoError> {
        let mut url = self
            .base_url
            .join("reverse")
            .map_err(|e| GeoError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &coordinates.latitude.to_string())
            .append_pair("lon", &coordinates.longitude.to_string());
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GeoError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, coordinates: Coordinates) -> Result<DetectedLocation, GeoError> {
        NominatimClient::reverse(self, coordinates).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> NominatimClient {
        NominatimClient::with_base_url(base_url, 10, "dwell-test")
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_targets_reverse_endpoint() {
        let client = test_client("https://nominatim.openstreetmap.org");
        let url = client
            .build_url(Coordinates::new(18.5204, 73.8567))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/reverse?format=json&lat=18.5204&lon=73.8567"
        );
    }

    #[test]
    fn build_url_keeps_base_path_prefix() {
        let client = test_client("http://geo.internal/nominatim/");
        let url = client
            .build_url(Coordinates::new(-33.5, 151.25))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://geo.internal/nominatim/reverse?format=json&lat=-33.5&lon=151.25"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = NominatimClient::with_base_url("not a url", 10, "dwell-test");
        assert!(matches!(result, Err(GeoError::InvalidBaseUrl { .. })));
    }
}
