use thiserror::Error;

/// Errors from location detection.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The client platform has no geolocation capability.
    #[error("geolocation is not supported")]
    Unsupported,

    /// The user refused the position request, or the platform gave up.
    #[error("geolocation permission denied")]
    PermissionDenied,

    /// The reported coordinates are not finite or out of range.
    #[error("invalid coordinates: lat={latitude}, lon={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Network or TLS failure, or a non-2xx status, from the geocoder.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder body could not be deserialized.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The wizard that asked for the location went away before it resolved.
    #[error("location request cancelled")]
    Cancelled,
}

impl GeoError {
    /// Short message suitable for a transient notice to the visitor.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Unsupported => "Geolocation not supported",
            GeoError::PermissionDenied | GeoError::InvalidCoordinates { .. } => {
                "Unable to detect location"
            }
            GeoError::Http(_) | GeoError::Deserialize { .. } | GeoError::InvalidBaseUrl { .. } => {
                "Could not determine city/state from coordinates"
            }
            GeoError::Cancelled => "Location request cancelled",
        }
    }
}
