//! Location resolution: position capability plus reverse geocoding.
//!
//! Both halves sit behind traits so the server can swap in the browser-reported
//! position and tests can substitute fakes for the network.

use std::sync::Arc;

use async_trait::async_trait;
use dwell_core::{Coordinates, Liveness};

use crate::error::GeoError;
use crate::types::DetectedLocation;

/// Supplies the visitor's current position.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeoError>;
}

/// Maps coordinates to a city and state.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinates: Coordinates) -> Result<DetectedLocation, GeoError>;
}

/// What the browser's geolocation API reported back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportedPosition {
    Position(Coordinates),
    Unsupported,
    Denied,
}

#[async_trait]
impl PositionSource for ReportedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        match *self {
            ReportedPosition::Position(coordinates) => {
                let Coordinates {
                    latitude,
                    longitude,
                } = coordinates;
                let in_range = latitude.is_finite()
                    && longitude.is_finite()
                    && (-90.0..=90.0).contains(&latitude)
                    && (-180.0..=180.0).contains(&longitude);
                if in_range {
                    Ok(coordinates)
                } else {
                    Err(GeoError::InvalidCoordinates {
                        latitude,
                        longitude,
                    })
                }
            }
            ReportedPosition::Unsupported => Err(GeoError::Unsupported),
            ReportedPosition::Denied => Err(GeoError::PermissionDenied),
        }
    }
}

#[derive(Clone)]
pub struct LocationResolver {
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl LocationResolver {
    #[must_use]
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { geocoder }
    }

    /// Obtain a position and resolve it to a place name.
    ///
    /// `liveness` belongs to the wizard that asked. If it is cancelled before
    /// the position arrives or before the geocoder answers, the result is
    /// [`GeoError::Cancelled`] and the caller must not apply it.
    ///
    /// # Errors
    ///
    /// Returns the position source's error, the geocoder's error, or
    /// [`GeoError::Cancelled`].
    pub async fn detect(
        &self,
        source: &dyn PositionSource,
        liveness: &Liveness,
    ) -> Result<DetectedLocation, GeoError> {
        let coordinates = source.current_position().await?;
        if liveness.is_cancelled() {
            return Err(GeoError::Cancelled);
        }

        let location = self.geocoder.reverse(coordinates).await?;
        if liveness.is_cancelled() {
            tracing::debug!("discarding location for a closed wizard");
            return Err(GeoError::Cancelled);
        }
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct FixedGeocoder {
        calls: AtomicUsize,
        cancel_on_call: Option<Liveness>,
    }

    impl FixedGeocoder {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                cancel_on_call: None,
            }
        }
    }

    #[async_trait]
    impl ReverseGeocoder for FixedGeocoder {
        async fn reverse(&self, coordinates: Coordinates) -> Result<DetectedLocation, GeoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(liveness) = &self.cancel_on_call {
                liveness.cancel();
            }
            Ok(DetectedLocation {
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                coordinates,
            })
        }
    }

    #[tokio::test]
    async fn detect_resolves_reported_position() {
        let geocoder = Arc::new(FixedGeocoder::new());
        let resolver = LocationResolver::new(geocoder.clone());
        let source = ReportedPosition::Position(Coordinates::new(18.52, 73.85));

        let location = resolver
            .detect(&source, &Liveness::new())
            .await
            .expect("resolves");

        assert_eq!(location.label(), "Pune, Maharashtra");
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unsupported_and_denied_skip_the_geocoder() {
        let geocoder = Arc::new(FixedGeocoder::new());
        let resolver = LocationResolver::new(geocoder.clone());

        let err = resolver
            .detect(&ReportedPosition::Unsupported, &Liveness::new())
            .await
            .expect_err("unsupported");
        assert!(matches!(err, GeoError::Unsupported));

        let err = resolver
            .detect(&ReportedPosition::Denied, &Liveness::new())
            .await
            .expect_err("denied");
        assert_eq!(err.user_message(), "Unable to detect location");

        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_rejected() {
        let resolver = LocationResolver::new(Arc::new(FixedGeocoder::new()));
        let source = ReportedPosition::Position(Coordinates::new(123.0, 10.0));
        let err = resolver
            .detect(&source, &Liveness::new())
            .await
            .expect_err("invalid");
        assert!(matches!(err, GeoError::InvalidCoordinates { .. }));
    }

    #[tokio::test]
    async fn cancelled_before_lookup_never_calls_geocoder() {
        let geocoder = Arc::new(FixedGeocoder::new());
        let resolver = LocationResolver::new(geocoder.clone());
        let liveness = Liveness::new();
        liveness.cancel();

        let err = resolver
            .detect(
                &ReportedPosition::Position(Coordinates::new(1.0, 2.0)),
                &liveness,
            )
            .await
            .expect_err("cancelled");
        assert!(matches!(err, GeoError::Cancelled));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancelled_during_lookup_discards_result() {
        let liveness = Liveness::new();
        let geocoder = Arc::new(FixedGeocoder {
            calls: AtomicUsize::new(0),
            cancel_on_call: Some(liveness.clone()),
        });
        let resolver = LocationResolver::new(geocoder.clone());

        let err = resolver
            .detect(
                &ReportedPosition::Position(Coordinates::new(1.0, 2.0)),
                &liveness,
            )
            .await
            .expect_err("cancelled");
        assert!(matches!(err, GeoError::Cancelled));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
    }
}
