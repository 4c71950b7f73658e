//! Integration tests for `NominatimClient` using wiremock HTTP mocks.

use dwell_core::Coordinates;
use dwell_geo::{GeoError, NominatimClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url(base_url, 5, "dwell-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn reverse_returns_city_and_state() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "place_id": 1234,
        "display_name": "Shivajinagar, Pune, Maharashtra, India",
        "address": {
            "suburb": "Shivajinagar",
            "city": "Pune",
            "state": "Maharashtra",
            "country": "India"
        }
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("lat", "18.5204"))
        .and(query_param("lon", "73.8567"))
        .and(header("user-agent", "dwell-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let location = client
        .reverse(Coordinates::new(18.5204, 73.8567))
        .await
        .expect("should resolve");

    assert_eq!(location.city, "Pune");
    assert_eq!(location.state, "Maharashtra");
    assert_eq!(location.label(), "Pune, Maharashtra");
}

#[tokio::test]
async fn reverse_falls_back_to_town_and_county() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "address": { "town": "Alibag", "county": "Raigad" }
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let location = test_client(&server.uri())
        .reverse(Coordinates::new(18.64, 72.87))
        .await
        .expect("should resolve");

    assert_eq!(location.label(), "Alibag, Raigad");
}

#[tokio::test]
async fn reverse_without_address_uses_unknown_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "Unable to geocode" })),
        )
        .mount(&server)
        .await;

    let location = test_client(&server.uri())
        .reverse(Coordinates::new(0.0, -140.0))
        .await
        .expect("missing address is not an error");

    assert_eq!(location.city, "Unknown City");
    assert_eq!(location.state, "Unknown State");
}

#[tokio::test]
async fn reverse_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .reverse(Coordinates::new(40.7, -74.0))
        .await
        .expect_err("503 should fail");

    assert!(matches!(err, GeoError::Http(_)), "got {err:?}");
    assert_eq!(
        err.user_message(),
        "Could not determine city/state from coordinates"
    );
}

#[tokio::test]
async fn reverse_rejects_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .reverse(Coordinates::new(40.7, -74.0))
        .await
        .expect_err("html body should fail");

    assert!(matches!(err, GeoError::Deserialize { .. }), "got {err:?}");
}
