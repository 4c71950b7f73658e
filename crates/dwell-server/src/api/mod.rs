mod site;
mod wizard;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use dwell_core::{Route, WizardKind};
use dwell_geo::LocationResolver;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};
use crate::sessions::SessionStore;
use crate::submit::Submitter;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub resolver: LocationResolver,
    pub submitter: Arc<dyn Submitter>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    sessions: usize,
}

impl ResponseMeta {
    pub(crate) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Routes for one wizard, with its kind available to handlers as an
/// extension.
fn wizard_router(kind: WizardKind) -> Router<AppState> {
    let base = Route::Wizard(kind).path();
    let mut router = Router::new()
        .route(base, get(wizard::start))
        .route(&format!("{base}/{{id}}"), get(wizard::show).post(wizard::update))
        .route(&format!("{base}/{{id}}/close"), post(wizard::close));
    if kind == WizardKind::Booking {
        router = router.route(&format!("{base}/{{id}}/locate"), post(wizard::locate));
    }
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(Extension(kind))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let site_routes = Router::new()
        .route("/", get(site::root))
        .route("/landing", get(site::landing))
        .route("/signup", get(site::signup_page).post(site::signup_submit))
        .route("/login", get(site::login_page).post(site::login_submit))
        .route("/health", get(health));

    Router::new()
        .merge(site_routes)
        .merge(wizard_router(WizardKind::Booking))
        .merge(wizard_router(WizardKind::Vr))
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                )),
        )
        .with_state(state)
}

/// Unknown paths go wherever the route table sends them, which for anything
/// unrecognised is the login screen.
async fn fallback(uri: Uri) -> Redirect {
    let route = Route::resolve(uri.path()).route();
    tracing::debug!(path = %uri.path(), target = route.path(), "redirecting unknown path");
    Redirect::to(route.path())
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            sessions: state.sessions.len().await,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
