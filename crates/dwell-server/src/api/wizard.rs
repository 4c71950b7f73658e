//! Wizard handlers.
//!
//! Every POST stores the current step's fields first and then applies the
//! pressed button's action, answering with a redirect back to the wizard
//! page. Session locks are released before any await on the geocoder or the
//! submitter.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use chrono::{Days, NaiveDate, Utc};
use dwell_core::{
    catalog::FieldKind, Coordinates, Liveness, Phase, Route, Wizard, WizardError, WizardKind,
    WizardRecord,
};
use dwell_geo::{DetectedLocation, GeoError, ReportedPosition};
use thiserror::Error;
use uuid::Uuid;

use super::AppState;
use crate::pages::{self, wizard::WizardView};
use crate::sessions::{SharedSession, WizardSession};

type FormPairs = Vec<(String, String)>;

#[derive(Debug, Error)]
pub(super) enum PageError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected wizard request");
        let page = pages::error_page("Something went wrong", &self.to_string());
        (StatusCode::BAD_REQUEST, page).into_response()
    }
}

/// What the visitor asked for with the button they pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Next,
    Back,
    Jump(usize),
    Submit,
    Toggle { field: String, item: String },
    /// Store fields only.
    Save,
}

impl Action {
    fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Action::Save;
        };
        match raw {
            "next" => Action::Next,
            "back" => Action::Back,
            "submit" => Action::Submit,
            _ => {
                if let Some(index) = raw.strip_prefix("jump-").and_then(|n| n.parse().ok()) {
                    return Action::Jump(index);
                }
                if let Some((field, item)) = raw
                    .strip_prefix("toggle:")
                    .and_then(|rest| rest.split_once(':'))
                {
                    return Action::Toggle {
                        field: field.to_string(),
                        item: item.to_string(),
                    };
                }
                Action::Save
            }
        }
    }
}

fn form_value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Copy the posted text fields of the current step into the wizard.
///
/// Ignored unless the form says it was rendered for the step the wizard is
/// on, so a stale tab cannot write into a different step. Fields not posted
/// (such as rooms hidden for the chosen BHK) keep their values.
fn store_step_fields(wizard: &mut Wizard, form: &[(String, String)]) -> Result<(), WizardError> {
    let posted_step = form_value(form, "step").and_then(|s| s.parse::<usize>().ok());
    if posted_step != Some(wizard.step()) {
        return Ok(());
    }
    let kind = wizard.kind();
    for spec in kind.fields_on_step(wizard.step()) {
        if spec.kind != FieldKind::Text {
            continue;
        }
        if let Some(value) = form_value(form, spec.name) {
            wizard.set_field(spec.name, value)?;
        }
    }
    Ok(())
}

fn earliest_appointment_date() -> NaiveDate {
    let today = Utc::now().date_naive();
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

fn wizard_url(kind: WizardKind, id: Uuid) -> String {
    format!("{}/{id}", Route::Wizard(kind).path())
}

/// Resolve the id in the URL to a live session of this wizard.
async fn lookup(state: &AppState, kind: WizardKind, raw_id: &str) -> Option<(Uuid, SharedSession)> {
    let id = Uuid::parse_str(raw_id).ok()?;
    let session = state.sessions.get(id, kind).await?;
    Some((id, session))
}

/// Unknown or expired sessions start over with a fresh wizard.
fn restart(kind: WizardKind) -> Response {
    Redirect::to(Route::Wizard(kind).path()).into_response()
}

pub(super) async fn start(
    State(state): State<AppState>,
    Extension(kind): Extension<WizardKind>,
) -> Redirect {
    let (id, _) = state.sessions.create(kind).await;
    Redirect::to(&wizard_url(kind, id))
}

pub(super) async fn show(
    State(state): State<AppState>,
    Extension(kind): Extension<WizardKind>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some((id, session)) = lookup(&state, kind, &raw_id).await else {
        return restart(kind);
    };

    let mut guard = session.lock().await;
    guard.touch();
    let notice = guard.take_notice();
    let view = WizardView {
        id,
        wizard: &guard.wizard,
        detected: guard.detected.as_ref(),
        notice: notice.as_deref(),
        min_date: earliest_appointment_date(),
    };
    pages::wizard::render(&view).into_response()
}

pub(super) async fn update(
    State(state): State<AppState>,
    Extension(kind): Extension<WizardKind>,
    Path(raw_id): Path<String>,
    Form(form): Form<FormPairs>,
) -> Result<Response, PageError> {
    let Some((id, session)) = lookup(&state, kind, &raw_id).await else {
        return Ok(restart(kind));
    };
    let back = Redirect::to(&wizard_url(kind, id)).into_response();

    let mut guard = session.lock().await;
    guard.touch();
    if guard.wizard.phase() != Phase::Editing {
        return Ok(back);
    }

    store_step_fields(&mut guard.wizard, &form)?;

    match Action::parse(form_value(&form, "action")) {
        Action::Next => {
            let from = guard.wizard.step();
            if guard.wizard.advance() {
                tracing::info!(session_id = %id, wizard = %kind, from, to = guard.wizard.step(), "step advanced");
            } else {
                tracing::debug!(session_id = %id, step = from, "advance refused");
            }
        }
        Action::Back => {
            guard.wizard.retreat();
        }
        Action::Jump(index) => {
            if let Err(e) = guard.wizard.jump_to(index) {
                tracing::debug!(session_id = %id, error = %e, "jump refused");
            }
        }
        Action::Toggle { field, item } => {
            guard.wizard.toggle_item(&field, &item)?;
        }
        Action::Submit => match guard.wizard.begin_submit() {
            Ok(()) => {
                tracing::info!(session_id = %id, wizard = %kind, "submission started");
                let record = guard.wizard.record().clone();
                let liveness = guard.liveness();
                drop(guard);
                spawn_submission(&state, id, Arc::clone(&session), record, liveness);
            }
            Err(e) => tracing::debug!(session_id = %id, error = %e, "submit refused"),
        },
        Action::Save => {}
    }

    Ok(back)
}

fn spawn_submission(
    state: &AppState,
    id: Uuid,
    session: SharedSession,
    record: WizardRecord,
    liveness: Liveness,
) {
    let submitter = Arc::clone(&state.submitter);
    tokio::spawn(async move {
        let result = submitter.submit(&record).await;

        let mut guard = session.lock().await;
        if liveness.is_cancelled() {
            tracing::debug!(session_id = %id, "discarding submission result for a closed wizard");
            return;
        }
        match result {
            Ok(()) => {
                if guard.wizard.finish_submit().is_ok() {
                    tracing::info!(session_id = %id, "submission completed");
                }
            }
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "submission failed");
                if guard.wizard.abort_submit().is_ok() {
                    guard.notice = Some(e.user_message().to_string());
                }
            }
        }
    });
}

/// What the browser reported from `navigator.geolocation`.
fn reported_position(form: &[(String, String)]) -> ReportedPosition {
    match form_value(form, "geoError").filter(|e| !e.is_empty()) {
        Some("unsupported") => ReportedPosition::Unsupported,
        Some(_) => ReportedPosition::Denied,
        None => {
            let coord = |key: &str| {
                form_value(form, key)
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            };
            ReportedPosition::Position(Coordinates::new(coord("lat"), coord("lon")))
        }
    }
}

pub(super) async fn locate(
    State(state): State<AppState>,
    Extension(kind): Extension<WizardKind>,
    Path(raw_id): Path<String>,
    Form(form): Form<FormPairs>,
) -> Result<Response, PageError> {
    let Some((id, session)) = lookup(&state, kind, &raw_id).await else {
        return Ok(restart(kind));
    };
    let back = Redirect::to(&wizard_url(kind, id)).into_response();

    let liveness = {
        let mut guard = session.lock().await;
        guard.touch();
        if guard.wizard.phase() != Phase::Editing {
            return Ok(back);
        }
        store_step_fields(&mut guard.wizard, &form)?;
        guard.liveness()
    };

    let reported = reported_position(&form);
    let result = state.resolver.detect(&reported, &liveness).await;

    let mut guard = session.lock().await;
    apply_detection(&mut guard, id, &liveness, result)?;
    Ok(back)
}

/// Store a finished detection on the session it was started for.
///
/// Results are dropped when the session was reset after the detection
/// started, or when it left editing (a submit from another tab).
fn apply_detection(
    session: &mut WizardSession,
    id: Uuid,
    liveness: &Liveness,
    result: Result<DetectedLocation, GeoError>,
) -> Result<(), WizardError> {
    if liveness.is_cancelled() || session.wizard.phase() != Phase::Editing {
        tracing::debug!(session_id = %id, "discarding location for a wizard that moved on");
        return Ok(());
    }
    match result {
        Ok(location) => {
            tracing::info!(session_id = %id, city = %location.city, state = %location.state, "location detected");
            session.wizard.set_field("location", location.label())?;
            session.detected = Some(location);
        }
        Err(GeoError::Cancelled) => {
            tracing::debug!(session_id = %id, "location detection cancelled");
        }
        Err(e) => {
            tracing::warn!(session_id = %id, error = %e, "location detection failed");
            session.notice = Some(e.user_message().to_string());
        }
    }
    Ok(())
}

pub(super) async fn close(
    State(state): State<AppState>,
    Extension(kind): Extension<WizardKind>,
    Path(raw_id): Path<String>,
) -> Redirect {
    if let Some((id, session)) = lookup(&state, kind, &raw_id).await {
        session.lock().await.reset();
        state.sessions.remove(id).await;
        tracing::info!(session_id = %id, wizard = %kind, "wizard closed");
    }
    Redirect::to(Route::Landing.path())
}
