//! Landing and the presentation-only auth screens.

use axum::response::{Html, Redirect};
use dwell_core::Route;

use crate::pages;

pub(super) async fn root() -> Redirect {
    Redirect::to(Route::FALLBACK.path())
}

pub(super) async fn landing() -> Html<String> {
    pages::landing::render()
}

pub(super) async fn signup_page() -> Html<String> {
    pages::auth::signup()
}

/// Signup is not persisted; the visitor is simply sent on to login.
pub(super) async fn signup_submit() -> Redirect {
    Redirect::to(Route::Login.path())
}

pub(super) async fn login_page() -> Html<String> {
    pages::auth::login()
}

pub(super) async fn login_submit() -> Redirect {
    Redirect::to(Route::Landing.path())
}
