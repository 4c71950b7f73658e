//! Logical route table of the site.

use crate::catalog::WizardKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Signup,
    Login,
    Landing,
    Wizard(WizardKind),
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Path names the route directly.
    Page(Route),
    /// Path is `/` or unknown; the client should be sent to the route.
    Redirect(Route),
}

impl Resolution {
    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Resolution::Page(route) | Resolution::Redirect(route) => route,
        }
    }
}

impl Route {
    /// Route every unknown path falls back to.
    pub const FALLBACK: Route = Route::Login;

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Signup => "/signup",
            Route::Login => "/login",
            Route::Landing => "/landing",
            Route::Wizard(WizardKind::Booking) => "/bookasession",
            Route::Wizard(WizardKind::Vr) => "/viewonvr",
        }
    }

    /// Resolve a path (without query string). A single trailing slash is
    /// ignored. `/` and unrecognised paths redirect to the login screen.
    #[must_use]
    pub fn resolve(path: &str) -> Resolution {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        match trimmed {
            "/signup" => Resolution::Page(Route::Signup),
            "/login" => Resolution::Page(Route::Login),
            "/landing" => Resolution::Page(Route::Landing),
            "/bookasession" => Resolution::Page(Route::Wizard(WizardKind::Booking)),
            "/viewonvr" => Resolution::Page(Route::Wizard(WizardKind::Vr)),
            _ => Resolution::Redirect(Self::FALLBACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_path_resolves_to_login() {
        assert_eq!(Route::resolve("/foo"), Resolution::Redirect(Route::Login));
        assert_eq!(Route::resolve("/foo").route(), Route::resolve("/login").route());
    }

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(Route::resolve("/"), Resolution::Redirect(Route::Login));
    }

    #[test]
    fn known_paths_resolve_directly() {
        for route in [
            Route::Signup,
            Route::Login,
            Route::Landing,
            Route::Wizard(WizardKind::Booking),
            Route::Wizard(WizardKind::Vr),
        ] {
            assert_eq!(Route::resolve(route.path()), Resolution::Page(route));
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::resolve("/landing/"), Resolution::Page(Route::Landing));
    }
}
