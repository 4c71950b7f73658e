//! Signup and login screens. Nothing entered here is stored or checked.

use std::fmt::Write as _;

use axum::response::Html;

use super::layout;

const CAROUSEL: &str = "<div class=\"card\">\n<h2>Step Inside Your Imagination</h2>\n\
    <p class=\"muted\">Create your free profile and start the immersive walkthrough of your custom home today.</p>\n</div>\n";

/// `(label, input type, name)`
type Input = (&'static str, &'static str, &'static str);

const SIGNUP_FIELDS: &[Input] = &[
    ("Full Name", "text", "fullName"),
    ("Email", "email", "email"),
    ("Phone Number", "text", "phone"),
    ("Password", "password", "password"),
];

const LOGIN_FIELDS: &[Input] = &[("Email", "email", "email"), ("Phone Number", "text", "phone")];

fn auth_form(heading: &str, action: &str, button: &str, fields: &[Input]) -> String {
    let mut body = String::from(CAROUSEL);
    let _ = writeln!(
        body,
        "<form class=\"card\" method=\"post\" action=\"{action}\">\n<h1>{heading}</h1>"
    );
    for (label, kind, name) in fields {
        let _ = writeln!(
            body,
            "<label for=\"{name}\">{label}</label><input id=\"{name}\" name=\"{name}\" type=\"{kind}\">"
        );
    }
    let _ = writeln!(
        body,
        "<div class=\"actions\"><button type=\"submit\">{button}</button></div>\n</form>"
    );
    body
}

#[must_use]
pub fn signup() -> Html<String> {
    let mut body = auth_form("Create an Account", "/signup", "SignUp", SIGNUP_FIELDS);
    body.push_str("<p class=\"muted\">Already have an account? <a href=\"/login\">Log in</a></p>\n");
    layout("Sign Up", "", &body)
}

#[must_use]
pub fn login() -> Html<String> {
    let mut body = auth_form("LOG IN", "/login", "Log In", LOGIN_FIELDS);
    body.push_str("<p class=\"muted\">New here? <a href=\"/signup\">Create an account</a></p>\n");
    layout("Log In", "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_posts_back_to_itself_with_four_fields() {
        let Html(html) = signup();
        assert!(html.contains("action=\"/signup\""));
        assert_eq!(html.matches("<input ").count(), 4);
        assert!(html.contains("type=\"password\""));
    }

    #[test]
    fn login_has_email_and_phone_only() {
        let Html(html) = login();
        assert!(html.contains("action=\"/login\""));
        assert_eq!(html.matches("<input ").count(), 2);
    }
}
