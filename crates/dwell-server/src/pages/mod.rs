//! Server-rendered HTML.
//!
//! Pages are plain strings assembled from `format!` and a shared layout. All
//! visitor-supplied text goes through [`escape`] before it is interpolated.

pub mod auth;
pub mod confirmation;
pub mod landing;
pub mod wizard;

use std::fmt::Write as _;

use axum::response::Html;

const BRAND: &str = r#"<a class="brand" href="/landing">HOME<span>DESIGN</span></a>"#;

const STYLE: &str = r"
:root { --primary: #99582a; --secondary: #d4a373; --light: #faedcd; --dark: #3d2c1e; }
* { box-sizing: border-box; }
body { margin: 0; font-family: Arial, sans-serif; color: var(--dark); background: #fffaf2; }
header.nav { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #fff; box-shadow: 0 2px 6px rgba(0,0,0,.08); }
.brand { font-size: 1.8rem; font-weight: 700; color: var(--dark); text-decoration: none; }
.brand span { color: var(--primary); }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
section { margin: 3rem 0; }
h1, h2, h3 { color: var(--primary); }
.card { background: #fff; border: 1px solid var(--secondary); border-radius: 1.5rem; padding: 1.5rem; box-shadow: 0 4px 12px rgba(0,0,0,.06); }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: .75rem; }
label { display: block; font-weight: 600; color: var(--primary); margin: 1rem 0 .35rem; }
input, select, textarea { width: 100%; padding: .6rem; border: 1px solid var(--secondary); border-radius: .75rem; font: inherit; }
input[type=radio] { width: auto; margin-right: .5rem; }
button, .button { display: inline-block; padding: .6rem 1.2rem; border-radius: 1rem; border: 1px solid var(--primary); background: var(--primary); color: #fff; font-weight: 600; cursor: pointer; text-decoration: none; }
button.outline, .button.outline { background: transparent; color: var(--primary); }
button:disabled { background: #ccc; border-color: #ccc; cursor: not-allowed; }
.choice { border: 1px solid #ddd; border-radius: .75rem; padding: .75rem; background: #fff; color: var(--dark); text-align: left; }
.choice.selected { border-color: var(--primary); background: var(--light); }
.steps { display: flex; justify-content: space-between; font-size: .8rem; }
.steps .current { color: var(--primary); font-weight: 700; }
.progress { height: 6px; background: #e0e0e0; border-radius: 3px; overflow: hidden; margin: .5rem 0 1.5rem; }
.progress div { height: 100%; background: var(--primary); }
.notice { background: #fff3cd; border: 1px solid #e0c97f; border-radius: .75rem; padding: .75rem 1rem; margin-bottom: 1rem; }
.actions { display: flex; justify-content: space-between; margin-top: 1.5rem; }
.summary { width: 100%; border-collapse: collapse; }
.summary th { text-align: left; width: 40%; padding: .4rem 0; color: var(--primary); }
.summary td { padding: .4rem 0; }
.swatch { display: inline-block; width: 1rem; height: 1rem; border-radius: 50%; border: 1px solid #999; vertical-align: middle; margin-right: .4rem; }
.inline { display: flex; gap: .5rem; }
.muted { color: #7a6a5a; font-size: .9rem; }
";

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap `body` in the shared document shell.
///
/// `head_extra` is inserted verbatim into `<head>` (used for the refresh tag
/// on the submitting screen).
#[must_use]
pub fn layout(title: &str, head_extra: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n{head_extra}<style>{STYLE}</style>\n</head>\n<body>\n\
         <header class=\"nav\">{BRAND}</header>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    ))
}

/// A `<select>` with a placeholder entry and `selected` applied to `current`.
///
/// `options` are `(value, label)` pairs.
#[must_use]
pub fn select<'a>(
    name: &str,
    placeholder: &str,
    current: &str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut html = format!(
        "<select id=\"{name}\" name=\"{name}\">\n<option value=\"\">{}</option>\n",
        escape(placeholder)
    );
    for (value, label) in options {
        let selected = if value == current { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            escape(value),
            escape(label)
        );
    }
    html.push_str("</select>\n");
    html
}

/// Simple error page for requests that cannot be served.
#[must_use]
pub fn error_page(heading: &str, message: &str) -> Html<String> {
    layout(
        heading,
        "",
        &format!(
            "<div class=\"card\"><h2>{}</h2><p>{}</p>\
             <p><a class=\"button outline\" href=\"/landing\">Back to Home</a></p></div>",
            escape(heading),
            escape(message)
        ),
    )
}
