use std::fmt::Write as _;

use dwell_core::{Summary, WizardKind};
use uuid::Uuid;

use super::escape;

/// Body of the confirmation screen shown once a submission has completed.
#[must_use]
pub fn render(id: Uuid, kind: WizardKind, summary: &Summary) -> String {
    let mut body = format!(
        "<div class=\"card\">\n<h1>{}</h1>\n<p>{}</p>\n<table class=\"summary\">\n",
        escape(summary.heading),
        escape(summary.subheading)
    );
    for row in &summary.rows {
        let swatch = row
            .swatch
            .map(|hex| format!("<span class=\"swatch\" style=\"background:{hex}\"></span>"))
            .unwrap_or_default();
        let _ = writeln!(
            body,
            "<tr><th>{}</th><td>{swatch}{}</td></tr>",
            escape(row.label),
            escape(&row.value)
        );
    }
    let _ = writeln!(
        body,
        "</table>\n<form method=\"post\" action=\"/{}/{id}/close\">\
         <div class=\"actions\"><button type=\"submit\">Back to Home</button></div></form>\n</div>",
        kind.slug()
    );
    body
}

#[cfg(test)]
mod tests {
    use dwell_core::SummaryRow;

    use super::*;

    #[test]
    fn rows_are_escaped_and_swatch_is_drawn() {
        let summary = Summary {
            heading: "VR Ready! 🎮",
            subheading: "sub",
            rows: vec![
                SummaryRow {
                    label: "Notes",
                    value: "<b>bold</b>".to_string(),
                    swatch: None,
                },
                SummaryRow {
                    label: "Wall Color",
                    value: "SAGE GREEN".to_string(),
                    swatch: Some("#9CAF88"),
                },
            ],
        };
        let id = Uuid::new_v4();
        let html = render(id, WizardKind::Vr, &summary);

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("background:#9CAF88"));
        assert!(html.contains(&format!("action=\"/viewonvr/{id}/close\"")));
    }
}
