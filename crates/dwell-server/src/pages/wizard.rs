//! Wizard screens: the step forms, the submitting screen, and the hand-off to
//! the confirmation summary.
//!
//! Every control on a step lives inside one `<form>` posting back to the
//! wizard URL. The pressed button's `action` value says what to do after the
//! step's fields are stored.

use std::fmt::Write as _;

use axum::response::Html;
use chrono::NaiveDate;
use dwell_core::{
    catalog::{booking, vr},
    rank, summarize, Phase, Wizard, WizardKind, CENTERS,
};
use dwell_geo::DetectedLocation;
use uuid::Uuid;

use super::{confirmation, escape, layout, select};

/// Everything a wizard screen needs from the session.
pub struct WizardView<'a> {
    pub id: Uuid,
    pub wizard: &'a Wizard,
    pub detected: Option<&'a DetectedLocation>,
    pub notice: Option<&'a str>,
    /// Earliest date offered for an appointment.
    pub min_date: NaiveDate,
}

const GEOLOCATE_SCRIPT: &str = r"<script>
document.getElementById('detect').addEventListener('click', function () {
  var form = this.form;
  var send = function () { form.action = form.dataset.locate; form.submit(); };
  if (!navigator.geolocation) { form.elements.geoError.value = 'unsupported'; send(); return; }
  navigator.geolocation.getCurrentPosition(function (pos) {
    form.elements.lat.value = pos.coords.latitude;
    form.elements.lon.value = pos.coords.longitude;
    send();
  }, function () { form.elements.geoError.value = 'denied'; send(); });
});
</script>
";

#[must_use]
pub fn render(view: &WizardView<'_>) -> Html<String> {
    let kind = view.wizard.kind();
    match view.wizard.phase() {
        Phase::Editing => layout(kind.title(), "", &step_page(view)),
        Phase::Submitting => layout(
            kind.title(),
            "<meta http-equiv=\"refresh\" content=\"1\">\n",
            &submitting_page(kind),
        ),
        Phase::Submitted => {
            let summary = summarize(view.wizard.record());
            layout(
                summary.heading,
                "",
                &confirmation::render(view.id, kind, &summary),
            )
        }
    }
}

fn submitting_page(kind: WizardKind) -> String {
    let message = match kind {
        WizardKind::Booking => "Booking your session...",
        WizardKind::Vr => "Preparing your VR walkthrough...",
    };
    format!(
        "<div class=\"card\"><h2>{message}</h2>\
         <p class=\"muted\">This only takes a moment.</p></div>"
    )
}

fn card_heading(kind: WizardKind, step: usize) -> (&'static str, &'static str) {
    match (kind, step) {
        (WizardKind::Booking, 0) => ("Tell us about your space", "Help us understand your home better"),
        (WizardKind::Booking, 1) => ("Your Contact Information", "How can we reach you?"),
        (WizardKind::Booking, 2) => ("Design Preferences", "Select your preferred styles"),
        (WizardKind::Booking, _) => (
            "Schedule Your Visit",
            "Choose your preferred experience center and time",
        ),
        (WizardKind::Vr, 0) => ("Space Configuration", "Tell us about your space and vision"),
        (WizardKind::Vr, 1) => ("Room Dimensions", "Enter length, width, and height in feet"),
        (WizardKind::Vr, _) => ("Design & Lighting", "Customize your VR environment"),
    }
}

fn submit_label(kind: WizardKind) -> &'static str {
    match kind {
        WizardKind::Booking => "Confirm Booking",
        WizardKind::Vr => "Connect to VR",
    }
}

fn step_page(view: &WizardView<'_>) -> String {
    let wizard = view.wizard;
    let kind = wizard.kind();
    let step = wizard.step();
    let steps = kind.steps();
    let base = format!("/{}/{}", kind.slug(), view.id);

    let mut body = format!("<h1>{}</h1>\n", kind.title());

    if let Some(notice) = view.notice {
        let _ = writeln!(body, "<div class=\"notice\" role=\"status\">{}</div>", escape(notice));
    }

    let (forward_action, forward_label) = if wizard.is_last_step() {
        ("submit", submit_label(kind))
    } else {
        ("next", "Next")
    };

    // Enter in a text field presses the form's first submit button.
    let _ = writeln!(
        body,
        "<form class=\"card\" method=\"post\" action=\"{base}\" data-locate=\"{base}/locate\">\n\
         <button type=\"submit\" name=\"action\" value=\"{forward_action}\" hidden tabindex=\"-1\" aria-hidden=\"true\"></button>\n\
         <input type=\"hidden\" name=\"step\" value=\"{step}\">"
    );

    body.push_str("<div class=\"steps\">\n");
    for (index, s) in steps.iter().enumerate() {
        let class = if index == step { "choice selected current" } else { "choice" };
        let disabled = if index > step { " disabled" } else { "" };
        let _ = writeln!(
            body,
            "<button type=\"submit\" class=\"{class}\" name=\"action\" value=\"jump-{index}\"{disabled}>{}</button>",
            s.title
        );
    }
    let _ = writeln!(
        body,
        "</div>\n<div class=\"progress\"><div style=\"width:{}%\"></div></div>",
        wizard.progress_percent()
    );

    let (title, description) = card_heading(kind, step);
    let _ = writeln!(body, "<h2>{title}</h2>\n<p class=\"muted\">{description}</p>");

    match kind {
        WizardKind::Booking => booking_fields(&mut body, view),
        WizardKind::Vr => vr_fields(&mut body, wizard),
    }

    let back_disabled = if step == 0 { " disabled" } else { "" };
    let _ = writeln!(
        body,
        "<div class=\"actions\">\
         <button type=\"submit\" class=\"outline\" name=\"action\" value=\"back\"{back_disabled}>Back</button>\
         <button type=\"submit\" name=\"action\" value=\"{forward_action}\">{forward_label}</button>\
         </div>\n</form>"
    );

    let _ = writeln!(
        body,
        "<p class=\"muted\">Step {} of {}: {}</p>\n\
         <form method=\"post\" action=\"{base}/close\"><button type=\"submit\" class=\"outline\">Back to Home</button></form>",
        step + 1,
        steps.len(),
        steps[step].title
    );

    if kind == WizardKind::Booking && step == 0 {
        body.push_str(GEOLOCATE_SCRIPT);
    }
    body
}

fn field(body: &mut String, name: &str, label: &str, control: &str) {
    let _ = writeln!(body, "<label for=\"{name}\">{label}</label>\n{control}");
}

fn input(name: &str, kind: &str, placeholder: &str, value: &str, extra: &str) -> String {
    format!(
        "<input id=\"{name}\" name=\"{name}\" type=\"{kind}\" placeholder=\"{}\" value=\"{}\"{extra}>",
        escape(placeholder),
        escape(value)
    )
}

fn textarea(name: &str, placeholder: &str, value: &str) -> String {
    format!(
        "<textarea id=\"{name}\" name=\"{name}\" rows=\"3\" placeholder=\"{}\">{}</textarea>",
        escape(placeholder),
        escape(value)
    )
}

fn same(options: &'static [&'static str]) -> impl Iterator<Item = (&'static str, &'static str)> {
    options.iter().map(|o| (*o, *o))
}

fn booking_fields(body: &mut String, view: &WizardView<'_>) {
    let record = view.wizard.record();
    match view.wizard.step() {
        0 => {
            let mut radios = String::from("<div class=\"grid\">\n");
            for (value, label) in booking::HOUSE_TYPES {
                let checked = if record.text("houseType") == *value { " checked" } else { "" };
                let _ = writeln!(
                    radios,
                    "<label class=\"choice\"><input type=\"radio\" name=\"houseType\" value=\"{value}\"{checked}>{label}</label>"
                );
            }
            radios.push_str("</div>");
            field(body, "houseType", "What type of house do you have?", &radios);

            let mut location = format!(
                "<div class=\"inline\">{}\
                 <button type=\"button\" class=\"outline\" id=\"detect\">📍 Detect</button></div>\n\
                 <input type=\"hidden\" name=\"lat\"><input type=\"hidden\" name=\"lon\">\
                 <input type=\"hidden\" name=\"geoError\">",
                input("location", "text", "Enter your city or area", record.text("location"), "")
            );
            if let Some(detected) = view.detected {
                let _ = write!(
                    location,
                    "\n<p class=\"muted\">Detected: {}</p>",
                    escape(&detected.label())
                );
            }
            field(body, "location", "Your Location", &location);

            field(
                body,
                "budgetRange",
                "Your Budget Range",
                &select(
                    "budgetRange",
                    "Select budget range",
                    record.text("budgetRange"),
                    same(booking::BUDGET_RANGES),
                ),
            );
            field(
                body,
                "area",
                "Total Area (sq ft)",
                &input("area", "number", "Enter total area", record.text("area"), " min=\"0\""),
            );
        }
        1 => {
            field(
                body,
                "name",
                "Full Name",
                &input("name", "text", "Enter your full name", record.text("name"), ""),
            );
            field(
                body,
                "email",
                "Email Address",
                &input("email", "email", "Enter your email", record.text("email"), ""),
            );
            field(
                body,
                "phone",
                "Phone Number",
                &input(
                    "phone",
                    "tel",
                    "Enter your 10-digit phone number",
                    record.text("phone"),
                    "",
                ),
            );
        }
        2 => {
            let chosen = record.list("preferredStyles");
            let mut chips = String::from("<div class=\"grid\">\n");
            for style in booking::HOUSE_STYLES {
                let selected = chosen.iter().any(|s| s == style);
                let (class, mark) = if selected { ("choice selected", "✓ ") } else { ("choice", "") };
                let _ = writeln!(
                    chips,
                    "<button type=\"submit\" class=\"{class}\" name=\"action\" value=\"toggle:preferredStyles:{style}\">{mark}{style}</button>"
                );
            }
            chips.push_str("</div>");
            field(body, "preferredStyles", "Preferred Design Styles", &chips);
            field(
                body,
                "preferences",
                "Any other preferences or requirements?",
                &textarea(
                    "preferences",
                    "Tell us about any specific requirements...",
                    record.text("preferences"),
                ),
            );
        }
        _ => {
            let point = view.detected.map(|d| d.coordinates);
            let ranked = rank(CENTERS, point.as_ref());
            let labels: Vec<(String, &str)> = ranked
                .iter()
                .map(|c| {
                    (
                        format!("{} ({} • {}, {})", c.name, c.distance_label, c.city, c.state),
                        c.id,
                    )
                })
                .collect();
            let mut control = select(
                "experienceCenter",
                "Select experience center",
                record.text("experienceCenter"),
                labels.iter().map(|(label, id)| (*id, label.as_str())),
            );
            if let Some(center) = ranked
                .iter()
                .find(|c| c.id == record.text("experienceCenter"))
            {
                let _ = write!(
                    control,
                    "<div class=\"choice selected\"><strong>{}</strong><br>{}<br>📍 {}</div>",
                    center.name, center.address, center.distance_label
                );
            }
            field(body, "experienceCenter", "Select Nearest Experience Center", &control);

            field(
                body,
                "appointmentDate",
                "Preferred Appointment Date",
                &input(
                    "appointmentDate",
                    "date",
                    "",
                    record.text("appointmentDate"),
                    &format!(" min=\"{}\"", view.min_date.format("%Y-%m-%d")),
                ),
            );
            field(
                body,
                "timeSlot",
                "Preferred Time Slot",
                &select(
                    "timeSlot",
                    "Select time slot",
                    record.text("timeSlot"),
                    same(booking::TIME_SLOTS),
                ),
            );
            field(
                body,
                "specialRequirements",
                "Special Requirements",
                &textarea(
                    "specialRequirements",
                    "Any special requirements or accessibility needs...",
                    record.text("specialRequirements"),
                ),
            );
        }
    }
}

fn vr_fields(body: &mut String, wizard: &Wizard) {
    let record = wizard.record();
    match wizard.step() {
        0 => {
            field(
                body,
                "bhkType",
                "BHK Type",
                &select("bhkType", "Select BHK type", record.text("bhkType"), same(vr::BHK_OPTIONS)),
            );
            field(
                body,
                "totalArea",
                "Total Area (sq ft)",
                &input("totalArea", "number", "1200", record.text("totalArea"), " min=\"0\""),
            );
            field(
                body,
                "furnishingStyle",
                "Furnishing Style",
                &select(
                    "furnishingStyle",
                    "Select furnishing style",
                    record.text("furnishingStyle"),
                    same(vr::FURNISHING_STYLES),
                ),
            );
            field(
                body,
                "roomPurpose",
                "Space Purpose",
                &select(
                    "roomPurpose",
                    "Select space purpose",
                    record.text("roomPurpose"),
                    same(vr::ROOM_PURPOSES),
                ),
            );
        }
        1 => {
            let bedrooms = vr::bedroom_count(record.text("bhkType"));
            for room in vr::ROOMS.iter().filter(|r| r.is_shown_for(bedrooms)) {
                let _ = writeln!(body, "<h3>{}</h3>\n<div class=\"grid\">", room.label);
                let names = room.field_names();
                for ((name, axis), placeholder) in names
                    .iter()
                    .zip(["Length (ft)", "Width (ft)", "Height (ft)"])
                    .zip(room.placeholders)
                {
                    let _ = writeln!(
                        body,
                        "<div><label for=\"{name}\">{axis}</label>{}</div>",
                        input(name, "number", placeholder, record.text(name), " min=\"0\" step=\"0.1\"")
                    );
                }
                body.push_str("</div>\n");
            }
        }
        _ => {
            let current = record.text("wallColor");
            let mut wall = select(
                "wallColor",
                "Select wall color",
                current,
                vr::WALL_COLORS.iter().map(|c| (c.value, c.label)),
            );
            let _ = write!(
                wall,
                "<span class=\"swatch\" style=\"background:{}\"></span>",
                vr::wall_color_hex(current)
            );
            field(body, "wallColor", "Wall Color", &wall);

            let selects: [(&str, &str, &str, &'static [&'static str]); 5] = [
                ("flooringType", "Flooring Type", "Select flooring type", vr::FLOORING_TYPES),
                ("lightingType", "Lighting Type", "Select lighting type", vr::LIGHTING_TYPES),
                ("ceilingType", "Ceiling Type", "Select ceiling type", vr::CEILING_TYPES),
                (
                    "furnitureQuality",
                    "Furniture Quality",
                    "Select furniture quality",
                    vr::FURNITURE_QUALITIES,
                ),
                (
                    "accessoriesLevel",
                    "Accessories Level",
                    "Select accessories level",
                    vr::ACCESSORIES_LEVELS,
                ),
            ];
            for (name, label, placeholder, options) in selects {
                field(
                    body,
                    name,
                    label,
                    &select(name, placeholder, record.text(name), same(options)),
                );
            }
            field(
                body,
                "additionalNotes",
                "Additional Notes",
                &textarea(
                    "additionalNotes",
                    "Anything else we should know about your space?",
                    record.text("additionalNotes"),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use dwell_core::Coordinates;

    use super::*;

    fn view(wizard: &Wizard) -> WizardView<'_> {
        WizardView {
            id: Uuid::nil(),
            wizard,
            detected: None,
            notice: None,
            min_date: NaiveDate::from_ymd_opt(2026, 10, 17).expect("date"),
        }
    }

    #[test]
    fn first_booking_step_has_detect_button_and_no_back() {
        let wizard = Wizard::new(WizardKind::Booking);
        let Html(html) = render(&view(&wizard));

        assert!(html.contains("id=\"detect\""));
        assert!(html.contains("value=\"back\" disabled"));
        assert!(html.contains("value=\"next\">Next"));
        assert!(html.contains("Step 1 of 4: House Details"));
        assert!(html.contains("data-locate=\"/bookasession/00000000-0000-0000-0000-000000000000/locate\""));
    }

    #[test]
    fn later_steps_are_not_jumpable() {
        let wizard = Wizard::new(WizardKind::Vr);
        let Html(html) = render(&view(&wizard));
        assert!(html.contains("value=\"jump-1\" disabled"));
        assert!(!html.contains("value=\"jump-0\" disabled"));
    }

    fn first_submit_value(html: &str) -> &str {
        let form = &html[html.find("<form class=\"card\"").expect("wizard form")..];
        let button = &form[form.find("type=\"submit\"").expect("submit button")..];
        let value = &button[button.find("value=\"").expect("value") + 7..];
        &value[..value.find('"').expect("closing quote")]
    }

    #[test]
    fn enter_key_button_moves_forward() {
        let mut wizard = booking_on_schedule_step();
        assert_eq!(first_submit_value(&render(&view(&wizard)).0), "submit");

        assert!(wizard.retreat());
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), 1);
        assert_eq!(first_submit_value(&render(&view(&wizard)).0), "next");
    }

    #[test]
    fn notice_and_user_text_are_escaped() {
        let mut wizard = Wizard::new(WizardKind::Booking);
        wizard.set_field("location", "<Pune>").expect("set");
        let mut v = view(&wizard);
        v.notice = Some("Unable to detect location");
        let Html(html) = render(&v);

        assert!(html.contains("value=\"&lt;Pune&gt;\""));
        assert!(html.contains("<div class=\"notice\" role=\"status\">Unable to detect location</div>"));
    }

    fn booking_on_schedule_step() -> Wizard {
        let mut wizard = Wizard::new(WizardKind::Booking);
        wizard.set_field("houseType", "villa").expect("set");
        wizard.set_field("location", "Boston").expect("set");
        wizard.set_field("budgetRange", "₹10 - 20 Lakhs").expect("set");
        wizard.set_field("area", "1500").expect("set");
        assert!(wizard.advance());
        wizard.set_field("name", "Sam").expect("set");
        wizard.set_field("email", "sam@example.com").expect("set");
        wizard.set_field("phone", "5551234567").expect("set");
        assert!(wizard.advance());
        wizard.toggle_item("preferredStyles", "Modern").expect("toggle");
        assert!(wizard.advance());
        wizard
    }

    #[test]
    fn schedule_step_lists_nearest_center_first() {
        let wizard = booking_on_schedule_step();
        let detected = DetectedLocation {
            city: "Boston".to_string(),
            state: "Massachusetts".to_string(),
            coordinates: Coordinates::new(42.36, -71.06),
        };
        let mut v = view(&wizard);
        v.detected = Some(&detected);
        let Html(html) = render(&v);

        let westside = html.find("Westside Studio").expect("westside listed");
        let downtown = html.find("Downtown Experience Center").expect("downtown listed");
        assert!(westside < downtown);
        assert!(html.contains("min=\"2026-10-17\""));
        assert!(html.contains("value=\"submit\">Confirm Booking"));
    }

    #[test]
    fn vr_dimension_step_shows_bedrooms_for_bhk() {
        let mut wizard = Wizard::new(WizardKind::Vr);
        wizard.set_field("bhkType", "2 BHK").expect("set");
        wizard.set_field("totalArea", "900").expect("set");
        wizard.set_field("furnishingStyle", "Modern").expect("set");
        wizard.set_field("roomPurpose", "Residential").expect("set");
        assert!(wizard.advance());
        let Html(html) = render(&view(&wizard));

        assert!(html.contains("name=\"bedroom2Length\""));
        assert!(!html.contains("name=\"bedroom3Length\""));
        assert!(html.contains("name=\"hallHeight\""));
    }

    #[test]
    fn submitting_screen_refreshes() {
        let mut wizard = booking_on_schedule_step();
        wizard.set_field("experienceCenter", "3").expect("set");
        wizard.set_field("appointmentDate", "2026-11-02").expect("set");
        wizard.set_field("timeSlot", "10:00 AM").expect("set");
        wizard.begin_submit().expect("submit");

        let Html(html) = render(&view(&wizard));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("Booking your session..."));
    }
}
