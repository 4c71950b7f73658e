//! Read-only projection of a finished wizard into confirmation rows.

use serde::Serialize;

use crate::catalog::{booking, vr, WizardKind};
use crate::center::find_center;
use crate::record::WizardRecord;

const NOT_SELECTED: &str = "Not selected";
const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
    /// Color swatch rendered next to the value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<&'static str>,
}

impl SummaryRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            swatch: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub rows: Vec<SummaryRow>,
}

/// `"L × W × H ft"`, or `"Not specified"` when any side is blank.
#[must_use]
pub fn format_dimension(length: &str, width: &str, height: &str) -> String {
    if [length, width, height].iter().any(|s| s.trim().is_empty()) {
        return NOT_SPECIFIED.to_string();
    }
    format!("{length} × {width} × {height} ft")
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[must_use]
pub fn summarize(record: &WizardRecord) -> Summary {
    match record.kind() {
        WizardKind::Booking => Summary {
            heading: "Booking Confirmed! 🎉",
            subheading: "Your free design consultation has been successfully scheduled.",
            rows: booking_rows(record),
        },
        WizardKind::Vr => Summary {
            heading: "VR Ready! 🎮",
            subheading: "Your space is loaded and ready for customization in VR.",
            rows: vr_rows(record),
        },
    }
}

fn booking_rows(record: &WizardRecord) -> Vec<SummaryRow> {
    let house_type = record.text("houseType");
    let mut rows = vec![
        SummaryRow::new("Name", record.text("name")),
        SummaryRow::new("Email", record.text("email")),
        SummaryRow::new("Phone", record.text("phone")),
        SummaryRow::new(
            "House Type",
            booking::house_type_label(house_type).unwrap_or(house_type),
        ),
        SummaryRow::new("Location", record.text("location")),
    ];

    if let Some(center) = find_center(record.text("experienceCenter")) {
        rows.push(SummaryRow::new("Center", center.name));
        rows.push(SummaryRow::new("Date", record.text("appointmentDate")));
        rows.push(SummaryRow::new("Time", record.text("timeSlot")));
    }

    rows
}

fn vr_rows(record: &WizardRecord) -> Vec<SummaryRow> {
    let total_area = record.text("totalArea");
    let mut rows = vec![
        SummaryRow::new("Configuration", or_default(record.text("bhkType"), NOT_SELECTED)),
        SummaryRow::new(
            "Total Area",
            if total_area.is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                format!("{total_area} sq ft")
            },
        ),
        SummaryRow::new("Style", or_default(record.text("furnishingStyle"), NOT_SELECTED)),
        SummaryRow::new("Purpose", or_default(record.text("roomPurpose"), NOT_SELECTED)),
    ];

    let bedrooms = vr::bedroom_count(record.text("bhkType"));
    for room in vr::ROOMS.iter().filter(|r| r.is_shown_for(bedrooms)) {
        let [l, w, h] = room.field_names();
        rows.push(SummaryRow::new(
            room.summary_label,
            format_dimension(record.text(&l), record.text(&w), record.text(&h)),
        ));
    }

    for (label, field) in [
        ("Flooring", "flooringType"),
        ("Lighting", "lightingType"),
        ("Ceiling", "ceilingType"),
        ("Furniture", "furnitureQuality"),
        ("Accessories", "accessoriesLevel"),
    ] {
        rows.push(SummaryRow::new(label, or_default(record.text(field), NOT_SELECTED)));
    }

    let wall = record.text("wallColor");
    rows.push(SummaryRow {
        label: "Wall Color",
        value: if wall.is_empty() {
            NOT_SELECTED.to_string()
        } else {
            wall.replace('-', " ").to_uppercase()
        },
        swatch: Some(vr::wall_color_hex(wall)),
    });

    let notes = record.text("additionalNotes");
    if !notes.trim().is_empty() {
        rows.push(SummaryRow::new("Notes", notes));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>(summary: &'a Summary, label: &str) -> Option<&'a SummaryRow> {
        summary.rows.iter().find(|r| r.label == label)
    }

    #[test]
    fn format_dimension_joins_sides() {
        assert_eq!(format_dimension("14", "12", "10"), "14 × 12 × 10 ft");
    }

    #[test]
    fn format_dimension_blank_side_is_not_specified() {
        assert_eq!(format_dimension("14", "", "10"), "Not specified");
        assert_eq!(format_dimension("14", "12", "  "), "Not specified");
    }

    #[test]
    fn booking_summary_includes_center_rows_only_when_selected() {
        let mut record = WizardRecord::empty(WizardKind::Booking);
        record.set("name", "Asha".into()).unwrap();
        record.set("houseType", "independent".into()).unwrap();
        let summary = summarize(&record);
        assert_eq!(row(&summary, "House Type").unwrap().value, "Independent House");
        assert!(row(&summary, "Center").is_none());

        record.set("experienceCenter", "2".into()).unwrap();
        record.set("timeSlot", "3:00 PM".into()).unwrap();
        let summary = summarize(&record);
        assert_eq!(row(&summary, "Center").unwrap().value, "Uptown Design Hub");
        assert_eq!(row(&summary, "Time").unwrap().value, "3:00 PM");
        assert_eq!(summary.heading, "Booking Confirmed! 🎉");
    }

    #[test]
    fn vr_summary_defaults_for_empty_record() {
        let summary = summarize(&WizardRecord::empty(WizardKind::Vr));
        assert_eq!(row(&summary, "Configuration").unwrap().value, "Not selected");
        assert_eq!(row(&summary, "Total Area").unwrap().value, "Not specified");
        assert_eq!(row(&summary, "Master BR").unwrap().value, "Not specified");
        let wall = row(&summary, "Wall Color").unwrap();
        assert_eq!(wall.value, "Not selected");
        assert_eq!(wall.swatch, Some("#F5F5F0"));
        assert!(row(&summary, "Notes").is_none());
        assert!(row(&summary, "Bedroom 2").is_none());
    }

    #[test]
    fn vr_summary_formats_selected_values() {
        let mut record = WizardRecord::empty(WizardKind::Vr);
        record.set("bhkType", "3 BHK".into()).unwrap();
        record.set("totalArea", "1400".into()).unwrap();
        record.set("kitchenLength", "10".into()).unwrap();
        record.set("kitchenWidth", "8".into()).unwrap();
        record.set("kitchenHeight", "9".into()).unwrap();
        record.set("wallColor", "sage-green".into()).unwrap();
        record.set("additionalNotes", "Skylight in hall".into()).unwrap();

        let summary = summarize(&record);
        assert_eq!(row(&summary, "Total Area").unwrap().value, "1400 sq ft");
        assert_eq!(row(&summary, "Kitchen").unwrap().value, "10 × 8 × 9 ft");
        assert_eq!(row(&summary, "Bedroom 3").unwrap().value, "Not specified");
        let wall = row(&summary, "Wall Color").unwrap();
        assert_eq!(wall.value, "SAGE GREEN");
        assert_eq!(wall.swatch, Some("#9CAF88"));
        assert_eq!(row(&summary, "Notes").unwrap().value, "Skylight in hall");
    }
}
