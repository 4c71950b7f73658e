//! Per-step presence checks gating forward navigation.

use crate::catalog::{vr, WizardKind};
use crate::record::WizardRecord;

/// Whether `record` satisfies the requirements of `step` in its wizard.
///
/// Rules are conjunctions of presence checks: selections must be non-empty,
/// free text must be non-blank, multi-selects must hold at least one item.
/// Steps past the end are treated as valid.
#[must_use]
pub fn is_valid(kind: WizardKind, step: usize, record: &WizardRecord) -> bool {
    match kind {
        WizardKind::Booking => booking_step_valid(step, record),
        WizardKind::Vr => vr_step_valid(step, record),
    }
}

fn selected(record: &WizardRecord, name: &str) -> bool {
    !record.text(name).is_empty()
}

fn filled(record: &WizardRecord, name: &str) -> bool {
    !record.text(name).trim().is_empty()
}

fn booking_step_valid(step: usize, record: &WizardRecord) -> bool {
    match step {
        0 => {
            selected(record, "houseType")
                && filled(record, "location")
                && selected(record, "budgetRange")
                && filled(record, "area")
        }
        1 => filled(record, "name") && filled(record, "email") && filled(record, "phone"),
        2 => !record.list("preferredStyles").is_empty(),
        3 => {
            selected(record, "experienceCenter")
                && selected(record, "appointmentDate")
                && selected(record, "timeSlot")
        }
        _ => true,
    }
}

fn vr_step_valid(step: usize, record: &WizardRecord) -> bool {
    match step {
        0 => {
            selected(record, "bhkType")
                && filled(record, "totalArea")
                && selected(record, "furnishingStyle")
                && selected(record, "roomPurpose")
        }
        1 => vr::ROOMS
            .iter()
            .filter(|room| room.required)
            .flat_map(vr::Room::field_names)
            .all(|name| filled(record, &name)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_with(fields: &[(&str, &str)]) -> WizardRecord {
        let mut record = WizardRecord::empty(WizardKind::Booking);
        for (name, value) in fields {
            record.set(name, (*value).into()).unwrap();
        }
        record
    }

    #[test]
    fn booking_step0_requires_all_four_fields() {
        let full = [
            ("houseType", "villa"),
            ("location", "Pune"),
            ("budgetRange", "₹10 - 20 Lakhs"),
            ("area", "1200"),
        ];
        assert!(is_valid(WizardKind::Booking, 0, &booking_with(&full)));

        for skip in 0..full.len() {
            let partial: Vec<_> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, f)| *f)
                .collect();
            assert!(
                !is_valid(WizardKind::Booking, 0, &booking_with(&partial)),
                "missing {} should fail",
                full[skip].0
            );
        }
    }

    #[test]
    fn booking_whitespace_location_is_blank() {
        let record = booking_with(&[
            ("houseType", "villa"),
            ("location", "   "),
            ("budgetRange", "₹10 - 20 Lakhs"),
            ("area", "1200"),
        ]);
        assert!(!is_valid(WizardKind::Booking, 0, &record));
    }

    #[test]
    fn booking_contact_step_rejects_blank_fields() {
        let record = booking_with(&[("name", "Asha"), ("email", " "), ("phone", "9876543210")]);
        assert!(!is_valid(WizardKind::Booking, 1, &record));
    }

    #[test]
    fn booking_preferences_need_one_style() {
        let mut record = WizardRecord::empty(WizardKind::Booking);
        assert!(!is_valid(WizardKind::Booking, 2, &record));
        record.toggle("preferredStyles", "Modern").unwrap();
        assert!(is_valid(WizardKind::Booking, 2, &record));
    }

    #[test]
    fn booking_schedule_requires_time_slot() {
        let mut record = booking_with(&[("experienceCenter", "1"), ("appointmentDate", "2026-11-02")]);
        assert!(!is_valid(WizardKind::Booking, 3, &record));
        record.set("timeSlot", "10:00 AM".into()).unwrap();
        assert!(is_valid(WizardKind::Booking, 3, &record));
    }

    #[test]
    fn vr_dimensions_ignore_optional_bedrooms() {
        let mut record = WizardRecord::empty(WizardKind::Vr);
        for room in ["masterBedroom", "kitchen", "hall"] {
            for axis in ["Length", "Width", "Height"] {
                record.set(&format!("{room}{axis}"), "10".into()).unwrap();
            }
        }
        assert!(is_valid(WizardKind::Vr, 1, &record));
        record.set("hallHeight", "".into()).unwrap();
        assert!(!is_valid(WizardKind::Vr, 1, &record));
    }

    #[test]
    fn vr_design_step_is_always_valid() {
        let record = WizardRecord::empty(WizardKind::Vr);
        assert!(is_valid(WizardKind::Vr, 2, &record));
    }

    #[test]
    fn steps_past_the_end_are_valid() {
        let record = WizardRecord::empty(WizardKind::Booking);
        assert!(is_valid(WizardKind::Booking, 9, &record));
    }
}
