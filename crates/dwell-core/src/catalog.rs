//! Static definitions of the two wizards: step titles, field schema, and the
//! option lists offered on each step.

use serde::Serialize;

/// The two lead-capture wizards served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardKind {
    Booking,
    Vr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    List,
}

/// One entry of a wizard's closed field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Step on which the field is collected.
    pub step: usize,
}

const fn text(name: &'static str, step: usize) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text,
        step,
    }
}

const fn list(name: &'static str, step: usize) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::List,
        step,
    }
}

impl WizardKind {
    pub const ALL: [WizardKind; 2] = [WizardKind::Booking, WizardKind::Vr];

    /// Path segment the wizard is mounted under.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            WizardKind::Booking => "bookasession",
            WizardKind::Vr => "viewonvr",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            WizardKind::Booking => "Book a Free Design Session",
            WizardKind::Vr => "View Your Home in VR",
        }
    }

    #[must_use]
    pub const fn steps(self) -> &'static [Step] {
        match self {
            WizardKind::Booking => booking::STEPS,
            WizardKind::Vr => vr::STEPS,
        }
    }

    #[must_use]
    pub const fn step_count(self) -> usize {
        self.steps().len()
    }

    #[must_use]
    pub const fn last_step(self) -> usize {
        self.step_count() - 1
    }

    #[must_use]
    pub const fn schema(self) -> &'static [FieldSpec] {
        match self {
            WizardKind::Booking => booking::SCHEMA,
            WizardKind::Vr => vr::SCHEMA,
        }
    }

    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.schema().iter().find(|f| f.name == name)
    }

    /// Fields collected on `step`, in display order.
    pub fn fields_on_step(self, step: usize) -> impl Iterator<Item = &'static FieldSpec> {
        self.schema().iter().filter(move |f| f.step == step)
    }
}

impl std::fmt::Display for WizardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardKind::Booking => write!(f, "booking"),
            WizardKind::Vr => write!(f, "vr"),
        }
    }
}

pub mod booking {
    use super::{list, text, FieldSpec, Step};

    pub const STEPS: &[Step] = &[
        Step {
            id: "house-details",
            title: "House Details",
        },
        Step {
            id: "contact-info",
            title: "Contact Info",
        },
        Step {
            id: "preferences",
            title: "Preferences",
        },
        Step {
            id: "schedule",
            title: "Schedule Visit",
        },
    ];

    pub const SCHEMA: &[FieldSpec] = &[
        text("houseType", 0),
        text("location", 0),
        text("budgetRange", 0),
        text("area", 0),
        text("name", 1),
        text("email", 1),
        text("phone", 1),
        list("preferredStyles", 2),
        text("preferences", 2),
        text("experienceCenter", 3),
        text("appointmentDate", 3),
        text("timeSlot", 3),
        text("specialRequirements", 3),
    ];

    /// `(value, label)` pairs.
    pub const HOUSE_TYPES: &[(&str, &str)] = &[
        ("apartment", "Apartment"),
        ("villa", "Villa"),
        ("independent", "Independent House"),
    ];

    pub const BUDGET_RANGES: &[&str] = &[
        "Under ₹5 Lakhs",
        "₹5 - 10 Lakhs",
        "₹10 - 20 Lakhs",
        "₹20 - 50 Lakhs",
        "Above ₹50 Lakhs",
    ];

    pub const HOUSE_STYLES: &[&str] = &[
        "Modern",
        "Traditional",
        "Contemporary",
        "Minimalist",
        "Industrial",
        "Scandinavian",
        "Mediterranean",
        "Bohemian",
    ];

    pub const TIME_SLOTS: &[&str] = &[
        "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
    ];

    #[must_use]
    pub fn house_type_label(value: &str) -> Option<&'static str> {
        HOUSE_TYPES
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| *label)
    }
}

pub mod vr {
    use super::{text, FieldSpec, Step};

    pub const STEPS: &[Step] = &[
        Step {
            id: "room-config",
            title: "Space Config",
        },
        Step {
            id: "dimensions",
            title: "Dimensions",
        },
        Step {
            id: "style-settings",
            title: "Design & Lighting",
        },
    ];

    pub const SCHEMA: &[FieldSpec] = &[
        text("bhkType", 0),
        text("totalArea", 0),
        text("furnishingStyle", 0),
        text("roomPurpose", 0),
        text("masterBedroomLength", 1),
        text("masterBedroomWidth", 1),
        text("masterBedroomHeight", 1),
        text("bedroom2Length", 1),
        text("bedroom2Width", 1),
        text("bedroom2Height", 1),
        text("bedroom3Length", 1),
        text("bedroom3Width", 1),
        text("bedroom3Height", 1),
        text("kitchenLength", 1),
        text("kitchenWidth", 1),
        text("kitchenHeight", 1),
        text("hallLength", 1),
        text("hallWidth", 1),
        text("hallHeight", 1),
        text("wallColor", 2),
        text("flooringType", 2),
        text("lightingType", 2),
        text("ceilingType", 2),
        text("furnitureQuality", 2),
        text("accessoriesLevel", 2),
        text("additionalNotes", 2),
    ];

    /// A room whose length, width, and height are collected on the
    /// dimensions step. Field names are `<prefix>Length` etc.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Room {
        pub prefix: &'static str,
        pub label: &'static str,
        pub summary_label: &'static str,
        /// Placeholder hints for length, width, height.
        pub placeholders: [&'static str; 3],
        /// Minimum bedroom count for the room to be shown; 0 means always.
        pub min_bedrooms: u32,
        pub required: bool,
    }

    impl Room {
        #[must_use]
        pub fn field_names(&self) -> [String; 3] {
            [
                format!("{}Length", self.prefix),
                format!("{}Width", self.prefix),
                format!("{}Height", self.prefix),
            ]
        }

        #[must_use]
        pub fn is_shown_for(&self, bedrooms: u32) -> bool {
            bedrooms >= self.min_bedrooms
        }
    }

    pub const ROOMS: &[Room] = &[
        Room {
            prefix: "masterBedroom",
            label: "Master Bedroom",
            summary_label: "Master BR",
            placeholders: ["14", "12", "10"],
            min_bedrooms: 0,
            required: true,
        },
        Room {
            prefix: "bedroom2",
            label: "Bedroom 2",
            summary_label: "Bedroom 2",
            placeholders: ["12", "10", "10"],
            min_bedrooms: 2,
            required: false,
        },
        Room {
            prefix: "bedroom3",
            label: "Bedroom 3",
            summary_label: "Bedroom 3",
            placeholders: ["10", "9", "10"],
            min_bedrooms: 3,
            required: false,
        },
        Room {
            prefix: "kitchen",
            label: "Kitchen",
            summary_label: "Kitchen",
            placeholders: ["10", "8", "9"],
            min_bedrooms: 0,
            required: true,
        },
        Room {
            prefix: "hall",
            label: "Hall / Living Room",
            summary_label: "Hall",
            placeholders: ["18", "16", "10"],
            min_bedrooms: 0,
            required: true,
        },
    ];

    pub const BHK_OPTIONS: &[&str] = &["1 BHK", "2 BHK", "3 BHK", "4 BHK", "5 BHK", "6 BHK"];

    pub const FURNISHING_STYLES: &[&str] = &[
        "Minimalist",
        "Modern",
        "Traditional",
        "Contemporary",
        "Industrial",
        "Scandinavian",
        "Mediterranean",
        "Bohemian",
        "Art Deco",
        "Rustic",
    ];

    pub const ROOM_PURPOSES: &[&str] = &[
        "Residential",
        "Commercial",
        "Office Space",
        "Retail Store",
        "Showroom",
        "Restaurant",
        "Hotel",
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WallColor {
        pub value: &'static str,
        pub label: &'static str,
        pub hex: &'static str,
    }

    pub const WALL_COLORS: &[WallColor] = &[
        WallColor { value: "soft-white", label: "Soft White", hex: "#F5F5F0" },
        WallColor { value: "warm-beige", label: "Warm Beige", hex: "#E8DCC8" },
        WallColor { value: "light-gray", label: "Light Gray", hex: "#D3D3D3" },
        WallColor { value: "sage-green", label: "Sage Green", hex: "#9CAF88" },
        WallColor { value: "dusty-blue", label: "Dusty Blue", hex: "#8B9DB5" },
        WallColor { value: "warm-taupe", label: "Warm Taupe", hex: "#A89968" },
        WallColor { value: "cream", label: "Cream", hex: "#FFFDD0" },
        WallColor { value: "light-pink", label: "Light Pink", hex: "#FFB6C1" },
        WallColor { value: "soft-yellow", label: "Soft Yellow", hex: "#FFFFE0" },
        WallColor { value: "pale-green", label: "Pale Green", hex: "#D9E8D9" },
    ];

    /// Swatch shown when no wall color (or an unknown one) is selected.
    pub const DEFAULT_WALL_HEX: &str = "#F5F5F0";

    pub const FLOORING_TYPES: &[&str] = &[
        "Premium Marble",
        "Italian Tiles",
        "Wooden Parquet",
        "Luxury Vinyl",
        "Granite",
        "Ceramic Tiles",
        "Polished Concrete",
        "Bamboo",
        "Cork",
        "Stone Finish",
    ];

    pub const LIGHTING_TYPES: &[&str] = &[
        "Warm Ambient",
        "Cool White",
        "Natural Daylight",
        "Accent Lighting",
        "Smart Lighting",
        "Pendant Lights",
        "Track Lighting",
        "Recessed Lighting",
        "Wall Sconces",
    ];

    pub const CEILING_TYPES: &[&str] = &[
        "False Ceiling",
        "Wooden Ceiling",
        "Exposed Concrete",
        "Plaster Finish",
        "POP Design",
        "Coffered Ceiling",
        "Barrel Vault",
        "Standard Ceiling",
        "Decorative Ceiling",
    ];

    pub const FURNITURE_QUALITIES: &[&str] =
        &["Budget-Friendly", "Mid-Range", "Premium", "Luxury", "Custom-Made"];

    pub const ACCESSORIES_LEVELS: &[&str] =
        &["Minimal", "Moderate", "Abundant", "Luxury Collection"];

    /// Hex swatch for a wall color value, falling back to soft white.
    #[must_use]
    pub fn wall_color_hex(value: &str) -> &'static str {
        WALL_COLORS
            .iter()
            .find(|c| c.value == value)
            .map_or(DEFAULT_WALL_HEX, |c| c.hex)
    }

    /// Number of bedrooms implied by a BHK selection such as `"3 BHK"`.
    ///
    /// Reads the leading integer; anything unparsable counts as zero.
    #[must_use]
    pub fn bedroom_count(bhk_type: &str) -> u32 {
        let digits: String = bhk_type
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts_match_each_wizard() {
        assert_eq!(WizardKind::Booking.step_count(), 4);
        assert_eq!(WizardKind::Vr.step_count(), 3);
        assert_eq!(WizardKind::Booking.last_step(), 3);
    }

    #[test]
    fn every_schema_field_belongs_to_a_real_step() {
        for kind in WizardKind::ALL {
            for field in kind.schema() {
                assert!(
                    field.step < kind.step_count(),
                    "{kind}: {} is on step {}",
                    field.name,
                    field.step
                );
            }
        }
    }

    #[test]
    fn slugs_round_trip() {
        assert_eq!(WizardKind::from_slug("bookasession"), Some(WizardKind::Booking));
        assert_eq!(WizardKind::from_slug("viewonvr"), Some(WizardKind::Vr));
        assert_eq!(WizardKind::from_slug("signup"), None);
    }

    #[test]
    fn bedroom_count_reads_leading_digits() {
        assert_eq!(vr::bedroom_count("3 BHK"), 3);
        assert_eq!(vr::bedroom_count("1 BHK"), 1);
        assert_eq!(vr::bedroom_count(""), 0);
        assert_eq!(vr::bedroom_count("studio"), 0);
    }

    #[test]
    fn room_visibility_follows_bedroom_count() {
        let bedroom3 = vr::ROOMS
            .iter()
            .find(|r| r.prefix == "bedroom3")
            .expect("bedroom3 room");
        assert!(!bedroom3.is_shown_for(2));
        assert!(bedroom3.is_shown_for(3));
        assert!(vr::ROOMS[0].is_shown_for(0));
    }

    #[test]
    fn room_field_names_exist_in_schema() {
        for room in vr::ROOMS {
            for name in room.field_names() {
                assert!(WizardKind::Vr.field(&name).is_some(), "missing {name}");
            }
        }
    }

    #[test]
    fn unknown_wall_color_falls_back_to_soft_white() {
        assert_eq!(vr::wall_color_hex("sage-green"), "#9CAF88");
        assert_eq!(vr::wall_color_hex("neon"), "#F5F5F0");
        assert_eq!(vr::wall_color_hex(""), "#F5F5F0");
    }

    #[test]
    fn fields_on_step_preserves_schema_order() {
        let names: Vec<_> = WizardKind::Booking
            .fields_on_step(1)
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["name", "email", "phone"]);
    }
}
