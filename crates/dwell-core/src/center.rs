//! Experience centers offered for appointments, and nearest-first ranking.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Straight-line distance in degrees, treating lat/lon as a flat plane.
    ///
    /// Only good enough for ordering nearby candidates.
    #[must_use]
    pub fn planar_distance(&self, other: &Coordinates) -> f64 {
        (self.latitude - other.latitude).hypot(self.longitude - other.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Center {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    /// Display-only distance hint shown next to the name.
    pub distance_label: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub coordinates: Coordinates,
}

pub const CENTERS: &[Center] = &[
    Center {
        id: "1",
        name: "Downtown Experience Center",
        address: "123 Main Street, Downtown",
        distance_label: "2.5 km",
        city: "New York",
        state: "NY",
        coordinates: Coordinates::new(40.712_8, -74.006),
    },
    Center {
        id: "2",
        name: "Uptown Design Hub",
        address: "456 Fashion Avenue, Uptown",
        distance_label: "4.8 km",
        city: "New York",
        state: "NY",
        coordinates: Coordinates::new(40.728_2, -73.994_2),
    },
    Center {
        id: "3",
        name: "Westside Studio",
        address: "789 Creative Lane, West District",
        distance_label: "6.2 km",
        city: "Boston",
        state: "MA",
        coordinates: Coordinates::new(42.360_1, -71.058_9),
    },
    Center {
        id: "4",
        name: "Riverside Gallery",
        address: "321 Park Road, Riverside",
        distance_label: "8.1 km",
        city: "Los Angeles",
        state: "CA",
        coordinates: Coordinates::new(34.052_2, -118.243_7),
    },
];

#[must_use]
pub fn find_center(id: &str) -> Option<&'static Center> {
    CENTERS.iter().find(|c| c.id == id)
}

/// Order `centers` nearest-first relative to `point`.
///
/// The sort is stable, so equidistant centers keep their input order. With
/// no point the input order is returned unchanged.
#[must_use]
pub fn rank<'a>(centers: &'a [Center], point: Option<&Coordinates>) -> Vec<&'a Center> {
    let mut ranked: Vec<&Center> = centers.iter().collect();
    if let Some(point) = point {
        ranked.sort_by(|a, b| {
            let da = a.coordinates.planar_distance(point);
            let db = b.coordinates.planar_distance(point);
            da.total_cmp(&db)
        });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ranked: &[&Center]) -> Vec<&'static str> {
        ranked.iter().map(|c| c.id).collect()
    }

    #[test]
    fn no_point_keeps_original_order() {
        assert_eq!(ids(&rank(CENTERS, None)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn downtown_ranks_first_at_its_own_coordinates() {
        let point = Coordinates::new(40.7128, -74.006);
        let ranked = rank(CENTERS, Some(&point));
        assert_eq!(ranked[0].name, "Downtown Experience Center");
        assert!(ranked[0].coordinates.planar_distance(&point).abs() < f64::EPSILON);
        assert_eq!(ids(&ranked), ["1", "2", "3", "4"]);

        let distances: Vec<f64> = ranked
            .iter()
            .map(|c| c.coordinates.planar_distance(&point))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn west_coast_point_prefers_riverside() {
        let point = Coordinates::new(37.7749, -122.4194);
        let ranked = rank(CENTERS, Some(&point));
        assert_eq!(ranked[0].id, "4");
    }

    #[test]
    fn boston_point_prefers_westside() {
        let point = Coordinates::new(42.35, -71.06);
        assert_eq!(ids(&rank(CENTERS, Some(&point)))[0], "3");
    }

    #[test]
    fn equidistant_centers_keep_input_order() {
        let twins = [
            Center {
                id: "a",
                coordinates: Coordinates::new(1.0, 0.0),
                ..CENTERS[0].clone()
            },
            Center {
                id: "b",
                coordinates: Coordinates::new(-1.0, 0.0),
                ..CENTERS[0].clone()
            },
        ];
        let ranked = rank(&twins, Some(&Coordinates::new(0.0, 0.0)));
        assert_eq!(ids(&ranked), ["a", "b"]);
    }

    #[test]
    fn planar_distance_is_euclidean() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert!((a.planar_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn find_center_by_id() {
        assert_eq!(find_center("3").map(|c| c.name), Some("Westside Studio"));
        assert!(find_center("9").is_none());
    }
}
