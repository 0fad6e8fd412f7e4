//! Campus buildings and point-to-building lookup.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::geometry::{distance_to_polygon, is_valid_polygon, point_in_polygon};

/// A building from the campus catalogue.
///
/// `bounding_box` is the footprint outline. A missing, `null` or short
/// outline is tolerated and simply never contains anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub name: String,
    #[serde(default)]
    pub campus_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub address: String,
    /// Representative point, used as the route destination.
    pub coordinates: Coordinate,
    #[serde(default)]
    pub bounding_box: Option<Vec<Coordinate>>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl Building {
    /// Footprint if it has enough vertices to be a polygon.
    pub fn footprint(&self) -> Option<&[Coordinate]> {
        self.bounding_box
            .as_deref()
            .filter(|outline| is_valid_polygon(outline))
    }

    /// Whether the footprint contains `point`; `false` without a footprint.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.footprint()
            .is_some_and(|outline| point_in_polygon(point, outline))
    }

    /// Planar distance to the footprint, `f64::INFINITY` without one.
    pub fn distance_to(&self, point: &Coordinate) -> f64 {
        self.footprint()
            .map_or(f64::INFINITY, |outline| distance_to_polygon(point, outline))
    }
}

/// Returns the first building, in list order, whose footprint contains the
/// point.
///
/// Overlaps resolve to whichever building comes first; there is no notion of
/// a tighter or nearer match.
pub fn building_containing_point<'a>(
    point: &Coordinate,
    buildings: &'a [Building],
) -> Option<&'a Building> {
    buildings.iter().find(|building| building.contains(point))
}

/// Looks up the containing building for every point, preserving order.
pub fn locate_buildings<'a>(
    points: &[Coordinate],
    buildings: &'a [Building],
) -> Vec<Option<&'a Building>> {
    points
        .par_iter()
        .map(|point| building_containing_point(point, buildings))
        .collect()
}

/// Parses a building catalogue in the app's JSON format.
pub fn buildings_from_json(json: &str) -> Result<Vec<Building>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(name: &str, outline: Option<Vec<(f64, f64)>>) -> Building {
        Building {
            name: name.to_string(),
            campus_name: "Main Campus".to_string(),
            display_name: name.to_string(),
            address: String::new(),
            coordinates: Coordinate::new(0.0, 0.0),
            bounding_box: outline.map(|points| points.into_iter().map(Coordinate::from).collect()),
            departments: Vec::new(),
            services: Vec::new(),
        }
    }

    fn square(lat: f64, lng: f64, size: f64) -> Option<Vec<(f64, f64)>> {
        Some(vec![
            (lat, lng),
            (lat, lng + size),
            (lat + size, lng + size),
            (lat + size, lng),
        ])
    }

    #[test]
    fn test_first_match_wins() {
        let a = building("A", square(0.0, 0.0, 1.0));
        let b = building("B", square(0.0, 0.0, 2.0));
        let buildings = vec![a, b];
        let found = building_containing_point(&Coordinate::new(0.5, 0.5), &buildings);
        assert_eq!(found.map(|b| b.name.as_str()), Some("A"));
    }

    #[test]
    fn test_skips_unusable_outlines() {
        let buildings = vec![
            building("missing", None),
            building("empty", Some(vec![])),
            building("two", Some(vec![(0.0, 0.0), (1.0, 1.0)])),
            building("real", square(0.0, 0.0, 1.0)),
        ];
        let found = building_containing_point(&Coordinate::new(0.5, 0.5), &buildings);
        assert_eq!(found.map(|b| b.name.as_str()), Some("real"));
    }

    #[test]
    fn test_empty_list() {
        assert!(building_containing_point(&Coordinate::new(0.5, 0.5), &[]).is_none());
    }

    #[test]
    fn test_distance_to() {
        let inside = building("A", square(0.0, 0.0, 1.0));
        assert_eq!(inside.distance_to(&Coordinate::new(0.5, 0.5)), 0.0);
        assert!((inside.distance_to(&Coordinate::new(0.5, 3.0)) - 2.0).abs() < 1e-12);
        assert_eq!(
            building("none", None).distance_to(&Coordinate::new(0.5, 0.5)),
            f64::INFINITY
        );
    }

    #[test]
    fn test_null_and_missing_outline_in_json() {
        let json = r#"[
            {"name": "NULL", "coordinates": {"latitude": 1.0, "longitude": 1.0}, "boundingBox": null},
            {"name": "MISSING", "coordinates": {"latitude": 1.0, "longitude": 1.0}}
        ]"#;
        let buildings = buildings_from_json(json).unwrap();
        assert_eq!(buildings.len(), 2);
        assert!(buildings.iter().all(|b| b.bounding_box.is_none()));
        assert!(buildings.iter().all(|b| b.departments.is_empty()));
    }
}
