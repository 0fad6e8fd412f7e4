//! Planar polygon geometry on raw latitude/longitude values.
//!
//! Polygons are slices of vertices, implicitly closed. Anything with fewer
//! than three vertices is not a polygon: it contains nothing and is
//! infinitely far away.

use crate::coordinate::Coordinate;

/// Minimum vertex count of a usable polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Whether `polygon` has enough vertices to enclose anything.
pub fn is_valid_polygon(polygon: &[Coordinate]) -> bool {
    polygon.len() >= MIN_POLYGON_VERTICES
}

/// Even-odd ray casting along the point's latitude.
///
/// An edge counts as crossed when one endpoint lies at or below the query
/// latitude and the other strictly above it. This half-open rule keeps shared
/// vertices from being counted twice, and it classifies a point on the lower
/// edge of an axis-aligned box as inside and one on the upper edge as outside.
pub fn point_in_polygon(point: &Coordinate, polygon: &[Coordinate]) -> bool {
    if !is_valid_polygon(polygon) {
        return false;
    }

    let lat = point.latitude;
    let lng = point.longitude;
    let mut inside = false;

    for (i, current) in polygon.iter().enumerate() {
        let previous = &polygon[(i + polygon.len() - 1) % polygon.len()];
        let (lat1, lng1) = (previous.latitude, previous.longitude);
        let (lat2, lng2) = (current.latitude, current.longitude);

        let crosses = (lat1 <= lat && lat < lat2) || (lat2 <= lat && lat < lat1);
        if !crosses {
            continue;
        }

        let t = (lat - lat1) / (lat2 - lat1);
        let lng_cross = lng1 + t * (lng2 - lng1);
        if lng_cross > lng {
            inside = !inside;
        }
    }

    inside
}

/// Minimum planar distance, in degrees, from `point` to `polygon`.
///
/// Returns `0.0` for points inside and `f64::INFINITY` for invalid polygons.
pub fn distance_to_polygon(point: &Coordinate, polygon: &[Coordinate]) -> f64 {
    if !is_valid_polygon(polygon) {
        return f64::INFINITY;
    }
    if point_in_polygon(point, polygon) {
        return 0.0;
    }

    edges(polygon)
        .map(|(start, end)| distance_to_segment(point, start, end))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `point` to the closed segment `start..end`.
///
/// The projection is clamped onto the segment, so points beyond either end
/// measure to that endpoint. A zero-length segment is just a point.
pub fn distance_to_segment(point: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    let dx = end.longitude - start.longitude;
    let dy = end.latitude - start.latitude;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return point.planar_distance(start);
    }

    let t = (((point.longitude - start.longitude) * dx + (point.latitude - start.latitude) * dy)
        / length_sq)
        .clamp(0.0, 1.0);

    let nearest = Coordinate::new(start.latitude + t * dy, start.longitude + t * dx);
    point.planar_distance(&nearest)
}

/// Edges of the closed ring, starting with last -> first.
fn edges(polygon: &[Coordinate]) -> impl Iterator<Item = (&Coordinate, &Coordinate)> {
    let closing = polygon.last().zip(polygon.first());
    closing.into_iter().chain(polygon.windows(2).map(|w| (&w[0], &w[1])))
}
