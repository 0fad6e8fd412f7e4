//! Encoded polyline codec for route geometries.
//!
//! Implements the variable-length delta encoding used by the directions
//! provider: each value is zig-zag encoded, split into 5-bit groups with a
//! `0x20` continuation bit and offset by 63 into printable ASCII. Coordinates
//! are fixed point at five decimal places and stored as deltas from the
//! previous point, latitude first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinate::Coordinate;

/// Fixed-point scale of encoded coordinates.
const PRECISION: f64 = 1e5;

/// Offset added to every 6-bit chunk to make it printable.
const OFFSET: u8 = 63;

/// Largest byte an encoder can emit (`0x3f + 63`).
const MAX_BYTE: u8 = OFFSET + 0x3f;

const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;

/// Seven 5-bit groups cover every 32-bit value.
const MAX_SHIFT: u32 = 35;

/// Largest encodable magnitude per axis, in degrees.
const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("invalid polyline character {byte:#04x} at byte {index}")]
    InvalidCharacter { index: usize, byte: u8 },

    #[error("polyline truncated inside a value at byte {index}")]
    Truncated { index: usize },

    #[error("polyline ends after a latitude without its longitude at byte {index}")]
    MissingLongitude { index: usize },

    #[error("polyline value starting at byte {index} exceeds 32 bits")]
    Overflow { index: usize },

    #[error("coordinate {index} is outside WGS84 bounds and cannot be encoded")]
    OutOfRange { index: usize },
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Encoding to and from the compact string form happens at the boundary with
/// the directions provider; everything inside the crate works on points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a polyline from decoded coordinates.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        decode_polyline(encoded).map(Self::new)
    }

    /// Encodes the points back into the compact string form.
    pub fn encode(&self) -> Result<String, PolylineError> {
        encode_polyline(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Decodes an encoded polyline into its coordinates.
///
/// Deltas always come in (latitude, longitude) pairs. Input that stops in
/// the middle of a value or of a pair, or that contains bytes no encoder
/// would produce, is rejected instead of being guessed at.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (lat_delta, next) = decode_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(PolylineError::MissingLongitude { index: next });
        }
        let (lng_delta, next) = decode_value(bytes, next)?;
        index = next;

        lat += lat_delta;
        lng += lng_delta;

        points.push(Coordinate::new(
            lat as f64 / PRECISION,
            lng as f64 / PRECISION,
        ));
    }

    Ok(points)
}

/// Reads one zig-zag value starting at `start`, returning it together with
/// the index of the first unread byte.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    let mut index = start;

    loop {
        let byte = *bytes
            .get(index)
            .ok_or(PolylineError::Truncated { index })?;
        if !(OFFSET..=MAX_BYTE).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { index, byte });
        }
        if shift >= MAX_SHIFT {
            return Err(PolylineError::Overflow { index: start });
        }

        let chunk = i64::from(byte - OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };

    Ok((value, index))
}

/// Encodes coordinates into the compact polyline form.
///
/// Only WGS84 coordinates (|latitude| <= 90, |longitude| <= 180) are
/// accepted. Within those bounds every delta fits the 32-bit values the
/// decoder reads back.
pub fn encode_polyline(points: &[Coordinate]) -> Result<String, PolylineError> {
    let mut output = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for (index, point) in points.iter().enumerate() {
        let lat = to_fixed(point.latitude, MAX_LATITUDE)
            .ok_or(PolylineError::OutOfRange { index })?;
        let lng = to_fixed(point.longitude, MAX_LONGITUDE)
            .ok_or(PolylineError::OutOfRange { index })?;

        encode_value(lat - prev_lat, &mut output);
        encode_value(lng - prev_lng, &mut output);

        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(output)
}

/// Fixed-point value of `degrees`, or `None` outside `-limit..=limit`.
fn to_fixed(degrees: f64, limit: f64) -> Option<i64> {
    (degrees.is_finite() && degrees.abs() <= limit).then(|| (degrees * PRECISION).round() as i64)
}

fn encode_value(value: i64, output: &mut String) {
    let mut encoded = if value < 0 { !(value << 1) } else { value << 1 };

    while encoded >= CONTINUATION_BIT {
        let chunk = ((encoded & CHUNK_MASK) | CONTINUATION_BIT) as u8;
        output.push(char::from(chunk + OFFSET));
        encoded >>= 5;
    }
    output.push(char::from(encoded as u8 + OFFSET));
}
