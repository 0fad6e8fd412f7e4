//! Seams to the outside world.
//!
//! The directions service is an external collaborator. Route assembly only
//! needs something that turns an origin/destination pair into route legs.

use std::fmt::{self, Display};
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::route::RouteLeg;

/// Travel mode understood by the directions service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Walking,
    Bicycling,
    Driving,
    Transit,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Driving,
        TravelMode::Transit,
    ];

    /// Value of the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
        }
    }

    /// Short label for mode pickers.
    pub fn label(&self) -> &'static str {
        match self {
            TravelMode::Walking => "Walk",
            TravelMode::Bicycling => "Bike",
            TravelMode::Driving => "Car",
            TravelMode::Transit => "Transit",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point-to-point directions query.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TravelMode,
    pub api_key: String,
}

/// Fetches route legs from a directions service.
///
/// Implementations make a single request and never retry; a failed or
/// non-OK response is returned as an error rather than an empty list.
pub trait DirectionsProvider {
    fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> impl Future<Output = Result<Vec<RouteLeg>, RouteError>> + Send;
}
