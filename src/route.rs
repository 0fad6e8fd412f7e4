//! Route assembly over a directions provider.
//!
//! The provider hands back legs of steps, each step carrying an encoded
//! polyline and an HTML instruction. Assembly flattens the step geometry
//! into one drawable path and turns the instructions into plain text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::decode_polyline;
use crate::traits::{DirectionsProvider, DirectionsRequest, TravelMode};

/// Environment variable read by [`RouterConfig::from_env`].
pub const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub steps: Vec<RouteStep>,
    pub distance_text: Option<String>,
    pub duration_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub encoded_polyline: String,
    pub instruction_html: String,
    pub distance_text: Option<String>,
    pub duration_text: Option<String>,
}

/// A plain-text navigation instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInstruction {
    pub instruction: String,
    pub distance: Option<String>,
    pub duration: Option<String>,
}

/// Drawable path plus step list. `Default` is the empty route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedRoute {
    pub coordinates: Vec<Coordinate>,
    pub steps: Vec<RouteInstruction>,
    pub total_duration: Option<String>,
    pub total_distance: Option<String>,
}

/// Flattens provider legs into a single route.
///
/// Geometry is concatenated in leg then step order with no deduplication, so
/// a point shared by consecutive steps appears twice. The summary is taken
/// from the first leg only.
pub fn assemble_route(legs: &[RouteLeg]) -> Result<DecodedRoute, RouteError> {
    let step_count: usize = legs.iter().map(|leg| leg.steps.len()).sum();
    if step_count == 0 {
        return Err(RouteError::NoSteps);
    }

    let mut coordinates = Vec::new();
    let mut steps = Vec::with_capacity(step_count);

    for step in legs.iter().flat_map(|leg| &leg.steps) {
        coordinates.extend(decode_polyline(&step.encoded_polyline)?);
        steps.push(RouteInstruction {
            instruction: strip_html(&step.instruction_html),
            distance: step.distance_text.clone(),
            duration: step.duration_text.clone(),
        });
    }

    let first = &legs[0];
    debug!(
        legs = legs.len(),
        steps = steps.len(),
        points = coordinates.len(),
        "assembled route"
    );

    Ok(DecodedRoute {
        coordinates,
        steps,
        total_duration: first.duration_text.clone(),
        total_distance: first.distance_text.clone(),
    })
}

/// Drops `<...>` tags, expands `&nbsp;` and trims.
///
/// A `<` with no closing `>` after it is kept as text.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                text.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    text.push_str(rest);

    text.replace("&nbsp;", " ").trim().to_string()
}

#[derive(Debug, Clone, Default)]
pub struct RouterConfig {
    /// Directions API key. Without one the router returns empty routes and
    /// never contacts the provider.
    pub api_key: Option<String>,
    pub mode: TravelMode,
}

impl RouterConfig {
    /// Config with an API key and the default walking mode.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            mode: TravelMode::default(),
        }
    }

    /// Reads the key from [`API_KEY_ENV_VAR`]; unset or blank means none.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV_VAR).ok(),
            mode: TravelMode::default(),
        }
    }

    /// Replaces the default travel mode.
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Builds routes between two points using a directions provider.
#[derive(Debug, Clone)]
pub struct Router<P> {
    provider: P,
    config: RouterConfig,
}

impl<P: DirectionsProvider> Router<P> {
    /// Creates a router over `provider`.
    pub fn new(provider: P, config: RouterConfig) -> Self {
        Self { provider, config }
    }

    /// Returns the router configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route in the configured travel mode.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DecodedRoute, RouteError> {
        self.route_with_mode(origin, destination, self.config.mode)
            .await
    }

    /// Route in an explicit travel mode.
    ///
    /// Makes at most one provider call. Nothing is cached or retried, and
    /// the router holds no state between calls.
    pub async fn route_with_mode(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<DecodedRoute, RouteError> {
        let Some(api_key) = self.config.credential() else {
            debug!("no directions API key configured, returning empty route");
            return Ok(DecodedRoute::default());
        };

        let request = DirectionsRequest {
            origin,
            destination,
            mode,
            api_key: api_key.to_string(),
        };
        let legs = self.provider.directions(&request).await?;

        assemble_route(&legs)
    }

    /// Path only, for callers that just draw the line.
    pub async fn route_coordinates(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, RouteError> {
        self.route(origin, destination)
            .await
            .map(|route| route.coordinates)
    }
}
