//! Google Directions HTTP adapter.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::RouteError;
use crate::route::{RouteLeg, RouteStep};
use crate::traits::{DirectionsProvider, DirectionsRequest};

pub const GOOGLE_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

const STATUS_OK: &str = "OK";

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_DIRECTIONS_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleDirectionsClient {
    config: DirectionsConfig,
    client: reqwest::Client,
}

impl GoogleDirectionsClient {
    /// Creates a client with the configured request timeout.
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Builds the GET request for one query. The URL carries the key.
    pub fn build_request(
        &self,
        request: &DirectionsRequest,
    ) -> Result<reqwest::Request, reqwest::Error> {
        let origin = format!("{},{}", request.origin.latitude, request.origin.longitude);
        let destination = format!(
            "{},{}",
            request.destination.latitude, request.destination.longitude
        );

        self.client
            .get(&self.config.base_url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("mode", request.mode.as_str()),
                ("key", request.api_key.as_str()),
            ])
            .build()
    }
}

impl DirectionsProvider for GoogleDirectionsClient {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<RouteLeg>, RouteError> {
        debug!(
            origin = ?request.origin,
            destination = ?request.destination,
            mode = %request.mode,
            "requesting directions"
        );

        // Every reqwest error goes through `From`, which drops the keyed URL.
        let http_request = self.build_request(request)?;
        let response = self.client.execute(http_request).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(RouteError::Api { status, message });
        }

        let body: DirectionsResponse = response.json().await?;
        legs_from_response(body)
    }
}

/// Maps a parsed response onto route legs, surfacing any non-OK status.
///
/// Only the first route is used. A response without routes yields no legs.
fn legs_from_response(body: DirectionsResponse) -> Result<Vec<RouteLeg>, RouteError> {
    if body.status != STATUS_OK {
        debug!(status = %body.status, "directions service returned an error status");
        return Err(RouteError::Status {
            status: body.status,
            message: body.error_message,
        });
    }

    let legs = body
        .routes
        .into_iter()
        .next()
        .map(|route| route.legs)
        .unwrap_or_default()
        .into_iter()
        .map(RouteLeg::from)
        .collect();

    Ok(legs)
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    #[serde(default)]
    steps: Vec<ApiStep>,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct ApiStep {
    polyline: ApiPolyline,
    #[serde(default)]
    html_instructions: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct ApiPolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

impl From<ApiLeg> for RouteLeg {
    fn from(leg: ApiLeg) -> Self {
        Self {
            steps: leg.steps.into_iter().map(RouteStep::from).collect(),
            distance_text: leg.distance.map(|d| d.text),
            duration_text: leg.duration.map(|d| d.text),
        }
    }
}

impl From<ApiStep> for RouteStep {
    fn from(step: ApiStep) -> Self {
        Self {
            encoded_polyline: step.polyline.points,
            instruction_html: step.html_instructions,
            distance_text: step.distance.map(|d| d.text),
            duration_text: step.duration.map(|d| d.text),
        }
    }
}
