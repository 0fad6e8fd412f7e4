//! Directions provider double that records what it was asked.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use campus_nav::RouteError;
use campus_nav::route::{RouteLeg, RouteStep};
use campus_nav::traits::{DirectionsProvider, DirectionsRequest};

pub const SAMPLE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

#[derive(Debug, Clone)]
pub enum MockReply {
    Legs(Vec<RouteLeg>),
    Status(&'static str),
    Http(u16, &'static str),
}

#[derive(Debug)]
pub struct MockProvider {
    reply: MockReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<DirectionsRequest>>,
}

impl MockProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_legs(legs: Vec<RouteLeg>) -> Self {
        Self::new(MockReply::Legs(legs))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<DirectionsRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl DirectionsProvider for &MockProvider {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<RouteLeg>, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.reply {
            MockReply::Legs(legs) => Ok(legs.clone()),
            MockReply::Status(status) => Err(RouteError::Status {
                status: status.to_string(),
                message: None,
            }),
            MockReply::Http(status, message) => Err(RouteError::Api {
                status: *status,
                message: message.to_string(),
            }),
        }
    }
}

pub fn step(instruction_html: &str) -> RouteStep {
    RouteStep {
        encoded_polyline: SAMPLE_POLYLINE.to_string(),
        instruction_html: instruction_html.to_string(),
        distance_text: Some("100 m".to_string()),
        duration_text: Some("1 min".to_string()),
    }
}

pub fn leg(steps: Vec<RouteStep>) -> RouteLeg {
    RouteLeg {
        steps,
        distance_text: Some("2.1 km".to_string()),
        duration_text: Some("12 mins".to_string()),
    }
}
