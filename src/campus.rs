//! The two campuses served by the app.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    Sgw,
    Loyola,
}

impl Campus {
    pub const ALL: [Campus; 2] = [Campus::Sgw, Campus::Loyola];

    pub fn name(&self) -> &'static str {
        match self {
            Campus::Sgw => "SGW Campus",
            Campus::Loyola => "Loyola Campus",
        }
    }

    /// Point the map centres on when the campus is selected.
    pub fn center(&self) -> Coordinate {
        match self {
            Campus::Sgw => Coordinate::new(45.4950, -73.5781),
            Campus::Loyola => Coordinate::new(45.4580, -73.6395),
        }
    }
}
