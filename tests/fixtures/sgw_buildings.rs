//! Simplified SGW campus footprints.
//!
//! Each building is an axis-aligned box around its real location in
//! downtown Montreal. The boxes do not overlap.

use campus_nav::{Building, Coordinate};

#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    pub code: &'static str,
    pub name: &'static str,
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Footprint {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        south: f64,
        west: f64,
        north: f64,
        east: f64,
    ) -> Self {
        Self {
            code,
            name,
            south,
            west,
            north,
            east,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn outline(&self) -> Vec<Coordinate> {
        vec![
            Coordinate::new(self.south, self.west),
            Coordinate::new(self.south, self.east),
            Coordinate::new(self.north, self.east),
            Coordinate::new(self.north, self.west),
        ]
    }

    pub fn building(&self) -> Building {
        Building {
            name: self.code.to_string(),
            campus_name: "SGW".to_string(),
            display_name: self.name.to_string(),
            address: String::new(),
            coordinates: self.center(),
            bounding_box: Some(self.outline()),
            departments: Vec::new(),
            services: Vec::new(),
        }
    }
}

pub const HALL: Footprint = Footprint::new("H", "Henry F. Hall Building", 45.4968, -73.5794, 45.4978, -73.5783);
pub const LIBRARY: Footprint = Footprint::new("LB", "J.W. McConnell Building", 45.4963, -73.5781, 45.4971, -73.5771);
pub const EV: Footprint = Footprint::new("EV", "Engineering and Visual Arts Complex", 45.4952, -73.5783, 45.4960, -73.5769);
pub const JMSB: Footprint = Footprint::new("MB", "John Molson Building", 45.4950, -73.5795, 45.4957, -73.5785);

pub const SGW: &[Footprint] = &[HALL, LIBRARY, EV, JMSB];

pub fn sgw_buildings() -> Vec<Building> {
    SGW.iter().map(Footprint::building).collect()
}
