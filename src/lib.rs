//! campus-nav geometry core
//!
//! Building containment and distance tests, the encoded polyline codec, and
//! route assembly over an external directions service.

pub mod building;
pub mod campus;
pub mod coordinate;
pub mod directions;
pub mod error;
pub mod geometry;
pub mod polyline;
pub mod route;
pub mod traits;

pub use building::{Building, building_containing_point, locate_buildings};
pub use coordinate::Coordinate;
pub use error::RouteError;
pub use geometry::{distance_to_polygon, point_in_polygon};
pub use polyline::{Polyline, PolylineError, decode_polyline, encode_polyline};
pub use route::{DecodedRoute, Router, RouterConfig, assemble_route};
