//! Test fixtures for campus-nav.
//!
//! Provides SGW campus building footprints and a recording directions
//! provider.

#![allow(dead_code)]

pub mod mock_provider;
pub mod sgw_buildings;

#[allow(unused_imports)]
pub use mock_provider::*;
#[allow(unused_imports)]
pub use sgw_buildings::*;
