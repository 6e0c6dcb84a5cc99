//! Turns a sloped footpath tile into a connected ramp
//!
//! The host hands over a [`map::World`] and the selected tile. [`ramp::Rampifier`]
//! checks the tile, lays out the footpaths the ramp needs, inserts the missing
//! ones and fills the corners of the footpaths at both ends.
pub mod config;
pub mod coords;
pub mod corners;
pub mod direction;
pub mod eligibility;
pub mod error;
pub mod layout;
pub mod map;
pub mod materialize;
pub mod ramp;
pub mod slope;
pub mod tile;

pub use coords::{Elevation, MapSize, Placement, TileCoords};
pub use direction::{Corners, Direction, Edges};
pub use error::RampError;
pub use map::{GridMap, World};
pub use ramp::{RampReport, Rampifier};
