//! Placement of the footpaths a ramp needs around its origin
//!
//! The ramp tile is flanked at its high end by two short staircases going
//! down sideways, and at its low end by two landings. Nothing here touches
//! the map.
use crate::{
    coords::{Elevation, Placement, TileCoords},
    direction::Direction,
};
use itertools::Itertools;
use std::cmp::Reverse;

/// Distance from the origin to the reference tile at each end of the ramp
const END_DISTANCE: i32 = 3;

/// Sideways offset from the bottom reference tile to each landing
const LANDING_OFFSET: i32 = 3;

/// (sideways offset, elevation drop) of each staircase step at the top
#[rustfmt::skip]
const TOP_STEPS: [(i32, i32); 4] = [
    (2, 8),
    (3, 12),
    (3, 8),
    (4, 12),
];

/// Elevation drops of the two footpaths of a landing
const LANDING_STEPS: [i32; 2] = [12, 10];

/// Farthest placement from the origin on the axis of the slope
pub const REACH_ALONG: i32 = END_DISTANCE;

/// Farthest placement from the origin on the other axis
pub const REACH_ACROSS: i32 = 4;

fn top_placements(
    top: TileCoords,
    sideways: Direction,
    elevation: Elevation,
) -> impl Iterator<Item = Placement> {
    TOP_STEPS.into_iter().map(move |(offset, drop)| {
        Placement::new(top.travel(sideways, offset), elevation - drop)
    })
}

fn landing_placements(landing: TileCoords, elevation: Elevation) -> impl Iterator<Item = Placement> {
    LANDING_STEPS
        .into_iter()
        .map(move |drop| Placement::new(landing, elevation - drop))
}

/// Every footpath the ramp at `origin` requires, highest first
///
/// `elevation` is the height of the origin footpath. Placements of equal
/// elevation keep their generation order: top before bottom, left before right.
pub fn ramp_layout(origin: TileCoords, direction: Direction, elevation: Elevation) -> Vec<Placement> {
    let top = origin.travel(direction, END_DISTANCE);
    let bottom = origin.travel(direction, -END_DISTANCE);
    let sides = [direction.left(), direction.right()];

    let top_side = sides
        .into_iter()
        .flat_map(|side| top_placements(top, side, elevation));
    let bottom_side = sides.into_iter().flat_map(|side| {
        landing_placements(bottom.travel(side, LANDING_OFFSET), elevation)
    });

    top_side
        .chain(bottom_side)
        .sorted_by_key(|placement| Reverse(placement.elevation))
        .collect()
}
