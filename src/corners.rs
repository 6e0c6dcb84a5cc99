//! Corner filling of the footpaths at both ends of a ramp
//!
//! Corner bits are only ever added, so running a pass again changes nothing.
use crate::{
    coords::{Elevation, TileCoords},
    direction::{Corners, Direction},
    map::World,
    tile::ElementsExt,
};
use tracing::debug;

/// Corner bits newly set by [`fill_corners`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilledCorners {
    pub top: Corners,
    pub bottom: Corners,
}

impl FilledCorners {
    pub fn count(&self) -> u32 {
        self.top.bits().count_ones() + self.bottom.bits().count_ones()
    }
}

/// Fill the corners of the footpaths next to the ramp at `origin`
///
/// `base_height` is the height of the origin surface.
pub fn fill_corners(
    world: &mut impl World,
    origin: TileCoords,
    direction: Direction,
    base_height: Elevation,
) -> FilledCorners {
    FilledCorners {
        top: fill_corners_at_top(world, origin, direction, base_height),
        bottom: fill_corners_at_bottom(world, origin, direction, base_height),
    }
}

fn fill_corners_at_top(
    world: &mut impl World,
    origin: TileCoords,
    direction: Direction,
    base_height: Elevation,
) -> Corners {
    let coords = origin.travel(direction, 1);
    let Some(path) = world
        .tile_mut(coords)
        .visible_footpath_at_mut(base_height + 2)
    else {
        return Corners::empty();
    };

    let back = direction.reversed();
    let mut wanted = Corners::empty();
    if path.edges.has(back) {
        if path.edges.has(direction.left()) {
            wanted.set_direction(back);
        }
        if path.edges.has(direction.right()) {
            wanted.set_direction(direction.right());
        }
    }

    let added = wanted - path.corners;
    path.corners |= wanted;
    if !added.is_empty() {
        debug!("filled corners {added:?} at {coords}");
    }
    added
}

fn fill_corners_at_bottom(
    world: &mut impl World,
    origin: TileCoords,
    direction: Direction,
    base_height: Elevation,
) -> Corners {
    let coords = origin.travel(direction, -1);
    let Some(path) = world.tile_mut(coords).visible_footpath_at_mut(base_height) else {
        return Corners::empty();
    };

    let back = direction.reversed();
    let mut wanted = Corners::empty();
    if path.edges.has(direction) {
        if path.edges.has(back.left()) {
            wanted.set_direction(direction);
        }
        if path.edges.has(back.right()) {
            wanted.set_direction(back.right());
        }
    }

    let added = wanted - path.corners;
    path.corners |= wanted;
    if !added.is_empty() {
        debug!("filled corners {added:?} at {coords}");
    }
    added
}
