//! Validation of a candidate ramp origin
use crate::{
    config::RampConfig,
    coords::{Elevation, TileCoords},
    direction::Direction,
    map::World,
    tile::{ElementsExt, PathStyle},
};
use tracing::debug;

/// A tile accepted as the origin of a ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampOrigin {
    pub coords: TileCoords,
    /// Down-slope direction of the surface, shared by the origin footpath
    pub direction: Direction,
    pub surface_height: Elevation,
    pub path_height: Elevation,
    pub style: PathStyle,
}

/// Find the ramp origin at `coords`, or `None` if the tile is not eligible
pub fn ramp_origin(world: &impl World, coords: TileCoords, config: &RampConfig) -> Option<RampOrigin> {
    let tile = world.tile(coords);

    let mut surfaces = tile.surfaces();
    let surface = match (surfaces.next(), surfaces.next()) {
        (Some(surface), None) => surface,
        _ => {
            debug!("{coords} rejected: needs exactly one surface");
            return None;
        }
    };

    let Ok(direction) = surface.slope.down_slope_direction() else {
        debug!("{coords} rejected: slope {:#06b} is not diagonal", *surface.slope);
        return None;
    };

    let bounds = world.size().bounding_box().shrunk_along(
        direction,
        config.edge_margin_along,
        config.edge_margin_across,
    );
    if !bounds.contains(coords) {
        debug!("{coords} rejected: too close to the map edge");
        return None;
    }

    let surface_height = surface.base_height();
    let Some(path) = tile
        .footpaths()
        .find(|path| path.base_height() == surface_height && path.slope_direction == Some(direction))
    else {
        debug!("{coords} rejected: no footpath sloping {direction} at {surface_height}");
        return None;
    };

    Some(RampOrigin {
        coords,
        direction,
        surface_height,
        path_height: path.base_height(),
        style: path.style,
    })
}

pub fn is_valid_tile(world: &impl World, coords: TileCoords, config: &RampConfig) -> bool {
    ramp_origin(world, coords, config).is_some()
}
