//! Insertion of the footpaths computed by the layout
use crate::{
    coords::Placement,
    map::World,
    tile::{ElementsExt, PathElement, PathStyle},
};
use tracing::debug;

/// Stacking position new footpaths are inserted at
const INSERT_INDEX: usize = 0;

/// Insert a footpath at `placement` unless one is already there
///
/// Returns true if a footpath was inserted.
pub fn place_path_if_needed(
    world: &mut impl World,
    placement: &Placement,
    style: PathStyle,
    clearance_height: i32,
) -> bool {
    if world
        .tile(placement.coords)
        .has_footpath_at(placement.elevation)
    {
        debug!("footpath already present at {placement}");
        return false;
    }

    let path = PathElement::new(placement.elevation, clearance_height, style);
    world.insert_element(placement.coords, INSERT_INDEX, path.into());
    debug!("inserted footpath at {placement}");
    true
}

/// Insert every missing footpath, in the given order
///
/// Returns the number of footpaths inserted.
pub fn materialize(
    world: &mut impl World,
    placements: &[Placement],
    style: PathStyle,
    clearance_height: i32,
) -> usize {
    placements
        .iter()
        .filter(|placement| place_path_if_needed(world, placement, style, clearance_height))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coords::{Elevation, MapSize, TileCoords},
        direction::{Corners, Direction, Edges},
        layout::ramp_layout,
        map::GridMap,
        tile::TileElement,
    };
    use proptest::prelude::*;

    const STYLE: PathStyle = PathStyle {
        surface_object: 4,
        railings_object: 9,
    };

    fn footpaths(map: &GridMap) -> Vec<(TileCoords, i32)> {
        let mut all: Vec<_> = map
            .tiles()
            .flat_map(|(coords, tile)| tile.footpaths().map(|path| (*coords, path.base_z)))
            .collect();
        all.sort();
        all
    }

    #[test]
    fn inserts_missing_path() {
        let mut map = GridMap::new(MapSize::new(16, 16));
        let placement = Placement::new(TileCoords::new(5, 6), Elevation(8));
        assert!(place_path_if_needed(&mut map, &placement, STYLE, 4));

        let tile = map.tile(placement.coords);
        let path = tile.footpaths().next().unwrap();
        assert_eq!(path.base_z, 64);
        assert_eq!(path.clearance_z, 96);
        assert_eq!(path.edges, Edges::all());
        assert_eq!(path.corners, Corners::all());
        assert_eq!(path.style, STYLE);
        assert_eq!(path.slope_direction, None);
    }

    #[test]
    fn skips_existing_path() {
        let coords = TileCoords::new(5, 6);
        let mut existing = PathElement::new(Elevation(8), 4, STYLE).sloped(Direction::East);
        existing.hidden = true;
        let mut map = GridMap::new(MapSize::new(16, 16)).with_tile(coords, vec![existing.into()]);
        let placement = Placement::new(coords, Elevation(8));
        assert!(!place_path_if_needed(&mut map, &placement, STYLE, 4));
        assert_eq!(map.tile(coords).len(), 1);
    }

    #[test]
    fn higher_paths_are_inserted_first() {
        let mut map = GridMap::new(MapSize::new(32, 32));
        let layout = ramp_layout(TileCoords::new(10, 10), Direction::West, Elevation(16));
        assert_eq!(materialize(&mut map, &layout, STYLE, 4), 12);

        // (7,7) gets 8 then 4, each inserted at the bottom of the stack
        let tile = map.tile(TileCoords::new(7, 7));
        let heights: Vec<i32> = tile.iter().map(TileElement::base_z).collect();
        assert_eq!(heights, vec![32, 64]);
    }

    proptest! {
        #[test]
        fn materialize_is_idempotent(
            x in 10i32..100,
            y in 10i32..100,
            direction in 0u8..4,
            elevation in 12i32..200,
        ) {
            let direction = Direction::try_from(direction).unwrap();
            let layout = ramp_layout(TileCoords::new(x, y), direction, Elevation(elevation));
            let mut map = GridMap::new(MapSize::new(128, 128));

            let first = materialize(&mut map, &layout, STYLE, 4);
            let once = footpaths(&map);
            let second = materialize(&mut map, &layout, STYLE, 4);

            prop_assert_eq!(first, 12);
            prop_assert_eq!(second, 0);
            prop_assert_eq!(once, footpaths(&map));
        }
    }
}
