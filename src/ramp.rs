//! Ramp synthesis from a selected tile
use crate::{
    config::RampConfig,
    coords::{Placement, TileCoords},
    corners::{fill_corners, FilledCorners},
    direction::Direction,
    eligibility::{ramp_origin, RampOrigin},
    layout::ramp_layout,
    map::World,
    materialize::materialize,
    tile::TileElement,
};
use anyhow::Result;
use tracing::info;

/// What a committed ramp changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampReport {
    pub origin: TileCoords,
    pub direction: Direction,
    pub placements: Vec<Placement>,
    pub inserted: usize,
    pub corners: FilledCorners,
}

impl RampReport {
    pub fn already_present(&self) -> usize {
        self.placements.len() - self.inserted
    }
}

/// Entry point for the tool selecting tiles
pub struct Rampifier {
    config: RampConfig,
}

impl Rampifier {
    pub fn new(config: RampConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Tile under a point given in world units
    pub fn tile_at(&self, x: i32, y: i32) -> TileCoords {
        TileCoords::from_world(x, y, self.config.world_tile_shift)
    }

    /// True if a ramp can be built from `coords`, without touching the map
    pub fn preview(&self, world: &impl World, coords: TileCoords) -> bool {
        ramp_origin(world, coords, &self.config).is_some()
    }

    /// Build the ramp at `coords`, or do nothing if the tile is not eligible
    pub fn apply(&self, world: &mut impl World, coords: TileCoords) -> Option<RampReport> {
        let origin = ramp_origin(&*world, coords, &self.config)?;
        hide_origin(world, &origin);

        let placements = ramp_layout(origin.coords, origin.direction, origin.path_height);
        let inserted = materialize(
            world,
            &placements,
            origin.style,
            self.config.clearance_height,
        );

        let corners = if self.config.fill_corners {
            fill_corners(
                world,
                origin.coords,
                origin.direction,
                origin.surface_height,
            )
        } else {
            FilledCorners::default()
        };

        info!(
            "ramp at {} going {}: {} footpaths inserted, {} already there, {} corners filled",
            origin.coords,
            origin.direction,
            inserted,
            placements.len() - inserted,
            corners.count()
        );

        Some(RampReport {
            origin: origin.coords,
            direction: origin.direction,
            placements,
            inserted,
            corners,
        })
    }
}

impl Default for Rampifier {
    fn default() -> Self {
        Self {
            config: RampConfig::default(),
        }
    }
}

/// The origin surface and footpaths stay on the tile, only hidden
fn hide_origin(world: &mut impl World, origin: &RampOrigin) {
    for element in world.tile_mut(origin.coords).iter_mut() {
        if matches!(element, TileElement::Surface(_) | TileElement::Footpath(_)) {
            element.set_hidden(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coords::{Elevation, MapSize},
        direction::{Corners, Edges},
        map::GridMap,
        slope::Slope,
        tile::{ElementsExt, OtherElement, PathElement, PathStyle, SurfaceElement},
    };

    const STYLE: PathStyle = PathStyle {
        surface_object: 5,
        railings_object: 2,
    };

    fn origin_elements(direction: Direction, height: i32) -> Vec<TileElement> {
        vec![
            SurfaceElement::new(Elevation(height), Slope::from(direction)).into(),
            PathElement::new(Elevation(height), 4, STYLE)
                .sloped(direction)
                .into(),
            OtherElement {
                kind: "lamp".to_string(),
                base_z: Elevation(height).to_raw(),
                hidden: false,
            }
            .into(),
        ]
    }

    fn ramp_map(origin: TileCoords, direction: Direction, height: i32) -> GridMap {
        GridMap::new(MapSize::new(64, 64)).with_tile(origin, origin_elements(direction, height))
    }

    #[test]
    fn preview_does_not_change_the_map() {
        let origin = TileCoords::new(20, 20);
        let map = ramp_map(origin, Direction::South, 16);
        let before = map.clone();
        let rampifier = Rampifier::default();
        assert!(rampifier.preview(&map, origin));
        assert!(!rampifier.preview(&map, TileCoords::new(21, 20)));
        assert_eq!(map, before);
    }

    #[test]
    fn apply_builds_the_ramp() {
        let origin = TileCoords::new(20, 20);
        let mut map = ramp_map(origin, Direction::West, 16);
        let report = Rampifier::default().apply(&mut map, origin).unwrap();

        assert_eq!(report.direction, Direction::West);
        assert_eq!(report.placements.len(), 12);
        assert_eq!(report.inserted, 12);
        assert_eq!(report.already_present(), 0);

        let tile = map.tile(origin);
        assert_eq!(tile.len(), 3);
        assert!(tile.surfaces().all(|surface| surface.hidden));
        assert!(tile.footpaths().all(|path| path.hidden));
        assert!(tile.iter().any(|element| !element.is_hidden()));

        let side = map.tile(TileCoords::new(17, 22));
        let path = side.footpaths().next().unwrap();
        assert_eq!(path.base_height(), Elevation(8));
        assert_eq!(path.style, STYLE);
        assert!(!path.hidden);
    }

    #[test]
    fn apply_twice_adds_nothing() {
        let origin = TileCoords::new(20, 20);
        let mut map = ramp_map(origin, Direction::North, 24);
        let rampifier = Rampifier::default();
        rampifier.apply(&mut map, origin).unwrap();
        let once = map.clone();

        let report = rampifier.apply(&mut map, origin).unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.already_present(), 12);
        assert_eq!(map, once);
    }

    #[test]
    fn ineligible_tile_is_untouched() {
        let origin = TileCoords::new(20, 20);
        let mut map = GridMap::new(MapSize::new(64, 64)).with_tile(
            origin,
            vec![
                SurfaceElement::new(Elevation(16), Slope(0b1010)).into(),
                PathElement::new(Elevation(16), 4, STYLE)
                    .sloped(Direction::West)
                    .into(),
            ],
        );
        let before = map.clone();
        assert_eq!(Rampifier::default().apply(&mut map, origin), None);
        assert_eq!(map, before);
    }

    #[test]
    fn near_edge_is_untouched() {
        let origin = TileCoords::new(1, 20);
        let mut map = ramp_map(origin, Direction::West, 16);
        let before = map.clone();
        assert_eq!(Rampifier::default().apply(&mut map, origin), None);
        assert_eq!(map, before);
    }

    #[test]
    fn corners_next_to_the_ramp() {
        let origin = TileCoords::new(20, 20);
        let mut top = PathElement::new(Elevation(18), 4, STYLE);
        top.edges = Edges::EAST | Edges::NORTH;
        top.corners = Corners::empty();
        let mut bottom = PathElement::new(Elevation(16), 4, STYLE);
        bottom.edges = Edges::WEST | Edges::SOUTH;
        bottom.corners = Corners::empty();
        let mut map = ramp_map(origin, Direction::West, 16)
            .with_tile(TileCoords::new(19, 20), vec![top.into()])
            .with_tile(TileCoords::new(21, 20), vec![bottom.into()]);

        let report = Rampifier::default().apply(&mut map, origin).unwrap();
        assert_eq!(report.corners.top, Corners::EAST);
        assert_eq!(report.corners.bottom, Corners::WEST);
    }

    #[test]
    fn corner_filling_can_be_disabled() {
        let origin = TileCoords::new(20, 20);
        let mut top = PathElement::new(Elevation(18), 4, STYLE);
        top.corners = Corners::empty();
        let mut map = ramp_map(origin, Direction::West, 16)
            .with_tile(TileCoords::new(19, 20), vec![top.into()]);

        let rampifier = Rampifier::new(RampConfig {
            fill_corners: false,
            ..Default::default()
        })
        .unwrap();
        let report = rampifier.apply(&mut map, origin).unwrap();
        assert_eq!(report.corners.count(), 0);
        let top = map.tile(TileCoords::new(19, 20)).footpaths().next().unwrap();
        assert_eq!(top.corners, Corners::empty());
    }

    #[test]
    fn margins_narrower_than_the_ramp_are_refused() {
        let narrow = RampConfig {
            edge_margin_along: 0,
            edge_margin_across: 0,
            ..Default::default()
        };
        assert!(Rampifier::new(narrow).is_err());

        let huge_shift = RampConfig {
            world_tile_shift: 40,
            ..Default::default()
        };
        assert!(Rampifier::new(huge_shift).is_err());
    }

    #[test]
    fn tile_from_world_units() {
        let rampifier = Rampifier::default();
        assert_eq!(rampifier.tile_at(655, 640), TileCoords::new(20, 20));
    }
}
