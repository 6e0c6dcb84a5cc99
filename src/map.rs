//! World access for the ramp engine, and an in-memory map implementing it

use crate::{
    coords::{MapSize, TileCoords},
    tile::{Tile, TileElement},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static EMPTY_TILE: Tile = Tile::empty();

/// Everything the engine needs from the host's map
///
/// Tiles are always returned, an empty one standing for nothing stored.
pub trait World {
    fn size(&self) -> MapSize;

    fn tile(&self, coords: TileCoords) -> &Tile;

    fn tile_mut(&mut self, coords: TileCoords) -> &mut Tile;

    /// Insert an element at a stacking position of a tile
    fn insert_element(
        &mut self,
        coords: TileCoords,
        index: usize,
        element: TileElement,
    ) -> &mut TileElement {
        self.tile_mut(coords).insert_element(index, element)
    }
}

/// Map stored as sparse tiles
#[derive(Debug, Clone)]
pub struct GridMap {
    size: MapSize,
    tiles: HashMap<TileCoords, Tile>,
}

impl GridMap {
    pub fn new(size: MapSize) -> Self {
        Self {
            size,
            tiles: HashMap::new(),
        }
    }

    pub fn with_tile(mut self, coords: TileCoords, elements: Vec<TileElement>) -> Self {
        self.tiles.insert(coords, Tile::new(elements));
        self
    }

    /// Non empty tiles, ordered by coordinates
    pub fn tiles(&self) -> impl Iterator<Item = (&TileCoords, &Tile)> {
        self.tiles
            .iter()
            .filter(|(_, tile)| !tile.is_empty())
            .sorted_by_key(|(coords, _)| (coords.y, coords.x))
    }
}

impl World for GridMap {
    fn size(&self) -> MapSize {
        self.size
    }

    fn tile(&self, coords: TileCoords) -> &Tile {
        self.tiles.get(&coords).unwrap_or(&EMPTY_TILE)
    }

    fn tile_mut(&mut self, coords: TileCoords) -> &mut Tile {
        self.tiles.entry(coords).or_default()
    }
}

/// Maps are equal when their non empty tiles are
impl PartialEq for GridMap {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles().eq(other.tiles())
    }
}

impl Eq for GridMap {}

/// Serialized form of a [`GridMap`]
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapFile {
    pub size: MapSize,
    #[serde(default)]
    pub tiles: Vec<TileEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileEntry {
    pub x: i32,
    pub y: i32,
    pub elements: Tile,
}

impl From<MapFile> for GridMap {
    fn from(value: MapFile) -> Self {
        let mut map = GridMap::new(value.size);
        for entry in value.tiles {
            map.tile_mut(TileCoords::new(entry.x, entry.y))
                .extend(entry.elements.iter().cloned());
        }
        map
    }
}

impl From<&GridMap> for MapFile {
    fn from(value: &GridMap) -> Self {
        Self {
            size: value.size,
            tiles: value
                .tiles()
                .map(|(coords, tile)| TileEntry {
                    x: coords.x,
                    y: coords.y,
                    elements: tile.clone(),
                })
                .collect(),
        }
    }
}
