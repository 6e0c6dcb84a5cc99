use std::{
    fmt::Display,
    ops::{Add, RangeInclusive, Sub},
};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Number of bits an elevation is shifted by when stored on an element
pub const HEIGHT_SHIFT: u32 = 3;

/// Coordinates of a tile in the map
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoords {
    pub x: i32,
    pub y: i32,
}

impl TileCoords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile containing a point given in world units
    pub fn from_world(x: i32, y: i32, tile_shift: u32) -> Self {
        Self::new(x >> tile_shift, y >> tile_shift)
    }

    /// Move `amount` tiles towards `direction`, a negative amount going the other way
    pub fn travel(self, direction: Direction, amount: i32) -> Self {
        let delta = direction.delta();
        Self::new(self.x + delta.x * amount, self.y + delta.y * amount)
    }
}

impl Add<TileCoords> for TileCoords {
    type Output = TileCoords;

    fn add(self, rhs: TileCoords) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Display for TileCoords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Height in the engine's own unit
///
/// Elements persist it shifted left by [`HEIGHT_SHIFT`].
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Elevation(pub i32);

impl Elevation {
    pub fn from_raw(z: i32) -> Self {
        Self(z >> HEIGHT_SHIFT)
    }

    pub fn to_raw(self) -> i32 {
        self.0 << HEIGHT_SHIFT
    }
}

impl Add<i32> for Elevation {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i32> for Elevation {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Display for Elevation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile and the elevation a footpath should exist at
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub coords: TileCoords,
    pub elevation: Elevation,
}

impl Placement {
    pub fn new(coords: TileCoords, elevation: Elevation) -> Self {
        Self { coords, elevation }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.coords.x, self.coords.y, self.elevation)
    }
}

/// Size of the map in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub x: u32,
    pub y: u32,
}

impl MapSize {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(0..=(self.x as i32 - 1), 0..=(self.y as i32 - 1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: RangeInclusive<i32>,
    pub y: RangeInclusive<i32>,
}

impl BoundingBox {
    pub fn new(x: RangeInclusive<i32>, y: RangeInclusive<i32>) -> Self {
        Self { x, y }
    }

    pub fn contains(&self, coords: TileCoords) -> bool {
        self.x.contains(&coords.x) && self.y.contains(&coords.y)
    }

    /// Remove `margin_x` tiles from both x ends and `margin_y` from both y ends
    fn shrunk(&self, margin_x: i32, margin_y: i32) -> Self {
        Self::new(
            (self.x.start() + margin_x)..=(self.x.end() - margin_x),
            (self.y.start() + margin_y)..=(self.y.end() - margin_y),
        )
    }

    /// Shrink by `along` on the axis `direction` travels and by `across` on the other one
    pub fn shrunk_along(&self, direction: Direction, along: i32, across: i32) -> Self {
        if direction.is_horizontal() {
            self.shrunk(along, across)
        } else {
            self.shrunk(across, along)
        }
    }
}
