//! Tile element stacks
mod elements;

pub use elements::ElementsExt;

use crate::{
    coords::Elevation,
    direction::{Corners, Direction, Edges},
    slope::Slope,
};
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

/// Ground surface of a tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceElement {
    pub base_z: i32,
    pub slope: Slope,
    #[serde(default)]
    pub hidden: bool,
}

/// Visual style of a footpath, copied as is onto synthesized footpaths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStyle {
    pub surface_object: u32,
    pub railings_object: u32,
}

/// A walkable footpath segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    pub base_z: i32,
    pub clearance_z: i32,
    /// Only set for sloped footpaths
    #[serde(default)]
    pub slope_direction: Option<Direction>,
    pub edges: Edges,
    pub corners: Corners,
    pub style: PathStyle,
    #[serde(default)]
    pub hidden: bool,
}

/// Anything else sitting on a tile (scenery, walls, ...), carried untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherElement {
    pub kind: String,
    pub base_z: i32,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileElement {
    Surface(SurfaceElement),
    Footpath(PathElement),
    Other(OtherElement),
}

impl SurfaceElement {
    pub fn new(base_height: Elevation, slope: Slope) -> Self {
        Self {
            base_z: base_height.to_raw(),
            slope,
            hidden: false,
        }
    }

    pub fn base_height(&self) -> Elevation {
        Elevation::from_raw(self.base_z)
    }
}

impl PathElement {
    /// A footpath connected on every side with every corner filled
    pub fn new(base_height: Elevation, clearance: i32, style: PathStyle) -> Self {
        let base_z = base_height.to_raw();
        Self {
            base_z,
            clearance_z: base_z + (Elevation(clearance).to_raw()),
            slope_direction: None,
            edges: Edges::all(),
            corners: Corners::all(),
            style,
            hidden: false,
        }
    }

    pub fn sloped(mut self, direction: Direction) -> Self {
        self.slope_direction = Some(direction);
        self
    }

    pub fn base_height(&self) -> Elevation {
        Elevation::from_raw(self.base_z)
    }
}

impl TileElement {
    pub fn is_hidden(&self) -> bool {
        match self {
            TileElement::Surface(surface) => surface.hidden,
            TileElement::Footpath(path) => path.hidden,
            TileElement::Other(other) => other.hidden,
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        match self {
            TileElement::Surface(surface) => surface.hidden = hidden,
            TileElement::Footpath(path) => path.hidden = hidden,
            TileElement::Other(other) => other.hidden = hidden,
        }
    }

    pub fn base_z(&self) -> i32 {
        match self {
            TileElement::Surface(surface) => surface.base_z,
            TileElement::Footpath(path) => path.base_z,
            TileElement::Other(other) => other.base_z,
        }
    }
}

impl From<SurfaceElement> for TileElement {
    fn from(value: SurfaceElement) -> Self {
        TileElement::Surface(value)
    }
}

impl From<PathElement> for TileElement {
    fn from(value: PathElement) -> Self {
        TileElement::Footpath(value)
    }
}

impl From<OtherElement> for TileElement {
    fn from(value: OtherElement) -> Self {
        TileElement::Other(value)
    }
}

/// Ordered stack of the elements of a tile, index 0 first
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile {
    elements: Vec<TileElement>,
}

impl Tile {
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn new(elements: Vec<TileElement>) -> Self {
        Self { elements }
    }

    /// Insert at a stacking position, clamped to the stack size
    pub fn insert_element(&mut self, index: usize, element: TileElement) -> &mut TileElement {
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
        &mut self.elements[index]
    }
}
