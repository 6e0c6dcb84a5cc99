use crate::{coords::TileCoords, error::RampError};
use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::ops::Add;
use strum::{Display, EnumIter};

/// One of the four flat grid directions
///
/// The discriminant is the raw value used by the host. Turning right adds
/// one modulo 4, north being towards decreasing y.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[num_enum(error_type(name = RampError, constructor = RampError::InvalidDirection))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    West,
    South,
    East,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::North,
    ];

    /// Return a copy turned right amount times
    pub fn rotated_by(self, amount: u8) -> Self {
        let index: u8 = self.into();
        Self::ALL[((index + amount % 4) % 4) as usize]
    }

    pub fn right(self) -> Self {
        self.rotated_by(1)
    }

    pub fn left(self) -> Self {
        self.rotated_by(3)
    }

    pub fn reversed(self) -> Self {
        self.rotated_by(2)
    }

    /// Unit step on the grid
    pub fn delta(self) -> TileCoords {
        match self {
            Direction::West => TileCoords::new(-1, 0),
            Direction::South => TileCoords::new(0, 1),
            Direction::East => TileCoords::new(1, 0),
            Direction::North => TileCoords::new(0, -1),
        }
    }

    /// Single bit identifying the side of a tile facing this direction
    pub fn edge_bit(self) -> u8 {
        let index: u8 = self.into();
        1 << index
    }

    /// True if the direction travels along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::West | Direction::East)
    }
}

impl Add<Direction> for TileCoords {
    type Output = TileCoords;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.delta()
    }
}

bitflags! {
    /// A set of tile sides (or corners), one bit per direction
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DirectionMask: u8 {
        const WEST = 0b0001;
        const SOUTH = 0b0010;
        const EAST = 0b0100;
        const NORTH = 0b1000;
    }
}

/// Which sides of a footpath connect to a neighbouring footpath
pub type Edges = DirectionMask;

/// Which corners of a footpath are rendered filled
pub type Corners = DirectionMask;

impl DirectionMask {
    pub fn from_direction(direction: Direction) -> Self {
        Self::from_bits_truncate(direction.edge_bit())
    }

    pub fn has(&self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.insert(Self::from_direction(direction));
    }
}

impl From<Direction> for DirectionMask {
    fn from(value: Direction) -> Self {
        Self::from_direction(value)
    }
}
