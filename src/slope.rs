//! Classification of surface slopes
use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::{direction::Direction, error::RampError};

/// 4-bit code of the raised corners of a surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slope(pub u8);

/// The slopes with exactly two adjacent corners raised, and the direction they go down to
#[rustfmt::skip]
const DIAGONALS: [(Slope, Direction); 4] = [
    (Slope(0b1100), Direction::West),
    (Slope(0b1001), Direction::South),
    (Slope(0b0011), Direction::East),
    (Slope(0b0110), Direction::North),
];

impl Slope {
    pub const FLAT: Slope = Slope(0b0000);

    pub fn is_diagonal(self) -> bool {
        self.down_slope_direction().is_ok()
    }

    pub fn down_slope_direction(self) -> Result<Direction, RampError> {
        DIAGONALS
            .iter()
            .find(|(slope, _)| *slope == self)
            .map(|(_, direction)| *direction)
            .ok_or(RampError::InvalidSlope(self.0))
    }
}

impl From<Direction> for Slope {
    fn from(value: Direction) -> Self {
        DIAGONALS
            .iter()
            .find(|(_, direction)| *direction == value)
            .map(|(slope, _)| *slope)
            .unwrap_or_default()
    }
}
