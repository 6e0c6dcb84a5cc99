//! Ramp synthesis settings
use crate::layout::{REACH_ACROSS, REACH_ALONG};
use anyhow::{ensure, Context, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::Path;

static DEFAULT_BYTES: &[u8] = include_bytes!("../assets/ramp.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RampConfig {
    /// Tiles kept free from the map edge on the axis of the slope
    pub edge_margin_along: i32,
    /// Tiles kept free from the map edge on the other axis
    pub edge_margin_across: i32,
    /// Height of synthesized footpaths above their base
    pub clearance_height: i32,
    /// log2 of the size of a tile in world units
    pub world_tile_shift: u32,
    pub fill_corners: bool,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            edge_margin_along: 3,
            edge_margin_across: 4,
            clearance_height: 4,
            world_tile_shift: 5,
            fill_corners: true,
        }
    }
}

impl RampConfig {
    pub fn from_yaml(bytes: &[u8]) -> Result<Self> {
        let config: Self = serde_yaml::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Margins must keep every placement of a ramp inside the map
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.edge_margin_along >= REACH_ALONG,
            "edge_margin_along must be at least {REACH_ALONG}, got {}",
            self.edge_margin_along
        );
        ensure!(
            self.edge_margin_across >= REACH_ACROSS,
            "edge_margin_across must be at least {REACH_ACROSS}, got {}",
            self.edge_margin_across
        );
        ensure!(
            self.world_tile_shift < i32::BITS,
            "world_tile_shift must be below {}, got {}",
            i32::BITS,
            self.world_tile_shift
        );
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.to_string_lossy()))?;
        Self::from_yaml(&bytes)
            .with_context(|| format!("Invalid configuration {}", path.to_string_lossy()))
    }
}

lazy_static! {
    pub static ref DEFAULT_CONFIG: RampConfig =
        RampConfig::from_yaml(DEFAULT_BYTES).expect("Invalid embedded ramp.yaml");
}
