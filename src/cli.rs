use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rampify::{
    config::{RampConfig, DEFAULT_CONFIG},
    layout::ramp_layout,
    map::{GridMap, MapFile},
    Direction, Elevation, Rampifier, TileCoords,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file overriding the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// A tile of a map file
#[derive(Args)]
pub struct Selection {
    /// Map file
    #[arg(long)]
    world: PathBuf,
    #[arg(long, allow_hyphen_values = true)]
    x: i32,
    #[arg(long, allow_hyphen_values = true)]
    y: i32,
    /// Coordinates are in world units rather than tiles
    #[arg(long)]
    world_units: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the footpaths a ramp needs
    Layout {
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
        /// Down-slope direction of the ramp
        #[arg(long, value_enum)]
        direction: Direction,
        /// Height of the ramp footpath
        #[arg(long, allow_hyphen_values = true)]
        elevation: i32,
    },
    /// Check whether a tile can become a ramp
    Preview {
        #[command(flatten)]
        selection: Selection,
    },
    /// Build a ramp and save the map
    Apply {
        #[command(flatten)]
        selection: Selection,
        /// Destination file, the input map if omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run_cli_command(command: Command, config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => RampConfig::load(&path)?,
        None => DEFAULT_CONFIG.clone(),
    };
    let rampifier = Rampifier::new(config)?;
    match command {
        Command::Layout {
            x,
            y,
            direction,
            elevation,
        } => layout(TileCoords::new(x, y), direction, Elevation(elevation)),
        Command::Preview { selection } => preview(&rampifier, selection),
        Command::Apply { selection, output } => apply(&rampifier, selection, output),
    }
}

fn layout(origin: TileCoords, direction: Direction, elevation: Elevation) -> Result<()> {
    for placement in ramp_layout(origin, direction, elevation) {
        println!("{placement}");
    }
    Ok(())
}

fn preview(rampifier: &Rampifier, selection: Selection) -> Result<()> {
    let map = read_map(&selection.world)?;
    let coords = selection.coords(rampifier);
    if rampifier.preview(&map, coords) {
        println!("{coords} is a valid ramp origin");
    } else {
        println!("{coords} is not a valid ramp origin");
    }
    Ok(())
}

fn apply(rampifier: &Rampifier, selection: Selection, output: Option<PathBuf>) -> Result<()> {
    let mut map = read_map(&selection.world)?;
    let coords = selection.coords(rampifier);
    let Some(report) = rampifier.apply(&mut map, coords) else {
        println!("{coords} is not a valid ramp origin, nothing changed");
        return Ok(());
    };

    let destination = output.unwrap_or(selection.world);
    write_map(&map, &destination)?;
    println!(
        "Ramp at {} going {}: {} footpaths added, {} already there, {} corners filled",
        report.origin,
        report.direction,
        report.inserted,
        report.already_present(),
        report.corners.count()
    );
    println!("Sucessfully saved to {}", destination.to_string_lossy());
    Ok(())
}

impl Selection {
    fn coords(&self, rampifier: &Rampifier) -> TileCoords {
        if self.world_units {
            rampifier.tile_at(self.x, self.y)
        } else {
            TileCoords::new(self.x, self.y)
        }
    }
}

fn read_map(path: &Path) -> Result<GridMap> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.to_string_lossy()))?;
    let file: MapFile = serde_yaml::from_slice(&bytes)
        .with_context(|| format!("Invalid map file {}", path.to_string_lossy()))?;
    Ok(file.into())
}

fn write_map(map: &GridMap, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.to_string_lossy()))?;
    serde_yaml::to_writer(file, &MapFile::from(map))?;
    Ok(())
}
