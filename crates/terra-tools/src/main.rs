//! Offline extraction tools for terra-engine maps.
//!
//! # Usage
//!
//! ```bash
//! # Neighbor constraints seen across authored maps
//! terra-tools constraints level1.json level2.json
//!
//! # Transition table, written to a file
//! terra-tools transitions groups.json level1.json level2.json -o transitions.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use terra_engine::{ConstraintExtractor, MapDesc, TileGrid, TileGroups, TileGroupsDesc, TransitionExtractor};

#[derive(Parser)]
#[command(name = "terra-tools")]
#[command(about = "Extract constraint and transition tables from authored tile maps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the JSON result to a file instead of stdout
    #[arg(long, short = 'o', global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Per tile graphic, the graphics seen in each of the 8 directions
    Constraints {
        /// Map files (JSON)
        #[arg(required = true)]
        maps: Vec<PathBuf>,
    },

    /// Transition shapes and the tile graphics used for them
    Transitions {
        /// Tile group file (JSON)
        groups: PathBuf,

        /// Map files (JSON)
        #[arg(required = true)]
        maps: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let json = match cli.command {
        Commands::Constraints { maps } => {
            let grids = load_maps(&maps, &TileGroups::new())?;
            let mut extractor = ConstraintExtractor::new();
            extractor.scan_all(&grids)?;
            log::info!(
                "{} tiles scanned, {} distinct graphics",
                extractor.scanned(),
                extractor.constraints().len()
            );
            serde_json::to_string_pretty(&extractor.into_entries())?
        }
        Commands::Transitions { groups, maps } => {
            let groups = read(&groups)
                .and_then(|json| TileGroupsDesc::from_json(&json).with_context(|| format!("parsing {}", groups.display())))?
                .into_groups();
            let grids = load_maps(&maps, &groups)?;
            let mut extractor = TransitionExtractor::new();
            extractor.scan_all(&grids)?;
            log::info!("{} tiles skipped", extractor.skipped());
            extractor.into_desc().to_json()?
        }
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_maps(paths: &[PathBuf], groups: &TileGroups) -> Result<Vec<TileGrid>> {
    paths
        .iter()
        .map(|path| {
            let grid = MapDesc::from_json(&read(path)?)
                .and_then(|desc| desc.into_grid(groups))
                .with_context(|| format!("loading map {}", path.display()))?;
            log::info!("loaded {}: {} tiles", path.display(), grid.tiles_number());
            Ok(grid)
        })
        .collect()
}
