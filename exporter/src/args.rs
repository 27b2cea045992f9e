//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ksm_core::CoincidenceStrategy;

/// Convert triangulated meshes to `.ksm` files.
#[derive(Parser, Debug)]
#[command(name = "ksm-export", version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one mesh of a glTF file to .ksm.
    Convert(ConvertArgs),
    /// Print the contents of a .ksm file.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input `.glb`, or `.gltf` with embedded buffers.
    pub input: PathBuf,

    /// Output path. Defaults to the input path with a `.ksm` extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Index of the glTF mesh to convert.
    #[arg(long)]
    pub mesh: Option<usize>,

    /// Merge normals of coincident corners.
    #[arg(long, conflicts_with = "flat")]
    pub smooth: bool,

    /// Keep per-face normals.
    #[arg(long)]
    pub flat: bool,

    /// How coincident corners are looked up.
    #[arg(long, value_enum)]
    pub coincidence: Option<CliCoincidence>,

    /// TOML settings file with an `[export]` table.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConvertArgs {
    /// The smoothing flag given on the command line, if any.
    pub fn smooth_override(&self) -> Option<bool> {
        match (self.smooth, self.flat) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("ksm"))
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The `.ksm` file to read.
    pub file: PathBuf,

    /// Number of faces to list.
    #[arg(long, default_value_t = 8)]
    pub faces: usize,
}

/// Coincidence lookup selection for the CLI and settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CliCoincidence {
    /// Compare against every earlier vertex.
    LinearScan,
    /// Bucket vertices on a grid.
    #[default]
    SpatialHash,
}

impl From<CliCoincidence> for CoincidenceStrategy {
    fn from(cli: CliCoincidence) -> Self {
        match cli {
            CliCoincidence::LinearScan => CoincidenceStrategy::LinearScan,
            CliCoincidence::SpatialHash => CoincidenceStrategy::SpatialHash,
        }
    }
}
