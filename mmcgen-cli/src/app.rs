use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mmcgen::config::DEFAULT_INDENT_WIDTH;

/// mmcgen - MovieLabs MMC v1.5 manifest generation from CSV asset sheets
#[derive(Debug, Parser)]
#[command(name = "mmcgen", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a manifest from a CSV sheet (one Root row plus track rows).
    Generate {
        /// Path to the CSV file. The header row names the columns.
        #[arg(value_name = "CSV")]
        path: PathBuf,

        /// Write the manifest to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Reject duplicate Root rows and rows with an unknown Type.
        #[arg(long)]
        strict: bool,

        /// Spaces per indentation level.
        #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
        indent: usize,
    },

    /// Check that an XML file is namespace-well-formed.
    Validate {
        /// Path to the XML file.
        #[arg(value_name = "XML")]
        path: PathBuf,
    },

    /// List the tracks a CSV sheet describes, after partitioning.
    Tracks {
        /// Path to the CSV file.
        #[arg(value_name = "CSV")]
        path: PathBuf,

        /// Reject duplicate Root rows and rows with an unknown Type.
        #[arg(long)]
        strict: bool,
    },
}
