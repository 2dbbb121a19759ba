//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bsneo")]
#[command(about = "Export scraped game metadata to frontend catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Export a system's scraped metadata to a Pegasus catalog
    Export {
        /// System id (e.g., nes, snes, genesis, psx)
        #[arg(short, long)]
        system: String,

        /// Catalog file to create or update (conventionally metadata.pegasus.txt).
        /// Media is copied to a `media` folder next to it.
        #[arg(short, long)]
        dest: PathBuf,

        /// Preferred media region (e.g., us, eu, jp, none)
        #[arg(long)]
        region: Option<String>,

        /// Leave out media that has no version in a preferred region
        #[arg(long, overrides_with = "no_strict_region")]
        strict_region: bool,

        /// Fall back to media of any region
        #[arg(long, overrides_with = "strict_region")]
        no_strict_region: bool,

        /// Output file names for asset slots (e.g., boxFront=boxart,logo=wheel)
        #[arg(long, value_delimiter = ',', value_name = "SLOT=NAME")]
        rename: Vec<String>,

        /// Root of the scraped metadata store
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// List systems with stored metadata
    Systems {
        /// Root of the scraped metadata store
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// List region codes, or the preference order for one region
    Regions {
        /// Region code to show the preference order for
        #[arg(long)]
        region: Option<String>,
    },

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and where they come from
    Show,

    /// Print the settings file path
    Path,

    /// Set a value (e.g., `config set export.region eu`)
    Set {
        /// Setting key (export.region, export.strict_region, export.launch, library.data_dir)
        key: String,

        /// New value; empty to clear an optional key
        value: String,
    },
}

/// Combine a `--flag` / `--no-flag` pair into an optional override.
pub(crate) fn flag_override(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
