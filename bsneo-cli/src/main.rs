//! bsneo CLI
//!
//! Command-line interface for exporting scraped game metadata to frontend
//! catalogs.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction, flag_override};
use commands::config::{run_config_path, run_config_set, run_config_show};
use commands::export::run_export;
use commands::regions::run_regions;
use commands::systems::run_systems;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Export {
            system,
            dest,
            region,
            strict_region,
            no_strict_region,
            rename,
            data_dir,
        } => run_export(
            &system,
            &dest,
            region.as_deref(),
            flag_override(strict_region, no_strict_region),
            &rename,
            data_dir,
            cli.quiet,
        ),
        Commands::Systems { data_dir } => run_systems(data_dir),
        Commands::Regions { region } => run_regions(region.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(),
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::Set { key, value } => run_config_set(&key, &value),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e.if_supports_color(Stdout, |t| t.red()));
        std::process::exit(1);
    }
}

/// Install the logger used for all user-facing output.
///
/// Normal runs print bare messages at `Info`; `--quiet` raises the level to
/// `Warn`; `--verbose` lowers it to `Debug` and adds timestamps and levels.
/// `RUST_LOG` overrides the level either way.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}
