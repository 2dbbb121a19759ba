use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bsneo_core::MetadataSource;
use bsneo_lib::paths::{resolve_data_root, stored_systems};
use bsneo_lib::{MetadataDir, Settings};

use crate::error::CliError;

pub(crate) fn run_systems(data_dir: Option<PathBuf>) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let root = resolve_data_root(data_dir, &settings);
    let systems = stored_systems(&root)?;

    if systems.is_empty() {
        log::info!(
            "No stored metadata in {}",
            root.display().if_supports_color(Stdout, |t| t.cyan()),
        );
        return Ok(());
    }

    log::info!(
        "Stored systems in {}:",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    for platform in systems {
        let games = match MetadataDir::new(&root, platform.id()).game_ids() {
            Ok(ids) => format!("{} games", ids.len()),
            Err(e) => format!("unreadable: {e}"),
        };
        log::info!(
            "  {} [{}] {}",
            platform.id().if_supports_color(Stdout, |t| t.bold()),
            platform.display_name().if_supports_color(Stdout, |t| t.cyan()),
            games.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}
