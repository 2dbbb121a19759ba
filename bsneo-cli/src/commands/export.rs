use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bsneo_core::{ExportProgress, Platform};
use bsneo_frontend::{CatalogFormat, ExportOptions, PegasusFormat};
use bsneo_lib::paths::resolve_data_root;
use bsneo_lib::settings::{resolve_region, resolve_strict_region};
use bsneo_lib::{MetadataDir, Settings};

use crate::error::CliError;

pub(crate) fn run_export(
    system: &str,
    dest: &Path,
    region: Option<&str>,
    strict_region: Option<bool>,
    renames: &[String],
    data_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let platform: Platform = system
        .parse()
        .map_err(|_| CliError::unknown_system(system))?;
    let settings = Settings::load()?;
    let region = resolve_region(region, &settings)?;
    let strict = resolve_strict_region(strict_region, &settings);
    let renames = parse_renames(renames)?;

    let root = resolve_data_root(data_dir, &settings);
    let source = MetadataDir::new(&root, platform.id());
    if !source.path().is_dir() {
        return Err(CliError::other(format!(
            "No stored metadata for {} in {}",
            platform.id(),
            root.display()
        )));
    }

    let mut options = ExportOptions::new().region(region).strict_region(strict);
    options.renames = renames;
    if let Some(launch) = settings.export.launch.clone() {
        options = options.launch(launch);
    }
    let format = PegasusFormat::new(options);

    log::info!(
        "Exporting {} to {}",
        platform.display_name().if_supports_color(Stdout, |t| t.bold()),
        dest.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "{}",
        format!(
            "Region: {} ({}), strict: {}",
            region.code(),
            region.name(),
            if strict { "yes" } else { "no" }
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );

    // Set up progress bar (hidden in quiet mode)
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    };

    let progress_callback = |progress: ExportProgress| match progress {
        ExportProgress::ReadingCatalog => {
            pb.set_message("Reading existing catalog");
        }
        ExportProgress::CatalogLoaded { existing } => {
            pb.suspend(|| {
                if existing {
                    log::info!("Existing catalog found, merging new data");
                } else {
                    log::info!("No existing catalog, creating a new one");
                }
            });
        }
        ExportProgress::GameStarted { index, total, id } => {
            pb.set_length(total as u64);
            pb.set_position(index as u64);
            pb.set_message(id);
        }
        ExportProgress::AssetSkipped { id, slot } => {
            log::debug!("{}: no {} in a preferred region", id, slot);
        }
        ExportProgress::AssetCopyFailed { id, slot, reason } => {
            pb.suspend(|| {
                log::warn!(
                    "  {} {} ({}): {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    id,
                    slot,
                    reason,
                );
            });
        }
        ExportProgress::GameFailed { id, reason } => {
            pb.suspend(|| {
                log::warn!(
                    "  {} Skipping {}: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    id,
                    reason,
                );
            });
        }
        ExportProgress::GameMerged { id, created } => {
            log::debug!("{} {}", if created { "Added" } else { "Updated" }, id);
        }
        ExportProgress::Writing { path } => {
            pb.set_message(format!("Writing {}", path.display()));
        }
        ExportProgress::Done { .. } => {
            pb.finish_and_clear();
        }
    };

    let result = format.export_system(&source, dest, &progress_callback);
    pb.finish_and_clear();
    let summary = result?;

    log::info!(
        "{}",
        format!("{} games exported", summary.exported.len())
            .if_supports_color(Stdout, |t| t.green()),
    );
    if !summary.failures.is_empty() {
        log::warn!(
            "{}",
            format!("{} problems:", summary.failures.len())
                .if_supports_color(Stdout, |t| t.yellow()),
        );
        for failure in &summary.failures {
            log::warn!("  {}", failure);
        }
    }

    Ok(())
}

/// Parse `SLOT=NAME` rename overrides.
fn parse_renames(items: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    let mut renames = BTreeMap::new();
    for item in items {
        let (slot, name) = item
            .split_once('=')
            .map(|(s, n)| (s.trim(), n.trim()))
            .filter(|(s, n)| !s.is_empty() && !n.is_empty())
            .ok_or_else(|| {
                CliError::other(format!("Invalid rename '{item}', expected SLOT=NAME"))
            })?;
        renames.insert(slot.to_string(), name.to_string());
    }
    Ok(renames)
}
