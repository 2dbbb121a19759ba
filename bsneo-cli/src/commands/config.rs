use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bsneo_lib::Settings;
use bsneo_lib::paths::default_data_root;
use bsneo_lib::settings::{self, settings_path};

use crate::error::CliError;

/// Show the settings file and every resolved value.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "bsneo Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let current = Settings::load()?;
    let defaults = Settings::default();
    let data_dir = current
        .library
        .data_dir
        .as_ref()
        .map(|p| p.display().to_string());

    let fields: &[(&str, Option<String>, String)] = &[
        (
            "export.region",
            Some(current.export.region.clone()),
            defaults.export.region.clone(),
        ),
        (
            "export.strict_region",
            Some(current.export.strict_region.to_string()),
            defaults.export.strict_region.to_string(),
        ),
        (
            "export.launch",
            current.export.launch.clone(),
            bsneo_frontend::DEFAULT_LAUNCH.to_string(),
        ),
        (
            "library.data_dir",
            data_dir,
            default_data_root().display().to_string(),
        ),
    ];

    for (name, value, default) in fields {
        match value {
            Some(v) if v != default => {
                log::info!("  {:<22} {}", name, v);
            }
            _ => {
                log::info!(
                    "  {:<22} {} {}",
                    name,
                    default,
                    "(default)".if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }

    if let Some(contents) = settings::load_settings_string() {
        log::debug!("settings.toml:\n{}", contents);
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Update one setting.
pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    settings::set_value(key, value)?;
    log::info!(
        "{} {} = {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key,
        if value.is_empty() { "(cleared)" } else { value },
    );
    Ok(())
}
