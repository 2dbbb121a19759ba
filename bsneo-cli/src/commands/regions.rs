use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bsneo_core::{Region, preferred_regions};

use crate::error::CliError;

pub(crate) fn run_regions(region: Option<&str>) -> Result<(), CliError> {
    match region {
        Some(code) => {
            if Region::from_code(code.trim()).is_none() {
                log::warn!(
                    "{}",
                    format!("'{code}' is not a known region; only world and none will match")
                        .if_supports_color(Stdout, |t| t.yellow()),
                );
            }
            log::info!(
                "Preference order for {}:",
                code.if_supports_color(Stdout, |t| t.bold()),
            );
            for (i, pref) in preferred_regions(code).iter().enumerate() {
                let name = Region::from_code(pref).map(|r| r.name()).unwrap_or("");
                log::info!(
                    "  {:>2}. {} {}",
                    i + 1,
                    pref,
                    name.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
        None => {
            log::info!("Known regions:");
            for region in Region::all() {
                log::info!(
                    "  {:<6} {}",
                    region.code().if_supports_color(Stdout, |t| t.bold()),
                    region.name().if_supports_color(Stdout, |t| t.cyan()),
                );
            }
        }
    }
    Ok(())
}
