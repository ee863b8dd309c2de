//! Handler for a full run.

use tracing::info;

use super::command::{Cli, DEFAULT_CONFIG_PATH};
use super::output;
use crate::app::App;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Resolve the configuration named by `cli`.
///
/// An explicit `--config` must exist; the default path may be absent.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    }
}

/// Run the analysis and print the report to stdout.
///
/// # Errors
///
/// Returns an error if a statistic is undefined for the configured input
/// or the report cannot be serialized.
pub fn execute(cli: &Cli, config: Config) -> Result<()> {
    output::configure_color(cli.color);

    let app = App::new(config);
    info!(
        observations = app.config().survey.observations.len(),
        persist = !cli.no_persist && app.config().database.enabled,
        "shirtstat starting"
    );
    let report = app.run(!cli.no_persist)?;

    if cli.json {
        println!("{}", output::render_json(&report)?);
    } else {
        print!("{}", output::render_text(&report));
    }
    Ok(())
}
