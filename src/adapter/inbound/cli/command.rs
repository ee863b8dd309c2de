//! Command-line interface definitions.
//!
//! Every flag is optional: with none, the run uses `config.toml` when present
//! and the built-in sample week otherwise.

use clap::Parser;
use std::path::PathBuf;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Shirt-color statistics and algorithm demos
#[derive(Parser, Debug)]
#[command(name = "shirtstat")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Skip saving frequencies to the database
    #[arg(long)]
    pub no_persist: bool,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}
