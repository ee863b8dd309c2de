//! Infrastructure configuration modules.

pub mod database;
pub mod logging;
pub mod settings;
pub mod survey;

pub use settings::Config;
