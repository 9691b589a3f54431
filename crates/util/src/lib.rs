//! Configuration and filesystem helpers shared by the iqnav binaries.

pub mod config;
mod path_processing;

pub use config::{ConfigError, NavConfig, default_config_dir, default_log_path, default_nav_items};
pub use path_processing::expand_tilde;
