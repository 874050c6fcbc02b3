//! Configuration resolution for semrel-action.
//!
//! Reconciles three layers into the options object the release engine
//! receives: CI inputs, a discoverable project configuration file, and the
//! bundled default configuration. Resolution never fails: missing or broken
//! configuration degrades with a log line, per the action's error contract.

mod defaults;
mod discover;
mod loader;
mod options;
mod plugins;

pub use defaults::{DEFAULT_CONFIG_FILE, bundled_config_path, parse_input, read_default_config};
pub use discover::find_config;
pub use loader::ConfigLoader;
pub use options::get_options;
pub use plugins::get_plugins;
