use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info};

/// File name of the bundled default configuration, shipped alongside the
/// installed binary.
pub const DEFAULT_CONFIG_FILE: &str = ".releaserc.default";

/// Locates the bundled default configuration next to the running executable.
#[must_use]
pub fn bundled_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map_or_else(
            || PathBuf::from(DEFAULT_CONFIG_FILE),
            |dir| dir.join(DEFAULT_CONFIG_FILE),
        )
}

/// Reads and parses the bundled default configuration.
///
/// A read failure is logged and degrades to the empty mapping. Content that
/// is not valid JSON degrades to the raw string, leaving rejection to the
/// engine's own diagnostics.
#[must_use]
pub fn read_default_config(path: &Path) -> Value {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_input(&text),
        Err(err) => {
            error!(
                "error reading the default config file '{}': {err}",
                path.display()
            );
            Value::Object(serde_json::Map::new())
        }
    }
}

/// Parses a JSON input string, falling back to the raw string when parsing
/// fails.
#[must_use]
pub fn parse_input(input: &str) -> Value {
    info!("parsing input: {input}");
    match serde_json::from_str(input) {
        Ok(value) => value,
        Err(err) => {
            error!("error parsing input: {err}");
            Value::String(input.to_string())
        }
    }
}
