use std::path::Path;

use serde_json::Value;
use tracing::{debug, error};

/// Configuration file names recognized in each directory, in lookup order.
/// The bare `.releaserc` may be JSON or YAML; YAML is the superset and parses
/// both.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".releaserc",
    ".releaserc.json",
    ".releaserc.yaml",
    ".releaserc.yml",
    ".releaserc.toml",
];

const PACKAGE_MANIFEST: &str = "package.json";
const PACKAGE_CONFIG_KEY: &str = "release";

/// Searches `start_dir` and its ancestors for a project release
/// configuration.
///
/// Per directory the `release` field of `package.json` wins, then the
/// `.releaserc` family in declared order. A candidate that exists but cannot
/// be read or parsed is logged and skipped, so a broken file never hides a
/// valid one further up the tree.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<Value> {
    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    let mut current = Some(start.as_path());
    while let Some(dir) = current {
        if let Some(config) = config_in_dir(dir) {
            return Some(config);
        }
        current = dir.parent();
    }
    None
}

fn config_in_dir(dir: &Path) -> Option<Value> {
    let manifest = dir.join(PACKAGE_MANIFEST);
    if manifest.is_file() {
        if let Some(config) = package_manifest_config(&manifest) {
            return Some(config);
        }
    }

    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.is_file() {
            if let Some(config) = parse_config_file(&path) {
                return Some(config);
            }
        }
    }

    None
}

fn package_manifest_config(path: &Path) -> Option<Value> {
    let text = read_file(path)?;
    let manifest: Value = match serde_json::from_str(&text) {
        Ok(manifest) => manifest,
        Err(err) => {
            error!("failed to parse '{}': {err}", path.display());
            return None;
        }
    };

    match manifest.get(PACKAGE_CONFIG_KEY) {
        None | Some(Value::Null) => None,
        Some(config) => {
            debug!("found release config in '{}'", path.display());
            Some(config.clone())
        }
    }
}

fn parse_config_file(path: &Path) -> Option<Value> {
    let text = read_file(path)?;

    let parsed: Result<Value, Box<dyn std::error::Error>> =
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&text).map_err(Into::into),
            Some("toml") => toml::from_str(&text).map_err(Into::into),
            _ => serde_yml::from_str(&text).map_err(Into::into),
        };

    match parsed {
        // An empty file parses to null: treated as "nothing configured here".
        Ok(Value::Null) => None,
        Ok(config) => {
            debug!("found release config in '{}'", path.display());
            Some(config)
        }
        Err(err) => {
            error!("failed to parse '{}': {err}", path.display());
            None
        }
    }
}

fn read_file(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            error!("failed to read '{}': {err}", path.display());
            None
        }
    }
}
