use serde_json::{Value, json};
use tracing::{error, info};

use semrel_ci::CiPlatform;
use semrel_ci::inputs::{self, get_boolean_input};
use semrel_core::{DEFAULT_BOT_EMAIL, DEFAULT_BOT_NAME, GitCredentials, ReleaseOptions};

use crate::plugins::get_plugins;

/// Branches released from when the configuration does not name any.
fn default_branches() -> Value {
    json!(["master", "main"])
}

/// Assembles the engine options from the discovered configuration, CI inputs,
/// and built-in defaults.
///
/// Per-field precedence: an explicit configuration value wins over a CI
/// input, which wins over the built-in default. A project's committed
/// configuration should beat ambient CI settings. A `null` in the
/// configuration counts as "not set".
#[must_use]
pub fn get_options(platform: &dyn CiPlatform, config: Option<&Value>) -> ReleaseOptions {
    let Some(config) = config else {
        error!("no config provided");
        return ReleaseOptions::default();
    };

    let dry_run_input = get_boolean_input(platform, &inputs::DRY_RUN);
    let debug_input = get_boolean_input(platform, &inputs::DEBUG_MODE);
    let ci_input = get_boolean_input(platform, &inputs::CI);

    let options = ReleaseOptions {
        branches: Some(config_value(config, "branches").unwrap_or_else(default_branches)),
        repository_url: Some(config_str(config, "repositoryUrl")),
        plugins: get_plugins(platform, Some(config)),
        ci: Some(config_bool(config, "ci").unwrap_or(ci_input)),
        debug: Some(config_bool(config, "debug").unwrap_or(debug_input)),
        dry_run: Some(config_bool(config, "dryRun").unwrap_or(dry_run_input)),
        tag_format: Some(config_str(config, "tagFormat")),
        verify_conditions: config_list(config, "verifyConditions"),
        prepare: config_list(config, "prepare"),
        publish: config_list(config, "publish"),
        success: config_list(config, "success"),
        fail: config_list(config, "fail"),
        git_credentials: Some(git_credentials(platform)),
    };

    if let Ok(sanitized) = options.to_sanitized_value() {
        info!("options: {sanitized}");
    }
    options
}

fn config_value(config: &Value, key: &str) -> Option<Value> {
    match config.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

fn config_bool(config: &Value, key: &str) -> Option<bool> {
    config.get(key).and_then(Value::as_bool)
}

fn config_str(config: &Value, key: &str) -> String {
    config
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn config_list(config: &Value, key: &str) -> Vec<Value> {
    config
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn env_or(platform: &dyn CiPlatform, name: &str, default: &str) -> String {
    platform
        .env_var(name)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Credentials resolve independently per field: each reads its own variable
/// and falls back to the fixed bot identity.
fn git_credentials(platform: &dyn CiPlatform) -> GitCredentials {
    GitCredentials {
        author_name: env_or(platform, "GIT_AUTHOR_NAME", DEFAULT_BOT_NAME),
        author_email: env_or(platform, "GIT_AUTHOR_EMAIL", DEFAULT_BOT_EMAIL),
        committer_name: env_or(platform, "GIT_COMMITTER_NAME", DEFAULT_BOT_NAME),
        committer_email: env_or(platform, "GIT_COMMITTER_EMAIL", DEFAULT_BOT_EMAIL),
    }
}
