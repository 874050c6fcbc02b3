use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clean::clean_value;
use crate::plugin::PluginEntry;

/// Identity used for commits and tags when the workflow does not provide one.
pub const DEFAULT_BOT_NAME: &str = "semrel-action[bot]";
pub const DEFAULT_BOT_EMAIL: &str = "semrel-action[bot]@users.noreply.github.com";

/// Git identity handed to the release engine.
///
/// Field names serialize as the environment variable names the engine expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitCredentials {
    #[serde(rename = "GIT_AUTHOR_NAME")]
    pub author_name: String,
    #[serde(rename = "GIT_AUTHOR_EMAIL")]
    pub author_email: String,
    #[serde(rename = "GIT_COMMITTER_NAME")]
    pub committer_name: String,
    #[serde(rename = "GIT_COMMITTER_EMAIL")]
    pub committer_email: String,
}

impl Default for GitCredentials {
    fn default() -> Self {
        Self {
            author_name: DEFAULT_BOT_NAME.to_string(),
            author_email: DEFAULT_BOT_EMAIL.to_string(),
            committer_name: DEFAULT_BOT_NAME.to_string(),
            committer_email: DEFAULT_BOT_EMAIL.to_string(),
        }
    }
}

/// The options object consumed by the release engine.
///
/// Assembled once per run; `branches` stays an untyped value because entries
/// may be plain branch names or branch-rule objects, and the engine owns that
/// distinction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_format: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verify_conditions: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prepare: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publish: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub success: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fail: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_credentials: Option<GitCredentials>,
}

impl ReleaseOptions {
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Serializes into the sanitized JSON object the engine receives.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, which would indicate a bug in
    /// the option types rather than bad input.
    pub fn to_sanitized_value(&self) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        clean_value(&mut value);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_credentials_use_bot_identity() {
        let credentials = GitCredentials::default();

        assert_eq!(credentials.author_name, DEFAULT_BOT_NAME);
        assert_eq!(credentials.committer_email, DEFAULT_BOT_EMAIL);
    }

    #[test]
    fn credentials_serialize_as_env_var_names() {
        let value = serde_json::to_value(GitCredentials::default()).expect("should serialize");

        assert_eq!(value["GIT_AUTHOR_NAME"], json!(DEFAULT_BOT_NAME));
        assert_eq!(value["GIT_COMMITTER_EMAIL"], json!(DEFAULT_BOT_EMAIL));
    }

    #[test]
    fn empty_options_sanitize_to_empty_object() {
        let options = ReleaseOptions::default();

        let value = options.to_sanitized_value().expect("should serialize");

        assert_eq!(value, json!({}));
    }

    #[test]
    fn fields_serialize_in_engine_casing() {
        let options = ReleaseOptions {
            branches: Some(json!(["main"])),
            repository_url: Some("https://example.com/repo.git".into()),
            dry_run: Some(false),
            tag_format: Some("v${version}".into()),
            ..ReleaseOptions::default()
        };

        let value = options.to_sanitized_value().expect("should serialize");

        assert_eq!(value["branches"], json!(["main"]));
        assert_eq!(value["repositoryUrl"], json!("https://example.com/repo.git"));
        assert_eq!(value["dryRun"], json!(false));
        assert_eq!(value["tagFormat"], json!("v${version}"));
    }

    #[test]
    fn sanitization_drops_empty_strings_but_keeps_false() {
        let options = ReleaseOptions {
            repository_url: Some(String::new()),
            ci: Some(true),
            debug: Some(false),
            ..ReleaseOptions::default()
        };

        let value = options.to_sanitized_value().expect("should serialize");

        assert!(value.get("repositoryUrl").is_none());
        assert_eq!(value["ci"], json!(true));
        assert_eq!(value["debug"], json!(false));
    }

    #[test]
    fn is_dry_run_defaults_to_false() {
        assert!(!ReleaseOptions::default().is_dry_run());
        assert!(ReleaseOptions {
            dry_run: Some(true),
            ..ReleaseOptions::default()
        }
        .is_dry_run());
    }
}
