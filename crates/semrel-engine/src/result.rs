use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured result returned by the release engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseResult {
    pub last_release: LastRelease,
    pub next_release: NextRelease,
    /// Commits included in the release; opaque to the wrapper, which only
    /// counts and republishes them.
    pub commits: Vec<Value>,
}

/// The release preceding this run. Entirely empty on a first release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastRelease {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NextRelease {
    pub version: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub release_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_engine_result() {
        let result: ReleaseResult = serde_json::from_value(json!({
            "lastRelease": {
                "version": "1.1.0",
                "gitHead": "abc123",
                "gitTag": "v1.1.0"
            },
            "nextRelease": {
                "version": "1.2.0",
                "type": "minor",
                "channel": "latest",
                "gitHead": "def456",
                "gitTag": "v1.2.0",
                "name": "v1.2.0",
                "notes": "## Features\n- things"
            },
            "commits": [{ "message": "feat: things" }]
        }))
        .expect("should parse");

        assert_eq!(result.last_release.version.as_deref(), Some("1.1.0"));
        assert_eq!(result.next_release.version, "1.2.0");
        assert_eq!(result.next_release.release_type.as_deref(), Some("minor"));
        assert_eq!(result.commits.len(), 1);
    }

    #[test]
    fn tolerates_missing_last_release() {
        let result: ReleaseResult = serde_json::from_value(json!({
            "nextRelease": { "version": "1.0.0", "type": "major" },
            "commits": []
        }))
        .expect("should parse");

        assert_eq!(result.last_release, LastRelease::default());
        assert!(result.last_release.version.is_none());
    }

    #[test]
    fn tolerates_unknown_fields() {
        let result: ReleaseResult = serde_json::from_value(json!({
            "nextRelease": { "version": "2.0.0", "somethingNew": true },
            "releases": [{ "pluginName": "@semantic-release/github" }]
        }))
        .expect("should parse");

        assert_eq!(result.next_release.version, "2.0.0");
    }
}
