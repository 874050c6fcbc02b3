use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

/// Release action for a commit type: bump at some level, or skip the commit.
///
/// Serializes as the bump level string (`"minor"`) or the literal `false`,
/// matching the wire format the engine's commit analyzer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseAction {
    Bump(BumpLevel),
    Skip(bool),
}

impl ReleaseAction {
    pub const SKIP: Self = Self::Skip(false);

    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

/// Semantic bump rule for one commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRule {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub release: ReleaseAction,
}

fn rule(commit_type: &str, release: ReleaseAction) -> ReleaseRule {
    ReleaseRule {
        commit_type: commit_type.to_string(),
        release,
    }
}

static CONVENTIONAL_COMMITS: LazyLock<Vec<ReleaseRule>> = LazyLock::new(|| {
    vec![
        rule("feat", ReleaseAction::Bump(BumpLevel::Minor)),
        rule("fix", ReleaseAction::Bump(BumpLevel::Patch)),
        rule("perf", ReleaseAction::Bump(BumpLevel::Patch)),
        rule("refactor", ReleaseAction::Bump(BumpLevel::Patch)),
        rule("revert", ReleaseAction::Bump(BumpLevel::Patch)),
        rule("BREAKING CHANGE", ReleaseAction::Bump(BumpLevel::Major)),
        rule("chore", ReleaseAction::Bump(BumpLevel::Minor)),
        rule("docs", ReleaseAction::SKIP),
        rule("style", ReleaseAction::SKIP),
        rule("test", ReleaseAction::SKIP),
        rule("ci", ReleaseAction::SKIP),
        rule("build", ReleaseAction::SKIP),
    ]
});

/// Looks up the bundled bump rules for a preset name.
#[must_use]
pub fn release_rules(preset: &str) -> Option<&'static [ReleaseRule]> {
    match preset {
        "conventionalcommits" => Some(&CONVENTIONAL_COMMITS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule_for<'a>(rules: &'a [ReleaseRule], commit_type: &str) -> &'a ReleaseRule {
        rules
            .iter()
            .find(|r| r.commit_type == commit_type)
            .unwrap_or_else(|| panic!("no rule for '{commit_type}'"))
    }

    #[test]
    fn conventionalcommits_bump_levels() {
        let rules = release_rules("conventionalcommits").expect("bundled preset");

        assert_eq!(
            rule_for(rules, "feat").release,
            ReleaseAction::Bump(BumpLevel::Minor)
        );
        assert_eq!(
            rule_for(rules, "fix").release,
            ReleaseAction::Bump(BumpLevel::Patch)
        );
        assert_eq!(
            rule_for(rules, "BREAKING CHANGE").release,
            ReleaseAction::Bump(BumpLevel::Major)
        );
    }

    #[test]
    fn conventionalcommits_skips_docs() {
        let rules = release_rules("conventionalcommits").expect("bundled preset");

        assert!(rule_for(rules, "docs").release.is_skip());
        assert!(rule_for(rules, "ci").release.is_skip());
    }

    #[test]
    fn unknown_preset_returns_none() {
        assert!(release_rules("angular").is_none());
    }

    #[test]
    fn skip_serializes_as_false() {
        let rules = release_rules("conventionalcommits").expect("bundled preset");

        let value = serde_json::to_value(rules).expect("should serialize");
        let entries = value.as_array().expect("rules array");

        assert!(entries.contains(&json!({ "type": "feat", "release": "minor" })));
        assert!(entries.contains(&json!({ "type": "docs", "release": false })));
    }

    #[test]
    fn release_action_round_trips() {
        let minor: ReleaseAction = serde_json::from_value(json!("minor")).expect("should parse");
        let skip: ReleaseAction = serde_json::from_value(json!(false)).expect("should parse");

        assert_eq!(minor, ReleaseAction::Bump(BumpLevel::Minor));
        assert_eq!(skip, ReleaseAction::SKIP);
    }
}
