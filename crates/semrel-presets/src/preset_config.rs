use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One commit-type classification rule of a changelog preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSection {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// Changelog section mapping for a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetConfig {
    pub types: Vec<TypeSection>,
}

fn section(commit_type: &str, section: &str) -> TypeSection {
    TypeSection {
        commit_type: commit_type.to_string(),
        section: section.to_string(),
        hidden: None,
    }
}

fn hidden_section(commit_type: &str, name: &str) -> TypeSection {
    TypeSection {
        hidden: Some(true),
        ..section(commit_type, name)
    }
}

static CONVENTIONAL_COMMITS: LazyLock<PresetConfig> = LazyLock::new(|| PresetConfig {
    types: vec![
        section("feat", "Features"),
        section("fix", "Bug Fixes"),
        section("perf", "Performance Improvements"),
        section("refactor", "Code Refactoring"),
        section("revert", "Reverts"),
        hidden_section("docs", "Documentation"),
        hidden_section("test", "Tests"),
        hidden_section("ci", "Continuous Integration"),
        hidden_section("chore", "Chores"),
        hidden_section("style", "Styles"),
        hidden_section("build", "Build System"),
    ],
});

/// Looks up the bundled section mapping for a preset name.
#[must_use]
pub fn preset_config(preset: &str) -> Option<&'static PresetConfig> {
    match preset {
        "conventionalcommits" => Some(&CONVENTIONAL_COMMITS),
        _ => None,
    }
}
