//! Bundled commit-convention presets.
//!
//! Two independent read-only registries keyed by preset name: the changelog
//! section mapping (`presetConfig` on the engine side) and the semantic bump
//! rules (`releaseRules`). Both ship with the `conventionalcommits` preset;
//! an unknown name yields `None`, never an error.

mod preset_config;
mod release_rules;

pub use preset_config::{PresetConfig, TypeSection, preset_config};
pub use release_rules::{BumpLevel, ReleaseAction, ReleaseRule, release_rules};
