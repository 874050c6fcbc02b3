use serde_json::Value;
use tracing::{debug, error};

use semrel_ci::CiPlatform;
use semrel_ci::inputs::{self, get_boolean_input};
use semrel_core::PluginEntry;
use semrel_presets::{preset_config, release_rules};

/// Sub-configuration keys a known plugin needs populated for its preset to
/// take full effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequiredKey {
    PresetConfig,
    ReleaseRules,
}

impl RequiredKey {
    fn key(self) -> &'static str {
        match self {
            Self::PresetConfig => "presetConfig",
            Self::ReleaseRules => "releaseRules",
        }
    }

    /// Registry lookup for this key. An unknown preset yields an explicit
    /// `null`, mirroring the registries' never-fail contract.
    fn lookup(self, preset: &str) -> Value {
        let value = match self {
            Self::PresetConfig => {
                preset_config(preset).and_then(|config| serde_json::to_value(config).ok())
            }
            Self::ReleaseRules => {
                release_rules(preset).and_then(|rules| serde_json::to_value(rules).ok())
            }
        };
        value.unwrap_or(Value::Null)
    }
}

/// Plugins eligible for preset injection, with the keys each one requires.
const INJECTABLE_PLUGINS: &[(&str, &[RequiredKey])] = &[
    (
        "@semantic-release/commit-analyzer",
        &[RequiredKey::PresetConfig, RequiredKey::ReleaseRules],
    ),
    (
        "@semantic-release/release-notes-generator",
        &[RequiredKey::PresetConfig],
    ),
];

fn required_keys(plugin: &str) -> Option<&'static [RequiredKey]> {
    INJECTABLE_PLUGINS
        .iter()
        .find(|(name, _)| *name == plugin)
        .map(|(_, keys)| *keys)
}

/// A present value that should still be treated as missing: `null` and
/// structurally empty values get filled, anything else is caller-supplied and
/// must not be overwritten.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Extracts the plugin list from the configuration, filling preset-derived
/// defaults into eligible entries unless `default-preset-info` is disabled.
///
/// An entry is eligible only when it is a `[name, config]` pair, the name is
/// a known plugin, and the config carries a `preset` key. Everything else
/// passes through untouched.
#[must_use]
pub fn get_plugins(platform: &dyn CiPlatform, config: Option<&Value>) -> Vec<PluginEntry> {
    let Some(config) = config else {
        error!("no config provided");
        return Vec::new();
    };

    let plugins = match config.get("plugins") {
        None => Vec::new(),
        Some(value) => match serde_json::from_value::<Vec<PluginEntry>>(value.clone()) {
            Ok(plugins) => plugins,
            Err(err) => {
                error!("unusable plugins list in config: {err}");
                Vec::new()
            }
        },
    };

    if !get_boolean_input(platform, &inputs::DEFAULT_PRESET_INFO) {
        debug!(
            "plugins: {}",
            serde_json::to_string(&plugins).unwrap_or_default()
        );
        return plugins;
    }

    plugins.into_iter().map(inject_preset_defaults).collect()
}

fn inject_preset_defaults(entry: PluginEntry) -> PluginEntry {
    match entry {
        PluginEntry::Configured(name, mut config) => {
            let Some(keys) = required_keys(&name) else {
                return PluginEntry::Configured(name, config);
            };
            if !config.contains_key("preset") {
                return PluginEntry::Configured(name, config);
            }

            let preset = config
                .get("preset")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            for key in keys {
                if config.get(key.key()).is_none_or(is_empty_value) {
                    config.insert(key.key().to_string(), key.lookup(&preset));
                }
            }

            PluginEntry::Configured(name, config)
        }
        other => other,
    }
}
