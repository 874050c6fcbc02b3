//! Action input descriptors and accessors.
//!
//! Every recognized input is declared once with its default; resolution never
//! fails, because an absent optional input is not an error. When the action
//! runs on the alternate runner (Gitea), input variables carry translated
//! names: spaces and hyphens become underscores and the name is upper-cased
//! before lookup.

use tracing::{info, warn};

use crate::platform::CiPlatform;

/// Descriptor of a boolean action input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolInput {
    pub name: &'static str,
    pub required: bool,
    pub default: bool,
}

/// Descriptor of a string action input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringInput {
    pub name: &'static str,
    pub required: bool,
    pub default: &'static str,
}

pub const DRY_RUN: BoolInput = BoolInput {
    name: "dry-run",
    required: false,
    default: false,
};

pub const DEBUG_MODE: BoolInput = BoolInput {
    name: "debug-mode",
    required: false,
    default: true,
};

pub const CI: BoolInput = BoolInput {
    name: "ci",
    required: false,
    default: true,
};

pub const FLOATING_TAGS: BoolInput = BoolInput {
    name: "floating-tags",
    required: false,
    default: false,
};

pub const ADD_SUMMARY: BoolInput = BoolInput {
    name: "add-summary",
    required: false,
    default: true,
};

pub const DEFAULT_CONFIG: BoolInput = BoolInput {
    name: "default-config",
    required: false,
    default: true,
};

pub const DEFAULT_PRESET_INFO: BoolInput = BoolInput {
    name: "default-preset-info",
    required: false,
    default: true,
};

pub const WORKING_PATH: StringInput = StringInput {
    name: "working-path",
    required: false,
    default: "{}",
};

fn uses_alternate_naming(platform: &dyn CiPlatform) -> bool {
    platform.env_var("CI").as_deref() == Some("true")
        && platform.env_var("GITEA_ACTIONS").as_deref() == Some("true")
}

fn lookup_name(platform: &dyn CiPlatform, name: &str) -> String {
    if uses_alternate_naming(platform) {
        name.replace([' ', '-'], "_").to_ascii_uppercase()
    } else {
        name.to_string()
    }
}

/// Resolves a string input, falling back to the declared default when the
/// platform yields nothing or the empty string.
#[must_use]
pub fn get_input(platform: &dyn CiPlatform, input: &StringInput) -> String {
    let key = lookup_name(platform, input.name);
    let value = match platform.raw_input(&key) {
        Some(raw) if !raw.is_empty() => raw,
        _ => input.default.to_string(),
    };
    info!("{}: {}", input.name, value);
    value
}

/// Resolves a boolean input. Anything that is not a case-insensitive `true`
/// or `false` degrades to the declared default.
#[must_use]
pub fn get_boolean_input(platform: &dyn CiPlatform, input: &BoolInput) -> bool {
    let key = lookup_name(platform, input.name);
    let value = match platform.raw_input(&key) {
        Some(raw) if !raw.is_empty() => match raw.to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => {
                warn!(
                    "input '{}' has non-boolean value '{raw}', using default",
                    input.name
                );
                input.default
            }
        },
        _ => input.default,
    };
    info!("{}: {}", input.name, value);
    value
}
