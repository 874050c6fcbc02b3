use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use semrel_ci::CiPlatform;
use semrel_ci::inputs::{self, get_boolean_input};

use crate::defaults::{bundled_config_path, read_default_config};
use crate::discover::find_config;

/// Resolves the release configuration for a run: the discovered project file
/// when one exists, else the bundled default when the `default-config` input
/// permits, else nothing.
pub struct ConfigLoader {
    default_config_path: PathBuf,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_config_path: bundled_config_path(),
        }
    }

    #[must_use]
    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        Self {
            default_config_path: path.into(),
        }
    }

    #[must_use]
    pub fn load(&self, platform: &dyn CiPlatform, work_dir: &Path) -> Option<Value> {
        let default_enabled = get_boolean_input(platform, &inputs::DEFAULT_CONFIG);

        if let Some(config) = find_config(work_dir) {
            return Some(config);
        }

        if default_enabled {
            info!("no config file found, using the default config");
            return Some(read_default_config(&self.default_config_path));
        }

        None
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
