use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry of the `plugins` list in a release configuration.
///
/// Hand-written configurations are loose about plugin shapes: an entry is
/// either a bare plugin name, a `[name, config]` pair, or some other JSON
/// shape only the release engine knows what to do with. Unknown shapes are
/// carried through untouched so the engine can reject or accept them itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    Configured(String, IndexMap<String, Value>),
    Bare(String),
    Other(Value),
}

impl PluginEntry {
    /// Plugin name, when the entry has a recognizable one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Configured(name, _) => Some(name),
            Self::Bare(name) => Some(name),
            Self::Other(_) => None,
        }
    }
}
