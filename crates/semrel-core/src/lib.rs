mod clean;
mod options;
mod plugin;

pub use clean::{clean_object, clean_value};
pub use options::{DEFAULT_BOT_EMAIL, DEFAULT_BOT_NAME, GitCredentials, ReleaseOptions};
pub use plugin::PluginEntry;
