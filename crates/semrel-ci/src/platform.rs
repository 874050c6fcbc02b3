use crate::Result;

/// Narrow capability interface over the hosting CI platform.
///
/// The configuration pipeline and the result publisher talk to the platform
/// exclusively through this trait, so none of the core logic depends on a
/// specific runner's input or output mechanics.
pub trait CiPlatform: Send + Sync {
    /// Raw input value as stored by the platform, before any defaulting.
    fn raw_input(&self, name: &str) -> Option<String>;

    /// Variable from the platform's captured environment snapshot.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Publishes a step output for downstream workflow steps.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;

    /// Exports an environment variable to subsequent workflow steps.
    fn export_variable(&self, name: &str, value: &str) -> Result<()>;

    /// Appends a markdown fragment to the run summary.
    fn add_summary(&self, markdown: &str) -> Result<()>;

    /// Signals run failure on the platform's annotation channel.
    fn report_failure(&self, message: &str);
}
