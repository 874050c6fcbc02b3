mod command;
mod error;
mod result;

pub use command::{CommandEngine, DEFAULT_ENGINE_PROGRAM};
pub use error::EngineError;
pub use result::{LastRelease, NextRelease, ReleaseResult};

use std::path::Path;

use semrel_core::ReleaseOptions;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Boundary to the external release-automation engine.
///
/// The engine owns version computation, changelog generation, and publishing;
/// this crate only defines how options go in and how the structured result
/// comes back.
pub trait ReleaseEngine: Send + Sync {
    /// Runs the engine in `work_dir` with the assembled options.
    ///
    /// `Ok(None)` means the engine decided no release was warranted, which is
    /// a normal terminal outcome rather than a failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be launched, exits unsuccessfully,
    /// or produces output that cannot be understood.
    fn run(&self, options: &ReleaseOptions, work_dir: &Path) -> Result<Option<ReleaseResult>>;
}
