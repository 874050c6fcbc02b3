mod environment;
mod error;
mod github;
pub mod inputs;
mod platform;

#[cfg(any(test, feature = "testing"))]
mod memory;

pub use environment::Environment;
pub use error::CiError;
pub use github::GithubPlatform;
pub use platform::CiPlatform;

#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryPlatform;

pub type Result<T> = std::result::Result<T, CiError>;
