mod error;
mod floating;
mod repository;

pub use error::GitError;
pub use floating::{FloatingTags, set_floating_tags};
pub use repository::Repository;

pub type Result<T> = std::result::Result<T, GitError>;
