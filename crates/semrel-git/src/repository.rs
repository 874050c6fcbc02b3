use std::path::Path;

use crate::Result;
use crate::error::GitError;

/// Thin wrapper over a local git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// # Errors
    ///
    /// Returns an error if `path` is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;
        Ok(Self { inner })
    }

    /// Sets the repository-local `user.name`/`user.email` used for tagging.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository configuration cannot be written.
    pub fn configure_user(&self, name: &str, email: &str) -> Result<()> {
        let mut config = self.inner.config()?;
        config.set_str("user.name", name)?;
        config.set_str("user.email", email)?;
        Ok(())
    }

    /// Deletes a local tag. A tag that does not exist is not an error; the
    /// return value tells whether anything was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion itself fails.
    pub fn delete_local_tag(&self, name: &str) -> Result<bool> {
        match self.inner.tag_delete(name) {
            Ok(()) => Ok(true),
            Err(err) if err.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Creates (or moves) a lightweight tag pointing at `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` cannot be resolved or the tag cannot be
    /// written.
    pub fn create_local_tag(&self, name: &str, target: &str) -> Result<()> {
        let object = self
            .inner
            .revparse_single(target)
            .map_err(|_| GitError::RefNotFound {
                refspec: target.to_string(),
            })?;
        self.inner.tag_lightweight(name, &object, true)?;
        Ok(())
    }

    /// Commit id HEAD currently points at.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be resolved.
    pub fn head_id(&self) -> Result<String> {
        let head = self.inner.head()?.peel_to_commit()?;
        Ok(head.id().to_string())
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &git2::Repository {
        &self.inner
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use tempfile::TempDir;

    use super::*;

    pub(crate) fn setup_test_repo() -> anyhow::Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = git2::Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        let tree_id = {
            let mut index = repo.index()?;
            index.write_tree()?
        };
        let tree = repo.find_tree(tree_id)?;
        let sig = repo.signature()?;
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])?;

        let repo = Repository::open(dir.path())?;
        Ok((dir, repo))
    }

    #[test]
    fn open_fails_outside_a_repository() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        let result = Repository::open(dir.path());

        assert!(matches!(result, Err(GitError::NotARepository { .. })));
        Ok(())
    }

    #[test]
    fn configure_user_writes_local_config() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        repo.configure_user("Release Bot", "bot@example.com")?;

        let config = repo.inner().config()?.snapshot()?;
        assert_eq!(config.get_str("user.name")?, "Release Bot");
        assert_eq!(config.get_str("user.email")?, "bot@example.com");
        Ok(())
    }

    #[test]
    fn create_and_delete_local_tag() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.head_id()?;

        repo.create_local_tag("v1", &head)?;
        assert!(repo.inner().find_reference("refs/tags/v1").is_ok());

        assert!(repo.delete_local_tag("v1")?);
        assert!(repo.inner().find_reference("refs/tags/v1").is_err());
        Ok(())
    }

    #[test]
    fn deleting_a_missing_tag_is_not_an_error() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        assert!(!repo.delete_local_tag("v9")?);
        Ok(())
    }

    #[test]
    fn recreating_a_tag_moves_it() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.head_id()?;

        repo.create_local_tag("v1", &head)?;
        repo.create_local_tag("v1", &head)?;

        let reference = repo.inner().find_reference("refs/tags/v1")?;
        assert_eq!(
            reference.target().map(|id| id.to_string()),
            Some(head)
        );
        Ok(())
    }

    #[test]
    fn creating_a_tag_at_an_unknown_target_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let result = repo.create_local_tag("v1", "0000000000000000000000000000000000000000");

        assert!(matches!(result, Err(GitError::RefNotFound { .. })));
        Ok(())
    }
}
