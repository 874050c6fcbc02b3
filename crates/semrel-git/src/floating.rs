use std::path::Path;
use std::process::Command;

use tracing::{error, info};

use crate::Result;
use crate::error::GitError;
use crate::repository::Repository;

/// Names of the floating tags set for a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingTags {
    pub major_tag: String,
    pub minor_tag: String,
}

/// Deletes and recreates the `v<major>` and `v<major>.<minor>` tags at the
/// release commit, locally and on `origin`.
///
/// Remote tag mutation is not atomic across the four push operations; a
/// partial failure leaves the remote in a mixed state, which is accepted and
/// logged per operation, never retried.
///
/// # Errors
///
/// Returns an error only if the repository cannot be opened or the git
/// identity cannot be configured; individual tag operations are best-effort.
pub fn set_floating_tags(
    work_dir: &Path,
    major: &str,
    minor: &str,
    git_head: &str,
    user_name: &str,
    user_email: &str,
) -> Result<FloatingTags> {
    let repo = Repository::open(work_dir)?;
    info!("setting up git identity for tagging as {user_name}");
    repo.configure_user(user_name, user_email)?;

    let major_tag = format!("v{major}");
    let minor_tag = format!("v{major}.{minor}");

    for tag in [&major_tag, &minor_tag] {
        replace_tag(&repo, work_dir, tag, git_head);
    }

    Ok(FloatingTags {
        major_tag,
        minor_tag,
    })
}

fn replace_tag(repo: &Repository, work_dir: &Path, tag: &str, git_head: &str) {
    info!("deleting tag: {tag}");
    if let Err(err) = repo.delete_local_tag(tag) {
        error!("unable to delete tag '{tag}': {err}");
    }
    if let Err(err) = git(work_dir, &["push", "origin", "--delete", tag]) {
        error!("unable to delete remote tag '{tag}': {err}");
    }

    info!("creating tag: {tag}");
    if let Err(err) = repo.create_local_tag(tag, git_head) {
        error!("unable to create tag '{tag}': {err}");
        return;
    }
    if let Err(err) = git(work_dir, &["push", "origin", tag]) {
        error!("unable to push tag '{tag}': {err}");
    }
}

fn git(work_dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(work_dir)
        .output()
        .map_err(GitError::Spawn)?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            args: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::setup_test_repo;

    #[test]
    fn tags_point_at_the_release_commit() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let head = repo.head_id()?;

        // No `origin` is configured: the pushes fail and are logged, the
        // local tags must still land.
        let tags = set_floating_tags(
            dir.path(),
            "1",
            "2",
            &head,
            "Release Bot",
            "bot@example.com",
        )?;

        assert_eq!(
            tags,
            FloatingTags {
                major_tag: "v1".to_string(),
                minor_tag: "v1.2".to_string(),
            }
        );

        for tag in ["refs/tags/v1", "refs/tags/v1.2"] {
            let reference = repo.inner().find_reference(tag)?;
            assert_eq!(reference.target().map(|id| id.to_string()), Some(head.clone()));
        }
        Ok(())
    }

    #[test]
    fn existing_tags_are_replaced() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let head = repo.head_id()?;
        repo.create_local_tag("v1", &head)?;

        set_floating_tags(
            dir.path(),
            "1",
            "0",
            &head,
            "Release Bot",
            "bot@example.com",
        )?;

        assert!(repo.inner().find_reference("refs/tags/v1").is_ok());
        assert!(repo.inner().find_reference("refs/tags/v1.0").is_ok());
        Ok(())
    }

    #[test]
    fn unknown_head_leaves_tags_absent_but_does_not_fail() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        set_floating_tags(
            dir.path(),
            "3",
            "1",
            "0000000000000000000000000000000000000000",
            "Release Bot",
            "bot@example.com",
        )?;

        assert!(repo.inner().find_reference("refs/tags/v3").is_err());
        Ok(())
    }

    #[test]
    fn outside_a_repository_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;

        let result = set_floating_tags(
            dir.path(),
            "1",
            "0",
            "abc",
            "Release Bot",
            "bot@example.com",
        );

        assert!(matches!(result, Err(GitError::NotARepository { .. })));
        Ok(())
    }
}
