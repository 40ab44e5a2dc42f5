//! Git integration layer for Sizer
//!
//! A thin wrapper over git2 for the checks that run before the diffstat
//! pipeline: repository discovery, base reference validation, and marking
//! the workspace safe. The diff itself is never computed here; that stays
//! with the external pipeline.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::Path;

/// Git repository handle
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover and open the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).with_context(|| {
            format!("no git repository found at {}", path.as_ref().display())
        })?;

        Ok(Self { repo })
    }

    /// Resolve a revision to a commit id, verifying it exists locally
    pub fn resolve(&self, rev: &str) -> Result<String> {
        let object = self
            .repo
            .revparse_single(rev)
            .with_context(|| format!("base reference '{rev}' not found in repository"))?;

        Ok(object.id().to_string())
    }

    /// Get working directory path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

/// Register a workspace as a safe directory in the global git config
///
/// Actions runners check out the repository as a different owner than the
/// container user, and `git diff` refuses to run until the workspace is
/// marked safe.
pub fn mark_safe_directory(path: &Path) -> Result<()> {
    let mut config = git2::Config::open_default().context("failed to open global git config")?;

    config
        .set_multivar("safe.directory", "^$", &path.display().to_string())
        .with_context(|| format!("failed to mark {} as a safe directory", path.display()))?;

    Ok(())
}
