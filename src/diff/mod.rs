//! Diff statistics for a pull request
//!
//! Two ways to estimate change volume, picked by configuration: the diffstat
//! strategy runs an external `git diff | diffstat` pipeline and aggregates
//! per-file counts after exclusion filtering, while the metadata strategy
//! trusts the additions/deletions the event payload already reports. Both
//! feed the same classifier; the diffstat strategy is the precise one, the
//! metadata strategy the cheap approximation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub mod diffstat;
pub mod exclude;

pub use diffstat::{DiffstatSource, ShellDiffstat};
pub use exclude::PathExclusions;

/// Per-file change counts as reported by the diffstat pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChangeStat {
    /// Path of the file, relative to the repository root
    pub path: String,

    /// Lines inserted
    pub inserted: u64,

    /// Lines deleted
    pub deleted: u64,

    /// Lines modified in place
    pub modified: u64,
}

impl FileChangeStat {
    /// Total changed lines for this file
    pub fn total(&self) -> u64 {
        self.inserted + self.deleted + self.modified
    }
}

/// Sum the changed lines over a set of per-file statistics
pub fn aggregate(stats: &[FileChangeStat]) -> u64 {
    stats.iter().map(FileChangeStat::total).sum()
}

/// Measure total changed lines against a base reference using the diffstat
/// pipeline, with exclusion filtering applied before aggregation
pub fn measure_diffstat(
    source: &dyn DiffstatSource,
    base: &str,
    exclusions: &PathExclusions,
) -> Result<u64> {
    let raw = source.diffstat(base)?;
    let stats = diffstat::parse(&raw)?;
    debug!(files = stats.len(), "parsed diffstat output");
    let kept = exclusions.filter(stats);
    Ok(aggregate(&kept))
}

/// Measure total changed lines from the counts the pull request metadata
/// already reports; no per-file breakdown is available on this path
pub fn measure_metadata(additions: u64, deletions: u64) -> u64 {
    additions.max(deletions)
}
