//! External diffstat pipeline
//!
//! Diffing is delegated to `git diff | diffstat -mbqt`, which emits one
//! comma-separated row per file (INSERTED, DELETED, MODIFIED, FILENAME)
//! behind a header row. The subprocess is hidden behind [`DiffstatSource`]
//! so parsing and classification are testable without spawning anything.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use super::FileChangeStat;

/// Capability that produces raw diffstat tabular bytes for a base reference
pub trait DiffstatSource {
    fn diffstat(&self, base: &str) -> Result<Vec<u8>>;
}

/// The real pipeline: `git diff <base> | diffstat -mbqt` in a working tree
pub struct ShellDiffstat {
    workdir: PathBuf,
}

impl ShellDiffstat {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }

    /// Verify the pipeline's tools exist before spawning anything
    fn ensure_tools() -> Result<()> {
        for tool in ["git", "diffstat"] {
            which::which(tool).map_err(|_| {
                Error::tool(format!("'{tool}' not found on PATH; install it on the runner"))
            })?;
        }
        Ok(())
    }
}

impl DiffstatSource for ShellDiffstat {
    fn diffstat(&self, base: &str) -> Result<Vec<u8>> {
        Self::ensure_tools()?;

        let pipeline = format!("git diff {base} | diffstat -mbqt");
        debug!(pipeline = %pipeline, workdir = %self.workdir.display(), "running diffstat");

        let result = Command::new("sh")
            .arg("-c")
            .arg(&pipeline)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| Error::tool(format!("failed to spawn '{pipeline}': {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::tool(format!(
                "'{pipeline}' exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        debug!(output = %String::from_utf8_lossy(&result.stdout), "diffstat output");
        Ok(result.stdout)
    }
}

/// Parse diffstat's tabular output into per-file statistics
///
/// The first row is a header and is skipped. Count fields that fail to parse
/// as integers are fatal; partial statistics would silently misclassify.
pub fn parse(raw: &[u8]) -> Result<Vec<FileChangeStat>> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| Error::tool(format!("diffstat output is not valid UTF-8: {e}")))?;

    let mut stats = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if index == 0 || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(4, ',');
        let inserted = parse_count(fields.next(), index, line)?;
        let deleted = parse_count(fields.next(), index, line)?;
        let modified = parse_count(fields.next(), index, line)?;
        let path = fields
            .next()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::tool(format!("diffstat row {index} has no filename: '{line}'")))?;

        stats.push(FileChangeStat {
            path: path.to_string(),
            inserted,
            deleted,
            modified,
        });
    }

    Ok(stats)
}

fn parse_count(field: Option<&str>, index: usize, line: &str) -> Result<u64> {
    let field = field
        .ok_or_else(|| Error::tool(format!("diffstat row {index} is truncated: '{line}'")))?;
    field.trim().parse().map_err(|_| {
        Error::tool(format!(
            "diffstat row {index} has a non-integer count field '{}': '{line}'",
            field.trim()
        ))
    })
}
