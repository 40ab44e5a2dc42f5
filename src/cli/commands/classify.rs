//! Classify command implementation
//!
//! Offline helper: compute the size label for an explicit line count, or for
//! the local working tree against a base reference, without any API calls.
//! Useful for previewing what the action would do before pushing.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Output;
use crate::config::SizerConfig;
use crate::diff::{self, PathExclusions, ShellDiffstat};
use crate::git::GitRepo;
use crate::size;

/// Execute the classify command
pub fn execute(
    config_path: Option<&str>,
    total: Option<u64>,
    base: &str,
    output: &Output,
) -> Result<()> {
    let config = SizerConfig::load(config_path)?;

    let total = match total {
        Some(value) => value,
        None => {
            let repo = GitRepo::discover(".")?;
            let workdir = repo
                .workdir()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let exclusions = PathExclusions::new(&config.exclude_paths)?;
            let source = ShellDiffstat::new(workdir);
            diff::measure_diffstat(&source, base, &exclusions)?
        }
    };

    let classification = size::classify(total, &config.thresholds);
    output.key_value("Changed lines:", &total.to_string(), false);
    output.key_value("Label:", &classification.label, classification.oversized);
    if classification.oversized {
        output.warning("This change classifies as XL");
    }

    Ok(())
}
