//! Run command implementation
//!
//! The labeling pipeline for one pull request event: measure the change,
//! classify it, reconcile the size labels on the pull request, then apply
//! the oversized policy. The pipeline is strictly sequential and stops on
//! the first failure; the platform re-invokes the action on the next event.

use anyhow::Result;
use tracing::debug;

use crate::cli::Output;
use crate::config::{self, DiffStrategy, SizerConfig};
use crate::diff::{self, PathExclusions, ShellDiffstat};
use crate::event::{self, PullRequestEvent};
use crate::git;
use crate::github::{self, GithubClient};
use crate::size;

/// Execute the run command
pub async fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    if !event::in_actions() {
        output.warning("Not running inside GitHub Actions, quitting...");
        return Ok(());
    }

    let Some(event) = PullRequestEvent::from_env()? else {
        output.info("Not a pull request event, nothing to do here");
        return Ok(());
    };
    debug!(
        owner = %event.owner,
        repo = %event.repo,
        number = event.number,
        "pull request event"
    );

    let config = SizerConfig::load(config_path)?;
    let token = config::resolve_token()?;

    output.step(&format!("Measuring pull request #{}", event.number));
    let total = measure(&config, &event, output)?;
    output.key_value("Changed lines:", &total.to_string(), false);

    let classification = size::classify(total, &config.thresholds);
    output.key_value("Label:", &classification.label, classification.oversized);

    let client = GithubClient::new(&token, &event.owner, &event.repo)?;
    output.step("Reconciling size labels");
    github::apply_classification(&client, event.number, &classification, &config.thresholds)
        .await?;

    output.success("Pull request labeled");
    Ok(())
}

/// Measure total changed lines using the configured strategy
fn measure(config: &SizerConfig, event: &PullRequestEvent, output: &Output) -> Result<u64> {
    match config.strategy {
        DiffStrategy::Diffstat => {
            git::mark_safe_directory(&event.workspace)?;
            let repo = git::GitRepo::discover(&event.workspace)?;
            repo.resolve(&event.base_sha)?;

            let exclusions = PathExclusions::new(&config.exclude_paths)?;
            let source = ShellDiffstat::new(&event.workspace);
            Ok(diff::measure_diffstat(&source, &event.base_sha, &exclusions)?)
        }
        DiffStrategy::Metadata => {
            if !config.exclude_paths.is_empty() {
                output.warning(
                    "exclude_paths has no effect with the metadata strategy (no per-file breakdown)",
                );
            }
            Ok(diff::measure_metadata(event.additions, event.deletions))
        }
    }
}
