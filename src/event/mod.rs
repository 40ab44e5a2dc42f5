//! GitHub Actions event context
//!
//! Reads the ambient Actions environment once at startup: whether we are in
//! a workflow run at all, which event triggered it, and the pull request
//! details from the JSON payload at `GITHUB_EVENT_PATH`. Everything the
//! pipeline needs from the platform is materialized here and passed down by
//! parameter, never read ad hoc by inner components.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// The only event name that activates a run
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Whether the process is running inside a GitHub Actions workflow
pub fn in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Name of the triggering event, if any
pub fn event_name() -> Option<String> {
    std::env::var("GITHUB_EVENT_NAME").ok()
}

/// Everything the pipeline needs to know about the triggering pull request
#[derive(Debug, Clone)]
pub struct PullRequestEvent {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub base_sha: String,
    pub additions: u64,
    pub deletions: u64,
    pub workspace: PathBuf,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: PullRequestPayload,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    additions: u64,
    #[serde(default)]
    deletions: u64,
    base: BasePayload,
}

#[derive(Debug, Deserialize)]
struct BasePayload {
    sha: String,
}

impl PullRequestEvent {
    /// Read the pull request event from the Actions environment
    ///
    /// Returns `Ok(None)` when the triggering event is not a pull request;
    /// any other event is a no-op for this tool, not an error.
    pub fn from_env() -> Result<Option<Self>> {
        match event_name() {
            Some(name) if name == PULL_REQUEST_EVENT => {}
            _ => return Ok(None),
        }

        let path = std::env::var("GITHUB_EVENT_PATH")
            .map_err(|_| Error::config("GITHUB_EVENT_PATH is not set"))?;
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("failed to read event payload at {path}: {e}")))?;
        let payload: EventPayload = serde_json::from_str(&raw)
            .map_err(|e| Error::config(format!("malformed event payload at {path}: {e}")))?;

        let repository = std::env::var("GITHUB_REPOSITORY")
            .map_err(|_| Error::config("GITHUB_REPOSITORY is not set"))?;
        let (owner, repo) = split_repository(&repository)?;

        let workspace = std::env::var("GITHUB_WORKSPACE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Some(Self {
            owner,
            repo,
            number: payload.pull_request.number,
            base_sha: payload.pull_request.base.sha,
            additions: payload.pull_request.additions,
            deletions: payload.pull_request.deletions,
            workspace,
        }))
    }
}

/// Split an `owner/repo` slug into its two halves
fn split_repository(repository: &str) -> Result<(String, String)> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::config(format!(
            "invalid GITHUB_REPOSITORY value '{repository}', expected owner/repo"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repository() {
        assert_eq!(
            split_repository("octocat/hello-world").unwrap(),
            ("octocat".to_string(), "hello-world".to_string())
        );
        assert!(split_repository("just-a-name").is_err());
        assert!(split_repository("/repo").is_err());
        assert!(split_repository("owner/").is_err());
    }

    #[test]
    fn test_payload_parsing() {
        let raw = r#"{
            "action": "synchronize",
            "pull_request": {
                "number": 42,
                "additions": 120,
                "deletions": 30,
                "base": { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" }
            }
        }"#;
        let payload: EventPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.pull_request.number, 42);
        assert_eq!(payload.pull_request.additions, 120);
        assert_eq!(payload.pull_request.deletions, 30);
        assert_eq!(
            payload.pull_request.base.sha,
            "6dcb09b5b57875f334f61aebed695e2e4193db5e"
        );
    }

    #[test]
    fn test_payload_counts_default_to_zero() {
        // Some delivery paths omit additions/deletions entirely
        let raw = r#"{
            "pull_request": {
                "number": 7,
                "base": { "sha": "abc123" }
            }
        }"#;
        let payload: EventPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.pull_request.additions, 0);
        assert_eq!(payload.pull_request.deletions, 0);
    }
}
