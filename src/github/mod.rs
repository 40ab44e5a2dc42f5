//! GitHub API integration
//!
//! Octocrab-backed access to the four API operations the tool consumes:
//! listing labels on a pull request, removing a label, adding a label, and
//! creating a comment. The [`LabelApi`] trait keeps reconciliation and
//! policy logic testable against an in-memory fake.

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info};

use crate::config::Thresholds;
use crate::error::{Error, Result};
use crate::size::{self, Classification};

/// The label and comment operations the pipeline needs from the platform
#[async_trait]
pub trait LabelApi {
    /// Names of all labels currently applied to the pull request
    async fn list_labels(&self, number: u64) -> Result<Vec<String>>;

    /// Remove one named label from the pull request
    async fn remove_label(&self, number: u64, label: &str) -> Result<()>;

    /// Add one label to the pull request
    async fn add_label(&self, number: u64, label: &str) -> Result<()>;

    /// Create a comment on the pull request
    async fn create_comment(&self, number: u64, body: &str) -> Result<()>;
}

/// Octocrab-backed client bound to one repository
pub struct GithubClient {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GithubClient {
    pub fn new(token: &str, owner: &str, repo: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;

        Ok(Self {
            client,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

#[async_trait]
impl LabelApi for GithubClient {
    async fn list_labels(&self, number: u64) -> Result<Vec<String>> {
        let page = self
            .client
            .issues(&self.owner, &self.repo)
            .list_labels_for_issue(number)
            .per_page(100)
            .send()
            .await?;

        Ok(page.items.into_iter().map(|label| label.name).collect())
    }

    async fn remove_label(&self, number: u64, label: &str) -> Result<()> {
        self.client
            .issues(&self.owner, &self.repo)
            .remove_label(number, label)
            .await?;
        Ok(())
    }

    async fn add_label(&self, number: u64, label: &str) -> Result<()> {
        self.client
            .issues(&self.owner, &self.repo)
            .add_labels(number, &[label.to_string()])
            .await?;
        Ok(())
    }

    async fn create_comment(&self, number: u64, body: &str) -> Result<()> {
        self.client
            .issues(&self.owner, &self.repo)
            .create_comment(number, body)
            .await?;
        Ok(())
    }
}

/// Replace whatever managed size label is on the pull request with `new_label`
///
/// Every currently-applied label in the managed set is removed, including one
/// equal to the new label, then the new label is added; re-running with the
/// same classification leaves the label set unchanged in effect. A failed
/// removal does not stop the removal of the remaining stale labels, but any
/// failure still fails the run before the add is attempted.
pub async fn reconcile_labels(
    api: &dyn LabelApi,
    number: u64,
    new_label: &str,
    managed: &[String],
) -> Result<()> {
    let current = api.list_labels(number).await?;
    debug!(?current, "labels currently on pull request");

    let mut first_failure = None;
    for label in current.iter().filter(|name| managed.contains(*name)) {
        info!(label = %label, "removing stale size label");
        if let Err(e) = api.remove_label(number, label).await {
            if first_failure.is_none() {
                first_failure = Some(e);
            }
        }
    }
    if let Some(e) = first_failure {
        return Err(e);
    }

    info!(label = %new_label, "adding size label");
    api.add_label(number, new_label).await
}

/// Apply a classification to the pull request
///
/// Labels are reconciled first; the oversized side effects only run once that
/// succeeded, and in a fixed order: the comment lands before any policy
/// failure so the outcome is visible on the pull request itself, not only in
/// the workflow log.
pub async fn apply_classification(
    api: &dyn LabelApi,
    number: u64,
    classification: &Classification,
    thresholds: &Thresholds,
) -> Result<()> {
    let managed = size::managed_labels(thresholds);
    reconcile_labels(api, number, &classification.label, &managed).await?;

    if !classification.oversized {
        return Ok(());
    }

    api.create_comment(number, &thresholds.message_if_xl).await?;

    if thresholds.fail_if_xl {
        return Err(Error::Policy(format!(
            "pull request #{number} is XL; split it into smaller changes"
        )));
    }

    Ok(())
}
