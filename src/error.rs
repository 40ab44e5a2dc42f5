//! Error kinds for the labeling pipeline
//!
//! Every error here is fatal: the run terminates on the first failure with a
//! descriptive message and a non-zero exit code. There is no retry logic and
//! no partial-success path; the triggering platform re-invokes the action on
//! the next pull request event instead.

/// Result type alias used throughout the library modules
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid settings, malformed YAML, or an unreadable event payload
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The diff subprocess failed or produced output we cannot parse
    #[error("external diff tool error: {0}")]
    ExternalTool(String),

    /// A GitHub API call failed (listing, removing or adding labels, commenting)
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Deliberate run failure: the change is XL and fail_if_xl is enabled
    #[error("{0}")]
    Policy(String),
}

impl Error {
    /// Shorthand for a configuration failure with a formatted message
    pub fn config(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Shorthand for an external tool failure with a formatted message
    pub fn tool(message: impl Into<String>) -> Self {
        Error::ExternalTool(message.into())
    }
}
