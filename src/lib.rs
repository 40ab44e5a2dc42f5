//! # Sizer - Pull Request Size Labeling for GitHub Actions
//!
//! Sizer classifies a pull request's size (XS/S/M/L/XL) from its changed
//! line count, applies the matching label through the GitHub API, and can
//! comment on or fail oversized changes.
//!
//! ## Features
//!
//! - **Deterministic classification**: ordered, configurable thresholds
//! - **Exclusion-aware**: glob patterns drop generated or vendored paths
//!   from the size calculation
//! - **Two measurement strategies**: a precise `git diff | diffstat`
//!   pipeline or the cheap additions/deletions the event already reports
//! - **Idempotent labeling**: re-delivered events never duplicate or orphan
//!   size labels
//!
//! ## Quick Start
//!
//! ```bash
//! # Preview the label for your working tree
//! sizer classify --base origin/main
//!
//! # Inside a workflow step (reads the Actions environment)
//! sizer run
//! ```

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod event;
pub mod git;
pub mod github;
pub mod size;

pub use cli::{Cli, Output};
pub use config::SizerConfig;
pub use error::{Error, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
