//! Configuration management for Sizer
//!
//! Configuration is layered: embedded defaults, then a repository file
//! (`sizer.yml` / `.sizer.yml`), then `SIZER_`-prefixed environment
//! variables, and finally the GitHub Actions inputs (`INPUT_THRESHOLDS`,
//! `INPUT_EXCLUDE_PATHS`, `INPUT_STRATEGY`), which carry YAML documents as
//! the action contract requires. Threshold monotonicity is validated here,
//! at load time, so classification itself never fails.

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single size tier: everything strictly below `less_than` gets `label`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Exclusive upper bound on total changed lines
    pub less_than: u64,

    /// Label applied to pull requests in this tier
    pub label: String,
}

/// The ordered set of size tiers plus the oversized (XL) policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_xs")]
    pub xs: Tier,

    #[serde(default = "default_s")]
    pub s: Tier,

    #[serde(default = "default_m")]
    pub m: Tier,

    #[serde(default = "default_l")]
    pub l: Tier,

    /// Fail the run when the pull request classifies as XL
    #[serde(default)]
    pub fail_if_xl: bool,

    /// Comment left on the pull request when it classifies as XL
    #[serde(default = "default_xl_message")]
    pub message_if_xl: String,
}

fn default_xs() -> Tier {
    Tier { less_than: 10, label: "size/xs".to_string() }
}

fn default_s() -> Tier {
    Tier { less_than: 100, label: "size/s".to_string() }
}

fn default_m() -> Tier {
    Tier { less_than: 500, label: "size/m".to_string() }
}

fn default_l() -> Tier {
    Tier { less_than: 1000, label: "size/l".to_string() }
}

fn default_xl_message() -> String {
    "This PR is too big. Please, split it.".to_string()
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            xs: default_xs(),
            s: default_s(),
            m: default_m(),
            l: default_l(),
            fail_if_xl: false,
            message_if_xl: default_xl_message(),
        }
    }
}

impl Thresholds {
    /// Finite tiers in ascending bound order; the first whose bound exceeds
    /// the aggregate wins
    pub fn tiers(&self) -> [&Tier; 4] {
        [&self.xs, &self.s, &self.m, &self.l]
    }

    /// Validate that bounds are strictly increasing and labels are usable
    pub fn validate(&self) -> Result<()> {
        let tiers = self.tiers();
        for tier in &tiers {
            if tier.label.trim().is_empty() {
                return Err(Error::config(format!(
                    "tier with bound {} has an empty label",
                    tier.less_than
                )));
            }
        }
        for pair in tiers.windows(2) {
            if pair[0].less_than >= pair[1].less_than {
                return Err(Error::config(format!(
                    "tier bounds must be strictly increasing: {} is not below {}",
                    pair[0].less_than, pair[1].less_than
                )));
            }
        }
        Ok(())
    }
}

/// How the change volume of a pull request is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiffStrategy {
    /// Run `git diff | diffstat` and aggregate per-file counts (exclusion-aware)
    #[default]
    Diffstat,

    /// Use the additions/deletions the event payload already reports
    Metadata,
}

/// Main configuration structure for Sizer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SizerConfig {
    /// Size tiers and oversized policy
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Glob patterns for paths excluded from the size calculation
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Measurement strategy
    #[serde(default)]
    pub strategy: DiffStrategy,
}

impl SizerConfig {
    /// Load and validate configuration from all layers
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = custom_config {
            figment = figment.merge(Yaml::file(path));
        } else {
            figment = figment
                .merge(Yaml::file("sizer.yml"))
                .merge(Yaml::file(".sizer.yml"));
        }

        figment = figment.merge(Env::prefixed("SIZER_").split("__"));

        // GitHub Actions inputs arrive as YAML documents inside single
        // environment variables and take priority over every other layer.
        if let Some(doc) = action_input("THRESHOLDS") {
            let value: serde_yml::Value = serde_yml::from_str(&doc)
                .map_err(|e| Error::config(format!("invalid thresholds input: {e}")))?;
            figment = figment.merge(Serialized::default("thresholds", value));
        }
        if let Some(doc) = action_input("EXCLUDE_PATHS") {
            let patterns: Vec<String> = serde_yml::from_str(&doc)
                .map_err(|e| Error::config(format!("invalid exclude_paths input: {e}")))?;
            figment = figment.merge(Serialized::default("exclude_paths", patterns));
        }
        if let Some(strategy) = action_input("STRATEGY") {
            figment = figment.merge(Serialized::default("strategy", strategy.trim()));
        }

        let config: Self = figment
            .extract()
            .map_err(|e| Error::config(format!("invalid configuration: {e}")))?;

        config.thresholds.validate()?;

        Ok(config)
    }
}

/// Resolve the GitHub token from the action input or the ambient token
pub fn resolve_token() -> Result<String> {
    for key in ["INPUT_GITHUB_TOKEN", "GITHUB_TOKEN"] {
        if let Ok(value) = std::env::var(key) {
            if !value.trim().is_empty() {
                return Ok(value);
            }
        }
    }
    Err(Error::config(
        "missing GitHub token: set the github_token input or GITHUB_TOKEN",
    ))
}

fn action_input(name: &str) -> Option<String> {
    std::env::var(format!("INPUT_{name}"))
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.xs.less_than, 10);
        assert_eq!(thresholds.xs.label, "size/xs");
        assert_eq!(thresholds.s.less_than, 100);
        assert_eq!(thresholds.m.less_than, 500);
        assert_eq!(thresholds.l.less_than, 1000);
        assert!(!thresholds.fail_if_xl);
        assert!(!thresholds.message_if_xl.is_empty());
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_partial_thresholds_document() {
        // A thresholds override only needs the fields it changes
        let thresholds: Thresholds =
            serde_yml::from_str("fail_if_xl: true\nl:\n  less_than: 2000\n  label: size/l\n")
                .unwrap();
        assert!(thresholds.fail_if_xl);
        assert_eq!(thresholds.l.less_than, 2000);
        assert_eq!(thresholds.xs.less_than, 10);
        assert_eq!(thresholds.message_if_xl, default_xl_message());
    }

    #[test]
    fn test_validate_rejects_non_monotonic_bounds() {
        let mut thresholds = Thresholds::default();
        thresholds.m.less_than = 50;
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_validate_rejects_equal_bounds() {
        let mut thresholds = Thresholds::default();
        thresholds.s.less_than = 10;
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let mut thresholds = Thresholds::default();
        thresholds.m.label = "  ".to_string();
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("empty label"));
    }

    #[test]
    fn test_exclude_paths_document() {
        let patterns: Vec<String> =
            serde_yml::from_str("- vendor/**\n- \"*.lock\"\n").unwrap();
        assert_eq!(patterns, vec!["vendor/**".to_string(), "*.lock".to_string()]);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(
            serde_yml::from_str::<DiffStrategy>("diffstat").unwrap(),
            DiffStrategy::Diffstat
        );
        assert_eq!(
            serde_yml::from_str::<DiffStrategy>("metadata").unwrap(),
            DiffStrategy::Metadata
        );
        assert!(serde_yml::from_str::<DiffStrategy>("guesswork").is_err());
    }

    #[test]
    fn test_load_uses_defaults_without_any_source() {
        figment::Jail::expect_with(|_jail| {
            let config = SizerConfig::load(None).expect("defaults should load");
            assert_eq!(config.thresholds, Thresholds::default());
            assert!(config.exclude_paths.is_empty());
            assert_eq!(config.strategy, DiffStrategy::Diffstat);
            Ok(())
        });
    }

    #[test]
    fn test_load_applies_action_inputs() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("INPUT_THRESHOLDS", "xs:\n  less_than: 5\n  label: tiny\n");
            jail.set_env("INPUT_EXCLUDE_PATHS", "[\"vendor/**\"]");
            jail.set_env("INPUT_STRATEGY", "metadata");
            let config = SizerConfig::load(None).expect("inputs should merge");
            assert_eq!(config.thresholds.xs.less_than, 5);
            assert_eq!(config.thresholds.xs.label, "tiny");
            // Untouched tiers keep their defaults
            assert_eq!(config.thresholds.l.less_than, 1000);
            assert_eq!(config.exclude_paths, vec!["vendor/**".to_string()]);
            assert_eq!(config.strategy, DiffStrategy::Metadata);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_malformed_thresholds_input() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("INPUT_THRESHOLDS", "xs: [not, a, tier]");
            assert!(SizerConfig::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_load_reads_repository_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "sizer.yml",
                "thresholds:\n  fail_if_xl: true\nexclude_paths:\n  - docs/**\n",
            )?;
            let config = SizerConfig::load(None).expect("file should merge");
            assert!(config.thresholds.fail_if_xl);
            assert_eq!(config.exclude_paths, vec!["docs/**".to_string()]);
            Ok(())
        });
    }
}
