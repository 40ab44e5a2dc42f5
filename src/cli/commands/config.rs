//! Configuration command implementations
//!
//! Commands for inspecting and validating Sizer configuration.

use anyhow::{Context, Result};

use crate::cli::{ConfigCommands, Output};
use crate::config::SizerConfig;
use crate::diff::PathExclusions;

/// Execute config commands
pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Validate => validate(config_path, output),
        ConfigCommands::Show => show(config_path, output),
    }
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = SizerConfig::load(config_path)?;

    // Threshold monotonicity is checked by load; the globs compile here
    PathExclusions::new(&config.exclude_paths)?;

    output.success("Configuration is valid");
    for tier in config.thresholds.tiers() {
        output.key_value(&format!("< {} lines:", tier.less_than), &tier.label, false);
    }
    output.key_value(
        "fail_if_xl:",
        &config.thresholds.fail_if_xl.to_string(),
        config.thresholds.fail_if_xl,
    );
    output.key_value(
        "exclusion patterns:",
        &config.exclude_paths.len().to_string(),
        false,
    );

    Ok(())
}

fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = SizerConfig::load(config_path)?;
    let rendered =
        serde_yml::to_string(&config).context("failed to render effective configuration")?;

    output.info("Effective configuration:");
    print!("{rendered}");

    Ok(())
}
