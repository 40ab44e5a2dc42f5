//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.info(&format!("{name} v{version}"));
    output.key_value("Description:", description, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    Ok(())
}
