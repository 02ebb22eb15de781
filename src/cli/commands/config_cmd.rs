//! config command - show the resolved configuration

use anyhow::{Context as _, Result};

use crate::config::Config;
use crate::ui::output;

/// Print the merged configuration as TOML.
pub fn show(config: &Config) -> Result<()> {
    let rendered =
        toml::to_string_pretty(config.resolved()).context("Failed to render configuration")?;
    output::print(rendered.trim_end());
    Ok(())
}
