use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::RenderOverrides;
use crate::commands::render::load_effective_config;

/// Print the effective configuration (file + overrides) as TOML, for
/// checking what a render would actually use.
pub fn main(cli_config: &Option<PathBuf>, overrides: &RenderOverrides) -> Result<()> {
    let cfg = load_effective_config(cli_config, overrides)?;
    let text = toml::to_string_pretty(&cfg).context("serialize effective config")?;
    print!("{}", text);
    Ok(())
}
