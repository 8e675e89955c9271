//! Configuration loading for command handlers.

use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<goldbach_config::GoldbachConfig> {
    let extra = flags.config.as_deref().map(Path::new);
    if let Some(path) = extra
        && !path.exists()
    {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }

    goldbach_config::GoldbachConfig::load_with_file(extra)
        .context("failed to load goldbach configuration")
}
