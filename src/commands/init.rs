use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Writes a starter configuration file with default settings.
///
/// # Arguments
/// - `path` - Where to write the file. Defaults to `./shopify2ynab.json`.
/// - `force` - Overwrite the file if it already exists.
///
/// # Errors
/// Returns an error if the file exists and `force` is false, or if it cannot
/// be written.
pub fn init(path: Option<&Path>, force: bool) -> Result<Out<()>> {
    let config = Config::create(path, force).context("Unable to create the configuration file")?;
    let written = config
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    Ok(format!("Wrote configuration defaults to {written}").into())
}
