pub mod config;
pub mod package;
pub mod root;

use std::path::Path;

use anyhow::{Context, Result};
use upm_dev::scaffold::PackagesRoot;

/// Resolve the project root: `--root` flag, then `UPM_DEV_ROOT`, then the
/// current directory.
pub(crate) fn packages_root(root_flag: Option<&Path>) -> Result<PackagesRoot> {
    if let Some(path) = root_flag {
        return Ok(PackagesRoot::new(path));
    }
    if let Some(env_root) = std::env::var_os("UPM_DEV_ROOT") {
        return Ok(PackagesRoot::new(env_root));
    }
    let cwd = std::env::current_dir().context("unable to determine current directory")?;
    Ok(PackagesRoot::new(cwd))
}
