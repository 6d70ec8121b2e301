use std::{fs, path::PathBuf};

use crate::{
    herald_err,
    utils::errors::{HeraldError, HeraldErrorKind},
};

fn get_xdg_dirs() -> xdg::BaseDirectories {
    xdg::BaseDirectories::with_prefix("herald")
}

/// Returns the configuration directory, `$XDG_CONFIG_HOME/herald`.
/// If the directory does not exist, it will be created.
pub fn get_config_dir() -> Result<PathBuf, HeraldError> {
    let xdg_dirs = get_xdg_dirs();
    let dir = xdg_dirs
        .get_config_home()
        .ok_or_else(|| herald_err!(HeraldErrorKind::DirRead, "Could not find config directory"))?;
    fs::create_dir_all(&dir).map_err(|e| herald_err!(HeraldErrorKind::DirCreate, e.to_string()))?;
    Ok(dir)
}
