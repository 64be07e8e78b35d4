//! Locating the data files on disk.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// The zip archive the RADKFILEX is distributed in.
pub const RADKFILE_ARCHIVE_NAME: &str = "kradzip.zip";

/// Where distributions install the EDRDG dictionary files.
pub const SYSTEM_DATA_DIR: &str = "/usr/share/edict";

/// The directory of the running executable, the working directory and [`SYSTEM_DATA_DIR`].
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    dirs.push(PathBuf::from(SYSTEM_DATA_DIR));
    dirs
}

/// Returns the first of `names` that exists, trying each directory in turn.
pub fn find_file<P: AsRef<Path>>(dirs: &[P], names: &[&str]) -> Result<PathBuf> {
    for dir in dirs {
        for name in names {
            let path = dir.as_ref().join(name);
            if path.exists() {
                tracing::debug!("found {}", path.display());
                return Ok(path);
            }
        }
    }
    Err(Error::FileNotFound {
        names: names.iter().map(|name| name.to_string()).collect(),
    })
}
