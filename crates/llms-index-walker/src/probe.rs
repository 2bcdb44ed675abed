//! README existence probes used by the short index.

use llms_index_core::{IndexConfig, IndexError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name that marks a directory as a documented section.
pub const README_FILE_NAME: &str = "README.md";

/// Reports whether `path` exists.
///
/// The only observable outcome is a boolean: every error, not just
/// "not found", counts as absent. Unexpected errors are logged at debug
/// level so a permission problem is at least visible with `--verbose`.
pub fn probe_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            debug!("Treating {} as absent: {}", path.display(), e);
            false
        }
    }
}

/// Path of the README for a named section under `root`.
pub fn section_readme(root: &Path, section: &str) -> PathBuf {
    root.join(section).join(README_FILE_NAME)
}

/// Lists top-level directories of `root` that contain a README.
///
/// Skip-named directories are left out. Names come back sorted, which is
/// the order the directory listing is presented in.
///
/// # Errors
///
/// Fails if `root` itself cannot be listed. Probing each README never fails.
pub fn readme_directories(root: &Path, config: &IndexConfig) -> Result<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|e| IndexError::read_dir(root, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IndexError::read_dir(root, e))?;
        let file_type = entry.file_type().map_err(|e| IndexError::read_dir(root, e))?;
        if !file_type.is_dir() || config.is_skipped(&entry.file_name()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if probe_exists(&section_readme(root, &name)) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
