//! Recursive directory walk.
//!
//! Collects every file under a directory while pruning skip-named entries,
//! producing descriptors relative to a fixed base.

use llms_index_core::{FileDescriptor, IndexConfig, IndexError, Result};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Walks `directory` and returns a descriptor for every file found.
///
/// Relative paths are computed against `base`, which stays fixed while
/// `directory` is the point the walk starts from. Any entry whose name is in
/// `config.skip_directories` is neither descended into nor recorded.
///
/// Results come in per-directory listing order (sorted by file name within
/// each directory), not globally sorted. Symlinks are recorded as files and
/// never followed.
///
/// # Errors
///
/// Fails with [`IndexError::ReadDir`] as soon as any directory in the tree
/// cannot be listed. There is no partial result.
///
/// # Example
///
/// ```no_run
/// use llms_index_core::IndexConfig;
/// use llms_index_walker::walk;
/// use std::path::Path;
///
/// let root = Path::new(".");
/// let files = walk(root, root, &IndexConfig::default()).unwrap();
/// println!("Found {} files", files.len());
/// ```
pub fn walk(directory: &Path, base: &Path, config: &IndexConfig) -> Result<Vec<FileDescriptor>> {
    let mut files = Vec::new();

    // filter_entry still sees the depth-0 root, which must never be pruned.
    let walker = WalkDir::new(directory)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() > 0 && config.is_skipped(entry.file_name()) {
                debug!("Skipping {}", entry.path().display());
                return false;
            }
            true
        });

    for entry in walker {
        let entry = entry.map_err(|e| IndexError::from_walk(e, directory))?;

        if entry.file_type().is_dir() {
            continue;
        }

        let absolute_path = entry.into_path();
        let relative_path = absolute_path
            .strip_prefix(base)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| absolute_path.clone());

        files.push(FileDescriptor::new(absolute_path, relative_path));
    }

    debug!("Walked {}: {} files", directory.display(), files.len());
    Ok(files)
}
