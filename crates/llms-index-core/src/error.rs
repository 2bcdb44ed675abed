//! Error types for llms-index.
//!
//! Everything that can go wrong is a filesystem problem of some kind,
//! so each variant carries the path that was being touched.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience type for fallible llms-index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Things that can go wrong while building the indexes.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Listing a directory failed (permissions, or it vanished mid-walk).
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a file failed.
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing an output document failed.
    #[error("failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::IndexConfig`].
    #[error("invalid configuration in '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IndexError {
    /// Creates a directory listing error with the path for context.
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a file read error with the path for context.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a file write error with the path for context.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Converts a `walkdir` failure into a directory listing error.
    ///
    /// Loop errors only happen when following symlinks, which we never do,
    /// but they still map onto an I/O error rather than panicking.
    pub fn from_walk(err: walkdir::Error, fallback: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
        Self::read_dir(path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = IndexError::write(
            "/tmp/out/llms.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/llms.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_from_walk_keeps_failing_path() {
        let missing = Path::new("/definitely/not/here/llms-index");
        let err = walkdir::WalkDir::new(missing)
            .into_iter()
            .find_map(|entry| entry.err())
            .expect("walking a missing directory should fail");

        match IndexError::from_walk(err, Path::new("/fallback")) {
            IndexError::ReadDir { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
