//! File descriptors produced by the tree walker.

use std::path::{Path, PathBuf};

/// One file found during a walk.
///
/// Descriptors live for a single run; nothing about them is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Full path on disk.
    pub absolute_path: PathBuf,

    /// Path relative to the walk's base directory.
    pub relative_path: PathBuf,

    /// Lowercase extension including the leading dot, or empty.
    pub extension: String,
}

impl FileDescriptor {
    /// Builds a descriptor, deriving the extension from the file name.
    pub fn new(absolute_path: PathBuf, relative_path: PathBuf) -> Self {
        let extension = extension_of(&absolute_path);
        Self {
            absolute_path,
            relative_path,
            extension,
        }
    }

    /// First component of the relative path, or `None` for files that sit
    /// directly in the base directory.
    pub fn top_level_segment(&self) -> Option<String> {
        let mut components = self.relative_path.components();
        let first = components.next()?;
        components.next()?;
        Some(first.as_os_str().to_string_lossy().into_owned())
    }
}

/// Dot-files like `.bashrc` have no extension; `name.` yields `"."`.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(rel: &str) -> FileDescriptor {
        FileDescriptor::new(Path::new("/repo").join(rel), PathBuf::from(rel))
    }

    #[test]
    fn test_extension_is_lowercased_with_dot() {
        assert_eq!(descriptor("README.MD").extension, ".md");
        assert_eq!(descriptor("guides/setup.md").extension, ".md");
        assert_eq!(descriptor("archive.tar.gz").extension, ".gz");
    }

    #[test]
    fn test_missing_extension_is_empty() {
        assert_eq!(descriptor("Makefile").extension, "");
        assert_eq!(descriptor(".bashrc").extension, "");
    }

    #[test]
    fn test_trailing_dot_extension() {
        assert_eq!(descriptor("notes.").extension, ".");
    }

    #[test]
    fn test_top_level_segment() {
        assert_eq!(descriptor("z.md").top_level_segment(), None);
        assert_eq!(
            descriptor("guides/deep/setup.md").top_level_segment(),
            Some("guides".to_string())
        );
    }
}
