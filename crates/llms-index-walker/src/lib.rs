//! llms-index walker - the filesystem side of index generation
//!
//! This crate handles everything that touches the directory tree:
//! - Walking the scan root to collect [`FileDescriptor`]s
//! - Probing whether a section README exists
//! - Listing top-level directories that carry their own README
//!
//! Skip names are exact entry-name matches; there are no ignore files.
//!
//! [`FileDescriptor`]: llms_index_core::FileDescriptor

mod probe;
mod walker;

pub use probe::{probe_exists, readme_directories, section_readme, README_FILE_NAME};
pub use walker::walk;
