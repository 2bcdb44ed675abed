//! llms-index core - configuration, errors and shared helpers
//!
//! This crate holds the pieces every other llms-index crate agrees on:
//! the immutable [`IndexConfig`], the [`FileDescriptor`] produced by the
//! walker, the [`IndexError`] type, and the small text helpers used when
//! rendering markdown links and headings.
//!
//! # Example
//!
//! ```
//! use llms_index_core::{capitalize, IndexConfig};
//!
//! let config = IndexConfig::default();
//! assert!(config.includes_extension(".md"));
//! assert_eq!(capitalize("guides"), "Guides");
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod text;

pub use config::{IndexConfig, CONFIG_FILE_NAME};
pub use descriptor::FileDescriptor;
pub use error::{IndexError, Result};
pub use text::{capitalize, locale_compare, make_link, section_blurb};
