//! llms-index render - markdown generation for the two index documents
//!
//! Produces `llms.txt` (a short, curated list of key sections) and
//! `llms-full.txt` (every markdown file, grouped by top-level directory).
//! Both end with the same connection footer, built from a [`Connection`].
//!
//! Rendering only reads the filesystem; writing the documents is left to
//! the caller.

mod connection;
mod full;
mod short;

pub use connection::Connection;
pub use full::{generate_full_index, group_by_top_level, Group, ROOT_GROUP};
pub use short::generate_short_index;

/// File name of the short curated index.
pub const SHORT_INDEX_FILE: &str = "llms.txt";

/// File name of the full deep-link index.
pub const FULL_INDEX_FILE: &str = "llms-full.txt";

/// Prefix of the only line that changes between runs on an unchanged tree.
pub const DATE_LINE_PREFIX: &str = "Last updated: ";

/// Compares two rendered documents, ignoring their generation dates.
pub fn same_ignoring_date(a: &str, b: &str) -> bool {
    undated_lines(a).eq(undated_lines(b))
}

fn undated_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split('\n')
        .filter(|line| !line.starts_with(DATE_LINE_PREFIX))
}
