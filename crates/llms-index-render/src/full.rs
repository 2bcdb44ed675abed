//! Full deep-link index (`llms-full.txt`).
//!
//! Every included file is listed as a link, grouped by the first segment
//! of its path. Files directly in the scan root share the `root` group.

use crate::connection::{Connection, FooterStyle};
use llms_index_core::{capitalize, locale_compare, make_link, FileDescriptor, IndexConfig, Result};
use llms_index_walker::walk;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Group key for files with no directory component.
pub const ROOT_GROUP: &str = "root";

/// Files sharing a top-level directory, sorted by relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub files: Vec<FileDescriptor>,
}

impl Group {
    /// Heading text: `Root` for the sentinel, otherwise the key with its
    /// first character uppercased.
    pub fn title(&self) -> String {
        if self.key == ROOT_GROUP {
            "Root".to_string()
        } else {
            capitalize(&self.key)
        }
    }
}

/// Groups files by top-level segment.
///
/// Groups come back ordered by key and each group's files by relative
/// path, both using [`locale_compare`]. A real directory named `root`
/// merges with the sentinel group.
pub fn group_by_top_level(files: Vec<FileDescriptor>) -> Vec<Group> {
    let mut by_key: HashMap<String, Vec<FileDescriptor>> = HashMap::new();
    for file in files {
        let key = file
            .top_level_segment()
            .unwrap_or_else(|| ROOT_GROUP.to_string());
        by_key.entry(key).or_default().push(file);
    }

    let mut groups: Vec<Group> = by_key
        .into_iter()
        .map(|(key, mut files)| {
            files.sort_by(|a, b| {
                locale_compare(&make_link(&a.relative_path), &make_link(&b.relative_path))
            });
            Group { key, files }
        })
        .collect();
    groups.sort_by(|a, b| locale_compare(&a.key, &b.key));
    groups
}

/// Renders the full index for `root`.
///
/// # Errors
///
/// Propagates any failure from walking `root`.
pub fn generate_full_index(
    root: &Path,
    config: &IndexConfig,
    connection: &Connection,
) -> Result<String> {
    let files: Vec<_> = walk(root, root, config)?
        .into_iter()
        .filter(|f| config.includes_extension(&f.extension))
        .collect();
    let groups = group_by_top_level(files);
    debug!("Full index has {} groups", groups.len());

    let name = &config.project_name;
    let mut lines = vec![
        format!("# {name} — Full AI Index"),
        String::new(),
        format!(
            "This is the extended reference index for the {name} repository, optimized for AI consumption."
        ),
        "It lists all significant documents, deep links, and structured categories.".to_string(),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    for group in &groups {
        lines.push(format!("## {}", group.title()));
        for file in &group.files {
            let link = make_link(&file.relative_path);
            lines.push(format!("- [{link}]({link})"));
        }
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }

    connection.push_footer(&mut lines, FooterStyle::Full);

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn connection() -> Connection {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        Connection::new(&IndexConfig::default(), Some("acme/widgets"), date)
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# doc\n").unwrap();
    }

    fn descriptor(rel: &str) -> FileDescriptor {
        let relative: PathBuf = rel.split('/').collect();
        FileDescriptor::new(Path::new("/repo").join(&relative), relative)
    }

    #[test]
    fn test_grouping_order() {
        let files = ["b/x.md", "a/y.md", "a/x.md", "z.md"]
            .into_iter()
            .map(descriptor)
            .collect();
        let groups = group_by_top_level(files);

        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "root"]);

        let a: Vec<_> = groups[0]
            .files
            .iter()
            .map(|f| make_link(&f.relative_path))
            .collect();
        assert_eq!(a, vec!["a/x.md", "a/y.md"]);
        assert_eq!(groups[2].title(), "Root");
    }

    #[test]
    fn test_group_files_use_collation_order() {
        let files = [
            "guides/a_b.md",
            "guides/a-b.md",
            "guides/éa.md",
            "guides/eb.md",
            "guides/a.md",
        ]
        .into_iter()
        .map(descriptor)
        .collect();
        let groups = group_by_top_level(files);

        let links: Vec<_> = groups[0]
            .files
            .iter()
            .map(|f| make_link(&f.relative_path))
            .collect();
        assert_eq!(
            links,
            vec![
                "guides/a_b.md",
                "guides/a-b.md",
                "guides/a.md",
                "guides/éa.md",
                "guides/eb.md",
            ]
        );
    }

    #[test]
    fn test_group_titles_capitalize_first_char_only() {
        let groups = group_by_top_level(vec![descriptor("api-docs/intro.md")]);
        assert_eq!(groups[0].title(), "Api-docs");
    }

    #[test]
    fn test_directory_named_root_merges_with_sentinel() {
        let groups = group_by_top_level(vec![descriptor("root/a.md"), descriptor("b.md")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, ROOT_GROUP);
        assert_eq!(groups[0].files.len(), 2);
    }

    #[test]
    fn test_full_document_layout() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b/x.md");
        touch(dir.path(), "a/y.md");
        touch(dir.path(), "a/x.md");
        touch(dir.path(), "z.md");
        touch(dir.path(), "a/diagram.png");

        let text =
            generate_full_index(dir.path(), &IndexConfig::default(), &connection()).unwrap();

        let expected = "\
# VinMemory — Full AI Index

This is the extended reference index for the VinMemory repository, optimized for AI consumption.
It lists all significant documents, deep links, and structured categories.

---

## A
- [a/x.md](a/x.md)
- [a/y.md](a/y.md)

---

## B
- [b/x.md](b/x.md)

---

## Root
- [z.md](z.md)

---

## GitMCP Connection Info
- MCP SSE URL: https://gitmcp.io/acme/widgets

Last updated: 2024-05-01
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_skip_directories_never_listed() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "guides/setup.md");
        touch(dir.path(), "node_modules/pkg/README.md");
        touch(dir.path(), "guides/.github/TEMPLATE.md");
        touch(dir.path(), ".git/description.md");

        let text =
            generate_full_index(dir.path(), &IndexConfig::default(), &connection()).unwrap();
        assert!(text.contains("- [guides/setup.md](guides/setup.md)"));
        assert!(!text.contains("node_modules"));
        assert!(!text.contains(".github"));
        assert!(!text.contains(".git/"));
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "NOTES.MD");
        touch(dir.path(), "llms.txt");

        let text =
            generate_full_index(dir.path(), &IndexConfig::default(), &connection()).unwrap();
        assert!(text.contains("- [NOTES.MD](NOTES.MD)"));
        assert!(!text.contains("llms.txt"));
    }

    #[test]
    fn test_empty_tree_has_only_header_and_footer() {
        let dir = tempdir().unwrap();
        let text =
            generate_full_index(dir.path(), &IndexConfig::default(), &connection()).unwrap();
        assert!(text.contains("---\n\n## GitMCP Connection Info\n"));
        assert!(!text.contains("## Root"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "guides/b.md");
        touch(dir.path(), "guides/a.md");
        touch(dir.path(), "README.md");

        let config = IndexConfig::default();
        let first = generate_full_index(dir.path(), &config, &connection()).unwrap();
        let second = generate_full_index(dir.path(), &config, &connection()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempdir().unwrap();
        let result =
            generate_full_index(&dir.path().join("gone"), &IndexConfig::default(), &connection());
        assert!(result.is_err());
    }
}
