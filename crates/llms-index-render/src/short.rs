//! Short curated index (`llms.txt`).

use crate::connection::{Connection, FooterStyle};
use llms_index_core::{capitalize, make_link, section_blurb, IndexConfig, Result};
use llms_index_walker::{probe_exists, readme_directories, section_readme, README_FILE_NAME};
use std::path::Path;
use tracing::debug;

/// Renders the short index for `root`.
///
/// Lists each configured top section whose `README.md` exists, with a
/// blurb. If none exist, falls back to every top-level directory that has
/// its own README, rendered without blurbs.
///
/// # Errors
///
/// Only the fallback listing of `root` can fail; README probes never do.
pub fn generate_short_index(
    root: &Path,
    config: &IndexConfig,
    connection: &Connection,
) -> Result<String> {
    let mut lines = vec![
        format!("# {}", config.project_name),
        String::new(),
        "A public, AI-friendly reference library for curated prompts, guides, and cheatsheets."
            .to_string(),
        "Designed to work with [GitMCP](https://gitmcp.io) so AI tools can connect directly."
            .to_string(),
        String::new(),
        "## Key Sections".to_string(),
    ];

    let mut listed = 0;
    for section in &config.top_sections {
        if probe_exists(&section_readme(root, section)) {
            lines.push(format!(
                "- [{}]({}) — {}",
                capitalize(section),
                readme_link(section),
                section_blurb(section)
            ));
            listed += 1;
        }
    }

    if listed == 0 {
        debug!("No configured sections found, listing top-level READMEs");
        for name in readme_directories(root, config)? {
            lines.push(format!("- [{}]({})", capitalize(&name), readme_link(&name)));
            listed += 1;
        }
    }
    debug!("Short index lists {} sections", listed);

    lines.push(String::new());
    connection.push_footer(&mut lines, FooterStyle::Short);

    Ok(lines.join("\n"))
}

fn readme_link(section: &str) -> String {
    make_link(&Path::new(section).join(README_FILE_NAME))
}
