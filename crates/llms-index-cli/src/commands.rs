//! CLI command implementations.

use colored::Colorize;
use llms_index_core::{IndexConfig, IndexError};
use llms_index_render::{
    generate_full_index, generate_short_index, same_ignoring_date, Connection, FULL_INDEX_FILE,
    SHORT_INDEX_FILE,
};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Regenerate both index documents in `root`.
///
/// The short index is written before the full one is rendered, so a
/// failure partway leaves `llms.txt` updated and `llms-full.txt` stale.
pub fn generate(root: &Path, config: &IndexConfig, connection: &Connection) -> Result<()> {
    info!("Indexing {}", root.display());

    let short = generate_short_index(root, config, connection)?;
    write_output(root, SHORT_INDEX_FILE, &short)?;

    let full = generate_full_index(root, config, connection)?;
    write_output(root, FULL_INDEX_FILE, &full)?;

    println!(
        "{} Updated {} and {}",
        "✓".green(),
        SHORT_INDEX_FILE,
        FULL_INDEX_FILE
    );
    Ok(())
}

/// Verify both documents match a fresh render, ignoring the date line.
pub fn check(root: &Path, config: &IndexConfig, connection: &Connection) -> Result<()> {
    info!("Checking indexes in {}", root.display());

    let rendered = [
        (SHORT_INDEX_FILE, generate_short_index(root, config, connection)?),
        (FULL_INDEX_FILE, generate_full_index(root, config, connection)?),
    ];

    let mut stale = Vec::new();
    for (name, fresh) in &rendered {
        let path = root.join(name);
        let current = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} is missing", path.display());
                stale.push(*name);
                continue;
            }
            Err(e) => return Err(IndexError::read(&path, e).into()),
        };
        if !same_ignoring_date(&current, fresh) {
            stale.push(*name);
        }
    }

    if !stale.is_empty() {
        return Err(format!(
            "out of date: {} (run `llms-index generate`)",
            stale.join(", ")
        )
        .into());
    }

    println!(
        "{} {} and {} are up to date",
        "✓".green(),
        SHORT_INDEX_FILE,
        FULL_INDEX_FILE
    );
    Ok(())
}

fn write_output(root: &Path, name: &str, contents: &str) -> Result<()> {
    let path = root.join(name);
    fs::write(&path, contents).map_err(|e| IndexError::write(&path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
