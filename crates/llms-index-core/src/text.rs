//! Small text helpers shared by both renderers.

use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::path::Path;

/// Renders a relative path as a markdown link target.
///
/// Components are joined with `/` whatever the host separator is.
pub fn make_link(relative_path: &Path) -> String {
    relative_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line blurb shown next to a known section in the short index.
pub fn section_blurb(name: &str) -> &'static str {
    match name {
        "prompts" => "Prompt templates and patterns.",
        "guides" => "Step-by-step workflows and tool instructions.",
        "cheatsheets" => "Quick reference for commands and syntax.",
        _ => "Documentation.",
    }
}

/// Human-friendly string ordering used for group keys and file lists.
///
/// Unicode Collation Algorithm with the CLDR root table. Punctuation stays
/// significant (`_` < `-` < `.`), accents are a secondary difference and
/// lowercase sorts before uppercase. Byte order breaks exact ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

thread_local! {
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}
