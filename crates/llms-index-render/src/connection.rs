//! The connection footer shared by both documents.

use chrono::{NaiveDate, Utc};
use llms_index_core::IndexConfig;

/// Endpoint URL and generation date embedded at the end of each index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    endpoint_url: String,
    generated_on: NaiveDate,
}

/// Which document the footer is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FooterStyle {
    Short,
    Full,
}

impl Connection {
    /// Builds the footer for `repository` (`owner/name`).
    ///
    /// A missing or empty repository falls back to
    /// `config.fallback_repository`.
    pub fn new(config: &IndexConfig, repository: Option<&str>, generated_on: NaiveDate) -> Self {
        let repository = repository
            .filter(|r| !r.is_empty())
            .unwrap_or(config.fallback_repository.as_str());
        let endpoint_url = format!(
            "{}/{}",
            config.endpoint_base.trim_end_matches('/'),
            repository
        );
        Self {
            endpoint_url,
            generated_on,
        }
    }

    /// Same as [`Connection::new`], dated with today's UTC date.
    pub fn today(config: &IndexConfig, repository: Option<&str>) -> Self {
        Self::new(config, repository, Utc::now().date_naive())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// `Last updated: YYYY-MM-DD`.
    pub fn date_line(&self) -> String {
        format!(
            "{}{}",
            crate::DATE_LINE_PREFIX,
            self.generated_on.format("%Y-%m-%d")
        )
    }

    pub(crate) fn push_footer(&self, lines: &mut Vec<String>, style: FooterStyle) {
        match style {
            FooterStyle::Short => {
                lines.push("## GitMCP Connection".to_string());
                lines.push(format!("MCP SSE URL: {}", self.endpoint_url));
            }
            FooterStyle::Full => {
                lines.push("## GitMCP Connection Info".to_string());
                lines.push(format!("- MCP SSE URL: {}", self.endpoint_url));
            }
        }
        lines.push(String::new());
        lines.push(self.date_line());
        lines.push(String::new());
    }
}
