//! Per-invocation crawl configuration and its command-line surface.

use crate::output::OutputFormat;
use clap::Parser;
use std::error::Error;
use std::fmt;
use url::Url;

/// Immutable knobs bounding one crawl invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Seed URL; also the base against which discovered hrefs are resolved.
    pub start_url: Url,
    /// Hard cap on successfully fetched pages (at least 1).
    pub max_pages: usize,
    /// Maximum link distance from the start URL (0 = start page only).
    pub max_depth: usize,
    /// Serializer encoding for the output file.
    pub format: OutputFormat,
    /// Optional cap (in chars) applied to each record's content by the
    /// caller. The CLI leaves this unset; embedding callers that feed the
    /// text into a prompt window set it.
    pub content_cap: Option<usize>,
}

impl CrawlConfig {
    /// Validates and constructs a crawl configuration.
    pub fn new(
        start_url: Url,
        max_pages: usize,
        max_depth: usize,
        format: OutputFormat,
    ) -> Result<Self, ConfigError> {
        if max_pages == 0 {
            return Err(ConfigError::ZeroPageBudget);
        }
        Ok(Self {
            start_url,
            max_pages,
            max_depth,
            format,
            content_cap: None,
        })
    }

    /// Sets the per-record content cap.
    pub fn with_content_cap(mut self, cap: usize) -> Self {
        self.content_cap = Some(cap);
        self
    }
}

/// Rejected configuration; reported before any crawling starts.
#[derive(Debug)]
pub enum ConfigError {
    /// The start URL did not parse as an absolute URL.
    InvalidUrl(url::ParseError),
    /// `max_pages` was zero, which would fetch nothing.
    ZeroPageBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(err) => write!(f, "invalid start URL: {err}"),
            Self::ZeroPageBudget => write!(f, "--max-pages must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUrl(err) => Some(err),
            Self::ZeroPageBudget => None,
        }
    }
}

/// Command-line interface for the crawler binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sitescrape",
    about = "Crawl a site breadth-first and save the extracted page text"
)]
pub struct Cli {
    /// URL to start crawling from
    pub url: String,

    /// Maximum number of pages to scrape
    #[arg(long, env = "SITESCRAPE_MAX_PAGES", default_value_t = 10)]
    pub max_pages: usize,

    /// Maximum crawl depth (0 = the start page only)
    #[arg(long, env = "SITESCRAPE_MAX_DEPTH", default_value_t = 2)]
    pub max_depth: usize,

    /// Output format
    #[arg(long, value_enum, env = "SITESCRAPE_FORMAT", default_value = "markdown")]
    pub format: OutputFormat,

    /// Scrape only the given URL, ignoring depth and page limits
    #[arg(long, default_value_t = false)]
    pub single: bool,
}

impl Cli {
    /// Converts the parsed CLI into a validated [`CrawlConfig`].
    pub fn build_config(&self) -> Result<CrawlConfig, ConfigError> {
        let start_url = Url::parse(&self.url).map_err(ConfigError::InvalidUrl)?;
        CrawlConfig::new(start_url, self.max_pages, self.max_depth, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_page_budget() {
        let url = Url::parse("https://ex.test/").unwrap();
        let err = CrawlConfig::new(url, 0, 2, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageBudget));
    }

    #[test]
    fn cli_defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["sitescrape", "https://ex.test/"]);
        let config = cli.build_config().expect("valid config");
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.content_cap, None);
        assert!(!cli.single);
    }

    #[test]
    fn rejects_relative_start_url() {
        let cli = Cli::parse_from(["sitescrape", "not-a-url"]);
        let err = cli.build_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }
}
