#![warn(missing_docs)]
//! Core library entry points for the sitescrape crawler.
//!
//! A crawl is a single-threaded, breadth-first traversal of one origin: pages
//! are fetched one at a time, stripped of boilerplate markup, and collected as
//! [`CrawlRecord`]s which the output module renders to JSON, plain text, or
//! Markdown.

pub mod config;
pub mod crawler;
pub mod extractor;
pub mod fetcher;
pub mod frontier;
pub mod links;
pub mod output;

pub use config::{Cli, ConfigError, CrawlConfig};
pub use crawler::{crawl, scrape_single, CrawlRecord};
pub use extractor::{ExtractedContent, Extractor};
pub use fetcher::{FetchError, Fetcher, HttpFetcher, FETCH_TIMEOUT, USER_AGENT};
pub use frontier::{Frontier, FrontierEntry};
pub use links::same_origin_links;
pub use output::{output_filename, render, save_results, OutputError, OutputFormat};
