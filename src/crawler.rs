//! The crawl loop: breadth-first orchestration of fetch, extract, and
//! frontier expansion.

use crate::config::CrawlConfig;
use crate::extractor::{ExtractedContent, Extractor};
use crate::fetcher::{FetchError, Fetcher};
use crate::frontier::Frontier;
use crate::links::same_origin_links;
use chrono::{DateTime, Local};
use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

/// One fetched-and-extracted page. Immutable once created; the field names
/// are a compatibility surface read back by downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlRecord {
    /// Page URL as fetched.
    pub url: String,
    /// Document title, or the URL when the page has none.
    pub title: String,
    /// Cleaned body text.
    pub content: String,
    /// Length of `content` in chars.
    pub length: usize,
    /// Capture time, recorded when the record is built.
    pub timestamp: DateTime<Local>,
}

impl CrawlRecord {
    fn new(url: &Url, extracted: ExtractedContent, content_cap: Option<usize>) -> Self {
        let mut content = extracted.text;
        if let Some(cap) = content_cap {
            if content.chars().count() > cap {
                content = content.chars().take(cap).collect();
            }
        }
        let length = content.chars().count();
        Self {
            url: url.to_string(),
            title: extracted.title,
            content,
            length,
            timestamp: Local::now(),
        }
    }
}

/// Crawls the configured site breadth-first and returns the records in fetch
/// order.
///
/// The loop pops one frontier entry at a time: a fetch failure is logged and
/// skipped without consuming page budget; a success is extracted into a
/// record, and while the entry is below `max_depth` its same-origin links are
/// enqueued one level deeper. The crawl ends when the frontier drains or the
/// record count reaches `max_pages`, whichever comes first; leftover frontier
/// entries are abandoned, not fetched.
///
/// Hrefs are resolved against the crawl's start URL on every page, not the
/// page being parsed. See `relative_links_resolve_against_the_crawl_root`
/// below before "fixing" this.
pub fn crawl<F: Fetcher>(config: &CrawlConfig, fetcher: &F) -> Vec<CrawlRecord> {
    let extractor = Extractor::new();
    let mut frontier = Frontier::new();
    frontier.push(config.start_url.clone(), 0);

    let mut records = Vec::new();
    while let Some(entry) = frontier.pop() {
        println!(
            "[depth {}] scraping ({}/{}) {}",
            entry.depth,
            records.len() + 1,
            config.max_pages,
            entry.url
        );

        let body = match fetcher.fetch(&entry.url) {
            Ok(body) => body,
            Err(err) => {
                eprintln!("skipping page: {err}");
                continue;
            }
        };

        let document = Html::parse_document(&body);
        let extracted = extractor.extract(&document, &entry.url);
        records.push(CrawlRecord::new(&entry.url, extracted, config.content_cap));

        if records.len() >= config.max_pages {
            break;
        }

        if entry.depth < config.max_depth {
            for link in same_origin_links(&document, &config.start_url) {
                frontier.push(link, entry.depth + 1);
            }
        }
    }

    records
}

/// Scrapes exactly one page, bypassing the frontier. Shares the fetch and
/// extraction path with [`crawl`]; the failure that the crawl loop would
/// skip over is surfaced to the caller here since there is nothing else to
/// fall back on.
pub fn scrape_single<F: Fetcher>(
    fetcher: &F,
    url: &Url,
    content_cap: Option<usize>,
) -> Result<CrawlRecord, FetchError> {
    let body = fetcher.fetch(url)?;
    let document = Html::parse_document(&body);
    let extracted = Extractor::new().extract(&document, url);
    Ok(CrawlRecord::new(url, extracted, content_cap))
}
