//! Command-line entry point for the sitescrape crawler.

use anyhow::{bail, Context, Result};
use clap::Parser;
use sitescrape::{crawl, save_results, scrape_single, Cli, HttpFetcher};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.build_config().context("invalid crawl configuration")?;
    let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;

    let records = if cli.single {
        println!("scraping single page: {}", config.start_url);
        let record = scrape_single(&fetcher, &config.start_url, config.content_cap)
            .context("failed to scrape the page")?;
        vec![record]
    } else {
        println!(
            "starting crawl at {} (max pages: {}, max depth: {})",
            config.start_url, config.max_pages, config.max_depth
        );
        crawl(&config, &fetcher)
    };

    if records.is_empty() {
        bail!("no pages were scraped successfully");
    }

    let path = save_results(&records, config.format).context("failed to save crawl results")?;
    println!("scraped {} pages, saved to {}", records.len(), path.display());
    Ok(())
}
