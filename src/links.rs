//! Same-origin link enumeration for frontier expansion.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Collects the same-origin links of a parsed page.
///
/// Every `a[href]` is resolved against `base` (absolute hrefs pass through,
/// scheme- and path-relative ones are joined), fragments are stripped so
/// `page#a` and `page#b` collapse to one entry, and anything whose host:port
/// differs from `base`'s is discarded. The result is deduplicated but keeps
/// document order, which is what makes within-level crawl order
/// deterministic.
///
/// The crawl loop passes the crawl's *start* URL as `base` for every page,
/// so relative hrefs on nested pages resolve against the site root rather
/// than the page they appear on. Changing the base changes which nested
/// pages a crawl reaches; see `relative_links_resolve_against_the_crawl_root`
/// in the crawler tests before touching it.
pub fn same_origin_links(document: &Html, base: &Url) -> Vec<Url> {
    let anchor = Selector::parse("a[href]").expect("anchor selector");

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for element in document.select(&anchor) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(mut resolved) = base.join(href) else {
            continue;
        };
        resolved.set_fragment(None);
        if !same_netloc(&resolved, base) {
            continue;
        }
        if seen.insert(resolved.as_str().to_string()) {
            links.push(resolved);
        }
    }
    links
}

/// Network-location equality: host plus literal port, the identity used to
/// decide same-site eligibility. Scheme-default ports are not normalized, so
/// `https://ex.test` and `https://ex.test:443` compare equal only when
/// written the same way.
fn same_netloc(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.port() == b.port()
}
