//! Depth-tagged FIFO work queue driving the breadth-first crawl.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// A pending page paired with its link distance from the start URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Normalized (fragment-free) URL to fetch.
    pub url: Url,
    /// Number of link hops from the crawl's start URL.
    pub depth: usize,
}

/// FIFO queue of crawl work with insertion-time deduplication.
///
/// A URL is marked seen the moment it is enqueued, not when it is fetched, so
/// pages that link to each other heavily cannot blow up the queue. Combined
/// with FIFO ordering this yields strict level-order traversal: every depth-d
/// entry is popped before any depth-(d+1) entry.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    seen: HashSet<String>,
}

impl Frontier {
    /// Constructs a new, empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a URL at the given depth.
    ///
    /// Returns `false` without touching the queue when the URL has already
    /// been enqueued (or fetched) during this crawl. Dedup is plain string
    /// equality on the URL; callers are expected to have stripped fragments
    /// already.
    pub fn push(&mut self, url: Url, depth: usize) -> bool {
        if !self.seen.insert(url.as_str().to_string()) {
            return false;
        }
        self.queue.push_back(FrontierEntry { url, depth });
        true
    }

    /// Removes and returns the head entry, or `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Number of entries waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid test url")
    }

    #[test]
    fn pops_in_fifo_order() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(url("https://ex.test/"), 0));
        assert!(frontier.push(url("https://ex.test/a"), 1));
        assert!(frontier.push(url("https://ex.test/b"), 1));

        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|entry| (entry.url.to_string(), entry.depth))
            .collect();
        assert_eq!(
            popped,
            vec![
                ("https://ex.test/".to_string(), 0),
                ("https://ex.test/a".to_string(), 1),
                ("https://ex.test/b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn rejects_duplicates_at_push_time() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(url("https://ex.test/page"), 1));
        assert!(!frontier.push(url("https://ex.test/page"), 2));
        assert_eq!(frontier.pending(), 1);

        // Still rejected after the entry has been popped.
        frontier.pop().expect("one entry queued");
        assert!(!frontier.push(url("https://ex.test/page"), 3));
        assert_eq!(frontier.pending(), 0);
    }

    #[test]
    fn empty_frontier_pops_none() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.pop(), None);
        assert_eq!(frontier.pending(), 0);
    }
}
