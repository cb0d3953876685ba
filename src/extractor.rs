//! Boilerplate-stripping text extraction from parsed HTML.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Elements whose entire subtree is chrome rather than page content.
const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Title and cleaned body text pulled from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Document title, or the page URL when the document has no `<title>`.
    pub title: String,
    /// Newline-separated text with indentation and blank lines removed.
    pub text: String,
}

/// Stateless content extractor with pre-parsed selectors.
#[derive(Clone)]
pub struct Extractor {
    selectors: ContentSelectors,
}

impl Extractor {
    /// Builds a new extractor instance.
    pub fn new() -> Self {
        Self {
            selectors: ContentSelectors::new(),
        }
    }

    /// Extracts `(title, text)` from a parsed document.
    ///
    /// The content root is chosen by ordered fallback: a `main` region, else
    /// an `article` region, else the document body, else the whole tree.
    /// Pages without semantic markup degrade gracefully rather than erroring.
    pub fn extract(&self, document: &Html, url: &Url) -> ExtractedContent {
        let title = self
            .selectors
            .title_text(document)
            .unwrap_or_else(|| url.as_str().to_string());

        let mut raw = String::new();
        match self.selectors.pick_root(document) {
            Some(root) => collect_text(*root, &mut raw),
            None => collect_text(document.tree.root(), &mut raw),
        }

        ExtractedContent {
            title,
            text: tidy_lines(&raw),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
struct ContentSelectors {
    title: Selector,
    main: Selector,
    article: Selector,
    body: Selector,
}

impl ContentSelectors {
    fn new() -> Self {
        Self {
            title: Selector::parse("title").expect("title selector"),
            main: Selector::parse("main").expect("main selector"),
            article: Selector::parse("article").expect("article selector"),
            body: Selector::parse("body").expect("body selector"),
        }
    }

    fn title_text(&self, document: &Html) -> Option<String> {
        let element = document.select(&self.title).next()?;
        let text = element.text().collect::<String>().trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn pick_root<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .select(&self.main)
            .next()
            .or_else(|| document.select(&self.article).next())
            .or_else(|| document.select(&self.body).next())
    }
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            out.push_str(text);
            out.push('\n');
        }
        Node::Element(element) if NOISE_TAGS.contains(&element.name()) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Strips the whitespace noise inherent to markup-derived text: every line is
/// trimmed, blank lines are dropped, and the survivors are rejoined with
/// single newlines.
fn tidy_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
