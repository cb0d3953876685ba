//! Single-shot HTTP page retrieval.

use reqwest::blocking::Client;
use reqwest::{redirect, StatusCode};
use std::error::Error;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Browser-identifying header sent with every request; some sites refuse
/// plainly bot-labelled clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound on a single page fetch, covering connect and body read.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REDIRECTS: usize = 5;

/// Retrieves raw markup for a URL.
///
/// The crawl loop only depends on this trait, which is what lets tests drive
/// it over synthetic in-memory site graphs instead of the network.
pub trait Fetcher {
    /// Fetches the page body at `url`, or reports why it could not.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Network-backed [`Fetcher`] with a fixed identity and timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the underlying HTTP client. Fails only on client construction,
    /// never per request.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::transport(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .map_err(|source| FetchError::transport(url, source))
    }
}

/// A page that could not be fetched. Never fatal to a crawl: the loop logs
/// the failure and moves on, and no retry is attempted.
#[derive(Debug)]
pub enum FetchError {
    /// Timeout, DNS failure, connection reset, TLS error, or a body that
    /// could not be read.
    Transport {
        /// URL the request targeted.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The server answered with a non-success status code.
    Status {
        /// URL the request targeted.
        url: String,
        /// Status code returned.
        status: StatusCode,
    },
}

impl FetchError {
    fn transport(url: &Url, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            source,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { url, source } => write!(f, "fetch failed for {url}: {source}"),
            Self::Status { url, status } => write!(f, "fetch failed for {url}: HTTP {status}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}
