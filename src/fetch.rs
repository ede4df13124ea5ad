use anyhow::{Context, Result};
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Source of raw page text. The aggregator is written against this trait so
/// tests can feed it canned pages instead of hitting volby.cz.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?
            .error_for_status()
            .with_context(|| format!("Server error fetching {}", url))?;

        response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

/// Resolve a href extracted from markup against the URL of the page it was
/// found on. Hrefs on volby.cz are relative references in varying formats,
/// so this goes through proper URL resolution rather than concatenation.
pub fn resolve_href(base: &str, href: &str) -> Result<String> {
    let base = Url::parse(base).with_context(|| format!("Invalid base URL: {}", base))?;
    let resolved = base
        .join(href)
        .with_context(|| format!("Invalid href '{}' on page {}", href, base))?;
    Ok(resolved.into())
}
