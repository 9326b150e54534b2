// src/core/net.rs

// HTTPS GET, direct or through the read-proxy rewrite.

use std::fmt;
use std::time::Duration;

use crate::params::{READ_PROXY, REQUEST_TIMEOUT, USER_AGENT};

/// Network failure or non-200 status, with the reason it failed.
#[derive(Debug)]
pub struct FetchError {
    pub url: String,
    pub last_reason: String,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed for {} because {}", self.url, self.last_reason)
    }
}

impl std::error::Error for FetchError {}

/// Single-GET seam. The pipeline only ever needs this one operation, and
/// tests script it with canned bodies.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Shared blocking client. One per process; the run is fully sequential,
/// so connection pooling is the only state that matters.
pub struct Http {
    client: reqwest::blocking::Client,
}

impl Http {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Http { client }
    }

    pub fn client(&self) -> &reqwest::blocking::Client {
        &self.client
    }
}

impl Default for Http {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for Http {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        match self.client.get(url).send() {
            Ok(resp) if resp.status().as_u16() == 200 => {
                resp.text().map_err(|e| FetchError {
                    url: s!(url),
                    last_reason: e.to_string(),
                })
            }
            Ok(resp) => Err(FetchError {
                url: s!(url),
                last_reason: format!("http {}", resp.status().as_u16()),
            }),
            Err(e) => Err(FetchError {
                url: s!(url),
                last_reason: e.to_string(),
            }),
        }
    }
}

/// Rewrite a url through the read proxy: scheme stripped, prefix applied.
pub fn proxy_url(url: &str) -> String {
    let tail = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    format!("{READ_PROXY}{tail}")
}

/// Direct fetch, single attempt. No retries.
pub fn get_text(fetch: &dyn Fetch, url: &str) -> Result<String, FetchError> {
    logd!("GET {url}");
    fetch.get(url)
}

/// Fetch through the read proxy, single attempt. Whether a direct fetch
/// follows is the caller's decision — proxy and direct are separate
/// pipeline stages, each attributed on its own.
pub fn get_proxied(fetch: &dyn Fetch, url: &str) -> Result<String, FetchError> {
    let u = proxy_url(url);
    logd!("GET {u}");
    fetch.get(&u)
}
