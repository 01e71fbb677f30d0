// src/core/net.rs

// HTTP GET over a blocking reqwest client

use reqwest::blocking::Client;

use crate::error::Result;

/// Anything that can turn a URL into a page body.
/// Non-2xx responses must come back as `Err`.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

/// Live fetcher. Default timeout, TLS and redirect policy; no custom headers.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?.error_for_status()?;
        let body = resp.text()?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}

