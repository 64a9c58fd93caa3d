//! Thin adapter over HTTP GET so the download procedure can run against any byte source.
use crate::error::Result;

/// Status and body of a single GET. The body is only read for success statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Fetcher {
    fn get(&self, url: &str) -> Result<FetchResponse>;
}

#[cfg(feature = "remote")]
pub use http::HttpFetcher;

#[cfg(feature = "remote")]
mod http {
    use reqwest::blocking::Client;
    use tracing::debug;

    use super::{FetchResponse, Fetcher};
    use crate::error::Result;

    /// Blocking reqwest client, one request at a time
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        pub fn new() -> Result<Self> {
            let client = Client::builder()
                .user_agent(concat!("gamethumbs/", env!("CARGO_PKG_VERSION")))
                .build()?;
            Ok(Self { client })
        }
    }

    impl Fetcher for HttpFetcher {
        fn get(&self, url: &str) -> Result<FetchResponse> {
            let resp = self.client.get(url).send()?;
            let status = resp.status();
            debug!("GET {} -> {}", url, status);
            let body = if status.is_success() {
                resp.bytes()?.to_vec()
            } else {
                Vec::new()
            };
            Ok(FetchResponse {
                status: status.as_u16(),
                body,
            })
        }
    }
}
