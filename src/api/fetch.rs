use crate::error::{GeocodeError, Result};
use log::debug;
use std::time::Duration;

/// Client identifier sent with every request
pub const USER_AGENT: &str = concat!("gisgraphy-client/", env!("CARGO_PKG_VERSION"));

/// Retrieves the raw response body for a URL.
///
/// This is the transport seam of [`crate::api::GeocodeClient`]; tests plug in
/// canned responses here.
pub trait Fetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;
}

/// Blocking HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GeocodeError::HttpClient)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        let to_error = |e: reqwest::Error| {
            if e.is_timeout() {
                GeocodeError::Timeout(timeout.as_secs())
            } else {
                GeocodeError::Transport(e)
            }
        };

        // The response is dropped on every return path, releasing the connection.
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(to_error)?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body = response.bytes().map_err(to_error)?;
        debug!("Received {} bytes from geocoding service", body.len());
        Ok(body.to_vec())
    }
}
