use super::fetch::{Fetcher, HttpFetcher};
use super::response::{GeocodeResponse, map_result};
use super::url::build_url;
use crate::config::ClientConfig;
use crate::domain::Address;
use crate::error::Result;
use crate::format::format_address;
use log::{debug, info, warn};
use std::time::Duration;

/// Synchronous client for the Gisgraphy geocoding service.
///
/// One call to [`GeocodeClient::geocode`] issues exactly one request. There
/// is no caching and no retry; a timeout or transport failure is returned
/// to the caller as-is.
#[derive(Debug)]
pub struct GeocodeClient<F = HttpFetcher> {
    config: ClientConfig,
    fetcher: F,
}

impl GeocodeClient<HttpFetcher> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_fetcher(config, HttpFetcher::new()?))
    }
}

impl<F: Fetcher> GeocodeClient<F> {
    pub fn with_fetcher(config: ClientConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The URL that [`GeocodeClient::geocode`] would request for `address`
    pub fn request_url(&self, address: &Address) -> String {
        let formatted = format_address(address);
        build_url(
            &self.config.server,
            address,
            &formatted,
            self.config.api_key.as_deref(),
        )
    }

    /// Geocode an address into zero or more candidate results.
    ///
    /// A missing, zero or unparsable `<numFound>` yields an empty list. A
    /// result without usable coordinates fails the whole call.
    pub fn geocode(&self, address: &Address) -> Result<Vec<Address>> {
        let url = self.request_url(address);
        debug!("Geocoding request: {}", url);

        let body = self
            .fetcher
            .fetch(&url, Duration::from_secs(self.config.timeout_secs))?;
        let response = GeocodeResponse::from_xml(&body)?;

        let count = match response.count() {
            Some(n) => n,
            None => {
                if response.num_found.is_some() {
                    warn!(
                        "Ignoring unparsable numFound value {:?}",
                        response.num_found
                    );
                }
                0
            }
        };
        if count <= 0 {
            info!("No geocoding results for \"{}\"", address);
            return Ok(Vec::new());
        }

        let results = response
            .results
            .iter()
            .map(map_result)
            .collect::<Result<Vec<_>>>()?;
        info!("Geocoded \"{}\": {} result(s)", address, results.len());

        Ok(results)
    }
}
