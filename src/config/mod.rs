use anyhow::{Context, Result, bail};
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Address;

/// Host of the free public Gisgraphy service
pub const DEFAULT_SERVER: &str = "services.gisgraphy.com";

/// Request timeout in seconds.
/// Kept short: the free service blocks clients that hold connections open.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for [`crate::api::GeocodeClient`]
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host (and optional port) of the geocoding service
    #[serde(default = "default_server")]
    pub server: String,
    /// Only needed for non-free servers
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Apply command line values on top of this configuration.
    ///
    /// An API key is honored on its own, also together with the default
    /// server. Empty values are ignored.
    pub fn with_overrides(
        mut self,
        server: Option<String>,
        api_key: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(server) = server.filter(|s| !s.trim().is_empty()) {
            self.server = server.trim().to_string();
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(secs) = timeout_secs.filter(|&s| s > 0) {
            self.timeout_secs = secs;
        }
        self
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub client: ClientConfig,
    /// Address to geocode when none is given on the command line
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Search the usual locations and return the first config that parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => warn!("Failed to load config file {:?}: {:#}", path, e),
            }
        }
        None
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        if config.client.timeout_secs == 0 {
            bail!("Invalid timeout_secs in {:?}: must be at least 1 second", path);
        }
        Ok(config)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("gisgraphy.toml"));
    paths.push(PathBuf::from(".gisgraphy.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("gisgraphy").join("config.toml"));
        paths.push(config_dir.join("gisgraphy.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".gisgraphy.toml"));
    }

    paths
}
