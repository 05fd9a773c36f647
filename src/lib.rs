//! gisgraphy-client - Geocode structured postal addresses with Gisgraphy

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;

pub use api::GeocodeClient;
pub use config::ClientConfig;
pub use domain::{Address, GeoInformation};
pub use error::GeocodeError;
pub use format::format_address;
