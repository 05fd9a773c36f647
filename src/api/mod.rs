pub mod fetch;
pub mod gisgraphy;
pub mod response;
pub mod url;

pub use fetch::{Fetcher, HttpFetcher, USER_AGENT};
pub use gisgraphy::GeocodeClient;
pub use response::{GeocodeResponse, ResultNode, map_result};
pub use url::build_url;
