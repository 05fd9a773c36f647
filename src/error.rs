use thiserror::Error;

/// Errors raised while geocoding an address
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Connection refused, DNS failure or any other transport problem
    #[error("Request to geocoding service failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service did not answer within the configured timeout
    #[error("Geocoding service did not respond within {0} seconds")]
    Timeout(u64),

    /// The service answered with a non-success status code
    #[error("Geocoding service returned error status: {0}")]
    Status(u16),

    /// The response body is not the expected XML document
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),

    /// A result node lacks a latitude or longitude element
    #[error("Result is missing required field <{0}>")]
    MissingCoordinate(&'static str),

    /// A latitude or longitude could not be parsed as a decimal number
    #[error("Result has invalid <{field}> value: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
}

impl From<quick_xml::DeError> for GeocodeError {
    fn from(err: quick_xml::DeError) -> Self {
        GeocodeError::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeocodeError>;
