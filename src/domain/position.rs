use crate::error::{GeocodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 position returned by the geocoding service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoInformation {
    /// Latitude in signed decimal degrees
    pub latitude: f64,
    /// Longitude in signed decimal degrees
    pub longitude: f64,
}

impl GeoInformation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a position from the textual `<lat>`/`<lng>` values.
    ///
    /// Parsing always uses `.` as the decimal point, independent of the
    /// host locale. A `,` is rejected rather than read as a group separator.
    pub fn parse(lat: &str, lng: &str) -> Result<Self> {
        Ok(Self::new(
            parse_degrees("lat", lat)?,
            parse_degrees("lng", lng)?,
        ))
    }
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

impl fmt::Display for GeoInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
