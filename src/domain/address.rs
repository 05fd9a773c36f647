use super::GeoInformation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured postal address.
///
/// Used both as the geocoding query and as the shape of each result. Empty
/// strings mean "not set". `position`, `accuracy` and the admin areas are
/// only filled in on results returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub zip: String,
    pub city: String,
    pub state: String,
    /// Two-letter ISO 3166 country code
    pub country: String,
    #[serde(skip_deserializing)]
    pub position: Option<GeoInformation>,
    /// Precision of the match, e.g. "HOUSE_NUMBER" or "CITY"
    #[serde(skip_deserializing)]
    pub accuracy: String,
    /// State
    #[serde(skip_deserializing)]
    pub admin_area1: String,
    /// District
    #[serde(skip_deserializing)]
    pub admin_area2: String,
    /// Quarter
    #[serde(skip_deserializing)]
    pub admin_area3: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        zip: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            zip: zip.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            ..Default::default()
        }
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// True if none of the query fields carry a value
    pub fn is_blank(&self) -> bool {
        [
            &self.street,
            &self.number,
            &self.zip,
            &self.city,
            &self.state,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = [
            self.street.as_str(),
            self.number.as_str(),
            self.zip.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
        f.write_str(&line)?;

        if let Some(pos) = &self.position {
            write!(f, " {}", pos)?;
        }
        if !self.accuracy.is_empty() {
            write!(f, " [{}]", self.accuracy)?;
        }
        Ok(())
    }
}
