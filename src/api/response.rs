use crate::domain::{Address, GeoInformation};
use crate::error::{GeocodeError, Result};
use serde::Deserialize;

/// Raw `<results>` document returned by the geocoder
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: Option<String>,
    #[serde(rename = "result", default)]
    pub results: Vec<ResultNode>,
}

impl GeocodeResponse {
    /// Parse a response body. Elements the client does not use are ignored.
    pub fn from_xml(body: &[u8]) -> Result<Self> {
        Ok(quick_xml::de::from_reader(body)?)
    }

    /// Number of matches announced by `<numFound>`.
    ///
    /// `None` when the element is missing, empty or not an integer.
    pub fn count(&self) -> Option<i64> {
        self.num_found.as_deref()?.trim().parse().ok()
    }
}

/// A single `<result>` candidate
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResultNode {
    pub lat: Option<String>,
    pub lng: Option<String>,
    #[serde(rename = "streetName")]
    pub street_name: Option<String>,
    #[serde(rename = "houseNumber")]
    pub house_number: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub quarter: Option<String>,
    #[serde(rename = "geocodingLevel")]
    pub geocoding_level: Option<String>,
}

/// Convert one result node into a new [`Address`].
///
/// `lat` and `lng` are required and must be decimal numbers. Every other
/// element is optional and leaves its field empty when absent, including
/// `geocodingLevel`.
pub fn map_result(node: &ResultNode) -> Result<Address> {
    let lat = node
        .lat
        .as_deref()
        .ok_or(GeocodeError::MissingCoordinate("lat"))?;
    let lng = node
        .lng
        .as_deref()
        .ok_or(GeocodeError::MissingCoordinate("lng"))?;

    let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();

    Ok(Address {
        street: text(&node.street_name),
        number: text(&node.house_number),
        zip: text(&node.zip_code),
        city: text(&node.city),
        state: String::new(),
        country: text(&node.country_code),
        position: Some(GeoInformation::parse(lat, lng)?),
        accuracy: text(&node.geocoding_level),
        admin_area1: text(&node.state),
        admin_area2: text(&node.district),
        admin_area3: text(&node.quarter),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<results>
  <numFound>1</numFound>
  <QTime>12</QTime>
  <result>
    <id>42</id>
    <lat>40.761</lat>
    <lng>-73.977</lng>
    <streetName>West 53rd Street</streetName>
    <houseNumber>11</houseNumber>
    <zipCode>10019</zipCode>
    <city>New York</city>
    <countryCode>US</countryCode>
    <state>New York</state>
    <district>Manhattan</district>
    <quarter>Midtown</quarter>
    <geocodingLevel>HOUSE_NUMBER</geocodingLevel>
  </result>
</results>"#;

    #[test]
    fn test_parse_full_response() {
        let response = GeocodeResponse::from_xml(FULL.as_bytes()).unwrap();
        assert_eq!(response.count(), Some(1));
        assert_eq!(response.results.len(), 1);

        let addr = map_result(&response.results[0]).unwrap();
        assert_eq!(addr.street, "West 53rd Street");
        assert_eq!(addr.number, "11");
        assert_eq!(addr.zip, "10019");
        assert_eq!(addr.city, "New York");
        assert_eq!(addr.country, "US");
        assert_eq!(addr.admin_area1, "New York");
        assert_eq!(addr.admin_area2, "Manhattan");
        assert_eq!(addr.admin_area3, "Midtown");
        assert_eq!(addr.accuracy, "HOUSE_NUMBER");
        assert_eq!(addr.position, Some(GeoInformation::new(40.761, -73.977)));
    }

    #[test]
    fn test_map_result_optional_fields_absent() {
        let xml = r#"<results><numFound>1</numFound>
            <result><lat>52.52</lat><lng>13.405</lng><city>Berlin</city></result>
        </results>"#;
        let response = GeocodeResponse::from_xml(xml.as_bytes()).unwrap();
        let addr = map_result(&response.results[0]).unwrap();

        assert_eq!(addr.city, "Berlin");
        assert_eq!(addr.admin_area1, "");
        assert_eq!(addr.street, "");
        assert_eq!(addr.accuracy, "");
        assert_eq!(addr.position, Some(GeoInformation::new(52.52, 13.405)));
    }

    #[test]
    fn test_map_result_missing_coordinate() {
        let node = ResultNode {
            lat: Some("1.0".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            map_result(&node),
            Err(GeocodeError::MissingCoordinate("lng"))
        ));

        let node = ResultNode::default();
        assert!(matches!(
            map_result(&node),
            Err(GeocodeError::MissingCoordinate("lat"))
        ));
    }

    #[test]
    fn test_map_result_invalid_coordinate() {
        let node = ResultNode {
            lat: Some("40,761".to_string()),
            lng: Some("-73.977".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            map_result(&node),
            Err(GeocodeError::InvalidCoordinate { field: "lat", .. })
        ));
    }

    #[test]
    fn test_parse_results_interleaved_with_other_elements() {
        let xml = r#"<results>
            <numFound>2</numFound>
            <result><lat>1.5</lat><lng>2.5</lng></result>
            <QTime>3</QTime>
            <result><lat>3.5</lat><lng>4.5</lng></result>
        </results>"#;
        let response = GeocodeResponse::from_xml(xml.as_bytes()).unwrap();
        assert_eq!(response.count(), Some(2));
        assert_eq!(response.results.len(), 2);

        let positions: Vec<_> = response
            .results
            .iter()
            .map(|node| map_result(node).unwrap().position)
            .collect();
        assert_eq!(
            positions,
            vec![
                Some(GeoInformation::new(1.5, 2.5)),
                Some(GeoInformation::new(3.5, 4.5)),
            ]
        );
    }

    #[test]
    fn test_count_tolerates_bad_values() {
        let response = GeocodeResponse {
            num_found: Some("many".to_string()),
            ..Default::default()
        };
        assert_eq!(response.count(), None);

        let response = GeocodeResponse::from_xml(b"<results></results>").unwrap();
        assert_eq!(response.count(), None);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_malformed_xml() {
        let err = GeocodeResponse::from_xml(b"<results><numFound>1</results>").unwrap_err();
        assert!(matches!(err, GeocodeError::MalformedResponse(_)));
    }
}
