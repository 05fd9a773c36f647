use crate::domain::Address;
use urlencoding::encode;

/// Build the geocoding request URL.
///
/// Every interpolated value is percent-encoded. `formatted` is expected to
/// come from [`crate::format::format_address`], which has already stripped
/// and XML-escaped the fields. The `apikey` parameter is only appended for a
/// non-empty key.
pub fn build_url(host: &str, address: &Address, formatted: &str, api_key: Option<&str>) -> String {
    let country = crate::format::sanitize(address.country.trim());
    let mut url = format!(
        "http://{}/geocoding/geocode?address={}&country={}&postal=true",
        host.trim().trim_end_matches('/'),
        encode(formatted),
        encode(&country),
    );

    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        url.push_str("&apikey=");
        url.push_str(&encode(key));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moma() -> Address {
        Address::new("West 53 Street", "11", "10019", "New York", "NY", "US")
    }

    #[test]
    fn test_build_url_escapes_values() {
        let url = build_url(
            "services.gisgraphy.com",
            &moma(),
            "11 West 53 Street New York NY 10019",
            None,
        );
        assert_eq!(
            url,
            "http://services.gisgraphy.com/geocoding/geocode?address=11%20West%2053%20Street%20New%20York%20NY%2010019&country=US&postal=true"
        );
    }

    #[test]
    fn test_build_url_escapes_unicode_and_commas() {
        let addr = moma().with_country("DE");
        let url = build_url("localhost:8080", &addr, "Straße , Köln", None);
        assert!(url.starts_with("http://localhost:8080/geocoding/geocode?"));
        assert!(url.contains("address=Stra%C3%9Fe%20%2C%20K%C3%B6ln&"));
        assert!(url.ends_with("&country=DE&postal=true"));
    }

    #[test]
    fn test_build_url_appends_api_key_only_when_present() {
        let with_key = build_url("example.org", &moma(), "x", Some("s3cr3t+/="));
        assert!(with_key.ends_with("&postal=true&apikey=s3cr3t%2B%2F%3D"));

        let empty_key = build_url("example.org", &moma(), "x", Some("  "));
        assert!(!empty_key.contains("apikey"));

        let no_key = build_url("example.org", &moma(), "x", None);
        assert!(!no_key.contains("apikey"));
    }

    #[test]
    fn test_build_url_strips_unsafe_country() {
        let addr = moma().with_country("U&S");
        let url = build_url("example.org/", &addr, "x", None);
        assert!(url.starts_with("http://example.org/geocoding/"));
        assert!(url.contains("&country=US&"));
    }
}
