use quick_xml::escape::escape;

/// Characters that break the service's XML backend when sent in a query
const UNSAFE_CHARS: [char; 6] = ['&', '#', '<', '>', '"', '\''];

/// Make a single address field safe for the geocoding request.
///
/// Unsafe characters are stripped first, then whatever remains is XML-escaped
/// so the value can be embedded in a GET parameter that ends up in an XML
/// backend.
pub fn sanitize(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect();
    escape(stripped.as_str()).into_owned()
}
