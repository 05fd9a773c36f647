pub mod rules;
pub mod sanitize;
pub mod template;

pub use rules::{COUNTRY_RULES, CountryRule, DEFAULT_TEMPLATE, rule_for, template_for};
pub use sanitize::sanitize;
pub use template::{Fields, TemplateError, render};

use crate::domain::Address;
use log::warn;

/// Serialize an address into the free-text query for the geocoder.
///
/// The country's layout from [`COUNTRY_RULES`] decides the field order. An
/// empty house number is sent as a lone `,` so the service's parser still
/// finds the street. This never fails: if a layout cannot be rendered the
/// fields are laid out with [`DEFAULT_TEMPLATE`] as given.
pub fn format_address(address: &Address) -> String {
    let mut fields = Fields {
        street: sanitize(&address.street),
        number: sanitize(&address.number),
        zip: sanitize(&address.zip),
        city: sanitize(&address.city),
        state: sanitize(&address.state),
    };
    let raw_number = fields.number.clone();
    if fields.number.trim().is_empty() {
        fields.number = ",".to_string();
    }

    let template = template_for(&address.country);
    let formatted = render(template, &fields).unwrap_or_else(|e| {
        warn!(
            "Address layout for country {:?} is invalid ({}), using default",
            address.country, e
        );
        fallback(Fields {
            number: raw_number,
            ..fields
        })
    });

    collapse_whitespace(&formatted)
}

fn fallback(fields: Fields) -> String {
    format!(
        "{} {}, {} {} {}",
        fields.street, fields.number, fields.zip, fields.city, fields.state
    )
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
