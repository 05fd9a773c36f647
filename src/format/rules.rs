//! Per-country address layouts understood by the Gisgraphy address parser.
//!
//! Source: <http://www.gisgraphy.com/documentation/addressparser.htm#implemetedcountries>

/// Layout used for countries without a dedicated rule
pub const DEFAULT_TEMPLATE: &str = "{street} {number}, {zip} {city} {state}";

/// One row of the format table: a group of countries sharing a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRule {
    /// Upper-case ISO 3166-1 alpha-2 codes
    pub countries: &'static [&'static str],
    pub template: &'static str,
}

const fn rule(countries: &'static [&'static str], template: &'static str) -> CountryRule {
    CountryRule {
        countries,
        template,
    }
}

pub static COUNTRY_RULES: &[CountryRule] = &[
    // Algeria: [unit] [houseNumber] [streetType] streetName [zip|,] city [CEDEX [(number)]]
    rule(&["DZ"], "{number} {street} {zip|,} {city}"),
    // Angola: streetType streetName [houseNumber|,] [[floor][side]] city
    rule(&["AO"], "{street} {number} {city}"),
    // Argentina: streetName houseNumber [unit] zip city
    rule(&["AR", "AG"], "{street} {number} {zip} {city}"),
    // Australia: [unit] [houseNumber] streetName streetType city province_abbreviation [zip]
    rule(&["AU"], "{number} {street} {city} {state} {zip}"),
    // Austria: streetName [streettype] houseNumber [unit] zip city
    rule(&["AT"], "{street} {number} {zip} {city}"),
    // Belgium: streettype streetName houseNumber [unit] zip city
    rule(&["BE"], "{street} {number} {zip} {city}"),
    // Brazil: streetType streetName [houseNumber|,] city-state [zip]
    rule(&["BR"], "{street} {number} {city}-{state} {zip}"),
    // Cameroon: [unit] [houseNumber] [streetType] [,] streetName city
    rule(&["CM"], "{number} , {street} {city}"),
    // Canada: [houseNumber] [fraction] [predirection] streetName streetType [postdirection] [unit] city [state] [zip]
    rule(&["CA"], "{number} {street}, {city} {state} {zip}"),
    // China: [unit] [houseNumber] streetName (,) city [zip] [province]
    rule(&["CN"], "{number} {street}, {city} {zip} {state}"),
    // Congo: [unit] [houseNumber] [streetType] [,] streetName city
    rule(&["CD", "CG"], "{number} , {street} {city}"),
    // Denmark, Faroe Islands, Greenland: streetName [houseNumber] [unit] [district] zip [city]
    rule(&["DK", "FO", "GL"], "{street} {number} {state} {zip} {city}"),
    // Finland: streetName [houseNumber] [unit] [zip] city
    rule(&["FI"], "{street} {number} {zip} {city}"),
    // France and overseas: [unit] [houseNumber] [streetType] streetName [zip|,] city [CEDEX [(number)]]
    rule(
        &["FR", "GF", "GP", "GQ", "MQ", "RE", "MF", "PM", "SN"],
        "{number} {street} {city} {zip}",
    ),
    // Germany: streetName [streettype] houseNumber[/number|letter] [unit] zip city
    rule(&["DE"], "{street} {number} {zip} {city}"),
    // India: [unit] [houseNumber] streetName [area] city postcode [stateName]
    rule(&["IN"], "{number} {street} {city} {zip} {state}"),
    // Indonesia: [houseNumber] streetName streetType [houseNumber|(,)] city|regencies [zip] province
    rule(&["ID"], "{number} {street}, {city} {zip} {state}"),
    // Iran: streetName streetType|(,) [houseNumber] [unit] [zip] city
    rule(&["IR"], "{number}, {street} {zip} {city}"),
    // Italy, San Marino, Vatican: [unit] [streetType] streetName [houseNumber] [zip] city [state]
    rule(&["IT", "SM", "VA"], "{street} {number} {zip} {city} {state}"),
    // Hong Kong: [unit] [houseNumber] streetName [streetType] city|district [hong kong[NT]]
    rule(&["HK"], "{number} {street}, {city} {state}"),
    // Morocco: [unit] [houseNumber] [streetType] streetName [zip|,] city [CEDEX [(number)]]
    rule(&["MA"], "{number} {street} {zip} {city}"),
    // Netherlands and Caribbean: streetName [houseNumber] [zip] city
    rule(&["NL", "AW", "BQ", "CW", "AN", "SX"], "{street} {number} {zip} {city}"),
    // Norway: streetName [houseNumber] [unit] [zip] city
    rule(&["NO"], "{street} {number} {zip} {city}"),
    // Poland: [streetType] streetName [houseNumber] [(/)flatnumber] [dependentLocality] [zip] city
    rule(&["PL"], "{street} {number} {zip} {city}"),
    // Portugal: streetType streetName [houseNumber|,] [[floor][side]] [zip] city
    rule(&["PT"], "{street} {number} {zip} {city}"),
    // Russia, Kazakhstan: [StreetType] streetName HouseNumber [unit] City [District] [OBLAST] [zip]
    rule(&["RU", "KZ"], "{street} {number} {city} {state} {zip}"),
    // Saudi Arabia: [houseNumber] streetName streetType city [zip]
    rule(&["SA"], "{number} {street} {city} {zip}"),
    // Singapore: [unit] [houseNumber] streetName [streetType] city [zip]
    rule(&["SG"], "{number} {street} {city} {zip}"),
    // Spain: [streetType] streetName [No] houseNumber [unit] zip city state
    rule(&["ES"], "{street} {number} {zip} {city} {state}"),
    // Sudan: [unit] [houseNumber] [streetType] streetName [zip|,] city
    rule(&["SD"], "{number} {street} {zip} {city}"),
    // Sweden: streetName [houseNumber] [zip] city
    rule(&["SE"], "{street} {number} {zip} {city}"),
    // Switzerland: streetName [streettype] houseNumber[/number|letter] [unit] zip city
    rule(&["CH"], "{street} {number} {zip} {city}"),
    // Turkey: [quarter] streetName streetType [houseNumber] [zip] [district] city
    rule(&["TR"], "{street} {number} {zip} {state} {city}"),
    // Tunisia: [unit] [houseNumber] [streetType] streetName [zip|,] city
    rule(&["TN"], "{number} {street} {zip} {city}"),
    // Ukraine: [StreetType] streetName HouseNumber [unit] City [District] [OBLAST] [zip]
    rule(&["UA"], "{street} {number} {city} {zip}"),
    // United Kingdom and territories: [unit] [houseNumber] streetName streetType city [Postown] [zip]
    rule(
        &["GB", "FK", "GI", "IM", "JE", "TC", "SH", "GS", "GG"],
        "{number} {street} {city} {zip}",
    ),
    // United States and territories: [houseNumber] [fraction] [predirection] streetName [streetType] [postdirection] [unit] city [state] [zip]
    rule(
        &["US", "AS", "MP", "PR", "UM", "VI"],
        "{number} {street} {city} {state} {zip}",
    ),
];

/// Find the rule for a country code, ignoring case and surrounding whitespace
pub fn rule_for(country: &str) -> Option<&'static CountryRule> {
    let code = country.trim();
    COUNTRY_RULES
        .iter()
        .find(|r| r.countries.iter().any(|c| c.eq_ignore_ascii_case(code)))
}

/// Template for a country, falling back to [`DEFAULT_TEMPLATE`]
pub fn template_for(country: &str) -> &'static str {
    rule_for(country).map_or(DEFAULT_TEMPLATE, |r| r.template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::template::{Fields, render};
    use std::collections::HashSet;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(rule_for("us"), rule_for("US"));
        assert_eq!(rule_for(" de ").map(|r| r.template), rule_for("DE").map(|r| r.template));
    }

    #[test]
    fn test_grouped_countries_share_row() {
        let nl = rule_for("NL").unwrap();
        for code in ["AW", "CW", "BQ", "SX", "AN"] {
            assert!(std::ptr::eq(rule_for(code).unwrap(), nl), "{code}");
        }
        assert!(std::ptr::eq(rule_for("GL").unwrap(), rule_for("DK").unwrap()));
    }

    #[test]
    fn test_unknown_country_uses_default() {
        assert!(rule_for("ZZ").is_none());
        assert_eq!(template_for("ZZ"), DEFAULT_TEMPLATE);
        assert_eq!(template_for(""), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_no_country_listed_twice() {
        let mut seen = HashSet::new();
        for rule in COUNTRY_RULES {
            for code in rule.countries {
                assert_eq!(code.len(), 2, "{code}");
                assert!(seen.insert(*code), "duplicate country {code}");
            }
        }
        assert!(seen.len() > 40);
    }

    #[test]
    fn test_every_template_renders() {
        let fields = Fields {
            street: "street".to_string(),
            number: "number".to_string(),
            zip: "zip".to_string(),
            city: "city".to_string(),
            state: "state".to_string(),
        };
        for rule in COUNTRY_RULES {
            let out = render(rule.template, &fields)
                .unwrap_or_else(|e| panic!("{:?}: {e}", rule.countries));
            assert!(out.contains("street"), "{:?}", rule.countries);
            assert!(out.contains("city"), "{:?}", rule.countries);
        }
        assert!(render(DEFAULT_TEMPLATE, &fields).is_ok());
    }
}
