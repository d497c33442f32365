//! Shareable locator: the recipe's numeric fields as a query string.
//!
//! Encodes method, dose, water, temperature, time, and grind. Filter
//! type and roast level deliberately stay out of the locator; a recipe
//! hydrated from one reverts those to their defaults.

use crate::recipe::{Recipe, RecipeController};

use super::format::format_amount;

/// Encode a recipe as a shareable query string (no leading `?`).
pub fn share_query(recipe: &Recipe) -> String {
    format!(
        "m={}&d={}&w={}&tm={}&ti={}&g={}",
        encode_component(recipe.method.name()),
        format_amount(recipe.dose),
        format_amount(recipe.water),
        recipe.temperature,
        recipe.time,
        recipe.grind,
    )
}

/// Split a query string into decoded key/value pairs.
///
/// A leading `?` is tolerated; malformed segments (no `=`) are
/// skipped.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            Some((decode_component(key), decode_component(value)))
        })
        .collect()
}

/// Hydrate a controller straight from a locator query string.
pub fn hydrate_query(controller: &mut RecipeController, query: &str) {
    let pairs = parse_query(query);
    controller.hydrate(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
}

/// Percent-encode a query component (RFC 3986 unreserved characters
/// pass through).
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Decode a percent-encoded query component. Invalid escapes pass
/// through literally; `+` decodes as a space for form-encoded inputs.
fn decode_component(value: &str) -> String {
    fn hex_digit(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BrewMethod;
    use crate::recipe::{FilterType, RoastLevel};

    #[test]
    fn test_share_query_shape() {
        let recipe = Recipe::default();
        assert_eq!(share_query(&recipe), "m=V60&d=20&w=320&tm=96&ti=180&g=800");
    }

    #[test]
    fn test_method_names_are_encoded() {
        let recipe = Recipe::from_preset(BrewMethod::AeroPressFlowControl);
        let query = share_query(&recipe);
        assert!(query.starts_with("m=AeroPress%20%2B%20Flow%20Control&"));
    }

    #[test]
    fn test_parse_decodes_components() {
        let pairs = parse_query("?m=French%20Press&d=30");
        assert_eq!(
            pairs,
            vec![
                ("m".to_string(), "French Press".to_string()),
                ("d".to_string(), "30".to_string()),
            ]
        );
    }

    #[test]
    fn test_plus_decodes_as_space() {
        let pairs = parse_query("m=Moka+Pot");
        assert_eq!(pairs[0].1, "Moka Pot");
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let pairs = parse_query("m=V60&junk&d=20");
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_round_trip_reproduces_numeric_fields() {
        let mut source = RecipeController::new();
        source.select_method(BrewMethod::AeroPress);
        source.set_dose(17.5);
        source.set_temperature(92);
        source.set_grind(650);
        source.set_filter(FilterType::Metal);
        let query = share_query(source.recipe());

        let mut restored = RecipeController::new();
        hydrate_query(&mut restored, &query);
        let r = restored.recipe();

        assert_eq!(r.method, BrewMethod::AeroPress);
        assert_eq!(r.dose, source.recipe().dose);
        assert_eq!(r.water, source.recipe().water);
        assert_eq!(r.temperature, source.recipe().temperature);
        assert_eq!(r.time, source.recipe().time);
        assert_eq!(r.grind, source.recipe().grind);
        // filter/roast are not in the locator and revert to defaults
        assert_eq!(r.filter, FilterType::Paper);
        assert_eq!(r.roast, RoastLevel::Medium);
    }

    #[test]
    fn test_round_trip_every_method() {
        for method in BrewMethod::ALL {
            let recipe = Recipe::from_preset(method);
            let mut restored = RecipeController::new();
            hydrate_query(&mut restored, &share_query(&recipe));
            assert_eq!(restored.recipe().method, method);
            assert_eq!(restored.recipe().grind, recipe.grind);
            assert_eq!(restored.recipe().time, recipe.time);
        }
    }
}
