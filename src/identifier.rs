//! Numeric identifier extraction from resource locators
//!
//! Entry identifiers are never stored; they are recovered from the
//! `/pokemon/<digits>/` segment of the entry's URL. Extraction never fails:
//! a locator without that shape yields the sentinel 0 (displayed as "0000").

use regex::Regex;
use std::sync::OnceLock;

/// Value returned when a locator has no `/pokemon/<digits>/` segment
pub const SENTINEL_ID: u32 = 0;

/// Display form of [`SENTINEL_ID`]
pub const SENTINEL_LABEL: &str = "0000";

static DEX_NUM_RE: OnceLock<Regex> = OnceLock::new();

fn dex_num_regex() -> &'static Regex {
    DEX_NUM_RE.get_or_init(|| {
        Regex::new(r"/pokemon/(\d+)/").expect("identifier pattern is a valid regex")
    })
}

/// Digits captured from the locator, if the pattern matches
fn capture_digits(resource_url: &str) -> Option<&str> {
    dex_num_regex()
        .captures(resource_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the numeric identifier, or [`SENTINEL_ID`] when the shape doesn't match
///
/// Digit runs too long for a `u32` also degrade to the sentinel.
pub fn extract_id(resource_url: &str) -> u32 {
    capture_digits(resource_url)
        .and_then(|digits| digits.parse::<u32>().ok())
        .unwrap_or(SENTINEL_ID)
}

/// Identifier as shown to users and matched by numeric-prefix search
pub fn dex_label(resource_url: &str) -> String {
    match capture_digits(resource_url) {
        Some(digits) => digits.to_string(),
        None => SENTINEL_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_well_formed() {
        assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/25/"), 25);
        assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/10001/"), 10001);
        assert_eq!(extract_id("/pokemon/7/"), 7);
    }

    #[test]
    fn test_extract_malformed_returns_sentinel() {
        assert_eq!(extract_id(""), SENTINEL_ID);
        assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/25"), SENTINEL_ID);
        assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/pikachu/"), SENTINEL_ID);
        assert_eq!(extract_id("https://pokeapi.co/api/v2/type/10/"), SENTINEL_ID);
        assert_eq!(extract_id("/pokemon/99999999999999999999/"), SENTINEL_ID);
    }

    #[test]
    fn test_dex_label() {
        assert_eq!(dex_label("https://pokeapi.co/api/v2/pokemon/151/"), "151");
        assert_eq!(dex_label("not a url"), "0000");
    }
}
