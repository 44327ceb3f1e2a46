//! Species slug to display name normalization
//!
//! PokeAPI identifies species by lowercase hyphenated slugs (`mr-mime`,
//! `nidoran-f`). Display names are produced by title-casing every token and
//! then applying [`SPECIAL_CASES`] for the handful of species whose canonical
//! names carry punctuation the generic rule cannot produce.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Ordered (pattern, replacement) table applied after title-casing.
///
/// Every entry replaces at most its first match, and every entry is applied
/// whether or not an earlier one matched.
pub const SPECIAL_CASES: &[(&str, &str)] = &[
    (r"^Mr M", "Mr. M"),
    (r"^Mime Jr", "Mime Jr."),
    (r"^Mr R", "Mr. R"),
    (r"mo O", "mo-o"),
    (r"Porygon Z", "Porygon-Z"),
    (r"Type Null", "Type: Null"),
    (r"Ho Oh", "Ho-Oh"),
    (r"Nidoran F", "Nidoran♀"),
    (r"Nidoran M", "Nidoran♂"),
    (r"Flabebe", "Flabébé"),
];

static COMPILED_CASES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SPECIAL_CASES
        .iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, *replacement))
        })
        .collect()
});

/// Upper-case the first character of every hyphen-separated token and join
/// the tokens with single spaces.
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply the special-case table to an already title-cased name.
pub fn apply_special_cases(name: &str) -> String {
    COMPILED_CASES
        .iter()
        .fold(name.to_string(), |current, (pattern, replacement)| {
            pattern.replace(&current, NoExpand(*replacement)).into_owned()
        })
}

/// Turn a species slug into the name shown on the published page.
pub fn normalize_species_name(slug: &str) -> String {
    apply_special_cases(&title_case_slug(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(COMPILED_CASES.len(), SPECIAL_CASES.len());
    }

    #[test]
    fn test_plain_slugs() {
        assert_eq!(normalize_species_name("charmander"), "Charmander");
        assert_eq!(normalize_species_name("tapu-koko"), "Tapu Koko");
        assert_eq!(normalize_species_name("iron-treads"), "Iron Treads");
    }

    #[test]
    fn test_special_cases() {
        let cases = [
            ("mr-mime", "Mr. Mime"),
            ("mime-jr", "Mime Jr."),
            ("mr-rime", "Mr. Rime"),
            ("jangmo-o", "Jangmo-o"),
            ("hakamo-o", "Hakamo-o"),
            ("kommo-o", "Kommo-o"),
            ("porygon-z", "Porygon-Z"),
            ("type-null", "Type: Null"),
            ("ho-oh", "Ho-Oh"),
            ("nidoran-f", "Nidoran♀"),
            ("nidoran-m", "Nidoran♂"),
            ("flabebe", "Flabébé"),
        ];

        for (slug, expected) in cases {
            assert_eq!(normalize_species_name(slug), expected, "slug {}", slug);
        }
    }

    #[test]
    fn test_anchored_patterns_only_match_at_start() {
        // "^Mr M" must not fire in the middle of a name
        assert_eq!(apply_special_cases("Xmr Mr Mime"), "Xmr Mr Mime");
        assert_eq!(apply_special_cases("Mr Mime"), "Mr. Mime");
    }

    #[test]
    fn test_only_first_match_is_replaced() {
        assert_eq!(apply_special_cases("Ho Oh Ho Oh"), "Ho-Oh Ho Oh");
    }

    #[test]
    fn test_title_case_keeps_rest_of_token() {
        assert_eq!(title_case_slug("porygon2"), "Porygon2");
        assert_eq!(title_case_slug("a--b"), "A  B");
        assert_eq!(title_case_slug(""), "");
    }
}
