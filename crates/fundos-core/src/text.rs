//! Text folding and slug derivation
//!
//! Search matching and place ids both go through [`fold`], so a query typed
//! without accents ("lurin") finds "Lurín" and ids stay stable across
//! spelling variants that only differ in case or diacritics.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose (NFD) and drop combining marks.
pub fn fold(text: &str) -> String {
    text.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Build a hyphenated slug out of free text.
///
/// Runs of anything outside `[a-z0-9]` collapse into a single `-` and the
/// result never starts or ends with one.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in fold(text).chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Case and diacritic insensitive substring test against an already folded needle.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold(haystack).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fold_strips_diacritics_and_case() {
        assert_eq!(fold("Lurín"), "lurin");
        assert_eq!(fold("Circuito MÁGICO"), "circuito magico");
        assert_eq!(fold("Peña"), "pena");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Parque  Reducto N°2 / Miraflores"), "parque-reducto-n-2-miraflores");
        assert_eq!(slugify("  --Fundo San Vicente Lurín--  "), "fundo-san-vicente-lurin");
        assert_eq!(slugify("¡¿!?"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Planetario José Castro Mendivil Chorrillos");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("San Vicente Lurín Fundo", "lurin"));
        assert!(contains_folded("anything", ""));
        assert!(!contains_folded("Miraflores", "surco"));
    }

    proptest! {
        #[test]
        fn prop_slug_shape(text in "\\PC{0,40}") {
            let slug = slugify(&text);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
            prop_assert_eq!(slugify(&slug), slug.clone());
        }
    }
}
