//! Locale-aware string ordering for catalog names and districts

use crate::error::{FundosError, Result};
use icu::collator::{Collator, CollatorOptions, Strength};
use icu::locid::Locale;
use std::cmp::Ordering;
use std::fmt;

/// Default collation locale: the catalog is written in Spanish.
pub const DEFAULT_LOCALE: &str = "es";

/// Collator configured for the catalog's language.
pub struct CatalogCollator {
    locale: String,
    collator: Collator,
}

impl CatalogCollator {
    /// Create a collator for a BCP-47 locale tag (e.g. "es", "es-PE")
    pub fn new(locale: &str) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|e| FundosError::Locale {
            locale: locale.to_string(),
            reason: format!("{:?}", e),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator =
            Collator::try_new(&(&parsed).into(), options).map_err(|e| FundosError::Locale {
                locale: locale.to_string(),
                reason: format!("{:?}", e),
            })?;

        Ok(Self { locale: locale.to_string(), collator })
    }

    /// Collator for the default Spanish locale
    pub fn spanish() -> Result<Self> {
        Self::new(DEFAULT_LOCALE)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Sort strings in place, ascending
    pub fn sort(&self, values: &mut [String]) {
        values.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Debug for CatalogCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCollator").field("locale", &self.locale).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        let collator = CatalogCollator::spanish().unwrap();
        let mut names = vec![
            "Miraflores".to_string(),
            "México".to_string(),
            "Lurín".to_string(),
            "La Molina".to_string(),
            "Zapallal".to_string(),
        ];
        collator.sort(&mut names);
        assert_eq!(names, vec!["La Molina", "Lurín", "México", "Miraflores", "Zapallal"]);
    }

    #[test]
    fn test_case_does_not_dominate_ordering() {
        let collator = CatalogCollator::spanish().unwrap();
        assert_eq!(collator.compare("parque", "Salazar"), Ordering::Less);
        assert_eq!(collator.compare("Fundo", "Parque"), Ordering::Less);
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let err = CatalogCollator::new("not a locale!").unwrap_err();
        assert!(matches!(err, FundosError::Locale { .. }));
    }
}
