//! Locale-string normalization against the catalog.

use crate::catalog::{self, base_tag};

/// Normalize a locale identifier to the closest catalog code.
///
/// - Converts `_` to `-` (Android often reports `en_US`) and trims whitespace.
/// - An exact catalog match is returned as-is, so script-qualified codes like
///   `sr-LATN-RS` keep their full specificity.
/// - Otherwise the base language tag is resolved through the catalog's
///   base-language index (`"pt"` -> `"pt-BR"`).
/// - Anything unresolvable passes through unchanged; callers treat a
///   non-catalog result as "unsupported". This function never fails.
pub fn normalize_locale(input: &str) -> String {
    let normalized = input.trim().replace('_', "-");

    if catalog::is_catalog_code(&normalized) {
        return normalized;
    }

    if let Some(&full) = catalog::base_index().get(&base_tag(&normalized)) {
        return full.to_string();
    }

    normalized
}
