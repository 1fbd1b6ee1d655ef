// sondeo-core/src/domain/naming.rs
//
// XLSForm `name` columns only accept lowercase ASCII identifiers. Labels are
// Spanish free text, so every label goes through `slugify` before landing in
// a `name` cell, and `ensure_unique` resolves collisions with a counter.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Fallback identifier when a label has no salvageable characters.
pub const DEFAULT_NAME: &str = "campo";

#[allow(clippy::expect_used)]
static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("literal pattern"));

/// Converts free text into a valid XLSForm identifier.
///
/// Accented vowels and "ñ" are transliterated, everything outside `[a-z0-9]`
/// collapses to a single underscore, leading/trailing underscores are
/// stripped. Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(label: &str) -> String {
    let transliterated: String = label
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect();

    let slug = NON_ALNUM
        .replace_all(&transliterated, "_")
        .trim_matches('_')
        .to_string();

    if slug.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        slug
    }
}

/// Returns `base` if unused, otherwise the first free `base_2`, `base_3`, …
pub fn ensure_unique(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    let mut i = 2;
    loop {
        let candidate = format!("{base}_{i}");
        if !used.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}
