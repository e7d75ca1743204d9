use std::collections::{HashMap, HashSet};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a header label or lookup key into a canonical matching form:
/// lowercase, diacritics stripped, runs of non-alphanumerics collapsed to
/// single spaces, trimmed.
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(lower);
            } else {
                pending_space = true;
            }
        }
    }

    out
}

/// Lenient numeric coercion for sheet cells. Strips whitespace (including
/// thousands-group spaces), accepts comma as decimal separator, and yields
/// `NaN` instead of failing on anything unparseable.
pub fn to_number(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return f64::NAN;
    }
    cleaned.replace(',', ".").parse().unwrap_or(f64::NAN)
}

/// URL-safe base slug for a display name: `normalize_key` with hyphens.
pub fn base_slug_from_name(name: &str) -> String {
    normalize_key(name).replace(' ', "-")
}

/// Assign unique slugs to the given names in row order. The first holder of
/// a base slug keeps it bare; later duplicates get a 1-based occurrence
/// suffix (`john`, `john-2`, `john-3`). Stable across reloads as long as the
/// input order is stable.
///
/// A literal name can normalize straight into a suffixed form (`"John 2"` →
/// `john-2`), so candidates already taken keep advancing their occurrence
/// counter until a free slug is found.
pub fn build_deterministic_slugs<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();

    names
        .iter()
        .map(|name| {
            let mut base = base_slug_from_name(name.as_ref());
            if base.is_empty() {
                base = "player".to_string();
            }
            let count = counts.entry(base.clone()).or_insert(0);
            *count += 1;
            let mut slug = if *count == 1 {
                base.clone()
            } else {
                format!("{}-{}", base, count)
            };
            while !used.insert(slug.clone()) {
                *count += 1;
                slug = format!("{}-{}", base, count);
            }
            slug
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_folds_case_diacritics_and_spacing() {
        assert_eq!(normalize_key("  Peak   Rating "), "peak rating");
        assert_eq!(normalize_key("Jan Novák"), "jan novak");
        assert_eq!(normalize_key("WIN / LOSS"), "win loss");
        assert_eq!(normalize_key("Élo (current)"), "elo current");
        assert_eq!(normalize_key("---"), "");
    }

    #[test]
    fn to_number_handles_grouping_and_decimal_comma() {
        assert_eq!(to_number("1 234,5"), 1234.5);
        assert_eq!(to_number("42"), 42.0);
        assert_eq!(to_number(" -3.25 "), -3.25);
        assert!(to_number("").is_nan());
        assert!(to_number("abc").is_nan());
        assert!(to_number("1.2.3").is_nan());
    }

    #[test]
    fn slugs_deduplicate_in_row_order() {
        assert_eq!(
            build_deterministic_slugs(&["Jan Novák", "Jan Novák", "Petr"]),
            vec!["jan-novak", "jan-novak-2", "petr"]
        );
    }

    #[test]
    fn slugs_fall_back_for_unusable_names() {
        assert_eq!(
            build_deterministic_slugs(&["???", "!!!"]),
            vec!["player", "player-2"]
        );
    }

    #[test]
    fn literal_suffixed_names_never_collide() {
        // "John 2" claims john-2 outright, so the second "John" has to keep
        // counting until a free slug turns up.
        let slugs = build_deterministic_slugs(&["John", "John 2", "John"]);
        assert_eq!(slugs, vec!["john", "john-2", "john-3"]);

        let mut unique: Vec<&String> = slugs.iter().collect();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), slugs.len());
    }

    #[test]
    fn slug_numbering_counts_per_base() {
        assert_eq!(
            build_deterministic_slugs(&["A", "B", "A", "A", "B"]),
            vec!["a", "b", "a-2", "a-3", "b-2"]
        );
    }
}
