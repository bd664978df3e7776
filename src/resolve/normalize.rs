//! Slug normalisation for hand-written frontmatter references.

use std::sync::LazyLock;

use deunicode::deunicode;
use regex::Regex;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Canonical slug form of a frontmatter value.
///
/// `"PayU Latam"` → `"payu-latam"`, `"Café  Ops"` → `"cafe-ops"`.
pub fn normalize_slug(raw: &str) -> String {
    let ascii = deunicode(raw).to_ascii_lowercase();
    NON_ALNUM
        .replace_all(&ascii, "-")
        .trim_matches('-')
        .to_owned()
}

/// Slug with every separator removed, so `"route-mobile"` meets `"routemobile"`.
pub(super) fn compact(slug: &str) -> String {
    slug.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Find an entry by slug, tolerating case, accents and separator variants.
///
/// Tries the normalised form, then the raw value, then both with separators
/// removed.
pub(super) fn find_by_slug<'a, T>(
    table: &'a [T],
    raw: &str,
    slug_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let normalized = normalize_slug(raw);
    if let Some(hit) = table
        .iter()
        .find(|entry| slug_of(entry) == normalized || slug_of(entry) == raw)
    {
        return Some(hit);
    }

    let compacted = compact(&normalized);
    if compacted.is_empty() {
        return None;
    }
    table.iter().find(|entry| compact(slug_of(entry)) == compacted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("PayU Latam"), "payu-latam");
        assert_eq!(normalize_slug("  side_project "), "side-project");
        assert_eq!(normalize_slug("To Read!"), "to-read");
        assert_eq!(normalize_slug("Café  Ops"), "cafe-ops");
        assert_eq!(normalize_slug("---"), "");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("route-mobile"), "routemobile");
    }

    #[test]
    fn test_find_by_slug() {
        let table = ["payu-latam", "routemobile"];
        let find = |raw: &str| find_by_slug(&table, raw, |s| *s).copied();

        assert_eq!(find("PayU Latam"), Some("payu-latam"));
        assert_eq!(find("Route Mobile"), Some("routemobile"));
        assert_eq!(find("payu-latam"), Some("payu-latam"));
        assert_eq!(find("unknown"), None);
        assert_eq!(find(""), None);
    }
}
