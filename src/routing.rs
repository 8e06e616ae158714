//! Routing - Locale Detection and Path Rewriting
//!
//! Pure functions mapping URL paths to locale codes and back. Both are
//! total: malformed, empty or prefix-less input resolves to the registry
//! default rather than failing.

use crate::helpers::{first_segment, rooted, strip_leading_segment};
use crate::registry::LanguageRegistry;

/// Detect the active locale from a URL path
///
/// The first non-empty segment selects a language when it exactly matches
/// a registered code; anything else resolves to the default code.
pub fn detect<'r>(registry: &'r LanguageRegistry, path: &str) -> &'r str {
    if let Some(segment) = first_segment(path) {
        if let Some(entry) = registry.get(segment) {
            return &entry.code;
        }
    }
    registry.default_code()
}

/// Strip one registered non-default locale prefix from a rooted path
///
/// At most one prefix is removed; a path emptied by stripping becomes `/`.
/// Unregistered first segments are page content and are left alone.
pub fn strip_locale_prefix<'p>(registry: &LanguageRegistry, path: &'p str) -> &'p str {
    for code in registry.codes() {
        if registry.is_default(code) {
            continue;
        }
        if let Some(rest) = strip_leading_segment(path, code) {
            return if rest.is_empty() { "/" } else { rest };
        }
    }
    path
}

/// Rewrite a path to address the target language
///
/// Any existing non-default locale prefix is stripped first, so applying
/// the rewrite twice with the same target yields the same path. The
/// remainder of the path is preserved verbatim. The caller is expected to
/// pass a registered target code; the default code produces an unprefixed
/// path.
pub fn rewrite(registry: &LanguageRegistry, path: &str, target: &str) -> String {
    let path = rooted(path);
    let remaining = strip_locale_prefix(registry, &path);

    if registry.is_default(target) {
        remaining.to_string()
    } else {
        format!("/{target}{remaining}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::LanguageEntry;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::builtin()
    }

    #[test]
    fn test_detect_registered_prefix() {
        let registry = registry();
        assert_eq!(detect(&registry, "/fr-FR/about"), "fr-FR");
        assert_eq!(detect(&registry, "/fr-FR"), "fr-FR");
        assert_eq!(detect(&registry, "/fr-FR/"), "fr-FR");
        assert_eq!(detect(&registry, "/en/pricing"), "en");
    }

    #[test]
    fn test_detect_defaults_without_prefix() {
        let registry = registry();
        assert_eq!(detect(&registry, "/about"), "en");
        assert_eq!(detect(&registry, "/"), "en");
        assert_eq!(detect(&registry, ""), "en");
        // Unregistered codes are page content, not locales
        assert_eq!(detect(&registry, "/de/about"), "en");
        // Substring of a registered code does not match
        assert_eq!(detect(&registry, "/fr-FRx/about"), "en");
    }

    #[test]
    fn test_rewrite_prefixes_plain_path() {
        let registry = registry();
        assert_eq!(rewrite(&registry, "/about", "fr-FR"), "/fr-FR/about");
    }

    #[test]
    fn test_rewrite_strips_on_default_selection() {
        let registry = registry();
        assert_eq!(rewrite(&registry, "/fr-FR/about", "en"), "/about");
        assert_eq!(rewrite(&registry, "/fr-FR", "en"), "/");
    }

    #[test]
    fn test_rewrite_same_target_is_unchanged() {
        let registry = registry();
        assert_eq!(rewrite(&registry, "/fr-FR/about", "fr-FR"), "/fr-FR/about");
    }

    #[test]
    fn test_rewrite_root_and_empty_paths() {
        let registry = registry();
        assert_eq!(rewrite(&registry, "/", "fr-FR"), "/fr-FR/");
        assert_eq!(rewrite(&registry, "", "fr-FR"), "/fr-FR/");
        assert_eq!(rewrite(&registry, "/", "en"), "/");
        assert_eq!(rewrite(&registry, "", "en"), "/");
    }

    #[test]
    fn test_rewrite_keeps_unregistered_prefix() {
        // "de" is not registered, so it is page content and survives the
        // rewrite untouched.
        let registry = registry();
        assert_eq!(rewrite(&registry, "/de/about", "fr-FR"), "/fr-FR/de/about");
        assert_eq!(rewrite(&registry, "/de/about", "en"), "/de/about");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let registry = registry();
        for path in ["/about", "/fr-FR/about", "/", "", "/de/x", "/blog/2024/"] {
            for target in ["en", "fr-FR"] {
                let once = rewrite(&registry, path, target);
                let twice = rewrite(&registry, &once, target);
                assert_eq!(once, twice, "path {path:?} target {target:?}");
            }
        }
    }

    #[test]
    fn test_rewrite_round_trip_strips_prefix() {
        let registry = registry();
        for path in ["/about", "/blog/post/", "/"] {
            let prefixed = rewrite(&registry, path, "fr-FR");
            assert_eq!(rewrite(&registry, &prefixed, "en"), path);
        }
    }

    #[test]
    fn test_rewrite_preserves_trailing_slash() {
        let registry = registry();
        assert_eq!(rewrite(&registry, "/about/", "fr-FR"), "/fr-FR/about/");
        assert_eq!(rewrite(&registry, "/fr-FR/about/", "en"), "/about/");
    }

    #[test]
    fn test_detect_matches_every_registered_code() {
        let registry = LanguageRegistry::new(
            "en",
            vec![
                LanguageEntry::new("en", "English", "", "EN"),
                LanguageEntry::new("fr-FR", "Français", "", "FR"),
                LanguageEntry::new("de-DE", "Deutsch", "", "DE"),
            ],
        )
        .expect("valid registry");

        for code in ["fr-FR", "de-DE"] {
            assert_eq!(detect(&registry, &format!("/{code}/docs")), code);
            assert_eq!(rewrite(&registry, "/docs", code), format!("/{code}/docs"));
        }
    }

    #[test]
    fn test_only_first_prefix_is_stripped() {
        let registry = registry();
        // A second locale-looking segment is part of the page path.
        assert_eq!(
            rewrite(&registry, "/fr-FR/fr-FR/about", "en"),
            "/fr-FR/about"
        );
    }
}
