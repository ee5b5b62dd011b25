//! Heuristic cleanup of legal/marketing company names into display names.
//!
//! `"Acme Technologies, Inc."` becomes `"Acme"`, `"The Widget Co."` becomes
//! `"Widget"`. The steps run in a fixed order:
//!
//! 1. keep only the text before the first `", "`
//! 2. drop one leading article (`the`, `a`, `an`)
//! 3. truncate at the first corporate suffix phrase, in priority order, that
//!    stands as a whole word
//! 4. undo markup escapes such as `&amp;`

/// Leading articles, lower-case, with their separating space.
const ARTICLES: [&str; 3] = ["the ", "a ", "an "];

/// Markup escapes some providers leave in names.
const SUBSTITUTIONS: [(&str, &str); 4] = [
    ("&amp;", "&"),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&quot;", "\""),
];

/// Default suffix phrases, highest priority first.
pub const DEFAULT_CORPORATE_SUFFIXES: &[&str] = &[
    "technologies",
    "technology",
    "holdings",
    "holding",
    "group",
    "platforms",
    "enterprises",
    "industries",
    "systems",
    "incorporated",
    "inc.",
    "inc",
    "corporation",
    "corp.",
    "corp",
    "company",
    "co.",
    "co",
    "limited",
    "ltd.",
    "ltd",
    "plc",
    "llc",
    "l.p.",
    "n.v.",
    "s.a.",
    "ag",
    "se",
];

#[derive(Debug, Clone)]
pub struct CompanyNameNormalizer {
    suffixes: Vec<String>,
}

impl Default for CompanyNameNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CORPORATE_SUFFIXES.iter().map(|s| s.to_string()))
    }
}

impl CompanyNameNormalizer {
    pub fn new(suffixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Clean up `raw`. Never fails: anything unexpected returns `raw` as-is.
    ///
    /// The result may be empty; callers treat that as "no name".
    pub fn normalize(&self, raw: &str) -> String {
        self.try_normalize(raw).unwrap_or_else(|| {
            tracing::debug!(raw, "name cleanup fell back to raw input");
            raw.to_string()
        })
    }

    fn try_normalize(&self, raw: &str) -> Option<String> {
        let head = raw.split(", ").next()?;
        let mut name = strip_article(head)?;

        if let Some(cut) = self.find_suffix(name) {
            name = name.get(..cut)?.trim_end();
        }

        let mut out = name.to_string();
        for (from, to) in SUBSTITUTIONS {
            out = out.replace(from, to);
        }
        Some(out)
    }

    /// Byte offset of the first accepted suffix match in `name`.
    fn find_suffix(&self, name: &str) -> Option<usize> {
        // ASCII folding keeps byte offsets aligned with `name`.
        let lower = name.to_ascii_lowercase();
        self.suffixes
            .iter()
            .find_map(|phrase| find_whole_word(&lower, phrase))
    }
}

fn strip_article(name: &str) -> Option<&str> {
    let lower = name.to_ascii_lowercase();
    match ARTICLES.iter().find(|a| lower.starts_with(*a)) {
        Some(article) => name.get(article.len()..),
        None => Some(name),
    }
}

/// First occurrence of `phrase` in `haystack` bounded by whitespace or the
/// string edges on both sides.
///
/// Only checking the character after the phrase would cut `"Sysco"` to
/// `"Sys"` via `"co"`; the leading boundary is a deliberate tightening of
/// that rule.
fn find_whole_word(haystack: &str, phrase: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(pos) = haystack.get(from..)?.find(phrase) {
        let start = from + pos;
        let end = start + phrase.len();

        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if before_ok && after_ok {
            return Some(start);
        }

        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        CompanyNameNormalizer::default().normalize(raw)
    }

    #[test]
    fn test_drops_jurisdiction_and_descriptor() {
        assert_eq!(clean("Acme Technologies, Inc."), "Acme");
    }

    #[test]
    fn test_drops_article_and_legal_suffix() {
        assert_eq!(clean("The Widget Co."), "Widget");
        assert_eq!(clean("An Example Corp"), "Example");
    }

    #[test]
    fn test_article_stripped_once() {
        assert_eq!(clean("The The Band"), "The Band");
    }

    #[test]
    fn test_embedded_phrase_does_not_truncate() {
        assert_eq!(clean("Incorporation Holdings"), "Incorporation");
        assert_eq!(clean("Cosmos Ltd"), "Cosmos");
    }

    #[test]
    fn test_suffix_inside_a_word_is_ignored() {
        assert_eq!(clean("Sysco"), "Sysco");
        assert_eq!(clean("Sysco Corp"), "Sysco");
    }

    #[test]
    fn test_only_one_truncation() {
        // "holdings" wins; the trailing "inc" is never considered afterwards.
        assert_eq!(clean("Inc Capital Holdings Inc"), "Inc Capital");
    }

    #[test]
    fn test_unescapes_ampersand() {
        assert_eq!(clean("Johnson &amp; Johnson"), "Johnson & Johnson");
    }

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(clean("Tesla"), "Tesla");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_truncation_to_empty_is_accepted() {
        assert_eq!(clean("Holdings"), "");
    }

    #[test]
    fn test_non_ascii_names_survive() {
        assert_eq!(clean("Société Générale SA Group"), "Société Générale SA");
    }

    #[test]
    fn test_custom_priority_order() {
        let normalizer =
            CompanyNameNormalizer::new(vec!["inc".to_string(), "holdings".to_string()]);
        assert_eq!(normalizer.normalize("Acme Holdings Inc"), "Acme Holdings");
    }
}
