// src/core/sanitize.rs
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Turn display text into a slug: lowercase, trimmed, accents dropped,
/// every space replaced by `-`.
///
/// `"Notícias"` → `"noticias"`, `"Rede Globo"` → `"rede-globo"`.
/// Runs of spaces are not collapsed: each one becomes its own hyphen.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .trim()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Drop the final character (`"/globorio/"` → `"/globorio"`).
/// Empty input stays empty.
pub fn strip_last_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_are_stripped() {
        assert_eq!(normalize_name("Notícias"), "noticias");
        assert_eq!(normalize_name("São Paulo"), "sao-paulo");
        assert_eq!(normalize_name("TV Integração"), "tv-integracao");
    }

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(normalize_name("Rede Globo"), "rede-globo");
        assert_eq!(normalize_name("  Globo Rio \n"), "globo-rio");
        assert_eq!(normalize_name("a  b"), "a--b");
    }

    #[test]
    fn blank_input_gives_empty_slug() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name(" \t "), "");
    }

    #[test]
    fn uppercase_accents_fold_too() {
        assert_eq!(normalize_name("ÁGUA ÉPICA"), "agua-epica");
    }

    #[test]
    fn last_char_goes() {
        assert_eq!(strip_last_char("/globorio/programacao/"), "/globorio/programacao");
        assert_eq!(strip_last_char("é"), "");
        assert_eq!(strip_last_char(""), "");
    }
}
