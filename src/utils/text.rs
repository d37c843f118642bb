// normalizes user entered text for comparison
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// case-insensitive keyword match, blank keywords never match
pub(crate) fn matches_keyword(text: &str, keyword: &str) -> bool {
    let keyword = normalize(keyword);
    if keyword.is_empty() {
        return false;
    }
    normalize(text).contains(keyword.as_str())
}

#[cfg(test)]
mod tests {
    use crate::utils::text::{matches_keyword, normalize};

    #[tokio::test]
    async fn test_should_normalize_text() {
        assert_eq!("dune messiah", normalize("  Dune Messiah "));
        assert_eq!("", normalize("   "));
    }

    #[tokio::test]
    async fn test_should_match_keyword() {
        assert!(matches_keyword("The Left Hand of Darkness", "left hand"));
        assert!(matches_keyword("The Left Hand of Darkness", "the left hand of darkness"));
        assert!(!matches_keyword("The Left Hand of Darkness", "right hand"));
    }

    #[tokio::test]
    async fn test_should_not_match_blank_keyword() {
        assert!(!matches_keyword("The Left Hand of Darkness", ""));
        assert!(!matches_keyword("The Left Hand of Darkness", "   "));
    }
}
