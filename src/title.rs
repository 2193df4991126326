use crate::error::MarkdownError;
use crate::parser::segment;

/// Text of the first level-1 heading, trimmed. Inline markdown is left as written.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    segment(markdown)
        .into_iter()
        .find_map(title_from_block)
        .map(str::to_string)
        .ok_or(MarkdownError::NoTitle)
}

fn title_from_block(block: &str) -> Option<&str> {
    block.strip_prefix("# ").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", "Hello")]
    #[case("# Hello   ", "Hello")]
    #[case("  # Indented block\n\nbody", "Indented block")]
    #[case("intro\n\n## Not this\n\n# This one\n\n# Not the second", "This one")]
    #[case("# Keep **bold** markers", "Keep **bold** markers")]
    #[case("# <script>", "<script>")]
    fn extracts_first_h1(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("no heading here")]
    #[case("## Only h2\n\n### and h3")]
    #[case("#NoSpace")]
    fn missing_title(#[case] markdown: &str) {
        assert_eq!(extract_title(markdown), Err(MarkdownError::NoTitle));
    }

    #[test]
    fn empty_heading_text_is_allowed() {
        assert_eq!(title_from_block("#   "), Some(""));
        assert_eq!(title_from_block("# "), Some(""));
    }

    #[test]
    fn unclosed_delimiters_are_not_checked() {
        assert_eq!(extract_title("# A `tick").unwrap(), "A `tick");
    }
}
