//! Error types for markdown conversion.

/// Error raised while converting a single markdown document.
///
/// All variants are fatal for the document being converted; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    /// An inline delimiter appears an odd number of times in a plain-text run.
    #[error("Invalid markdown syntax: unclosed delimiter '{delimiter}' in text '{text}'")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A node is missing a field it needs in order to be serialized.
    #[error("Malformed HTML node: {0}")]
    Structure(&'static str),

    /// The document has no level-1 heading to use as its title.
    #[error("No level-1 heading found")]
    NoTitle,
}
