/// Inline text spans produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: Option<String> },
    Image { alt: String, url: Option<String> },
}

impl Span {
    /// Literal text carried by the span (anchor text for links, alt text for images).
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Plain(_))
    }
}

/// Structural type of a markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading level, always in `1..=6`
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A block of the source document.
///
/// `text` is the trimmed block with its markdown markers still in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}
