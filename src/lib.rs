mod block;
mod config;
mod error;
mod inline;
mod node;
mod parser;
mod render;
pub mod site;
mod title;

pub use block::{Block, BlockKind, Span};
pub use config::{Config, ConfigError, SiteConfig, TemplateConfig};
pub use error::MarkdownError;
pub use inline::{split_delimiter, split_images, split_links, tokenize};
pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parser::{classify, segment};
pub use title::extract_title;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to an HTML tree rooted at a `<div>`.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let blocks = parse(markdown);
    render::blocks_to_html(&blocks)
}

/// Convert markdown to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.to_html()
}
