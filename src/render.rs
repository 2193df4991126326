use crate::block::{Block, BlockKind};
use crate::error::MarkdownError;
use crate::inline::text_to_children;
use crate::node::HtmlNode;

/// Convert blocks to a single `<div>` tree
pub fn blocks_to_html(blocks: &[Block]) -> Result<HtmlNode, MarkdownError> {
    let children = blocks
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

fn block_to_html(block: &Block) -> Result<HtmlNode, MarkdownError> {
    let text = block.text.as_str();
    match block.kind {
        BlockKind::Paragraph => {
            let children = text_to_children(&text.replace('\n', " "))?;
            Ok(HtmlNode::parent("p", children))
        }
        BlockKind::Heading(level) => {
            // Marker is `level` hashes and one space, all ASCII.
            let content = text.get(usize::from(level) + 1..).unwrap_or_default();
            Ok(HtmlNode::parent(
                format!("h{level}"),
                text_to_children(content)?,
            ))
        }
        BlockKind::Code => Ok(code_to_html(text)),
        BlockKind::Quote => {
            let content = text
                .split('\n')
                .map(|line| {
                    line.strip_prefix("> ")
                        .or_else(|| line.strip_prefix('>'))
                        .unwrap_or(line)
                })
                .collect::<Vec<_>>()
                .join("\n");
            Ok(HtmlNode::parent("blockquote", text_to_children(&content)?))
        }
        BlockKind::UnorderedList => {
            list_to_html("ul", text, |line| line.strip_prefix("- ").unwrap_or(line))
        }
        BlockKind::OrderedList => list_to_html("ol", text, |line| {
            line.find(". ").map_or(line, |dot| &line[dot + 2..])
        }),
    }
}

/// Code is emitted as-is: the fences are removed, along with a single newline after the opening one.
fn code_to_html(text: &str) -> HtmlNode {
    let inner = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or_default();
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", inner)])
}

fn list_to_html(
    tag: &str,
    text: &str,
    strip_marker: impl Fn(&str) -> &str,
) -> Result<HtmlNode, MarkdownError> {
    let items = text
        .split('\n')
        .map(|line| {
            text_to_children(strip_marker(line)).map(|children| HtmlNode::parent("li", children))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}
