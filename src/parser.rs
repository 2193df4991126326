use crate::block::{Block, BlockKind};

const CODE_FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Parse markdown text into a list of classified blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    segment(markdown)
        .into_iter()
        .map(|text| {
            let kind = classify(text);
            tracing::trace!(?kind, len = text.len(), "classified block");
            Block {
                kind,
                text: text.to_string(),
            }
        })
        .collect()
}

/// Determine the structural type of a block. Anything unrecognised is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if block.len() >= 2 * CODE_FENCE.len()
        && block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
    {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Number of leading `#`s when they form a heading marker (1 to 6, then a space).
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) || !block[hashes..].starts_with(' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// Every line must be numbered `1. `, `2. `, ... with no gaps.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
