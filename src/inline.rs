//! Inline tokenizer.
//!
//! Text is tokenized by a fixed sequence of passes over a span list. Each pass
//! rewrites `Span::Plain` entries only and passes every other span through, so
//! text captured by an earlier pass is never re-read by a later one:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)` not preceded by `!`
//! 3. bold `**`
//! 4. italic `*`
//! 5. italic `_`
//! 6. code `` ` ``

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::block::Span;
use crate::error::MarkdownError;
use crate::node::{Attributes, HtmlNode};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Delimiter passes, applied in order after links.
const DELIMITER_PASSES: [(&str, fn(String) -> Span); 4] = [
    ("**", Span::Bold),
    ("*", Span::Italic),
    ("_", Span::Italic),
    ("`", Span::Code),
];

/// Tokenize inline markdown into spans.
pub fn tokenize(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let spans = vec![Span::Plain(text.to_string())];
    let spans = split_images(spans);
    let spans = split_links(spans);
    DELIMITER_PASSES
        .iter()
        .try_fold(spans, |spans, &(delimiter, style)| {
            split_delimiter(spans, delimiter, style)
        })
}

/// Tokenize inline markdown straight into HTML nodes.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(tokenize(text)?.iter().map(Span::to_html_node).collect())
}

/// Extract `![alt](url)` from plain spans.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_images)
}

/// Extract `[text](url)` from plain spans, skipping anything preceded by `!`.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_links)
}

/// Split plain spans on a paired delimiter.
///
/// Parts alternate between plain text and `style`d text. Empty parts are dropped.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    style: fn(String) -> Span,
) -> Result<Vec<Span>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };
        if text.is_empty() {
            continue;
        }
        if !text.contains(delimiter) {
            out.push(Span::Plain(text));
            continue;
        }

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnclosedDelimiter {
                delimiter,
                text: text.clone(),
            });
        }
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::Plain(part.to_string()));
            } else {
                out.push(style(part.to_string()));
            }
        }
    }

    Ok(out)
}

fn split_matches(spans: Vec<Span>, find: fn(&str) -> Vec<(Range<usize>, Span)>) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };
        if text.is_empty() {
            continue;
        }

        let mut cursor = 0;
        for (range, found) in find(&text) {
            if range.start > cursor {
                out.push(Span::Plain(text[cursor..range.start].to_string()));
            }
            out.push(found);
            cursor = range.end;
        }
        if cursor < text.len() {
            out.push(Span::Plain(text[cursor..].to_string()));
        }
    }

    out
}

fn find_images(text: &str) -> Vec<(Range<usize>, Span)> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let image = Span::Image {
                alt: caps[1].to_string(),
                url: Some(caps[2].to_string()),
            };
            Some((whole.range(), image))
        })
        .collect()
}

fn find_links(text: &str) -> Vec<(Range<usize>, Span)> {
    let mut found = Vec::new();
    let mut start = 0;

    while let Some(caps) = LINK_RE.captures_at(text, start) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        // An image marker; retry from the next character.
        if text[..whole.start()].ends_with('!') {
            start = whole.start() + 1;
            continue;
        }
        let link = Span::Link {
            text: caps[1].to_string(),
            url: Some(caps[2].to_string()),
        };
        found.push((whole.range(), link));
        start = whole.end();
    }

    found
}

impl Span {
    /// Map the span to the HTML node that renders it.
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            Span::Plain(text) => HtmlNode::raw(text.as_str()),
            Span::Bold(text) => HtmlNode::leaf("b", text.as_str()),
            Span::Italic(text) => HtmlNode::leaf("i", text.as_str()),
            Span::Code(text) => HtmlNode::leaf("code", text.as_str()),
            Span::Link { text, url } => HtmlNode::leaf_with_attributes(
                "a",
                text.as_str(),
                Attributes::new().with("href", url.clone()),
            ),
            Span::Image { alt, url } => HtmlNode::leaf_with_attributes(
                "img",
                "",
                Attributes::new()
                    .with("src", url.clone())
                    .with("alt", Some(alt.clone())),
            ),
        }
    }
}
