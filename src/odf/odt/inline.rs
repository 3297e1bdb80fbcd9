//! Paragraph content (ODF 1.2 §5.1.3): the inline runs of `text:p` / `text:h`.

use super::model::Paragraph;
use crate::common::{Error, Result};
use crate::odf::core::{XmlElement, XmlNode};
use crate::odf::elements::tag_matcher::{OdfTag, is_draw_tag, match_tag};

/// What an element means inside paragraph content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineConstruct {
    /// `draw:*` / `dr3d:*`, skipped with its subtree
    Drawing,
    /// `text:s`
    Space,
    /// `text:tab`
    Tab,
    /// Spans, hyperlinks, bookmarks and any other element: transparent
    Wrapper,
}

impl InlineConstruct {
    fn classify(name: &str) -> Self {
        if is_draw_tag(name.as_bytes()) {
            return InlineConstruct::Drawing;
        }
        match match_tag(name.as_bytes()) {
            OdfTag::TextS => InlineConstruct::Space,
            OdfTag::TextTab => InlineConstruct::Tab,
            _ => InlineConstruct::Wrapper,
        }
    }
}

/// Build a paragraph from a `text:p` / `text:h` element
pub(crate) fn paragraph_from(element: &XmlElement) -> Result<Paragraph> {
    let mut paragraph = Paragraph::new();
    collect_runs(element.children(), &mut paragraph)?;
    Ok(paragraph)
}

/// Append the runs found in `nodes` to `paragraph`, in document order.
pub(crate) fn collect_runs(nodes: &[XmlNode], paragraph: &mut Paragraph) -> Result<()> {
    for node in nodes {
        match node {
            XmlNode::Element(element) => match InlineConstruct::classify(element.name()) {
                InlineConstruct::Drawing => {},
                InlineConstruct::Space => paragraph.push_text(" ".repeat(repeat_count(element)?)),
                InlineConstruct::Tab => paragraph.push_text("\t".repeat(repeat_count(element)?)),
                InlineConstruct::Wrapper => collect_runs(element.children(), paragraph)?,
            },
            XmlNode::Text(text) => paragraph.push_text(text.as_str()),
            other => return Err(Error::UnsupportedNodeType(other.kind())),
        }
    }
    Ok(())
}

/// Longest run a single `text:s` / `text:tab` may expand to
pub const MAX_REPEAT_COUNT: usize = 1 << 20;

/// Run length of a `text:s` / `text:tab` from its `text:c` attribute.
///
/// Absent or non-numeric values mean 1. Counts above [`MAX_REPEAT_COUNT`],
/// including digit strings too wide for `u64`, are rejected.
fn repeat_count(element: &XmlElement) -> Result<usize> {
    let Some(value) = element
        .attribute("text:c")
        .or_else(|| element.attribute("c"))
    else {
        return Ok(1);
    };

    let value = value.trim();
    match parse_count(value) {
        Some(count) if count <= MAX_REPEAT_COUNT as u64 => Ok(count as usize),
        Some(_) => Err(Error::RepeatCountTooLarge(value.to_string())),
        None if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            Err(Error::RepeatCountTooLarge(value.to_string()))
        },
        None => Ok(1),
    }
}

/// Fast integer parsing using atoi_simd
fn parse_count(value: &str) -> Option<u64> {
    atoi_simd::parse::<u64, false, false>(value.as_bytes()).ok()
}
