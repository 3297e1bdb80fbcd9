//! Index constructs (ODF 1.2 §8): illustration index, table of contents and
//! the other generated listings.
//!
//! Only the paragraphs of the index body are extracted. The walker is
//! permissive: anything it does not recognize (the `*-source` generation
//! directives, generated cross-reference markup) is skipped.

use super::inline::paragraph_from;
use super::model::Paragraph;
use crate::common::Result;
use crate::odf::core::{XmlElement, XmlNode};
use crate::odf::elements::tag_matcher::{OdfTag, match_tag};
use log::trace;

/// What an element means inside an index construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexConstruct {
    /// `text:illustration-index-source`
    Source,
    /// `text:index-body`
    Body,
    /// `text:index-title`, whose paragraphs are lifted into the result
    Title,
    /// `text:p` / `text:h`
    Paragraph,
    Other,
}

impl IndexConstruct {
    fn classify(name: &str) -> Self {
        match match_tag(name.as_bytes()) {
            OdfTag::TextIllustrationIndexSource => IndexConstruct::Source,
            OdfTag::TextIndexBody => IndexConstruct::Body,
            OdfTag::TextIndexTitle => IndexConstruct::Title,
            OdfTag::TextP | OdfTag::TextH => IndexConstruct::Paragraph,
            _ => IndexConstruct::Other,
        }
    }
}

/// Extract the flat list of paragraphs of an index construct
pub(crate) fn index_paragraphs(element: &XmlElement) -> Result<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();
    collect_index(element, &mut paragraphs)?;
    Ok(paragraphs)
}

fn collect_index(element: &XmlElement, paragraphs: &mut Vec<Paragraph>) -> Result<()> {
    for node in element.children() {
        let XmlNode::Element(child) = node else {
            continue;
        };
        match IndexConstruct::classify(child.name()) {
            IndexConstruct::Source => {},
            IndexConstruct::Body | IndexConstruct::Title => collect_index(child, paragraphs)?,
            IndexConstruct::Paragraph => paragraphs.push(paragraph_from(child)?),
            IndexConstruct::Other => trace!("skipping {} inside {}", child.name(), element.name()),
        }
    }
    Ok(())
}
