//! Body element dispatch (ODF 1.2 §3.4, children of `office:text`).
//!
//! This is the single place deciding which block-level constructs are
//! understood. Supporting a new construct means adding a `BodyConstruct`
//! variant and its arm in `dispatch`.

use super::index::index_paragraphs;
use super::inline::paragraph_from;
use super::model::Paragraph;
use super::options::ParseOptions;
use super::table::assemble_table;
use crate::common::{Error, Result};
use crate::odf::core::XmlNode;
use crate::odf::elements::tag_matcher::{OdfTag, match_tag};
use log::trace;

/// Where a body-level node sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Direct child of `office:text`
    Root,
    /// Inside a table cell
    Nested,
}

/// Result of dispatching one body-level node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyItem {
    /// The node carries no content
    None,
    /// A paragraph, heading or table wrapper
    One(Paragraph),
    /// The paragraphs of an index construct, in order
    Many(Vec<Paragraph>),
}

/// Block-level constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyConstruct {
    /// `text:p` / `text:h`
    Paragraph,
    /// `table:table`
    Table,
    /// `text:illustration-index` and the other index constructs
    Index,
    /// Declarations with no extractable text, allowed at root only
    Declaration,
    Other,
}

impl BodyConstruct {
    fn classify(name: &str) -> Self {
        match match_tag(name.as_bytes()) {
            OdfTag::TextP | OdfTag::TextH => BodyConstruct::Paragraph,
            OdfTag::TableTable => BodyConstruct::Table,
            tag if tag.is_index() => BodyConstruct::Index,
            OdfTag::TextIllustrationIndexSource
            | OdfTag::TextSequenceDecls
            | OdfTag::TextVariableDecls
            | OdfTag::TextTrackedChanges => BodyConstruct::Declaration,
            _ => BodyConstruct::Other,
        }
    }
}

/// Dispatch one body-level node.
///
/// Non-element nodes (the whitespace between blocks) produce nothing.
pub fn dispatch(node: &XmlNode, level: Level, options: &ParseOptions) -> Result<BodyItem> {
    let XmlNode::Element(element) = node else {
        return Ok(BodyItem::None);
    };

    match BodyConstruct::classify(element.name()) {
        BodyConstruct::Paragraph => Ok(BodyItem::One(paragraph_from(element)?)),
        BodyConstruct::Table => {
            let table = assemble_table(element, options)?;
            Ok(BodyItem::One(Paragraph::from_table(table)))
        },
        BodyConstruct::Index => Ok(BodyItem::Many(index_paragraphs(element)?)),
        BodyConstruct::Declaration if level == Level::Root => {
            trace!("skipping {} at document root", element.name());
            Ok(BodyItem::None)
        },
        BodyConstruct::Declaration | BodyConstruct::Other => {
            Err(Error::UnsupportedElement(element.name().to_string()))
        },
    }
}
