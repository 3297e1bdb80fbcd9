//! ODT document assembly.

use super::model::Paragraph;
use super::options::ParseOptions;
use super::parser::{BodyItem, Level, dispatch};
use crate::common::{Error, Result};
use crate::odf::core::XmlElement;
use crate::odf::elements::tag_matcher::{OdfTag, match_tag};
use log::debug;
use serde::Serialize;

#[cfg(feature = "package")]
use crate::odf::constants::is_text_mime_type;
#[cfg(feature = "package")]
use crate::odf::core::Package;
#[cfg(feature = "package")]
use std::io::{Cursor, Read, Seek};
#[cfg(feature = "package")]
use std::path::Path;

/// The text content of an OpenDocument text document: its body paragraphs in order.
///
/// Tables appear as paragraphs wrapping a single table; index constructs
/// contribute their paragraphs directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

#[cfg(feature = "package")]
impl Document {
    /// Open an ODT document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, &ParseOptions::default())
    }

    /// Open an ODT document from a file path with custom options
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self> {
        let package = Package::open(path)?;
        Self::from_package(&package, options)
    }

    /// Create a Document from the bytes of an .odt file
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with_options(bytes, &ParseOptions::default())
    }

    /// Create a Document from the bytes of an .odt file with custom options
    pub fn from_bytes_with_options(bytes: Vec<u8>, options: &ParseOptions) -> Result<Self> {
        let package = Package::from_reader(Cursor::new(bytes))?;
        Self::from_package(&package, options)
    }

    /// Extract the document held by an already-opened package
    pub fn from_package<R: Read + Seek>(package: &Package<R>, options: &ParseOptions) -> Result<Self> {
        if let Some(mime_type) = package.mimetype()
            && !is_text_mime_type(mime_type)
        {
            return Err(Error::InvalidFormat(format!(
                "Not an ODT file: MIME type is {}",
                mime_type
            )));
        }

        let content = package.content()?;
        Self::from_xml_with_options(&content, options)
    }
}

impl Document {
    /// Parse a `content.xml` part (or a flat `.fodt` document) and extract its text
    pub fn from_content_xml(bytes: &[u8], options: &ParseOptions) -> Result<Self> {
        let root = XmlElement::parse(bytes)?;
        Self::from_xml_with_options(&root, options)
    }

    /// Extract the text of an already-parsed document root
    pub fn from_xml(root: &XmlElement) -> Result<Self> {
        Self::from_xml_with_options(root, &ParseOptions::default())
    }

    /// Extract the text of an already-parsed document root with custom options.
    ///
    /// Fails without returning a partial document as soon as one body-level
    /// node cannot be handled.
    pub fn from_xml_with_options(root: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let text = locate_text(root)?;
        debug!("walking {} body-level nodes", text.children().len());

        let mut paragraphs = Vec::new();
        for node in text.children() {
            match dispatch(node, Level::Root, options)? {
                BodyItem::None => {},
                BodyItem::One(paragraph) => paragraphs.push(paragraph),
                BodyItem::Many(items) => paragraphs.extend(items),
            }
        }

        debug!("extracted {} paragraphs", paragraphs.len());
        Ok(Self { paragraphs })
    }

    /// Body paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Consume the document, returning its paragraphs
    pub fn into_paragraphs(self) -> Vec<Paragraph> {
        self.paragraphs
    }

    /// Number of body paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the body produced no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Extract all text content, one line per paragraph
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Find `office:text` under `office:document-content` (or `office:document`) / `office:body`
fn locate_text(root: &XmlElement) -> Result<&XmlElement> {
    match match_tag(root.name().as_bytes()) {
        OdfTag::OfficeDocumentContent | OdfTag::OfficeDocument => {},
        _ => return Err(Error::MalformedStructure("office:document-content".to_string())),
    }

    let body = root
        .child_element("office:body")
        .ok_or_else(|| Error::MalformedStructure("office:body".to_string()))?;
    body.child_element("office:text")
        .ok_or_else(|| Error::MalformedStructure("office:text".to_string()))
}
