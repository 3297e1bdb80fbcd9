//! XML tree for ODF parts.
//!
//! The walker in `odf::odt` needs mixed content in document order (text
//! interleaved with `text:s`, `text:span` and friends), so parts are
//! materialized into a small read-only tree instead of being consumed as a
//! flat event stream.

use crate::common::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt;

/// Kind of an XML node, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    CData,
    Comment,
    ProcessingInstruction,
}

impl NodeKind {
    /// Name of the node kind as it appears in messages
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::CData => "cdata",
            NodeKind::Comment => "comment",
            NodeKind::ProcessingInstruction => "processing-instruction",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a parsed XML part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// An element with its attributes and children
    Element(XmlElement),
    /// Character data with entity references already resolved
    Text(String),
    /// A `<![CDATA[...]]>` section
    CData(String),
    /// A `<!-- ... -->` comment
    Comment(String),
    /// A `<? ... ?>` processing instruction
    ProcessingInstruction,
}

impl XmlNode {
    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            XmlNode::Element(_) => NodeKind::Element,
            XmlNode::Text(_) => NodeKind::Text,
            XmlNode::CData(_) => NodeKind::CData,
            XmlNode::Comment(_) => NodeKind::Comment,
            XmlNode::ProcessingInstruction => NodeKind::ProcessingInstruction,
        }
    }

    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An XML element.
///
/// Names are kept as written in the source (`text:p`, not the expanded
/// namespace URI); ODF producers use the conventional prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Builder-style child appender
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Qualified tag name (`prefix:local`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by qualified name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First direct child element with the given name
    pub fn child_element(&self, name: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .filter_map(XmlNode::as_element)
            .find(|child| child.name == name)
    }

    /// Parse a complete XML part and return its root element
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let content = std::str::from_utf8(bytes)
            .map_err(|_| Error::XmlError("Invalid UTF-8 in XML content".to_string()))?;
        Self::parse_str(content)
    }

    /// Parse a complete XML document held in a string
    pub fn parse_str(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    stack.push(Self::from_start(e)?);
                },
                Event::Empty(ref e) => {
                    let element = Self::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => return Ok(element),
                    }
                },
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(XmlNode::Element(element)),
                            None => return Ok(element),
                        }
                    }
                },
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(t).map_err(|_| {
                            Error::XmlError("Invalid UTF-8 in text content".to_string())
                        })?;
                        current.push_text(text);
                    }
                },
                Event::GeneralRef(ref r) => {
                    if let Some(current) = stack.last_mut() {
                        let name = String::from_utf8_lossy(r);
                        let resolved = resolve_reference(&name)?;
                        current.push_text(&resolved);
                    }
                },
                Event::CData(ref c) => {
                    if let Some(current) = stack.last_mut() {
                        let text = String::from_utf8_lossy(c).into_owned();
                        current.children.push(XmlNode::CData(text));
                    }
                },
                Event::Comment(ref c) => {
                    if let Some(current) = stack.last_mut() {
                        let text = String::from_utf8_lossy(c).into_owned();
                        current.children.push(XmlNode::Comment(text));
                    }
                },
                Event::PI(_) => {
                    if let Some(current) = stack.last_mut() {
                        current.children.push(XmlNode::ProcessingInstruction);
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Err(Error::XmlError("No root element found".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|_| Error::XmlError("Invalid UTF-8 in tag name".to_string()))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| Error::XmlError(format!("Invalid attribute: {}", err)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let raw = String::from_utf8_lossy(&attr.value);
            let value = quick_xml::escape::unescape(&raw)?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Append character data, merging with a preceding text node so that
    /// `a &amp; b` stays one node like it would in a DOM.
    fn push_text(&mut self, text: &str) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }
}

/// Resolve the body of an `&...;` reference (predefined entity or character reference)
fn resolve_reference(name: &str) -> Result<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        return value
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| Error::XmlError(format!("Invalid character reference: &{};", name)));
    }

    quick_xml::escape::resolve_predefined_entity(name)
        .map(String::from)
        .ok_or_else(|| Error::XmlError(format!("Unknown entity reference: &{};", name)))
}
