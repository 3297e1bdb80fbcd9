//! odtext - structured text extraction for OpenDocument Text files
//!
//! The `content.xml` part of an `.odt` package is walked into an ordered list
//! of paragraphs. Each paragraph holds inline runs (text, expanded `text:s`
//! spaces and `text:tab` tabs) or a single embedded table; table cells hold
//! paragraphs in turn. Index constructs such as a table of figures contribute
//! their paragraphs directly.
//!
//! Extraction is all-or-nothing: markup outside the understood vocabulary
//! fails the conversion with an error naming the construct.
//!
//! # Example - Reading an ODT file
//!
//! ```no_run
//! use odtext::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::open("document.odt")?;
//!
//! for para in doc.paragraphs() {
//!     println!("Paragraph: {}", para.text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Walking an already-parsed tree
//!
//! ```
//! use odtext::{Document, XmlElement};
//!
//! # fn main() -> odtext::Result<()> {
//! let root = XmlElement::parse_str(
//!     r#"<office:document-content><office:body><office:text>
//!         <text:p>Hello<text:s text:c="2"/>World</text:p>
//!     </office:text></office:body></office:document-content>"#,
//! )?;
//! let doc = Document::from_xml(&root)?;
//! assert_eq!(doc.text(), "Hello  World");
//! # Ok(())
//! # }
//! ```

/// Common types: the unified error
pub mod common;

/// OpenDocument format support
pub mod odf;

pub use common::{Error, Result};
#[cfg(feature = "package")]
pub use odf::core::Package;
pub use odf::core::{NodeKind, XmlElement, XmlNode};
pub use odf::odt::{
    CoveredCells, Document, InlineElement, MAX_REPEAT_COUNT, Paragraph, ParseOptions, Table,
    TableCell, TableRow,
};
