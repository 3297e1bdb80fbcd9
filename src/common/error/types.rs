//! Unified error types for odtext.
//!
//! Every failure aborts the conversion that raised it; callers never see a
//! partially assembled document.
use crate::odf::core::NodeKind;
use thiserror::Error;

/// Main error type for odtext operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Package entry not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Tag outside the recognized body-level vocabulary
    #[error("ODT body unsupported {0} element")]
    UnsupportedElement(String),

    /// Child of `table:table` that is neither a column nor a row
    #[error("ODT table unsupported {0} element")]
    UnsupportedTableChild(String),

    /// Child of `table:table-row` that is not a plain cell
    #[error("ODT tablerow unsupported {0} element")]
    UnsupportedRowChild(String),

    /// `text:c` on `text:s` / `text:tab` above `MAX_REPEAT_COUNT`
    #[error("ODT repeat count {0} is too large")]
    RepeatCountTooLarge(String),

    /// XML node kind that cannot appear at this position
    #[error("unsupported node type {0}")]
    UnsupportedNodeType(NodeKind),

    /// The document-content/body/text anchors are missing
    #[error("Malformed document structure: missing {0}")]
    MalformedStructure(String),
}

/// Result type for odtext operations.
pub type Result<T> = std::result::Result<T, Error>;
