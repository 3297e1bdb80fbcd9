//! ODF constants: MIME types and package part paths.
//!
//! # References
//!
//! - ODF 1.2 Part 3 (Packages), §3.3 (MIME type stream)

use phf::{Map, phf_map};

// ============================================================================
// MIME TYPES
// ============================================================================

/// MIME type for OpenDocument Text (.odt)
pub const ODF_TEXT: &str = "application/vnd.oasis.opendocument.text";

/// MIME type for OpenDocument Text Template (.ott)
pub const ODF_TEXT_TEMPLATE: &str = "application/vnd.oasis.opendocument.text-template";

/// MIME type for OpenDocument Master (.odm)
pub const ODF_MASTER: &str = "application/vnd.oasis.opendocument.text-master";

/// MIME type for OpenDocument Web (.oth)
pub const ODF_WEB: &str = "application/vnd.oasis.opendocument.text-web";

/// Text-family extension to MIME type mapping (compile-time perfect hash map)
pub static ODF_TEXT_EXTENSIONS: Map<&'static str, &'static str> = phf_map! {
    "odt" => ODF_TEXT,
    "ott" => ODF_TEXT_TEMPLATE,
    "odm" => ODF_MASTER,
    "oth" => ODF_WEB,
};

// ============================================================================
// STANDARD ODF PARTS PATHS
// ============================================================================

/// Path to the uncompressed MIME type entry
pub const ODF_MIMETYPE: &str = "mimetype";

/// Path to content.xml (main document content)
pub const ODF_CONTENT: &str = "content.xml";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Get MIME type from a text-family file extension (without dot)
///
/// # Examples
///
/// ```
/// use odtext::odf::constants::get_mime_type_from_extension;
///
/// assert_eq!(get_mime_type_from_extension("odt"), Some("application/vnd.oasis.opendocument.text"));
/// assert_eq!(get_mime_type_from_extension("ods"), None);
/// ```
#[inline]
pub fn get_mime_type_from_extension(extension: &str) -> Option<&'static str> {
    ODF_TEXT_EXTENSIONS.get(extension).copied()
}

/// Check whether a MIME type names a document whose body is `office:text`
///
/// # Examples
///
/// ```
/// use odtext::odf::constants::is_text_mime_type;
///
/// assert!(is_text_mime_type("application/vnd.oasis.opendocument.text"));
/// assert!(!is_text_mime_type("application/vnd.oasis.opendocument.spreadsheet"));
/// ```
#[inline]
pub fn is_text_mime_type(mime_type: &str) -> bool {
    ODF_TEXT_EXTENSIONS.values().any(|mime| *mime == mime_type)
}
