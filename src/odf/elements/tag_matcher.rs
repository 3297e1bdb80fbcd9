//! ODF XML tag matching.
//!
//! Tags are classified once into `OdfTag` through a compile-time perfect hash
//! map; each walker context then maps `OdfTag` onto its own closed set of
//! constructs and matches it exhaustively.
//!
//! Only the vocabulary the text walker understands is listed here. Anything
//! else is `OdfTag::Unknown`, which every context treats as its default arm.
use memchr::memchr;
use phf::{Map, phf_map};

// ============================================================================
// TAG TYPE ENUMERATION
// ============================================================================

/// ODF XML tag types for fast dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum OdfTag {
    // Paragraph content
    TextP,
    TextH,
    TextS,
    TextTab,

    // Declarations without extractable text
    TextSequenceDecls,
    TextVariableDecls,
    TextTrackedChanges,

    // Index constructs
    TextIllustrationIndex,
    TextIllustrationIndexSource,
    TextTableOfContent,
    TextTableIndex,
    TextObjectIndex,
    TextUserIndex,
    TextAlphabeticalIndex,
    TextBibliography,
    TextIndexBody,
    TextIndexTitle,

    // Table elements
    TableTable,
    TableTableColumn,
    TableTableRow,
    TableTableCell,
    TableCoveredTableCell,

    // Office elements
    OfficeDocument,
    OfficeDocumentContent,
    OfficeBody,
    OfficeText,

    // Unknown/unsupported tag
    Unknown,
}

impl OdfTag {
    /// Whether this tag opens an index construct whose body paragraphs are extracted
    #[inline]
    pub fn is_index(self) -> bool {
        matches!(
            self,
            OdfTag::TextIllustrationIndex
                | OdfTag::TextTableOfContent
                | OdfTag::TextTableIndex
                | OdfTag::TextObjectIndex
                | OdfTag::TextUserIndex
                | OdfTag::TextAlphabeticalIndex
                | OdfTag::TextBibliography
        )
    }
}

// ============================================================================
// COMPILE-TIME TAG MAPPING
// ============================================================================

/// Tag string to OdfTag enum mapping (compile-time perfect hash map)
static TAG_MAP: Map<&'static [u8], OdfTag> = phf_map! {
    b"text:p" => OdfTag::TextP,
    b"text:h" => OdfTag::TextH,
    b"text:s" => OdfTag::TextS,
    b"text:tab" => OdfTag::TextTab,

    b"text:sequence-decls" => OdfTag::TextSequenceDecls,
    b"text:variable-decls" => OdfTag::TextVariableDecls,
    b"text:tracked-changes" => OdfTag::TextTrackedChanges,

    b"text:illustration-index" => OdfTag::TextIllustrationIndex,
    b"text:illustration-index-source" => OdfTag::TextIllustrationIndexSource,
    b"text:table-of-content" => OdfTag::TextTableOfContent,
    b"text:table-index" => OdfTag::TextTableIndex,
    b"text:object-index" => OdfTag::TextObjectIndex,
    b"text:user-index" => OdfTag::TextUserIndex,
    b"text:alphabetical-index" => OdfTag::TextAlphabeticalIndex,
    b"text:bibliography" => OdfTag::TextBibliography,
    b"text:index-body" => OdfTag::TextIndexBody,
    b"text:index-title" => OdfTag::TextIndexTitle,

    b"table:table" => OdfTag::TableTable,
    b"table:table-column" => OdfTag::TableTableColumn,
    b"table:table-row" => OdfTag::TableTableRow,
    b"table:table-cell" => OdfTag::TableTableCell,
    b"table:covered-table-cell" => OdfTag::TableCoveredTableCell,

    b"office:document" => OdfTag::OfficeDocument,
    b"office:document-content" => OdfTag::OfficeDocumentContent,
    b"office:body" => OdfTag::OfficeBody,
    b"office:text" => OdfTag::OfficeText,
};

/// Namespace prefixes whose elements are graphics, skipped with their subtree
const DRAWING_PREFIXES: [&[u8]; 2] = [b"draw", b"dr3d"];

// ============================================================================
// PREFIX MATCHING
// ============================================================================

/// Namespace prefix of a qualified tag (`text` for `text:p`), `None` when unprefixed
#[inline(always)]
pub fn tag_prefix(tag: &[u8]) -> Option<&[u8]> {
    memchr(b':', tag).map(|colon| &tag[..colon])
}

// ============================================================================
// TAG MATCHING API
// ============================================================================

/// Match a tag to its OdfTag enum variant
///
/// # Examples
///
/// ```
/// # use odtext::odf::elements::tag_matcher::{match_tag, OdfTag};
/// assert_eq!(match_tag(b"text:p"), OdfTag::TextP);
/// assert_eq!(match_tag(b"table:table"), OdfTag::TableTable);
/// assert_eq!(match_tag(b"text:list"), OdfTag::Unknown);
/// ```
#[inline(always)]
pub fn match_tag(tag: &[u8]) -> OdfTag {
    TAG_MAP.get(tag).copied().unwrap_or(OdfTag::Unknown)
}

/// Check if a tag belongs to a specific namespace prefix
#[inline(always)]
pub fn is_namespace(tag: &[u8], namespace: &[u8]) -> bool {
    tag_prefix(tag) == Some(namespace)
}

/// Check if tag is a drawing/graphic element (`draw:*`, `dr3d:*`)
#[inline(always)]
pub fn is_draw_tag(tag: &[u8]) -> bool {
    DRAWING_PREFIXES.iter().any(|prefix| is_namespace(tag, prefix))
}
