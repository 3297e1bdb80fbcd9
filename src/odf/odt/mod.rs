//! OpenDocument Text (.odt) text extraction.
//!
//! The body of `content.xml` is walked recursively and turned into a tree of
//! paragraphs, inline runs and tables:
//!
//! - `parser.rs` dispatches each child of `office:text` by tag
//! - `inline.rs` collects the runs of `text:p` / `text:h`, expanding
//!   `text:s` and `text:tab`
//! - `table.rs` assembles tables, rows and cells
//! - `index.rs` lifts the paragraphs out of index constructs
//! - `document.rs` ties the walk to the package and XML collaborators
//!
//! Unknown block-level constructs (lists, sections, frames at body level)
//! fail the whole conversion instead of being dropped silently.
//!
//! # References
//! - ODF Specification: §3.4 (`office:text`), §5 (Paragraph Elements),
//!   §8 (Indices), §9.1 (Tables)

mod document;
mod index;
mod inline;
mod model;
mod options;
mod parser;
mod table;

pub use document::Document;
pub use inline::MAX_REPEAT_COUNT;
pub use model::{InlineElement, Paragraph, Table, TableCell, TableRow};
pub use options::{CoveredCells, ParseOptions};
pub use parser::{BodyItem, Level, dispatch};

#[cfg(test)]
mod tests;
