//! Options controlling how ODT markup is walked.

/// How `table:covered-table-cell` (the hidden part of a merged cell) is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoveredCells {
    /// Fail with `Error::UnsupportedRowChild`
    #[default]
    Reject,
    /// Emit an empty cell so rows keep their declared cell count
    Placeholder,
}

/// Configuration options for ODT text extraction.
///
/// # Examples
///
/// ```rust
/// use odtext::{CoveredCells, ParseOptions};
///
/// let options = ParseOptions::new().with_covered_cells(CoveredCells::Placeholder);
/// assert_eq!(options.covered_cells, CoveredCells::Placeholder);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Handling of covered (merged-away) table cells
    pub covered_cells: CoveredCells,
}

impl ParseOptions {
    /// Create a new `ParseOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how covered table cells are handled.
    #[inline]
    pub fn with_covered_cells(mut self, covered_cells: CoveredCells) -> Self {
        self.covered_cells = covered_cells;
        self
    }
}
