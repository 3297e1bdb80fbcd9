//! Extracted text model: paragraphs, inline runs and tables.
//!
//! Every node is owned by its parent; the tree has no back-references.

use serde::Serialize;

/// One inline unit of a paragraph, kept in document order.
///
/// Adjacent text runs are not merged: `Hello<text:s/>World` stays three runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum InlineElement {
    /// Literal text, or an expanded `text:s` / `text:tab` run
    Text(String),
    /// A table reached while walking the body
    Table(Table),
}

impl InlineElement {
    /// The text of a text run
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InlineElement::Text(text) => Some(text),
            InlineElement::Table(_) => None,
        }
    }

    /// The table of a table element
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            InlineElement::Text(_) => None,
            InlineElement::Table(table) => Some(table),
        }
    }
}

/// A `text:p` / `text:h` block, or a wrapper around one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    elements: Vec<InlineElement>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding exactly one table
    pub fn from_table(table: Table) -> Self {
        Self {
            elements: vec![InlineElement::Table(table)],
        }
    }

    /// Append an inline element
    pub fn push(&mut self, element: InlineElement) {
        self.elements.push(element);
    }

    /// Append a text run
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.elements.push(InlineElement::Text(text.into()));
    }

    /// Inline elements in document order
    pub fn elements(&self) -> &[InlineElement] {
        &self.elements
    }

    /// Whether the paragraph has no runs at all
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Tables embedded in this paragraph
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(InlineElement::as_table)
    }

    /// Plain text of the paragraph; embedded tables are rendered with
    /// tabs between cells and newlines between rows.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for element in &self.elements {
            match element {
                InlineElement::Text(run) => text.push_str(run),
                InlineElement::Table(table) => text.push_str(&table.text()),
            }
        }
        text
    }
}

/// A table: ordered rows. Column definitions carry no content and are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Rows in document order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (based on the widest row)
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }

    /// Plain text: cells joined by tabs, rows joined by newlines
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(TableRow::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row: ordered cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell
    pub fn push_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Cells in document order
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    fn text(&self) -> String {
        self.cells
            .iter()
            .map(TableCell::text)
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell: a flat list of paragraphs.
///
/// A table nested in a cell is held by a paragraph wrapping it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableCell {
    paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Whether the cell holds no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text: paragraphs joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
