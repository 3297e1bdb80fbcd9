//! Tables (ODF 1.2 §9.1): `table:table`, `table:table-row`, `table:table-cell`.

use super::model::{Table, TableCell, TableRow};
use super::options::{CoveredCells, ParseOptions};
use super::parser::{BodyItem, Level, dispatch};
use crate::common::{Error, Result};
use crate::odf::core::{XmlElement, XmlNode};
use crate::odf::elements::tag_matcher::{OdfTag, match_tag};
use log::debug;

/// Children of `table:table` (§9.1.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableChild {
    Column,
    Row,
    Other,
}

impl TableChild {
    fn classify(name: &str) -> Self {
        match match_tag(name.as_bytes()) {
            OdfTag::TableTableColumn => TableChild::Column,
            OdfTag::TableTableRow => TableChild::Row,
            _ => TableChild::Other,
        }
    }
}

/// Children of `table:table-row` (§9.1.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowChild {
    Cell,
    CoveredCell,
    Other,
}

impl RowChild {
    fn classify(name: &str) -> Self {
        match match_tag(name.as_bytes()) {
            OdfTag::TableTableCell => RowChild::Cell,
            OdfTag::TableCoveredTableCell => RowChild::CoveredCell,
            _ => RowChild::Other,
        }
    }
}

/// Build a table from a `table:table` element
pub(crate) fn assemble_table(element: &XmlElement, options: &ParseOptions) -> Result<Table> {
    let mut table = Table::new();
    for child in element.children().iter().filter_map(XmlNode::as_element) {
        match TableChild::classify(child.name()) {
            // Columns only affect layout
            TableChild::Column => {},
            TableChild::Row => table.push_row(assemble_row(child, options)?),
            TableChild::Other => {
                return Err(Error::UnsupportedTableChild(child.name().to_string()));
            },
        }
    }
    Ok(table)
}

fn assemble_row(element: &XmlElement, options: &ParseOptions) -> Result<TableRow> {
    let mut row = TableRow::new();
    for child in element.children().iter().filter_map(XmlNode::as_element) {
        match RowChild::classify(child.name()) {
            RowChild::Cell => row.push_cell(assemble_cell(child, options)?),
            RowChild::CoveredCell if options.covered_cells == CoveredCells::Placeholder => {
                debug!("covered table cell replaced by an empty placeholder");
                row.push_cell(TableCell::new());
            },
            RowChild::CoveredCell | RowChild::Other => {
                return Err(Error::UnsupportedRowChild(child.name().to_string()));
            },
        }
    }
    Ok(row)
}

/// Cell content (§9.1.4) goes through the body dispatcher at nested level;
/// multi-paragraph results are flattened into the cell.
fn assemble_cell(element: &XmlElement, options: &ParseOptions) -> Result<TableCell> {
    let mut cell = TableCell::new();
    for child in element.children() {
        match dispatch(child, Level::Nested, options)? {
            BodyItem::None => {},
            BodyItem::One(paragraph) => cell.push_paragraph(paragraph),
            BodyItem::Many(paragraphs) => {
                for paragraph in paragraphs {
                    cell.push_paragraph(paragraph);
                }
            },
        }
    }
    Ok(cell)
}
