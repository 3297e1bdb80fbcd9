//! Tests for ODT text extraction

use super::*;
use crate::common::Error;
use crate::odf::core::{NodeKind, XmlElement, XmlNode};

fn content(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" office:version="1.2">
  <office:automatic-styles/>
  <office:body>
    <office:text>
      {body}
    </office:text>
  </office:body>
</office:document-content>"#
    )
}

fn extract(body: &str) -> crate::Result<Document> {
    Document::from_content_xml(content(body).as_bytes(), &ParseOptions::default())
}

fn run_texts(paragraph: &Paragraph) -> Vec<&str> {
    paragraph
        .elements()
        .iter()
        .filter_map(InlineElement::as_text)
        .collect()
}

#[test]
fn test_hello_world_runs() {
    let doc = extract(r#"<text:p>Hello<text:s text:c="2"/>World</text:p>"#).unwrap();

    assert_eq!(doc.paragraph_count(), 1);
    assert_eq!(run_texts(&doc.paragraphs()[0]), vec!["Hello", "  ", "World"]);
    assert_eq!(doc.text(), "Hello  World");
}

#[test]
fn test_paragraphs_and_headings_in_order() {
    let doc = extract(
        r#"<text:h text:outline-level="1">Title</text:h>
           <text:p text:style-name="P1">First</text:p>
           <text:p/>
           <text:p>Second<text:tab/>tabbed</text:p>"#,
    )
    .unwrap();

    let texts: Vec<String> = doc.paragraphs().iter().map(Paragraph::text).collect();
    assert_eq!(texts, vec!["Title", "First", "", "Second\ttabbed"]);
    assert!(doc.paragraphs()[2].is_empty());
}

#[test]
fn test_root_declarations_are_ignored() {
    let doc = extract(
        r#"<text:sequence-decls>
             <text:sequence-decl text:display-outline-level="0" text:name="Figure"/>
           </text:sequence-decls>
           <text:variable-decls/>
           <text:tracked-changes/>
           <text:illustration-index-source/>
           <!-- comments between blocks are not content -->
           <text:p>Body</text:p>"#,
    )
    .unwrap();

    assert_eq!(doc.paragraph_count(), 1);
    assert_eq!(doc.text(), "Body");
}

#[test]
fn test_unknown_body_element_fails_whole_conversion() {
    let result = extract(
        r#"<text:p>kept?</text:p>
           <text:list><text:list-item><text:p>item</text:p></text:list-item></text:list>
           <text:p>after</text:p>"#,
    );

    match result {
        Err(Error::UnsupportedElement(tag)) => assert_eq!(tag, "text:list"),
        other => panic!("expected UnsupportedElement, got {:?}", other),
    }
}

#[test]
fn test_unsupported_node_in_paragraph_fails() {
    let result = extract("<text:p>a<?marker here?>b</text:p>");
    assert!(matches!(
        result,
        Err(Error::UnsupportedNodeType(NodeKind::ProcessingInstruction))
    ));
}

#[test]
fn test_oversized_space_run_fails_conversion() {
    let result = extract(
        r#"<text:p>fine</text:p>
           <table:table><table:table-row><table:table-cell>
             <text:p>a<text:s text:c="4294967295"/>b</text:p>
           </table:table-cell></table:table-row></table:table>"#,
    );
    assert!(matches!(
        result,
        Err(Error::RepeatCountTooLarge(count)) if count == "4294967295"
    ));
}

#[test]
fn test_drawings_contribute_nothing() {
    let doc = extract(
        r#"<text:p>Look:<draw:frame draw:name="Image1"><draw:image xlink:href="Pictures/1.png"><text:p>alt</text:p></draw:image></draw:frame></text:p>"#,
    )
    .unwrap();

    assert_eq!(run_texts(&doc.paragraphs()[0]), vec!["Look:"]);
}

#[test]
fn test_table_becomes_wrapped_paragraph() {
    let doc = extract(
        r#"<text:p>Before</text:p>
           <table:table table:name="Table1">
             <table:table-column table:number-columns-repeated="2"/>
             <table:table-row>
               <table:table-cell><text:p>A1</text:p></table:table-cell>
               <table:table-cell><text:p>B1</text:p></table:table-cell>
             </table:table-row>
             <table:table-row>
               <table:table-cell><text:p>A2</text:p></table:table-cell>
               <table:table-cell><text:p>B<text:span>2</text:span></text:p></table:table-cell>
             </table:table-row>
           </table:table>
           <text:p>After</text:p>"#,
    )
    .unwrap();

    assert_eq!(doc.paragraph_count(), 3);
    let wrapper = &doc.paragraphs()[1];
    assert_eq!(wrapper.elements().len(), 1);
    let table = wrapper.elements()[0].as_table().unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.rows()[1].cells()[1].text(), "B2");
    assert_eq!(doc.text(), "Before\nA1\tB1\nA2\tB2\nAfter");
}

#[test]
fn test_illustration_index_is_flattened() {
    let doc = extract(
        r#"<text:illustration-index text:name="Illustration Index1">
             <text:illustration-index-source text:caption-sequence-name="Figure"/>
             <text:index-body>
               <text:index-title text:name="Illustration Index1_Head">
                 <text:p>Figures</text:p>
               </text:index-title>
               <text:p>Figure 1: Overview<text:tab/>3</text:p>
               <text:p>Figure 2: Detail<text:tab/>5</text:p>
             </text:index-body>
           </text:illustration-index>"#,
    )
    .unwrap();

    let texts: Vec<String> = doc.paragraphs().iter().map(Paragraph::text).collect();
    assert_eq!(texts, vec!["Figures", "Figure 1: Overview\t3", "Figure 2: Detail\t5"]);
}

#[test]
fn test_table_of_contents_is_flattened() {
    let doc = extract(
        r##"<text:table-of-content text:name="Table of Contents1">
             <text:table-of-content-source text:outline-level="10"/>
             <text:index-body>
               <text:index-title><text:p>Contents</text:p></text:index-title>
               <text:p><text:a xlink:href="#__RefHeading__1">Intro<text:tab/>1</text:a></text:p>
             </text:index-body>
           </text:table-of-content>
           <text:h>Intro</text:h>"##,
    )
    .unwrap();

    let texts: Vec<String> = doc.paragraphs().iter().map(Paragraph::text).collect();
    assert_eq!(texts, vec!["Contents", "Intro\t1", "Intro"]);
}

#[test]
fn test_conversion_is_repeatable() {
    let xml = content(
        r#"<text:p>One<text:s/>two</text:p>
           <table:table><table:table-row><table:table-cell><text:p>x</text:p></table:table-cell></table:table-row></table:table>"#,
    );
    let root = XmlElement::parse_str(&xml).unwrap();

    let first = Document::from_xml(&root).unwrap();
    let second = Document::from_xml(&root).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_flat_odt_root_is_accepted() {
    let xml = r#"<office:document office:mimetype="application/vnd.oasis.opendocument.text">
        <office:meta/>
        <office:body><office:text><text:p>flat</text:p></office:text></office:body>
    </office:document>"#;
    let doc = Document::from_content_xml(xml.as_bytes(), &ParseOptions::default()).unwrap();
    assert_eq!(doc.text(), "flat");
}

#[test]
fn test_malformed_structure() {
    let wrong_root = XmlElement::parse_str("<office:document-styles/>").unwrap();
    assert!(matches!(
        Document::from_xml(&wrong_root),
        Err(Error::MalformedStructure(anchor)) if anchor == "office:document-content"
    ));

    let no_body = XmlElement::parse_str("<office:document-content><office:meta/></office:document-content>")
        .unwrap();
    assert!(matches!(
        Document::from_xml(&no_body),
        Err(Error::MalformedStructure(anchor)) if anchor == "office:body"
    ));

    let spreadsheet = XmlElement::parse_str(
        "<office:document-content><office:body><office:spreadsheet/></office:body></office:document-content>",
    )
    .unwrap();
    assert!(matches!(
        Document::from_xml(&spreadsheet),
        Err(Error::MalformedStructure(anchor)) if anchor == "office:text"
    ));
}

#[test]
fn test_dispatch_levels() {
    let decls = XmlNode::Element(XmlElement::new("text:variable-decls"));
    let options = ParseOptions::default();

    assert_eq!(dispatch(&decls, Level::Root, &options).unwrap(), BodyItem::None);
    assert!(matches!(
        dispatch(&decls, Level::Nested, &options),
        Err(Error::UnsupportedElement(tag)) if tag == "text:variable-decls"
    ));

    let whitespace = XmlNode::Text("\n  ".to_string());
    assert_eq!(dispatch(&whitespace, Level::Nested, &options).unwrap(), BodyItem::None);
}

#[test]
fn test_document_serializes_to_json() {
    let doc = extract(
        r#"<text:p>Hi<text:s/></text:p>
           <table:table><table:table-row><table:table-cell/></table:table-row></table:table>"#,
    )
    .unwrap();

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "paragraphs": [
                {"elements": [
                    {"kind": "text", "value": "Hi"},
                    {"kind": "text", "value": " "}
                ]},
                {"elements": [
                    {"kind": "table", "value": {"rows": [{"cells": [{"paragraphs": []}]}]}}
                ]}
            ]
        })
    );
}

#[cfg(feature = "package")]
mod package {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn odt(mimetype: Option<&str>, content_xml: Option<&str>) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        if let Some(mimetype) = mimetype {
            writer.start_file("mimetype", options).unwrap();
            writer.write_all(mimetype.as_bytes()).unwrap();
        }
        if let Some(content_xml) = content_xml {
            writer.start_file("content.xml", options).unwrap();
            writer.write_all(content_xml.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_from_bytes() {
        let bytes = odt(
            Some("application/vnd.oasis.opendocument.text"),
            Some(&content("<text:p>packaged</text:p>")),
        );
        let doc = Document::from_bytes(bytes).unwrap();
        assert_eq!(doc.text(), "packaged");
    }

    #[test]
    fn test_mimetype_is_optional() {
        let bytes = odt(None, Some(&content("<text:p>no mimetype</text:p>")));
        assert_eq!(Document::from_bytes(bytes).unwrap().text(), "no mimetype");
    }

    #[test]
    fn test_wrong_mimetype() {
        let bytes = odt(
            Some("application/vnd.oasis.opendocument.spreadsheet"),
            Some(&content("<text:p>x</text:p>")),
        );
        assert!(matches!(Document::from_bytes(bytes), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_content() {
        let bytes = odt(Some("application/vnd.oasis.opendocument.text"), None);
        assert!(matches!(
            Document::from_bytes(bytes),
            Err(Error::ComponentNotFound(path)) if path == "content.xml"
        ));
    }

    #[test]
    fn test_open_with_options() {
        let body = r#"<table:table><table:table-row>
            <table:table-cell table:number-columns-spanned="2"><text:p>merged</text:p></table:table-cell>
            <table:covered-table-cell/>
        </table:table-row></table:table>"#;
        let bytes = odt(Some("application/vnd.oasis.opendocument.text"), Some(&content(body)));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        assert!(matches!(
            Document::open(file.path()),
            Err(Error::UnsupportedRowChild(_))
        ));

        let options = ParseOptions::new().with_covered_cells(CoveredCells::Placeholder);
        let doc = Document::open_with_options(file.path(), &options).unwrap();
        let table = doc.paragraphs()[0].tables().next().unwrap();
        assert_eq!(table.rows()[0].cells().len(), 2);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn document_with(paragraph: XmlElement) -> XmlElement {
        let text = XmlElement::new("office:text").with_child(XmlNode::Element(paragraph));
        let body = XmlElement::new("office:body").with_child(XmlNode::Element(text));
        XmlElement::new("office:document-content").with_child(XmlNode::Element(body))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_text_runs_concatenate_to_source(segments in prop::collection::vec(".{0,12}", 0..8)) {
            let paragraph = segments.iter().fold(XmlElement::new("text:p"), |p, segment| {
                p.with_child(XmlNode::Text(segment.clone()))
            });
            let doc = Document::from_xml(&document_with(paragraph)).unwrap();

            prop_assert_eq!(doc.paragraph_count(), 1);
            prop_assert_eq!(doc.paragraphs()[0].elements().len(), segments.len());
            prop_assert_eq!(doc.paragraphs()[0].text(), segments.concat());
        }

        #[test]
        fn prop_space_and_tab_counts(count in 0usize..64) {
            let value = count.to_string();
            let paragraph = XmlElement::new("text:p")
                .with_child(XmlNode::Element(XmlElement::new("text:s").with_attribute("text:c", &value)))
                .with_child(XmlNode::Element(XmlElement::new("text:tab").with_attribute("text:c", &value)));
            let doc = Document::from_xml(&document_with(paragraph)).unwrap();

            let spaces = " ".repeat(count);
            let tabs = "\t".repeat(count);
            prop_assert_eq!(run_texts(&doc.paragraphs()[0]), vec![spaces.as_str(), tabs.as_str()]);
        }

        #[test]
        fn prop_table_shape_is_preserved(cells_per_row in prop::collection::vec(0usize..6, 0..6)) {
            let table = cells_per_row.iter().fold(XmlElement::new("table:table"), |table, &cells| {
                let row = (0..cells).fold(XmlElement::new("table:table-row"), |row, _| {
                    row.with_child(XmlNode::Element(XmlElement::new("table:table-cell")))
                });
                table.with_child(XmlNode::Element(row))
            });
            let text = XmlElement::new("office:text").with_child(XmlNode::Element(table));
            let body = XmlElement::new("office:body").with_child(XmlNode::Element(text));
            let root = XmlElement::new("office:document-content").with_child(XmlNode::Element(body));

            let doc = Document::from_xml(&root).unwrap();
            let table = doc.paragraphs()[0].tables().next().unwrap();
            prop_assert_eq!(table.row_count(), cells_per_row.len());
            for (row, &cells) in table.rows().iter().zip(&cells_per_row) {
                prop_assert_eq!(row.cells().len(), cells);
            }
        }
    }
}
