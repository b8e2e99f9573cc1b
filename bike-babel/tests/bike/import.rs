//! Import tests for the bike format (bike → IR)
//!
//! These tests verify that outline documents are correctly converted to
//! the IR by checking the resulting tree structure.

use bike_babel::format::Format;
use bike_babel::formats::bike::to_ir::{BALLOT_BOX, BALLOT_BOX_WITH_X};
use bike_babel::formats::bike::BikeFormat;
use bike_babel::ir::nodes::{DocNode, Document, Inline};
use bike_babel::FormatError;
use std::path::PathBuf;

/// Helper to parse bike source to the IR
fn bike_to_ir(source: &str) -> Document {
    BikeFormat.parse(source).expect("Should parse bike source")
}

fn read_fixture(fixture: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Wrap rows in the html/body/ul skeleton for focused tests
fn outline(rows: &str) -> String {
    format!(r#"<html><body><ul id="root">{rows}</ul></body></html>"#)
}

/// The root container's children
fn container_children(doc: &Document) -> &[DocNode] {
    assert_eq!(doc.children.len(), 1, "expected a single root container");
    match &doc.children[0] {
        DocNode::Container(c) => &c.children,
        other => panic!("Expected container at document root, got {other:?}"),
    }
}

fn paragraph_content(node: &DocNode) -> &[Inline] {
    match node {
        DocNode::Paragraph(p) => &p.content,
        other => panic!("Expected paragraph, got {other:?}"),
    }
}

#[test]
fn test_hello_paragraph() {
    let doc = bike_to_ir(&read_fixture("hello.bike"));

    let children = container_children(&doc);
    assert_eq!(children.len(), 1);
    assert_eq!(
        paragraph_content(&children[0]),
        &[Inline::Text("hello".to_string())]
    );
}

#[test]
fn test_container_carries_list_id() {
    let doc = bike_to_ir(&read_fixture("hello.bike"));
    match &doc.children[0] {
        DocNode::Container(c) => assert_eq!(c.id, "Xh2f-9Qp"),
        other => panic!("Expected container, got {other:?}"),
    }
}

#[test]
fn test_heading_then_nested_heading() {
    let source = outline(
        r#"<li id="a" data-type="heading"><p>Outer</p>
             <ul id="u1"><li id="b" data-type="heading"><p>Inner</p></li></ul></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 2);
    match (&children[0], &children[1]) {
        (DocNode::Heading(outer), DocNode::Heading(inner)) => {
            assert_eq!(outer.level, 1);
            assert_eq!(inner.level, 2);
        }
        other => panic!("Expected two headings, got {other:?}"),
    }
}

#[test]
fn test_consecutive_headings_increment() {
    let rows: String = (0..8)
        .map(|i| format!(r#"<li id="h{i}" data-type="heading"><p>H{i}</p></li>"#))
        .collect();
    let doc = bike_to_ir(&outline(&rows));

    let levels: Vec<u8> = container_children(&doc)
        .iter()
        .map(|n| match n {
            DocNode::Heading(h) => h.level,
            other => panic!("Expected heading, got {other:?}"),
        })
        .collect();
    // Increments by one, capped at 6
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6, 6, 6]);
}

#[test]
fn test_unordered_run_clusters_into_one_list() {
    let source = outline(
        r#"<li id="a" data-type="unordered"><p>one</p></li>
           <li id="b" data-type="unordered"><p>two</p></li>
           <li id="c" data-type="unordered"><p>three</p></li>
           <li id="d"><p>after</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 2);
    match &children[0] {
        DocNode::BulletList(l) => {
            assert_eq!(l.items.len(), 3);
            assert!(l.items.iter().all(|i| matches!(i, DocNode::ListItem(_))));
        }
        other => panic!("Expected bullet list, got {other:?}"),
    }
    assert!(matches!(&children[1], DocNode::Paragraph(_)));
}

#[test]
fn test_ordered_run_clusters_into_one_list() {
    let source = outline(
        r#"<li id="a" data-type="ordered"><p>one</p></li>
           <li id="b" data-type="ordered"><p>two</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    match &container_children(&doc)[0] {
        DocNode::OrderedList(l) => assert_eq!(l.items.len(), 2),
        other => panic!("Expected ordered list, got {other:?}"),
    }
}

#[test]
fn test_task_markers() {
    let source = outline(
        r#"<li id="a" data-type="task"><p>open</p></li>
           <li id="b" data-type="task" data-done="2023-08-01T22:39:45Z"><p>done</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    let items = match &container_children(&doc)[0] {
        DocNode::BulletList(l) => &l.items,
        other => panic!("Expected bullet list, got {other:?}"),
    };

    let marker_of = |item: &DocNode| -> String {
        match item {
            DocNode::ListItem(li) => match &li.children[0] {
                DocNode::Paragraph(p) => match &p.content[0] {
                    Inline::Text(t) => t.clone(),
                    other => panic!("Expected text marker, got {other:?}"),
                },
                other => panic!("Expected paragraph, got {other:?}"),
            },
            other => panic!("Expected list item, got {other:?}"),
        }
    };

    assert_eq!(marker_of(&items[0]), BALLOT_BOX.to_string());
    assert_eq!(marker_of(&items[1]), BALLOT_BOX_WITH_X.to_string());
}

#[test]
fn test_quote_run_becomes_one_block_quote() {
    let source = outline(
        r#"<li id="a" data-type="quote"><p>first</p></li>
           <li id="b" data-type="quote"><p>second</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 1);
    match &children[0] {
        DocNode::BlockQuote(q) => {
            assert_eq!(q.children.len(), 2);
            assert!(q.children.iter().all(|c| matches!(c, DocNode::Paragraph(_))));
        }
        other => panic!("Expected block quote, got {other:?}"),
    }
}

#[test]
fn test_single_quote_item_is_block_quoted() {
    // Quote rows are cluster-eligible, so even a lone quote forms a kept
    // cluster and gets the BlockQuote wrapper
    let source = outline(
        r#"<li id="a"><p>before</p></li>
           <li id="b" data-type="quote"><p>alone</p></li>
           <li id="c"><p>after</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 3);
    assert!(matches!(&children[1], DocNode::BlockQuote(_)));
}

#[test]
fn test_adjacent_code_rows_merge() {
    let source = outline(
        r#"<li id="a" data-type="code"><p>a</p></li>
           <li id="b" data-type="code"><p>b</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 1);
    match &children[0] {
        DocNode::CodeBlock(c) => assert_eq!(c.text, "a\nb"),
        other => panic!("Expected code block, got {other:?}"),
    }
}

#[test]
fn test_code_rows_do_not_merge_across_other_nodes() {
    let source = outline(
        r#"<li id="a" data-type="code"><p>a</p></li>
           <li id="b"><p>between</p></li>
           <li id="c" data-type="code"><p>b</p></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 3);
    assert!(matches!(&children[0], DocNode::CodeBlock(_)));
    assert!(matches!(&children[1], DocNode::Paragraph(_)));
    assert!(matches!(&children[2], DocNode::CodeBlock(_)));
}

#[test]
fn test_hr_row() {
    let source = outline(r#"<li id="a" data-type="hr"><p></p></li>"#);
    let doc = bike_to_ir(&source);
    assert_eq!(container_children(&doc), &[DocNode::HorizontalRule]);
}

#[test]
fn test_note_row_becomes_inline_note() {
    let source = outline(r#"<li id="a" data-type="note"><p>aside</p></li>"#);
    let doc = bike_to_ir(&source);

    let content = paragraph_content(&container_children(&doc)[0]);
    assert_eq!(content.len(), 1);
    match &content[0] {
        Inline::Note(children) => {
            assert_eq!(
                paragraph_content(&children[0]),
                &[Inline::Text("aside".to_string())]
            );
        }
        other => panic!("Expected note, got {other:?}"),
    }
}

#[test]
fn test_rich_text_inline_markup() {
    let source = outline(r#"<li id="a"><p>one <strong>two</strong> three</p></li>"#);
    let doc = bike_to_ir(&source);

    let content = paragraph_content(&container_children(&doc)[0]);
    // The tail rides inside the wrap, matching the export's element model
    assert_eq!(
        content,
        &[
            Inline::Text("one ".to_string()),
            Inline::Strong(vec![
                Inline::Text("two".to_string()),
                Inline::Text(" three".to_string()),
            ]),
        ]
    );
}

#[test]
fn test_link_without_href_fails() {
    let source = outline(r#"<li id="a"><p><a>dangling</a></p></li>"#);
    let result = BikeFormat.parse(&source);
    assert_eq!(
        result,
        Err(FormatError::MissingAttribute {
            tag: "a",
            attribute: "href",
        })
    );
}

#[test]
fn test_unknown_row_type_fails() {
    let source = outline(r#"<li id="a" data-type="banner"><p>x</p></li>"#);
    let result = BikeFormat.parse(&source);
    assert_eq!(
        result,
        Err(FormatError::UnknownRowType("banner".to_string()))
    );
}

#[test]
fn test_nested_list_under_unordered_row_nests() {
    let source = outline(
        r#"<li id="a" data-type="unordered"><p>parent</p>
             <ul id="u1">
               <li id="b" data-type="unordered"><p>child</p></li>
             </ul></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 1);
    match &children[0] {
        DocNode::BulletList(outer) => {
            assert_eq!(outer.items.len(), 1);
            match &outer.items[0] {
                DocNode::ListItem(item) => {
                    assert_eq!(item.children.len(), 2);
                    assert!(matches!(&item.children[0], DocNode::Paragraph(_)));
                    assert!(matches!(&item.children[1], DocNode::BulletList(_)));
                }
                other => panic!("Expected list item, got {other:?}"),
            }
        }
        other => panic!("Expected bullet list, got {other:?}"),
    }
}

#[test]
fn test_nested_list_under_body_row_flattens() {
    let source = outline(
        r#"<li id="a"><p>parent</p>
             <ul id="u1">
               <li id="b"><p>child</p></li>
             </ul></li>"#,
    );
    let doc = bike_to_ir(&source);

    let children = container_children(&doc);
    assert_eq!(children.len(), 2);
    assert!(matches!(&children[0], DocNode::Paragraph(_)));
    assert!(matches!(&children[1], DocNode::Paragraph(_)));
}

#[test]
fn test_kitchensink_shape() {
    let doc = bike_to_ir(&read_fixture("kitchensink.bike"));
    let children = container_children(&doc);

    // Projects heading, body paragraph, unordered run, task run,
    // Notes heading, quote run, merged code block, rule, note paragraph,
    // rich-text paragraph, ordered run
    assert_eq!(children.len(), 11);

    assert!(matches!(&children[0], DocNode::Heading(h) if h.level == 1));
    assert!(matches!(&children[1], DocNode::Paragraph(_)));
    assert!(matches!(&children[2], DocNode::BulletList(l) if l.items.len() == 3));
    assert!(matches!(&children[3], DocNode::BulletList(l) if l.items.len() == 2));
    assert!(matches!(&children[4], DocNode::Heading(h) if h.level == 2));
    assert!(matches!(&children[5], DocNode::BlockQuote(q) if q.children.len() == 2));
    assert!(matches!(&children[6], DocNode::CodeBlock(c) if c.text == "fn main() {\n}"));
    assert!(matches!(&children[7], DocNode::HorizontalRule));
    assert!(matches!(&children[8], DocNode::Paragraph(_)));
    assert!(matches!(&children[9], DocNode::Paragraph(_)));
    assert!(matches!(&children[10], DocNode::OrderedList(l) if l.items.len() == 2));
}

#[test]
fn test_kitchensink_inline_variants() {
    let doc = bike_to_ir(&read_fixture("kitchensink.bike"));
    let children = container_children(&doc);

    let content = paragraph_content(&children[9]);
    let has = |pred: &dyn Fn(&Inline) -> bool| content.iter().any(pred);

    assert!(has(&|i| matches!(i, Inline::Emph(_))));
    assert!(has(&|i| matches!(i, Inline::Strong(_))));
    assert!(has(&|i| matches!(i, Inline::Strikeout(_))));
    assert!(has(&|i| matches!(i, Inline::Span { attributes, .. }
        if attributes.contains(&("class".to_string(), "mark".to_string())))));
    assert!(has(&|i| matches!(i, Inline::Code(_))));
}

#[test]
fn test_kitchensink_link_carries_url() {
    let doc = bike_to_ir(&read_fixture("kitchensink.bike"));
    let children = container_children(&doc);

    let content = paragraph_content(&children[1]);
    assert!(content.iter().any(|i| matches!(i, Inline::Link { url, .. }
        if url == "https://example.com")));
}
