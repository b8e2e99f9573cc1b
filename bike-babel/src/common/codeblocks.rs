//! Adjacent code-block merging.
//!
//! Every code row in the outline converts to its own [`CodeBlock`], so a
//! multi-line snippet written as consecutive code rows arrives as a run of
//! one-line blocks. This pass merges adjacent sibling code blocks into one,
//! joined with a line break. It never merges across an intervening node.

use crate::ir::nodes::{DocNode, Document, Inline};

/// Merge adjacent sibling `CodeBlock` nodes throughout the document.
pub fn merge_code_blocks(doc: &mut Document) {
    merge_in_children(&mut doc.children);
}

fn merge_in_children(children: &mut Vec<DocNode>) {
    let mut i = 0;
    while i + 1 < children.len() {
        let adjacent = matches!(children[i], DocNode::CodeBlock(_))
            && matches!(children[i + 1], DocNode::CodeBlock(_));
        if adjacent {
            let removed = children.remove(i + 1);
            if let (DocNode::CodeBlock(first), DocNode::CodeBlock(second)) =
                (&mut children[i], removed)
            {
                first.text.push('\n');
                first.text.push_str(&second.text);
            }
        } else {
            i += 1;
        }
    }

    for child in children.iter_mut() {
        match child {
            DocNode::Document(d) => merge_in_children(&mut d.children),
            DocNode::Container(c) => merge_in_children(&mut c.children),
            DocNode::BlockQuote(q) => merge_in_children(&mut q.children),
            DocNode::BulletList(l) | DocNode::OrderedList(l) => merge_in_children(&mut l.items),
            DocNode::ListItem(li) => merge_in_children(&mut li.children),
            DocNode::Paragraph(p) => merge_in_inlines(&mut p.content),
            DocNode::Heading(h) => merge_in_inlines(&mut h.content),
            DocNode::HorizontalRule | DocNode::CodeBlock(_) => {}
        }
    }
}

fn merge_in_inlines(content: &mut [Inline]) {
    for inline in content.iter_mut() {
        match inline {
            Inline::Note(children) => merge_in_children(children),
            Inline::Link { content, .. } | Inline::Span { content, .. } => {
                merge_in_inlines(content)
            }
            Inline::Emph(content) | Inline::Strong(content) | Inline::Strikeout(content) => {
                merge_in_inlines(content)
            }
            Inline::Text(_) | Inline::Code(_) => {}
        }
    }
}
