use std::fmt::Write;

use crate::parsing::{blocks::Block, inline::InlineNode};

use super::{Document, Rendered};

/// Stable, human-readable text outline of a document.
///
/// One node per line, children indented by two spaces. Text is shown with
/// Rust string escaping so whitespace is visible; payloads are shown as
/// compact JSON with absent fields as `null`.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for rb in doc {
        let _ = writeln!(out, "{}", block_label(&rb.block));
        match &rb.rendered {
            Rendered::Inline { nodes } => write_nodes(&mut out, nodes, 1),
            Rendered::Items { items } => {
                for item in items {
                    out.push_str("  Item\n");
                    write_nodes(&mut out, item, 2);
                }
            }
            Rendered::Payload { payload } => {
                let json = serde_json::to_string(payload).unwrap_or_default();
                let _ = writeln!(out, "  Payload {json}");
            }
            Rendered::Code { body, .. } => {
                let _ = writeln!(out, "  Code {body:?}");
            }
        }
    }
    out
}

fn block_label(block: &Block) -> String {
    match block {
        Block::Heading { level, .. } => format!("Heading({level})"),
        Block::FencedBlock { tag: Some(tag), .. } => format!("FencedBlock({tag})"),
        other => other.kind_name().to_string(),
    }
}

fn write_nodes(out: &mut String, nodes: &[InlineNode], depth: usize) {
    let pad = "  ".repeat(depth);
    for node in nodes {
        match node {
            InlineNode::Text(s) => {
                let _ = writeln!(out, "{pad}Text {s:?}");
            }
            InlineNode::InlineCode(s) => {
                let _ = writeln!(out, "{pad}InlineCode {s:?}");
            }
            InlineNode::Bold(children) => {
                let _ = writeln!(out, "{pad}Bold");
                write_nodes(out, children, depth + 1);
            }
            InlineNode::Link { children, href } => {
                let _ = writeln!(out, "{pad}Link {href}");
                write_nodes(out, children, depth + 1);
            }
        }
    }
}
