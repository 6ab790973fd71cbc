//! # Document
//!
//! The finished tree handed to a presentation layer: every block paired with
//! its rendered form. Built once by [`render`], never mutated afterwards.

pub mod assemble;
pub mod outline;

use serde::Serialize;

use crate::{
    links::SafeHref,
    parsing::{blocks::Block, inline::InlineNode},
    payload::Payload,
};

pub use assemble::render;
pub use outline::outline;

/// How a block is presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rendered {
    /// Paragraph, heading and blockquote text.
    Inline { nodes: Vec<InlineNode> },
    /// List items, each tokenized independently.
    Items { items: Vec<Vec<InlineNode>> },
    /// A fenced block with a recognized tag.
    Payload { payload: Payload },
    /// A fenced block with any other tag (or none): shown verbatim.
    Code { tag: Option<String>, body: String },
}

/// A block and its rendered form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedBlock {
    pub block: Block,
    pub rendered: Rendered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<RenderedBlock>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderedBlock> {
        self.blocks.iter()
    }

    /// Visible text without markup, one block per line group.
    ///
    /// Payloads contribute nothing; raw code is kept verbatim. Useful for
    /// previews and notifications.
    pub fn plain_text(&self) -> String {
        let parts: Vec<String> = self
            .blocks
            .iter()
            .filter_map(|b| match &b.rendered {
                Rendered::Inline { nodes } => Some(crate::parsing::inline::plain_text(nodes)),
                Rendered::Items { items } => Some(
                    items
                        .iter()
                        .map(|item| crate::parsing::inline::plain_text(item))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                Rendered::Code { body, .. } => Some(body.clone()),
                Rendered::Payload { .. } => None,
            })
            .collect();
        parts.join("\n\n")
    }

    /// Every link target in document order, nested links included.
    pub fn links(&self) -> Vec<&SafeHref> {
        let mut out = vec![];
        for block in &self.blocks {
            match &block.rendered {
                Rendered::Inline { nodes } => collect_links(nodes, &mut out),
                Rendered::Items { items } => {
                    for item in items {
                        collect_links(item, &mut out);
                    }
                }
                Rendered::Payload { .. } | Rendered::Code { .. } => {}
            }
        }
        out
    }

    /// Every payload in document order.
    pub fn payloads(&self) -> impl Iterator<Item = &Payload> {
        self.blocks.iter().filter_map(|b| match &b.rendered {
            Rendered::Payload { payload } => Some(payload),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a RenderedBlock;
    type IntoIter = std::slice::Iter<'a, RenderedBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

fn collect_links<'a>(nodes: &'a [InlineNode], out: &mut Vec<&'a SafeHref>) {
    for node in nodes {
        match node {
            InlineNode::Link { children, href } => {
                out.push(href);
                collect_links(children, out);
            }
            InlineNode::Bold(children) => collect_links(children, out),
            InlineNode::Text(_) | InlineNode::InlineCode(_) => {}
        }
    }
}
