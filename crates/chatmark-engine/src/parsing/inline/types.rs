use serde::Serialize;

use crate::links::SafeHref;

/// A parsed inline node. Bold and link nodes nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A code span (backtick-delimited). This is a "raw zone": no parsing inside.
    InlineCode(String),
    /// `**...**`, whose content may hold code spans and links.
    Bold(Vec<InlineNode>),
    /// `[label](href)` with an href that passed sanitization.
    Link {
        children: Vec<InlineNode>,
        href: SafeHref,
    },
}

impl InlineNode {
    /// Visible text with all markup removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    pub(crate) fn write_plain(&self, out: &mut String) {
        match self {
            InlineNode::Text(s) | InlineNode::InlineCode(s) => out.push_str(s),
            InlineNode::Bold(children) | InlineNode::Link { children, .. } => {
                for child in children {
                    child.write_plain(out);
                }
            }
        }
    }
}

/// Concatenated visible text of a run of inline nodes.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_plain(&mut out);
    }
    out
}
