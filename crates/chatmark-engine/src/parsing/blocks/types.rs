use serde::Serialize;

/// A structural unit of a message, in input order.
///
/// Blank lines only separate blocks; they never appear in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Default block when no other opener matches. Lines are joined with `\n`.
    Paragraph { text: String },
    /// A single-line `#` heading, level 1 to 6.
    Heading { level: u8, text: String },
    /// `-`/`*` items; continuation lines are joined into their item with `\n`.
    UnorderedList { items: Vec<String> },
    /// `1.` style items.
    OrderedList { items: Vec<String> },
    /// `>` lines with the marker stripped, joined with `\n`.
    Blockquote { text: String },
    /// A fenced block. The body is verbatim: no block or inline parsing inside.
    FencedBlock { body: String, tag: Option<String> },
}

impl Block {
    /// Short kind label, used by outlines and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "Paragraph",
            Block::Heading { .. } => "Heading",
            Block::UnorderedList { .. } => "UnorderedList",
            Block::OrderedList { .. } => "OrderedList",
            Block::Blockquote { .. } => "Blockquote",
            Block::FencedBlock { .. } => "FencedBlock",
        }
    }
}
