use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};

/// A line that starts a block, with its marker already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    Fence { tag: Option<String> },
    Heading { level: u8, text: String },
    Quote { text: String },
    Bullet { text: String },
    Ordered { text: String },
}

/// Detects a block opener.
///
/// Precedence is fixed: fence, heading, blockquote, bullet, ordered item.
/// The first match wins, so a line only ever opens one block kind.
pub fn try_open(line: &str) -> Option<BlockOpen> {
    if let Some(open) = CodeFence::open(line) {
        return Some(BlockOpen::Fence { tag: open.tag });
    }
    if let Some((level, text)) = Heading::parse(line) {
        return Some(BlockOpen::Heading {
            level,
            text: text.to_string(),
        });
    }
    if let Some(text) = BlockQuote::strip_prefix(line) {
        return Some(BlockOpen::Quote {
            text: text.to_string(),
        });
    }
    if let Some(text) = ListMarker::bullet(line) {
        return Some(BlockOpen::Bullet {
            text: text.to_string(),
        });
    }
    if let Some(text) = ListMarker::ordered(line) {
        return Some(BlockOpen::Ordered {
            text: text.to_string(),
        });
    }
    None
}
