/// The opener of a fenced block, carrying the optional tag after the ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub tag: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const TICK: u8 = b'`';
    pub const MIN_TICKS: usize = 3;
    pub const CLOSER: &'static str = "```";

    /// Recognizes a fence opener: three or more backticks, optionally followed
    /// by a tag without embedded whitespace.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let t = line.trim();
        let ticks = t.bytes().take_while(|&b| b == Self::TICK).count();
        if ticks < Self::MIN_TICKS {
            return None;
        }

        let tag = &t[ticks..];
        if tag.chars().any(|c| c.is_whitespace() || c == '`') {
            return None;
        }

        Some(FenceOpen {
            tag: (!tag.is_empty()).then(|| tag.to_string()),
        })
    }

    /// Only a bare triple backtick closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.trim() == Self::CLOSER
    }
}
