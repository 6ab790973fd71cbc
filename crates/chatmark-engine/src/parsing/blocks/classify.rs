use super::{
    kinds::{CodeFence, ListMarker},
    open::{BlockOpen, try_open},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The raw line, without its line terminator.
    pub raw: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Whether the line begins with a space or tab.
    pub is_indented: bool,
    /// The block this line would open outside of a fence.
    pub open: Option<BlockOpen>,
    /// Whether this line would close an open fence.
    pub closes_fence: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let is_blank = line.trim().is_empty();

        LineClass {
            raw: line,
            is_blank,
            is_indented: ListMarker::is_indented(line),
            open: if is_blank { None } else { try_open(line) },
            closes_fence: CodeFence::closes(line),
        }
    }
}
