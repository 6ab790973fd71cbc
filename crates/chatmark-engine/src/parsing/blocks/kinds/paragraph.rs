/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default block when no other
/// opener matches, and run until a blank line or another block opener.
pub struct Paragraph;

impl Paragraph {
    /// Separator placed between the raw lines of a multi-line paragraph.
    pub const LINE_JOIN: &'static str = "\n";
}
