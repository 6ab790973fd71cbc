/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one blockquote marker (and a single following space) from a line.
    ///
    /// Returns `None` when the line is not a blockquote line. Nested markers
    /// are not counted: `>> x` yields `> x`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
