/// A cursor for inline parsing with position tracking.
///
/// All delimiters the inline parser looks for are ASCII, so every index the
/// cursor stops at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns the unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Absolute index of the next occurrence of `pat` at or after `from`.
    pub fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|at| from + at)
    }

    /// Consumes up to (not including) the absolute index `end`, returning the
    /// consumed text.
    pub fn take_until(&mut self, end: usize) -> &'a str {
        let end = end.clamp(self.i, self.s.len());
        let taken = &self.s[self.i..end];
        self.i = end;
        taken
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to the absolute index `to`.
    pub fn seek(&mut self, to: usize) {
        self.i = to;
    }
}
