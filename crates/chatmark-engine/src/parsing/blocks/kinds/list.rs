/// List item markers: `-`/`*` bullets and `1.` style numbers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [u8; 2] = [b'-', b'*'];
    pub const ORDINAL_DOT: u8 = b'.';

    /// Returns the item text after a `- ` or `* ` marker.
    pub fn bullet(line: &str) -> Option<&str> {
        let t = line.trim_start();
        let first = *t.as_bytes().first()?;
        if !Self::BULLETS.contains(&first) {
            return None;
        }
        Self::after_marker(&t[1..])
    }

    /// Returns the item text after a `12. ` marker.
    pub fn ordered(line: &str) -> Option<&str> {
        let t = line.trim_start();
        let digits = t.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || t.as_bytes().get(digits) != Some(&Self::ORDINAL_DOT) {
            return None;
        }
        Self::after_marker(&t[digits + 1..])
    }

    /// A marker must be followed by whitespace (or end the line).
    fn after_marker(rest: &str) -> Option<&str> {
        if rest.is_empty() {
            return None;
        }
        rest.starts_with(char::is_whitespace).then(|| rest.trim())
    }

    /// True when a line carries leading whitespace, making it a candidate
    /// continuation of the current item.
    pub fn is_indented(line: &str) -> bool {
        line.starts_with([' ', '\t'])
    }
}
