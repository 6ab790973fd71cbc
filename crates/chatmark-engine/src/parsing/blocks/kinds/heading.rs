pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses `#`..`######` followed by whitespace into `(level, text)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let level = t.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let rest = &t[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((level as u8, rest.trim()))
    }
}
