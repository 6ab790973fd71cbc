/// Bold span delimited by a double asterisk on both sides.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}
