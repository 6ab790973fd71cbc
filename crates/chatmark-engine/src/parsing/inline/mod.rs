//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! paragraphs, headings, blockquotes and each list item independently.
//!
//! The parser is a small state machine: a cursor, a cache of where each
//! marker next occurs, and a pending-text buffer that coalesces plain text.
//! - Code spans suppress all other inline parsing inside them
//! - Bold spans and link labels are parsed recursively, up to `MAX_INLINE_DEPTH`
//! - Link hrefs go through [`crate::links::LinkResolver`]
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, InlineCode, Bold, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Strong, Link)
//! - **`cursor`**: `Cursor` for position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Unmatched Markers
//!
//! A marker that does not close is literal text; scanning resumes right after
//! it, so `[` never swallows the rest of a line.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{MAX_INLINE_DEPTH, parse_inline, parse_inline_with};
pub use types::{InlineNode, plain_text};
