//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - raw zone that suppresses other parsing
//! - **`Strong`**: `**` - bold span, content parsed recursively
//! - **`Link`**: `[label](href)` - label parsed recursively, href sanitized
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use link::{Link, LinkShape, LinkShapes};
pub use strong::Strong;
