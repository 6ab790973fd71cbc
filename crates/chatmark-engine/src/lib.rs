pub mod document;
pub mod links;
pub mod parsing;
pub mod payload;

// Re-export key types for easier usage
pub use document::{Document, Rendered, RenderedBlock, outline, render};
pub use links::{NavigationContext, SafeHref, sanitize_href};
pub use parsing::{blocks::Block, inline::InlineNode, parse_blocks};
pub use payload::{Payload, PayloadKind, dispatch};
