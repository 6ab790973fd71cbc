//! # Block Parsing
//!
//! Two-phase, line-driven block scanning.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank, indented, which block it would open, fence closer)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds the block being
//!    accumulated and emits a `Block` whenever a blank line or another opener ends it
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, BlockQuote, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open` dispatch for detecting block openers in fixed precedence
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced blocks are raw zones: no block/inline parsing inside, blank lines kept
//! - Blank lines are separators only and never produce blocks
//! - No input produces an error; the worst case is a single paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Block;
