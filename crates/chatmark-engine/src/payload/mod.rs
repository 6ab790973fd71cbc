//! # Payloads
//!
//! Fenced blocks whose tag is in the [`PayloadKind`] table carry a JSON
//! object describing a presentation shape (budget, timeline, risks...).
//!
//! - **`kind`**: the closed tag table
//! - **`types`**: payload shapes, every field optional
//! - **`lenient`**: serde helpers that turn type mismatches into absent fields
//! - **`dispatch`**: tag + body to [`Payload`], never failing

pub mod dispatch;
pub mod kind;
pub mod lenient;
pub mod types;

pub use dispatch::{PayloadError, decode, dispatch, dispatch_kind};
pub use kind::PayloadKind;
pub use types::*;
