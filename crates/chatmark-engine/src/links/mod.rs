//! # Links
//!
//! Link targets are untrusted. Every href goes through [`sanitize_href`]
//! before a `Link` node can exist; help pseudo-links (`#help:...`) may then be
//! redirected by a caller-supplied [`NavigationContext`].

pub mod navigation;
pub mod sanitize;

pub use navigation::{HELP_LINK_PREFIX, LinkResolver, NavigationContext, is_help_link};
pub use sanitize::{SafeHref, sanitize_href};
