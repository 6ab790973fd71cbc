use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

/// A link target that passed scheme validation.
///
/// Always starts with `/`, `#`, `mailto:`, `tel:`, `http://` or `https://`.
/// The only ways to obtain one are [`sanitize_href`] and a navigation rewrite
/// whose result is sanitized again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeHref(String);

impl SafeHref {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SafeHref {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeHref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prefixes accepted without URL parsing.
const LOCAL_PREFIXES: [&str; 4] = ["/", "#", "mailto:", "tel:"];

/// Absolute `http`/`https` URL with a non-empty authority.
fn absolute_web_url() -> &'static Regex {
    static WEB_URL: OnceLock<Regex> = OnceLock::new();
    WEB_URL.get_or_init(|| {
        Regex::new(r"^(?i:(https?))://[^/?#\\\s@]*@?[^/?#\\\s@]+([/?#].*)?$")
            .expect("Invalid web URL regex")
    })
}

/// Validates a raw href.
///
/// Trims whitespace and rejects empty input. `/`, `#`, `mailto:` and `tel:`
/// targets are accepted as-is, except scheme-relative `//host` (and its `/\`
/// spelling), which browsers resolve to another origin. Anything else must be
/// an absolute `http` or `https` URL; the scheme is normalized to lowercase.
/// Control characters are never accepted.
pub fn sanitize_href(raw: &str) -> Option<SafeHref> {
    let href = raw.trim();
    if href.is_empty() || href.chars().any(char::is_control) {
        return None;
    }

    if href.starts_with("//") || href.starts_with("/\\") {
        return None;
    }

    if LOCAL_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return Some(SafeHref(href.to_string()));
    }

    let caps = absolute_web_url().captures(href)?;
    let scheme = caps.get(1)?;
    let normalized = format!(
        "{}{}",
        scheme.as_str().to_ascii_lowercase(),
        &href[scheme.end()..]
    );
    Some(SafeHref(normalized))
}
