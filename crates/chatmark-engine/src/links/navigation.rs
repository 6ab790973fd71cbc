use std::{fmt, sync::Arc};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::sanitize::{SafeHref, sanitize_href};

/// Reserved pseudo-link prefix for deep links into contextual help sections,
/// e.g. `[budget lines](#help:budget-lines)`.
pub const HELP_LINK_PREFIX: &str = "#help:";

/// Unreserved characters kept as-is in generated help routes: A-Z a-z 0-9 - _
const ROUTE_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

type Rewrite = dyn Fn(&str) -> String + Send + Sync;

/// Caller-supplied, read-only context used to redirect help pseudo-links.
///
/// The rewrite callback must be pure: rendering the same text with the same
/// context always yields the same tree.
#[derive(Clone, Default)]
pub struct NavigationContext {
    place: Option<String>,
    rewrite: Option<Arc<Rewrite>>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current logical place (screen, project, section...).
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Installs the rewrite callback for `#help:` pseudo-links.
    pub fn with_rewrite<F>(mut self, rewrite: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.rewrite = Some(Arc::new(rewrite));
        self
    }

    /// Context that maps `#help:<section>` to `<route>/<section>?from=<place>`.
    ///
    /// The place is read when the context is built.
    pub fn help_route(route: impl Into<String>, place: Option<String>) -> Self {
        let route = route.into().trim_end_matches('/').to_string();
        let from = place.clone();
        let ctx = Self {
            place,
            rewrite: None,
        };
        ctx.with_rewrite(move |href| help_target(&route, from.as_deref(), href))
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn has_rewrite(&self) -> bool {
        self.rewrite.is_some()
    }

    /// Applies the rewrite to a help pseudo-link. Other hrefs are returned
    /// untouched and never reach the callback.
    ///
    /// The rewritten target is sanitized again; an unsafe result keeps the
    /// original pseudo-link.
    pub fn rewrite_href(&self, href: SafeHref) -> SafeHref {
        let Some(rewrite) = &self.rewrite else {
            return href;
        };
        if !is_help_link(href.as_str()) {
            return href;
        }

        let rewritten = rewrite(href.as_str());
        match sanitize_href(&rewritten) {
            Some(safe) => safe,
            None => {
                log::debug!("help link rewrite produced unsafe target {rewritten:?}; keeping {href}");
                href
            }
        }
    }
}

impl fmt::Debug for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationContext")
            .field("place", &self.place)
            .field("rewrite", &self.rewrite.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// True for hrefs in the reserved help pseudo-link namespace.
pub fn is_help_link(href: &str) -> bool {
    href.starts_with(HELP_LINK_PREFIX)
}

fn help_target(route: &str, place: Option<&str>, href: &str) -> String {
    let section = href.strip_prefix(HELP_LINK_PREFIX).unwrap_or_default();
    let mut target = route.to_string();
    if !section.is_empty() {
        target.push('/');
        target.extend(utf8_percent_encode(section, ROUTE_COMPONENT));
    }
    if let Some(place) = place.filter(|p| !p.is_empty()) {
        target.push_str("?from=");
        target.extend(utf8_percent_encode(place, ROUTE_COMPONENT));
    }
    target
}

/// Resolves raw link targets found by the inline parser: sanitize first, then
/// let the navigation context redirect help pseudo-links.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkResolver<'a> {
    navigation: Option<&'a NavigationContext>,
}

impl<'a> LinkResolver<'a> {
    pub fn new(navigation: Option<&'a NavigationContext>) -> Self {
        Self { navigation }
    }

    pub fn resolve(&self, raw: &str) -> Option<SafeHref> {
        let href = sanitize_href(raw)?;
        Some(match self.navigation {
            Some(nav) => nav.rewrite_href(href),
            None => href,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn safe(s: &str) -> SafeHref {
        sanitize_href(s).unwrap()
    }

    #[test]
    fn no_callback_passes_through() {
        let ctx = NavigationContext::new().with_place("quotes");
        assert_eq!(ctx.rewrite_href(safe("#help:x")).as_str(), "#help:x");
    }

    #[test]
    fn callback_only_sees_help_links() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let ctx = NavigationContext::new().with_rewrite(move |href| {
            seen.fetch_add(1, Ordering::SeqCst);
            format!("/help/{}", &href[HELP_LINK_PREFIX.len()..])
        });

        assert_eq!(ctx.rewrite_href(safe("/projects")).as_str(), "/projects");
        assert_eq!(ctx.rewrite_href(safe("#top")).as_str(), "#top");
        assert_eq!(
            ctx.rewrite_href(safe("https://example.com")).as_str(),
            "https://example.com"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(ctx.rewrite_href(safe("#help:risks")).as_str(), "/help/risks");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsafe_rewrite_keeps_original() {
        let ctx = NavigationContext::new().with_rewrite(|_| "javascript:alert(1)".into());
        assert_eq!(ctx.rewrite_href(safe("#help:x")).as_str(), "#help:x");
    }

    #[test]
    fn help_route_builds_targets() {
        let ctx = NavigationContext::help_route("/help/", Some("project/42 budget".into()));
        assert_eq!(ctx.place(), Some("project/42 budget"));
        assert_eq!(
            ctx.rewrite_href(safe("#help:budget-lines")).as_str(),
            "/help/budget-lines?from=project%2F42%20budget"
        );
    }

    #[test]
    fn help_route_without_place_or_section() {
        let ctx = NavigationContext::help_route("/help", None);
        assert_eq!(ctx.rewrite_href(safe("#help:")).as_str(), "/help");
        assert_eq!(
            ctx.rewrite_href(safe("#help:a&b")).as_str(),
            "/help/a%26b"
        );
    }

    #[test]
    fn resolver_sanitizes_before_rewrite() {
        let ctx = NavigationContext::help_route("/help", None);
        let resolver = LinkResolver::new(Some(&ctx));
        assert_eq!(resolver.resolve("javascript:x"), None);
        assert_eq!(resolver.resolve(" #help:faq ").unwrap().as_str(), "/help/faq");
    }

    #[test]
    fn debug_hides_callback() {
        let ctx = NavigationContext::new().with_rewrite(|h| h.to_string());
        assert!(format!("{ctx:?}").contains("<fn>"));
    }
}
