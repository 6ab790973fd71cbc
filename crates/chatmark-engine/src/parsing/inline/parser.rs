use crate::links::LinkResolver;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Link, LinkShapes, Strong},
    types::InlineNode,
};

/// The delimiters that can start an inline construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Tick,
    Strong,
    Link,
}

impl Marker {
    /// Tie-break order when two markers start at the same index.
    const PRECEDENCE: [Marker; 3] = [Marker::Tick, Marker::Strong, Marker::Link];

    fn delim(self) -> &'static str {
        match self {
            Marker::Tick => CodeSpan::TICK,
            Marker::Strong => Strong::DELIM,
            Marker::Link => Link::OPEN,
        }
    }

    fn slot(self) -> usize {
        match self {
            Marker::Tick => 0,
            Marker::Strong => 1,
            Marker::Link => 2,
        }
    }
}

/// Remembers where each marker next occurs so the input is searched once
/// per marker rather than once per step.
#[derive(Default)]
struct MarkerScan {
    /// `None`: not searched yet. `Some(None)`: absent from here to the end.
    next: [Option<Option<usize>>; 3],
}

impl MarkerScan {
    fn next(&mut self, cur: &Cursor<'_>) -> Option<(usize, Marker)> {
        let mut best: Option<(usize, Marker)> = None;
        for marker in Marker::PRECEDENCE {
            let slot = &mut self.next[marker.slot()];
            let cached = *slot;
            let found = match cached {
                Some(Some(at)) if at >= cur.pos() => Some(at),
                Some(None) => None,
                _ => {
                    let at = cur.find_from(cur.pos(), marker.delim());
                    *slot = Some(at);
                    at
                }
            };
            if let Some(at) = found
                && best.is_none_or(|(b, _)| at < b)
            {
                best = Some((at, marker));
            }
        }
        best
    }
}

/// Output buffer that coalesces adjacent text into a single `Text` node.
#[derive(Default)]
struct InlineBuffer {
    pending: String,
    out: Vec<InlineNode>,
}

impl InlineBuffer {
    fn push_text(&mut self, s: &str) {
        self.pending.push_str(s);
    }

    fn push(&mut self, node: InlineNode) {
        match node {
            InlineNode::Text(s) => self.push_text(&s),
            other => {
                self.flush_text();
                self.out.push(other);
            }
        }
    }

    fn flush_text(&mut self) {
        if !self.pending.is_empty() {
            self.out
                .push(InlineNode::Text(std::mem::take(&mut self.pending)));
        }
    }

    fn finish(mut self) -> Vec<InlineNode> {
        self.flush_text();
        self.out
    }
}

/// What a successful `try_parse_*` produced.
enum Parsed {
    Node(InlineNode),
    /// A link whose href was rejected: only its label survives.
    Label(Vec<InlineNode>),
}

/// Nesting limit for bold and link labels. Deeper interiors are kept as
/// plain text, so hostile input cannot exhaust the stack.
pub const MAX_INLINE_DEPTH: usize = 32;

/// Per-call parse state shared by the `try_parse_*` helpers.
struct InlineParser<'s, 'l> {
    cur: Cursor<'s>,
    links: &'l LinkResolver<'l>,
    shapes: LinkShapes,
    depth: usize,
}

/// Parses inline content with hrefs sanitized but never rewritten.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    parse_inline_with(s, &LinkResolver::default())
}

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Scans left to right for the earliest backtick, `**` or `[`; ties go to
/// backtick, then bold, then link. A marker whose construct does not close is
/// emitted as literal text and scanning resumes right after it.
///
/// # Returns
/// Nodes covering the entire input. Adjacent text is coalesced.
pub fn parse_inline_with(s: &str, links: &LinkResolver<'_>) -> Vec<InlineNode> {
    parse_nested(s, links, 0)
}

fn parse_nested(s: &str, links: &LinkResolver<'_>, depth: usize) -> Vec<InlineNode> {
    if depth > MAX_INLINE_DEPTH {
        return literal(s);
    }

    let mut p = InlineParser {
        cur: Cursor::new(s),
        links,
        shapes: LinkShapes::scan(s),
        depth,
    };
    let mut scan = MarkerScan::default();
    let mut out = InlineBuffer::default();

    while let Some((at, marker)) = scan.next(&p.cur) {
        out.push_text(p.cur.take_until(at));

        let parsed = match marker {
            Marker::Tick => p.try_parse_code_span(),
            Marker::Strong => p.try_parse_strong(),
            Marker::Link => p.try_parse_link(),
        };

        match parsed {
            Some(Parsed::Node(node)) => out.push(node),
            Some(Parsed::Label(nodes)) => nodes.into_iter().for_each(|n| out.push(n)),
            None => {
                out.push_text(marker.delim());
                p.cur.bump_n(marker.delim().len());
            }
        }
    }

    out.push_text(p.cur.rest());
    out.finish()
}

/// Text kept as-is once the nesting limit is reached.
fn literal(s: &str) -> Vec<InlineNode> {
    if s.is_empty() {
        vec![]
    } else {
        vec![InlineNode::Text(s.to_string())]
    }
}

impl InlineParser<'_, '_> {
    fn interior(&self, s: &str) -> Vec<InlineNode> {
        parse_nested(s, self.links, self.depth + 1)
    }

    /// Attempts to parse a code span at the cursor. The content is verbatim.
    ///
    /// Returns `None` without moving the cursor if there is no closing backtick.
    fn try_parse_code_span(&mut self) -> Option<Parsed> {
        let cur = &mut self.cur;
        let inner_start = cur.pos() + CodeSpan::TICK.len();
        let close = cur.find_from(inner_start, CodeSpan::TICK)?;

        let inner = &cur.s[inner_start..close];
        cur.seek(close + CodeSpan::TICK.len());
        Some(Parsed::Node(InlineNode::InlineCode(inner.to_string())))
    }

    /// Attempts to parse a `**bold**` span at the cursor, recursing into its content.
    fn try_parse_strong(&mut self) -> Option<Parsed> {
        let inner_start = self.cur.pos() + Strong::DELIM.len();
        let close = self.cur.find_from(inner_start, Strong::DELIM)?;

        let text = self.cur.s;
        let inner = &text[inner_start..close];
        self.cur.seek(close + Strong::DELIM.len());
        Some(Parsed::Node(InlineNode::Bold(self.interior(inner))))
    }

    /// Attempts to parse `[label](href)` at the cursor.
    ///
    /// Returns `None` if the shape does not match. When the shape matches but the
    /// href is rejected, the label is kept and the link wrapper is dropped.
    fn try_parse_link(&mut self) -> Option<Parsed> {
        let open = self.cur.pos();
        let shape = self.shapes.at(open)?;
        let href_end = shape.href_end?;

        let text = self.cur.s;
        let label = &text[open + 1..shape.close];
        let raw_href = &text[shape.close + 2..href_end];
        self.cur.seek(href_end + 1);

        let children = self.interior(label);
        match self.links.resolve(raw_href) {
            Some(href) => Some(Parsed::Node(InlineNode::Link { children, href })),
            None => {
                log::debug!("dropping link with rejected href {raw_href:?}");
                Some(Parsed::Label(children))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::links::sanitize_href;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.into())
    }

    fn code(s: &str) -> InlineNode {
        InlineNode::InlineCode(s.into())
    }

    fn link(children: Vec<InlineNode>, href: &str) -> InlineNode {
        InlineNode::Link {
            children,
            href: sanitize_href(href).unwrap(),
        }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![text("run "), code("cargo test"), text(" now")]
        );
    }

    #[test]
    fn code_span_suppresses_other_markers() {
        assert_eq!(
            parse_inline("`**not bold** [x](/y)`"),
            vec![code("**not bold** [x](/y)")]
        );
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(parse_inline("`unclosed code"), vec![text("`unclosed code")]);
    }

    #[test]
    fn unclosed_tick_does_not_hide_later_markers() {
        assert_eq!(
            parse_inline("a ` b **c**"),
            vec![text("a ` b "), InlineNode::Bold(vec![text("c")])]
        );
    }

    #[test]
    fn parse_bold() {
        assert_eq!(
            parse_inline("a **b** c"),
            vec![text("a "), InlineNode::Bold(vec![text("b")]), text(" c")]
        );
    }

    #[test]
    fn bold_contains_code_and_link() {
        assert_eq!(
            parse_inline("**bold [label](https://x) more**"),
            vec![InlineNode::Bold(vec![
                text("bold "),
                link(vec![text("label")], "https://x"),
                text(" more"),
            ])]
        );
    }

    #[test]
    fn unclosed_bold_becomes_text() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
    }

    #[test]
    fn triple_asterisk_is_text() {
        assert_eq!(parse_inline("***"), vec![text("***")]);
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("see [docs](/help) here"),
            vec![text("see "), link(vec![text("docs")], "/help"), text(" here")]
        );
    }

    #[test]
    fn link_label_is_parsed() {
        assert_eq!(
            parse_inline("[**big** `x`](#top)"),
            vec![link(
                vec![InlineNode::Bold(vec![text("big")]), text(" "), code("x")],
                "#top"
            )]
        );
    }

    #[test]
    fn nested_brackets_in_label() {
        assert_eq!(
            parse_inline("[a [b] c](/d)"),
            vec![link(vec![text("a [b] c")], "/d")]
        );
    }

    #[rstest]
    #[case("javascript:alert%281%29")]
    #[case("JavaScript:void")]
    #[case("data:text/html,hi")]
    #[case("vbscript:x")]
    #[case("//evil.example")]
    #[case("ftp://files.example")]
    #[case("")]
    fn unsafe_href_keeps_only_label(#[case] href: &str) {
        let input = format!("click [here]({href}) now");
        assert_eq!(parse_inline(&input), vec![text("click here now")]);
    }

    #[test]
    fn href_ends_at_first_close_paren() {
        assert_eq!(
            parse_inline("[x](javascript:alert(1))"),
            vec![text("x)")]
        );
    }

    #[test]
    fn rejected_link_keeps_nested_label_nodes() {
        assert_eq!(
            parse_inline("[**x**](javascript:y)"),
            vec![InlineNode::Bold(vec![text("x")])]
        );
    }

    #[rstest]
    #[case("[no close", "[no close")]
    #[case("[label] (gap)", "[label] (gap)")]
    #[case("[label](no paren", "[label](no paren")]
    #[case("[]", "[]")]
    fn malformed_link_shapes_are_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_inline(input), vec![text(expected)]);
    }

    #[test]
    fn failed_open_bracket_rescans_after_itself() {
        assert_eq!(
            parse_inline("[ [a](/b)"),
            vec![text("[ "), link(vec![text("a")], "/b")]
        );
    }

    #[test]
    fn earliest_marker_wins() {
        assert_eq!(
            parse_inline("[`a`](/x) **b**"),
            vec![
                link(vec![code("a")], "/x"),
                text(" "),
                InlineNode::Bold(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn empty_code_span() {
        assert_eq!(parse_inline("a``b"), vec![text("a"), code(""), text("b")]);
    }

    #[test]
    fn multibyte_text_around_markers() {
        assert_eq!(
            parse_inline("Coût **total** : 1 200 €"),
            vec![
                text("Coût "),
                InlineNode::Bold(vec![text("total")]),
                text(" : 1 200 €"),
            ]
        );
    }

    #[test]
    fn plain_text_strips_markup() {
        let nodes = parse_inline("a **b** [c `d`](/e)");
        assert_eq!(crate::parsing::inline::plain_text(&nodes), "a b c d");
    }

    fn depth(nodes: &[InlineNode]) -> usize {
        nodes
            .iter()
            .map(|n| match n {
                InlineNode::Bold(children) | InlineNode::Link { children, .. } => {
                    1 + depth(children)
                }
                InlineNode::Text(_) | InlineNode::InlineCode(_) => 0,
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn nesting_below_limit_is_parsed() {
        let nodes = parse_inline("[[[a](/x)](/y)](/z)");
        assert_eq!(
            nodes,
            vec![link(
                vec![link(vec![link(vec![text("a")], "/x")], "/y")],
                "/z"
            )]
        );
    }

    #[test]
    fn deep_link_nesting_is_capped() {
        let n = 10_000;
        let input = format!("{}a{}", "[".repeat(n), "](/x)".repeat(n));
        let nodes = parse_inline(&input);

        assert_eq!(depth(&nodes), MAX_INLINE_DEPTH + 1);
        // Each parsed level drops its `[` and `](/x)`.
        assert_eq!(
            crate::parsing::inline::plain_text(&nodes).len(),
            input.len() - 6 * (MAX_INLINE_DEPTH + 1)
        );
    }

    #[test]
    fn interior_past_limit_is_literal() {
        let n = MAX_INLINE_DEPTH + 2;
        let input = format!("{}a{}", "[".repeat(n), "](/x)".repeat(n));
        let mut nodes = parse_inline(&input);
        for _ in 0..=MAX_INLINE_DEPTH {
            let Some(InlineNode::Link { children, .. }) = nodes.pop() else {
                panic!("expected a link");
            };
            nodes = children;
        }
        assert_eq!(nodes, vec![text("[a](/x)")]);
    }

    #[rstest]
    #[case("[")]
    #[case("[a](")]
    #[case("[a]")]
    #[case("](")]
    fn long_runs_of_unclosed_links_stay_text(#[case] unit: &str) {
        let input = unit.repeat(20_000);
        assert_eq!(parse_inline(&input), vec![text(&input)]);
    }

    #[test]
    fn long_mixed_marker_run_completes() {
        let input = "`tick **open [label ".repeat(10_000);
        let nodes = parse_inline(&input);
        assert!(!nodes.is_empty());
        assert!(crate::parsing::inline::plain_text(&nodes).len() <= input.len());
    }
}
