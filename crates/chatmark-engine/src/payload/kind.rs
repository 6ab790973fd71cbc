use serde::Serialize;

/// The closed set of fenced-block tags that carry a structured payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    LexiconQuery,
    BudgetSummary,
    Timeline,
    RiskGroups,
    QuoteDigest,
    ExampleNote,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 6] = [
        PayloadKind::LexiconQuery,
        PayloadKind::BudgetSummary,
        PayloadKind::Timeline,
        PayloadKind::RiskGroups,
        PayloadKind::QuoteDigest,
        PayloadKind::ExampleNote,
    ];

    /// Canonical fence tag.
    pub fn tag(self) -> &'static str {
        match self {
            PayloadKind::LexiconQuery => "lexicon-query",
            PayloadKind::BudgetSummary => "budget-summary",
            PayloadKind::Timeline => "timeline",
            PayloadKind::RiskGroups => "risk-groups",
            PayloadKind::QuoteDigest => "quote-digest",
            PayloadKind::ExampleNote => "example-note",
        }
    }

    /// Looks a fence tag up in the table: trimmed, ASCII case-insensitive,
    /// `_` accepted in place of `-`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let wanted = tag.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.tag() == wanted)
    }
}
