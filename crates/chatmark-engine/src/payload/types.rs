//! Payload shapes. Every field is optional: absent means "not provided",
//! which consumers must keep distinct from zero or empty.

use serde::{Deserialize, Serialize};

use super::{kind::PayloadKind, lenient};

/// Glossary lookup answer for a trade or contract term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconQuery {
    #[serde(default, deserialize_with = "lenient::field")]
    pub term: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub definition: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub spent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub remaining: Option<f64>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub lines: Option<Vec<BudgetLine>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    #[serde(default, deserialize_with = "lenient::field")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub amount: Option<f64>,
    /// Share of the total, in percent.
    #[serde(default, deserialize_with = "lenient::field")]
    pub share: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub milestones: Option<Vec<Milestone>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(default, deserialize_with = "lenient::field")]
    pub label: Option<String>,
    /// Free-form date as written by the assistant; not parsed.
    #[serde(default, deserialize_with = "lenient::field")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskGroups {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub groups: Option<Vec<RiskGroup>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskGroup {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub risks: Option<Vec<Risk>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub impact: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDigest {
    #[serde(default, deserialize_with = "lenient::field")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub valid_until: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleNote {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub body: Option<String>,
}

/// Text shown in place of a recognized payload that could not be decoded.
pub const INVALID_RESPONSE_NOTICE: &str = "Invalid formatted response";

/// Stand-in for a recognized payload whose body was unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidNotice {
    pub kind: PayloadKind,
    /// Always [`INVALID_RESPONSE_NOTICE`].
    pub message: &'static str,
    /// Diagnostic detail; not meant for end users.
    pub reason: String,
}

/// A structured value decoded from a fenced block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Payload {
    LexiconQuery(LexiconQuery),
    BudgetSummary(BudgetSummary),
    Timeline(Timeline),
    RiskGroups(RiskGroups),
    QuoteDigest(QuoteDigest),
    ExampleNote(ExampleNote),
    /// The fixed "invalid formatted response" notice.
    Invalid(InvalidNotice),
    /// Tag outside the table: the body is passed through verbatim. `render`
    /// presents it as `Rendered::Code`.
    Unrecognized { tag: Option<String>, code: String },
}

impl Payload {
    /// The table entry this payload was decoded for, if any.
    pub fn kind(&self) -> Option<PayloadKind> {
        match self {
            Payload::LexiconQuery(_) => Some(PayloadKind::LexiconQuery),
            Payload::BudgetSummary(_) => Some(PayloadKind::BudgetSummary),
            Payload::Timeline(_) => Some(PayloadKind::Timeline),
            Payload::RiskGroups(_) => Some(PayloadKind::RiskGroups),
            Payload::QuoteDigest(_) => Some(PayloadKind::QuoteDigest),
            Payload::ExampleNote(_) => Some(PayloadKind::ExampleNote),
            Payload::Invalid(notice) => Some(notice.kind),
            Payload::Unrecognized { .. } => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Payload::Invalid(_))
    }
}
