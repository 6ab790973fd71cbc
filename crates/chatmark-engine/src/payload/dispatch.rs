use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    kind::PayloadKind,
    types::{INVALID_RESPONSE_NOTICE, InvalidNotice, Payload},
};

/// Why a recognized payload body could not be used.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("body is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Maps a fenced block to a payload.
///
/// Tags outside the table (or no tag at all) fall through to
/// [`Payload::Unrecognized`] with the body untouched.
pub fn dispatch(tag: Option<&str>, body: &str) -> Payload {
    match tag.and_then(PayloadKind::from_tag) {
        Some(kind) => dispatch_kind(kind, body),
        None => Payload::Unrecognized {
            tag: tag.map(str::to_string),
            code: body.to_string(),
        },
    }
}

/// Decodes a body for a known kind. Never fails: an unusable body becomes the
/// invalid-response notice.
pub fn dispatch_kind(kind: PayloadKind, body: &str) -> Payload {
    decode(kind, body).unwrap_or_else(|e| {
        log::debug!("invalid {} payload: {e}", kind.tag());
        Payload::Invalid(InvalidNotice {
            kind,
            message: INVALID_RESPONSE_NOTICE,
            reason: e.to_string(),
        })
    })
}

/// Strict half of the dispatcher: JSON syntax and top-level shape errors are
/// reported, field-level mismatches are not.
pub fn decode(kind: PayloadKind, body: &str) -> Result<Payload, PayloadError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(PayloadError::NotAnObject(json_type_name(&value)));
    }

    Ok(match kind {
        PayloadKind::LexiconQuery => Payload::LexiconQuery(shape(value)?),
        PayloadKind::BudgetSummary => Payload::BudgetSummary(shape(value)?),
        PayloadKind::Timeline => Payload::Timeline(shape(value)?),
        PayloadKind::RiskGroups => Payload::RiskGroups(shape(value)?),
        PayloadKind::QuoteDigest => Payload::QuoteDigest(shape(value)?),
        PayloadKind::ExampleNote => Payload::ExampleNote(shape(value)?),
    })
}

fn shape<T: DeserializeOwned>(value: Value) -> Result<T, PayloadError> {
    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
