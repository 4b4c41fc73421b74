//! Wire and view-log data model for the chat exchange.
//!
//! Reply envelopes are decoded leniently: every field is optional with a
//! default, and unrecognized fields land in a flattened map so future reply
//! kinds are tolerated instead of failing deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown when a turn cannot produce a real reply (transport failure, or a
/// well-formed response with no usable `reply`).
pub const REPLY_FALLBACK_TEXT: &str = "Sorry, I had trouble generating a reply just now.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the view log. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// Structured reply from the assistant endpoint, tagged by `type`.
///
/// Exactly one of `content` or `items` is meaningful depending on the kind;
/// `preface`, when present, is rendered as a leading note regardless of kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preface: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Value>,

    // Anything the server adds later survives a round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReplyEnvelope {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: Some("text".to_string()),
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

/// A property listing card, as carried inside a `"cards"` envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub price_lkr: Option<f64>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ListingItem {
    /// Lenient decode; an unusable item degrades to defaults rather than
    /// failing the whole envelope.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// An investment plan card, as carried inside an `"investments"` envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub yield_pct: Option<f64>,
    #[serde(default)]
    pub roi_pct: Option<f64>,
    #[serde(default)]
    pub min_investment_lkr: Option<f64>,
}

impl InvestmentItem {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Request body for the assistant endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: &'a str,
}

/// Raw response body from the assistant endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatApiResponse {
    #[serde(default)]
    pub reply: Option<ReplyEnvelope>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// A decoded round trip: the reply to render plus an optional server-assigned
/// session id the client should adopt.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatExchange {
    pub reply: ReplyEnvelope,
    pub session_id: Option<String>,
}

impl ChatExchange {
    /// Lenient mapping of a parsed response body. A well-formed body with no
    /// usable `reply` is not an error; the fixed apology envelope stands in.
    pub fn from_api(payload: ChatApiResponse) -> Self {
        Self {
            reply: payload
                .reply
                .unwrap_or_else(|| ReplyEnvelope::text(REPLY_FALLBACK_TEXT)),
            session_id: payload.session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_unknown_fields_and_kinds() {
        let raw = r#"{"type":"hologram","content":"soon","shimmer":true}"#;
        let envelope: ReplyEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.kind.as_deref(), Some("hologram"));
        assert_eq!(envelope.content.as_deref(), Some("soon"));
        assert_eq!(envelope.extra.get("shimmer"), Some(&Value::Bool(true)));
    }

    #[test]
    fn envelope_with_nothing_set_still_parses() {
        let envelope: ReplyEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.kind, None);
        assert!(envelope.items.is_empty());
    }

    #[test]
    fn listing_item_decodes_leniently() {
        let value = serde_json::json!({"title": "Flat A", "price_lkr": 50000000, "floor": 12});
        let item = ListingItem::from_value(&value);
        assert_eq!(item.title, "Flat A");
        assert_eq!(item.price_lkr, Some(50_000_000.0));

        // A non-object item degrades to defaults instead of erroring.
        let junk = ListingItem::from_value(&Value::String("?".into()));
        assert_eq!(junk, ListingItem::default());
    }

    #[test]
    fn missing_reply_becomes_the_apology_envelope() {
        let payload: ChatApiResponse =
            serde_json::from_str(r#"{"session_id":"abc123"}"#).unwrap();
        let exchange = ChatExchange::from_api(payload);
        assert_eq!(exchange.reply.content.as_deref(), Some(REPLY_FALLBACK_TEXT));
        assert_eq!(exchange.session_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn request_serializes_with_wire_names() {
        let body = ChatRequest {
            message: "hi",
            session_id: "s1",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"hi","session_id":"s1"}"#);
    }
}
