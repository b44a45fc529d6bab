//! Normalizes REST-style JSON payloads into records.
//!
//! Payloads arrive either as a bare array or wrapped in an object under
//! one of a few known keys. Both shapes are modeled explicitly so the
//! accepted contract is visible in the types rather than probed at
//! runtime.

use serde::Deserialize;

use crate::classify::{derive_category, normalize_status};
use crate::model::{Category, MessageRecord};

/// The payload shapes the API collaborator is known to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload {
    /// A bare array of message objects.
    List(Vec<serde_json::Value>),
    /// An object wrapping the array under a known key.
    Wrapped(WrappedPayload),
}

/// Wrapper object; keys are checked in `messages`, `entries`, `data`
/// order. An object carrying none of them yields an empty set.
#[derive(Debug, Deserialize)]
pub struct WrappedPayload {
    #[serde(default)]
    messages: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    entries: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    data: Option<Vec<serde_json::Value>>,
}

impl ApiPayload {
    fn into_items(self) -> Vec<serde_json::Value> {
        match self {
            ApiPayload::List(items) => items,
            ApiPayload::Wrapped(w) => {
                w.messages.or(w.entries).or(w.data).unwrap_or_default()
            }
        }
    }
}

/// An id as the API sends it: either a string or a number. Normalized to
/// a string so ids from both ingestion paths compare with plain equality.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ApiId {
    Text(String),
    Number(serde_json::Number),
}

impl ApiId {
    fn into_string(self) -> String {
        match self {
            ApiId::Text(s) => s,
            ApiId::Number(n) => n.to_string(),
        }
    }
}

/// Typed adapter for a single payload element. Every field is optional;
/// missing fields never fail, they substitute defaults downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMessage {
    id: Option<ApiId>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    message: Option<String>,
    /// Fallback field name for the message body.
    inquiry: Option<String>,
    date_time: Option<String>,
    /// Fallback field name for the date/time.
    date: Option<String>,
    status: Option<String>,
    category: Option<String>,
    source: Option<String>,
    assigned_to: Option<String>,
    notes: Option<String>,
}

/// Normalize a decoded API payload. Unlike the spreadsheet path, no
/// blank-row filtering applies: every element becomes a record.
pub fn normalize_api_payload(payload: ApiPayload) -> Vec<MessageRecord> {
    payload
        .into_items()
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            // A non-object element still yields a record with defaults;
            // its raw value is retained either way.
            let msg: ApiMessage = serde_json::from_value(item.clone()).unwrap_or_default();

            let message = msg
                .message
                .filter(|m| !m.is_empty())
                .or(msg.inquiry)
                .unwrap_or_default();
            let status_value = msg.status.unwrap_or_default();
            let status = normalize_status(&status_value);
            let status_label = if status_value.is_empty() {
                status.label().to_string()
            } else {
                status_value
            };

            let category = match msg.category.filter(|c| !c.is_empty()) {
                Some(c) => Category::from_canonical(&c.to_lowercase())
                    .unwrap_or_else(|| derive_category(&message)),
                None => derive_category(&message),
            };

            MessageRecord {
                id: msg
                    .id
                    .map(ApiId::into_string)
                    .unwrap_or_else(|| (idx + 1).to_string()),
                name: msg.name.unwrap_or_default(),
                email: msg.email.unwrap_or_default(),
                phone: msg.phone.unwrap_or_default(),
                message,
                date_time: msg
                    .date_time
                    .filter(|d| !d.is_empty())
                    .or(msg.date)
                    .unwrap_or_default(),
                status,
                status_label,
                category,
                source: msg.source.unwrap_or_default(),
                assigned_to: msg.assigned_to.unwrap_or_default(),
                notes: msg.notes.unwrap_or_default(),
                raw: item,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn load(json: &str) -> Vec<MessageRecord> {
        let payload: ApiPayload = serde_json::from_str(json).unwrap();
        normalize_api_payload(payload)
    }

    #[test]
    fn test_bare_array() {
        let records = load(r#"[{"name":"Jane","message":"hi"}]"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane");
    }

    #[test]
    fn test_wrapped_shapes() {
        for key in ["messages", "entries", "data"] {
            let records = load(&format!(r#"{{"{key}":[{{"name":"Jane"}}]}}"#));
            assert_eq!(records.len(), 1, "key {key}");
        }
    }

    #[test]
    fn test_wrapper_key_priority() {
        let records = load(r#"{"data":[{"name":"B"}],"messages":[{"name":"A"}]}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
    }

    #[test]
    fn test_wrapper_without_known_key_is_empty() {
        assert!(load(r#"{"items":[{"name":"Jane"}]}"#).is_empty());
    }

    #[test]
    fn test_numeric_id_stringified() {
        let records = load(r#"[{"id":42,"name":"Jane"}]"#);
        assert_eq!(records[0].id, "42");
    }

    #[test]
    fn test_missing_id_is_positional() {
        let records = load(r#"[{"name":"A"},{"name":"B"}]"#);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_inquiry_and_date_fallbacks() {
        let records = load(r#"[{"inquiry":"venue tour please","date":"2024-05-01"}]"#);
        let r = &records[0];
        assert_eq!(r.message, "venue tour please");
        assert_eq!(r.date_time, "2024-05-01");
        assert_eq!(r.category, Category::Tour);
    }

    #[test]
    fn test_no_blank_filtering() {
        let records = load(r#"{"data":[{"name":"","email":"","phone":"","message":""}]}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::New);
        assert_eq!(records[0].category, Category::Other);
    }

    #[test]
    fn test_status_normalized_label_retained() {
        let records = load(r#"[{"status":"Working on it"}]"#);
        assert_eq!(records[0].status, Status::InProgress);
        assert_eq!(records[0].status_label, "Working on it");
    }

    #[test]
    fn test_raw_retains_original_object() {
        let records = load(r#"[{"name":"Jane","extra":"kept"}]"#);
        assert_eq!(records[0].raw["extra"], "kept");
    }

    #[test]
    fn test_explicit_category_lowercased() {
        let records = load(r#"[{"category":"Vendor","message":"wedding stuff"}]"#);
        assert_eq!(records[0].category, Category::Vendor);
    }
}
