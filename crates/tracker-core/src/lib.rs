pub mod classify;
pub mod error;
pub mod filter;
pub mod model;
pub mod parsing;
pub mod source;
pub mod state;

pub use error::TrackerError;

use model::MessageRecord;
use parsing::api::{normalize_api_payload, ApiPayload};

/// Normalize a raw spreadsheet export (CSV text) into records.
///
/// Infallible by contract: malformed input degrades to fewer or odd
/// records, never an error.
pub fn load_sheet_text(text: &str) -> Vec<MessageRecord> {
    parsing::parse_sheet(text)
}

/// Normalize an API payload from its JSON text. Accepts a bare array or
/// an object wrapping the array under `messages`, `entries`, or `data`.
pub fn load_api_json(text: &str) -> Result<Vec<MessageRecord>, TrackerError> {
    let payload: ApiPayload = serde_json::from_str(text)?;
    Ok(normalize_api_payload(payload))
}

/// Normalize an already-decoded API payload value.
pub fn load_api_payload(value: serde_json::Value) -> Result<Vec<MessageRecord>, TrackerError> {
    let payload: ApiPayload = serde_json::from_value(value)?;
    Ok(normalize_api_payload(payload))
}
