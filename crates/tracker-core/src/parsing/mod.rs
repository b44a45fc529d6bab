pub mod api;
pub mod csv;
pub mod header;

use crate::classify::{derive_category, normalize_status};
use crate::model::{Category, MessageRecord};
use csv::parse_csv;
use header::{match_header, CanonicalKey};

/// Parse a raw spreadsheet export into normalized records.
///
/// The first row is treated as headers; every later row becomes a record
/// unless it is structurally blank (no message, name, email, or phone).
pub fn parse_sheet(text: &str) -> Vec<MessageRecord> {
    map_sheet_rows(&parse_csv(text))
}

/// Normalize tokenized CSV rows (first row = headers) into records.
pub fn map_sheet_rows(rows: &[Vec<String>]) -> Vec<MessageRecord> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_row.iter().map(|h| h.trim().to_string()).collect();
    let header_keys: Vec<Option<CanonicalKey>> =
        headers.iter().map(|h| match_header(h)).collect();

    let get_value = |row: &[String], key: CanonicalKey| -> String {
        header_keys
            .iter()
            .position(|k| *k == Some(key))
            .and_then(|col| row.get(col))
            .cloned()
            .unwrap_or_default()
    };

    data_rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            // Raw bag keyed by the original header text, for traceability.
            let mut raw = serde_json::Map::new();
            for (col, h) in headers.iter().enumerate() {
                let value = row.get(col).cloned().unwrap_or_default();
                raw.insert(h.clone(), serde_json::Value::String(value));
            }

            let first_name = get_value(row, CanonicalKey::FirstName);
            let last_name = get_value(row, CanonicalKey::LastName);
            let direct_name = get_value(row, CanonicalKey::Name);
            let name = if direct_name.is_empty() {
                [first_name, last_name]
                    .into_iter()
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                direct_name
            };

            let message = get_value(row, CanonicalKey::Message);
            let status_value = get_value(row, CanonicalKey::Status);
            let status = normalize_status(&status_value);
            let status_label = if status_value.is_empty() {
                status.label().to_string()
            } else {
                status_value
            };

            let category_value = get_value(row, CanonicalKey::Category);
            let category = if category_value.is_empty() {
                derive_category(&message)
            } else {
                Category::from_canonical(&category_value.to_lowercase())
                    .unwrap_or_else(|| derive_category(&message))
            };

            let id_value = get_value(row, CanonicalKey::Id);
            let id = if id_value.is_empty() {
                (idx + 1).to_string()
            } else {
                id_value
            };

            MessageRecord {
                id,
                name,
                email: get_value(row, CanonicalKey::Email),
                phone: get_value(row, CanonicalKey::Phone),
                message,
                date_time: get_value(row, CanonicalKey::DateTime),
                status,
                status_label,
                category,
                source: get_value(row, CanonicalKey::Source),
                assigned_to: get_value(row, CanonicalKey::AssignedTo),
                notes: get_value(row, CanonicalKey::InternalNotes),
                raw: serde_json::Value::Object(raw),
            }
        })
        .filter(|r| {
            !(r.message.is_empty() && r.name.is_empty() && r.email.is_empty() && r.phone.is_empty())
        })
        .collect()
}
