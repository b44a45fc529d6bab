use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling status of an inquiry. Always derived, never absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    New,
    InProgress,
    Handled,
}

impl Status {
    /// Canonical machine value ("new", "in-progress", "handled").
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in-progress",
            Status::Handled => "handled",
        }
    }

    /// Display label used when the source carried no status text of its own.
    pub fn label(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::Handled => "Handled",
        }
    }

    /// Parse an exact canonical value (not the loose heuristic — see
    /// [`crate::classify::normalize_status`] for that).
    pub fn from_canonical(s: &str) -> Option<Status> {
        match s {
            "new" => Some(Status::New),
            "in-progress" => Some(Status::InProgress),
            "handled" => Some(Status::Handled),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inquiry category. Derived from message text when the source has no
/// category column/field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wedding,
    Tour,
    Event,
    Vendor,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wedding => "wedding",
            Category::Tour => "tour",
            Category::Event => "event",
            Category::Vendor => "vendor",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Wedding => "Wedding",
            Category::Tour => "Tour",
            Category::Event => "Event",
            Category::Vendor => "Vendor",
            Category::Other => "Other",
        }
    }

    pub fn from_canonical(s: &str) -> Option<Category> {
        match s {
            "wedding" => Some(Category::Wedding),
            "tour" => Some(Category::Tour),
            "event" => Some(Category::Event),
            "vendor" => Some(Category::Vendor),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized client inquiry message.
///
/// Both ingestion paths (spreadsheet export and API payload) produce this
/// shape. `id` is always a string: numeric ids from API payloads are
/// stringified so the presentation layer can compare ids without caring
/// which source a record came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Raw date/time string as the source provided it. Parsed lazily for
    /// display only; never validated here.
    pub date_time: String,
    pub status: Status,
    /// Original free-text status label, or the canonical label when the
    /// source had none.
    pub status_label: String,
    pub category: Category,
    pub source: String,
    pub assigned_to: String,
    pub notes: String,
    /// The untransformed input row/object, kept for traceability. Never
    /// consulted by filtering.
    pub raw: serde_json::Value,
}

/// Fields collected for a new message before it exists at the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub date_time: String,
    pub category: Category,
    pub source: String,
    pub assigned_to: String,
    pub notes: String,
}
