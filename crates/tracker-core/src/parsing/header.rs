//! Maps arbitrary spreadsheet column headers onto canonical record fields.

/// Canonical field keys a spreadsheet column can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalKey {
    Id,
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
    DateTime,
    Status,
    Category,
    Source,
    AssignedTo,
    InternalNotes,
}

/// Accepted header spellings per canonical key. Matching is exact (after
/// trim + lowercase), not fuzzy; no alias may appear under two keys.
const HEADER_ALIASES: &[(CanonicalKey, &[&str])] = &[
    (CanonicalKey::Id, &["id", "message id", "entry id"]),
    (CanonicalKey::Name, &["name", "client", "full name", "client name"]),
    (CanonicalKey::FirstName, &["first name", "firstname"]),
    (CanonicalKey::LastName, &["last name", "lastname"]),
    (CanonicalKey::Email, &["email", "email address"]),
    (CanonicalKey::Phone, &["phone", "phone number", "mobile"]),
    (
        CanonicalKey::Message,
        &["message", "inquiry", "details", "client message", "notes", "summary"],
    ),
    (
        CanonicalKey::DateTime,
        &["date", "date/time", "timestamp", "created", "submitted", "time"],
    ),
    (CanonicalKey::Status, &["status", "state"]),
    (CanonicalKey::Category, &["category", "type", "inquiry type"]),
    (CanonicalKey::Source, &["source", "channel", "lead source"]),
    (CanonicalKey::AssignedTo, &["assigned", "owner", "handled by"]),
    (
        CanonicalKey::InternalNotes,
        &["internal notes", "staff notes", "team notes", "admin notes"],
    ),
];

/// Resolve a raw column header to a canonical key, or `None` if the
/// header is not a recognized spelling. First key whose alias list
/// contains the normalized header wins.
pub fn match_header(header: &str) -> Option<CanonicalKey> {
    let normalized = header.trim().to_lowercase();
    HEADER_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&normalized.as_str()))
        .map(|(key, _)| *key)
}
