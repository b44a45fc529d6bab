//! Text heuristics that map free-text source values onto the closed
//! status/category enumerations. Pure and stateless; keyword priority
//! order is load-bearing and must not be reordered.

use crate::model::{Category, Status};

/// Map a free-text status value to a canonical [`Status`].
///
/// Empty or whitespace-only input means the inquiry was never triaged,
/// so it comes back as `New`. "handled"-family keywords take precedence
/// over "in-progress"-family keywords.
pub fn normalize_status(value: &str) -> Status {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return Status::New;
    }
    if ["handled", "complete", "closed"].iter().any(|k| lower.contains(k)) {
        return Status::Handled;
    }
    if ["progress", "working", "pending"].iter().any(|k| lower.contains(k)) {
        return Status::InProgress;
    }
    Status::New
}

/// Guess a [`Category`] from the inquiry message body.
///
/// First matching category wins; a message mentioning both a wedding and
/// a tour is a wedding lead.
pub fn derive_category(message: &str) -> Category {
    let lower = message.to_lowercase();
    if ["wedding", "bride"].iter().any(|k| lower.contains(k)) {
        return Category::Wedding;
    }
    if ["tour", "visit"].iter().any(|k| lower.contains(k)) {
        return Category::Tour;
    }
    if ["event", "party", "dinner"].iter().any(|k| lower.contains(k)) {
        return Category::Event;
    }
    if ["vendor", "catering", "staffing"].iter().any(|k| lower.contains(k)) {
        return Category::Vendor;
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_is_new() {
        assert_eq!(normalize_status(""), Status::New);
        assert_eq!(normalize_status("   "), Status::New);
    }

    #[test]
    fn test_status_keywords() {
        assert_eq!(normalize_status("Completed"), Status::Handled);
        assert_eq!(normalize_status("closed out"), Status::Handled);
        assert_eq!(normalize_status("In Progress"), Status::InProgress);
        assert_eq!(normalize_status("still working on it"), Status::InProgress);
        assert_eq!(normalize_status("pending reply"), Status::InProgress);
    }

    #[test]
    fn test_unknown_status_is_new() {
        assert_eq!(normalize_status("xyz"), Status::New);
    }

    #[test]
    fn test_handled_wins_over_in_progress() {
        // A label satisfying both families resolves to Handled.
        assert_eq!(normalize_status("complete, pending archive"), Status::Handled);
    }

    #[test]
    fn test_category_priority_order() {
        assert_eq!(
            derive_category("We'd love a tour of the venue for our wedding"),
            Category::Wedding
        );
        assert_eq!(derive_category("can we visit next week?"), Category::Tour);
        assert_eq!(derive_category("corporate dinner for 40"), Category::Event);
        assert_eq!(derive_category("catering partnership inquiry"), Category::Vendor);
        assert_eq!(derive_category("hello"), Category::Other);
    }

    #[test]
    fn test_category_case_insensitive() {
        assert_eq!(derive_category("BRIDE and groom"), Category::Wedding);
    }
}
