//! Application state for a presentation layer: the loaded record set,
//! active filters, selection, and per-operation in-flight flags.
//!
//! Single-threaded by design. Writes are serialized per record through
//! the in-flight flags; there is no queuing, retry, or merge logic. A
//! failed operation surfaces its error and leaves prior state unchanged.

use crate::filter::{self, FilterState, Stats};
use crate::model::{MessageRecord, Status};
use crate::TrackerError;

#[derive(Debug, Default)]
pub struct TrackerState {
    pub records: Vec<MessageRecord>,
    pub filters: FilterState,
    /// Id of the record expanded for detail view, if any.
    pub selected: Option<String>,
    pub loading: bool,
    /// Last surfaced error message, cleared by the next successful fetch.
    pub error: Option<String>,
    pub creating: bool,
    /// Id of the record whose notes are currently being saved.
    pub saving_note: Option<String>,
    /// Id of the record currently being deleted.
    pub deleting: Option<String>,
}

impl TrackerState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Resolve a fetch. Success replaces the record set in one assignment
    /// (a refresh never merges with the previous set); failure keeps the
    /// previously loaded records intact and records the error.
    pub fn finish_fetch(&mut self, result: Result<Vec<MessageRecord>, TrackerError>) {
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Returns the visible subset for the current filters.
    pub fn visible(&self) -> Vec<&MessageRecord> {
        filter::visible(&self.records, &self.filters)
    }

    /// Aggregate tile counts over the unfiltered set.
    pub fn stats(&self) -> Stats {
        filter::stats(&self.records)
    }

    /// Expand a record for detail view, or collapse it if already shown.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// Mark a delete as in flight. Returns false when one is already
    /// running, so duplicate submissions are dropped.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id.to_string());
        true
    }

    /// Resolve a delete. The in-flight flag is cleared on both outcomes
    /// so the control is never left permanently disabled.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), TrackerError>) {
        self.deleting = None;
        match result {
            Ok(()) => {
                self.records.retain(|r| r.id != id);
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn begin_save_notes(&mut self, id: &str) -> bool {
        if self.saving_note.is_some() {
            return false;
        }
        self.saving_note = Some(id.to_string());
        true
    }

    pub fn finish_save_notes(&mut self, id: &str, notes: &str, result: Result<(), TrackerError>) {
        self.saving_note = None;
        match result {
            Ok(()) => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
                    record.notes = notes.to_string();
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn begin_create(&mut self) -> bool {
        if self.creating {
            return false;
        }
        self.creating = true;
        true
    }

    pub fn finish_create(&mut self, result: Result<(), TrackerError>) {
        self.creating = false;
        if let Err(e) = result {
            self.error = Some(e.to_string());
        }
        // On success the caller refetches; the set is rebuilt fresh rather
        // than patched incrementally.
    }

    /// Apply a confirmed status change to the local set.
    pub fn apply_status(&mut self, id: &str, status: Status) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.status = status;
            record.status_label = status.label().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn record(id: &str) -> MessageRecord {
        MessageRecord {
            id: id.to_string(),
            name: format!("client {id}"),
            email: String::new(),
            phone: String::new(),
            message: "hello".to_string(),
            date_time: String::new(),
            status: Status::New,
            status_label: "New".to_string(),
            category: Category::Other,
            source: String::new(),
            assigned_to: String::new(),
            notes: String::new(),
            raw: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_failed_fetch_keeps_previous_records() {
        let mut state = TrackerState::default();
        state.finish_fetch(Ok(vec![record("1"), record("2")]));
        assert_eq!(state.records.len(), 2);

        state.finish_fetch(Err(TrackerError::Fetch("timeout".into())));
        assert_eq!(state.records.len(), 2);
        assert!(state.error.as_deref().unwrap().contains("timeout"));
    }

    #[test]
    fn test_successful_fetch_replaces_set_and_clears_error() {
        let mut state = TrackerState::default();
        state.finish_fetch(Err(TrackerError::Fetch("boom".into())));
        state.finish_fetch(Ok(vec![record("1")]));
        assert_eq!(state.records.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_duplicate_delete_submission_is_dropped() {
        let mut state = TrackerState::default();
        state.finish_fetch(Ok(vec![record("1"), record("2")]));
        assert!(state.begin_delete("1"));
        assert!(!state.begin_delete("2"));
    }

    #[test]
    fn test_delete_flag_cleared_even_on_failure() {
        let mut state = TrackerState::default();
        state.finish_fetch(Ok(vec![record("1")]));
        state.begin_delete("1");
        state.finish_delete("1", Err(TrackerError::Write("500".into())));
        assert!(state.deleting.is_none());
        assert_eq!(state.records.len(), 1);
        assert!(state.begin_delete("1"));
    }

    #[test]
    fn test_delete_removes_record_and_selection() {
        let mut state = TrackerState::default();
        state.finish_fetch(Ok(vec![record("1"), record("2")]));
        state.toggle_selected("1");
        state.begin_delete("1");
        state.finish_delete("1", Ok(()));
        assert_eq!(state.records.len(), 1);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_save_notes_applies_only_on_success() {
        let mut state = TrackerState::default();
        state.finish_fetch(Ok(vec![record("1")]));

        state.begin_save_notes("1");
        state.finish_save_notes("1", "call back", Err(TrackerError::Write("500".into())));
        assert_eq!(state.records[0].notes, "");
        assert!(state.saving_note.is_none());

        state.begin_save_notes("1");
        state.finish_save_notes("1", "call back", Ok(()));
        assert_eq!(state.records[0].notes, "call back");
    }

    #[test]
    fn test_toggle_selected() {
        let mut state = TrackerState::default();
        state.toggle_selected("1");
        assert_eq!(state.selected.as_deref(), Some("1"));
        state.toggle_selected("1");
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_apply_status_updates_label() {
        let mut state = TrackerState::default();
        state.finish_fetch(Ok(vec![record("1")]));
        state.apply_status("1", Status::Handled);
        assert_eq!(state.records[0].status, Status::Handled);
        assert_eq!(state.records[0].status_label, "Handled");
    }
}
