pub mod sheet;

use crate::error::TrackerError;
use crate::model::{MessageRecord, RecordDraft, Status};

/// Seam between the engine and whatever provides/accepts message data.
///
/// Fetch is the only operation every source supports. Write operations
/// default to read-only behavior; a source that can write overrides
/// `supports_write` together with the operations it implements.
pub trait MessageSource {
    /// Load the full record set. Each fetch rebuilds the set from
    /// scratch; there is no incremental update.
    fn fetch(&self) -> Result<Vec<MessageRecord>, TrackerError>;

    /// Short backend name for diagnostics.
    fn source_name(&self) -> &str;

    fn supports_write(&self) -> bool {
        false
    }

    fn create(&self, _draft: &RecordDraft) -> Result<(), TrackerError> {
        Err(TrackerError::ReadOnly)
    }

    fn update_notes(&self, _id: &str, _notes: &str) -> Result<(), TrackerError> {
        Err(TrackerError::ReadOnly)
    }

    fn update_status(&self, _id: &str, _status: Status) -> Result<(), TrackerError> {
        Err(TrackerError::ReadOnly)
    }

    fn delete(&self, _id: &str) -> Result<(), TrackerError> {
        Err(TrackerError::ReadOnly)
    }
}
