//! Write operations against the API endpoint. All of them require a
//! configured endpoint; without one the tracker is read-only.

use tracker_core::error::TrackerError;
use tracker_core::model::{Category, RecordDraft, Status};
use tracker_core::source::MessageSource;

use crate::http::HttpSource;

fn writable_source(api_url: Option<String>) -> Result<HttpSource, TrackerError> {
    match super::api_url(api_url) {
        Some(url) => Ok(HttpSource::new(url)),
        None => Err(TrackerError::ReadOnly),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    api_url: Option<String>,
    name: String,
    email: String,
    phone: String,
    message: String,
    date_time: String,
    category: String,
    source: String,
    assigned_to: String,
    notes: String,
) -> Result<(), TrackerError> {
    let endpoint = writable_source(api_url)?;
    let category = Category::from_canonical(&category.to_lowercase())
        .ok_or_else(|| TrackerError::InvalidArgument(format!("unknown category '{category}'")))?;
    let draft = RecordDraft {
        name,
        email,
        phone,
        message,
        date_time,
        category,
        source,
        assigned_to,
        notes,
    };
    endpoint.create(&draft)?;
    eprintln!("Message created");
    Ok(())
}

pub fn note(api_url: Option<String>, id: &str, notes: &str) -> Result<(), TrackerError> {
    let endpoint = writable_source(api_url)?;
    endpoint.update_notes(id, notes)?;
    eprintln!("Notes saved for {id}");
    Ok(())
}

pub fn mark(api_url: Option<String>, id: &str, status: &str) -> Result<(), TrackerError> {
    let endpoint = writable_source(api_url)?;
    let status = Status::from_canonical(status)
        .ok_or_else(|| TrackerError::InvalidArgument(format!("unknown status '{status}'")))?;
    endpoint.update_status(id, status)?;
    eprintln!("Marked {id} as {status}");
    Ok(())
}

pub fn delete(api_url: Option<String>, id: &str) -> Result<(), TrackerError> {
    let endpoint = writable_source(api_url)?;
    endpoint.delete(id)?;
    eprintln!("Deleted {id}");
    Ok(())
}
