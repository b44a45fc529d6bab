pub mod list;
pub mod stats;
pub mod write;

use std::path::PathBuf;

use tracker_core::error::TrackerError;
use tracker_core::model::MessageRecord;
use tracker_core::source::sheet::SheetSource;
use tracker_core::source::MessageSource;

use crate::http::HttpSource;
use crate::{InputArgs, API_URL_ENV};

/// Resolve the configured API endpoint, if any.
pub fn api_url(flag: Option<String>) -> Option<String> {
    flag.or_else(|| std::env::var(API_URL_ENV).ok()).filter(|u| !u.is_empty())
}

/// Load records from whichever input the user pointed at. A `.json` file
/// is treated as a saved API payload; anything else as a CSV export.
pub fn load(input: &InputArgs) -> Result<Vec<MessageRecord>, TrackerError> {
    if let Some(ref path) = input.sheet {
        return SheetSource::new(path).fetch();
    }
    if let Some(ref path) = input.input {
        return load_file(path);
    }
    match api_url(input.api_url.clone()) {
        Some(url) => HttpSource::new(url).fetch(),
        None => Err(TrackerError::InvalidArgument(format!(
            "no input given; pass --sheet, --input, or --api-url (or set {API_URL_ENV})"
        ))),
    }
}

fn load_file(path: &PathBuf) -> Result<Vec<MessageRecord>, TrackerError> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        tracker_core::load_api_json(&text)
    } else {
        Ok(tracker_core::load_sheet_text(&text))
    }
}
