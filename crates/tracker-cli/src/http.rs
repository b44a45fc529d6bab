//! HTTP collaborator for the REST-like message endpoint.
//!
//! Blocking client; one request per operation, no retry or cancellation.
//! A later fetch simply replaces whatever an earlier one produced.

use tracker_core::error::TrackerError;
use tracker_core::model::{MessageRecord, RecordDraft, Status};
use tracker_core::source::MessageSource;

pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpSource {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn check(
        response: Result<reqwest::blocking::Response, reqwest::Error>,
        op: &str,
    ) -> Result<reqwest::blocking::Response, TrackerError> {
        let response = response.map_err(|e| TrackerError::Write(format!("{op}: {e}")))?;
        response
            .error_for_status()
            .map_err(|e| TrackerError::Write(format!("{op}: {e}")))
    }
}

impl MessageSource for HttpSource {
    fn fetch(&self) -> Result<Vec<MessageRecord>, TrackerError> {
        let payload: serde_json::Value = self
            .client
            .get(&self.base_url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| TrackerError::Fetch(e.to_string()))?
            .json()
            .map_err(|e| TrackerError::Fetch(e.to_string()))?;
        tracker_core::load_api_payload(payload)
    }

    fn source_name(&self) -> &str {
        "api"
    }

    fn supports_write(&self) -> bool {
        true
    }

    fn create(&self, draft: &RecordDraft) -> Result<(), TrackerError> {
        Self::check(self.client.post(&self.base_url).json(draft).send(), "create")?;
        Ok(())
    }

    fn update_notes(&self, id: &str, notes: &str) -> Result<(), TrackerError> {
        let body = serde_json::json!({ "notes": notes });
        Self::check(
            self.client.patch(self.record_url(id)).json(&body).send(),
            "update notes",
        )?;
        Ok(())
    }

    fn update_status(&self, id: &str, status: Status) -> Result<(), TrackerError> {
        let body = serde_json::json!({ "status": status });
        Self::check(
            self.client.patch(self.record_url(id)).json(&body).send(),
            "update status",
        )?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), TrackerError> {
        Self::check(self.client.delete(self.record_url(id)).send(), "delete")?;
        Ok(())
    }
}
