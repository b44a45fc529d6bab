use std::path::PathBuf;

use crate::error::TrackerError;
use crate::model::MessageRecord;
use crate::parsing::parse_sheet;
use crate::source::MessageSource;

/// Read-only source backed by a spreadsheet export on disk.
pub struct SheetSource {
    path: PathBuf,
}

impl SheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SheetSource { path: path.into() }
    }
}

impl MessageSource for SheetSource {
    fn fetch(&self) -> Result<Vec<MessageRecord>, TrackerError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| TrackerError::SheetLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(parse_sheet(&text))
    }

    fn source_name(&self) -> &str {
        "sheet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_surfaces_path() {
        let source = SheetSource::new("/nonexistent/export.csv");
        let err = source.fetch().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/export.csv"));
    }

    #[test]
    fn test_read_only_defaults() {
        let source = SheetSource::new("export.csv");
        assert!(!source.supports_write());
        assert!(matches!(source.delete("1"), Err(TrackerError::ReadOnly)));
    }
}
