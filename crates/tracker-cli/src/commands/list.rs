use tracker_core::error::TrackerError;
use tracker_core::filter::{visible, FilterState, StatTile};
use tracker_core::model::{Category, Status};

use crate::output;
use crate::InputArgs;

pub fn run(
    input: InputArgs,
    search: Option<String>,
    status: Option<String>,
    category: Option<String>,
    source: Option<String>,
    stat: Option<String>,
    output_format: &str,
) -> Result<(), TrackerError> {
    let records = super::load(&input)?;

    let mut filters = FilterState::default();
    if let Some(name) = stat {
        let tile = StatTile::from_name(&name).ok_or_else(|| {
            TrackerError::InvalidArgument(format!(
                "unknown stat tile '{name}' (expected total, new, inProgress, handled, or wedding)"
            ))
        })?;
        filters.select_stat(tile);
    }
    if let Some(term) = search {
        filters.search = term;
    }
    if let Some(value) = status {
        filters.status = parse_all_or(&value, Status::from_canonical, "status")?;
    }
    if let Some(value) = category {
        filters.category = parse_all_or(&value, Category::from_canonical, "category")?;
    }
    if let Some(value) = source {
        filters.source = if value == "all" { None } else { Some(value) };
    }

    let shown = visible(&records, &filters);

    match output_format {
        "json" => output::json::print(&shown)?,
        _ => output::table::print_records(&shown),
    }

    Ok(())
}

/// Parse a filter value, treating "all" as the bypass.
fn parse_all_or<T>(
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> Result<Option<T>, TrackerError> {
    if value == "all" {
        return Ok(None);
    }
    parse(value)
        .map(Some)
        .ok_or_else(|| TrackerError::InvalidArgument(format!("unknown {what} '{value}'")))
}
