//! Pure, synchronous filtering and aggregation over the in-memory record
//! set. Every filter change re-scans the full set; there is no index.

use serde::{Deserialize, Serialize};

use crate::model::{Category, MessageRecord, Status};

/// Summary tiles that act as single-click quick filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatTile {
    #[default]
    Total,
    New,
    InProgress,
    Handled,
    Wedding,
}

impl StatTile {
    pub fn from_name(s: &str) -> Option<StatTile> {
        match s {
            "total" => Some(StatTile::Total),
            "new" => Some(StatTile::New),
            "inProgress" | "in-progress" => Some(StatTile::InProgress),
            "handled" => Some(StatTile::Handled),
            "wedding" => Some(StatTile::Wedding),
            _ => None,
        }
    }
}

/// Active filter criteria. `None` on status/category/source means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub status: Option<Status>,
    pub category: Option<Category>,
    pub source: Option<String>,
    pub stat: StatTile,
}

impl FilterState {
    /// Apply a click on a summary tile.
    ///
    /// Stat filters are mutually exclusive, last-click-wins; clicking the
    /// active tile again toggles back to `Total`. `Total` clears every
    /// filter, including search and source.
    pub fn select_stat(&mut self, tile: StatTile) {
        let tile = if self.stat == tile { StatTile::Total } else { tile };
        self.stat = tile;
        self.status = None;
        self.category = None;
        match tile {
            StatTile::Total => {
                self.search.clear();
                self.source = None;
            }
            StatTile::New => self.status = Some(Status::New),
            StatTile::InProgress => self.status = Some(Status::InProgress),
            StatTile::Handled => self.status = Some(Status::Handled),
            StatTile::Wedding => self.category = Some(Category::Wedding),
        }
    }

    fn matches(&self, record: &MessageRecord) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() {
            let haystack = format!(
                "{} {} {} {} {}",
                record.name, record.message, record.phone, record.email, record.notes
            )
            .to_lowercase();
            if !haystack.contains(&term) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }
        if let Some(ref source) = self.source {
            if record.source != *source {
                return false;
            }
        }
        true
    }
}

/// Compute the visible subset for the current filter state.
pub fn visible<'a>(records: &'a [MessageRecord], filters: &FilterState) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| filters.matches(r)).collect()
}

/// Aggregate counts shown on the summary tiles. Always computed over the
/// unfiltered full set, independent of the applied filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub handled: usize,
    pub wedding: usize,
}

pub fn stats(records: &[MessageRecord]) -> Stats {
    let mut s = Stats {
        total: records.len(),
        ..Stats::default()
    };
    for r in records {
        match r.status {
            Status::New => s.new += 1,
            Status::InProgress => s.in_progress += 1,
            Status::Handled => s.handled += 1,
        }
        if r.category == Category::Wedding {
            s.wedding += 1;
        }
    }
    s
}

/// Distinct non-empty source values, in first-seen order. Feeds the
/// source filter choices.
pub fn unique_sources(records: &[MessageRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !r.source.is_empty() && !out.contains(&r.source) {
            out.push(r.source.clone());
        }
    }
    out
}
