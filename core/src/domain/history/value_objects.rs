use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::history::entities::HistoryEntry;

/// Number of entries returned by the "latest" listing.
pub const DEFAULT_LATEST_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct AppendHistoryInput {
    pub recipe_name: String,
    pub hist_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryStatus {
    Added,
    SkippedDuplicate,
    Ignored,
    PersistFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppendOutcome {
    pub status: HistoryStatus,
    pub entry: Option<HistoryEntry>,
}

impl AppendOutcome {
    pub fn added(entry: HistoryEntry) -> Self {
        Self {
            status: HistoryStatus::Added,
            entry: Some(entry),
        }
    }

    pub fn skipped_duplicate() -> Self {
        Self {
            status: HistoryStatus::SkippedDuplicate,
            entry: None,
        }
    }

    pub fn ignored() -> Self {
        Self {
            status: HistoryStatus::Ignored,
            entry: None,
        }
    }

    pub fn persist_failed(entry: HistoryEntry) -> Self {
        Self {
            status: HistoryStatus::PersistFailed,
            entry: Some(entry),
        }
    }
}
