use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::HistoryEntry,
        value_objects::{AppendHistoryInput, AppendOutcome},
    },
};

/// Backing storage for the history list, most recent entry first
#[cfg_attr(test, mockall::automock)]
pub trait HistoryStore: Send + Sync + 'static {
    fn load(&self) -> Result<Vec<HistoryEntry>, CoreError>;

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), CoreError>;
}

/// Service trait for recording and listing user interactions
pub trait HistoryService: Send + Sync {
    fn append_history(
        &self,
        input: AppendHistoryInput,
    ) -> impl Future<Output = AppendOutcome> + Send;

    fn latest_history(&self, count: usize) -> impl Future<Output = Vec<HistoryEntry>> + Send;

    fn all_history(&self) -> impl Future<Output = Vec<HistoryEntry>> + Send;
}
