use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::ports::ObjectDetector,
    generation::ports::LLMClient,
    history::{
        entities::{HistoryEntry, HistoryType},
        ports::{HistoryService, HistoryStore},
        value_objects::{AppendHistoryInput, AppendOutcome},
    },
};

/// Bounded, most-recent-first log of user interactions.
///
/// The list is read from the store once, then served from memory. Appends hold
/// the write lock across the whole check, insert, truncate and persist
/// sequence so concurrent appends cannot lose each other's entries.
pub struct HistoryLog<H: HistoryStore> {
    store: Arc<H>,
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
    capacity: usize,
}

impl<H: HistoryStore> Clone for HistoryLog<H> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            entries: Arc::clone(&self.entries),
            capacity: self.capacity,
        }
    }
}

impl<H: HistoryStore> HistoryLog<H> {
    pub fn new(store: H, capacity: usize) -> Self {
        let entries = store.load().unwrap_or_else(|e| {
            warn!("Starting with empty history: {}", e);
            Vec::new()
        });

        Self {
            store: Arc::new(store),
            entries: Arc::new(RwLock::new(entries)),
            capacity: capacity.max(1),
        }
    }

    pub async fn append(&self, input: AppendHistoryInput) -> AppendOutcome {
        let recipe_name = input.recipe_name.trim();
        if recipe_name.is_empty() {
            return AppendOutcome::ignored();
        }
        let kind = HistoryType::parse_lenient(&input.hist_type);

        let mut entries = self.entries.write().await;

        if entries
            .first()
            .is_some_and(|latest| latest.same_interaction(recipe_name, kind))
        {
            return AppendOutcome::skipped_duplicate();
        }

        let entry = HistoryEntry::new(recipe_name.to_string(), kind);

        let mut updated = Vec::with_capacity(self.capacity);
        updated.push(entry.clone());
        updated.extend(entries.iter().take(self.capacity - 1).cloned());

        match self.persist(updated.clone()).await {
            Ok(()) => {
                *entries = updated;
                info!(recipe_name = %entry.recipe_name, kind = ?entry.kind, "History entry added");
                AppendOutcome::added(entry)
            }
            Err(e) => {
                warn!(recipe_name = %entry.recipe_name, "Failed to persist history: {}", e);
                AppendOutcome::persist_failed(entry)
            }
        }
    }

    /// Writes off the async workers; callers keep holding the write lock.
    async fn persist(&self, entries: Vec<HistoryEntry>) -> Result<(), CoreError> {
        let store = Arc::clone(&self.store);

        tokio::task::spawn_blocking(move || store.save(&entries))
            .await
            .map_err(|e| CoreError::HistoryStorage(format!("history save task failed: {}", e)))?
    }

    pub async fn latest(&self, count: usize) -> Vec<HistoryEntry> {
        let entries = self.entries.read().await;
        entries.iter().take(count).cloned().collect()
    }

    pub async fn all(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.clone()
    }
}

impl<D, LLM, H> HistoryService for Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    #[instrument(skip(self))]
    async fn append_history(&self, input: AppendHistoryInput) -> AppendOutcome {
        self.history.append(input).await
    }

    async fn latest_history(&self, count: usize) -> Vec<HistoryEntry> {
        self.history.latest(count).await
    }

    async fn all_history(&self) -> Vec<HistoryEntry> {
        self.history.all().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::history::{ports::MockHistoryStore, value_objects::HistoryStatus};

    fn input(recipe_name: &str, hist_type: &str) -> AppendHistoryInput {
        AppendHistoryInput {
            recipe_name: recipe_name.to_string(),
            hist_type: hist_type.to_string(),
        }
    }

    /// Mock store starting empty that records every saved list.
    fn recording_store() -> (MockHistoryStore, Arc<Mutex<Vec<Vec<HistoryEntry>>>>) {
        let saves = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&saves);

        let mut store = MockHistoryStore::new();
        store.expect_load().times(1).returning(|| Ok(Vec::new()));
        store.expect_save().returning(move |entries| {
            recorded.lock().unwrap().push(entries.to_vec());
            Ok(())
        });

        (store, saves)
    }

    fn names(entries: &[HistoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.recipe_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_consecutive_duplicate_is_skipped() {
        let (store, saves) = recording_store();
        let log = HistoryLog::new(store, 20);

        let first = log.append(input("Pho", "search")).await;
        let second = log.append(input("Pho", "search")).await;

        assert_eq!(first.status, HistoryStatus::Added);
        assert_eq!(second.status, HistoryStatus::SkippedDuplicate);
        assert!(second.entry.is_none());
        assert_eq!(log.all().await.len(), 1);
        assert_eq!(saves.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_adjacent_duplicates_are_kept() {
        let (store, _) = recording_store();
        let log = HistoryLog::new(store, 20);

        log.append(input("Pho", "search")).await;
        log.append(input("Bun", "search")).await;
        log.append(input("Pho", "search")).await;

        assert_eq!(names(&log.all().await), vec!["Pho", "Bun", "Pho"]);
    }

    #[tokio::test]
    async fn test_same_name_different_type_is_not_a_duplicate() {
        let (store, _) = recording_store();
        let log = HistoryLog::new(store, 20);

        log.append(input("Pho", "search")).await;
        let outcome = log.append(input("Pho", "image")).await;

        assert_eq!(outcome.status, HistoryStatus::Added);
        assert_eq!(log.all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let (store, saves) = recording_store();
        let log = HistoryLog::new(store, 20);

        for i in 0..25 {
            log.append(input(&format!("recipe-{}", i), "search")).await;
        }

        let all = log.all().await;
        assert_eq!(all.len(), 20);
        assert_eq!(all[0].recipe_name, "recipe-24");
        assert_eq!(all[19].recipe_name, "recipe-5");
        assert!(saves.lock().unwrap().iter().all(|saved| saved.len() <= 20));
    }

    #[tokio::test]
    async fn test_blank_name_is_ignored() {
        let mut store = MockHistoryStore::new();
        store.expect_load().returning(|| Ok(Vec::new()));
        store.expect_save().never();
        let log = HistoryLog::new(store, 20);

        let outcome = log.append(input("   ", "search")).await;

        assert_eq!(outcome.status, HistoryStatus::Ignored);
        assert!(log.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_name_is_trimmed_and_type_coerced() {
        let (store, _) = recording_store();
        let log = HistoryLog::new(store, 20);

        let outcome = log.append(input("  Bun cha ", "video")).await;

        let entry = outcome.entry.unwrap();
        assert_eq!(entry.recipe_name, "Bun cha");
        assert_eq!(entry.kind, HistoryType::Search);
    }

    #[tokio::test]
    async fn test_latest_returns_most_recent_first() {
        let (store, _) = recording_store();
        let log = HistoryLog::new(store, 20);

        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            log.append(input(name, "image")).await;
        }

        assert_eq!(names(&log.latest(5).await), vec!["g", "f", "e", "d", "c"]);
        assert_eq!(log.all().await.len(), 7);
    }

    #[tokio::test]
    async fn test_persist_failure_is_reported_and_not_cached() {
        let mut store = MockHistoryStore::new();
        store.expect_load().returning(|| Ok(Vec::new()));
        store
            .expect_save()
            .returning(|_| Err(CoreError::HistoryStorage("disk full".to_string())));
        let log = HistoryLog::new(store, 20);

        let outcome = log.append(input("Pho", "search")).await;

        assert_eq!(outcome.status, HistoryStatus::PersistFailed);
        assert_eq!(outcome.entry.unwrap().recipe_name, "Pho");
        assert!(log.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_store_starts_empty() {
        let mut store = MockHistoryStore::new();
        store
            .expect_load()
            .returning(|| Err(CoreError::HistoryCorrupted("not a list".to_string())));
        let log = HistoryLog::new(store, 20);

        assert!(log.all().await.is_empty());
        assert!(log.latest(5).await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let (store, _) = recording_store();
        let log = HistoryLog::new(store, 20);

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let log = log.clone();
                tokio::spawn(async move { log.append(input(&format!("r{}", i), "search")).await })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap().status, HistoryStatus::Added);
        }

        assert_eq!(log.all().await.len(), 10);
    }
}
