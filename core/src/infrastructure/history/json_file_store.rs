use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{entities::HistoryEntry, ports::HistoryStore},
};

/// Keeps the history as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn storage_error(&self, e: impl std::fmt::Display) -> CoreError {
        CoreError::HistoryStorage(format!("{}: {}", self.path.display(), e))
    }
}

impl HistoryStore for JsonFileHistoryStore {
    /// A missing or empty file is an empty history; anything that is not a
    /// JSON array is reported as corrupted. Array elements that are not valid
    /// entries are skipped.
    fn load(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CoreError::HistoryCorrupted(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let elements: Vec<Value> = serde_json::from_str(&content).map_err(|e| {
            CoreError::HistoryCorrupted(format!("{}: {}", self.path.display(), e))
        })?;

        let entries = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                serde_json::from_value::<HistoryEntry>(element)
                    .inspect_err(|e| {
                        warn!(
                            path = %self.path.display(),
                            index,
                            "Skipping unreadable history entry: {}", e
                        )
                    })
                    .ok()
            })
            .collect();

        Ok(entries)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }

        // Write next to the target, then rename, so readers never see a
        // half-written file.
        let tmp_path = self.path.with_extension("json.tmp");
        let file = File::create(&tmp_path).map_err(|e| self.storage_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries).map_err(|e| self.storage_error(e))?;
        writer.flush().map_err(|e| self.storage_error(e))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.storage_error(e))
    }
}
