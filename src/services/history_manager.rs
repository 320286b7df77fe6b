use std::fs;
use std::path::PathBuf;
use crate::config::constants::{APP_DIR, HISTORY_FILE_NAME, HISTORY_LIMIT};
use crate::structs::config::config::Config;
use crate::structs::history_item::HistoryItem;
use crate::traits::history_store::HistoryStore;

/// JSON-file backed history. Newest entries first, capped at
/// `HISTORY_LIMIT`. Read and write failures degrade to an empty list or a
/// logged warning so a broken history file never blocks an analysis.
pub struct HistoryManager {
    history_path: PathBuf,
}

impl HistoryManager {
    pub fn new() -> Self {
        let history_path = dirs::home_dir()
            .map(|dir| dir.join(APP_DIR).join(HISTORY_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME));

        Self { history_path }
    }

    pub fn with_path(history_path: PathBuf) -> Self {
        Self { history_path }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.storage.history_file {
            Some(path) => Self::with_path(PathBuf::from(path)),
            None => Self::new(),
        }
    }

    fn load(&self) -> Vec<HistoryItem> {
        if !self.history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.history_path) {
            Ok(contents) => contents,
            Err(e) => {
                log::error!("⚠️ Failed to load history: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(e) => {
                log::error!("⚠️ Failed to load history: {}", e);
                Vec::new()
            }
        }
    }

    fn store(&self, items: &[HistoryItem]) -> anyhow::Result<()> {
        if let Some(parent) = self.history_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(items)?;
        fs::write(&self.history_path, contents)?;

        Ok(())
    }
}

impl HistoryStore for HistoryManager {
    fn read(&self) -> Vec<HistoryItem> {
        self.load()
    }

    fn write(&self, item: &HistoryItem) {
        let mut items = self.load();
        items.insert(0, item.clone());
        items.truncate(HISTORY_LIMIT);

        if let Err(e) = self.store(&items) {
            log::error!("⚠️ Failed to save history: {}", e);
        }
    }

    fn clear(&self) {
        if !self.history_path.exists() {
            return;
        }

        if let Err(e) = fs::remove_file(&self.history_path) {
            log::error!("⚠️ Failed to clear history: {}", e);
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}
