use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub history_file: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_file: None,
        }
    }
}
