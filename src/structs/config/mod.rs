pub mod ai_config;
pub mod config;
pub mod storage_config;
