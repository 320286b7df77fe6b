pub mod ai_provider;
pub mod history_store;
