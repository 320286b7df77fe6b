pub mod ai_providers;
pub mod history_manager;
pub mod resume_analyzer;
