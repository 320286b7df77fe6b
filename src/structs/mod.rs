pub mod ai;
pub mod analysis_response;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod encoded_document;
pub mod history_item;
