//! Resume and job description matching over the Gemini API, with a local
//! analysis history.

pub mod config;
pub mod enums;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
