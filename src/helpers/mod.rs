pub mod config_helper;
pub mod file_encoder;
