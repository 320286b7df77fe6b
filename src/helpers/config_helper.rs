use crate::config::constants::DEFAULT_GEMINI_MODEL;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }
}
