use serde::{Deserialize, Serialize};
use crate::config::constants::GEMINI_API_KEY_ENV;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default)]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            api_key_env: Some(GEMINI_API_KEY_ENV.to_string()),
            temperature: None,
            max_output_tokens: None,
        }
    }
}
