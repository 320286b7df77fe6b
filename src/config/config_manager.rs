use std::fs;
use std::path::PathBuf;
use crate::config::constants::{APP_DIR, CONFIG_FILE_NAME};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# ResuMatch Configuration

[ai]
# Gemini model used for the analysis
model = "gemini-2.5-flash"

# Environment variable holding the Gemini API key
api_key_env = "GEMINI_API_KEY"

# Sampling temperature, leave unset for the model default
# temperature = 0.2

# Cap on generated tokens, leave unset for the model default
# max_output_tokens = 2048

[storage]
# Where analysis history is kept, defaults to ~/.resumatch/history.json
# history_file = "/home/user/.resumatch/history.json"
"#;

pub struct ConfigManager;

impl ConfigManager {
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(APP_DIR).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> anyhow::Result<Config> {
        let config_path = Self::config_path();

        if config_path.exists() {
            println!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> anyhow::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, SAMPLE_CONFIG)?;

        println!("✅ Created sample config at: {}", config_path.display());

        Ok(())
    }
}
