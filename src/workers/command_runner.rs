use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use anyhow::Context;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::GEMINI_API_KEY_ENV;
use crate::enums::analysis_error::AnalysisError;
use crate::enums::commands::Commands;
use crate::helpers::file_encoder::FileEncoder;
use crate::logger::analysis_report_logger::AnalysisReportLogger;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::history_manager::HistoryManager;
use crate::services::resume_analyzer::ResumeAnalyzer;
use crate::structs::history_item::HistoryItem;
use crate::traits::history_store::HistoryStore;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> anyhow::Result<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Analyze { resume, job_description, job_file, no_save } => {
                self.analyze_command(resume, job_description, job_file, no_save).await
            }
            Commands::History { detailed } => self.history_command(detailed).await,
            Commands::Clear { yes } => self.clear_command(yes).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> anyhow::Result<()> {
        log::info!("🚀 Initializing resumatch configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to adjust the model or history location.");
                log::info!("🔧 Set the GEMINI_API_KEY environment variable before running an analysis.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn analyze_command(
        &self,
        resume: String,
        job_description: Option<String>,
        job_file: Option<String>,
        no_save: bool,
    ) -> anyhow::Result<()> {
        log::info!("🔍 Starting resume analysis...");

        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'resumatch init' to create a configuration file.");
                return Err(e);
            }
        };

        let job_description = Self::resolve_job_description(job_description, job_file)?;
        let document = FileEncoder::encode_file(Path::new(&resume)).await?;

        log::info!("📄 Loaded {} ({})", document.file_name, document.media_type);

        let api_key_env = config.ai.api_key_env.as_deref().unwrap_or(GEMINI_API_KEY_ENV);
        let api_key = match std::env::var(api_key_env) {
            Ok(key) => key,
            Err(_) => {
                log::error!("❌ No API key found in ${}", api_key_env);
                log::error!("💡 Set it with: export {}=your-key", api_key_env);
                return Err(anyhow::anyhow!("missing API key in {}", api_key_env));
            }
        };

        let mut provider = GeminiProvider::new(api_key).with_model(config.ai.model.clone());
        if let Some(temperature) = config.ai.temperature {
            provider = provider.with_temperature(temperature);
        }
        if let Some(max_output_tokens) = config.ai.max_output_tokens {
            provider = provider.with_max_output_tokens(max_output_tokens);
        }

        let analyzer = ResumeAnalyzer::new(Arc::new(provider));
        let spinner = AnimatedLogger::start("🤖 Analyzing resume against job description");

        match analyzer.analyze(&document, &job_description).await {
            Ok(result) => {
                spinner.succeed("Analysis complete").await;

                let item = HistoryItem {
                    file_name: document.file_name.clone(),
                    result,
                };

                if no_save {
                    log::info!("⏭️ Skipping history save.");
                } else {
                    HistoryManager::from_config(&config).write(&item);
                }

                AnalysisReportLogger::print_analysis_report(&item);

                Ok(())
            }
            Err(e) => {
                spinner.fail("Analysis failed").await;
                log::error!("❌ {}", e);

                if matches!(e, AnalysisError::RequestFailed(_) | AnalysisError::MalformedResponse(_)) {
                    log::error!("💡 Failed to analyze. Please check your internet connection or API key and try again.");
                }

                Err(e.into())
            }
        }
    }

    async fn history_command(&self, detailed: bool) -> anyhow::Result<()> {
        log::info!("📜 Showing analysis history...");

        let config = ConfigManager::load()?;
        let store = HistoryManager::from_config(&config);

        AnalysisReportLogger::print_history(&store.read(), detailed);

        Ok(())
    }

    async fn clear_command(&self, yes: bool) -> anyhow::Result<()> {
        if !yes && !Self::confirm_clear()? {
            log::info!("⏭️ Keeping history.");
            return Ok(());
        }

        let config = ConfigManager::load()?;
        HistoryManager::from_config(&config).clear();

        log::info!("🗑️ History cleared");

        Ok(())
    }

    // Inline text wins over a file path when both are given.
    fn resolve_job_description(
        job_description: Option<String>,
        job_file: Option<String>,
    ) -> anyhow::Result<String> {
        if let Some(text) = job_description {
            return Ok(text);
        }

        if let Some(path) = job_file {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read job description file: {}", path))?;
            return Ok(text);
        }

        Err(AnalysisError::InvalidInput(
            "Please provide both a resume and a job description.".to_string(),
        )
        .into())
    }

    fn confirm_clear() -> anyhow::Result<bool> {
        print!("Are you sure you want to clear all history? (y/N): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}
