use clap::Parser;
use resumatch_cli::structs::cli::Cli;
use resumatch_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("❌ {}", e);
        std::process::exit(1);
    }
}
