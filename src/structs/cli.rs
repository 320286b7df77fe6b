use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "resumatch")]
#[clap(about = "AI-powered resume and job description match analyzer", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    #[clap(short, long, global = true)]
    pub verbose: bool,
}
