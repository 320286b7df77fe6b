use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Analyze {
        resume: String,
        #[clap(short, long)]
        job_description: Option<String>,
        #[clap(long)]
        job_file: Option<String>,
        #[clap(long)]
        no_save: bool,
    },
    History {
        #[clap(short, long)]
        detailed: bool,
    },
    Clear {
        #[clap(short, long)]
        yes: bool,
    },
}
