//! radquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "radquiz", version, about = "Radiography study quizzes in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practice a topic interactively
    Take {
        /// Path to a .toml question bank or directory
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Topic ID to practice (required when the bank holds several)
        #[arg(long)]
        topic: Option<String>,

        /// Directory to write the session report into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: json, html, md, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List topics found in the question-bank directory
    List {
        /// Path to the question-bank directory
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question-bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Compare two saved session reports
    Compare {
        /// Earlier attempt JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Later attempt JSON
        #[arg(long)]
        current: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and an example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("radquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            bank,
            topic,
            output,
            format,
            config,
        } => commands::take::execute(bank, topic, output, format, config),
        Commands::List { bank, config } => commands::list::execute(bank, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Compare {
            baseline,
            current,
            format,
        } => commands::compare::execute(baseline, current, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
