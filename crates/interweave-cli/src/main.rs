mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "interweave")]
#[command(about = "Find the longest interleaving of two periodic binary signals")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search one explicit candidate against two signals")]
    Search {
        #[arg(long, help = "Candidate sequence, e.g. 0110")]
        s: String,
        #[arg(long, help = "First periodic signal, e.g. 01")]
        x: String,
        #[arg(long, help = "Second periodic signal, e.g. 10")]
        y: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, short, help = "Write output to this path instead of stdout")]
        output: Option<String>,
        #[arg(long, short, help = "Verbose mode: log the rank table")]
        verbose: bool,
    },
    #[command(about = "Generate pseudo-random instances and search each one")]
    Batch {
        #[arg(long, default_value_t = 10, help = "Number of runs")]
        runs: usize,
        #[arg(long, default_value_t = interweave_core::DEFAULT_SEED, help = "Pseudo-random seed")]
        seed: u64,
        #[arg(long, default_value_t = 16, help = "Candidate sequence length")]
        s_len: usize,
        #[arg(long, default_value_t = 2, help = "Length of signal x")]
        x_len: usize,
        #[arg(long, default_value_t = 2, help = "Length of signal y")]
        y_len: usize,
        #[arg(long, short, value_enum, default_value = "csv", help = "Output format")]
        format: OutputFormat,
        #[arg(long, short, help = "Write output to this path instead of stdout")]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            s,
            x,
            y,
            format,
            output,
            verbose,
        } => commands::search::run(&s, &x, &y, format, output.as_deref(), verbose),
        Commands::Batch {
            runs,
            seed,
            s_len,
            x_len,
            y_len,
            format,
            output,
        } => commands::batch::run(runs, seed, s_len, x_len, y_len, format, output.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
