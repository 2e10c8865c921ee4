//! termdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "termdeck", version, about = "Glossary study tool with true/false quizzes")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Glossary file (overrides the config)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a term in every workbook
    Search {
        /// Term to look up (case-insensitive)
        term: String,
    },

    /// Show one random term
    Learn {
        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Add a new term
    Add {
        /// Workbook name
        #[arg(long)]
        workbook: String,

        /// Term
        #[arg(long)]
        term: String,

        /// Definition (1-2 sentences)
        #[arg(long, default_value = "")]
        definition: String,

        /// Usage example
        #[arg(long, default_value = "")]
        example: String,
    },

    /// Display every term in a workbook
    Show {
        /// Workbook name (case-insensitive)
        workbook: String,
    },

    /// List workbook names
    Workbooks,

    /// List every entry
    List {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run a true/false quiz, reading answers from stdin
    Quiz {
        /// Restrict questions to one workbook
        #[arg(long)]
        workbook: Option<String>,

        /// Number of questions (default from config)
        #[arg(long)]
        questions: Option<usize>,

        /// Seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create the glossary file and a starter config
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termdeck_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = commands::AppContext::load(cli.config, cli.data_file).and_then(|ctx| {
        match cli.command {
            Commands::Search { term } => commands::search::execute(&ctx, &term),
            Commands::Learn { seed } => commands::learn::execute(&ctx, seed),
            Commands::Add {
                workbook,
                term,
                definition,
                example,
            } => commands::add::execute(&ctx, &workbook, &term, &definition, &example),
            Commands::Show { workbook } => commands::show::execute(&ctx, &workbook),
            Commands::Workbooks => commands::show::workbooks(&ctx),
            Commands::List { format } => commands::show::list(&ctx, &format),
            Commands::Quiz {
                workbook,
                questions,
                seed,
            } => commands::quiz::execute(&ctx, workbook, questions, seed),
            Commands::Init => commands::init::execute(&ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
