mod cli;
mod collectors;
mod config;
mod error;
mod models;
mod renderer;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codegather")]
#[command(
    about = "Concatenate source files from a directory tree into one text file",
    long_about = None,
    after_help = "Entries are written in file name order within each directory; \
                  pass --no-sort or set sort_entries = false to keep filesystem order."
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    collect: CollectArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect matching files into the output file (default command)
    Collect(CollectArgs),
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct CollectArgs {
    /// Path to config file (defaults to codegather.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to search recursively
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// File to write the collected entries to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Recognized file name suffix; repeat to list several (replaces configured ones)
    #[arg(long = "suffix", action = ArgAction::Append)]
    suffixes: Vec<String>,

    /// Dry run - print entries to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Keep filesystem order (entries are sorted by file name by default)
    #[arg(long)]
    no_sort: bool,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize codegather.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run_collect(args: CollectArgs) -> error::Result<()> {
    cli::collect::run(
        args.config,
        args.source,
        args.output,
        args.suffixes,
        args.dry_run,
        args.no_sort,
    )
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => run_collect(cli.collect),
        Some(Commands::Collect(args)) => run_collect(args),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
