//! `ide-jump`: the command editors call to hand a buffer position to an IDE.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::config::ConfigAction;
use commands::open::OpenArgs;

/// Environment variable holding a `tracing` filter, e.g. `ide_jump=debug`.
const LOG_ENV: &str = "IDE_JUMP_LOG";

#[derive(Parser)]
#[command(name = "ide-jump", version, about = "Open the current file in a JetBrains IDE at the same position")]
struct Cli {
    /// Log resolution and launch details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file at a line and column, reusing the project window
    Open {
        /// File to open
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// 1-based line number
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// 0-based column number
        #[arg(short, long, default_value_t = 0)]
        column: u32,

        /// IDE display name or command (defaults to the configured IDE)
        #[arg(long)]
        ide: Option<String>,

        /// Project root to open the file in (discovered when omitted)
        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,

        /// Print the command line instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Open the project containing a path (defaults to the current directory)
    Project {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// IDE display name or command (defaults to the configured IDE)
        #[arg(long)]
        ide: Option<String>,

        /// Print the command line instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the executable an IDE resolves to
    Resolve {
        /// IDE display name or command (defaults to the configured IDE)
        ide: Option<String>,
    },

    /// List configured IDEs and where they were found
    List,

    /// Manage ide-jump configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run first-time setup: detect installed IDEs and pick a default
    Setup,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ide-jump: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Open { file, line, column, ide, project, dry_run } => {
            commands::open::cmd_open(&OpenArgs { file, line, column, ide, project, dry_run })
        }
        Commands::Project { path, ide, dry_run } => {
            commands::open::cmd_project(path.as_deref(), ide.as_deref(), dry_run)
        }
        Commands::Resolve { ide } => commands::list::cmd_resolve(ide.as_deref()),
        Commands::List => commands::list::cmd_list(),
        Commands::Config { action } => commands::config::cmd_config(action),
        Commands::Setup => commands::setup::cmd_setup(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
