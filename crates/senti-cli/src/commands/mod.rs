//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod lexicon;
pub mod serve;
pub mod ui;

/// Lexicon-based sentiment analysis service and client
#[derive(Parser)]
#[command(name = "senti")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the classifier service (JSON API)
    Serve(serve::ServeArgs),

    /// Start the web form client
    Ui(ui::UiArgs),

    /// Analyze a sentence locally, without the service
    Analyze(analyze::AnalyzeArgs),

    /// Manage the VADER lexicon file
    #[command(subcommand)]
    Lexicon(lexicon::LexiconCommands),
}

/// File logging options shared by the long-running commands.
#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    fn path(&self, default_name: &str) -> Option<PathBuf> {
        match (&self.log_file, self.log) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(default_name)),
            (None, false) => None,
        }
    }
}

impl Commands {
    /// Log file requested on the command line, if any.
    pub fn log_file(&self) -> Option<PathBuf> {
        match self {
            Commands::Serve(args) => args.log.path("senti-serve.log"),
            Commands::Ui(args) => args.log.path("senti-ui.log"),
            _ => None,
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Ui(args) => ui::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Lexicon(cmd) => lexicon::execute(cmd).await,
        }
    }
}
