//! Lexicon provisioning commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use senti_core::lexicon::{self, DEFAULT_LEXICON_URL};
use senti_core::{Lexicon, VaderAnalyzer};
use std::path::PathBuf;
use tracing::info;

/// Where the lexicon lives and where to fetch it from when missing.
#[derive(Args, Debug)]
pub struct LexiconArgs {
    /// Lexicon file (defaults to the user cache directory)
    #[arg(long = "lexicon", env = "SENTI_LEXICON")]
    pub path: Option<PathBuf>,

    /// URL to download the lexicon from when the file is missing
    #[arg(long, env = "SENTI_LEXICON_URL", default_value = DEFAULT_LEXICON_URL)]
    pub lexicon_url: String,
}

impl LexiconArgs {
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(lexicon::default_lexicon_path()?),
        }
    }

    /// Fetch the lexicon if needed and build an analyzer over it.
    ///
    /// Any failure here is fatal: nothing is served without a lexicon.
    pub async fn load_analyzer(&self) -> Result<VaderAnalyzer> {
        let path = self.resolve_path()?;

        if lexicon::ensure_lexicon(&path, &self.lexicon_url)
            .await
            .with_context(|| format!("Failed to provision lexicon at {}", path.display()))?
        {
            eprintln!("{} Downloaded lexicon to {}", "✓".green().bold(), path.display());
        }

        let analyzer = VaderAnalyzer::from_path(&path)
            .await
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?;
        info!(entries = analyzer.lexicon().len(), path = %path.display(), "Lexicon ready");

        Ok(analyzer)
    }
}

#[derive(Subcommand)]
pub enum LexiconCommands {
    /// Download the lexicon file
    Fetch {
        #[command(flatten)]
        lexicon: LexiconArgs,

        /// Download even if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Show where the lexicon file is read from
    Path {
        #[command(flatten)]
        lexicon: LexiconArgs,
    },
}

pub async fn execute(cmd: LexiconCommands) -> Result<()> {
    match cmd {
        LexiconCommands::Fetch { lexicon: args, force } => {
            let path = args.resolve_path()?;

            if force {
                lexicon::download_lexicon(&args.lexicon_url, &path).await?;
            } else if !lexicon::ensure_lexicon(&path, &args.lexicon_url).await? {
                println!(
                    "{} Lexicon already present at {} (use --force to re-download)",
                    "ℹ".blue().bold(),
                    path.display()
                );
                return Ok(());
            }

            let entries = Lexicon::load(&path).await?.len();
            println!(
                "{} Lexicon saved to {} ({} entries)",
                "✓".green().bold(),
                path.display().to_string().cyan(),
                entries
            );
        }

        LexiconCommands::Path { lexicon: args } => {
            let path = args.resolve_path()?;
            let state = if path.exists() { "present".green() } else { "missing".yellow() };
            println!("{} ({})", path.display(), state);
        }
    }

    Ok(())
}
