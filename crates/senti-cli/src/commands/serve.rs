//! Classifier service command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

use super::lexicon::LexiconArgs;
use super::LogArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SENTI_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SENTI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    // Load before binding so a missing lexicon stops startup.
    let analyzer = args.lexicon.load_analyzer().await?;

    println!();
    println!("  {} {}", "Senti".cyan().bold(), "Classifier Service".bold());
    println!();
    println!("  {}      http://{}:{}/analyze", "Analyze".green(), args.host, args.port);
    println!("  {}       http://{}:{}/health", "Health".green(), args.host, args.port);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    senti_web::run_server(Arc::new(analyzer), &args.host, args.port).await?;

    Ok(())
}
