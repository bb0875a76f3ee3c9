//! Web form client command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use senti_web::ui::DEFAULT_BACKEND_URL;

use super::LogArgs;

#[derive(Args)]
pub struct UiArgs {
    /// Port to listen on
    #[arg(long, env = "SENTI_UI_PORT", default_value = "8501")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SENTI_UI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL of the classifier service
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    #[command(flatten)]
    pub log: LogArgs,
}

pub async fn execute(args: UiArgs) -> Result<()> {
    println!();
    println!("  {} {}", "Senti".cyan().bold(), "Web Client".bold());
    println!();
    println!("  {}  http://{}:{}", "Page".green(), args.host, args.port);
    println!("  {}   {}", "API".green(), args.backend_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    senti_web::ui::run_ui(&args.backend_url, &args.host, args.port).await?;

    Ok(())
}
