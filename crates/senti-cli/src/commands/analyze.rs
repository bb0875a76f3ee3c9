//! One-shot local analysis.

use anyhow::Result;
use clap::Args;
use senti_core::AnalysisResponse;

use super::lexicon::LexiconArgs;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Sentence to analyze
    pub text: String,

    /// Print the service's JSON response shape instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let analyzer = args.lexicon.load_analyzer().await?;
    let scores = analyzer.polarity_scores(&args.text);
    let response = AnalysisResponse::new(args.text, scores);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        output::print_analysis(&response);
    }

    Ok(())
}
