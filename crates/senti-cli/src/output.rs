//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use senti_core::{AnalysisResponse, Sentiment};

/// Print an analysis result.
pub fn print_analysis(response: &AnalysisResponse) {
    println!("{}", response.sentence.dimmed());
    println!();
    println!("{}: {}", "Sentiment".bold(), sentiment_colored(response.sentiment));
    println!();

    let scores = &response.scores;
    println!("  {:<9} {:>7.4}", "compound", scores.compound);
    println!("  {:<9} {:>7.3}", "pos", scores.pos);
    println!("  {:<9} {:>7.3}", "neu", scores.neu);
    println!("  {:<9} {:>7.3}", "neg", scores.neg);
}

fn sentiment_colored(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.as_str().green().bold(),
        Sentiment::Neutral => sentiment.as_str().yellow(),
        Sentiment::Negative => sentiment.as_str().red().bold(),
    }
}
