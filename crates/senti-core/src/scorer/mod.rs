//! Polarity scoring.
//!
//! [`Scorer`] is the seam the service depends on; [`VaderAnalyzer`] is the
//! lexicon-and-heuristics implementation shipped with the workspace.

pub mod constants;
pub mod text;
mod vader;

pub use vader::VaderAnalyzer;

use crate::error::SentiResult;
use crate::model::PolarityScores;

/// A polarity scoring function.
///
/// Implementations must be pure and deterministic: the same text always
/// yields the same scores. Scoring is expected to be total over strings; the
/// error path exists for internal faults only.
pub trait Scorer: Send + Sync {
    fn score(&self, text: &str) -> SentiResult<PolarityScores>;
}
