//! Senti Core Library
//!
//! Lexicon-based sentiment scoring (VADER), the label threshold policy and
//! the request/response contract shared by the service and its clients.

pub mod classify;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod scorer;

pub use classify::Sentiment;
pub use error::{SentiError, SentiResult};
pub use lexicon::Lexicon;
pub use model::{AnalysisRequest, AnalysisResponse, PolarityScores};
pub use scorer::{Scorer, VaderAnalyzer};
