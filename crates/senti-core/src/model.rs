//! Request/response contract of the classifier service.

use serde::{Deserialize, Serialize};

use crate::classify::Sentiment;

/// Polarity scores produced by a scorer.
///
/// `neg`, `neu` and `pos` are proportions that sum to 1 for any text with at
/// least one token; `compound` is the normalized aggregate in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub sentence: String,
}

/// Result of analyzing one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub sentence: String,
    pub sentiment: Sentiment,
    pub scores: PolarityScores,
}

impl AnalysisRequest {
    pub fn new(sentence: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
        }
    }
}

impl AnalysisResponse {
    /// Build a response, labelling it from `scores.compound`.
    pub fn new(sentence: String, scores: PolarityScores) -> Self {
        Self {
            sentence,
            sentiment: Sentiment::from_compound(scores.compound),
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_compound_only() {
        let scores = PolarityScores { neg: 0.9, neu: 0.1, pos: 0.0, compound: 0.05 };
        let resp = AnalysisResponse::new("x".to_string(), scores);
        assert_eq!(resp.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_response_wire_shape() {
        let scores = PolarityScores { neg: 0.0, neu: 0.4, pos: 0.6, compound: 0.6369 };
        let resp = AnalysisResponse::new("I love it".to_string(), scores);
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["sentence"], "I love it");
        assert_eq!(value["sentiment"], "Positive");
        assert_eq!(value["scores"]["pos"], 0.6);
        assert_eq!(value["scores"]["compound"], 0.6369);
    }

    #[test]
    fn test_request_requires_string_sentence() {
        assert!(serde_json::from_str::<AnalysisRequest>("{}").is_err());
        assert!(serde_json::from_str::<AnalysisRequest>(r#"{"sentence": 3}"#).is_err());
        let req: AnalysisRequest = serde_json::from_str(r#"{"sentence": ""}"#).unwrap();
        assert_eq!(req.sentence, "");
    }
}
