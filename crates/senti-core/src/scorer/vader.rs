//! VADER (Valence Aware Dictionary and sEntiment Reasoner) analyzer.

use std::path::Path;

use tracing::debug;

use super::constants::{
    booster, idiom, is_negation, ALPHA, B_DECR, C_INCR, EXCLAMATION_INCR, MAX_EXCLAMATIONS,
    N_SCALAR, QUESTION_CAP, QUESTION_INCR,
};
use super::text::{is_all_caps, SentiText};
use super::Scorer;
use crate::error::{SentiError, SentiResult};
use crate::lexicon::Lexicon;
use crate::model::PolarityScores;

/// Lexicon-backed sentiment analyzer. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct VaderAnalyzer {
    lexicon: Lexicon,
}

impl VaderAnalyzer {
    pub fn new(lexicon: Lexicon) -> SentiResult<Self> {
        if lexicon.is_empty() {
            return Err(SentiError::EmptyLexicon);
        }
        Ok(Self { lexicon })
    }

    /// Load the lexicon file at `path` and build an analyzer over it.
    pub async fn from_path(path: &Path) -> SentiResult<Self> {
        Self::new(Lexicon::load(path).await?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`. Text without any token scores all zeros.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let senti = SentiText::new(text);
        let words = senti.lowered();

        let mut sentiments = Vec::with_capacity(senti.len());
        for (i, word) in words.iter().enumerate() {
            let kind_of = word == "kind" && words.get(i + 1).is_some_and(|next| next == "of");
            if kind_of || booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti, i));
        }

        but_check(words, &mut sentiments);
        let scores = score_valence(&sentiments, text);
        debug!(tokens = senti.len(), compound = scores.compound, "Scored text");
        scores
    }

    fn sentiment_valence(&self, senti: &SentiText, i: usize) -> f64 {
        let tokens = senti.tokens();
        let words = senti.lowered();
        let Some(mut valence) = self.lexicon.valence(&words[i]) else {
            return 0.0;
        };

        if senti.is_cap_diff() && is_all_caps(&tokens[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        // Look back up to three tokens for modifiers that are not themselves
        // in the lexicon.
        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&words[prev]) {
                continue;
            }

            let mut scalar = scalar_inc_dec(&tokens[prev], &words[prev], valence, senti.is_cap_diff());
            if start_i == 1 && scalar != 0.0 {
                scalar *= 0.95;
            }
            if start_i == 2 && scalar != 0.0 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = never_check(valence, words, start_i, i);
            if start_i == 2 {
                valence = idioms_check(valence, words, i);
            }
        }

        self.least_check(valence, words, i)
    }

    /// "least" before a polar word negates it, except in "at least" and
    /// "very least".
    fn least_check(&self, valence: f64, words: &[String], i: usize) -> f64 {
        let preceded_by_least = |j: usize| words[j] == "least" && !self.lexicon.contains(&words[j]);

        if i > 1 && preceded_by_least(i - 1) {
            if words[i - 2] != "at" && words[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && preceded_by_least(i - 1) {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl Scorer for VaderAnalyzer {
    fn score(&self, text: &str) -> SentiResult<PolarityScores> {
        Ok(self.polarity_scores(text))
    }
}

/// Booster contribution of a preceding word, signed to match `valence`.
fn scalar_inc_dec(token: &str, word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(word) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_cap_diff && is_all_caps(token) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn never_check(valence: f64, words: &[String], start_i: usize, i: usize) -> f64 {
    let is = |j: usize, w: &str| words[j] == w;
    let so_or_this = |j: usize| is(j, "so") || is(j, "this");

    match start_i {
        0 => {
            if is_negation(&words[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if is(i - 2, "never") && so_or_this(i - 1) {
                return valence * 1.5;
            }
            if is_negation(&words[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if (is(i - 3, "never") && so_or_this(i - 2)) || so_or_this(i - 1) {
                return valence * 1.25;
            }
            if is_negation(&words[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Replace the valence when the word ends or starts a known idiom, and dampen
/// it after a two-word dampener such as "kind of". Requires `i >= 3`.
fn idioms_check(mut valence: f64, words: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", words[i - 1], words[i]);
    let twoonezero = format!("{} {} {}", words[i - 2], words[i - 1], words[i]);
    let twoone = format!("{} {}", words[i - 2], words[i - 1]);
    let threetwoone = format!("{} {} {}", words[i - 3], words[i - 2], words[i - 1]);
    let threetwo = format!("{} {}", words[i - 3], words[i - 2]);

    if let Some(v) = [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo]
        .into_iter()
        .find_map(|seq| idiom(seq))
    {
        valence = v;
    }

    if words.len() - 1 > i {
        if let Some(v) = idiom(&format!("{} {}", words[i], words[i + 1])) {
            valence = v;
        }
    }
    if words.len() - 1 > i + 1 {
        if let Some(v) = idiom(&format!("{} {} {}", words[i], words[i + 1], words[i + 2])) {
            valence = v;
        }
    }

    if booster(&threetwo).is_some() || booster(&twoone).is_some() {
        valence += B_DECR;
    }
    valence
}

/// Sentiment before "but" is halved, sentiment after it weighs 1.5x.
fn but_check(words: &[String], sentiments: &mut [f64]) {
    let Some(bi) = words.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let qm = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_INCR + qm
}

/// Map an unbounded valence sum into [-1, 1].
pub(crate) fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    // Polar words count one extra so neutral words, counted as one each,
    // stay comparable.
    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round_to(neg_sum.abs() / total, 3),
        neu: round_to(neu_count / total, 3),
        pos: round_to(pos_sum.abs() / total, 3),
        compound: round_to(compound, 4),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Sentiment;

    fn analyzer() -> VaderAnalyzer {
        let lexicon = Lexicon::from_entries([
            ("love", 3.2),
            ("worst", -3.1),
            ("good", 1.9),
            ("bad", -2.5),
            ("okay", 0.9),
            ("great", 3.1),
            ("death", -2.9),
            ("horrible", -2.5),
            (":)", 2.0),
        ]);
        VaderAnalyzer::new(lexicon).unwrap()
    }

    fn compound(text: &str) -> f64 {
        analyzer().polarity_scores(text).compound
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_rejects_empty_lexicon() {
        let err = VaderAnalyzer::new(Lexicon::default()).unwrap_err();
        assert!(matches!(err, SentiError::EmptyLexicon));
    }

    #[test]
    fn test_positive_sentence() {
        let scores = analyzer().polarity_scores("I absolutely love this product!");
        assert_close(scores.compound, 0.6989);
        assert_close(scores.pos, 0.615);
        assert_close(scores.neu, 0.385);
        assert_close(scores.neg, 0.0);
        assert_eq!(Sentiment::from_compound(scores.compound), Sentiment::Positive);
    }

    #[test]
    fn test_negative_sentence() {
        let scores = analyzer().polarity_scores("This is the worst experience I've ever had.");
        assert_close(scores.compound, -0.6249);
        assert!(scores.neg > scores.pos);
        assert_eq!(Sentiment::from_compound(scores.compound), Sentiment::Negative);
    }

    #[test]
    fn test_no_polar_words_is_neutral() {
        let scores = analyzer().polarity_scores("The meeting is at noon.");
        assert_eq!(scores, PolarityScores { neg: 0.0, neu: 1.0, pos: 0.0, compound: 0.0 });
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(analyzer().polarity_scores(""), PolarityScores::default());
        assert_eq!(analyzer().polarity_scores("   "), PolarityScores::default());
    }

    #[test]
    fn test_proportions_sum_to_one() {
        for text in ["good but bad", "not bad at all!!", "GREAT movie, horrible ending :)"] {
            let s = analyzer().polarity_scores(text);
            assert!((s.neg + s.neu + s.pos - 1.0).abs() <= 0.002, "{}: {:?}", text, s);
        }
    }

    #[test]
    fn test_booster_intensifies() {
        assert!(compound("the food was very good") > compound("the food was good"));
        assert!(compound("the food was slightly good") < compound("the food was good"));
    }

    #[test]
    fn test_negation_flips() {
        assert!(compound("the food was good") > 0.0);
        assert!(compound("the food was not good") < 0.0);
        assert!(compound("the food wasn't good") < 0.0);
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(compound("the food was GOOD") > compound("the food was good"));
    }

    #[test]
    fn test_exclamation_emphasis_is_capped() {
        assert!(compound("good!!") > compound("good"));
        assert_close(compound("good!!!!"), compound("good!!!!!!!!"));
    }

    #[test]
    fn test_question_marks() {
        assert_close(compound("good?"), compound("good"));
        assert!(compound("good??") > compound("good"));
    }

    #[test]
    fn test_but_shifts_weight() {
        assert!(compound("the food was good but the service was bad") < 0.0);
        assert!(compound("the food was bad but the service was good") > 0.0);
    }

    #[test]
    fn test_least() {
        assert!(compound("the least good") < 0.0);
        assert!(compound("at least good") > 0.0);
    }

    #[test]
    fn test_idiom_overrides_valence() {
        // "death" alone is -2.9; the idiom pins it to -1.5.
        assert_close(compound("that was the kiss of death"), -0.3612);
    }

    #[test]
    fn test_emoticon_is_scored() {
        assert!(compound("see you soon :)") > 0.0);
    }

    #[test]
    fn test_negation_reaches_three_tokens_back() {
        // "bad" is negated by the "not" right before it and again by the
        // "not" three tokens back, so the sentence ends up negative.
        let scores = analyzer().polarity_scores("It is okay, not good, not bad.");
        assert_close(scores.compound, -0.4357);
        assert_eq!(Sentiment::from_compound(scores.compound), Sentiment::Negative);
    }

    #[test]
    fn test_deterministic() {
        let a = analyzer();
        let text = "It was a GREAT day, but the ending was horrible!!";
        assert_eq!(a.polarity_scores(text), a.polarity_scores(text));
    }

    #[test]
    fn test_normalize_bounds() {
        assert_close(normalize(0.0), 0.0);
        assert!(normalize(1e6) <= 1.0);
        assert!(normalize(-1e6) >= -1.0);
    }
}
