//! Empirically derived VADER constants and word lists.

/// Valence added by an intensifying booster word ("very", "extremely").
pub const B_INCR: f64 = 0.293;

/// Valence added by a dampening word ("slightly", "kind of").
pub const B_DECR: f64 = -0.293;

/// Emphasis added to an ALL-CAPS polar word in mixed-case text.
pub const C_INCR: f64 = 0.733;

/// Multiplier applied to a negated valence.
pub const N_SCALAR: f64 = -0.74;

/// Normalization constant approximating the maximum expected sum.
pub const ALPHA: f64 = 15.0;

/// Per-"!" emphasis, counted up to [`MAX_EXCLAMATIONS`].
pub const EXCLAMATION_INCR: f64 = 0.292;
pub const MAX_EXCLAMATIONS: usize = 4;

/// Per-"?" emphasis for two or three marks; more than three is capped.
pub const QUESTION_INCR: f64 = 0.18;
pub const QUESTION_CAP: f64 = 0.96;

pub const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably",
    "decidedly", "deeply", "effing", "enormously", "entirely", "especially",
    "exceptionally", "extremely", "fabulously", "flipping", "flippin",
    "fricking", "frickin", "frigging", "friggin", "fully", "fucking",
    "greatly", "hella", "highly", "hugely", "incredibly", "intensely",
    "majorly", "more", "most", "particularly", "purely", "quite", "really",
    "remarkably", "so", "substantially", "thoroughly", "totally",
    "tremendously", "uber", "unbelievably", "unusually", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof",
    "kind-of", "less", "little", "marginally", "occasionally", "partly",
    "scarcely", "slightly", "somewhat", "sort of", "sorta", "sortof", "sort-of",
];

/// Multi-word expressions whose valence replaces the computed one.
pub const SPECIAL_CASE_IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("yeah right", -2.0),
    ("cut the mustard", 2.0),
    ("kiss of death", -1.5),
    ("hand to mouth", -2.0),
];

/// Booster or dampener scalar for a lowercased word, if it is one.
pub fn booster(word: &str) -> Option<f64> {
    if INCREMENTS.contains(&word) {
        Some(B_INCR)
    } else if DECREMENTS.contains(&word) {
        Some(B_DECR)
    } else {
        None
    }
}

pub fn idiom(phrase: &str) -> Option<f64> {
    SPECIAL_CASE_IDIOMS
        .iter()
        .find(|(idiom, _)| *idiom == phrase)
        .map(|(_, valence)| *valence)
}

/// Whether a lowercased word negates what follows it.
pub fn is_negation(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}
