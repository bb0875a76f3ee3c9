//! Tokenization of input text for scoring.

/// Text split into scoring tokens, with the casing information the
/// heuristics need.
#[derive(Debug, Clone)]
pub struct SentiText {
    tokens: Vec<String>,
    lowered: Vec<String>,
    is_cap_diff: bool,
}

impl SentiText {
    /// Split on whitespace, drop single-character tokens and strip surrounding
    /// punctuation from words. Tokens that would shrink to two characters or
    /// fewer are kept whole, so emoticons such as `:)` survive.
    pub fn new(text: &str) -> Self {
        let tokens: Vec<String> = text
            .split_whitespace()
            .filter(|token| token.chars().count() > 1)
            .map(strip_punctuation)
            .collect();
        let lowered = tokens.iter().map(|t| t.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&tokens);

        Self {
            tokens,
            lowered,
            is_cap_diff,
        }
    }

    /// Tokens in their original casing.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn lowered(&self) -> &[String] {
        &self.lowered
    }

    /// True when some, but not all, tokens are ALL-CAPS.
    pub fn is_cap_diff(&self) -> bool {
        self.is_cap_diff
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn strip_punctuation(token: &str) -> String {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token.to_string()
    } else {
        stripped.to_string()
    }
}

/// At least one cased character and no lowercase ones.
pub(crate) fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

fn allcap_differential(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}
