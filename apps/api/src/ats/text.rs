//! Shared text helpers for the ATS heuristics.

/// Words that carry no signal when measuring repetition.
const STOPWORDS: &[&str] = &[
    "a", "about", "across", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "been", "between", "both", "but", "by", "can", "each", "for", "from", "had", "has", "have",
    "he", "her", "his", "i", "in", "into", "is", "it", "its", "me", "more", "my", "new", "not",
    "of", "on", "or", "our", "out", "over", "per", "she", "so", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "up",
    "us", "using", "via", "was", "we", "were", "which", "while", "who", "will", "with", "within",
    "would", "you", "your",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercases `text`, strips punctuation, and splits on whitespace.
///
/// Apostrophes and hyphens inside a word are dropped rather than splitting it,
/// so "cross-functional" becomes "crossfunctional".
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokens worth counting for repetition: no stopwords, no bare numbers, at
/// least three characters.
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() >= 3)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !is_stopword(t))
        .collect()
}

/// Shortens `text` to at most `max_chars` characters for use in feedback.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
