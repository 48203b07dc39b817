//! Quantifying impact — the share of experience bullets that carry a measurable
//! outcome.
//!
//! A bullet counts as quantified when it contains a digit, a percent sign, a
//! currency symbol, or an impact verb.

use crate::ats::text::{excerpt, tokenize};
use crate::ats::CategoryScore;
use crate::models::ResumeDocument;

const IMPACT_VERBS: &[&str] = &[
    "accelerated",
    "boosted",
    "cut",
    "decreased",
    "doubled",
    "eliminated",
    "exceeded",
    "generated",
    "grew",
    "halved",
    "increased",
    "lowered",
    "maximized",
    "minimized",
    "raised",
    "reduced",
    "saved",
    "tripled",
];

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹'];

/// Bullets quoted back in the feedback message.
const MAX_EXAMPLES: usize = 3;

pub fn is_quantified(bullet: &str) -> bool {
    let has_number = bullet.chars().any(|c| c.is_ascii_digit());
    let has_percent = bullet.contains('%');
    let has_currency = bullet.contains(CURRENCY_SYMBOLS);
    let has_impact_verb = tokenize(bullet)
        .iter()
        .any(|t| IMPACT_VERBS.contains(&t.as_str()));

    has_number || has_percent || has_currency || has_impact_verb
}

pub fn score(doc: &ResumeDocument) -> CategoryScore {
    let bullets: Vec<&str> = doc
        .experience_bullets()
        .filter(|b| !b.trim().is_empty())
        .collect();

    if bullets.is_empty() {
        return CategoryScore {
            score: 0,
            advice: Some(
                "Add experience entries with bullet points describing your achievements"
                    .to_string(),
            ),
        };
    }

    let unquantified: Vec<&str> = bullets
        .iter()
        .copied()
        .filter(|b| !is_quantified(b))
        .collect();
    let quantified = bullets.len() - unquantified.len();
    let score = (100.0 * quantified as f32 / bullets.len() as f32).round() as u8;

    let advice = (!unquantified.is_empty()).then(|| {
        let examples: Vec<String> = unquantified
            .iter()
            .take(MAX_EXAMPLES)
            .map(|b| format!("\"{}\"", excerpt(b, 60)))
            .collect();
        format!(
            "Add more quantifiable metrics to your bullet points (numbers, %, $), e.g. {}",
            examples.join("; ")
        )
    });

    CategoryScore { score, advice }
}
