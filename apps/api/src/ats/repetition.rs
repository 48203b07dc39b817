//! Repetition — penalizes resumes that lean on the same few words across the
//! summary and bullets.
//!
//! Each block (the summary, every bullet) contributes a token at most once, so
//! the measure is "how many blocks reuse this word", not raw term frequency.
//! The first two blocks using a word are free; each further block is excess.
//! Without at least one non-blank bullet there is nothing to compare, and the
//! category scores 0.

use std::collections::{BTreeMap, BTreeSet};

use crate::ats::text::content_tokens;
use crate::ats::CategoryScore;
use crate::models::ResumeDocument;

/// Blocks allowed to share a word before it counts as repetition.
const REPEAT_ALLOWANCE: usize = 2;
/// Score lost per unit of excess density.
const PENALTY: f32 = 400.0;
const MAX_EXAMPLES: usize = 3;

/// Block-level frequency of every content token.
pub fn block_frequencies(doc: &ResumeDocument) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let blocks = std::iter::once(doc.summary.as_str()).chain(doc.all_bullets());

    for block in blocks {
        let unique: BTreeSet<String> = content_tokens(block).into_iter().collect();
        for token in unique {
            *counts.entry(token).or_default() += 1;
        }
    }
    counts
}

pub fn score(doc: &ResumeDocument) -> CategoryScore {
    let counts = block_frequencies(doc);
    let total: usize = counts.values().sum();
    let has_bullets = doc.all_bullets().any(|b| !b.trim().is_empty());

    if total == 0 || !has_bullets {
        return CategoryScore {
            score: 0,
            advice: Some(
                "Add bullet points to your experience so keyword variety can be assessed"
                    .to_string(),
            ),
        };
    }

    let excess: usize = counts
        .values()
        .map(|&c| c.saturating_sub(REPEAT_ALLOWANCE))
        .sum();
    let density = excess as f32 / total as f32;
    let score = (100.0 - density * PENALTY).round().clamp(0.0, 100.0) as u8;

    let mut repeated: Vec<(&String, &usize)> = counts
        .iter()
        .filter(|(_, c)| **c > REPEAT_ALLOWANCE)
        .collect();
    // BTreeMap iteration is alphabetical, so the stable sort keeps ties ordered.
    repeated.sort_by(|a, b| b.1.cmp(a.1));

    let advice = (!repeated.is_empty()).then(|| {
        let examples: Vec<String> = repeated
            .iter()
            .take(MAX_EXAMPLES)
            .map(|(word, count)| format!("\"{word}\" ({count}×)"))
            .collect();
        format!(
            "Vary your wording; these words repeat across your bullet points: {}",
            examples.join(", ")
        )
    });

    CategoryScore { score, advice }
}
