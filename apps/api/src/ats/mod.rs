//! ATS Scoring Engine — heuristic ATS-friendliness score for a resume.
//!
//! Four independent sub-scores (0–100), each a pure function of the document:
//! - parse rate: required sections present and well-formed
//! - quantifying impact: share of experience bullets with a measurable outcome
//! - repetition: reuse of the same non-stopword terms across bullets
//! - spelling/grammar: typo and style heuristics
//!
//! `total_score` is their weighted average. Default weights are equal (0.25
//! each). Feedback holds one advisory line per category below the "good"
//! threshold, in category order.

pub mod impact;
pub mod parse_rate;
pub mod repetition;
pub mod spelling;
pub mod text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ResumeDocument;

/// Categories scoring below this get a feedback line.
pub const GOOD_SCORE_THRESHOLD: u8 = 80;
const FAIR_SCORE_THRESHOLD: u8 = 60;

/// Result of a single sub-score. `advice` names the deficiency, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub score: u8,
    pub advice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsWeights {
    pub parse_rate: f32,
    pub quantifying_impact: f32,
    pub repetition: f32,
    pub spelling_grammar: f32,
}

impl Default for AtsWeights {
    fn default() -> Self {
        Self {
            parse_rate: 0.25,
            quantifying_impact: 0.25,
            repetition: 0.25,
            spelling_grammar: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsCategories {
    pub parse_rate: u8,
    pub quantifying_impact: u8,
    pub repetition: u8,
    pub spelling_grammar: u8,
}

/// Display band for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsRating {
    Strong,
    Fair,
    Weak,
}

impl AtsRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= GOOD_SCORE_THRESHOLD => AtsRating::Strong,
            s if s >= FAIR_SCORE_THRESHOLD => AtsRating::Fair,
            _ => AtsRating::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    pub total_score: u8,
    pub rating: AtsRating,
    pub categories: AtsCategories,
    pub feedback: Vec<String>,
}

/// Scores `doc` with the default (equal) category weights.
pub fn calculate_ats_score(doc: &ResumeDocument) -> AtsScoreResult {
    calculate_ats_score_with(doc, &AtsWeights::default())
}

pub fn calculate_ats_score_with(doc: &ResumeDocument, weights: &AtsWeights) -> AtsScoreResult {
    let parse = parse_rate::score(doc);
    let impact = impact::score(doc);
    let repetition = repetition::score(doc);
    let spelling = spelling::score(doc);

    let weighted = [
        (parse.score, weights.parse_rate),
        (impact.score, weights.quantifying_impact),
        (repetition.score, weights.repetition),
        (spelling.score, weights.spelling_grammar),
    ];
    let weight_sum: f32 = weighted.iter().map(|(_, w)| w.max(0.0)).sum();
    let total_score = if weight_sum > 0.0 {
        let sum: f32 = weighted
            .iter()
            .map(|(score, w)| *score as f32 * w.max(0.0))
            .sum();
        (sum / weight_sum).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    let categories = AtsCategories {
        parse_rate: parse.score,
        quantifying_impact: impact.score,
        repetition: repetition.score,
        spelling_grammar: spelling.score,
    };

    let feedback: Vec<String> = [parse, impact, repetition, spelling]
        .into_iter()
        .filter(|c| c.score < GOOD_SCORE_THRESHOLD)
        .filter_map(|c| c.advice)
        .collect();

    debug!(total_score, ?categories, "calculated ATS score");

    AtsScoreResult {
        total_score,
        rating: AtsRating::from_score(total_score),
        categories,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::AdditionalInfo;
    use crate::models::{EducationEntry, ExperienceEntry, ResumeHeader};

    fn make_strong() -> ResumeDocument {
        ResumeDocument {
            header: Some(ResumeHeader {
                name: "Jane Doe".to_string(),
                contact: "Toronto, ON | jane@example.com | 555-123-4567".to_string(),
                address: None,
            }),
            summary: "Backend engineer focused on payments infrastructure.".to_string(),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                location: "Toronto, ON".to_string(),
                dates: "2020 – Present".to_string(),
                title: "Senior Engineer".to_string(),
                bullets: vec![
                    "Cut settlement latency by 40% with a streaming ledger".to_string(),
                    "Grew checkout conversion 12% through retry tuning".to_string(),
                    "Saved $300k yearly by consolidating vendor gateways".to_string(),
                ],
            }],
            education: vec![EducationEntry {
                school: "University of Waterloo".to_string(),
                degree: "BMath, Computer Science".to_string(),
                ..Default::default()
            }],
            additional: AdditionalInfo {
                technical_skills: Some("Rust, Go, Postgres, Kafka".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_strong_resume_has_no_feedback() {
        let result = calculate_ats_score(&make_strong());
        assert_eq!(result.categories.parse_rate, 100);
        assert_eq!(result.categories.quantifying_impact, 100);
        assert_eq!(result.categories.repetition, 100);
        assert_eq!(result.categories.spelling_grammar, 100);
        assert_eq!(result.total_score, 100);
        assert_eq!(result.rating, AtsRating::Strong);
        assert!(result.feedback.is_empty(), "{:?}", result.feedback);
    }

    #[test]
    fn test_empty_resume_is_bounded_with_feedback() {
        let doc = ResumeDocument {
            header: Some(ResumeHeader {
                name: "Jane Doe".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = calculate_ats_score(&doc);
        assert!(result.total_score <= 100);
        assert_eq!(result.categories.quantifying_impact, 0);
        assert_eq!(result.rating, AtsRating::Weak);
        assert_eq!(result.feedback.len(), 4);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("Add experience entries")));
    }

    #[test]
    fn test_experience_without_bullets_scores_zero_on_text_categories() {
        let mut doc = make_strong();
        doc.experience[0].bullets = vec![];
        let result = calculate_ats_score(&doc);
        assert_eq!(result.categories.parse_rate, 85);
        assert_eq!(result.categories.quantifying_impact, 0);
        assert_eq!(result.categories.repetition, 0);
        assert_eq!(result.categories.spelling_grammar, 0);
        assert_eq!(result.total_score, 21);
        assert_eq!(result.rating, AtsRating::Weak);
        assert!(result.feedback.iter().any(|f| f.contains("keyword variety")));
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("spelling and grammar can be checked")));
    }

    #[test]
    fn test_completely_default_document_does_not_panic() {
        let result = calculate_ats_score(&ResumeDocument::default());
        assert_eq!(result.total_score, 0);
        assert!(!result.feedback.is_empty());
    }

    #[test]
    fn test_unquantified_bullet_is_flagged() {
        let mut doc = make_strong();
        doc.experience[0].bullets = vec![
            "Managed team of 5".to_string(),
            "Increased revenue by 20%".to_string(),
            "Helped with various tasks".to_string(),
        ];
        let result = calculate_ats_score(&doc);
        assert_eq!(result.categories.quantifying_impact, 67);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("quantifiable") && f.contains("Helped with various tasks")));

        let mut vague = doc.clone();
        vague.experience[0].bullets = vec![
            "Oversaw team operations".to_string(),
            "Handled revenue reporting".to_string(),
            "Helped with various tasks".to_string(),
        ];
        let vague_result = calculate_ats_score(&vague);
        assert!(result.categories.quantifying_impact > vague_result.categories.quantifying_impact);
    }

    #[test]
    fn test_feedback_follows_category_order() {
        let doc = ResumeDocument {
            summary: "teh".to_string(),
            ..Default::default()
        };
        let result = calculate_ats_score(&doc);
        assert!(result.feedback[0].starts_with("Complete the sections"));
        assert!(result.feedback[1].starts_with("Add experience entries"));
    }

    #[test]
    fn test_custom_weights_shift_total() {
        let mut doc = make_strong();
        doc.summary = String::new(); // parse rate 80, rest unchanged
        let only_parse = AtsWeights {
            parse_rate: 1.0,
            quantifying_impact: 0.0,
            repetition: 0.0,
            spelling_grammar: 0.0,
        };
        assert_eq!(calculate_ats_score_with(&doc, &only_parse).total_score, 80);

        let zero = AtsWeights {
            parse_rate: 0.0,
            quantifying_impact: 0.0,
            repetition: 0.0,
            spelling_grammar: 0.0,
        };
        assert_eq!(calculate_ats_score_with(&doc, &zero).total_score, 0);
    }

    #[test]
    fn test_is_deterministic() {
        let doc = make_strong();
        let first = calculate_ats_score(&doc);
        for _ in 0..3 {
            assert_eq!(calculate_ats_score(&doc), first);
        }
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(AtsRating::from_score(100), AtsRating::Strong);
        assert_eq!(AtsRating::from_score(80), AtsRating::Strong);
        assert_eq!(AtsRating::from_score(79), AtsRating::Fair);
        assert_eq!(AtsRating::from_score(60), AtsRating::Fair);
        assert_eq!(AtsRating::from_score(59), AtsRating::Weak);
    }
}
