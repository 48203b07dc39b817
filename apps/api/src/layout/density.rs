//! Content Density Estimator — measures how much text a resume carries and
//! classifies it into a coarse density class.
//!
//! Lengths are counted in UTF-16 code units so the numbers line up with what the
//! browser-side renderer measures for the same strings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ResumeDocument;

/// Below this many units the content is short enough to spread out.
pub const EXPANDED_BELOW: usize = 1200;
/// Above this many units the content needs a compact baseline.
pub const COMPACT_ABOVE: usize = 2200;

/// Coarse classification of how much text a resume contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityClass {
    Compact,
    Normal,
    Expanded,
}

impl DensityClass {
    /// Applies the two character thresholds to a total content length.
    pub fn from_length(total: usize) -> Self {
        if total < EXPANDED_BELOW {
            DensityClass::Expanded
        } else if total > COMPACT_ABOVE {
            DensityClass::Compact
        } else {
            DensityClass::Normal
        }
    }

    pub fn classify(doc: &ResumeDocument) -> Self {
        Self::from_length(estimate_content_length(doc))
    }
}

/// Length of `s` in UTF-16 code units.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn opt_len(s: Option<&String>) -> usize {
    s.map_or(0, |v| utf16_len(v))
}

/// Sums the raw length of every textual field in the document.
///
/// No trimming or normalization is applied.
pub fn estimate_content_length(doc: &ResumeDocument) -> usize {
    let mut total = 0;

    if let Some(header) = &doc.header {
        total += utf16_len(&header.name);
        total += utf16_len(&header.contact);
        total += opt_len(header.address.as_ref());
    }

    total += utf16_len(&doc.summary);

    for exp in &doc.experience {
        total += utf16_len(&exp.company)
            + utf16_len(&exp.location)
            + utf16_len(&exp.dates)
            + utf16_len(&exp.title);
        total += exp.bullets.iter().map(|b| utf16_len(b)).sum::<usize>();
    }

    for edu in &doc.education {
        total += utf16_len(&edu.school)
            + utf16_len(&edu.location)
            + utf16_len(&edu.dates)
            + utf16_len(&edu.degree);
        total += edu.bullets.iter().map(|b| utf16_len(b)).sum::<usize>();
        total += opt_len(edu.minor.as_ref());
        total += opt_len(edu.details.as_ref());
    }

    let info = &doc.additional;
    total += opt_len(info.technical_skills.as_ref());
    total += opt_len(info.languages.as_ref());
    total += opt_len(info.certifications.as_ref());
    total += opt_len(info.awards.as_ref());

    debug!(content_length = total, "estimated resume content length");
    total
}
