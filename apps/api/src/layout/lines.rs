//! Rendered-line estimation and fit level assignment.
//!
//! The estimate is intentionally coarse: a fixed characters-per-line budget per
//! field kind, no font metrics. It only has to separate "fits comfortably" from
//! "needs compaction" on a single page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::density::utf16_len;
use crate::models::ResumeDocument;

/// Characters per line for prose (summary).
pub const PROSE_CHARS_PER_LINE: usize = 85;
/// Characters per line for bullets and detail rows.
pub const BULLET_CHARS_PER_LINE: usize = 80;
/// Characters per line for education details and additional information.
pub const DETAIL_CHARS_PER_LINE: usize = 90;

/// Fixed rows per experience/education entry (name/location row + title/dates row).
const ENTRY_HEADER_LINES: usize = 2;

const FIT_LEVEL_1_ABOVE: usize = 95;
const FIT_LEVEL_2_ABOVE: usize = 120;

/// How aggressively the layout must compact to stay on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FitLevel {
    Comfortable = 0,
    Tight = 1,
    Dense = 2,
}

impl FitLevel {
    pub fn from_estimated_lines(lines: usize) -> Self {
        if lines > FIT_LEVEL_2_ABOVE {
            FitLevel::Dense
        } else if lines > FIT_LEVEL_1_ABOVE {
            FitLevel::Tight
        } else {
            FitLevel::Comfortable
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<FitLevel> for u8 {
    fn from(level: FitLevel) -> u8 {
        level.as_u8()
    }
}

impl TryFrom<u8> for FitLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FitLevel::Comfortable),
            1 => Ok(FitLevel::Tight),
            2 => Ok(FitLevel::Dense),
            other => Err(format!("fit level must be 0, 1 or 2, got {other}")),
        }
    }
}

/// Estimates how many rendered lines `text` occupies.
///
/// `max(hard lines, ceil(length without newlines / chars_per_line))`. Empty text
/// occupies no lines.
pub fn estimate_lines(text: &str, chars_per_line: usize) -> usize {
    if text.is_empty() {
        return 0;
    }
    let hard_lines = text.split('\n').count();
    let flat_len: usize = text.split('\n').map(utf16_len).sum();
    let wrapped = flat_len.div_ceil(chars_per_line.max(1));
    hard_lines.max(wrapped)
}

fn estimate_opt(text: Option<&String>, chars_per_line: usize) -> usize {
    text.map_or(0, |t| estimate_lines(t, chars_per_line))
}

/// Sums the line estimate over every rendered block of the document.
pub fn estimate_total_lines(doc: &ResumeDocument) -> usize {
    let mut total = estimate_lines(&doc.summary, PROSE_CHARS_PER_LINE);

    for exp in &doc.experience {
        total += ENTRY_HEADER_LINES;
        total += exp
            .bullets
            .iter()
            .map(|b| estimate_lines(b, BULLET_CHARS_PER_LINE))
            .sum::<usize>();
    }

    for edu in &doc.education {
        total += ENTRY_HEADER_LINES;
        total += estimate_opt(edu.minor.as_ref(), DETAIL_CHARS_PER_LINE);
        total += estimate_opt(edu.details.as_ref(), DETAIL_CHARS_PER_LINE);
    }

    let info = &doc.additional;
    total += estimate_opt(info.technical_skills.as_ref(), DETAIL_CHARS_PER_LINE);
    total += estimate_opt(info.languages.as_ref(), DETAIL_CHARS_PER_LINE);
    total += estimate_opt(info.certifications.as_ref(), DETAIL_CHARS_PER_LINE);
    total += estimate_opt(info.awards.as_ref(), DETAIL_CHARS_PER_LINE);

    debug!(estimated_lines = total, "estimated rendered line count");
    total
}
