//! Contact-line assembly for the resume header.
//!
//! Contact and address segments are split on pipe, bullet and middle-dot
//! delimiters, whitespace-normalized, and re-joined with a bullet separator
//! padded by non-breaking spaces. Commas are never delimiters, in the contact
//! or the address: they separate the parts of a single place ("Toronto, ON",
//! "12 Main St, Springfield") that belong in one segment. Within a segment the
//! space after a comma becomes non-breaking so the place never wraps.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::layout::density::utf16_len;
use crate::layout::typography::Typography;
use crate::models::ResumeHeader;

pub const NBSP: char = '\u{00A0}';
/// Separator placed between contact segments.
pub const SEPARATOR: &str = "\u{00A0}\u{2022}\u{00A0}";

/// Lines longer than this get a smaller font and tighter tracking.
pub const LONG_CONTACT_LINE: usize = 80;
const FONT_STEP_PT: f32 = 0.5;
const CONDENSED_LETTER_SPACING_PT: f32 = -0.2;

/// The assembled contact line plus its local typography override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLine {
    pub text: String,
    pub font_size_pt: f32,
    pub letter_spacing_pt: f32,
    /// True when the long-line override was applied.
    pub condensed: bool,
}

fn delimiter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[|\u{2022}\u{00B7}]").expect("static regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Splits contact and address into trimmed, whitespace-collapsed segments.
/// Empty segments are dropped.
pub fn contact_segments(header: &ResumeHeader) -> Vec<String> {
    std::iter::once(header.contact.as_str())
        .chain(header.address.as_deref())
        .flat_map(|field| delimiter_re().split(field))
        .map(|segment| whitespace_re().replace_all(segment.trim(), " ").into_owned())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Joins the header's contact segments into a single non-breaking line.
pub fn format_contact_text(header: &ResumeHeader) -> String {
    contact_segments(header)
        .join(SEPARATOR)
        .replace(", ", &format!(",{NBSP}"))
}

/// Builds the contact line and applies the long-line override on top of the
/// page-wide typography.
pub fn assemble_contact_line(header: &ResumeHeader, typography: &Typography) -> ContactLine {
    let text = format_contact_text(header);
    let condensed = utf16_len(&text) > LONG_CONTACT_LINE;

    let (font_size_pt, letter_spacing_pt) = if condensed {
        (
            typography.contact_font_pt - FONT_STEP_PT,
            CONDENSED_LETTER_SPACING_PT,
        )
    } else {
        (typography.contact_font_pt, 0.0)
    };

    ContactLine {
        text,
        font_size_pt,
        letter_spacing_pt,
        condensed,
    }
}
