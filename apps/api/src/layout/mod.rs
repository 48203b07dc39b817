// Single-page layout planning for AI-rewritten resumes.
// Implements: content density estimation, line estimation + fit level,
// the typography table, and contact-line assembly.

pub mod contact;
pub mod density;
pub mod lines;
pub mod typography;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{ResumeDocument, ResumeHeader};

pub use contact::ContactLine;
pub use density::{estimate_content_length, DensityClass};
pub use lines::{estimate_total_lines, FitLevel};
pub use typography::Typography;

/// The resume cannot be laid out. Never defaulted around: callers surface it as
/// an "invalid resume data" state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("resume has no header")]
    MissingHeader,

    #[error("resume header has no name")]
    MissingName,
}

/// Everything the document renderer needs to place one resume on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    pub content_length: usize,
    pub density: DensityClass,
    pub estimated_total_lines: usize,
    pub fit_level: FitLevel,
    pub typography: Typography,
    pub contact_line: ContactLine,
}

/// Returns the header if it is present and carries a non-empty name.
pub fn require_header(doc: &ResumeDocument) -> Result<&ResumeHeader, LayoutError> {
    let header = doc.header.as_ref().ok_or(LayoutError::MissingHeader)?;
    if header.name.trim().is_empty() {
        return Err(LayoutError::MissingName);
    }
    Ok(header)
}

/// Derives layout parameters for `doc` under an already-computed density class.
///
/// Fails before any estimation when the header or name is missing.
pub fn compute_layout(
    doc: &ResumeDocument,
    density: DensityClass,
) -> Result<LayoutParameters, LayoutError> {
    let header = require_header(doc)?;

    let estimated_total_lines = estimate_total_lines(doc);
    let fit_level = FitLevel::from_estimated_lines(estimated_total_lines);
    let typography = typography::typography_for(density, fit_level);
    let contact_line = contact::assemble_contact_line(header, &typography);

    debug!(
        ?density,
        ?fit_level,
        estimated_total_lines,
        condensed_contact = contact_line.condensed,
        "computed resume layout"
    );

    Ok(LayoutParameters {
        content_length: estimate_content_length(doc),
        density,
        estimated_total_lines,
        fit_level,
        typography,
        contact_line,
    })
}

/// Classifies density and computes the layout in one call.
pub fn plan_layout(doc: &ResumeDocument) -> Result<LayoutParameters, LayoutError> {
    require_header(doc)?;
    let density = DensityClass::classify(doc);
    compute_layout(doc, density)
}
