//! Plain-text rendering of a resume. Single column, no tables, ASCII separators,
//! so the output pastes cleanly into ATS web forms.

use crate::layout::contact::contact_segments;
use crate::layout::{require_header, LayoutError};
use crate::models::{EducationEntry, ExperienceEntry, ResumeDocument};

const PLAIN_SEPARATOR: &str = " | ";

/// Joins the non-empty parts with `sep`.
fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn push_bullets(out: &mut String, bullets: &[String]) {
    for bullet in bullets.iter().map(|b| b.trim()).filter(|b| !b.is_empty()) {
        out.push_str("- ");
        out.push_str(bullet);
        out.push('\n');
    }
}

fn push_section_heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
}

fn push_experience(out: &mut String, entry: &ExperienceEntry) {
    let first = join_present(&[&entry.company, &entry.location], ", ");
    let second = join_present(&[&entry.title, &entry.dates], PLAIN_SEPARATOR);
    for line in [first, second] {
        if !line.is_empty() {
            out.push_str(&line);
            out.push('\n');
        }
    }
    push_bullets(out, &entry.bullets);
}

fn push_education(out: &mut String, entry: &EducationEntry) {
    let first = join_present(&[&entry.school, &entry.location], ", ");
    let second = join_present(&[&entry.degree, &entry.dates], PLAIN_SEPARATOR);
    for line in [first, second] {
        if !line.is_empty() {
            out.push_str(&line);
            out.push('\n');
        }
    }
    if let Some(minor) = entry.minor.as_deref().filter(|m| !m.trim().is_empty()) {
        out.push_str(&format!("Minor: {}\n", minor.trim()));
    }
    if let Some(details) = entry.details.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(details.trim());
        out.push('\n');
    }
    push_bullets(out, &entry.bullets);
}

/// Renders `doc` as plain text. Requires a header with a name, like the layout.
pub fn render_text(doc: &ResumeDocument) -> Result<String, LayoutError> {
    let header = require_header(doc)?;
    let mut out = String::new();

    out.push_str(header.name.trim());
    out.push('\n');
    let contact = contact_segments(header).join(PLAIN_SEPARATOR);
    if !contact.is_empty() {
        out.push_str(&contact);
        out.push('\n');
    }

    if !doc.summary.trim().is_empty() {
        push_section_heading(&mut out, "SUMMARY");
        out.push_str(doc.summary.trim());
        out.push('\n');
    }

    if !doc.experience.is_empty() {
        push_section_heading(&mut out, "EXPERIENCE");
        for (i, entry) in doc.experience.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            push_experience(&mut out, entry);
        }
    }

    if !doc.education.is_empty() {
        push_section_heading(&mut out, "EDUCATION");
        for (i, entry) in doc.education.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            push_education(&mut out, entry);
        }
    }

    if !doc.additional.is_empty() {
        push_section_heading(&mut out, "ADDITIONAL INFORMATION");
        for (label, value) in doc.additional.labeled_fields() {
            if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                out.push_str(&format!("{label}: {value}\n"));
            }
        }
    }

    Ok(out)
}
