//! Parse rate — structural completeness of the sections an ATS expects to find.

use crate::ats::CategoryScore;
use crate::models::ResumeDocument;

const NAME_POINTS: f32 = 20.0;
const CONTACT_POINTS: f32 = 15.0;
const SUMMARY_POINTS: f32 = 20.0;
const EXPERIENCE_POINTS: f32 = 15.0;
const BULLET_POINTS: f32 = 15.0;
const EDUCATION_POINTS: f32 = 15.0;

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn score(doc: &ResumeDocument) -> CategoryScore {
    let mut points = 0.0_f32;
    let mut missing: Vec<&str> = Vec::new();

    let header = doc.header.as_ref();
    if header.is_some_and(|h| has_text(&h.name)) {
        points += NAME_POINTS;
    } else {
        missing.push("your name");
    }
    if header.is_some_and(|h| has_text(&h.contact)) {
        points += CONTACT_POINTS;
    } else {
        missing.push("contact details");
    }

    if has_text(&doc.summary) {
        points += SUMMARY_POINTS;
    } else {
        missing.push("a professional summary");
    }

    if doc.experience.is_empty() {
        missing.push("an experience entry");
        missing.push("experience bullet points");
    } else {
        points += EXPERIENCE_POINTS;
        let with_bullets = doc
            .experience
            .iter()
            .filter(|e| e.bullets.iter().any(|b| has_text(b)))
            .count();
        points += BULLET_POINTS * with_bullets as f32 / doc.experience.len() as f32;
        if with_bullets < doc.experience.len() {
            missing.push("bullet points for every experience entry");
        }
    }

    if doc
        .education
        .iter()
        .any(|e| has_text(&e.school) || has_text(&e.degree))
    {
        points += EDUCATION_POINTS;
    } else {
        missing.push("an education entry");
    }

    let advice = (!missing.is_empty()).then(|| {
        format!(
            "Complete the sections ATS parsers look for: add {}",
            missing.join(", ")
        )
    });

    CategoryScore {
        score: points.round().clamp(0.0, 100.0) as u8,
        advice,
    }
}
