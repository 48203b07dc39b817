use serde::{Deserialize, Serialize};

/// Canonical structured resume, as produced by the rewrite step and consumed by
/// the layout and ATS pipelines.
///
/// Every field defaults when missing so a partially-filled AI response still
/// deserializes; the only hard requirement (a header with a name) is enforced by
/// the layout step, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub header: Option<ResumeHeader>,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub additional: AdditionalInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeHeader {
    pub name: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub location: String,
    pub dates: String,
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub location: String,
    pub dates: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

/// Free-form "additional information" block. Each field is a single line of
/// comma-separated items as written by the rewrite step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
}

impl AdditionalInfo {
    /// The four fields in render order, paired with their display labels.
    pub fn labeled_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("Technical Skills", self.technical_skills.as_deref()),
            ("Languages", self.languages.as_deref()),
            ("Certifications", self.certifications.as_deref()),
            ("Awards", self.awards.as_deref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.labeled_fields()
            .iter()
            .all(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
    }
}

impl ResumeDocument {
    /// All experience bullets in document order.
    pub fn experience_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets.iter().map(String::as_str))
    }

    /// All bullets (experience first, then education) in document order.
    pub fn all_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience_bullets().chain(
            self.education
                .iter()
                .flat_map(|e| e.bullets.iter().map(String::as_str)),
        )
    }
}
