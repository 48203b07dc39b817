// Resume export: plain text and a JSON envelope. PDF emission belongs to the
// document renderer and consumes `LayoutParameters` instead.

pub mod text;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;

pub use text::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ExportFormat::Text),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// JSON export wrapper, stamped with the export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonExport {
    pub exported_at: DateTime<Utc>,
    pub resume: ResumeDocument,
}

/// Pretty-printed JSON export of `doc`.
pub fn render_json(doc: &ResumeDocument, exported_at: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonExport {
        exported_at,
        resume: doc.clone(),
    })
}
