//! Axum route handlers exposing the layout, ATS and export pipeline.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::ats::{calculate_ats_score, AtsScoreResult};
use crate::errors::AppError;
use crate::export::{render_json, render_text, ExportFormat};
use crate::layout::{plan_layout, require_header, LayoutParameters};
use crate::models::ResumeDocument;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub layout: LayoutParameters,
    pub ats: AtsScoreResult,
}

/// POST /api/v1/resume/layout
///
/// Plans the single-page layout. 422 when the header or name is missing.
pub async fn handle_layout(
    Json(doc): Json<ResumeDocument>,
) -> Result<Json<LayoutParameters>, AppError> {
    let layout = plan_layout(&doc)?;
    Ok(Json(layout))
}

/// POST /api/v1/resume/ats-score
///
/// Scores the resume. Never fails on sparse content; the feedback explains gaps.
pub async fn handle_ats_score(Json(doc): Json<ResumeDocument>) -> Json<AtsScoreResult> {
    Json(calculate_ats_score(&doc))
}

/// POST /api/v1/resume/analyze
///
/// Layout and ATS score together, for the live preview.
pub async fn handle_analyze(
    Json(doc): Json<ResumeDocument>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let layout = plan_layout(&doc)?;
    let ats = calculate_ats_score(&doc);

    info!(
        density = ?layout.density,
        fit_level = layout.fit_level.as_u8(),
        ats_score = ats.total_score,
        "analyzed resume"
    );

    Ok(Json(AnalyzeResponse { layout, ats }))
}

/// POST /api/v1/resume/export/:format
///
/// Returns the resume as a downloadable `text` or `json` file.
pub async fn handle_export(
    Path(format): Path<String>,
    Json(doc): Json<ResumeDocument>,
) -> Result<Response, AppError> {
    let format = ExportFormat::parse(&format).ok_or_else(|| {
        AppError::Validation(format!("unsupported export format '{format}' (use text or json)"))
    })?;

    let body = match format {
        ExportFormat::Text => render_text(&doc)?,
        ExportFormat::Json => {
            require_header(&doc)?;
            render_json(&doc, Utc::now()).map_err(|e| AppError::Internal(e.into()))?
        }
    };

    let disposition = format!(
        "attachment; filename=\"resume.{}\"",
        format.file_extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
