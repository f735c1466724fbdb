use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::site::{ProfileType, StyleOverrides, TemplateData};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub resume: Resume,
    /// Detected from the résumé title when absent.
    #[serde(default)]
    pub profile_type: Option<ProfileType>,
    #[serde(default)]
    pub overrides: StyleOverrides,
}

/// POST /api/v1/sites/convert
pub async fn handle_convert(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<TemplateData>, AppError> {
    let profile = req
        .profile_type
        .unwrap_or_else(|| ProfileType::detect(&req.resume.title));
    let data = state.converter.convert(&req.resume, profile, &req.overrides);
    Ok(Json(data))
}
