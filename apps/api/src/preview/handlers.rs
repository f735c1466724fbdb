use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::template::Template;
use crate::preview::{CacheStats, Fingerprint, PreviewOutcome};
use crate::state::AppState;

/// Exactly one of `template` or `template_id` must be given.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub resume: Resume,
    #[serde(default)]
    pub template: Option<Template>,
    #[serde(default)]
    pub template_id: Option<String>,
    /// Editor session. A newer request in the same session answers older
    /// in-flight ones with 409.
    #[serde(default)]
    pub session_id: Option<String>,
}

fn resolve_template(state: &AppState, req: &mut PreviewRequest) -> Result<Template, AppError> {
    match (req.template.take(), req.template_id.as_deref()) {
        (Some(template), None) => Ok(template),
        (None, Some(id)) => state
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found"))),
        (Some(_), Some(_)) => Err(AppError::Validation(
            "Provide either template or template_id, not both".to_string(),
        )),
        (None, None) => Err(AppError::Validation(
            "One of template or template_id is required".to_string(),
        )),
    }
}

/// POST /api/v1/previews
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(mut req): Json<PreviewRequest>,
) -> Result<Json<PreviewOutcome>, AppError> {
    let template = resolve_template(&state, &mut req)?;
    let timeout = state.config.preview_timeout;

    let outcome = match req.session_id.as_deref().map(str::trim) {
        Some("") => {
            return Err(AppError::Validation("session_id must not be empty".to_string()));
        }
        Some(id) => {
            let session = state.sessions.session(id).await;
            tokio::time::timeout(timeout, session.request(req.resume, template))
                .await
                .map_err(|_| AppError::Timeout(timeout.as_secs()))??
                .ok_or_else(|| {
                    AppError::Conflict(format!("Preview superseded by a newer request in session '{id}'"))
                })?
        }
        None => tokio::time::timeout(timeout, state.preview.render(req.resume, template))
            .await
            .map_err(|_| AppError::Timeout(timeout.as_secs()))??,
    };

    Ok(Json(outcome))
}

/// DELETE /api/v1/previews
pub async fn handle_clear(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cleared = state.preview.clear().await?;
    Ok(Json(json!({ "cleared": cleared })))
}

/// DELETE /api/v1/previews/:fingerprint
pub async fn handle_invalidate(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<StatusCode, AppError> {
    let fingerprint = Fingerprint::parse(&raw)
        .ok_or_else(|| AppError::Validation(format!("'{raw}' is not a preview fingerprint")))?;

    if !state.preview.invalidate(fingerprint).await? {
        return Err(AppError::NotFound(format!("No cached preview for '{raw}'")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/previews/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<CacheStats>, AppError> {
    Ok(Json(state.preview.stats().await?))
}
