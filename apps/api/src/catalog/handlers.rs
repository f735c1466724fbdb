use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::TemplateSummary;
use crate::errors::AppError;
use crate::models::template::Template;
use crate::state::AppState;

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(state.catalog.summaries())
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}
