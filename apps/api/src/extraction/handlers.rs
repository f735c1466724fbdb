use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::sections::{HeadingVocabulary, SectionMap};
use crate::models::resume::Resume;
use crate::models::site::ProfileType;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub raw_text: String,
    /// Forces the creative (or standard) heading vocabulary. When absent the
    /// vocabulary follows the profile detected from the résumé title.
    #[serde(default)]
    pub creative: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub resume: Resume,
    pub sections: SectionMap,
    pub suggested_profile: ProfileType,
}

/// POST /api/v1/resumes/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text must not be empty".to_string()));
    }

    let extractor = state.extractor.clone();
    let response = tokio::task::spawn_blocking(move || {
        let vocabulary = match req.creative {
            Some(true) => HeadingVocabulary::creative(),
            _ => HeadingVocabulary::standard(),
        };
        let mut extraction = extractor.extract(&req.raw_text, &vocabulary);
        let suggested_profile = ProfileType::detect(&extraction.resume.title);

        // The header reads the same under either vocabulary, so the title
        // detected from the standard pass picks the final one.
        if req.creative.is_none() && suggested_profile.is_creative() {
            extraction = extractor.extract_for_profile(&req.raw_text, suggested_profile);
        }

        ExtractResponse {
            resume: extraction.resume,
            sections: extraction.sections,
            suggested_profile,
        }
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(response))
}
