use std::sync::Arc;

use crate::catalog::TemplateCatalog;
use crate::config::Config;
use crate::conversion::ResumeConverter;
use crate::extraction::ResumeExtractor;
use crate::preview::session::PreviewSessions;
use crate::preview::PreviewHandle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: Arc<ResumeExtractor>,
    pub converter: ResumeConverter,
    /// Handle to the preview orchestrator task; cloning shares the same cache.
    pub preview: PreviewHandle,
    pub sessions: Arc<PreviewSessions>,
    pub catalog: Arc<TemplateCatalog>,
}
