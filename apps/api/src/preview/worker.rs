//! Isolated render execution.
//!
//! Each request runs on tokio's blocking pool and answers with exactly one
//! terminal [`WorkerResponse`]. Pipeline errors and panics are both turned
//! into `Failed`; nothing escapes the worker.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

use crate::conversion::ResumeConverter;
use crate::models::resume::Resume;
use crate::models::site::RenderedAssets;
use crate::models::template::Template;
use crate::preview::fingerprint::Fingerprint;
use crate::render::{render, RenderError};

/// Whatever turns a `(Resume, Template)` pair into final assets.
pub trait PreviewPipeline: Send + Sync + 'static {
    fn generate(&self, resume: &Resume, template: &Template) -> Result<RenderedAssets, RenderError>;
}

/// Conversion followed by rendering. The template supplies the profile type
/// and style overrides.
#[derive(Clone, Default)]
pub struct SitePipeline {
    converter: ResumeConverter,
}

impl SitePipeline {
    pub fn new(converter: ResumeConverter) -> Self {
        Self { converter }
    }
}

impl PreviewPipeline for SitePipeline {
    fn generate(&self, resume: &Resume, template: &Template) -> Result<RenderedAssets, RenderError> {
        let data = self
            .converter
            .convert(resume, template.profile_type, &template.overrides);
        render(template, resume, &data)
    }
}

#[derive(Debug)]
pub struct WorkerRequest {
    pub request_id: Uuid,
    pub fingerprint: Fingerprint,
    pub resume: Resume,
    pub template: Template,
}

#[derive(Debug)]
pub enum WorkerResponse {
    PreviewGenerated {
        request_id: Uuid,
        fingerprint: Fingerprint,
        assets: RenderedAssets,
    },
    Failed {
        request_id: Uuid,
        fingerprint: Fingerprint,
        error: String,
    },
}

impl WorkerResponse {
    pub fn request_id(&self) -> Uuid {
        match self {
            WorkerResponse::PreviewGenerated { request_id, .. }
            | WorkerResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("preview worker panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("preview worker panicked: {s}")
    } else {
        "preview worker panicked".to_string()
    }
}

/// Runs the request synchronously and builds its single response.
pub fn execute(pipeline: &dyn PreviewPipeline, request: WorkerRequest) -> WorkerResponse {
    let WorkerRequest {
        request_id,
        fingerprint,
        resume,
        template,
    } = request;

    let outcome = catch_unwind(AssertUnwindSafe(|| pipeline.generate(&resume, &template)));
    match outcome {
        Ok(Ok(assets)) => WorkerResponse::PreviewGenerated {
            request_id,
            fingerprint,
            assets,
        },
        Ok(Err(e)) => WorkerResponse::Failed {
            request_id,
            fingerprint,
            error: e.to_string(),
        },
        Err(payload) => WorkerResponse::Failed {
            request_id,
            fingerprint,
            error: panic_message(payload),
        },
    }
}

/// Hands the request to the blocking pool; the response arrives on `replies`.
pub fn dispatch(
    pipeline: Arc<dyn PreviewPipeline>,
    request: WorkerRequest,
    replies: mpsc::UnboundedSender<WorkerResponse>,
) {
    tokio::task::spawn_blocking(move || {
        let response = execute(pipeline.as_ref(), request);
        if replies.send(response).is_err() {
            warn!("Preview orchestrator gone; dropping worker response");
        }
    });
}
