pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::conversion::handlers as conversion;
use crate::extraction::handlers as extraction;
use crate::preview::handlers as preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé text → structured résumé
        .route("/api/v1/resumes/extract", post(extraction::handle_extract))
        // Résumé → site template data
        .route("/api/v1/sites/convert", post(conversion::handle_convert))
        // Built-in templates
        .route("/api/v1/templates", get(catalog::handle_list_templates))
        .route("/api/v1/templates/:id", get(catalog::handle_get_template))
        // Previews
        .route(
            "/api/v1/previews",
            post(preview::handle_preview).delete(preview::handle_clear),
        )
        .route("/api/v1/previews/stats", get(preview::handle_stats))
        .route(
            "/api/v1/previews/:fingerprint",
            delete(preview::handle_invalidate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::TemplateCatalog;
    use crate::config::Config;
    use crate::conversion::ResumeConverter;
    use crate::models::resume::Resume;
    use crate::models::site::RenderedAssets;
    use crate::models::template::Template;
    use crate::extraction::ResumeExtractor;
    use crate::preview::session::PreviewSessions;
    use crate::preview::worker::PreviewPipeline;
    use crate::preview::{self, PreviewConfig, SitePipeline};
    use crate::render::RenderError;

    fn state_with(pipeline: Arc<dyn PreviewPipeline>, config: Config) -> AppState {
        let (handle, _task) = preview::spawn(
            PreviewConfig {
                capacity: config.preview_cache_capacity,
                queue_depth: config.preview_queue_depth,
            },
            pipeline,
        );
        AppState {
            config,
            extractor: Arc::new(ResumeExtractor::default()),
            converter: ResumeConverter::default(),
            sessions: Arc::new(PreviewSessions::new(handle.clone())),
            preview: handle,
            catalog: Arc::new(TemplateCatalog::builtin()),
        }
    }

    fn app() -> Router {
        build_router(state_with(Arc::new(SitePipeline::default()), Config::default()))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(json) => Body::from(json.to_string()),
                None => Body::empty(),
            })
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn resume() -> Value {
        json!({
            "full_name": "Jane Doe",
            "title": "Software Engineer",
            "email": "jane@example.com",
            "summary": "Builds reliable systems.",
            "skills": ["Rust", "Go"]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_extract_then_convert() {
        let raw = "Jane Doe\nSoftware Engineer\njane@example.com\n\nSkills\nRust, Go, Python";
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/resumes/extract",
            Some(json!({ "raw_text": raw })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["full_name"], "Jane Doe");
        assert_eq!(body["suggested_profile"], "developer");

        let (status, data) = send(
            app(),
            Method::POST,
            "/api/v1/sites/convert",
            Some(json!({ "resume": body["resume"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["profile_type"], "developer");
        assert_eq!(data["content"]["skills"], json!(["Rust", "Go", "Python"]));
    }

    #[tokio::test]
    async fn test_extract_rejects_blank_text() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/resumes/extract",
            Some(json!({ "raw_text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_template_catalog_routes() {
        let (status, body) = send(app(), Method::GET, "/api/v1/templates", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(2));

        let (status, body) =
            send(app(), Method::GET, "/api/v1/templates/portfolio-blocks", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["body"]["model"], "blocks");

        let (status, _) = send(app(), Method::GET, "/api/v1/templates/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_caches_and_invalidates() {
        let app = app();
        let request = json!({ "resume": resume(), "template_id": "developer-classic" });

        let (status, first) =
            send(app.clone(), Method::POST, "/api/v1/previews", Some(request.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["cached"], false);
        assert!(first["assets"]["html"].as_str().unwrap().contains("Jane Doe"));

        let (_, second) = send(app.clone(), Method::POST, "/api/v1/previews", Some(request)).await;
        assert_eq!(second["cached"], true);
        assert_eq!(first["assets"], second["assets"]);

        let (_, stats) = send(app.clone(), Method::GET, "/api/v1/previews/stats", None).await;
        assert_eq!(stats["hits"], 1);
        assert_eq!(stats["entries"], 1);

        let uri = format!("/api/v1/previews/{}", first["fingerprint"].as_str().unwrap());
        let (status, _) = send(app.clone(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_request_validation() {
        let (status, _) = send(
            app(),
            Method::POST,
            "/api/v1/previews",
            Some(json!({ "resume": resume() })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            app(),
            Method::POST,
            "/api/v1/previews",
            Some(json!({ "resume": resume(), "template_id": "missing" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app(), Method::DELETE, "/api/v1/previews/xyz", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_failure_is_422_with_message() {
        let template = json!({
            "id": "empty",
            "name": "Empty",
            "body": { "model": "blocks", "sections": [] }
        });
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/previews",
            Some(json!({ "resume": resume(), "template": template })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["message"],
            "Template 'empty' has no content to render"
        );
    }

    #[tokio::test]
    async fn test_clear_empties_preview_cache() {
        let app = app();
        let request = json!({ "resume": resume(), "template_id": "developer-classic" });
        send(app.clone(), Method::POST, "/api/v1/previews", Some(request)).await;

        let (status, body) = send(app.clone(), Method::DELETE, "/api/v1/previews", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cleared"], 1);

        let (_, stats) = send(app, Method::GET, "/api/v1/previews/stats", None).await;
        assert_eq!(stats["entries"], 0);
    }

    #[tokio::test]
    async fn test_extract_picks_creative_vocabulary_from_title() {
        let raw = "Ada Voss\nConcert Pianist\nada@example.com\n\nPerformances\nRecital, Carnegie Hall 2021";
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/resumes/extract",
            Some(json!({ "raw_text": raw })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggested_profile"], "musician");
        assert_eq!(body["sections"]["performances"], "Recital, Carnegie Hall 2021");

        let (_, forced) = send(
            app(),
            Method::POST,
            "/api/v1/resumes/extract",
            Some(json!({ "raw_text": raw, "creative": false })),
        )
        .await;
        assert!(forced["sections"].get("performances").is_none());
    }

    /// Slow only for the named résumé so a later request overtakes it.
    struct SlowFor(&'static str);

    impl PreviewPipeline for SlowFor {
        fn generate(&self, resume: &Resume, _: &Template) -> Result<RenderedAssets, RenderError> {
            if resume.full_name == self.0 {
                std::thread::sleep(Duration::from_millis(300));
            }
            Ok(RenderedAssets::default())
        }
    }

    #[tokio::test]
    async fn test_superseded_session_request_is_409() {
        let app = build_router(state_with(Arc::new(SlowFor("Old Draft")), Config::default()));
        let body = |name: &str| {
            json!({
                "resume": { "full_name": name },
                "template_id": "developer-classic",
                "session_id": "editor-1"
            })
        };

        let stale = tokio::spawn(send(app.clone(), Method::POST, "/api/v1/previews", Some(body("Old Draft"))));
        tokio::time::sleep(Duration::from_millis(50)).await;
        let (status, _) = send(app, Method::POST, "/api/v1/previews", Some(body("New Draft"))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = stale.await.unwrap();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "PREVIEW_SUPERSEDED");
    }

    struct Stalled;

    impl PreviewPipeline for Stalled {
        fn generate(&self, _: &Resume, _: &Template) -> Result<RenderedAssets, RenderError> {
            std::thread::sleep(Duration::from_millis(1500));
            Ok(RenderedAssets::default())
        }
    }

    #[tokio::test]
    async fn test_slow_preview_times_out() {
        let config = Config {
            preview_timeout: Duration::from_secs(1),
            ..Config::default()
        };
        let app = build_router(state_with(Arc::new(Stalled), config));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/previews",
            Some(json!({ "resume": resume(), "template_id": "developer-classic" })),
        )
        .await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"]["code"], "PREVIEW_TIMEOUT");
    }

    #[tokio::test]
    async fn test_stopped_service_is_503() {
        let state = state_with(Arc::new(SitePipeline::default()), Config::default());
        state.preview.shutdown().await.unwrap();
        let (status, _) = send(build_router(state), Method::GET, "/api/v1/previews/stats", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
