//! HTTP inbound adapter.
//!
//! Routes:
//! - `POST /generate-transcript` (bearer)
//! - `POST /generate-questions` (bearer)
//! - `POST /evaluate` (bearer)
//! - `GET /health`

mod auth;
mod evaluate;
mod extract;
mod health;
pub mod jwt;
mod questions;
mod transcripts;

use crate::application::VideoService;
use crate::ports::{extractor::SubtitleSource, llm::LanguageModel, repository::VideoRepository};
use axum::routing::{get, post};
use axum::{middleware, Router};
use jwt::TokenVerifier;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use evaluate::EvaluationRequest;
pub use questions::{QuestionRequest, QuestionResponse};
pub use transcripts::{TranscriptRequest, TranscriptResponse};

pub struct AppState<X, R, L> {
    pub service: Arc<VideoService<X, R, L>>,
    pub verifier: Arc<TokenVerifier>,
}

// Manual impl: the adapters themselves need not be Clone.
impl<X, R, L> Clone for AppState<X, R, L> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            verifier: self.verifier.clone(),
        }
    }
}

pub fn router<X, R, L>(state: AppState<X, R, L>) -> Router
where
    X: SubtitleSource + 'static,
    R: VideoRepository + 'static,
    L: LanguageModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/generate-transcript", post(transcripts::generate::<X, R, L>))
        .route("/generate-questions", post(questions::generate::<X, R, L>))
        .route("/evaluate", post(evaluate::evaluate::<X, R, L>))
        .route_layer(middleware::from_fn_with_state(
            state.verifier.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .merge(protected)
        .route("/health", get(health::health::<X, R, L>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::ContentBlock;
    use crate::domain::questions::{QuestionList, QuestionPair, QuestionSet};
    use crate::domain::transcript::Transcript;
    use crate::domain::video::VideoInfo;
    use crate::ports::extractor::{ExtractError, MockSubtitleSource};
    use crate::ports::llm::MockLanguageModel;
    use crate::ports::repository::MockVideoRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(
        extractor: MockSubtitleSource,
        repo: MockVideoRepository,
        model: MockLanguageModel,
    ) -> Router {
        router(AppState {
            service: Arc::new(VideoService::new(extractor, repo, model)),
            verifier: Arc::new(TokenVerifier::from_hex_secret(jwt::tests::SECRET_HEX).unwrap()),
        })
    }

    fn idle_app() -> Router {
        app(
            MockSubtitleSource::new(),
            MockVideoRepository::new(),
            MockLanguageModel::new(),
        )
    }

    fn token() -> String {
        jwt::tests::sign(json!({"sub": "instructor-7"}), jwt::tests::SECRET_HEX)
    }

    fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_forbidden() {
        let response = idle_app()
            .oneshot(post_json(
                "/generate-transcript",
                json!({"url": "https://www.youtube.com/watch?v=abc123"}),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await, json!({"detail": "Not authenticated"}));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_forbidden() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/generate-questions")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::from(json!({"id": "abc123"}).to_string()))
            .unwrap();

        let response = idle_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Invalid authentication credentials"})
        );
    }

    #[tokio::test]
    async fn test_invalid_token_unauthorized() {
        let response = idle_app()
            .oneshot(post_json("/evaluate", json!({"pairs": []}), Some("not.a.jwt")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
        let body = json_body(response).await;
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Invalid authentication credentials"));
    }

    #[tokio::test]
    async fn test_generate_transcript() {
        let mut extractor = MockSubtitleSource::new();
        extractor.expect_video_info().returning(|_| {
            let info = r#"{"id":"abc123","subtitles":{"en":[]}}"#;
            Ok(serde_json::from_str::<VideoInfo>(info).unwrap())
        });
        extractor.expect_fetch_subtitles().returning(|_, _| {
            Ok("WEBVTT\n\n1\n00:00:01.000 --> 00:00:02.000\nPlants need sunlight.\n".to_string())
        });

        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript().returning(|_| Ok(None));
        repo.expect_save_transcript().times(1).returning(|_| Ok(()));

        let response = app(extractor, repo, MockLanguageModel::new())
            .oneshot(post_json(
                "/generate-transcript",
                json!({"url": "https://www.youtube.com/watch?v=abc123"}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"id": "abc123", "transcript": "Plants need sunlight."})
        );
    }

    #[tokio::test]
    async fn test_generate_transcript_rejects_bad_url() {
        let response = idle_app()
            .oneshot(post_json(
                "/generate-transcript",
                json!({"url": "not a url"}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_field_rejected_as_detail() {
        let response = idle_app()
            .oneshot(post_json("/generate-questions", json!({"video": "abc123"}), Some(&token())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_generate_transcript_without_subtitles() {
        let mut extractor = MockSubtitleSource::new();
        extractor
            .expect_video_info()
            .returning(|_| Ok(serde_json::from_str::<VideoInfo>(r#"{"id":"abc123"}"#).unwrap()));
        extractor
            .expect_fetch_subtitles()
            .returning(|_, _| Err(ExtractError::NoSubtitles));

        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript().returning(|_| Ok(None));
        repo.expect_save_transcript().never();

        let response = app(extractor, repo, MockLanguageModel::new())
            .oneshot(post_json(
                "/generate-transcript",
                json!({"url": "https://www.youtube.com/watch?v=abc123"}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "No subtitles available (manual or auto-generated)"})
        );
    }

    #[tokio::test]
    async fn test_generate_questions_unknown_video() {
        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript().returning(|_| Ok(None));

        let response = app(MockSubtitleSource::new(), repo, MockLanguageModel::new())
            .oneshot(post_json(
                "/generate-questions",
                json!({"id": "missing"}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({"detail": "Transcript not found"}));
    }

    #[tokio::test]
    async fn test_generate_questions_from_cache() {
        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript().returning(|_| {
            Ok(Some(Transcript {
                video_id: "abc123".to_string(),
                transcript: "Plants need sunlight.".to_string(),
            }))
        });
        repo.expect_find_questions().returning(|_| {
            Ok(Some(QuestionSet {
                video_id: "abc123".to_string(),
                questions: QuestionList {
                    pairs: vec![QuestionPair {
                        question: "1. What do plants need?".to_string(),
                        topic: "Plants".to_string(),
                    }],
                },
            }))
        });
        let mut model = MockLanguageModel::new();
        model.expect_complete().never();

        let response = app(MockSubtitleSource::new(), repo, model)
            .oneshot(post_json(
                "/generate-questions",
                json!({"id": "abc123"}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "id": "abc123",
                "questions": {"pairs": [{"question": "1. What do plants need?", "topic": "Plants"}]}
            })
        );
    }

    #[tokio::test]
    async fn test_evaluate_returns_model_report() {
        let mut model = MockLanguageModel::new();
        model.expect_complete().returning(|_| {
            Ok(vec![ContentBlock::text(
                r#"Here you go: {"reports":[{"score":8}]}"#,
            )])
        });

        let response = app(MockSubtitleSource::new(), MockVideoRepository::new(), model)
            .oneshot(post_json(
                "/evaluate",
                json!({"pairs": [{"question": "Q?", "topic": "Plants", "answer": "A"}]}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"reports": [{"score": 8}]}));
    }

    #[tokio::test]
    async fn test_evaluate_model_failure() {
        let mut model = MockLanguageModel::new();
        model
            .expect_complete()
            .returning(|_| Err("throttled".into()));

        let response = app(MockSubtitleSource::new(), MockVideoRepository::new(), model)
            .oneshot(post_json(
                "/evaluate",
                json!({"pairs": [{"question": "Q?", "topic": "Plants", "answer": "A"}]}),
                Some(&token()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_health_ok() {
        let mut repo = MockVideoRepository::new();
        repo.expect_ping().returning(|| Ok(()));

        let response = app(MockSubtitleSource::new(), repo, MockLanguageModel::new())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_health_database_down() {
        let mut repo = MockVideoRepository::new();
        repo.expect_ping().returning(|| Err("connection refused".into()));

        let response = app(MockSubtitleSource::new(), repo, MockLanguageModel::new())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/generate-transcript")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = idle_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
