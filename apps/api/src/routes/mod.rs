pub mod analysis;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jd/process", post(analysis::handle_process_jd))
        // Scoring
        .route("/api/v1/score/resume", post(analysis::handle_score_resume))
        .route(
            "/api/v1/score/cover-letter",
            post(analysis::handle_score_cover_letter),
        )
        // Post-generation validation
        .route("/api/v1/validate", post(analysis::handle_validate))
        .route(
            "/api/v1/validate/feedback",
            post(analysis::handle_verify_feedback),
        )
        // Prompt building
        .route("/api/v1/prompts/resume", post(analysis::handle_resume_prompt))
        .route(
            "/api/v1/prompts/cover-letter",
            post(analysis::handle_cover_letter_prompt),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const JD: &str = "Backend Engineer\n\nRequirements:\n- 3+ years of experience with Python and PostgreSQL\n- Experience with AWS\n";
    const RESUME: &str = "Jane Doe\nBackend Engineer\njane@example.com | 555-123-4567\n\n## Skills\nPython, PostgreSQL, AWS\n\n## Experience\nEngineer, Acme\nJune 2019 - Present\n- Built Python services on AWS backed by PostgreSQL, cutting latency 30%\n\n## Education\nB.S. Computer Science\n";

    fn app(rules_dir: &std::path::Path) -> Router {
        let config = Config {
            rules_dir: rules_dir.to_path_buf(),
            ..Config::default()
        };
        build_router(AppState::new(config))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_score_resume_from_jd_text() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/score/resume",
            json!({ "resume_text": RESUME, "jd_text": JD }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["passed_parsing_gate"], json!(true));
        assert!(body["total_score"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_processed_jd_round_trips_through_scoring() {
        let dir = tempfile::tempdir().unwrap();
        let (status, processed) = post_json(
            app(dir.path()),
            "/api/v1/jd/process",
            json!({ "jd_text": JD }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = post_json(
            app(dir.path()),
            "/api/v1/score/resume",
            json!({ "resume_text": RESUME, "processed_jd": processed }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_tampered_processed_jd_is_422() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mut processed) = post_json(
            app(dir.path()),
            "/api/v1/jd/process",
            json!({ "jd_text": JD }),
        )
        .await;
        processed["debug"]["noise_percentage"] = json!(250.0);

        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/score/resume",
            json!({ "resume_text": RESUME, "processed_jd": processed }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], json!("UNPROCESSABLE_ENTITY"));
    }

    #[tokio::test]
    async fn test_missing_jd_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/score/resume",
            json!({ "resume_text": RESUME }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_validate_flags_new_metric() {
        let dir = tempfile::tempdir().unwrap();
        let draft = RESUME.replace("30%", "45%");
        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/validate",
            json!({ "original_text": RESUME, "draft_text": draft }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passed"], json!(false));
        assert_eq!(body["fabricated_metrics"]["flagged_items"][0]["text"], json!("45%"));
    }

    #[tokio::test]
    async fn test_feedback_verification() {
        let dir = tempfile::tempdir().unwrap();
        let draft = format!("{RESUME}- Deployed services with Kubernetes\n");
        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/validate/feedback",
            json!({ "feedback": ["Mention Kubernetes"], "previous_draft": RESUME, "draft": draft }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["applied"], json!(true));
    }

    #[tokio::test]
    async fn test_prompt_requires_rule_file() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = post_json(
            app(dir.path()),
            "/api/v1/prompts/resume",
            json!({ "resume_text": RESUME, "jd_text": JD }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        std::fs::write(dir.path().join("resume_rules.md"), "1. Be truthful.").unwrap();
        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/prompts/resume",
            json!({ "resume_text": RESUME, "jd_text": JD }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["prompt"].as_str().unwrap().contains("Be truthful."));
    }

    #[tokio::test]
    async fn test_cover_letter_prompt_reads_rules_and_feedback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cover_letter_rules.md"), "1. Keep it short.").unwrap();
        let (status, body) = post_json(
            app(dir.path()),
            "/api/v1/prompts/cover-letter",
            json!({ "resume_text": RESUME, "jd_text": JD, "feedback": ["Mention Kubernetes"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("Keep it short."));
        assert!(prompt.contains("Mention Kubernetes"));
    }
}
