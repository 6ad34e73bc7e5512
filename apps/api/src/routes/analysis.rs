//! Axum route handlers for JD processing, scoring, validation and prompts.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::jd::{process_jd, ProcessedJd};
use crate::rules::{build_cover_letter_prompt, build_resume_prompt};
use crate::scoring::{score_cover_letter, AtsScoreResult, CoverLetterScoreResult};
use crate::state::AppState;
use crate::validation::{run_validation_suite, verify_feedback_history, FeedbackVerification, ValidationReport};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either raw JD text or a JD processed by an earlier call.
#[derive(Debug, Default, Deserialize)]
pub struct JdInput {
    pub jd_text: Option<String>,
    pub processed_jd: Option<ProcessedJd>,
    pub job_title: Option<String>,
}

impl JdInput {
    /// A supplied `processed_jd` wins and must pass structural validation.
    pub fn resolve(self) -> Result<ProcessedJd, AppError> {
        if let Some(mut jd) = self.processed_jd {
            jd.validate()?;
            if let Some(title) = self.job_title.filter(|t| !t.trim().is_empty()) {
                jd.job_title = title.trim().to_string();
            }
            return Ok(jd);
        }
        match self.jd_text {
            Some(text) if !text.trim().is_empty() => Ok(process_jd(&text, self.job_title.as_deref())),
            _ => Err(AppError::Validation(
                "either jd_text or processed_jd is required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessJdRequest {
    pub jd_text: String,
    pub job_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreResumeRequest {
    pub resume_text: String,
    pub original_resume_text: Option<String>,
    #[serde(flatten)]
    pub jd: JdInput,
}

#[derive(Debug, Deserialize)]
pub struct ScoreCoverLetterRequest {
    pub cover_letter_text: String,
    pub resume_text: String,
    #[serde(flatten)]
    pub jd: JdInput,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub original_text: String,
    pub draft_text: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Vec<String>,
    pub previous_draft: String,
    pub draft: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub resume_text: String,
    #[serde(default)]
    pub feedback: Vec<String>,
    #[serde(flatten)]
    pub jd: JdInput,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/process
pub async fn handle_process_jd(
    Json(request): Json<ProcessJdRequest>,
) -> Result<Json<ProcessedJd>, AppError> {
    require_text("jd_text", &request.jd_text)?;
    Ok(Json(process_jd(&request.jd_text, request.job_title.as_deref())))
}

/// POST /api/v1/score/resume
///
/// Scores a tailored resume against a JD. Supplying the original resume lets
/// the scorer separate skills the candidate lacks from skills the draft dropped.
pub async fn handle_score_resume(
    State(state): State<AppState>,
    Json(request): Json<ScoreResumeRequest>,
) -> Result<Json<AtsScoreResult>, AppError> {
    require_text("resume_text", &request.resume_text)?;
    let jd = request.jd.resolve()?;

    let original = request
        .original_resume_text
        .as_deref()
        .filter(|t| !t.trim().is_empty());
    let result = state.resume_scorer.score(&request.resume_text, &jd, original);

    info!(
        backend = state.resume_scorer.backend(),
        total = result.total_score,
        gate = result.passed_parsing_gate,
        "Resume scored"
    );
    Ok(Json(result))
}

/// POST /api/v1/score/cover-letter
pub async fn handle_score_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<ScoreCoverLetterRequest>,
) -> Result<Json<CoverLetterScoreResult>, AppError> {
    require_text("cover_letter_text", &request.cover_letter_text)?;
    require_text("resume_text", &request.resume_text)?;
    let jd = request.jd.resolve()?;

    let result = score_cover_letter(
        &request.cover_letter_text,
        &jd,
        &request.resume_text,
        state.matcher.as_ref(),
    );
    info!(total = result.total_score, "Cover letter scored");
    Ok(Json(result))
}

/// POST /api/v1/validate
pub async fn handle_validate(
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidationReport>, AppError> {
    require_text("original_text", &request.original_text)?;
    require_text("draft_text", &request.draft_text)?;
    Ok(Json(run_validation_suite(&request.original_text, &request.draft_text)))
}

/// POST /api/v1/validate/feedback
pub async fn handle_verify_feedback(
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<Vec<FeedbackVerification>>, AppError> {
    if request.feedback.is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }
    require_text("draft", &request.draft)?;

    let results = verify_feedback_history(&request.feedback, &request.previous_draft, &request.draft);
    debug!(
        items = results.len(),
        applied = results.iter().filter(|r| r.applied).count(),
        "Feedback verified"
    );
    Ok(Json(results))
}

/// POST /api/v1/prompts/resume
pub async fn handle_resume_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    require_text("resume_text", &request.resume_text)?;
    let PromptRequest { resume_text, feedback, jd } = request;
    let jd = jd.resolve()?;

    // A cache miss reads the rule file from disk.
    let rules = Arc::clone(&state.rules);
    let prompt = tokio::task::spawn_blocking(move || {
        build_resume_prompt(&rules, &jd, &resume_text, &feedback)
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "spawn_blocking failed building resume prompt: {e}"
        ))
    })??;
    Ok(Json(PromptResponse { prompt }))
}

/// POST /api/v1/prompts/cover-letter
pub async fn handle_cover_letter_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    require_text("resume_text", &request.resume_text)?;
    let PromptRequest { resume_text, feedback, jd } = request;
    let jd = jd.resolve()?;

    let rules = Arc::clone(&state.rules);
    let prompt = tokio::task::spawn_blocking(move || {
        build_cover_letter_prompt(&rules, &jd, &resume_text, &feedback)
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "spawn_blocking failed building cover letter prompt: {e}"
        ))
    })??;
    Ok(Json(PromptResponse { prompt }))
}
