//! Submission scoring endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scoring::{ScoreReport, ScoringError};

use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `submit` and `attempt`. Fields are optional so the
/// handler, not the deserializer, owns the missing-field error message.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub typed_text: Option<String>,
    pub time_taken: Option<i64>,
}

/// Metrics returned to the client after scoring.
#[derive(Debug, Default, Serialize)]
pub struct SubmitResponse {
    pub errors: usize,
    pub accuracy: u32,
    pub wpm: u32,
    pub total_words: usize,
    pub correct_words: usize,
    pub wrong_words: usize,
}

impl From<ScoreReport> for SubmitResponse {
    fn from(report: ScoreReport) -> Self {
        Self {
            errors: report.errors,
            accuracy: report.marks,
            wpm: report.wpm,
            total_words: report.total_words,
            correct_words: report.correct_words,
            wrong_words: report.wrong_words,
        }
    }
}

/// POST /tests/{test_id}/submit
///
/// Scores the typed text against the test's expected text and persists
/// one submission with the computed metrics.
///
/// ### Responses
/// - `200 OK` with the metrics payload
/// - `400 Bad Request` when `typed_text` or `time_taken` is missing
/// - `404 Not Found` for an unknown test id
/// - `413 Payload Too Large` when a transcript exceeds the configured
///   word cap
pub async fn submit(
    State(state): State<AppState>,
    Path(test_id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> Response {
    let (typed_text, time_taken, test) = match load_inputs(&state, test_id, req).await {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let report = match score(&state, &test.expected_text, &typed_text, time_taken) {
        Ok(report) => report,
        Err(response) => return response,
    };

    let submission = state
        .store()
        .insert_submission(test.id, typed_text, time_taken, &report)
        .await;
    log::info!(
        "scored submission {} for test {} (wpm {}, marks {})",
        submission.id,
        test.id,
        report.wpm,
        report.marks
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            SubmitResponse::from(report),
            "Submission scored",
        )),
    )
        .into_response()
}

/// POST /tests/{test_id}/attempt
///
/// Scores the typed text exactly like `submit` but persists nothing;
/// used for practice runs.
pub async fn attempt(
    State(state): State<AppState>,
    Path(test_id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> Response {
    let (typed_text, time_taken, test) = match load_inputs(&state, test_id, req).await {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    match score(&state, &test.expected_text, &typed_text, time_taken) {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmitResponse::from(report),
                "Attempt scored",
            )),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Validates the request body and resolves the test record.
async fn load_inputs(
    state: &AppState,
    test_id: Uuid,
    req: SubmitRequest,
) -> Result<(String, i64, crate::store::TestRecord), Response> {
    let (Some(typed_text), Some(time_taken)) = (req.typed_text, req.time_taken) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubmitResponse>::error(
                "typed_text and time_taken are required",
            )),
        )
            .into_response());
    };

    let Some(test) = state.store().get_test(test_id).await else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<SubmitResponse>::error("Test not found")),
        )
            .into_response());
    };

    Ok((typed_text, time_taken, test))
}

/// Runs guarded scoring with the configured transcript cap.
fn score(
    state: &AppState,
    expected_text: &str,
    typed_text: &str,
    time_taken: i64,
) -> Result<ScoreReport, Response> {
    let max_tokens = common::config::max_transcript_tokens();
    state
        .engine()
        .score_guarded(expected_text, typed_text, time_taken, max_tokens)
        .map_err(|err| match err {
            ScoringError::TranscriptTooLong { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ApiResponse::<SubmitResponse>::error(err.to_string())),
            )
                .into_response(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn request(typed_text: Option<&str>, time_taken: Option<i64>) -> SubmitRequest {
        SubmitRequest {
            typed_text: typed_text.map(str::to_string),
            time_taken,
        }
    }

    #[tokio::test]
    async fn submit_persists_and_returns_metrics() {
        let state = AppState::new();
        let test = state
            .store()
            .insert_test("Test", "ssc", 300, "the quick brown fox")
            .await;

        let response = submit(
            State(state.clone()),
            Path(test.id),
            Json(request(Some("the slow brown fox"), Some(60))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["accuracy"], 75);
        assert_eq!(body["data"]["total_words"], 4);

        let history = state.store().submissions_for(test.id).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].accuracy, 75);
        assert_eq!(history[0].typed_text, "the slow brown fox");
    }

    #[tokio::test]
    async fn attempt_does_not_persist() {
        let state = AppState::new();
        let test = state.store().insert_test("Test", "ssc", 300, "a b c").await;

        let response = attempt(
            State(state.clone()),
            Path(test.id),
            Json(request(Some("a b c"), Some(30))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.store().submissions_for(test.id).await.is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let state = AppState::new();
        let test = state.store().insert_test("Test", "ssc", 300, "a").await;

        let response = submit(
            State(state.clone()),
            Path(test.id),
            Json(request(None, Some(60))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = submit(
            State(state),
            Path(test.id),
            Json(request(Some("a"), None)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_test_is_not_found() {
        let state = AppState::new();
        let response = submit(
            State(state),
            Path(Uuid::new_v4()),
            Json(request(Some("a"), Some(60))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_transcript_is_rejected() {
        let state = AppState::new();
        let test = state.store().insert_test("Test", "ssc", 300, "a b").await;

        // Default cap is 5000 words.
        let huge = "w ".repeat(6000);
        let response = submit(
            State(state.clone()),
            Path(test.id),
            Json(request(Some(&huge), Some(60))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(state.store().submissions_for(test.id).await.is_empty());
    }
}
