//! Routes for dictation tests: listing, submission scoring, results,
//! and per-submission diffs.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod post;

/// Builds the `/tests` route group.
///
/// - `GET /tests` → list test metadata
/// - `GET /tests/results/all` → submission history across all tests,
///   grouped by test
/// - `GET /tests/{test_id}` → single test metadata
/// - `POST /tests/{test_id}/submit` → score and persist a submission
/// - `POST /tests/{test_id}/attempt` → score without persisting
/// - `GET /tests/{test_id}/results` → expected text + submission history
/// - `GET /tests/{test_id}/submissions/{submission_id}/diff` → visual
///   diff segments for a stored submission
pub fn tests_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_tests))
        .route("/results/all", get(get::results_overview))
        .route("/{test_id}", get(get::get_test))
        .route("/{test_id}/submit", post(post::submit))
        .route("/{test_id}/attempt", post(post::attempt))
        .route("/{test_id}/results", get(get::results))
        .route(
            "/{test_id}/submissions/{submission_id}/diff",
            get(get::submission_diff),
        )
}
