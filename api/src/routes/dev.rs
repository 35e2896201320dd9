//! Development-only provisioning routes.
//!
//! Test content is owned by a separate admin service in production; this
//! group exists so local development and integration tests can seed
//! tests without it. It is only mounted when the configured environment
//! is not `production`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::state::AppState;
use crate::store::TestRecord;

#[derive(Debug, Deserialize)]
pub struct CreateTestRequest {
    pub name: String,
    pub category: String,
    pub time_limit: u32,
    pub expected_text: String,
}

/// Builds the `/dev` route group.
pub fn dev_routes() -> axum::Router<AppState> {
    axum::Router::new().route("/tests", axum::routing::post(create_test))
}

/// POST /dev/tests
///
/// Creates a test with the given reference transcript and returns the
/// full record, id included.
async fn create_test(
    State(state): State<AppState>,
    Json(req): Json<CreateTestRequest>,
) -> Response {
    let record: TestRecord = state
        .store()
        .insert_test(req.name, req.category, req.time_limit, req.expected_text)
        .await;
    log::info!("created test {} ({})", record.id, record.name);
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(record, "Test created")),
    )
        .into_response()
}
