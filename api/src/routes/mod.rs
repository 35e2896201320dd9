//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/tests` → test listing, submission scoring, results, and diffs
//! - `/dev` → provisioning helpers, mounted only outside production

use axum::Router;

use crate::state::AppState;

pub mod dev;
pub mod health;
pub mod tests;

/// Builds the complete application router.
///
/// The `/dev` group is mounted here rather than in `main` so that all
/// route registration stays in one place; it is skipped entirely when
/// the configured environment is `production`.
pub fn routes(app_state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .nest("/health", health::health_routes())
        .nest("/tests", tests::tests_routes());

    let env = common::config::env().to_lowercase();
    if env != "production" {
        router = router.nest("/dev", dev::dev_routes());
        log::info!("[dev] Mounted /dev routes (env = {env})");
    }

    router.with_state(app_state)
}
