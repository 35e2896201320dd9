use std::net::SocketAddr;

use api::routes::routes;
use api::state::AppState;
use axum::Router;
use common::{config, logger};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    logger::init_logger(
        &config::log_level(),
        &config::log_file(),
        config::log_to_stdout(),
    );

    // Set up dependencies
    let app_state = AppState::new();

    // Build app router
    let app = Router::new().nest("/api", routes(app_state));

    // Start server
    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .expect("Invalid address");

    log::info!(
        "Starting {} on http://{}",
        config::project_name(),
        addr
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server crashed");
}
