mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Build the API router. The classifier is pure, so the router is
/// stateless: every request computes from its own parameters.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/phase", get(handlers::phase))
        .route("/api/season", get(handlers::season))
        .layer(CorsLayer::permissive())
}

pub async fn start(host: &str, port: u16) {
    let app = build_router();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  skyphase server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
