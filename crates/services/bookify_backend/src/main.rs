// File: services/bookify_backend/src/main.rs
use axum::{routing::get, Router};
use bookify_config::load_config;
#[cfg(feature = "gcal")]
use bookify_gcal::routes as calendar_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

#[tokio::main]
async fn main() {
    bookify_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let api_router = Router::new().route("/", get(|| async { "Welcome to Bookify API!" }));
    #[cfg(feature = "gcal")]
    let calendar_router = calendar_routes::routes(config.clone()).await;

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = api_router;
        #[cfg(feature = "gcal")]
        {
            router = router.merge(calendar_router);
        }
        router
    });

    let mut app = api_router;

    // Serve the widget bundle in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from ./dist");
        app = app.fallback_service(ServeDir::new("dist"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
