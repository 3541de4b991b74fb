mod db;
mod routes;
mod services;
mod state;

use axum::http::HeaderValue;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let secret = std::env::var("TOKEN_SECRET").expect("TOKEN_SECRET required");
    let keys = services::token::TokenKeys::new(secret.as_bytes());

    // Restrict CORS to the configured frontend origin; permissive when unset.
    let allowed_origin: Option<HeaderValue> = std::env::var("ALLOWED_ORIGIN")
        .ok()
        .map(|origin| origin.parse().expect("invalid ALLOWED_ORIGIN"));

    let state = state::AppState::new(pool, keys);

    let app = routes::app(state, allowed_origin);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "marketboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
