mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = services::backend::BackendConfig::from_env().expect("MODERATION_API_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    tracing::info!(base_url = %config.base_url, "moderation backend configured");

    let state = state::AppState::new(services::backend::Backend::new(config.base_url));

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "modqueue listening");
    axum::serve(listener, app).await.expect("server failed");
}
