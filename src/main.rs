mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Local development reads a .env file; deployments set the environment directly.
    let _ = dotenvy::dotenv();

    let config = config::Config::from_env().expect("invalid server configuration");
    if let Some(target) = &config.redirect_all_to {
        tracing::info!(%target, "redirect mode active, all page requests forwarded");
    }

    let app = routes::leptos_app(&config).expect("router assembly failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "appfeed listening");
    axum::serve(listener, app).await.expect("server failed");
}
