mod config;
mod routes;
mod services;
mod state;

use services::auth_proxy::AuthUpstream;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    // Auth proxy is optional: pages still render, submissions get a 503.
    let upstream = match config.auth_api_url.clone() {
        Some(url) => match AuthUpstream::new(url, config.auth_api_timeout_secs) {
            Ok(upstream) => {
                tracing::info!(base_url = upstream.base_url(), "auth proxy enabled");
                Some(upstream)
            }
            Err(e) => {
                tracing::warn!(error = %e, "auth proxy client failed to build; proxy disabled");
                None
            }
        },
        None => {
            tracing::warn!("AUTH_API_URL not set; auth proxy disabled");
            None
        }
    };

    let state = state::AppState::new(upstream);
    let app = routes::app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
