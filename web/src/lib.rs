use axum::http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method};
use log::*;
use service::config::ApiVersion;
use tower_http::cors::CorsLayer;

pub use self::error::{Error, Result};
pub use service::AppState;

pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod extractors;
pub(crate) mod params;
pub mod router;

/// Binds the configured interface/port and serves the API router until the
/// process is stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = format!(
        "{}:{}",
        app_state
            .config
            .interface
            .as_deref()
            .unwrap_or("127.0.0.1"),
        app_state.config.port
    );

    let cors_layer = cors_layer(&app_state.config.allowed_origins);
    let router = router::define_routes(app_state).layer(cors_layer);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!("Server starting... listening for requests on http://{listen_addr}");

    axum::serve(listener, router).await
}

// The companion app is a browser/webview client, so the configured front-end
// origins must be allowed explicitly along with the custom version header.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping unparseable allowed origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(ApiVersion::field_name()),
        ])
        .allow_origin(origins)
}
