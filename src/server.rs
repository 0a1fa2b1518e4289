use axum::handler::Handler;
use axum::http::{header, HeaderValue, Method};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::configs::settings::Settings;
use crate::route::{proxy_handler, shell_handler};
use crate::state::{new_application_state, ApplicationState};

const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000";

pub fn router(state: ApplicationState, browser_dist: &str, allowed_origins: &[String]) -> Router {
    // Files from the browser output first, then the shell for everything else.
    let serve_dir = ServeDir::new(browser_dist)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(shell_handler.with_state(state.clone()));
    let cached = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static(ASSET_CACHE_CONTROL),
    )
    .layer(serve_dir);
    // Relayed /api bodies stay byte-for-byte; only local content is compressed.
    let static_files = CompressionLayer::new().layer(cached);

    Router::new()
        .route("/api", any(proxy_handler))
        .route("/api/", any(proxy_handler))
        .route("/api/*path", any(proxy_handler))
        .fallback_service(static_files)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = new_application_state(&settings.server)?;
    let app = router(
        state,
        &settings.server.browser_dist,
        &settings.server.allowed_origins,
    );

    let listener = TcpListener::bind(settings.server.listen_address()).await?;
    info!("Server running on: {}", listener.local_addr()?);
    info!("Relaying /api to: {}", settings.server.upstream);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
