use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error, info};

use crate::common::error::AppError;
use crate::console::routes::{resolve, Resolution};
use crate::proxy::{carries_body, log_snippet, request_headers, response_headers, target_url};
use crate::state::ApplicationState;

// Relays any `/api/*` request to the upstream backend and hands its answer back unchanged.
pub async fn proxy_handler(
    State(state): State<ApplicationState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let url = target_url(&state.upstream, &uri);
    info!("Proxying {} request to: {}", method, url);

    let mut request = state
        .client
        .request(method.clone(), &url)
        .headers(request_headers(&method, &headers));
    if carries_body(&method) {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|err| {
        error!("API proxy error: {}", err);
        AppError::UpstreamUnavailable(err.to_string())
    })?;
    let status = upstream.status();
    let relayed_headers = response_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|err| {
        error!("API proxy error: {}", err);
        AppError::UpstreamUnavailable(err.to_string())
    })?;
    debug!(
        "Response from backend ({}): {}",
        status.as_u16(),
        log_snippet(&bytes)
    );

    let mut response = (status, bytes).into_response();
    // Replace whatever the tuple conversion set with the upstream's own headers.
    response.headers_mut().remove(header::CONTENT_TYPE);
    response.headers_mut().extend(relayed_headers);
    Ok(response)
}

// Renders the application shell for page routes; anything else goes to the dashboard.
pub async fn shell_handler(State(state): State<ApplicationState>, uri: Uri) -> Response {
    let no_cache = (header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    match resolve(uri.path()) {
        Resolution::Render(route) => ([no_cache], Html(state.shell.render(route))).into_response(),
        Resolution::Redirect(location) => (
            StatusCode::FOUND,
            [no_cache, (header::LOCATION, HeaderValue::from_static(location))],
        )
            .into_response(),
    }
}
