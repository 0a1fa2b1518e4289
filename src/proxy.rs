use std::collections::HashSet;

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, Uri};
use lazy_static::lazy_static;

pub const API_PREFIX: &str = "/api";
const LOG_SNIPPET_LEN: usize = 200;

lazy_static! {
    static ref HOP_BY_HOP: HashSet<&'static str> = [
        "host",
        "connection",
        "keep-alive",
        "proxy-authenticate",
        "proxy-authorization",
        "proxy-connection",
        "te",
        "trailer",
        "transfer-encoding",
        "upgrade",
    ]
    .into_iter()
    .collect();
}

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    let name = name.as_str();
    HOP_BY_HOP.contains(name) || name.starts_with("proxy-")
}

/// `{upstream}{path without /api}{?query}`.
pub fn target_url(upstream: &str, uri: &Uri) -> String {
    let path = uri.path();
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    match uri.query() {
        Some(query) => format!("{}{}?{}", upstream.trim_end_matches('/'), rest, query),
        None => format!("{}{}", upstream.trim_end_matches('/'), rest),
    }
}

pub fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

pub fn request_headers(method: &Method, incoming: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in incoming {
        // The outbound body may differ from the inbound one, so reqwest sizes it.
        if is_hop_by_hop(name) || name == header::CONTENT_LENGTH {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    if *method == Method::POST || *method == Method::PUT {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    headers
}

pub fn response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in upstream {
        if !is_hop_by_hop(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

pub fn log_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > LOG_SNIPPET_LEN {
        let head: String = text.chars().take(LOG_SNIPPET_LEN).collect();
        format!("{}...", head)
    } else {
        text.into_owned()
    }
}
