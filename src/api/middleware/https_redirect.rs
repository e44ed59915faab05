//! Redirection of plain HTTP requests to HTTPS.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header, uri::Authority},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Header set by TLS-terminating proxies with the scheme the client used.
pub const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Redirects requests that did not arrive over HTTPS to `https://{host}:{port}`.
///
/// Intended for `axum::middleware::from_fn_with_state` with the HTTPS port as
/// state. Requests without a usable `Host` are passed through unchanged.
///
/// # Responses
///
/// - **307 Temporary Redirect**: request was plain HTTP
/// - otherwise the inner service's response
pub async fn layer(State(https_port): State<u16>, request: Request, next: Next) -> Response {
    if is_https(&request) {
        return next.run(request).await;
    }

    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    match request_host(&request).map(|host| redirect_location(&host, https_port, path_and_query)) {
        Some(location) => {
            tracing::debug!(%location, "Redirecting to HTTPS");
            Redirect::temporary(&location).into_response()
        }
        None => next.run(request).await,
    }
}

fn is_https(request: &Request) -> bool {
    if request.uri().scheme_str() == Some("https") {
        return true;
    }

    forwarded_proto(request.headers()).is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

/// First value of `X-Forwarded-Proto`; proxies may append a list.
fn forwarded_proto(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(FORWARDED_PROTO)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
}

/// Host name (without port) from the `Host` header or the request URI.
fn request_host(request: &Request) -> Option<String> {
    let authority = match request.headers().get(header::HOST) {
        Some(value) => value.to_str().ok()?.parse::<Authority>().ok()?,
        None => request.uri().authority()?.clone(),
    };

    Some(authority.host().to_string())
}

/// Builds the redirect target; the port is omitted when it is 443.
pub fn redirect_location(host: &str, https_port: u16, path_and_query: &str) -> String {
    if https_port == 443 {
        format!("https://{host}{path_and_query}")
    } else {
        format!("https://{host}:{https_port}{path_and_query}")
    }
}
