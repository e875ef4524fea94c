use axum::{
    body::Body,
    http::{Request, StatusCode, header::ORIGIN},
    middleware::Next,
    response::Response,
};

use crate::errors::HttpError;

/// Browsers attach `Origin` to cross-site requests; anything not served from
/// this machine is refused. Requests without the header (curl, tests) pass.
pub async fn require_loopback_origin(req: Request<Body>, next: Next) -> Result<Response, HttpError> {
    if let Some(origin) = req.headers().get(ORIGIN) {
        let origin = origin.to_str().map_err(|_| {
            HttpError::invalid_origin(StatusCode::BAD_REQUEST, "invalid Origin header")
        })?;
        if !is_loopback_origin(origin) {
            tracing::warn!(origin, "rejected request from foreign origin");
            return Err(HttpError::invalid_origin(
                StatusCode::FORBIDDEN,
                "invalid origin",
            ));
        }
    }

    Ok(next.run(req).await)
}

pub(crate) fn is_loopback_origin(origin: &str) -> bool {
    let Some(rest) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };
    ["127.0.0.1", "localhost", "[::1]"].iter().any(|host| {
        rest.strip_prefix(host)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with(':'))
    })
}
