//! Request timing middleware.
//!
//! Logs how long each request took and echoes the figure back to the caller
//! in an `x-response-time-ms` header.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};

/// Header carrying the handler time in whole milliseconds.
pub const RESPONSE_TIME_HEADER: &str = "x-response-time-ms";

/// Requests slower than this are logged as warnings.
pub const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Middleware that logs request timing.
///
/// ```ignore
/// use axum::{middleware, routing::get, Router};
/// use feed_core::middleware::timing_layer;
///
/// let app = Router::new()
///     .route("/v1/races/:id", get(handler))
///     .layer(middleware::from_fn(timing_layer));
/// ```
pub async fn timing_layer(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let elapsed = start.elapsed();
    let elapsed_ms = elapsed.as_millis();
    let status = response.status().as_u16();

    if elapsed > SLOW_REQUEST {
        tracing::warn!(
            method = %method,
            path = %path,
            status,
            duration_ms = elapsed_ms,
            "Slow request"
        );
    } else {
        tracing::debug!(
            method = %method,
            path = %path,
            status,
            duration_ms = elapsed_ms,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&elapsed_ms.to_string()) {
        response.headers_mut().insert(RESPONSE_TIME_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        middleware,
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt;

    async fn fast() -> &'static str {
        "ok"
    }

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_millis(150)).await;
        "slow"
    }

    async fn missing() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    fn app() -> Router {
        Router::new()
            .route("/fast", get(fast))
            .route("/slow", post(slow))
            .route("/missing", get(missing))
            .layer(middleware::from_fn(timing_layer))
    }

    fn header_ms(response: &Response) -> u128 {
        response
            .headers()
            .get(RESPONSE_TIME_HEADER)
            .expect("timing header present")
            .to_str()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let response = app()
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(header_ms(&response) < 150);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_slow_request_reports_duration() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/slow")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(header_ms(&response) >= 150);
    }

    #[tokio::test]
    async fn test_error_status_preserved() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(RESPONSE_TIME_HEADER));
    }
}
