//! HTTP Middleware
//!
//! 请求日志中间件：记录方法、路径、状态码和耗时

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 自 `started` 起经过的毫秒数，超出 u64 时取上限
fn elapsed_millis(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// 请求日志中间件
///
/// 5xx 记 error，4xx 记 warn，其余记 debug。
/// 业务错误详情已在 ApiError::into_response() 中记录，这里只记请求维度的信息
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = elapsed_millis(started);

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::post,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn unavailable_handler() -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/analyze", post(ok_handler))
            .route("/down", post(unavailable_handler))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router()
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_elapsed_millis_counts_from_start() {
        let started = Instant::now() - std::time::Duration::from_millis(20);
        assert!(elapsed_millis(started) >= 20);
    }

    #[tokio::test]
    async fn test_response_passes_through() {
        assert_eq!(status_of("POST", "/analyze").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_errors_pass_through() {
        assert_eq!(status_of("POST", "/missing").await, StatusCode::NOT_FOUND);
        assert_eq!(
            status_of("GET", "/analyze").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn test_server_error_passes_through() {
        assert_eq!(
            status_of("POST", "/down").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
