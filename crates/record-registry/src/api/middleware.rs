//! Request logging middleware.

use crate::error::RejectionCode;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Log each request, including the rejection code of refused admissions.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    match response.extensions().get::<RejectionCode>() {
        Some(RejectionCode(code)) => {
            info!(%method, %uri, %status, %code, ?duration, "Record rejected");
        }
        None if status.is_success() => {
            debug!(%method, %uri, %status, ?duration, "Request completed");
        }
        None => {
            warn!(%method, %uri, %status, ?duration, "Request failed");
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;
    use axum::{body::Body, http::StatusCode, middleware, routing::post, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_rejection_code_survives_middleware() {
        let app = Router::new()
            .route("/", post(|| async { Rejection::DuplicateMail }))
            .layer(middleware::from_fn(logging_middleware));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.extensions().get::<RejectionCode>(),
            Some(&RejectionCode("DUPLICATE_MAIL"))
        );
    }
}
