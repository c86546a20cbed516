//! JSON body for requests cut off by the timeout layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Replace the empty 408 produced by `TimeoutLayer` with the standard
/// `{ message, code }` body. Other responses pass through untouched.
pub async fn timeout_json_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::RequestTimeout.into_response();
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};

    #[tokio::test]
    async fn empty_408_gains_json_body() {
        let bare = (StatusCode::REQUEST_TIMEOUT, Body::empty()).into_response();

        let response = timeout_json_body(bare).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "REQUEST_TIMEOUT");
        assert_eq!(json["message"], "Request timed out");
    }

    #[tokio::test]
    async fn other_statuses_pass_through() {
        let ok = (StatusCode::OK, "fine").into_response();

        let response = timeout_json_body(ok).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"fine");
    }
}
