//! HTTP mapping for gateway errors.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use logolab_types::GatewayError;
use thiserror::Error;

/// Handler error: a `GatewayError` rendered as `ErrorBody` JSON.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub GatewayError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self.0.to_body())).into_response();

        if let Some(secs) = self.0.retry_after() {
            response.headers_mut().insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_sets_retry_after_header() {
        let response = ApiError(GatewayError::text_rate_limited()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "60");
    }

    #[test]
    fn validation_is_400_without_header() {
        let response = ApiError(GatewayError::missing_prompt()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::RETRY_AFTER).is_none());
    }
}
