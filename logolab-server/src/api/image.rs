use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use tracing::{error, warn};

use logolab_types::{GatewayError, ImageRequest, ImageResponse};

use super::client_ip::client_identifier;
use super::error::ApiError;
use crate::state::AppState;

/// `POST /generate-image`
///
/// Primary provider when requested and configured, fallback otherwise or
/// on any primary failure. Only a fallback failure surfaces as 500.
pub async fn generate_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ImageResponse>, ApiError> {
    let client = client_identifier(&headers);

    if !state.inner.image_limiter.allow(&client) {
        warn!("Image rate limit hit for {}", client);
        return Err(GatewayError::image_rate_limited().into());
    }

    let request = ImageRequest::from_slice(&body)?;

    let response = state.inner.images.generate(&request).await.map_err(|e| {
        error!("Image generation failed for {}: {}", client, e);
        GatewayError::image_failed()
    })?;

    Ok(Json(response))
}
