use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use tracing::{error, info, warn};

use logolab_types::{DesignRequestBody, DesignResult, GatewayError};

use super::client_ip::client_identifier;
use super::error::ApiError;
use crate::state::AppState;

/// `POST /generate-analysis`
///
/// Rate limit first, then validate, then forward. The raw body is taken as
/// bytes so a malformed payload still gets the structured 400.
pub async fn generate_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DesignResult>, ApiError> {
    let client = client_identifier(&headers);

    if !state.inner.text_limiter.allow(&client) {
        warn!("Analysis rate limit hit for {}", client);
        return Err(GatewayError::text_rate_limited().into());
    }

    let request = DesignRequestBody::from_slice(&body).into_request()?;

    let Some(provider) = state.inner.text_provider.as_ref() else {
        error!("GEMINI_API_KEY not found in environment");
        return Err(GatewayError::missing_credential().into());
    };

    let design = provider.generate_design(&request).await.map_err(|e| {
        error!("Analysis failed for {} ({}): {}", client, request.project_name, e);
        GatewayError::generation_failed(e.to_string())
    })?;

    info!("Analysis generated for {}: {}", client, request.project_name);
    Ok(Json(design))
}
