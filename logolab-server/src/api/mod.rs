//! Gateway Routes
//!
//! Two POST endpoints. Each also answers a bare `OPTIONS` with an empty
//! 200 and every other method with a JSON 405.

mod analysis;
mod client_ip;
mod error;
mod image;


use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{post, MethodRouter},
    Router,
};
use logolab_types::GatewayError;

use self::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-analysis", gateway_route(post(analysis::generate_analysis)))
        .route("/generate-image", gateway_route(post(image::generate_image)))
}

fn gateway_route(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.options(preflight).fallback(method_not_allowed)
}

async fn preflight() -> impl IntoResponse {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    ApiError(GatewayError::MethodNotAllowed)
}
