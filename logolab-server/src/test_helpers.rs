//! Test helpers for logolab-server unit tests.

use axum_test::TestServer;
use logolab_types::GatewayConfig;
use wiremock::MockServer;

use crate::router::build_router;
use crate::state::AppState;

pub const TEXT_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";
pub const IMAGE_PATH: &str = "/v1beta/models/imagen-3.0-generate-001:predict";

/// Config whose providers point at `mock`, with a test credential.
pub fn test_config(mock: &MockServer) -> GatewayConfig {
    GatewayConfig {
        api_key: Some("test-key".to_string()),
        gemini_base_url: mock.uri(),
        ..Default::default()
    }
}

/// Full router over `config`, ready for requests.
pub fn test_server(config: GatewayConfig) -> TestServer {
    let state = AppState::from_config(config).expect("failed to create test AppState");
    TestServer::new(build_router(state)).expect("failed to start test server")
}

pub fn design_text_response(project: &str) -> serde_json::Value {
    let design = serde_json::json!({
        "concept_summary": "هوية بصرية حديثة",
        "variants": [
            {"id": 1, "title": "تصميم عصري بسيط", "prompt": format!("Professional minimalist logo for '{}', clean lines", project)},
            {"id": 2, "title": "تصميم إبداعي فاخر", "prompt": format!("Luxurious creative logo for '{}', gold accents", project)}
        ],
        "colors": [
            {"name": "اللون الأساسي", "hex": "#4f46e5"},
            {"name": "اللون الثانوي", "hex": "#f59e0b"}
        ]
    });

    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": format!("```json\n{}\n```", design)}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}
