#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test, panics are the assertion mechanism")]

use std::sync::Arc;

use logolab_core::{
    GeminiTextProvider, ImageOrchestrator, ImageProvider, ImagenProvider, PollinationsProvider,
    ProviderError, TextProvider,
};
use logolab_types::{DesignRequest, ImageRequest, ImageSource};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEXT_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";
const IMAGE_PATH: &str = "/v1beta/models/imagen-3.0-generate-001:predict";

fn skyline() -> DesignRequest {
    DesignRequest { project_name: "SKYLINE".to_string(), input_text: "modern minimal".to_string() }
}

fn design_json() -> String {
    serde_json::json!({
        "concept_summary": "A clean skyline mark",
        "variants": [
            {"id": 1, "title": "Minimalist & Modern", "prompt": "SKYLINE minimalist wordmark"},
            {"id": 2, "title": "Creative & Luxurious", "prompt": "SKYLINE gold emblem"}
        ],
        "colors": [{"name": "Indigo", "hex": "#4f46e5"}]
    })
    .to_string()
}

fn text_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

fn text_provider(server: &MockServer) -> GeminiTextProvider {
    GeminiTextProvider::new(reqwest::Client::new(), server.uri(), "gemini-2.0-flash-exp", "test-key")
}

fn image_provider(server: &MockServer) -> ImagenProvider {
    ImagenProvider::new(reqwest::Client::new(), server.uri(), "imagen-3.0-generate-001", "test-key")
}

#[tokio::test]
async fn text_provider_sends_key_header_and_parses_design() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {"responseMimeType": "application/json", "topK": 40}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(&design_json())))
        .expect(1)
        .mount(&server)
        .await;

    let result = text_provider(&server).generate_design(&skyline()).await.expect("design");

    assert_eq!(result.variants.len(), 2);
    assert!(result.variants.iter().all(|v| v.prompt.contains("SKYLINE")));
    assert_eq!(result.colors[0].hex, "#4f46e5");
}

#[tokio::test]
async fn text_provider_strips_code_fences() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{}\n```", design_json());
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(&fenced)))
        .mount(&server)
        .await;

    let result = text_provider(&server).generate_design(&skyline()).await.expect("design");
    assert_eq!(result.concept_summary, "A clean skyline mark");
}

#[tokio::test]
async fn text_provider_surfaces_upstream_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = text_provider(&server).generate_design(&skyline()).await.expect_err("500");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Gemini API error: 500");
}

#[tokio::test]
async fn text_provider_rejects_non_json_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("I cannot help with that")))
        .mount(&server)
        .await;

    let err = text_provider(&server).generate_design(&skyline()).await.expect_err("malformed");
    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn imagen_decodes_prediction_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "instances": [{"prompt": "SKYLINE logo"}],
            "parameters": {"sampleCount": 1, "aspectRatio": "1:1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predictions": [{"bytesBase64Encoded": "iVBORw0KGgo=", "mimeType": "image/png"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = image_provider(&server).generate_image("SKYLINE logo").await.expect("image");
    assert_eq!(image.to_string(), "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn imagen_decodes_inline_data_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/jpeg", "data": "/9j/4AAQ"}}]}}]
        })))
        .mount(&server)
        .await;

    let image = image_provider(&server).generate_image("logo").await.expect("image");
    assert_eq!(image.to_string(), "data:image/jpeg;base64,/9j/4AAQ");
}

#[tokio::test]
async fn orchestrator_falls_back_when_imagen_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let chain = ImageOrchestrator::new(
        Some(Arc::new(image_provider(&server))),
        Arc::new(PollinationsProvider::new("https://image.pollinations.ai", 1024)),
    );

    let first = chain.generate(&ImageRequest::new("SKYLINE logo")).await.expect("fallback");
    assert_eq!(first.source, ImageSource::Pollinations);
    assert!(first.image.starts_with("https://image.pollinations.ai/prompt/SKYLINE%20logo?"));

    let request = ImageRequest { prompt: "SKYLINE logo".to_string(), use_gemini: false };
    let second = chain.generate(&request).await.expect("fallback");
    assert_ne!(first.image, second.image);
}

#[tokio::test]
async fn orchestrator_falls_back_when_imagen_has_no_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"predictions": []})))
        .mount(&server)
        .await;

    let chain = ImageOrchestrator::new(
        Some(Arc::new(image_provider(&server))),
        Arc::new(PollinationsProvider::new("https://image.pollinations.ai", 1024)),
    );

    let response = chain.generate(&ImageRequest::new("logo")).await.expect("fallback");
    assert_eq!(response.source, ImageSource::Pollinations);
}
