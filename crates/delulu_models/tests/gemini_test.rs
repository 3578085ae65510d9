#![cfg(feature = "gemini")]

//! Gemini client tests against a mock Generative Language API.

use delulu_core::{CharacterProfile, Input, MediaSource, ResponseSchema, StructuredRequest};
use delulu_error::GenerationErrorKind;
use delulu_interface::{TextGenerator, generate_structured};
use delulu_models::{GeminiClient, GoogleApiConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";

fn client_for(server: &MockServer) -> anyhow::Result<GeminiClient> {
    let config = GoogleApiConfig::builder()
        .api_key("test-key")
        .api_base(server.uri())
        .timeout_secs(5u64)
        .build()?;
    Ok(GeminiClient::new(config, MODEL)?)
}

fn answer(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

fn text_request(text: &str) -> StructuredRequest {
    StructuredRequest::new(
        vec![Input::Text(text.to_string())],
        CharacterProfile::response_schema(),
    )
}

#[tokio::test]
async fn sends_schema_constrained_request() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{}:generateContent", MODEL)))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Character Name: Ada"}]}],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {"type": "OBJECT"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("{\"ok\": true}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let text = client.generate_json(&text_request("Character Name: Ada")).await?;
    assert_eq!(text, "{\"ok\": true}");
    Ok(())
}

#[tokio::test]
async fn photo_is_sent_as_inline_base64() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [
                {"text": "Describe"},
                {"inlineData": {"mimeType": "image/png", "data": "AQID"}}
            ]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("null")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let request = StructuredRequest::new(
        vec![
            Input::Text("Describe".to_string()),
            Input::Image {
                mime: Some("image/png".to_string()),
                source: MediaSource::Binary(vec![1, 2, 3]),
            },
        ],
        CharacterProfile::response_schema(),
    );
    assert_eq!(client.generate_json(&request).await?, "null");
    Ok(())
}

#[tokio::test]
async fn multi_part_answer_is_concatenated_and_parsed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [
                {"text": "{\"name\": \"Sherlock Holmes\", \"age\": 40, "},
                {"text": "\"personality\": [\"observant 🔍\"], \"occupation\": \"Detective 🕵️\", \"gender\": \"male\"}"}
            ]}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let profile: Option<CharacterProfile> = generate_structured(
        &client,
        vec![Input::Text("Character Name: Sherlock Holmes".to_string())],
    )
    .await?;
    assert_eq!(profile.map(|p| p.occupation), Some("Detective 🕵️".to_string()));
    Ok(())
}

#[tokio::test]
async fn no_candidates_is_empty_response() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_json(&text_request("?"))
        .await
        .expect_err("no candidates must fail");
    assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
    Ok(())
}

#[tokio::test]
async fn blocked_prompt_is_filtered() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_json(&text_request("?"))
        .await
        .expect_err("blocked prompt must fail");
    assert_eq!(err.kind, GenerationErrorKind::Filtered("SAFETY".to_string()));
    Ok(())
}

#[tokio::test]
async fn http_error_carries_status() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_json(&text_request("?"))
        .await
        .expect_err("429 must fail");
    assert!(matches!(
        err.kind,
        GenerationErrorKind::Http { status_code: 429, .. }
    ));
    Ok(())
}

#[tokio::test]
async fn slow_answer_times_out() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(answer("{}"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = GoogleApiConfig::builder()
        .api_key("test-key")
        .api_base(server.uri())
        .timeout_secs(1u64)
        .build()?;
    let client = GeminiClient::new(config, MODEL)?;
    let err = client
        .generate_json(&text_request("?"))
        .await
        .expect_err("slow answer must time out");
    assert_eq!(err.kind, GenerationErrorKind::Timeout(1));
    Ok(())
}

#[test]
fn empty_api_key_is_rejected() -> anyhow::Result<()> {
    let config = GoogleApiConfig::builder().api_key("").build()?;
    let err = GeminiClient::new(config, MODEL).expect_err("empty key must be rejected");
    assert!(matches!(err.kind, GenerationErrorKind::MissingApiKey(_)));
    Ok(())
}
