#![cfg(feature = "gemini")]

//! Imagen client tests against a mock Generative Language API.

use delulu_error::GenerationErrorKind;
use delulu_interface::ImageGenerator;
use delulu_models::{GoogleApiConfig, ImagenClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "imagen-test";

fn client_for(server: &MockServer) -> anyhow::Result<ImagenClient> {
    let config = GoogleApiConfig::builder()
        .api_key("test-key")
        .api_base(server.uri())
        .timeout_secs(5u64)
        .build()?;
    Ok(ImagenClient::new(config, MODEL)?)
}

#[tokio::test]
async fn requests_one_portrait_jpeg() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{}:predict", MODEL)))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "instances": [{"prompt": "A lighthouse"}],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "3:4",
                "outputOptions": {"mimeType": "image/jpeg"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "/9j/4A==", "mimeType": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let image = client.generate_image("A lighthouse").await?;
    assert_eq!(image.bytes().as_slice(), &[0xFF_u8, 0xD8, 0xFF, 0xE0]);
    assert_eq!(image.mime_type(), "image/jpeg");
    Ok(())
}

#[tokio::test]
async fn aspect_ratio_is_configurable() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"parameters": {"aspectRatio": "16:9"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "AQID"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?.with_aspect_ratio("16:9");
    let image = client.generate_image("A beach").await?;
    assert_eq!(image.mime_type(), "image/jpeg");
    Ok(())
}

#[tokio::test]
async fn filter_verdict_is_filtered() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"raiFilteredReason": "Contains people"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_image("A crowded market")
        .await
        .expect_err("filtered image must fail");
    assert_eq!(err.kind, GenerationErrorKind::Filtered("Contains people".to_string()));
    Ok(())
}

#[tokio::test]
async fn empty_body_is_filtered() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_image("A crowded market")
        .await
        .expect_err("no predictions must fail");
    assert!(err.kind.is_filtered());
    Ok(())
}

#[tokio::test]
async fn missing_bytes_is_filtered() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"mimeType": "image/jpeg"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_image("A crowded market")
        .await
        .expect_err("missing bytes must fail");
    assert!(err.kind.is_filtered());
    Ok(())
}

#[tokio::test]
async fn server_error_is_http_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let err = client
        .generate_image("A lighthouse")
        .await
        .expect_err("500 must fail");
    assert_eq!(
        err.kind,
        GenerationErrorKind::Http {
            status_code: 500,
            message: "boom".to_string()
        }
    );
    Ok(())
}
