//! Test utilities for delulu_server tests.

pub mod mock_image;
pub mod mock_text;

#[allow(unused_imports)]
pub use mock_image::{ImageBehavior, MockImageGenerator};
#[allow(unused_imports)]
pub use mock_text::{MockTextGenerator, TextBehavior};

use axum::body::Body;
use axum::http::Request;

const BOUNDARY: &str = "delulu-test-boundary";

/// JSON POST request.
#[allow(dead_code)]
pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Multipart POST request with a single file field.
#[allow(dead_code)]
pub fn multipart_request(uri: &str, field: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"photo.jpg\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// A small real JPEG.
#[allow(dead_code)]
pub fn sample_jpeg() -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 120, 40]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut out, image::ImageFormat::Jpeg)
        .unwrap();
    out.into_inner()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A well-formed story segment as the text model would return it.
#[allow(dead_code)]
pub fn story_json(new_location: bool, location_description: &str) -> String {
    serde_json::json!({
        "text": "Fog rolls over the harbour.",
        "choices": [
            {"text": "Follow the lantern", "impact": "Head to the pier", "tension_level": 1}
        ],
        "current_tension": 3,
        "story_state": {
            "location": "Harbour",
            "new_location": new_location,
            "location_description": location_description,
            "active_plot_threads": [],
            "unresolved_elements": [],
            "story_phase": "introduction",
            "emotional_tone": "eerie",
            "current_tension": 3
        },
        "story_over": false
    })
    .to_string()
}
