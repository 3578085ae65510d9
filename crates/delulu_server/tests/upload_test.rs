//! Tests for upload verification.

mod test_utils;

use axum::http::StatusCode;
use delulu_server::{INVALID_IMAGE_DETAIL, verify_upload};
use test_utils::sample_jpeg;

#[tokio::test]
async fn test_verified_upload_keeps_bytes_and_mime() -> anyhow::Result<()> {
    let jpeg = sample_jpeg();

    let image = verify_upload(jpeg.clone())
        .await
        .map_err(|e| anyhow::anyhow!("rejected: {}", e.detail()))?;

    assert_eq!(image.bytes, jpeg);
    assert_eq!(image.mime, "image/jpeg");
    Ok(())
}

#[tokio::test]
async fn test_rejected_upload_is_bad_request() {
    for bytes in [Vec::new(), b"GIF89a but not really".to_vec()] {
        let err = verify_upload(bytes).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), INVALID_IMAGE_DETAIL);
    }
}

