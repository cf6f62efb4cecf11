use crate::error::{GalleryError, GalleryResult};

/// Responses smaller than this are treated as broken images
const MIN_IMAGE_BYTES: usize = 64;

/// Download image bytes, a grid thumbnail or the full picture for the detail view
///
/// The bytes are kept in memory by the caller and never written to disk.
pub async fn fetch_image(client: reqwest::Client, url: String) -> GalleryResult<Vec<u8>> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| GalleryError::Network { url: url.clone(), source })?;

    if !response.status().is_success() {
        return Err(GalleryError::Status {
            url,
            status: response.status().as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| GalleryError::Network { url: url.clone(), source })?;

    if bytes.len() < MIN_IMAGE_BYTES {
        return Err(GalleryError::Truncated { url, len: bytes.len() });
    }

    Ok(bytes.to_vec())
}
