//! Photo download and decoding.
//!
//! Photos are decoded here rather than by the renderer so that a broken
//! download surfaces as an error and the slot can switch to the fallback.

use std::sync::Arc;

use iced::widget::image::Handle;

use estate_client::PropertySource;

use crate::error::GuiError;

/// Download and decode a photo.
pub async fn fetch_photo(source: Arc<dyn PropertySource>, url: String) -> Result<Handle, GuiError> {
    let bytes = source.image(&url).await?;
    let name = url.clone();
    tokio::task::spawn_blocking(move || decode_photo(&url, &bytes))
        .await
        .map_err(|e| GuiError::image_decode(name, e))?
}

/// Decode image bytes into an RGBA handle.
pub fn decode_photo(url: &str, bytes: &[u8]) -> Result<Handle, GuiError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| GuiError::image_decode(url, e))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_client::InMemorySource;

    const PNG: &[u8] = include_bytes!("../../assets/icon.png");

    #[test]
    fn test_decode_png() {
        assert!(decode_photo("icon.png", PNG).is_ok());
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_photo("https://img/broken.jpg", b"<html>not found</html>").unwrap_err();
        assert!(matches!(err, GuiError::ImageDecode { url, .. } if url == "https://img/broken.jpg"));
    }

    #[tokio::test]
    async fn test_fetch_photo() {
        let source: Arc<dyn PropertySource> = Arc::new(
            InMemorySource::default().with_image("https://img/1.png", PNG.to_vec()),
        );
        assert!(fetch_photo(Arc::clone(&source), "https://img/1.png".to_string()).await.is_ok());
        assert!(matches!(
            fetch_photo(source, "https://img/2.png".to_string()).await,
            Err(GuiError::Fetch(_))
        ));
    }
}
