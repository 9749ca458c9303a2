//! Payload validation and decoding
//!
//! The endpoint does not promise to return an image: error pages, captive
//! portals and empty bodies all come back as "successful" transfers. A
//! payload is only accepted once it fully decodes as a raster image.

use bytes::Bytes;

use crate::error::FetchError;
use crate::state::data::FetchedImage;

/// Decode the response body fetched from `url`.
///
/// The format is sniffed from the bytes themselves, not from headers.
/// The accepted payload is kept as-is, not copied.
/// CPU-bound for large images: call from a blocking worker.
pub fn decode_payload(url: &str, bytes: Bytes) -> Result<FetchedImage, FetchError> {
    if bytes.is_empty() {
        return Err(FetchError::EmptyBody { url: url.to_string() });
    }

    let format = image::guess_format(&bytes).map_err(|e| FetchError::Undecodable {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|e| {
        FetchError::Undecodable {
            url: url.to_string(),
            message: e.to_string(),
        }
    })?;

    Ok(FetchedImage::new(bytes, decoded.width(), decoded.height(), format))
}

/// Encode a solid-colour PNG for tests
#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32, shade: u8) -> Vec<u8> {
    use std::io::Cursor;

    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([shade, shade, shade, 255]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)
        .expect("encoding a PNG into memory cannot fail");
    buffer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    const URL: &str = "https://source.unsplash.com/random/390x844";

    #[test]
    fn test_decodes_png() {
        let bytes = Bytes::from(png_bytes(4, 3, 128));
        let image = decode_payload(URL, bytes.clone()).unwrap();

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.bytes(), &bytes[..]);
    }

    #[test]
    fn test_accepted_payload_is_not_copied() {
        let bytes = Bytes::from(png_bytes(32, 32, 90));
        let received_at = bytes.as_ptr();

        let image = decode_payload(URL, bytes).unwrap();

        assert_eq!(image.bytes().as_ptr(), received_at);
        assert_eq!(image.payload().as_ptr(), received_at);
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let err = decode_payload(URL, Bytes::new()).unwrap_err();
        assert_eq!(err, FetchError::EmptyBody { url: URL.to_string() });
    }

    #[test]
    fn test_ten_byte_junk_is_undecodable() {
        let err = decode_payload(URL, Bytes::from_static(b"not-image!")).unwrap_err();

        assert!(matches!(err, FetchError::Undecodable { .. }));
        assert_eq!(err.url(), URL);
    }

    #[test]
    fn test_truncated_png_is_undecodable() {
        let mut bytes = png_bytes(16, 16, 10);
        bytes.truncate(bytes.len() / 2);

        let err = decode_payload(URL, Bytes::from(bytes)).unwrap_err();
        assert!(matches!(err, FetchError::Undecodable { .. }));
    }

    #[test]
    fn test_html_error_page_is_undecodable() {
        let body = Bytes::from_static(b"<!DOCTYPE html><html><body>503 Service Unavailable</body></html>");
        assert!(decode_payload(URL, body).is_err());
    }
}
