//! Inline image encoding.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::FrameResult;

/// Encode a canvas as a JPEG `data:` URL suitable for direct display.
pub fn to_jpeg_data_url(canvas: &RgbImage, quality: u8) -> FrameResult<String> {
    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality);
        encoder.encode_image(canvas)?;
    }

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix() {
        let canvas = RgbImage::new(8, 8);
        let url = to_jpeg_data_url(&canvas, 80).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert!(url.len() > "data:image/jpeg;base64,".len());
    }

    #[test]
    fn test_payload_is_valid_base64() {
        let canvas = RgbImage::new(8, 8);
        let url = to_jpeg_data_url(&canvas, 80).unwrap();
        let payload = url.trim_start_matches("data:image/jpeg;base64,");
        let decoded = STANDARD.decode(payload).unwrap();
        // JPEG SOI marker
        assert_eq!(&decoded[..2], &[0xFF, 0xD8]);
    }
}
