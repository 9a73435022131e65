//! Magic-byte validation for uploaded images.
//!
//! Only the leading bytes decide: the declared media type and the file
//! extension are ignored.

/// Number of leading bytes inspected.
pub const HEADER_LEN: usize = 8;

/// Full PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// JPEG start-of-image marker followed by the first marker prefix.
pub const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Error shown when a selected file fails validation.
pub const INVALID_IMAGE_MESSAGE: &str = "Only real PNG and JPEG images are supported.";

/// Image formats the analysis service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Canonical media type for the format.
    pub fn media_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
        }
    }
}

/// Identify the image format from the first bytes of a file.
///
/// Bytes past [`HEADER_LEN`] are never looked at.
pub fn sniff(bytes: &[u8]) -> Option<ImageKind> {
    let header = &bytes[..bytes.len().min(HEADER_LEN)];

    if header == &PNG_SIGNATURE[..] {
        Some(ImageKind::Png)
    } else if header.starts_with(&JPEG_SIGNATURE) {
        Some(ImageKind::Jpeg)
    } else {
        None
    }
}

/// Whether the bytes are a genuine PNG or JPEG image.
pub fn validate(bytes: &[u8]) -> bool {
    sniff(bytes).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature_accepted() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(b"\0\0\0\rIHDR");
        assert_eq!(sniff(&data), Some(ImageKind::Png));
        assert!(validate(&PNG_SIGNATURE));
    }

    #[test]
    fn test_jpeg_prefix_accepted() {
        assert_eq!(sniff(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F']), Some(ImageKind::Jpeg));
        assert_eq!(sniff(&[0xFF, 0xD8, 0xFF]), Some(ImageKind::Jpeg));
    }

    #[test]
    fn test_truncated_png_rejected() {
        assert!(!validate(&PNG_SIGNATURE[..7]));
        assert!(!validate(&[0xFF, 0xD8]));
        assert!(!validate(&[]));
    }

    #[test]
    fn test_other_formats_rejected() {
        // GIF, WebP (RIFF), BMP, random bytes that happen to be named .png
        assert!(!validate(b"GIF89a\x01\x00"));
        assert!(!validate(b"RIFF\x24\x00\x00\x00WEBP"));
        assert!(!validate(b"BM\x36\x00\x0c\x00\x00\x00"));
        assert!(!validate(&[0x12, 0x9A, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A]));
    }

    #[test]
    fn test_png_with_corrupted_tail_byte_rejected() {
        let mut data = PNG_SIGNATURE;
        data[7] = 0x00;
        assert!(!validate(&data));
    }

    #[test]
    fn test_media_type() {
        assert_eq!(ImageKind::Png.media_type(), "image/png");
        assert_eq!(ImageKind::Jpeg.media_type(), "image/jpeg");
    }
}
