use crate::error::AppError;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageReader;
use std::io::{Cursor, Read};
use std::path::Path;

// The preview frame in the window is 400x300 with a little padding.
const PREVIEW_MAX_WIDTH: u32 = 380;
const PREVIEW_MAX_HEIGHT: u32 = 280;
const PREVIEW_QUALITY: u8 = 80;

/// Render the picked file into the preview frame: decode, honor the EXIF
/// orientation tag, fit the preview box, and hand back a JPEG data URI the
/// `<img>` tag can use directly.
pub fn generate_preview(path: &Path) -> Result<String, AppError> {
    let mut img = ImageReader::open(path)
        .map_err(|e| AppError {
            message: format!("Failed to open image {}: {}", path.display(), e),
        })?
        .decode()
        .map_err(|e| AppError {
            message: format!("Failed to decode image {}: {}", path.display(), e),
        })?;

    let orientation = read_orientation(path);
    if orientation != 1 {
        img = apply_orientation(img, orientation);
    }

    if img.width() > PREVIEW_MAX_WIDTH || img.height() > PREVIEW_MAX_HEIGHT {
        img = img.resize(PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT, FilterType::Triangle);
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, PREVIEW_QUALITY);
    img.write_with_encoder(encoder)?;

    let b64 = base64::engine::general_purpose::STANDARD.encode(buffer.into_inner());
    Ok(format!("data:image/jpeg;base64,{}", b64))
}

/// Read the EXIF orientation tag from the file header. Defaults to 1
/// (upright) when there is no EXIF data or the tag is absent.
fn read_orientation(path: &Path) -> u32 {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return 1,
    };

    // Read first 128KB (covers most EXIF headers)
    let mut header_buf = Vec::with_capacity(128 * 1024);
    if file.take(128 * 1024).read_to_end(&mut header_buf).is_err() {
        return 1;
    }

    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(&header_buf)) {
        Ok(e) => e,
        Err(_) => return 1,
    };

    if let Some(field) = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) {
        match field.value {
            exif::Value::Short(ref v) => *v.first().unwrap_or(&1) as u32,
            exif::Value::Long(ref v) => *v.first().unwrap_or(&1),
            _ => 1,
        }
    } else {
        1
    }
}

/// Apply EXIF orientation to the image.
fn apply_orientation(img: image::DynamicImage, orientation: u32) -> image::DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.fliph().rotate90(),
        6 => img.rotate90(),
        7 => img.fliph().rotate270(),
        8 => img.rotate270(),
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn wide_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([200, 10, 10])))
    }

    #[test]
    fn rotations_swap_dimensions() {
        for orientation in [5, 6, 7, 8] {
            let rotated = apply_orientation(wide_image(), orientation);
            assert_eq!((rotated.width(), rotated.height()), (2, 4));
        }
    }

    #[test]
    fn flips_and_unknown_orientations_keep_dimensions() {
        for orientation in [1, 2, 3, 4, 0, 99] {
            let img = apply_orientation(wide_image(), orientation);
            assert_eq!((img.width(), img.height()), (4, 2));
        }
    }
}
