use crate::constants::{WEBP_MAX_DIMENSION, WEBP_QUALITY};
use crate::error::{ConvertError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs;
use std::path::Path;

/// File sizes of one finished conversion, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub original_size: u64,
    pub converted_size: u64,
}

/// Loads an image, detecting the format from its contents first and the
/// file extension second.
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image and the source size in bytes
/// * `Err(ConvertError)` - If the file cannot be read or decoded
pub fn load_image(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    Ok((img, file_size))
}

/// Encodes an image as lossy WebP.
///
/// Images with an alpha channel are encoded as RGBA, everything else as RGB.
/// Other color types (16-bit, grayscale, float) are normalized first.
pub fn encode_webp(img: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(ConvertError::InvalidDimensions(
            width,
            height,
            WEBP_MAX_DIMENSION,
        ));
    }

    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
    } else {
        let rgb = img.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
    };

    encoded
        .map(|memory| memory.to_vec())
        .map_err(|e| ConvertError::WebpEncoding(format!("{:?}", e)))
}

/// Decodes `input_path` and writes it to `output_path` as WebP at the fixed
/// quality. An existing file at `output_path` is overwritten.
///
/// Encoding happens in memory, so a failed conversion never leaves an output
/// file behind.
pub fn convert_file(input_path: &Path, output_path: &Path) -> Result<ConversionStats> {
    let (img, original_size) = load_image(input_path)?;
    let encoded = encode_webp(&img, WEBP_QUALITY)?;
    fs::write(output_path, &encoded)?;

    Ok(ConversionStats {
        original_size,
        converted_size: encoded.len() as u64,
    })
}
