//! Crop rasterization for zoomed exports.
//!
//! Decodes the displayed variant from its data URI, copies the planned source rectangle onto an
//! output surface of the container's pixel size, and encodes the result as JPEG. Parts of the
//! source rectangle that fall outside the image stay black, matching a canvas `drawImage` onto
//! a fresh surface flattened to JPEG.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::mapper::ExportPlan;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("image source is not a base64 data URI")]
    NotDataUri,
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("image decode/encode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("export plan has an empty source or output")]
    EmptyPlan,
}

/// Decode the payload of a `data:<mime>;base64,<payload>` URI.
///
/// A bare base64 string without the `data:` prefix is accepted too.
///
/// # Errors
///
/// Returns [`RasterError::NotDataUri`] for non-base64 data URIs and URLs, or the decode error.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, RasterError> {
    let payload = match uri.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest.split_once(',').ok_or(RasterError::NotDataUri)?;
            if !header.ends_with(";base64") {
                return Err(RasterError::NotDataUri);
            }
            payload
        }
        None if uri.contains('/') && uri.contains(':') => return Err(RasterError::NotDataUri),
        None => uri,
    };
    Ok(STANDARD.decode(payload.trim())?)
}

/// Wrap encoded bytes in a base64 data URI.
#[must_use]
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Render the planned crop of `uri` and encode it as JPEG bytes.
///
/// # Errors
///
/// Returns an error if the plan is empty or the image cannot be decoded or encoded.
pub fn render_crop(uri: &str, plan: &ExportPlan) -> Result<Vec<u8>, RasterError> {
    let source = image::load_from_memory(&decode_data_uri(uri)?)?;
    let surface = crop_onto_surface(&source, plan)?;
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, plan.quality.clamp(1, 100)).encode_image(&surface)?;
    Ok(buffer)
}

/// [`render_crop`] wrapped as a `data:image/jpeg;base64,` URI.
///
/// # Errors
///
/// Same as [`render_crop`].
pub fn render_crop_data_uri(uri: &str, plan: &ExportPlan) -> Result<String, RasterError> {
    Ok(encode_data_uri("image/jpeg", &render_crop(uri, plan)?))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn crop_onto_surface(source: &DynamicImage, plan: &ExportPlan) -> Result<RgbImage, RasterError> {
    let rect = plan.source;
    if plan.output_width == 0 || plan.output_height == 0 || !(rect.width > 0.0 && rect.height > 0.0) {
        return Err(RasterError::EmptyPlan);
    }
    let rgb = source.to_rgb8();
    let mut surface = RgbImage::new(plan.output_width, plan.output_height);

    // Visible part of the source rectangle, in source pixels.
    let x0 = rect.x.max(0.0).floor();
    let y0 = rect.y.max(0.0).floor();
    let x1 = (rect.x + rect.width).min(f64::from(rgb.width())).ceil();
    let y1 = (rect.y + rect.height).min(f64::from(rgb.height())).ceil();
    if x1 <= x0 || y1 <= y0 {
        return Ok(surface);
    }

    let sx = f64::from(plan.output_width) / rect.width;
    let sy = f64::from(plan.output_height) / rect.height;
    let dest_x = ((x0 - rect.x) * sx).round();
    let dest_y = ((y0 - rect.y) * sy).round();
    let dest_w = ((x1 - x0) * sx).round().max(1.0) as u32;
    let dest_h = ((y1 - y0) * sy).round().max(1.0) as u32;

    let region = imageops::crop_imm(&rgb, x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32).to_image();
    let scaled = imageops::resize(&region, dest_w, dest_h, FilterType::Triangle);
    imageops::overlay(&mut surface, &scaled, dest_x as i64, dest_y as i64);
    Ok(surface)
}
