//! Image serialization for rendered framebuffers.
//!
//! The tracer hands over raw f32 colors with no clamping of its own;
//! everything needed to reach a displayable 8-bit encoding happens here:
//!
//! - Quantization: clamp each channel to [0.0, 1.0] and scale to [0, 255].
//!   No gamma curve is applied — the renderer's output is treated as
//!   display-ready linear color.
//! - PNG export for everyday viewing.
//! - PPM export: the classic fixed-header binary P6 pixel dump
//!   (`P6\n<width> <height>\n255\n` followed by raw RGB bytes).

use std::fs::File;
use std::io::BufWriter;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, Rgb};
use log::{info, warn};

use crate::interval::Interval;

/// Quantize an f32 framebuffer to 8 bits per channel.
///
/// Each channel is clamped to [0.0, 1.0] first, so overexposed areas
/// saturate to white and negative values go to black, then scaled linearly
/// to [0, 255].
pub fn quantize(image: &ImageBuffer<Rgb<f32>, Vec<f32>>) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([
            (Interval::UNIT.clamp(pixel[0]) * 255.0) as u8,
            (Interval::UNIT.clamp(pixel[1]) * 255.0) as u8,
            (Interval::UNIT.clamp(pixel[2]) * 255.0) as u8,
        ])
    })
}

/// Save an f32 RGB framebuffer as an 8-bit PNG
///
/// Logs a warning on I/O errors instead of panicking; a failed save leaves
/// nothing behind worth crashing over.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    match quantize(image).save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save an f32 RGB framebuffer as a binary PPM (P6)
///
/// The encoder writes the fixed `P6` header with a 255 maximum sample value
/// followed by the interleaved RGB bytes, byte-compatible with the
/// historical pixel-dump format.
pub fn save_image_as_ppm(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let u8_image = quantize(image);

    let file = match File::create(output_path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Failed to create {}: {}", output_path, e);
            return;
        }
    };

    let encoder = PnmEncoder::new(BufWriter::new(file))
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
    let result = encoder.write_image(
        u8_image.as_raw(),
        u8_image.width(),
        u8_image.height(),
        ExtendedColorType::Rgb8,
    );

    match result {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
