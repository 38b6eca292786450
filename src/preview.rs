//! Side-by-side rendering of the three stages of a run.
//!
//! Panels are laid out left to right as original, grayscale, binary, separated
//! by [`PANEL_GAP`] white columns. A stage that was not run is drawn as a
//! flat mid-gray panel of the original's size.
use crate::error::{ProcessingError, Stage};
use crate::image::io::Encode;
use crate::image::{BinaryImage, GrayImageU8, RasterImage};
use image::{imageops, Rgb, RgbImage};

pub const PANEL_GAP: u32 = 8;
const MISSING_FILL: Rgb<u8> = Rgb([128, 128, 128]);
const GAP_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Compose original, grayscale and binary buffers into one RGB image.
///
/// The original is required; it fixes the panel size, and the other stages
/// must match it.
pub fn compose_preview(
    image: Option<&RasterImage>,
    gray: Option<&GrayImageU8>,
    binary: Option<&BinaryImage>,
) -> Result<RgbImage, ProcessingError> {
    let image = image.ok_or(ProcessingError::MissingStage(Stage::Load))?;
    let original = to_rgb(image)?;
    let (w, h) = original.dimensions();

    let mut panels = vec![original];
    for stage in [gray.map(|g| g as &dyn Encode), binary.map(|b| b as &dyn Encode)] {
        let panel = match stage {
            Some(buffer) => to_rgb(buffer)?,
            None => RgbImage::from_pixel(w, h, MISSING_FILL),
        };
        if panel.dimensions() != (w, h) {
            return Err(ProcessingError::BufferSize {
                expected: (w * h) as usize,
                actual: (panel.width() * panel.height()) as usize,
            });
        }
        panels.push(panel);
    }

    let mut canvas = RgbImage::from_pixel(3 * w + 2 * PANEL_GAP, h, GAP_FILL);
    for (i, panel) in panels.iter().enumerate() {
        let x = i as u32 * (w + PANEL_GAP);
        imageops::replace(&mut canvas, panel, i64::from(x), 0);
    }
    Ok(canvas)
}

fn to_rgb(buffer: &dyn Encode) -> Result<RgbImage, ProcessingError> {
    let (w, h) = buffer.dimensions();
    buffer
        .to_dynamic()
        .map(|d| d.into_rgb8())
        .ok_or(ProcessingError::BufferSize {
            expected: w * h,
            actual: 0,
        })
}
