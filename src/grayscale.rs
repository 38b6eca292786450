//! RGB → luminance reduction.
//!
//! Each output sample is `0.299·R + 0.587·G + 0.114·B`, evaluated in `f64`
//! left to right and truncated toward zero. Truncation (not rounding) means a
//! neutral pixel can lose one level, e.g. `(128, 128, 128)` maps to `127`.
//! Single-channel input passes through unchanged.
use crate::image::{Channels, GrayImageU8, RasterImage};
use log::debug;

pub const WEIGHT_R: f64 = 0.299;
pub const WEIGHT_G: f64 = 0.587;
pub const WEIGHT_B: f64 = 0.114;

/// Luminance of one RGB sample.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let v = WEIGHT_R * r as f64 + WEIGHT_G * g as f64 + WEIGHT_B * b as f64;
    v as u8
}

/// Reduce `image` to one channel.
pub fn to_grayscale(image: &RasterImage) -> GrayImageU8 {
    let (w, h) = (image.width(), image.height());
    let gray = match image.channels() {
        Channels::Gray => GrayImageU8::from_fn(w, h, |x, y| image.row(y)[x]),
        Channels::Rgb => GrayImageU8::from_fn(w, h, |x, y| {
            let px = &image.row(y)[x * 3..x * 3 + 3];
            luma(px[0], px[1], px[2])
        }),
    };
    debug!("grayscale {w}x{h} from {:?}", image.channels());
    gray
}
