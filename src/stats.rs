//! Pixel statistics over whichever buffers a run produced.
//!
//! Keys are only present for stages that actually ran: a run that stopped
//! after loading reports just `original_size` and `original_mode`.
use crate::image::{BinaryImage, GrayImageU8, ImageView, RasterImage};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImageStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_size: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grayscale_min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grayscale_max: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grayscale_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_white_pixels: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_black_pixels: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_white_percentage: Option<f64>,
}

impl ImageStats {
    /// Collect statistics from the buffers that exist.
    pub fn compute(
        image: Option<&RasterImage>,
        gray: Option<&GrayImageU8>,
        binary: Option<&BinaryImage>,
    ) -> Self {
        let mut stats = Self::default();

        if let Some(image) = image {
            stats.original_size = Some((image.width(), image.height()));
            stats.original_mode = Some(image.mode().to_string());
        }

        // an empty buffer has no min/max, so its grayscale keys stay absent
        if let Some(gray) = gray.filter(|g| g.pixel_count() > 0) {
            let mut min = u8::MAX;
            let mut max = u8::MIN;
            let mut sum = 0u64;
            for row in gray.rows() {
                for &v in row {
                    min = min.min(v);
                    max = max.max(v);
                    sum += u64::from(v);
                }
            }
            stats.grayscale_min = Some(min);
            stats.grayscale_max = Some(max);
            stats.grayscale_mean = Some(sum as f64 / gray.pixel_count() as f64);
        }

        if let Some(binary) = binary {
            let total = binary.pixel_count();
            let white = binary.white_pixels();
            stats.binary_white_pixels = Some(white);
            stats.binary_black_pixels = Some(total - white);
            stats.binary_white_percentage = Some(if total == 0 {
                0.0
            } else {
                white as f64 / total as f64 * 100.0
            });
        }

        stats
    }

    /// `(key, value)` pairs for every present metric, in report order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some((w, h)) = self.original_size {
            out.push(("original_size", format!("({w}, {h})")));
        }
        push(&mut out, "original_mode", self.original_mode.as_ref());
        push(&mut out, "grayscale_min", self.grayscale_min);
        push(&mut out, "grayscale_max", self.grayscale_max);
        push(&mut out, "grayscale_mean", self.grayscale_mean.map(Float));
        push(&mut out, "binary_white_pixels", self.binary_white_pixels);
        push(&mut out, "binary_black_pixels", self.binary_black_pixels);
        push(&mut out, "binary_white_percentage", self.binary_white_percentage.map(Float));
        out
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

fn push<T: fmt::Display>(out: &mut Vec<(&'static str, String)>, key: &'static str, v: Option<T>) {
    if let Some(v) = v {
        out.push((key, v.to_string()));
    }
}

/// Floats always keep a fractional part: `50.0`, not `50`.
struct Float(f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for ImageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.entries() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
