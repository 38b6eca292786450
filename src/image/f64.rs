//! Local-mean map produced by the box filter.
//!
//! Values keep their fractional part, so thresholds compare against the exact
//! window mean rather than a rounded 8-bit copy.
use super::traits::{ImageView, ImageViewMut};

/// Owned `f64` map with tightly packed rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageF64 {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ImageF64 {
    /// A `width × height` map filled with 0.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    pub fn as_raw(&self) -> &[f64] {
        &self.data
    }
}

impl ImageView for ImageF64 {
    type Pixel = f64;

    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn stride(&self) -> usize {
        self.width
    }
    fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.width..(y + 1) * self.width]
    }
}

impl ImageViewMut for ImageF64 {
    fn row_mut(&mut self, y: usize) -> &mut [f64] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }
}
