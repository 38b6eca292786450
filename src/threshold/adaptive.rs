use crate::error::ProcessingError;
use crate::filters::{box_mean, BorderMode};
use crate::image::{BinaryImage, GrayImageU8, ImageF64};
use log::debug;
use serde::Deserialize;

/// Parameters of the local-mean binarizer.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdaptiveOptions {
    /// Side of the square averaging window; odd, at least 1.
    pub block_size: usize,
    /// Offset subtracted from the local mean before comparing.
    pub constant: f64,
    pub border: BorderMode,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            block_size: 11,
            constant: 2.0,
            border: BorderMode::Nearest,
        }
    }
}

impl AdaptiveOptions {
    pub fn new(block_size: usize, constant: f64) -> Self {
        Self {
            block_size,
            constant,
            ..Default::default()
        }
    }

    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }
}

/// Local mean map of `gray` for the given window.
pub fn local_mean(gray: &GrayImageU8, options: &AdaptiveOptions) -> Result<ImageF64, ProcessingError> {
    box_mean(gray.as_view(), options.block_size, options.border)
}

/// `255` where `gray > local_mean - constant`, else `0`.
pub fn adaptive_threshold(
    gray: &GrayImageU8,
    options: &AdaptiveOptions,
) -> Result<BinaryImage, ProcessingError> {
    let mean = local_mean(gray, options)?;
    let c = options.constant;
    let binary = BinaryImage::from_gray(gray, |x, y, v| f64::from(v) > mean.get(x, y) - c);
    debug!(
        "adaptive threshold block={} c={c} border={:?}: {} white pixels",
        options.block_size,
        options.border,
        binary.white_pixels()
    );
    Ok(binary)
}
