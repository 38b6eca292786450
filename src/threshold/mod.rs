//! Grayscale → binary conversion.
//!
//! Both binarizers accept only a [`GrayImageU8`], so the grayscale stage is
//! always run explicitly before either of them. Output pixels are `255` where
//! the sample is strictly above its cutoff and `0` otherwise.
mod adaptive;
mod global;

pub use adaptive::{adaptive_threshold, local_mean, AdaptiveOptions};
pub use global::{global_threshold, DEFAULT_THRESHOLD};

use crate::error::ProcessingError;
use crate::image::{BinaryImage, GrayImageU8};
use serde::Deserialize;

/// Which binarizer a run uses.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ThresholdMethod {
    /// Single cutoff for every pixel.
    Global {
        #[serde(default = "default_threshold")]
        value: i32,
    },
    /// Per-pixel cutoff from the local mean.
    Adaptive(AdaptiveOptions),
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

impl Default for ThresholdMethod {
    fn default() -> Self {
        ThresholdMethod::Global {
            value: DEFAULT_THRESHOLD,
        }
    }
}

impl ThresholdMethod {
    pub fn apply(&self, gray: &GrayImageU8) -> Result<BinaryImage, ProcessingError> {
        match self {
            ThresholdMethod::Global { value } => Ok(global_threshold(gray, *value)),
            ThresholdMethod::Adaptive(options) => adaptive_threshold(gray, options),
        }
    }
}
