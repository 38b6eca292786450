#![doc = include_str!("../README.md")]

// Buffers and I/O
pub mod error;
pub mod image;

// Stages
pub mod filters;
pub mod grayscale;
pub mod stats;
pub mod threshold;

// Drivers used by the command-line tool
pub mod batch;
pub mod config;
pub mod pipeline;
pub mod preview;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{ConfigError, Error, LoadError, ProcessingError, Result, SaveError};
pub use crate::grayscale::to_grayscale;
pub use crate::pipeline::{run_single, RunOptions, RunOutput};
pub use crate::stats::ImageStats;
pub use crate::threshold::{adaptive_threshold, global_threshold, AdaptiveOptions, ThresholdMethod};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use gray_binarizer::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> gray_binarizer::Result<()> {
/// let image = load_image(Path::new("scan.png"))?;
/// let gray = to_grayscale(&image);
/// let binary = adaptive_threshold(&gray, &AdaptiveOptions::default())?;
/// save_image(&binary, Path::new("scan_binary.png"))?;
/// println!("{}", ImageStats::compute(Some(&image), Some(&gray), Some(&binary)));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::filters::BorderMode;
    pub use crate::image::io::{load_image, save_image};
    pub use crate::image::{BinaryImage, GrayImageU8, ImageView, RasterImage};
    pub use crate::{
        adaptive_threshold, global_threshold, to_grayscale, AdaptiveOptions, ImageStats,
        ThresholdMethod,
    };
}
