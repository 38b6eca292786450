//! One image, start to finish.
//!
//! Stages run in a fixed order, each a pure function of the previous buffer:
//! load → grayscale → binarize → statistics. When output paths are given, the
//! grayscale and binary buffers are saved right after they are produced. A
//! failed save is recorded in [`RunOutput::save_errors`] and the run goes on;
//! a failed load or an invalid parameter ends the run with an [`Error`].
use crate::error::{Error, SaveError};
use crate::grayscale::to_grayscale;
use crate::image::io::{load_image, save_image, Encode};
use crate::image::{BinaryImage, GrayImageU8, RasterImage};
use crate::stats::ImageStats;
use crate::threshold::ThresholdMethod;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Suffix inserted before the extension of the grayscale output.
pub const GRAYSCALE_SUFFIX: &str = "_grayscale";
/// Suffix inserted before the extension of the binary output.
pub const BINARY_SUFFIX: &str = "_binary";

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub method: ThresholdMethod,
    /// Base path for the derived `_grayscale` / `_binary` outputs.
    pub output: Option<PathBuf>,
}

/// Where a run writes its grayscale and binary results.
#[derive(Clone, Debug, Default)]
pub struct OutputPaths {
    pub grayscale: Option<PathBuf>,
    pub binary: Option<PathBuf>,
}

impl OutputPaths {
    /// Derive both outputs from one base path with [`derived_output_path`].
    pub fn from_base(base: &Path) -> Self {
        Self {
            grayscale: Some(derived_output_path(base, GRAYSCALE_SUFFIX)),
            binary: Some(derived_output_path(base, BINARY_SUFFIX)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StageTiming {
    pub grayscale_ms: f64,
    pub threshold_ms: f64,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub image: RasterImage,
    pub gray: GrayImageU8,
    pub binary: BinaryImage,
    pub stats: ImageStats,
    pub saved: Vec<PathBuf>,
    pub save_errors: Vec<SaveError>,
    pub timing: StageTiming,
}

/// Insert `suffix` before every `.` of `output`.
///
/// `out/result.png` with `_binary` becomes `out/result_binary.png`. Every dot
/// is rewritten, not only the extension's, so `./a.b.png` becomes
/// `_binary./a_binary.b_binary.png`.
pub fn derived_output_path(output: &Path, suffix: &str) -> PathBuf {
    let text = output.to_string_lossy();
    PathBuf::from(text.replace('.', &format!("{suffix}.")))
}

/// Load `input` and run every stage on it.
pub fn run_single(input: &Path, options: &RunOptions) -> Result<RunOutput, Error> {
    let image = load_image(input)?;
    let outputs = options
        .output
        .as_deref()
        .map(OutputPaths::from_base)
        .unwrap_or_default();
    run_stages(image, &options.method, &outputs)
}

/// Run grayscale, binarization and statistics on an already loaded image.
pub fn run_stages(
    image: RasterImage,
    method: &ThresholdMethod,
    outputs: &OutputPaths,
) -> Result<RunOutput, Error> {
    let mut saved = Vec::new();
    let mut save_errors = Vec::new();

    let gray_start = Instant::now();
    let gray = to_grayscale(&image);
    let grayscale_ms = gray_start.elapsed().as_secs_f64() * 1000.0;
    if let Some(path) = &outputs.grayscale {
        save_stage(&gray, path, &mut saved, &mut save_errors);
    }

    let threshold_start = Instant::now();
    let binary = method.apply(&gray)?;
    let threshold_ms = threshold_start.elapsed().as_secs_f64() * 1000.0;
    if let Some(path) = &outputs.binary {
        save_stage(&binary, path, &mut saved, &mut save_errors);
    }

    debug!("stages: grayscale {grayscale_ms:.3} ms, threshold {threshold_ms:.3} ms ({method:?})");

    let stats = ImageStats::compute(Some(&image), Some(&gray), Some(&binary));
    Ok(RunOutput {
        image,
        gray,
        binary,
        stats,
        saved,
        save_errors,
        timing: StageTiming {
            grayscale_ms,
            threshold_ms,
        },
    })
}

fn save_stage<B: Encode>(
    buffer: &B,
    path: &Path,
    saved: &mut Vec<PathBuf>,
    errors: &mut Vec<SaveError>,
) {
    match save_image(buffer, path) {
        Ok(()) => saved.push(path.to_path_buf()),
        Err(err) => {
            warn!("{err}");
            errors.push(err);
        }
    }
}
