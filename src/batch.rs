//! Directory-wide processing, one file at a time.
//!
//! Every regular file whose extension names a readable image format is run
//! through [`run_stages`]. A file that fails to load or process is recorded
//! and skipped; the rest of the directory is still processed.
use crate::error::{Error, LoadError};
use crate::image::io::load_image;
use crate::pipeline::{run_stages, OutputPaths, RunOutput, BINARY_SUFFIX, GRAYSCALE_SUFFIX};
use crate::threshold::ThresholdMethod;
use image::ImageFormat;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./output_images";

#[derive(Debug)]
pub struct BatchItem {
    pub input: PathBuf,
    pub output: RunOutput,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<BatchItem>,
    pub failures: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failures.len()
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.exists() {
        return Err(LoadError::NotFound(dir.to_path_buf()));
    }
    let read_dir_err = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && is_image_path(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}

/// `output_dir/<stem>_grayscale.<ext>` and `output_dir/<stem>_binary.<ext>`.
pub fn batch_outputs(input: &Path, output_dir: &Path) -> OutputPaths {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    let named = |suffix: &str| output_dir.join(format!("{stem}{suffix}.{ext}"));
    OutputPaths {
        grayscale: Some(named(GRAYSCALE_SUFFIX)),
        binary: Some(named(BINARY_SUFFIX)),
    }
}

/// Process every image in `input_dir`, writing results into `output_dir`.
///
/// Only a failure to list `input_dir` is returned as an error.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    method: &ThresholdMethod,
) -> Result<BatchReport, LoadError> {
    let files = list_images(input_dir)?;
    info!(
        "batch: {} image(s) in {} -> {}",
        files.len(),
        input_dir.display(),
        output_dir.display()
    );

    let mut report = BatchReport::default();
    for input in files {
        let outputs = batch_outputs(&input, output_dir);
        let result = load_image(&input)
            .map_err(Error::from)
            .and_then(|image| run_stages(image, method, &outputs));
        match result {
            Ok(output) => report.processed.push(BatchItem { input, output }),
            Err(err) => {
                warn!("skipping {}: {err}", input.display());
                report.failures.push((input, err));
            }
        }
    }
    Ok(report)
}
