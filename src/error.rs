//! Error taxonomy for loading, processing and saving images.
//!
//! Each stage of a run has its own error type so callers can tell a bad input
//! path apart from a bad parameter or an unwritable output. [`Error`] wraps all
//! of them for the pipeline and CLI layers.
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read an encoded image from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Stage an output depends on. Only the loaded original is ever required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Load => f.write_str("load"),
        }
    }
}

/// Invalid parameters or malformed buffers handed to a transform.
#[derive(Debug, Error, PartialEq)]
pub enum ProcessingError {
    #[error("block size must be odd and at least 1, got {0}")]
    InvalidBlockSize(usize),

    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("binary buffer contains value {value}, expected only 0 or 255")]
    NotBinary { value: u8 },

    #[error("the {0} stage has not been run")]
    MissingStage(Stage),
}

/// Failure to encode or write an image.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{width}x{height} buffer does not fit an encodable image: {}", path.display())]
    InvalidBuffer {
        path: PathBuf,
        width: usize,
        height: usize,
    },

    #[error("failed to serialize JSON for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to read or parse a JSON run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
