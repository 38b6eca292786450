//! Image and JSON I/O.
//!
//! - `load_image`: read a PNG/JPEG/etc. into an owned [`RasterImage`].
//! - `save_image`: encode any [`Encode`] buffer to the format implied by the
//!   path's extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryImage, Channels, GrayImageU8, ImageView, RasterImage};
use crate::error::{LoadError, SaveError};
use image::{DynamicImage, GrayImage, ImageError, ImageFormat, RgbImage};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Buffers that can be handed to an image encoder.
pub trait Encode {
    /// Width and height in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// Convert to an `image` crate buffer. `None` when the dimensions do not
    /// fit the encoder's `u32` extents.
    fn to_dynamic(&self) -> Option<DynamicImage>;
}

impl Encode for RasterImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h) = dims_u32(self.width(), self.height())?;
        let data = self.as_raw().to_vec();
        match self.channels() {
            Channels::Gray => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            Channels::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        }
    }
}

impl Encode for GrayImageU8 {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h) = dims_u32(self.width(), self.height())?;
        GrayImage::from_raw(w, h, self.as_raw().to_vec()).map(DynamicImage::ImageLuma8)
    }
}

impl Encode for BinaryImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h) = dims_u32(self.width(), self.height())?;
        GrayImage::from_raw(w, h, self.as_raw().to_vec()).map(DynamicImage::ImageLuma8)
    }
}

fn dims_u32(w: usize, h: usize) -> Option<(u32, u32)> {
    Some((u32::try_from(w).ok()?, u32::try_from(h).ok()?))
}

/// Load an image from disk, normalising it to 1 or 3 8-bit channels.
pub fn load_image(path: &Path) -> Result<RasterImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }
    let decoded = image::open(path).map_err(|e| match e {
        ImageError::IoError(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => LoadError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let raster = RasterImage::from_dynamic(decoded);
    info!(
        "loaded {} ({}x{}, {})",
        path.display(),
        raster.width(),
        raster.height(),
        raster.mode()
    );
    Ok(raster)
}

/// Encode `buffer` to the format named by the extension of `path`.
pub fn save_image<B: Encode + ?Sized>(buffer: &B, path: &Path) -> Result<(), SaveError> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| SaveError::UnsupportedFormat(path.to_path_buf()))?;
    if !format.writing_enabled() {
        return Err(SaveError::UnsupportedFormat(path.to_path_buf()));
    }
    let image = buffer.to_dynamic().ok_or_else(|| {
        let (width, height) = buffer.dimensions();
        SaveError::InvalidBuffer {
            path: path.to_path_buf(),
            width,
            height,
        }
    })?;
    ensure_parent_dir(path)?;
    debug!("encoding {}x{} as {format:?}", image.width(), image.height());
    image.save_with_format(path, format).map_err(|e| match e {
        ImageError::IoError(source) => SaveError::Io {
            path: path.to_path_buf(),
            source,
        },
        ImageError::Unsupported(_) => SaveError::UnsupportedFormat(path.to_path_buf()),
        source => SaveError::Encode {
            path: path.to_path_buf(),
            source,
        },
    })?;
    info!("saved {}", path.display());
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), SaveError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| SaveError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SaveError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
