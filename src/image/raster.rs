//! Decoded source image with 1 (gray) or 3 (RGB) interleaved 8-bit channels.
use crate::error::ProcessingError;
use image::{ColorType, DynamicImage};
use std::fmt;

/// Channel layout of a [`RasterImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channels {
    Gray,
    Rgb,
}

impl Channels {
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// Pixel layout of the file as decoded, before channel normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    L,
    La,
    Rgb,
    Rgba,
    L16,
    La16,
    Rgb16,
    Rgba16,
    Rgb32F,
    Rgba32F,
    Other(String),
}

impl From<ColorType> for ColorMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 => ColorMode::L,
            ColorType::La8 => ColorMode::La,
            ColorType::Rgb8 => ColorMode::Rgb,
            ColorType::Rgba8 => ColorMode::Rgba,
            ColorType::L16 => ColorMode::L16,
            ColorType::La16 => ColorMode::La16,
            ColorType::Rgb16 => ColorMode::Rgb16,
            ColorType::Rgba16 => ColorMode::Rgba16,
            ColorType::Rgb32F => ColorMode::Rgb32F,
            ColorType::Rgba32F => ColorMode::Rgba32F,
            other => ColorMode::Other(format!("{other:?}")),
        }
    }
}

impl ColorMode {
    /// Whether the decoded layout carries color (and normalises to [`Channels::Rgb`]).
    pub fn has_color(&self) -> bool {
        !matches!(
            self,
            ColorMode::L | ColorMode::La | ColorMode::L16 | ColorMode::La16
        )
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::L => "L",
            ColorMode::La => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::L16 => "I;16",
            ColorMode::La16 => "LA;16",
            ColorMode::Rgb16 => "RGB;16",
            ColorMode::Rgba16 => "RGBA;16",
            ColorMode::Rgb32F => "RGB;32F",
            ColorMode::Rgba32F => "RGBA;32F",
            ColorMode::Other(name) => name,
        };
        f.write_str(name)
    }
}

/// Owned source pixels. Samples are interleaved per pixel, rows are packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    channels: Channels,
    mode: ColorMode,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap raw interleaved samples. `data` must hold `width × height × channels` bytes.
    pub fn new(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, ProcessingError> {
        let expected = width * height * channels.count();
        if data.len() != expected {
            return Err(ProcessingError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let mode = match channels {
            Channels::Gray => ColorMode::L,
            Channels::Rgb => ColorMode::Rgb,
        };
        Ok(Self {
            width,
            height,
            channels,
            mode,
            data,
        })
    }

    /// Normalise a decoded image: alpha is dropped, gray layouts become one
    /// channel, everything else becomes RGB. Deeper samples are reduced to 8 bits.
    ///
    /// The decoder expands palette images before they get here, so their mode
    /// is reported as `RGB` or `RGBA`, never as a palette mode.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let mode = ColorMode::from(img.color());
        let width = img.width() as usize;
        let height = img.height() as usize;
        let (channels, data) = if mode.has_color() {
            (Channels::Rgb, img.into_rgb8().into_raw())
        } else {
            (Channels::Gray, img.into_luma8().into_raw())
        };
        Self {
            width,
            height,
            channels,
            mode,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Layout of the file this buffer was decoded from.
    pub fn mode(&self) -> &ColorMode {
        &self.mode
    }

    /// Interleaved samples of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let len = self.width * self.channels.count();
        let start = y * len;
        &self.data[start..start + len]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};

    #[test]
    fn rgba_drops_alpha() {
        let img = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 0]));
        let raster = RasterImage::from_dynamic(DynamicImage::ImageRgba8(img));
        assert_eq!(raster.channels(), Channels::Rgb);
        assert_eq!(raster.mode(), &ColorMode::Rgba);
        assert_eq!(raster.as_raw(), &[10, 20, 30, 10, 20, 30]);
    }

    #[test]
    fn gray_alpha_becomes_single_channel() {
        let img = GrayAlphaImage::from_pixel(1, 2, LumaA([77, 5]));
        let raster = RasterImage::from_dynamic(DynamicImage::ImageLumaA8(img));
        assert_eq!(raster.channels(), Channels::Gray);
        assert_eq!(raster.mode().to_string(), "LA");
        assert_eq!(raster.as_raw(), &[77, 77]);
    }

    #[test]
    fn new_checks_sample_count() {
        let err = RasterImage::new(2, 2, Channels::Rgb, vec![0; 4]).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::BufferSize {
                expected: 12,
                actual: 4
            }
        );
    }
}
