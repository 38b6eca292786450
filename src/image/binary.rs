use super::{GrayImageU8, ImageView};
use crate::error::ProcessingError;

/// Sample value of a foreground (white) pixel.
pub const WHITE: u8 = 255;
/// Sample value of a background (black) pixel.
pub const BLACK: u8 = 0;

/// Two-level 8-bit buffer whose samples are exactly `0` or `255`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// Wrap raw bytes, rejecting any sample that is neither 0 nor 255.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ProcessingError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(ProcessingError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        if let Some(&value) = data.iter().find(|&&v| v != WHITE && v != BLACK) {
            return Err(ProcessingError::NotBinary { value });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Map every pixel of `gray` through `is_white`. Only the binarizers build
    /// buffers this way, so the two-level invariant holds by construction.
    pub(crate) fn from_gray(gray: &GrayImageU8, mut is_white: impl FnMut(usize, usize, u8) -> bool) -> Self {
        let (width, height) = (gray.width(), gray.height());
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in gray.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                data.push(if is_white(x, y, v) { WHITE } else { BLACK });
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn is_white(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == WHITE
    }

    pub fn white_pixels(&self) -> usize {
        self.data.iter().filter(|&&v| v == WHITE).count()
    }

    pub fn black_pixels(&self) -> usize {
        self.data.len() - self.white_pixels()
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl ImageView for BinaryImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
