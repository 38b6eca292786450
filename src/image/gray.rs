use super::{ImageU8, ImageView};
use crate::error::ProcessingError;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw row-major bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ProcessingError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(ProcessingError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride: width,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl ImageView for GrayImageU8 {
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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_length() {
        let err = GrayImageU8::new(4, 3, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::BufferSize {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = GrayImageU8::from_fn(3, 2, |x, y| (y * 10 + x) as u8);
        assert_eq!(img.as_raw(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(img.row(1), &[10, 11, 12]);
        assert_eq!(img.get(2, 1), 12);
        assert_eq!(img.as_view().get(1, 1), 11);
    }
}
