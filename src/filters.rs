//! Box filter (local mean) over 8-bit grayscale input.
//!
//! The window is square with an odd side `size`, centred on each pixel. The
//! filter runs as two separable passes that accumulate exact integer sums,
//! followed by a single `f64` division by `size²`, so a uniform region yields
//! its value exactly. Samples outside the image are supplied by [`BorderMode`].
use crate::error::ProcessingError;
use crate::image::{ImageF64, ImageU8, ImageView, ImageViewMut};
use serde::Deserialize;

/// How samples beyond the image edge are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Replicate the nearest edge sample (`a a a | a b c d`).
    #[default]
    Nearest,
    /// Mirror about the edge, repeating the edge sample (`c b a | a b c d`).
    Reflect,
    /// Treat out-of-range samples as 0. The divisor stays `size²`.
    Zero,
}

impl BorderMode {
    /// Map a possibly out-of-range coordinate onto `0..len`. `None` means the
    /// sample contributes nothing.
    #[inline]
    pub fn resolve(self, idx: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let n = len as isize;
        match self {
            BorderMode::Nearest => Some(idx.clamp(0, n - 1) as usize),
            BorderMode::Reflect => {
                let m = idx.rem_euclid(2 * n);
                Some(if m < n { m } else { 2 * n - 1 - m } as usize)
            }
            BorderMode::Zero => (0..n).contains(&idx).then_some(idx as usize),
        }
    }
}

/// Validate a box window side: odd and at least 1.
pub fn check_window(size: usize) -> Result<(), ProcessingError> {
    if size % 2 == 1 {
        Ok(())
    } else {
        Err(ProcessingError::InvalidBlockSize(size))
    }
}

/// Mean of the `size × size` window around every pixel.
///
/// Both passes keep a running window sum: moving one step adds the entering
/// sample and removes the leaving one, so the cost does not depend on `size`.
pub fn box_mean(
    gray: ImageU8<'_>,
    size: usize,
    border: BorderMode,
) -> Result<ImageF64, ProcessingError> {
    check_window(size)?;
    let (w, h) = (gray.width(), gray.height());
    let mut out = ImageF64::zeros(w, h);
    if w == 0 || h == 0 {
        return Ok(out);
    }
    let radius = (size / 2) as isize;

    // horizontal
    let mut horiz = vec![0u64; w * h];
    for (y, src) in gray.rows().enumerate() {
        let sample = |i: isize| border.resolve(i, w).map_or(0, |sx| u64::from(src[sx]));
        let dst = &mut horiz[y * w..(y + 1) * w];
        let mut acc: u64 = (-radius..=radius).map(sample).sum();
        dst[0] = acc;
        for x in 1..w as isize {
            acc += sample(x + radius);
            acc -= sample(x - 1 - radius);
            dst[x as usize] = acc;
        }
    }

    // vertical, sliding whole rows of horizontal sums
    let norm = (size * size) as f64;
    let horiz = horiz.as_slice();
    let row = move |i: isize| border.resolve(i, h).map(move |sy| &horiz[sy * w..(sy + 1) * w]);
    let mut acc = vec![0u64; w];
    for src in (-radius..=radius).filter_map(row) {
        acc.iter_mut().zip(src).for_each(|(a, &v)| *a += v);
    }
    for y in 0..h {
        if y > 0 {
            let y = y as isize;
            if let Some(src) = row(y + radius) {
                acc.iter_mut().zip(src).for_each(|(a, &v)| *a += v);
            }
            if let Some(src) = row(y - 1 - radius) {
                acc.iter_mut().zip(src).for_each(|(a, &v)| *a -= v);
            }
        }
        for (px, &a) in out.row_mut(y).iter_mut().zip(&acc) {
            *px = a as f64 / norm;
        }
    }
    Ok(out)
}
