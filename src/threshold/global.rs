use crate::image::{BinaryImage, GrayImageU8};
use log::debug;

/// Cutoff used when none is given.
pub const DEFAULT_THRESHOLD: i32 = 128;

/// `255` where `gray > threshold`, else `0`.
///
/// `threshold` is not range-checked: anything below 0 whitens every pixel and
/// anything at or above 255 blackens every pixel.
pub fn global_threshold(gray: &GrayImageU8, threshold: i32) -> BinaryImage {
    let binary = BinaryImage::from_gray(gray, |_, _, v| i32::from(v) > threshold);
    debug!(
        "global threshold {threshold}: {} white pixels",
        binary.white_pixels()
    );
    binary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    fn ramp() -> GrayImageU8 {
        GrayImageU8::from_fn(16, 16, |x, y| (y * 16 + x) as u8)
    }

    #[test]
    fn strictly_greater_is_white() {
        let gray = ramp();
        for t in [0, 1, 127, 128, 200, 254] {
            let binary = global_threshold(&gray, t);
            for y in 0..16 {
                for x in 0..16 {
                    let expected = if i32::from(gray.get(x, y)) > t { 255 } else { 0 };
                    assert_eq!(binary.get(x, y), expected, "t={t} at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn value_equal_to_threshold_is_black() {
        let gray = GrayImageU8::from_fn(2, 1, |x, _| if x == 0 { 100 } else { 101 });
        let binary = global_threshold(&gray, 100);
        assert_eq!(binary.as_raw(), &[0, 255]);
    }

    #[test]
    fn threshold_255_has_no_white() {
        let gray = ramp();
        let binary = global_threshold(&gray, 255);
        assert_eq!(binary.white_pixels(), 0);
        assert_eq!(binary.black_pixels(), gray.pixel_count());
    }

    #[test]
    fn out_of_range_thresholds_are_compared_as_is() {
        let gray = ramp();
        assert_eq!(global_threshold(&gray, -1).black_pixels(), 0);
        assert_eq!(global_threshold(&gray, 1000).white_pixels(), 0);
    }
}
