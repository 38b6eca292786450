#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Writes the checkerboard as an 8-bit grayscale file.
pub fn write_checkerboard(path: &Path, width: u32, height: u32, cell: u32) {
    let data = checkerboard_u8(width as usize, height as usize, cell as usize);
    GrayImage::from_raw(width, height, data)
        .expect("checkerboard buffer matches dimensions")
        .save(path)
        .expect("write checkerboard");
}

/// Writes an RGB image filled with a single color.
pub fn write_solid_rgb(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .expect("write solid rgb");
}

/// Writes a horizontal RGB gradient whose channels differ, so the luma
/// weights matter.
pub fn write_rgb_gradient(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, 255 - r])
    })
    .save(path)
    .expect("write rgb gradient");
}

/// Writes a grayscale page whose brightness falls off left to right, with a
/// dark mark of `mark` width every `period` columns.
pub fn write_shaded_page(path: &Path, width: u32, height: u32, period: u32, mark: u32) {
    GrayImage::from_fn(width, height, |x, _| {
        let paper = 230 - (x * 150 / width.max(1)) as u8;
        if x % period < mark {
            Luma([paper / 3])
        } else {
            Luma([paper])
        }
    })
    .save(path)
    .expect("write shaded page");
}

/// 2×1 indexed-color PNG: palette red, blue; pixels use entries 0 and 1.
const PALETTE_PNG: [u8; 86] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x08, 0x03, 0x00, 0x00, 0x00, 0xc3,
    0xfc, 0x8f, 0xb8, 0x00, 0x00, 0x00, 0x06, 0x50, 0x4c, 0x54, 0x45, 0xff, 0x00, 0x00, 0x00,
    0x00, 0xff, 0x6c, 0xa1, 0xfd, 0x8e, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78,
    0x9c, 0x63, 0x60, 0x60, 0x04, 0x00, 0x00, 0x04, 0x00, 0x02, 0xbf, 0x7a, 0x3f, 0x4a, 0x00,
    0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Writes [`PALETTE_PNG`].
pub fn write_palette_png(path: &Path) {
    std::fs::write(path, PALETTE_PNG).expect("write palette png");
}
