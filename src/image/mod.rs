pub mod binary;
pub mod f64;
pub mod gray;
pub mod io;
pub mod raster;
pub mod traits;
pub mod u8;

pub use self::binary::{BinaryImage, BLACK, WHITE};
pub use self::f64::ImageF64;
pub use self::gray::GrayImageU8;
pub use self::raster::{Channels, ColorMode, RasterImage};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
