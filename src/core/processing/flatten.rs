use image::{DynamicImage, RgbImage};
use tracing::debug;

/// Opaque three-channel copy of `img`. Alpha is discarded rather than composited, so
/// transparent pixels keep their stored color.
pub fn flatten_to_rgb(img: DynamicImage) -> RgbImage {
    let color = img.color();
    if color.has_alpha() {
        debug!("Dropping alpha channel from {:?} image", color);
    }
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}
