use image::{DynamicImage, RgbImage};

use crate::core::processing::crop::crop_to_aspect;
use crate::core::processing::flatten::flatten_to_rgb;
use crate::core::processing::resize::{resize_rgb8, resize_rgba8};
use crate::error::Result;
use crate::io::reader::decode_image;
use crate::io::writers::png::encode_png;
use crate::types::{ResampleFilter, TargetSize};

/// Flatten, centered-crop to the target aspect ratio, then resize to exactly `target`
pub fn crop_and_resize(
    img: DynamicImage,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    let rgb = flatten_to_rgb(img);
    let cropped = crop_to_aspect(&rgb, target);
    resize_rgb8(cropped, target, filter)
}

/// Resize to exactly `target` without cropping. Alpha survives when present.
pub fn stretch_resize(
    img: DynamicImage,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    if img.color().has_alpha() {
        let rgba = resize_rgba8(img.to_rgba8(), target, filter)?;
        Ok(DynamicImage::ImageRgba8(rgba))
    } else {
        let rgb = resize_rgb8(flatten_to_rgb(img), target, filter)?;
        Ok(DynamicImage::ImageRgb8(rgb))
    }
}

/// Encoded image bytes in, PNG bytes out
pub fn crop_and_resize_bytes(
    bytes: &[u8],
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let img = decode_image(bytes)?;
    let out = crop_and_resize(img, target, filter)?;
    encode_png(&DynamicImage::ImageRgb8(out))
}

pub fn stretch_resize_bytes(
    bytes: &[u8],
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let img = decode_image(bytes)?;
    let out = stretch_resize(img, target, filter)?;
    encode_png(&out)
}
