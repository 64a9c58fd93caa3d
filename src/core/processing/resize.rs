use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{RgbImage, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ResampleFilter, TargetSize};

pub fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Box => ResizeAlg::Convolution(FilterType::Box),
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resamples an interleaved 8-bit buffer to exactly `target`
pub fn resize_u8_pixels(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target: TargetSize,
    pixel_type: PixelType,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, pixel_type)?;
    let mut dst_image = Image::new(target.width(), target.height(), pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

pub fn resize_rgb8(img: RgbImage, target: TargetSize, filter: ResampleFilter) -> Result<RgbImage> {
    let (cols, rows) = img.dimensions();
    if (cols, rows) == (target.width(), target.height()) {
        debug!("Image already {}, skipping resize", target);
        return Ok(img);
    }
    debug!("Original size: {}x{}, New size: {}", cols, rows, target);

    let out = resize_u8_pixels(img.into_raw(), cols, rows, target, PixelType::U8x3, filter)?;
    RgbImage::from_raw(target.width(), target.height(), out)
        .ok_or_else(|| Error::Processing(format!("resized RGB buffer does not fit {}", target)))
}

pub fn resize_rgba8(
    img: RgbaImage,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (cols, rows) = img.dimensions();
    if (cols, rows) == (target.width(), target.height()) {
        debug!("Image already {}, skipping resize", target);
        return Ok(img);
    }
    debug!("Original size: {}x{}, New size: {} (RGBA)", cols, rows, target);

    let out = resize_u8_pixels(img.into_raw(), cols, rows, target, PixelType::U8x4, filter)?;
    RgbaImage::from_raw(target.width(), target.height(), out)
        .ok_or_else(|| Error::Processing(format!("resized RGBA buffer does not fit {}", target)))
}
