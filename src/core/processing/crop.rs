use image::RgbImage;
use image::imageops::crop_imm;
use tracing::debug;

use crate::types::TargetSize;

/// Region of the source kept by a centered crop
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
        }
    }

    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::full(width, height)
    }
}

/// Centered crop of a `width`x`height` source whose aspect ratio matches `target`.
///
/// Ratios are compared by cross-multiplication so equal ratios never crop. A wider source
/// keeps its full height and loses width evenly from both sides; a taller source keeps its
/// full width and loses height evenly from top and bottom. Odd leftovers go to the right or
/// bottom edge.
pub fn centered_crop_rect(width: u32, height: u32, target: TargetSize) -> CropRect {
    let (w, h) = (width as u64, height as u64);
    let (tw, th) = (target.width() as u64, target.height() as u64);

    let source_cross = w * th;
    let target_cross = h * tw;

    if source_cross > target_cross {
        let new_width = ((h * tw) / th).clamp(1, w);
        let left = (w - new_width) / 2;
        CropRect {
            left: left as u32,
            top: 0,
            width: new_width as u32,
            height,
        }
    } else if source_cross < target_cross {
        let new_height = ((w * th) / tw).clamp(1, h);
        let top = (h - new_height) / 2;
        CropRect {
            left: 0,
            top: top as u32,
            width,
            height: new_height as u32,
        }
    } else {
        CropRect::full(width, height)
    }
}

pub fn crop_to_aspect(img: &RgbImage, target: TargetSize) -> RgbImage {
    let (width, height) = img.dimensions();
    let rect = centered_crop_rect(width, height, target);
    if rect.is_full(width, height) {
        debug!("Aspect ratio already matches {}, no crop", target);
        return img.clone();
    }
    debug!(
        "Cropping {}x{} to {}x{} at ({}, {})",
        width, height, rect.width, rect.height, rect.left, rect.top
    );
    crop_imm(img, rect.left, rect.top, rect.width, rect.height).to_image()
}
