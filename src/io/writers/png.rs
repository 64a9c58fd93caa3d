use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageEncoder};

use crate::error::Result;

fn write_png_to<W: Write>(writer: W, img: &DynamicImage) -> Result<()> {
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color().into())?;
    Ok(())
}

pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_png_to(&mut buf, img)?;
    Ok(buf)
}

pub fn write_png(output: &Path, img: &DynamicImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    write_png_to(&mut writer, img)?;
    writer.flush()?;
    Ok(())
}
