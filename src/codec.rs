//! PNG codec: files to [`Image`] buffers and back.
//!
//! Decoding normalizes every supported input layout (grayscale, grayscale +
//! alpha, RGB, RGBA, paletted via EXPAND, 16-bit via STRIP_16) to 8-bit
//! RGBA, so the pipelines only ever see one pixel format. Encoding always
//! writes 8-bit RGBA to keep the transparency channel intact.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use brick_mosaic::{Image, Rgba};

use crate::error::ConvertError;

/// Decode a PNG file into an RGBA image.
pub fn read_png(path: &Path) -> Result<Image, ConvertError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buffer = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buffer)?;
    let data = &buffer[..info.buffer_size()];

    let pixels: Vec<Rgba> = match info.color_type {
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Rgba {
                r: p[0],
                g: p[1],
                b: p[2],
                a: p[3],
            })
            .collect(),
        png::ColorType::Rgb => data.chunks_exact(3).map(|p| Rgba::opaque(p[0], p[1], p[2])).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Rgba {
                r: p[0],
                g: p[0],
                b: p[0],
                a: p[1],
            })
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgba::opaque(v, v, v)).collect(),
        // EXPAND converts indexed input to RGB(A) before we see it.
        other => return Err(ConvertError::UnsupportedColorType(other)),
    };

    Ok(Image::from_pixels(info.width, info.height, pixels))
}

/// Encode an RGBA image to a PNG file.
pub fn write_png(path: &Path, image: &Image) -> Result<(), ConvertError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut data = Vec::with_capacity(image.pixels().len() * 4);
    for pixel in image.pixels() {
        data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&data)?;
    png_writer.finish()?;
    Ok(())
}
