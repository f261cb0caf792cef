//! Common test infrastructure for brickpix integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::Path;

use brick_mosaic::{Image, Rgba};

/// Build a minimal LXFML document containing the given bricks, each as
/// `(material, x, y)`.
pub fn lxfml_with_bricks(bricks: &[(u32, f64, f64)]) -> String {
    let mut text = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\" ?>\n\
         <LXFML versionMajor=\"5\" versionMinor=\"0\" name=\"Name\">\n\
         <Bricks cameraRef=\"1\">\n",
    );
    for (ref_id, (material, x, y)) in bricks.iter().enumerate() {
        writeln!(
            text,
            "<Brick refID=\"{ref_id}\" designID=\"3005\" itemNos=\"300526\">\n\
             <Part refID=\"{ref_id}\" designID=\"3005\" materials=\"{material},0\" decoration=\"0\">\n\
             <Bone refID=\"{bone}\" transformation=\"1,0,0,0,0,-1,0,1,0,{x},{y},0\"></Bone>\n\
             </Part>\n\
             </Brick>",
            bone = ref_id + 1,
        )
        .unwrap();
    }
    text.push_str("</Bricks>\n</LXFML>");
    text
}

/// Build an image from rows of `Option<[u8; 3]>`; `None` is transparent.
pub fn image_from_rows(rows: &[Vec<Option<[u8; 3]>>]) -> Image {
    let height = rows.len() as u32;
    let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
    let mut image = Image::new(width, height);
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(rgb) = cell {
                image.set(row as u32, col as u32, Rgba::opaque(rgb[0], rgb[1], rgb[2]));
            }
        }
    }
    image
}

/// Write an RGB (no alpha) PNG, for exercising codec normalization.
pub fn write_rgb_png(path: &Path, width: u32, height: u32, rgb: &[u8]) {
    write_png_as(path, width, height, png::ColorType::Rgb, rgb);
}

/// Write an 8-bit Grayscale PNG, one byte per pixel.
pub fn write_gray_png(path: &Path, width: u32, height: u32, gray: &[u8]) {
    write_png_as(path, width, height, png::ColorType::Grayscale, gray);
}

/// Write an 8-bit GrayscaleAlpha PNG, (gray, alpha) pairs.
pub fn write_gray_alpha_png(path: &Path, width: u32, height: u32, pairs: &[u8]) {
    write_png_as(path, width, height, png::ColorType::GrayscaleAlpha, pairs);
}

fn write_png_as(path: &Path, width: u32, height: u32, color_type: png::ColorType, data: &[u8]) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
}
