//! Per-file conversion and the batch driver.
//!
//! Each input file is converted independently: a bad file is reported and
//! skipped, never aborting the rest of the batch. Output paths are derived
//! deterministically from the input path (`model.lxfml` becomes
//! `model_reconstructed.png`; `art.png` becomes `art.png.lxfml`).

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use brick_mosaic::{decode, encode, Palette};

use crate::error::ConvertError;
use crate::{codec, document};

/// Which way a batch converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// PNG image to LXFML model.
    Encode,
    /// LXFML model to PNG image.
    Decode,
}

impl Direction {
    /// Required input file extension (compared case-insensitively).
    pub fn extension(self) -> &'static str {
        match self {
            Direction::Encode => "png",
            Direction::Decode => "lxfml",
        }
    }
}

/// Convert one LXFML model to a PNG image.
///
/// Returns the output path (`<stem>_reconstructed.png` next to the input).
pub fn decode_file(path: &Path) -> Result<PathBuf, ConvertError> {
    let text = fs::read_to_string(path)?;
    let placements = document::parse(&text)?;
    let palette = Palette::shared();

    for material in decode::unknown_materials(&placements, palette) {
        tracing::warn!(material, path = %path.display(), "unknown material, painting black");
    }

    let image = decode::render(&placements, palette)?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "reconstructed image"
    );

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let output = path.with_file_name(format!("{stem}_reconstructed.png"));
    codec::write_png(&output, &image)?;
    Ok(output)
}

/// Convert one PNG image to an LXFML model.
///
/// Returns the output path (the input path with `.lxfml` appended). The
/// placements are planned before the output file is created, so an image
/// with no opaque pixels fails without leaving an empty document behind.
pub fn encode_file(path: &Path) -> Result<PathBuf, ConvertError> {
    let image = codec::read_png(path)?;
    tracing::info!(width = image.width(), height = image.height(), "read image");

    let palette = Palette::shared();
    let placements = encode::plan(&image, palette)?;

    let mut output = path.as_os_str().to_owned();
    output.push(".lxfml");
    let output = PathBuf::from(output);

    let file = fs::File::create(&output)?;
    let mut writer = BufWriter::new(file);
    document::write(&mut writer, &placements, palette)?;
    writer.flush()?;
    Ok(output)
}

/// Validate and convert a single file.
pub fn convert_one(path: &Path, direction: Direction) -> Result<PathBuf, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let expected = direction.extension();
    let extension_matches = path
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(expected))
        .unwrap_or(false);
    if !extension_matches {
        return Err(ConvertError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected,
        });
    }
    match direction {
        Direction::Encode => encode_file(path),
        Direction::Decode => decode_file(path),
    }
}

/// Convert a batch of files, isolating per-file failures.
///
/// Returns the number of successful conversions. Failures are reported and
/// skipped; successes print their output path.
pub fn run_batch(paths: &[PathBuf], direction: Direction) -> usize {
    let mut converted = 0;
    for path in paths {
        match convert_one(path, direction) {
            Ok(output) => {
                println!("{} -> {}", path.display(), output.display());
                converted += 1;
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping file");
            }
        }
    }
    converted
}
