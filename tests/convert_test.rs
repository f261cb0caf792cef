//! File-level conversion tests: PNG in, LXFML out, and back.

mod common;

use std::fs;
use std::path::PathBuf;

use brick_mosaic::Rgba;
use brickpix::convert::{self, Direction};
use brickpix::{codec, error::ConvertError};
use pretty_assertions::assert_eq;

#[test]
fn test_decode_reference_document() {
    // One brick at the format's raw coordinates, material 26: the decoded
    // image is 1x1 with exactly that material's color, fully opaque.
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("single.lxfml");
    fs::write(&model, common::lxfml_with_bricks(&[(26, -16.4, 12.4)])).unwrap();

    let output = convert::decode_file(&model).unwrap();
    assert_eq!(output, dir.path().join("single_reconstructed.png"));

    let image = codec::read_png(&output).unwrap();
    assert_eq!((image.width(), image.height()), (1, 1));
    assert_eq!(image.get(0, 0), Rgba::opaque(21, 32, 40));
}

#[test]
fn test_decode_unknown_material_defaults_to_black() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("odd.lxfml");
    fs::write(&model, common::lxfml_with_bricks(&[(9999, -16.4, 12.4)])).unwrap();

    let output = convert::decode_file(&model).unwrap();
    let image = codec::read_png(&output).unwrap();
    assert_eq!(image.get(0, 0), Rgba::opaque(0, 0, 0));
}

#[test]
fn test_decode_empty_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("empty.lxfml");
    fs::write(&model, common::lxfml_with_bricks(&[])).unwrap();

    let result = convert::decode_file(&model);
    assert!(matches!(
        result,
        Err(ConvertError::Mosaic(brick_mosaic::MosaicError::EmptyModel))
    ));
    assert!(!dir.path().join("empty_reconstructed.png").exists());
}

#[test]
fn test_encode_decode_round_trip() {
    // A fully opaque mosaic of palette-exact colors survives a file-level
    // round trip bit-for-bit.
    let dir = tempfile::tempdir().unwrap();
    let source = common::image_from_rows(&[
        vec![Some([255, 255, 255]), Some([21, 32, 40]), Some([252, 204, 0])],
        vec![Some([34, 135, 19]), Some([23, 66, 130]), Some([112, 3, 16])],
    ]);

    let png_path = dir.path().join("art.png");
    codec::write_png(&png_path, &source).unwrap();

    let model_path = convert::encode_file(&png_path).unwrap();
    assert_eq!(model_path, dir.path().join("art.png.lxfml"));

    let rebuilt_path = convert::decode_file(&model_path).unwrap();
    let rebuilt = codec::read_png(&rebuilt_path).unwrap();
    assert_eq!(rebuilt, source);
}

#[test]
fn test_encode_quantizes_to_nearest_palette_color() {
    let dir = tempfile::tempdir().unwrap();
    let source = common::image_from_rows(&[vec![Some([250, 250, 250]), None]]);
    let png_path = dir.path().join("grey.png");
    codec::write_png(&png_path, &source).unwrap();

    let model_path = convert::encode_file(&png_path).unwrap();
    let text = fs::read_to_string(&model_path).unwrap();

    // Near-white maps to the white brick: material 1, catalog item 300501,
    // first placement gets refID 0.
    assert!(text.contains("itemNos=\"300501\""));
    assert!(text.contains("materials=\"1,0\""));
    assert!(text.contains("<Brick refID=\"0\""));
}

#[test]
fn test_encode_all_transparent_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = common::image_from_rows(&[vec![None, None], vec![None, None]]);
    let png_path = dir.path().join("blank.png");
    codec::write_png(&png_path, &source).unwrap();

    let result = convert::encode_file(&png_path);
    assert!(matches!(
        result,
        Err(ConvertError::Mosaic(brick_mosaic::MosaicError::EmptyImage))
    ));
    assert!(!dir.path().join("blank.png.lxfml").exists());
}

#[test]
fn test_batch_isolates_per_file_failures() {
    // One good PNG, one missing file, one wrong extension, one corrupt
    // document: only the good file converts, and the batch never aborts.
    let dir = tempfile::tempdir().unwrap();

    let good = dir.path().join("good.png");
    codec::write_png(&good, &common::image_from_rows(&[vec![Some([255, 255, 255])]])).unwrap();

    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "not an image").unwrap();

    let corrupt = dir.path().join("broken.png");
    fs::write(&corrupt, "definitely not a png").unwrap();

    let paths: Vec<PathBuf> = vec![
        good.clone(),
        dir.path().join("missing.png"),
        notes,
        corrupt,
    ];
    let converted = convert::run_batch(&paths, Direction::Encode);
    assert_eq!(converted, 1);
    assert!(dir.path().join("good.png.lxfml").exists());
}

#[test]
fn test_extension_check_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let upper = dir.path().join("ART.PNG");
    codec::write_png(&upper, &common::image_from_rows(&[vec![Some([255, 255, 255])]])).unwrap();

    let output = convert::convert_one(&upper, Direction::Encode).unwrap();
    assert!(output.exists());
}

#[test]
fn test_decode_rejects_png_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("art.png");
    codec::write_png(&png_path, &common::image_from_rows(&[vec![Some([255, 255, 255])]])).unwrap();

    let result = convert::convert_one(&png_path, Direction::Decode);
    assert!(matches!(
        result,
        Err(ConvertError::UnsupportedExtension {
            expected: "lxfml",
            ..
        })
    ));
}
