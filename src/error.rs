use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing an LXFML document.
///
/// Any of these aborts the conversion of that file; a malformed document
/// cannot be partially decoded. (Unknown material ids are NOT a document
/// error — the decoder defaults them to black.)
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("missing <{0}> element")]
    MissingElement(&'static str),

    #[error("missing {attribute} attribute on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("malformed {what}: {value:?}")]
    BadNumber {
        what: &'static str,
        value: String,
    },

    #[error("transformation has {found} components, expected 12")]
    ShortTransformation { found: usize },
}

/// Per-file conversion errors.
///
/// The batch driver treats every variant the same way: report and move on
/// to the next file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Mosaic(#[from] brick_mosaic::MosaicError),

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unsupported extension (expected .{expected}): {}", path.display())]
    UnsupportedExtension {
        path: PathBuf,
        expected: &'static str,
    },
}
