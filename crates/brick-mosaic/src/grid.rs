//! Grid geometry: placement coordinates to cell indices and back.
//!
//! The LXFML format positions each 1x1 brick with a continuous (x, y)
//! coordinate pair; the mosaic treats those positions as cells on a regular
//! grid with a fixed pitch per axis. The four constants below are taken
//! bit-for-bit from the reference implementation.
//!
//! Known quirk, preserved intentionally: the `ROW_*` constants govern the
//! x axis (and therefore the *column* index), while the `COL_*` constants
//! govern the y axis (the *row* index). The naming comes from the source
//! format and must not be "fixed": swapping the axes changes which cell
//! every placement maps to and therefore changes visual output.

/// Origin of the x axis (first column's x coordinate).
pub const ROW_ORIGIN: f64 = -16.399_999_618_530_273_437_5;

/// Spacing between adjacent columns along the x axis. Negative, and the
/// conversions subtract it, so x increases as the column index increases.
pub const ROW_PITCH: f64 = ROW_ORIGIN - -15.600_000_381_469_726_562_5;

/// Origin of the y axis (reference row's y coordinate).
pub const COL_ORIGIN: f64 = 12.399_999_618_530_273_437_5;

/// Spacing between adjacent rows along the y axis.
pub const COL_PITCH: f64 = COL_ORIGIN - 11.599_999_427_795_410_156_25;

/// An integer cell address derived from continuous placement coordinates.
///
/// Indices are signed: placements left of / above the grid origin produce
/// negative values. The decoder normalizes them against the bounding box of
/// the whole model before painting pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    /// Vertical cell index (top-to-bottom once normalized).
    pub row: i32,
    /// Horizontal cell index (left-to-right once normalized).
    pub col: i32,
}

/// Convert a placement coordinate to its grid cell.
///
/// Rounds to the nearest cell (`f64::round`, never truncation); given the
/// pitch constants, exact half-cell ties do not occur for coordinates the
/// format actually produces.
pub fn coord_to_index(x: f64, y: f64) -> GridIndex {
    GridIndex {
        row: ((COL_ORIGIN - y) / COL_PITCH).round() as i32,
        col: ((ROW_ORIGIN - x) / ROW_PITCH).round() as i32,
    }
}

/// Convert a grid cell back to a placement coordinate.
///
/// Used by the encoder. The y coordinate counts rows up from the bottom of
/// the image (`height_in_rows - 1 - row`), minus `vertical_offset` so the
/// lowest opaque row of the image sits at y = 0 (the build-plate
/// convention). `row` must be less than `height_in_rows`.
pub fn index_to_coord(row: u32, col: u32, height_in_rows: u32, vertical_offset: f64) -> (f64, f64) {
    let x = ROW_ORIGIN - col as f64 * ROW_PITCH;
    let y = (height_in_rows as i64 - 1 - row as i64) as f64 * COL_PITCH - vertical_offset;
    (x, y)
}

/// Bounding box over a set of grid indices.
///
/// Defines the output image dimensions of a decode pass. Built from at least
/// one index; the decoder rejects empty models before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl BoundingBox {
    /// Bounding box containing a single cell.
    pub fn new(index: GridIndex) -> Self {
        Self {
            min_row: index.row,
            max_row: index.row,
            min_col: index.col,
            max_col: index.col,
        }
    }

    /// Grow the box to contain `index`.
    pub fn extend(&mut self, index: GridIndex) {
        self.min_row = self.min_row.min(index.row);
        self.max_row = self.max_row.max(index.row);
        self.min_col = self.min_col.min(index.col);
        self.max_col = self.max_col.max(index.col);
    }

    /// Width in cells.
    ///
    /// Computed in i64: indices saturate at the i32 extremes for absurd
    /// input coordinates, and such a span does not fit in i32.
    pub fn width(&self) -> u32 {
        (self.max_col as i64 - self.min_col as i64 + 1) as u32
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        (self.max_row as i64 - self.min_row as i64 + 1) as u32
    }
}
