//! Encoder pipeline: an RGBA image to placement records.

use crate::error::MosaicError;
use crate::grid::{self, COL_PITCH};
use crate::image::Image;
use crate::palette::Palette;
use crate::placement::Placement;

/// Plan one placement per opaque pixel.
///
/// Pixels with `a == 0` are skipped; every other pixel is quantized to its
/// nearest palette color and becomes one placement. Emission order is
/// row-major, top row first, left to right, and is an observable contract:
/// `ref_id` counts up from 0 in exactly that order.
///
/// Vertical coordinates are normalized against the anchor row — the lowest
/// row containing any opaque pixel — so the bottom of the visible mosaic
/// sits at y = 0 regardless of transparent padding below it.
///
/// # Errors
///
/// [`MosaicError::EmptyImage`] if no pixel is opaque; no placements are
/// produced and callers must not write an output document.
pub fn plan(image: &Image, palette: &Palette) -> Result<Vec<Placement>, MosaicError> {
    let anchor = anchor_row(image).ok_or(MosaicError::EmptyImage)?;
    let vertical_offset = (image.height() - 1 - anchor) as f64 * COL_PITCH;

    let mut placements = Vec::new();
    let mut ref_id = 0u32;
    for row in 0..image.height() {
        for col in 0..image.width() {
            let pixel = image.get(row, col);
            if pixel.is_transparent() {
                continue;
            }
            let entry = palette.nearest([pixel.r, pixel.g, pixel.b]);
            let (x, y) = grid::index_to_coord(row, col, image.height(), vertical_offset);
            placements.push(Placement {
                x,
                y,
                material: entry.material,
                ref_id,
            });
            ref_id += 1;
        }
    }
    Ok(placements)
}

/// Lowest image row containing any opaque pixel, scanning from the bottom.
fn anchor_row(image: &Image) -> Option<u32> {
    (0..image.height())
        .rev()
        .find(|&row| (0..image.width()).any(|col| !image.get(row, col).is_transparent()))
}
