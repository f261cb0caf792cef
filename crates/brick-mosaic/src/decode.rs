//! Decoder pipeline: placement records to an RGBA image.

use crate::error::MosaicError;
use crate::grid::{self, BoundingBox, GridIndex};
use crate::image::{Image, Rgba};
use crate::palette::Palette;
use crate::placement::Placement;

/// Render placements to an image sized by their bounding box.
///
/// Each placement is mapped to a grid cell and painted fully opaque in its
/// material's palette color; materials absent from the palette paint black
/// (the error policy is defaulting, not failure — callers may report them
/// via [`unknown_materials`]). Cells not covered by any placement stay
/// fully transparent. When two placements land on the same cell the later
/// one wins (input order). Cells that fall outside the image after
/// bounding-box normalization are dropped; a correct bounding box makes
/// that unreachable.
///
/// # Errors
///
/// [`MosaicError::EmptyModel`] if `placements` is empty — there is no
/// bounding box to size an image from.
pub fn render(placements: &[Placement], palette: &Palette) -> Result<Image, MosaicError> {
    if placements.is_empty() {
        return Err(MosaicError::EmptyModel);
    }

    let cells: Vec<(GridIndex, [u8; 3])> = placements
        .iter()
        .map(|p| {
            let rgb = palette
                .by_material(p.material)
                .map(|entry| entry.rgb)
                .unwrap_or([0, 0, 0]);
            (grid::coord_to_index(p.x, p.y), rgb)
        })
        .collect();

    let mut bounds = BoundingBox::new(cells[0].0);
    for (index, _) in &cells[1..] {
        bounds.extend(*index);
    }

    let mut image = Image::new(bounds.width(), bounds.height());
    for (index, rgb) in cells {
        // i64: the span between saturated indices can exceed i32.
        let row = index.row as i64 - bounds.min_row as i64;
        let col = index.col as i64 - bounds.min_col as i64;
        if row >= 0 && row < i64::from(image.height()) && col >= 0 && col < i64::from(image.width())
        {
            image.set(row as u32, col as u32, Rgba::opaque(rgb[0], rgb[1], rgb[2]));
        }
    }
    Ok(image)
}

/// Material ids referenced by `placements` but absent from `palette`, in
/// first-seen order without duplicates. These render as black.
pub fn unknown_materials(placements: &[Placement], palette: &Palette) -> Vec<u32> {
    let mut unknown = Vec::new();
    for p in placements {
        if palette.by_material(p.material).is_none() && !unknown.contains(&p.material) {
            unknown.push(p.material);
        }
    }
    unknown
}
