//! Placement records: one brick's position and material.

/// One model element: a continuous position, a material assignment, and the
/// document reference id.
///
/// `ref_id` is strictly increasing and unique per document. The encoder
/// assigns it sequentially from 0 in emission order (row-major, top row
/// first); the document reader assigns document order. It cross-references
/// an element with its sub-parts in the document format, so two models that
/// differ only in scan order differ in `ref_id` assignment while rendering
/// identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal placement coordinate.
    pub x: f64,
    /// Vertical placement coordinate.
    pub y: f64,
    /// Brick material id.
    pub material: u32,
    /// Document reference id.
    pub ref_id: u32,
}
