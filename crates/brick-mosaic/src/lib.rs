//! brick-mosaic: convert between raster images and brick-mosaic placements
//!
//! This library holds the pure conversion core shared by both directions of
//! the PNG/LXFML converter: a fixed brick color palette with nearest-color
//! matching, the grid geometry that maps continuous placement coordinates to
//! integer cell indices, and the two pipelines built on top of them.
//!
//! # Quick Start
//!
//! Image to placements (encoding):
//!
//! ```
//! use brick_mosaic::{encode, Image, Palette, Rgba};
//!
//! let mut image = Image::new(2, 1);
//! image.set(0, 0, Rgba::opaque(255, 255, 255));
//!
//! let placements = encode::plan(&image, Palette::shared()).unwrap();
//! assert_eq!(placements.len(), 1);
//! assert_eq!(placements[0].material, 1); // white
//! ```
//!
//! Placements to image (decoding):
//!
//! ```
//! use brick_mosaic::{decode, Palette, Placement};
//!
//! let placements = [Placement { x: -16.4, y: 12.4, material: 26, ref_id: 0 }];
//! let image = decode::render(&placements, Palette::shared()).unwrap();
//! assert_eq!((image.width(), image.height()), (1, 1));
//! ```
//!
//! # Coordinate System
//!
//! Placement coordinates come from the LXFML document format, whose unit
//! spacing is fixed by four constants in [`grid`]. The constant naming swaps
//! row and column relative to their geometric roles (the `ROW_*` constants
//! govern the x axis, the `COL_*` constants the y axis); this is preserved
//! from the reference implementation because changing it changes which cell
//! every placement lands in. See [`grid`] for details.
//!
//! The palette is a fixed 20-entry table tying each allowed RGB color to a
//! brick material id and catalog item number. Nearest-color matching is plain
//! Euclidean distance in RGB with first-entry-wins tie-breaking, which must
//! stay stable for bit-identical output across runs.

pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
pub mod image;
pub mod palette;
pub mod placement;

pub use error::MosaicError;
pub use grid::{BoundingBox, GridIndex};
pub use image::{Image, Rgba};
pub use palette::{Palette, PaletteEntry};
pub use placement::Placement;
