//! brickpix - PNG pixel art to LXFML brick mosaics and back
//!
//! The root crate owns the file-facing glue: the PNG codec, the LXFML
//! document reader/writer, and the batch conversion driver. The pure
//! conversion core (palette, grid geometry, pipelines) lives in the
//! `brick-mosaic` crate. This library exposes modules for integration
//! testing.

pub mod codec;
pub mod convert;
pub mod document;
pub mod error;
