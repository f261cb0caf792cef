//! RGBA image buffer shared by both pipelines.

/// One 8-bit RGBA sample.
///
/// `a == 0` means "no brick at this cell" and is the only transparency
/// semantic in the pipeline: the encoder skips such pixels and the decoder
/// leaves unpainted cells fully transparent. Painted cells are always fully
/// opaque (`a == 255`); alpha is never otherwise modulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the decode background.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// A fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// True when this sample marks an absent cell.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// A width x height RGBA image, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Create a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Wrap existing pixel data.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count ({}) must match dimensions ({width}x{height})",
            pixels.len(),
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Sample at (row, col). `row` and `col` must be in bounds.
    pub fn get(&self, row: u32, col: u32) -> Rgba {
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    /// Overwrite the sample at (row, col).
    pub fn set(&mut self, row: u32, col: u32, pixel: Rgba) {
        self.pixels[row as usize * self.width as usize + col as usize] = pixel;
    }
}
