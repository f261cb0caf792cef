//! Fixed brick color palette with nearest-color matching.
//!
//! The palette ties each allowed RGB color to a brick material id and a
//! catalog item number. It is a bijection by construction: every RGB value
//! maps to exactly one material and vice versa. The table is immutable and
//! shared process-wide via [`Palette::shared`].

use std::collections::HashMap;
use std::sync::OnceLock;

/// One palette entry: an RGB color and the brick identity it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// The color as stored in image pixels.
    pub rgb: [u8; 3],
    /// Catalog item number of the 1x1 brick in this color.
    pub item_no: u32,
    /// Material id used in document placement records.
    pub material: u32,
}

/// The builtin brick colors, in insertion order.
///
/// Order matters: nearest-color ties resolve to the earliest entry, and that
/// choice must stay stable for bit-identical output across runs.
const BRICK_COLORS: [([u8; 3], u32, u32); 20] = [
    ([21, 32, 40], 300526, 26),
    ([101, 101, 101], 4211098, 199),
    ([112, 3, 16], 4209383, 154),
    ([94, 51, 0], 4211242, 192),
    ([132, 120, 78], 300505, 5),
    ([145, 82, 10], 4122456, 38),
    ([170, 128, 80], 4569624, 312),
    ([214, 124, 0], 4173805, 106),
    ([252, 204, 0], 300524, 24),
    ([13, 70, 18], 4521915, 141),
    ([115, 144, 124], 4155050, 151),
    ([34, 135, 19], 300528, 28),
    ([171, 206, 0], 4122446, 119),
    ([112, 197, 232], 4619652, 322),
    ([25, 50, 94], 4255413, 140),
    ([23, 66, 130], 300523, 23),
    ([117, 151, 207], 4179830, 102),
    ([114, 131, 158], 4169428, 135),
    ([152, 152, 152], 4211389, 194),
    ([255, 255, 255], 300501, 1),
];

/// The fixed color table queried by both pipelines.
///
/// Lookup maps are precomputed at construction; the entry list keeps
/// insertion order for deterministic nearest-color tie-breaking.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    by_material: HashMap<u32, usize>,
    by_color: HashMap<[u8; 3], usize>,
}

impl Palette {
    /// Build the builtin palette.
    pub fn builtin() -> Self {
        let entries: Vec<PaletteEntry> = BRICK_COLORS
            .iter()
            .map(|&(rgb, item_no, material)| PaletteEntry {
                rgb,
                item_no,
                material,
            })
            .collect();
        let by_material = entries.iter().enumerate().map(|(i, e)| (e.material, i)).collect();
        let by_color = entries.iter().enumerate().map(|(i, e)| (e.rgb, i)).collect();
        Self {
            entries,
            by_material,
            by_color,
        }
    }

    /// Process-wide shared palette, built once on first use and never
    /// mutated afterward.
    pub fn shared() -> &'static Palette {
        static PALETTE: OnceLock<Palette> = OnceLock::new();
        PALETTE.get_or_init(Palette::builtin)
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the builtin table is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a material id, if the material is known.
    pub fn by_material(&self, material: u32) -> Option<&PaletteEntry> {
        self.by_material.get(&material).map(|&i| &self.entries[i])
    }

    /// Look up the entry for an exact RGB color, if present.
    pub fn by_color(&self, rgb: [u8; 3]) -> Option<&PaletteEntry> {
        self.by_color.get(&rgb).map(|&i| &self.entries[i])
    }

    /// Find the palette entry nearest to `rgb`.
    ///
    /// Euclidean distance in RGB, computed in f64. Total function: the
    /// palette is non-empty by construction. Ties resolve to the entry that
    /// appears first in insertion order (strict `<` comparison), which keeps
    /// quantization deterministic.
    pub fn nearest(&self, rgb: [u8; 3]) -> &PaletteEntry {
        let mut best = &self.entries[0];
        let mut best_dist = f64::INFINITY;
        for entry in &self.entries {
            let dist = distance_squared(rgb, entry.rgb);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }
        best
    }
}

/// Squared Euclidean distance between two RGB colors.
///
/// Squared distance orders candidates identically to true distance, so the
/// square root is skipped. f64 arithmetic avoids integer overflow and
/// truncation artifacts.
fn distance_squared(a: [u8; 3], b: [u8; 3]) -> f64 {
    let dr = a[0] as f64 - b[0] as f64;
    let dg = a[1] as f64 - b[1] as f64;
    let db = a[2] as f64 - b[2] as f64;
    dr * dr + dg * dg + db * db
}
