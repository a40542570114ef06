//! Icon atlas: marker type → sprite sheet + crop rectangle.
//!
//! Each tab is one horizontal strip of square sprites. Two layouts exist and
//! must not be mixed within a tab:
//!
//! * **uniform**: every tile has the tab's fixed width; tile `i` starts at
//!   `tile_width * i`;
//! * **variable**: each tile is `tile_size * 2` wide and starts where the
//!   previous one ended.

mod tables;

pub use tables::STANDARD_TABLES;

use macroquad::prelude::Rect;
use std::collections::HashMap;

/// How the tiles of a tab are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLayout {
    /// Fixed-width tiles
    Uniform {
        /// Width of every tile in source pixels
        tile_width: u32,
    },
    /// Tiles as wide as their own declared size, packed back to back
    Variable,
}

/// One row of a tab table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasItem {
    /// Marker type name
    pub icon: &'static str,
    /// Nominal display half size
    pub half_size: u32,
    /// Declared half width of the tile (variable layout only)
    pub tile_size: u32,
}

impl AtlasItem {
    /// Item whose tile size equals its display size.
    pub const fn new(icon: &'static str, half_size: u32) -> Self {
        Self {
            icon,
            half_size,
            tile_size: half_size,
        }
    }

    /// Item drawn at `half_size` from a tile declared as `tile_size`.
    pub const fn sized(icon: &'static str, half_size: u32, tile_size: u32) -> Self {
        Self {
            icon,
            half_size,
            tile_size,
        }
    }
}

/// A tab: one sprite sheet and its items in sheet order.
#[derive(Debug, Clone, Copy)]
pub struct AtlasTable {
    /// Sprite sheet id
    pub sheet: &'static str,
    /// Tile layout rule
    pub layout: TileLayout,
    /// Items, left to right
    pub items: &'static [AtlasItem],
}

/// Crop rectangle in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl CropRect {
    /// As a Macroquad source rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// Where and how large a marker icon is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasEntry {
    /// Sprite sheet id
    pub sheet: &'static str,
    /// Region of the sheet
    pub crop: CropRect,
    /// Nominal display half size
    pub half_size: u32,
}

impl AtlasTable {
    /// Crop every item of the tab.
    pub fn entries(&self) -> Vec<(&'static str, AtlasEntry)> {
        let mut left = 0;
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let (x, width) = match self.layout {
                    TileLayout::Uniform { tile_width } => (tile_width * index as u32, tile_width),
                    TileLayout::Variable => {
                        let width = item.tile_size * 2;
                        let x = left;
                        left += width;
                        (x, width)
                    }
                };
                let entry = AtlasEntry {
                    sheet: self.sheet,
                    crop: CropRect {
                        x,
                        y: 0,
                        width,
                        height: width,
                    },
                    half_size: item.half_size,
                };
                (item.icon, entry)
            })
            .collect()
    }
}

/// Immutable marker-type lookup, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct IconAtlas {
    entries: HashMap<&'static str, AtlasEntry>,
}

impl IconAtlas {
    /// Merge `tables` in order; a later tab overrides an earlier duplicate.
    pub fn build(tables: &[AtlasTable]) -> Self {
        let mut entries = HashMap::new();
        for table in tables {
            entries.extend(table.entries());
        }
        Self { entries }
    }

    /// Atlas of the built-in tabs.
    pub fn standard() -> Self {
        Self::build(&STANDARD_TABLES)
    }

    /// Entry for a marker type, if it has an icon.
    pub fn resolve(&self, kind: &str) -> Option<&AtlasEntry> {
        self.entries.get(kind)
    }

    /// Number of known types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tab was merged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct sprite sheets referenced by the atlas.
    pub fn sheets(&self) -> Vec<&'static str> {
        let mut sheets: Vec<_> = self.entries.values().map(|e| e.sheet).collect();
        sheets.sort_unstable();
        sheets.dedup();
        sheets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &[AtlasItem] = &[
        AtlasItem::sized("a", 32, 64),
        AtlasItem::sized("b", 32, 48),
        AtlasItem::sized("c", 48, 48),
    ];

    #[test]
    fn uniform_offsets_ignore_declared_sizes() {
        let table = AtlasTable {
            sheet: "s",
            layout: TileLayout::Uniform { tile_width: 100 },
            items: MIXED,
        };
        let xs: Vec<u32> = table.entries().iter().map(|(_, e)| e.crop.x).collect();
        assert_eq!(xs, [0, 100, 200]);
        assert!(table.entries().iter().all(|(_, e)| e.crop.width == 100));
    }

    #[test]
    fn variable_offsets_accumulate_doubled_sizes() {
        let table = AtlasTable {
            sheet: "s",
            layout: TileLayout::Variable,
            items: MIXED,
        };
        let crops: Vec<CropRect> = table.entries().iter().map(|(_, e)| e.crop).collect();
        assert_eq!(crops[0], CropRect { x: 0, y: 0, width: 128, height: 128 });
        assert_eq!(crops[1], CropRect { x: 128, y: 0, width: 96, height: 96 });
        assert_eq!(crops[2], CropRect { x: 224, y: 0, width: 96, height: 96 });
    }

    #[test]
    fn later_tables_override_duplicates() {
        const FIRST: &[AtlasItem] = &[AtlasItem::new("dup", 10)];
        const SECOND: &[AtlasItem] = &[AtlasItem::new("other", 5), AtlasItem::new("dup", 20)];
        let atlas = IconAtlas::build(&[
            AtlasTable {
                sheet: "first",
                layout: TileLayout::Uniform { tile_width: 8 },
                items: FIRST,
            },
            AtlasTable {
                sheet: "second",
                layout: TileLayout::Uniform { tile_width: 8 },
                items: SECOND,
            },
        ]);
        let dup = atlas.resolve("dup").unwrap();
        assert_eq!(dup.sheet, "second");
        assert_eq!(dup.crop.x, 8);
        assert_eq!(dup.half_size, 20);
    }

    #[test]
    fn unknown_type_is_absent() {
        assert!(IconAtlas::standard().resolve("line_aoe").is_none());
        assert!(IconAtlas::default().is_empty());
    }
}
