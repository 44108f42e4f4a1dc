use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{
    canvas::Canvas,
    color::Color,
    errors::{Error, Result},
    grid::Grid,
    types::Rect,
};

/// Tile identifier, 0 is an empty cell and positive ids are 1-based
/// palette or atlas indices
pub type TileId = u32;

pub const EMPTY: TileId = 0;

/// Flat tile storage over a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TilemapData")]
pub struct Tilemap {
    grid: Grid,
    // The tile ids with a length of cols * rows, row-major
    tiles: Vec<TileId>,
}

#[derive(Deserialize)]
struct TilemapData {
    grid: Grid,
    tiles: Vec<TileId>,
}

impl TryFrom<TilemapData> for Tilemap {
    type Error = Error;

    fn try_from(data: TilemapData) -> Result<Self> {
        let TilemapData { grid, tiles } = data;
        let expected = tile_count(&grid)?;
        if tiles.len() != expected {
            return Err(Error::TileCount {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self { grid, tiles })
    }
}

/// Upper bound on cells in one map
pub const MAX_TILES: usize = 1 << 26;

/// Cell count of a usable grid
fn tile_count(grid: &Grid) -> Result<usize> {
    let invalid = || Error::InvalidGrid {
        cols: grid.cols,
        rows: grid.rows,
        tile_size: grid.tile_size,
    };
    if grid.is_degenerate() {
        return Err(invalid());
    }
    (grid.cols as usize)
        .checked_mul(grid.rows as usize)
        .filter(|len| *len <= MAX_TILES)
        .ok_or_else(invalid)
}

impl Tilemap {
    /// Create an empty tilemap, every dimension must be positive and the
    /// map may hold at most `MAX_TILES` cells
    pub fn new(cols: i32, rows: i32, tile_size: i32) -> Result<Self> {
        let grid = Grid::new(cols, rows, tile_size);
        let len = tile_count(&grid)?;
        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(len)
            .map_err(|_| Error::InvalidGrid {
                cols,
                rows,
                tile_size,
            })?;
        tiles.resize(len, EMPTY);
        Ok(Self { grid, tiles })
    }

    /// Load a map, grid and tile count errors are reported as such
    pub fn from_json(s: &str) -> Result<Self> {
        let data: TilemapData = serde_json::from_str(s)?;
        Self::try_from(data)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True once released
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn valid(&self, col: i32, row: i32) -> bool {
        self.grid.valid(col, row)
    }

    /// Tile at a cell, None outside the map
    pub fn get(&self, col: i32, row: i32) -> Option<TileId> {
        let index = self.grid.index(col, row)?;
        self.tiles.get(index).copied()
    }

    /// Write a tile, out of range cells are rejected and nothing changes
    pub fn set(&mut self, col: i32, row: i32, id: TileId) -> Result<()> {
        let tile = self
            .grid
            .index(col, row)
            .and_then(|index| self.tiles.get_mut(index))
            .ok_or(Error::OutOfBounds { col, row })?;
        *tile = id;
        Ok(())
    }

    pub fn fill(&mut self, id: TileId) {
        self.tiles.fill(id);
    }

    /// Non-empty tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (IVec2, TileId)> + '_ {
        let cols = self.grid.cols.max(1) as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, id)| **id != EMPTY)
            .map(move |(i, id)| (IVec2::new((i % cols) as i32, (i / cols) as i32), *id))
    }

    pub fn to_world(&self, col: i32, row: i32) -> Vec2 {
        self.grid.to_world(col, row)
    }

    pub fn to_grid(&self, pos: Vec2) -> IVec2 {
        self.grid.to_grid(pos)
    }

    pub fn cell_center(&self, col: i32, row: i32) -> Vec2 {
        self.grid.cell_center(col, row)
    }

    pub fn cell_rect(&self, col: i32, row: i32) -> Rect {
        self.grid.cell_rect(col, row)
    }

    /// Draw each tile in `palette[id - 1]`, ids past the palette are skipped
    pub fn draw<C: Canvas>(&self, canvas: &mut C, palette: &[Color]) {
        for (cell, id) in self.tiles() {
            if let Some(color) = palette.get(id as usize - 1) {
                self.grid.draw_tile(canvas, cell.x, cell.y, *color);
            }
        }
    }

    /// Draw each tile from an atlas laid out `atlas_columns` tiles wide
    pub fn draw_textured<C: Canvas>(
        &self,
        canvas: &mut C,
        atlas: &C::Texture,
        atlas_columns: u32,
        atlas_tile_size: f32,
    ) {
        if atlas_columns == 0 {
            log::warn!("draw_textured: atlas has no columns");
            return;
        }
        for (cell, id) in self.tiles() {
            let index = id - 1;
            let src = Vec2::new(
                (index % atlas_columns) as f32,
                (index / atlas_columns) as f32,
            ) * atlas_tile_size;
            let source = Rect::new(src, Vec2::splat(atlas_tile_size));
            self.grid
                .draw_tile_texture(canvas, cell.x, cell.y, atlas, source);
        }
    }

    /// Free the tile buffer early, the map then behaves as a 0x0 map.
    /// Calling it again does nothing.
    pub fn release(&mut self) {
        self.tiles = Vec::new();
        self.grid.cols = 0;
        self.grid.rows = 0;
    }
}
