use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{
    canvas::Canvas,
    color::{Color, WHITE},
    types::Rect,
};

/// Uniform grid of square cells with the origin cell at (0, 0)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    // Number of columns
    pub cols: i32,
    // Number of rows
    pub rows: i32,
    // Edge length of a cell in pixels
    pub tile_size: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32, tile_size: i32) -> Self {
        Self {
            cols,
            rows,
            tile_size,
        }
    }

    /// A grid with any non-positive field has no valid cells
    pub fn is_degenerate(&self) -> bool {
        self.cols <= 0 || self.rows <= 0 || self.tile_size <= 0
    }

    pub fn valid(&self, col: i32, row: i32) -> bool {
        !self.is_degenerate() && col >= 0 && col < self.cols && row >= 0 && row < self.rows
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        (self.cols as usize).saturating_mul(self.rows as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat row-major index of a valid cell
    pub(crate) fn index(&self, col: i32, row: i32) -> Option<usize> {
        if !self.valid(col, row) {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Size of the whole grid in pixels
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * self.tile_size as f32
    }

    /// Top-left corner of a cell in pixels
    pub fn to_world(&self, col: i32, row: i32) -> Vec2 {
        let tile_size = self.tile_size as f32;
        Vec2::new(col as f32 * tile_size, row as f32 * tile_size)
    }

    /// Cell containing a pixel position, not clamped to the grid
    pub fn to_grid(&self, pos: Vec2) -> IVec2 {
        let cell = (pos / self.tile_size as f32).floor();
        IVec2::new(cell.x as i32, cell.y as i32)
    }

    pub fn cell_center(&self, col: i32, row: i32) -> Vec2 {
        self.to_world(col, row) + self.tile_size as f32 * 0.5
    }

    /// Pixel rect of a cell, the cell itself is not checked
    pub fn cell_rect(&self, col: i32, row: i32) -> Rect {
        Rect::new(self.to_world(col, row), Vec2::splat(self.tile_size as f32))
    }

    /// Fill a cell with a flat color
    pub fn draw_tile<C: Canvas>(&self, canvas: &mut C, col: i32, row: i32, color: Color) {
        canvas.draw_rect(self.cell_rect(col, row), color);
    }

    /// Draw the `source` region of `texture` into a cell
    pub fn draw_tile_texture<C: Canvas>(
        &self,
        canvas: &mut C,
        col: i32,
        row: i32,
        texture: &C::Texture,
        source: Rect,
    ) {
        canvas.draw_texture(texture, source, self.cell_rect(col, row), WHITE);
    }
}
