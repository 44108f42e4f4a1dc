//! Debug overlays
use glam::Vec2;

use crate::{canvas::Canvas, color::Color, types::Rect};

const HITBOX_THICKNESS: f32 = 2.0;
const POINT_RADIUS: f32 = 4.0;

/// Outline a hitbox
pub fn draw_hitbox<C: Canvas>(canvas: &mut C, rect: Rect, color: Color) {
    canvas.draw_rect_lines(rect, HITBOX_THICKNESS, color);
}

/// Mark a position with a dot
pub fn draw_point<C: Canvas>(canvas: &mut C, pos: Vec2, color: Color) {
    canvas.draw_circle(pos, POINT_RADIUS, color);
}

/// Draw grid lines covering the screen, `cell_size` pixels apart
pub fn draw_grid<C: Canvas>(canvas: &mut C, cell_size: i32, color: Color) {
    if cell_size <= 0 {
        log::warn!("draw_grid: invalid cell size {cell_size}");
        return;
    }
    let size = canvas.screen_size();
    let (w, h) = (size.x as i32, size.y as i32);
    for x in (0..w).step_by(cell_size as usize) {
        let x = x as f32;
        canvas.draw_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), color);
    }
    for y in (0..h).step_by(cell_size as usize) {
        let y = y as f32;
        canvas.draw_line(Vec2::new(0.0, y), Vec2::new(size.x, y), color);
    }
}
