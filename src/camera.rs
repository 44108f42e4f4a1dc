use glam::Vec2;

use crate::canvas::Canvas;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    // The world position the camera looks at.
    pub target: Vec2,

    // Where the target lands on screen, in pixels. Usually the screen center.
    pub offset: Vec2,

    // Rotation in degrees.
    pub rotation: f32,

    // 1.0 is no scaling, values above zoom in.
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

impl Camera2D {
    /// Camera centered on `target`
    pub fn follow(target: Vec2, zoom: f32, screen_size: Vec2) -> Self {
        Self {
            target,
            offset: screen_size * 0.5,
            rotation: 0.0,
            zoom,
        }
    }

    /// Lerp toward `target`. `speed * dt` is the fraction of the remaining
    /// distance covered this frame, values between 2..10 are usually sensible.
    pub fn smooth_follow(&mut self, target: Vec2, speed: f32, dt: f32) {
        self.target += (target - self.target) * speed * dt;
    }

    pub fn begin<C: Canvas>(&self, canvas: &mut C) {
        canvas.begin_camera(self);
    }

    pub fn end<C: Canvas>(&self, canvas: &mut C) {
        canvas.end_camera();
    }
}
