use glam::Vec2;

use crate::{camera::Camera2D, color::Color, types::Rect};

/// Drawing backend supplied by the host.
///
/// All geometry is in pixel space. Implementations forward to the actual
/// rasterizer, leafy2d never touches pixels itself.
pub trait Canvas {
    /// Backend texture handle
    type Texture;

    /// Size of the render target in pixels
    fn screen_size(&self) -> Vec2;
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_rect_lines(&mut self, rect: Rect, thickness: f32, color: Color);
    /// Draw the `src` region of `texture` stretched into `dst`
    fn draw_texture(&mut self, texture: &Self::Texture, src: Rect, dst: Rect, tint: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Following draws are transformed by `camera` until `end_camera`
    fn begin_camera(&mut self, camera: &Camera2D);
    fn end_camera(&mut self);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Rect(Rect, Color),
        RectLines(Rect, f32, Color),
        Texture {
            texture: u32,
            src: Rect,
            dst: Rect,
            tint: Color,
        },
        Line(Vec2, Vec2),
        Circle(Vec2, f32),
        BeginCamera(Camera2D),
        EndCamera,
    }

    /// Canvas that records every call
    pub(crate) struct RecordingCanvas {
        pub size: Vec2,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                size: Vec2::new(width, height),
                calls: Vec::new(),
            }
        }
    }

    impl Canvas for RecordingCanvas {
        type Texture = u32;

        fn screen_size(&self) -> Vec2 {
            self.size
        }

        fn draw_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(DrawCall::Rect(rect, color));
        }

        fn draw_rect_lines(&mut self, rect: Rect, thickness: f32, color: Color) {
            self.calls.push(DrawCall::RectLines(rect, thickness, color));
        }

        fn draw_texture(&mut self, texture: &u32, src: Rect, dst: Rect, tint: Color) {
            self.calls.push(DrawCall::Texture {
                texture: *texture,
                src,
                dst,
                tint,
            });
        }

        fn draw_line(&mut self, from: Vec2, to: Vec2, _color: Color) {
            self.calls.push(DrawCall::Line(from, to));
        }

        fn draw_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.calls.push(DrawCall::Circle(center, radius));
        }

        fn begin_camera(&mut self, camera: &Camera2D) {
            self.calls.push(DrawCall::BeginCamera(*camera));
        }

        fn end_camera(&mut self) {
            self.calls.push(DrawCall::EndCamera);
        }
    }
}
