use glam::Vec2;

use crate::{
    canvas::Canvas,
    color::Color,
    errors::{Error, Result},
    types::Rect,
};

/// How `update` spends time that spans several frame durations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FrameStepping {
    /// Advance as many frames as the elapsed time covers
    #[default]
    CatchUp,
    /// Advance at most one frame per update and drop the leftover time
    SingleStep,
}

/// Sprite sheet animation, frames are laid out left to right on one row
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frame_size: Vec2,
    frame_count: u32,
    frame_duration: f32,
    current_frame: u32,
    // Time since the last frame advance
    elapsed: f32,
    looping: bool,
    finished: bool,
    pub stepping: FrameStepping,
}

impl Animation {
    /// Looping animation of `frames` frames played at `fps`
    pub fn new(frames: u32, fps: f32, frame_width: f32, frame_height: f32) -> Result<Self> {
        if frames == 0 || !fps.is_finite() || fps <= 0.0 {
            return Err(Error::InvalidAnimation { frames, fps });
        }
        Ok(Self {
            frame_size: Vec2::new(frame_width, frame_height),
            frame_count: frames,
            frame_duration: 1.0 / fps,
            current_frame: 0,
            elapsed: 0.0,
            looping: true,
            finished: false,
            stepping: FrameStepping::default(),
        })
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.set_looping(looping);
        self
    }

    pub fn with_stepping(mut self, stepping: FrameStepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        if looping {
            self.finished = false;
        }
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.elapsed = 0.0;
        self.finished = false;
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.finished || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        if self.elapsed < self.frame_duration {
            return;
        }

        let steps = match self.stepping {
            FrameStepping::CatchUp => {
                let steps = (self.elapsed / self.frame_duration).floor();
                self.elapsed = (self.elapsed - steps * self.frame_duration).max(0.0);
                // keep elapsed below one frame against rounding
                if self.elapsed >= self.frame_duration {
                    self.elapsed = 0.0;
                }
                steps as u64
            }
            FrameStepping::SingleStep => {
                self.elapsed = 0.0;
                1
            }
        };
        self.advance(steps);
    }

    fn advance(&mut self, steps: u64) {
        let count = self.frame_count as u64;
        let current = self.current_frame as u64;
        if self.looping {
            self.current_frame = ((current + steps % count) % count) as u32;
        } else if steps < count - current {
            self.current_frame = (current + steps) as u32;
        } else {
            self.current_frame = self.frame_count - 1;
            self.finished = true;
            self.elapsed = 0.0;
        }
    }

    /// Sprite sheet region of the current frame
    pub fn current_source_rect(&self) -> Rect {
        let x = self.current_frame as f32 * self.frame_size.x;
        Rect::new(Vec2::new(x, 0.0), self.frame_size)
    }

    /// Draw the current frame at `pos` scaled by `scale`
    pub fn draw<C: Canvas>(
        &self,
        canvas: &mut C,
        sheet: &C::Texture,
        pos: Vec2,
        scale: f32,
        tint: Color,
    ) {
        let dst = Rect::new(pos, self.frame_size * scale);
        canvas.draw_texture(sheet, self.current_source_rect(), dst, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{DrawCall, RecordingCanvas};
    use crate::color::WHITE;

    fn anim(looping: bool) -> Animation {
        Animation::new(4, 10.0, 32.0, 48.0)
            .unwrap()
            .with_looping(looping)
    }

    #[test]
    fn test_new_rejects_bad_params() {
        assert!(Animation::new(0, 10.0, 32.0, 32.0).is_err());
        assert!(Animation::new(4, 0.0, 32.0, 32.0).is_err());
        assert!(Animation::new(4, -5.0, 32.0, 32.0).is_err());
        assert!(Animation::new(4, f32::NAN, 32.0, 32.0).is_err());
    }

    #[test]
    fn test_new_defaults() {
        let a = Animation::new(4, 10.0, 32.0, 48.0).unwrap();
        assert!(a.is_looping());
        assert!(!a.is_finished());
        assert_eq!(a.current_frame(), 0);
        assert_eq!(a.frame_duration(), 0.1);
        assert_eq!(a.current_source_rect(), Rect::from_xywh(0.0, 0.0, 32.0, 48.0));
    }

    #[test]
    fn test_one_shot_finishes_on_last_frame() {
        let mut a = anim(false);
        for frame in 1..=3 {
            a.update(0.1);
            assert_eq!(a.current_frame(), frame);
            assert!(!a.is_finished());
        }
        a.update(0.1);
        assert_eq!(a.current_frame(), 3);
        assert!(a.is_finished());

        a.update(0.1);
        assert_eq!(a.current_frame(), 3);
        assert!(a.is_finished());
        assert_eq!(a.current_source_rect(), Rect::from_xywh(96.0, 0.0, 32.0, 48.0));
    }

    #[test]
    fn test_looping_wraps() {
        let mut a = anim(true);
        for _ in 0..4 {
            a.update(0.1);
        }
        assert_eq!(a.current_frame(), 0);
        assert!(!a.is_finished());
        for _ in 0..100 {
            a.update(0.1);
            assert!(!a.is_finished());
        }
    }

    #[test]
    fn test_partial_steps_accumulate() {
        let mut a = anim(true);
        a.update(0.05);
        assert_eq!(a.current_frame(), 0);
        a.update(0.05);
        assert_eq!(a.current_frame(), 1);
    }

    #[test]
    fn test_catch_up_large_dt() {
        let mut a = anim(true);
        a.update(0.25);
        assert_eq!(a.current_frame(), 2);
        a.update(0.06);
        assert_eq!(a.current_frame(), 3);

        let mut a = anim(false);
        a.update(10.0);
        assert_eq!(a.current_frame(), 3);
        assert!(a.is_finished());
    }

    #[test]
    fn test_catch_up_huge_dt() {
        let mut a = anim(true);
        a.update(0.1);
        a.update(1e20);
        assert!(a.current_frame() < 4);
        assert!(!a.is_finished());
        a.update(f32::MAX);
        assert!(a.current_frame() < 4);

        let mut a = anim(false);
        a.update(0.1);
        a.update(1e20);
        assert_eq!(a.current_frame(), 3);
        assert!(a.is_finished());
    }

    #[test]
    fn test_single_step_large_dt() {
        let mut a = anim(true).with_stepping(FrameStepping::SingleStep);
        a.update(0.25);
        assert_eq!(a.current_frame(), 1);
        a.update(0.05);
        assert_eq!(a.current_frame(), 1);
        a.update(1000.0);
        assert_eq!(a.current_frame(), 2);
    }

    #[test]
    fn test_ignores_bad_dt() {
        let mut a = anim(true);
        a.update(-1.0);
        a.update(f32::INFINITY);
        a.update(f32::NAN);
        a.update(0.0);
        assert_eq!(a.current_frame(), 0);
        a.update(0.1);
        assert_eq!(a.current_frame(), 1);
    }

    #[test]
    fn test_reset() {
        let mut a = anim(false);
        a.update(1.0);
        assert!(a.is_finished());
        a.reset();
        assert_eq!(a.current_frame(), 0);
        assert!(!a.is_finished());
        a.update(0.1);
        assert_eq!(a.current_frame(), 1);
    }

    #[test]
    fn test_draw_scaled() {
        let mut a = anim(true);
        a.update(0.1);
        let mut canvas = RecordingCanvas::new(800.0, 450.0);
        a.draw(&mut canvas, &1, Vec2::new(10.0, 20.0), 2.0, WHITE);
        assert_eq!(
            canvas.calls,
            vec![DrawCall::Texture {
                texture: 1,
                src: Rect::from_xywh(32.0, 0.0, 32.0, 48.0),
                dst: Rect::from_xywh(10.0, 20.0, 64.0, 96.0),
                tint: WHITE,
            }]
        );
    }
}
