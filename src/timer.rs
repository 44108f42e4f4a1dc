/// Repeating countdown, fires once every `limit` seconds
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Timer {
    pub time: f32,
    // Time limit to reach
    pub limit: f32,
}

impl Timer {
    pub fn new(limit: f32) -> Self {
        Self { time: 0.0, limit }
    }

    /// Accumulate `dt`, return true and restart once the limit is reached.
    /// Leftover time past the limit is dropped.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.time += dt;
        if self.time >= self.limit {
            self.time = 0.0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// 0..1 fraction of the limit elapsed
    pub fn progress(&self) -> f32 {
        if self.limit > 0.0 {
            self.time / self.limit
        } else {
            0.0
        }
    }
}
