/// Frames-per-second counter, refreshed once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulator: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    /// Counter that recomputes its value every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Record one frame; returns true when the reading was refreshed
    pub fn tick(&mut self, delta: f32) -> bool {
        self.frames += 1;
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.fps = self.frames as f32 / self.accumulator;
            self.frames = 0;
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(1.0)
    }
}
