/// Each animation frame is held on screen for this many rendered ticks.
pub const TICKS_PER_FRAME: u32 = 4;

/// Monotonic tick counter that selects an animation frame.
///
/// The frame index is `counter / ticks_per_frame`; the counter wraps back to
/// zero once that quotient reaches `frame_count`, so `current_frame` is always
/// in `[0, frame_count)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCycle {
    frame_count: usize,
    ticks_per_frame: u32,
    counter: u32,
}

impl FrameCycle {
    pub fn new(frame_count: usize, ticks_per_frame: u32) -> Self {
        assert!(frame_count > 0, "a frame cycle needs at least one frame");
        assert!(ticks_per_frame > 0, "a frame must last at least one tick");
        Self {
            frame_count,
            ticks_per_frame,
            counter: 0,
        }
    }

    pub fn current_frame(&self) -> usize {
        (self.counter / self.ticks_per_frame) as usize % self.frame_count
    }

    pub fn advance(&mut self) {
        self.counter += 1;
        if self.counter / self.ticks_per_frame >= self.frame_count as u32 {
            self.counter = 0;
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}
