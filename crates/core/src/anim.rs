/// Walk-cycle cursor into the sprite strip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    pub frame: u32,
    pub counter: u32,
}

impl Animation {
    /// Advance one frame every `cadence` walking frames; hold frame 0 otherwise.
    pub fn tick(&mut self, walking: bool, cadence: u32, total: u32) {
        if !walking {
            *self = Self::default();
            return;
        }
        self.counter += 1;
        if self.counter >= cadence {
            self.frame = (self.frame + 1) % total.max(1);
            self.counter = 0;
        }
    }
}
