use crate::params::Params;

/// The player character. `x` is the horizontal center, `y` the feet.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub w: f32,
    pub h: f32,
    pub on_ground: bool,
}

impl Entity {
    pub fn spawn(params: &Params) -> Self {
        Self {
            x: params.spawn_x,
            y: params.ground_y(),
            vy: 0.0,
            w: params.char_w,
            h: params.char_h,
            on_ground: true,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.w / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn jump(&mut self, velocity: f32) {
        self.vy = velocity;
        self.on_ground = false;
    }
}
