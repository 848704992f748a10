use serde::{Deserialize, Serialize};

/// Per-frame tuning. All motion constants are in scene pixels per frame;
/// the host frame rate directly scales simulation speed.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Surface
    pub surface_w: f32,
    pub surface_h: f32,
    pub ground_offset: f32,

    // Motion
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,

    // Character
    pub char_w: f32,
    pub char_h: f32,
    pub spawn_x: f32,

    // Timers
    pub message_frames: u32,

    // Sprite strip
    pub frame_w: f32,
    pub frame_h: f32,
    pub total_frames: u32,
    pub anim_speed: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            surface_w: 800.0,
            surface_h: 450.0,
            ground_offset: 50.0,

            move_speed: 4.0,
            gravity: 0.7,
            jump_velocity: -15.0,

            char_w: 30.0,
            char_h: 50.0,
            spawn_x: 50.0,

            message_frames: 120,

            frame_w: 50.0,
            frame_h: 48.0,
            total_frames: 4,
            anim_speed: 8,
        }
    }
}

impl Params {
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.surface_h - self.ground_offset
    }
}
