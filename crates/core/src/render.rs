use crate::entity::Entity;
use crate::game::Game;
use crate::geom::Rect;
use crate::params::Params;
use crate::state::GameState;

pub const GROUND: &str = "#735034";
pub const GAP_REVEALED: &str = "#000000";
pub const SHELF: &str = "#282830";
pub const OVERLAY_FONT: &str = "30px Arial";

/// Anything the scene can be painted onto. Drawing a sprite from an asset
/// that never loaded must be a silent no-op.
pub trait Surface {
    fn clear(&mut self, w: f32, h: f32);
    fn fill_rect(&mut self, color: &str, r: Rect);
    fn draw_sprite(&mut self, src: Rect, dst: Rect);
    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f32, y: f32);
}

/// A single-row strip of equally sized frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteSheet {
    pub frame_w: f32,
    pub frame_h: f32,
    pub frames: u32,
}

impl SpriteSheet {
    pub fn from_params(p: &Params) -> Self {
        Self {
            frame_w: p.frame_w,
            frame_h: p.frame_h,
            frames: p.total_frames.max(1),
        }
    }

    pub fn src(&self, frame: u32) -> Rect {
        let col = (frame % self.frames) as f32;
        Rect::new(col * self.frame_w, 0.0, self.frame_w, self.frame_h)
    }

    /// Centered horizontally on the entity, bottom edge on its feet.
    pub fn dst(&self, e: &Entity) -> Rect {
        Rect::new(
            e.x - self.frame_w / 2.0,
            e.y - self.frame_h,
            self.frame_w,
            self.frame_h,
        )
    }
}

/// Paint the current frame. Reads the game, never mutates it.
pub fn render(game: &Game, out: &mut impl Surface) {
    let p = &game.params;
    let ground_y = p.ground_y();
    let ground_h = p.surface_h - ground_y;

    out.clear(p.surface_w, p.surface_h);

    let [left, gap, right] = game.level.ground_segments(p.surface_w);
    out.fill_rect(GROUND, Rect::new(left.start, ground_y, left.len(), ground_h));
    out.fill_rect(GROUND, Rect::new(right.start, ground_y, right.len(), ground_h));
    let gap_color = if game.gap_revealed() { GAP_REVEALED } else { GROUND };
    out.fill_rect(gap_color, Rect::new(gap.start, ground_y, gap.len(), ground_h));

    for shelf in &game.level.shelves {
        out.fill_rect(SHELF, *shelf);
    }

    let sheet = SpriteSheet::from_params(p);
    out.draw_sprite(sheet.src(game.anim.frame), sheet.dst(&game.entity));

    if let Some((text, color)) = game.state.overlay() {
        let dx = match game.state {
            GameState::GameOver => 80.0,
            _ => 70.0,
        };
        out.fill_text(
            color,
            OVERLAY_FONT,
            text,
            p.surface_w / 2.0 - dx,
            p.surface_h / 2.0,
        );
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear { w: f32, h: f32 },
    Rect { color: String, rect: Rect },
    Sprite { src: Rect, dst: Rect },
    Text { color: String, font: String, text: String, x: f32, y: f32 },
}

/// Records draw calls instead of painting them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, w: f32, h: f32) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear { w, h });
    }

    fn fill_rect(&mut self, color: &str, rect: Rect) {
        self.cmds.push(DrawCmd::Rect {
            color: color.to_owned(),
            rect,
        });
    }

    fn draw_sprite(&mut self, src: Rect, dst: Rect) {
        self.cmds.push(DrawCmd::Sprite { src, dst });
    }

    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f32, y: f32) {
        self.cmds.push(DrawCmd::Text {
            color: color.to_owned(),
            font: font.to_owned(),
            text: text.to_owned(),
            x,
            y,
        });
    }
}
