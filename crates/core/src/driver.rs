use crate::events::Events;
use crate::game::Game;
use crate::input::{self, Pointer};
use crate::render::{render, Surface};

/// Owns the game and runs update-then-render once per display refresh.
/// No fixed-timestep accumulator: one host frame is one simulation frame.
#[derive(Clone, Debug, Default)]
pub struct Driver {
    pub game: Game,
    frames: u64,
}

impl Driver {
    pub fn new(game: Game) -> Self {
        Self { game, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Input arrives between frames, on the loop's own thread.
    pub fn pointer(&mut self, p: Pointer) -> Events {
        input::apply(&mut self.game, p)
    }

    pub fn frame(&mut self, surface: &mut impl Surface) -> Events {
        let ev = self.game.step();
        render(&self.game, surface);
        self.frames += 1;

        if self.frames % 60 == 0 {
            log::trace!(
                "frame {} | {} | x={:.1} y={:.1}",
                self.frames,
                self.game.state,
                self.game.entity.x,
                self.game.entity.y
            );
        }
        ev
    }

    /// Run `n` frames, returning every event seen.
    pub fn run(&mut self, n: u32, surface: &mut impl Surface) -> Events {
        (0..n).fold(Events::empty(), |acc, _| acc | self.frame(surface))
    }
}

#[cfg(test)]
mod tests {
    use super::Driver;
    use crate::events::Events;
    use crate::game::Game;
    use crate::input::Pointer;
    use crate::render::{DrawCmd, DrawList};

    #[test]
    fn each_frame_updates_then_draws() {
        let mut d = Driver::new(Game::default());
        d.game.acknowledge_intro();
        d.pointer(Pointer::Click { x: 70.0 });

        let mut out = DrawList::new();
        d.frame(&mut out);
        assert_eq!(d.frames(), 1);
        // Drawn after the step: sprite sits at the moved x.
        let dst = out.cmds.iter().find_map(|c| match c {
            DrawCmd::Sprite { dst, .. } => Some(*dst),
            _ => None,
        });
        assert_eq!(dst.map(|r| r.x + r.w / 2.0), Some(54.0));
    }

    #[test]
    fn run_accumulates_events() {
        let mut d = Driver::new(Game::default());
        d.game.acknowledge_intro();
        assert_eq!(d.pointer(Pointer::DoubleClick), Events::JUMPED);

        let mut out = DrawList::new();
        let seen = d.run(60, &mut out);
        assert!(seen.contains(Events::LANDED_GROUND));
        assert_eq!(d.frames(), 60);
    }
}
