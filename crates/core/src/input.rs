use crate::events::Events;
use crate::game::Game;
use crate::state::GameState;

/// Pointer gestures the game reacts to. `x` is in scene coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Pointer {
    Click { x: f32 },
    DoubleClick,
}

/// Client-space pointer x to scene x, given the surface's left edge.
#[inline]
pub fn scene_x(client_x: f32, surface_left: f32) -> f32 {
    client_x - surface_left
}

/// Apply one gesture. Ignored outside of `Playing`.
pub fn apply(game: &mut Game, pointer: Pointer) -> Events {
    if game.state != GameState::Playing {
        return Events::empty();
    }
    match pointer {
        Pointer::Click { x } => {
            game.target_x = x;
            // A click while anchored jumps off the shelf toward the target.
            if game.shelf.take().is_some() {
                game.entity.jump(game.params.jump_velocity);
                return Events::JUMPED;
            }
            Events::empty()
        }
        Pointer::DoubleClick => {
            if game.entity.on_ground && game.shelf.is_none() {
                game.entity.jump(game.params.jump_velocity);
                return Events::JUMPED;
            }
            Events::empty()
        }
    }
}

impl Game {
    pub fn click(&mut self, x: f32) -> Events {
        apply(self, Pointer::Click { x })
    }

    pub fn double_click(&mut self) -> Events {
        apply(self, Pointer::DoubleClick)
    }
}
