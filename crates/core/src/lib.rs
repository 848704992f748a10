pub mod anim;
pub mod calc;
pub mod collide;
pub mod config;
pub mod driver;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod geom;
pub mod input;
pub mod level;
pub mod params;
pub mod render;
pub mod state;
pub mod step;

pub use anim::Animation;
pub use config::Config;
pub use driver::Driver;
pub use entity::Entity;
pub use error::{Error, Result};
pub use events::Events;
pub use game::Game;
pub use geom::{Rect, Span};
pub use input::Pointer;
pub use level::Level;
pub use params::Params;
pub use render::{render, DrawCmd, DrawList, SpriteSheet, Surface};
pub use state::GameState;
pub use step::step;
