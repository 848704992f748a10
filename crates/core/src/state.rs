use std::fmt;

/// Which systems run this frame and which overlay the renderer draws.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the player to dismiss the intro popup. First load only.
    #[default]
    Intro = 0,
    Playing = 1,
    /// Counting down the message timer before an automatic respawn.
    GameOver = 2,
    /// Held until an explicit restart.
    Win = 3,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Intro => "intro",
            GameState::Playing => "playing",
            GameState::GameOver => "gameOver",
            GameState::Win => "win",
        }
    }

    /// Overlay text and color, if this state draws one.
    pub fn overlay(self) -> Option<(&'static str, &'static str)> {
        match self {
            GameState::GameOver => Some(("game over!", "red")),
            GameState::Win => Some(("you did it!", "green")),
            GameState::Intro | GameState::Playing => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
