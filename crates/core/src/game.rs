use crate::anim::Animation;
use crate::config::Config;
use crate::entity::Entity;
use crate::events::Events;
use crate::level::Level;
use crate::params::Params;
use crate::state::GameState;

/// Everything the loop owns. Input, update and render all go through this.
#[derive(Clone, Debug)]
pub struct Game {
    pub params: Params,
    pub level: Level,

    pub entity: Entity,
    pub target_x: f32,
    pub state: GameState,
    pub message_timer: u32,
    pub anim: Animation,
    /// Index into `level.shelves` while anchored to a shelf.
    pub shelf: Option<usize>,

    pub(crate) gap_revealed: bool,
    pub(crate) first_load: bool,
    pub(crate) win_popup_shown: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Params::default(), Level::default())
    }
}

impl Game {
    pub fn new(params: Params, level: Level) -> Self {
        let entity = Entity::spawn(&params);
        Self {
            params,
            level,
            entity,
            target_x: entity.x,
            state: GameState::Intro,
            message_timer: 0,
            anim: Animation::default(),
            shelf: None,
            gap_revealed: false,
            first_load: true,
            win_popup_shown: false,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.params, cfg.level.clone())
    }

    /// Start a game already past the intro popup.
    pub fn playing(params: Params, level: Level) -> Self {
        let mut g = Self::new(params, level);
        g.acknowledge_intro();
        g
    }

    pub fn gap_revealed(&self) -> bool {
        self.gap_revealed
    }

    pub fn first_load(&self) -> bool {
        self.first_load
    }

    pub fn win_popup_shown(&self) -> bool {
        self.win_popup_shown
    }

    /// The player dismissed the intro popup.
    pub fn acknowledge_intro(&mut self) {
        self.first_load = false;
        if self.state == GameState::Intro {
            log::info!("intro acknowledged, playing");
            self.state = GameState::Playing;
        }
    }

    /// Explicit restart from outside the loop (the win popup's button).
    pub fn restart(&mut self) -> Events {
        log::info!("restart requested from {}", self.state);
        self.win_popup_shown = false;
        self.reset()
    }

    /// Put the entity back at spawn. Returns to intro only before the
    /// first acknowledgment.
    pub fn reset(&mut self) -> Events {
        self.entity = Entity::spawn(&self.params);
        self.target_x = self.entity.x;
        self.message_timer = 0;
        self.anim = Animation::default();
        self.shelf = None;
        self.gap_revealed = false;
        self.state = if self.first_load {
            GameState::Intro
        } else {
            GameState::Playing
        };
        log::info!("respawned at x={} in {}", self.entity.x, self.state);
        Events::RESPAWNED
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::events::Events;
    use crate::state::GameState;

    #[test]
    fn new_game_waits_on_intro() {
        let g = Game::default();
        assert_eq!(g.state, GameState::Intro);
        assert!(g.first_load());
        assert_eq!(g.target_x, g.entity.x);
    }

    #[test]
    fn acknowledge_moves_to_playing_once() {
        let mut g = Game::default();
        g.acknowledge_intro();
        assert_eq!(g.state, GameState::Playing);
        assert!(!g.first_load());

        g.state = GameState::Win;
        g.acknowledge_intro();
        assert_eq!(g.state, GameState::Win);
    }

    #[test]
    fn reset_before_acknowledgment_returns_to_intro() {
        let mut g = Game::default();
        g.entity.x = 300.0;
        assert_eq!(g.reset(), Events::RESPAWNED);
        assert_eq!(g.state, GameState::Intro);
        assert_eq!(g.entity.x, 50.0);
    }

    #[test]
    fn restart_clears_episode_latches() {
        let mut g = Game::default();
        g.acknowledge_intro();
        g.state = GameState::Win;
        g.win_popup_shown = true;
        g.gap_revealed = true;
        g.shelf = Some(1);
        g.restart();
        assert_eq!(g.state, GameState::Playing);
        assert!(!g.win_popup_shown());
        assert!(!g.gap_revealed());
        assert_eq!(g.shelf, None);
    }
}
