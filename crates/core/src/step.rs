use crate::collide;
use crate::events::Events;
use crate::game::Game;
use crate::geom::Rect;
use crate::state::GameState;

/// Advance one frame. Host calls this exactly once per display refresh.
pub fn step(game: &mut Game) -> Events {
    match game.state {
        GameState::Playing => play(game),
        GameState::GameOver => count_down(game),
        GameState::Intro | GameState::Win => Events::empty(),
    }
}

impl Game {
    pub fn step(&mut self) -> Events {
        step(self)
    }
}

fn play(g: &mut Game) -> Events {
    let mut ev = Events::empty();
    let p = g.params;
    let ground_y = p.ground_y();

    // Horizontal: walk toward the target, or stay centered on the shelf.
    let anchor = g.shelf.and_then(|i| g.level.shelf(i)).map(Rect::center_x);
    match anchor {
        Some(cx) => g.entity.x = cx,
        None => {
            let dx = g.target_x - g.entity.x;
            if dx.abs() > p.move_speed {
                g.entity.x += p.move_speed.copysign(dx);
            } else {
                g.entity.x = g.target_x;
            }
        }
    }

    // Vertical: position first, then velocity.
    let was_airborne = !g.entity.on_ground;
    if was_airborne {
        g.entity.y += g.entity.vy;
        g.entity.vy += p.gravity;
    }

    // Shelves
    if g.shelf.is_none() && !g.entity.on_ground {
        if let Some(i) = collide::find_landing(&g.entity, &g.level.shelves) {
            g.entity.y = g.level.shelves[i].y;
            g.entity.vy = 0.0;
            g.entity.on_ground = true;
            g.shelf = Some(i);
            ev |= Events::LANDED_SHELF;
            log::debug!("landed on shelf {i} at x={}", g.entity.x);

            if g.level.reveal_shelf == Some(i) && !g.gap_revealed {
                g.gap_revealed = true;
                ev |= Events::GAP_REVEALED;
                log::debug!("gap revealed");
            }
        }
    }

    // Ground
    if g.entity.y >= ground_y {
        g.entity.y = ground_y;
        g.entity.vy = 0.0;
        g.entity.on_ground = true;
        g.shelf = None;
        if was_airborne && !ev.contains(Events::LANDED_SHELF) {
            ev |= Events::LANDED_GROUND;
        }
    }

    // Hazard is checked first; a frame spent entering the gap never wins.
    if collide::in_gap(&g.entity, ground_y, &g.level.gap) {
        g.state = GameState::GameOver;
        g.message_timer = p.message_frames;
        ev |= Events::FELL;
        log::info!("fell into the gap at x={}", g.entity.x);
    } else if collide::reached_win(&g.entity, g.level.win_x) {
        g.state = GameState::Win;
        ev |= Events::WON;
        if !g.win_popup_shown {
            g.win_popup_shown = true;
            ev |= Events::WIN_POPUP;
            log::info!("reached the win line at x={}", g.entity.x);
        }
    }

    let walking = g.shelf.is_none() && (g.entity.x - g.target_x).abs() > p.move_speed;
    g.anim.tick(walking, p.anim_speed, p.total_frames);

    ev
}

fn count_down(g: &mut Game) -> Events {
    g.message_timer = g.message_timer.saturating_sub(1);
    if g.message_timer == 0 {
        g.reset()
    } else {
        Events::empty()
    }
}
