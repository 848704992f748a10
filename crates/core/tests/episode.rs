use shelfrun_core::{Config, DrawCmd, DrawList, Driver, Events, Game, GameState, Pointer};

fn started() -> Driver {
    let cfg = Config::default();
    let mut d = Driver::new(Game::from_config(&cfg));
    assert_eq!(d.game.state, GameState::Intro);
    d.game.acknowledge_intro();
    d
}

#[test]
fn shelf_route_wins() {
    let mut d = started();
    let mut out = DrawList::new();

    d.pointer(Pointer::Click { x: 280.0 });
    d.run(100, &mut out);
    assert_eq!(d.game.entity.x, 280.0);

    assert_eq!(d.pointer(Pointer::DoubleClick), Events::JUMPED);
    let seen = d.run(60, &mut out);
    assert!(seen.contains(Events::LANDED_SHELF));
    assert_eq!(d.game.shelf, Some(0));
    assert_eq!(d.game.entity.y, 320.0);

    assert_eq!(d.pointer(Pointer::Click { x: 350.0 }), Events::JUMPED);
    let seen = d.run(80, &mut out);
    assert!(seen.contains(Events::LANDED_SHELF | Events::GAP_REVEALED));
    assert_eq!(d.game.shelf, Some(1));
    assert_eq!(d.game.entity.y, 270.0);
    assert!(d.game.gap_revealed());

    assert_eq!(d.pointer(Pointer::Click { x: 760.0 }), Events::JUMPED);
    let seen = d.run(150, &mut out);
    assert!(seen.contains(Events::LANDED_GROUND | Events::WON | Events::WIN_POPUP));
    assert!(!seen.contains(Events::FELL));
    assert_eq!(d.game.state, GameState::Win);
    assert_eq!(d.game.entity.x, 750.0);

    assert!(out.cmds.contains(&DrawCmd::Rect {
        color: "#000000".to_owned(),
        rect: shelfrun_core::Rect::new(400.0, 400.0, 100.0, 50.0),
    }));
    assert!(matches!(
        out.cmds.last(),
        Some(DrawCmd::Text { text, .. }) if text == "you did it!"
    ));

    // Clicks are ignored until the host restarts.
    assert_eq!(d.pointer(Pointer::DoubleClick), Events::empty());
    assert_eq!(d.game.restart(), Events::RESPAWNED);
    assert_eq!(d.game.state, GameState::Playing);
    assert_eq!(d.game.entity.x, 50.0);
    assert!(!d.game.gap_revealed());
}

#[test]
fn walking_into_the_gap_respawns() {
    let mut d = started();
    let mut out = DrawList::new();

    d.pointer(Pointer::Click { x: 450.0 });
    let seen = d.run(88, &mut out);
    assert!(seen.contains(Events::FELL));
    assert!(!seen.contains(Events::WON));
    assert_eq!(d.game.state, GameState::GameOver);
    assert!(matches!(
        out.cmds.last(),
        Some(DrawCmd::Text { text, .. }) if text == "game over!"
    ));

    let seen = d.run(120, &mut out);
    assert_eq!(seen, Events::RESPAWNED);
    assert_eq!(d.game.state, GameState::Playing);
    assert_eq!(d.game.entity.x, 50.0);
    assert_eq!(d.game.entity.y, 400.0);
}

#[test]
fn jumping_the_gap_lands_on_the_far_side() {
    let mut d = started();
    let mut out = DrawList::new();

    d.pointer(Pointer::Click { x: 380.0 });
    d.run(90, &mut out);
    assert_eq!(d.game.entity.x, 380.0);

    d.pointer(Pointer::Click { x: 600.0 });
    d.pointer(Pointer::DoubleClick);
    let seen = d.run(44, &mut out);
    assert!(seen.contains(Events::LANDED_GROUND));
    assert!(!seen.contains(Events::FELL));
    assert_eq!(d.game.entity.x, 556.0);

    d.run(30, &mut out);
    assert_eq!(d.game.entity.x, 600.0);
    assert_eq!(d.game.state, GameState::Playing);
}

#[test]
fn identical_input_gives_identical_trace() {
    fn trace() -> Vec<(f32, f32, GameState)> {
        let mut d = started();
        let mut out = DrawList::new();
        let mut rows = Vec::new();
        for frame in 0..400u32 {
            match frame {
                0 => {
                    d.pointer(Pointer::Click { x: 380.0 });
                }
                95 => {
                    d.pointer(Pointer::Click { x: 800.0 });
                    d.pointer(Pointer::DoubleClick);
                }
                _ => {}
            }
            d.frame(&mut out);
            rows.push((d.game.entity.x, d.game.entity.y, d.game.state));
        }
        rows
    }

    let a = trace();
    assert_eq!(a, trace());
    assert_eq!(a.last().map(|r| r.2), Some(GameState::Win));
}
