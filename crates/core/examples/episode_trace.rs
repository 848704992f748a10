use shelfrun_core::{Config, DrawList, Driver, Events, Game, Pointer};

// Shelf route: walk under the low shelf, hop up, hop to the high shelf,
// then leap over the gap to the win line.
const ROUTE: [(u32, Pointer); 4] = [
    (0, Pointer::Click { x: 280.0 }),
    (100, Pointer::DoubleClick),
    (160, Pointer::Click { x: 350.0 }),
    (240, Pointer::Click { x: 760.0 }),
];

fn main() {
    let mut driver = Driver::new(Game::from_config(&Config::default()));
    driver.game.acknowledge_intro();
    let mut surface = DrawList::new();

    let mut jumped = 0u32;
    let mut landed = 0u32;
    let mut won_at = None;

    for frame in 0..400u32 {
        for (_, p) in ROUTE.iter().filter(|(f, _)| *f == frame) {
            jumped += driver.pointer(*p).contains(Events::JUMPED) as u32;
        }
        let ev = driver.frame(&mut surface);
        landed += ev.intersects(Events::LANDED_SHELF | Events::LANDED_GROUND) as u32;
        if ev.contains(Events::WIN_POPUP) {
            won_at = Some(frame);
        }
    }

    let g = &driver.game;
    println!(
        "{{\"x\":{},\"y\":{},\"state\":\"{}\",\"gap_revealed\":{},\"jumped\":{},\"landed\":{},\"won_at\":{}}}",
        g.entity.x,
        g.entity.y,
        g.state,
        g.gap_revealed(),
        jumped,
        landed,
        won_at.map_or("null".to_owned(), |f| f.to_string())
    );
}
