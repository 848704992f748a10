use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use shelfrun_core::{Config, DrawList, Driver, Error, Game, Pointer, Result};

#[derive(Deserialize)]
struct Script {
    #[serde(default)]
    config: Config,
    frames: u32,
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

#[derive(Deserialize)]
struct ScriptEvent {
    frame: u32,
    #[serde(flatten)]
    action: Action,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Action {
    Click { x: f32 },
    DoubleClick,
    Ack,
    Restart,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: cargo run -p shelfrun_core --features replay --bin replay -- <script.json>");
        std::process::exit(2);
    };
    let raw = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    let script: Script = serde_json::from_str(&raw)?;
    script.config.validate()?;

    let mut driver = Driver::new(Game::from_config(&script.config));
    let mut surface = DrawList::new();
    log::info!("replaying {} frames, {} events", script.frames, script.events.len());

    println!("frame,x,y,vy,grounded,state,events");
    for frame in 0..script.frames {
        let mut ev = shelfrun_core::Events::empty();
        for e in script.events.iter().filter(|e| e.frame == frame) {
            ev |= match e.action {
                Action::Click { x } => driver.pointer(Pointer::Click { x }),
                Action::DoubleClick => driver.pointer(Pointer::DoubleClick),
                Action::Ack => {
                    driver.game.acknowledge_intro();
                    shelfrun_core::Events::empty()
                }
                Action::Restart => driver.game.restart(),
            };
        }
        ev |= driver.frame(&mut surface);

        let g = &driver.game;
        println!(
            "{},{},{},{},{},{},{}",
            frame,
            g.entity.x,
            g.entity.y,
            g.entity.vy,
            g.entity.on_ground as u8,
            g.state,
            ev.bits()
        );
    }
    Ok(())
}
