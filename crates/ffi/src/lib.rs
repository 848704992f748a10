use std::ffi::{c_char, CStr};

use shelfrun_core::{Config, Entity, Game, Params, Pointer};

#[no_mangle]
pub extern "C" fn core_default_params(out: *mut Params) {
    unsafe { *out = Params::default(); }
}

/// Default game, still showing the intro. Free with `core_game_free`.
#[no_mangle]
pub extern "C" fn core_game_new() -> *mut Game {
    Box::into_raw(Box::new(Game::default()))
}

/// Default level with caller-supplied tuning, e.g. a `core_default_params`
/// result with fields adjusted. Null when the tuning fails validation.
#[no_mangle]
pub extern "C" fn core_game_with_params(params: *const Params) -> *mut Game {
    let cfg = Config {
        params: unsafe { *params },
        ..Config::default()
    };
    if cfg.validate().is_err() {
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(Game::from_config(&cfg)))
}

/// Game from a JSON config; null when the config does not parse or validate.
#[no_mangle]
pub extern "C" fn core_game_from_json(json: *const c_char) -> *mut Game {
    let src = unsafe { CStr::from_ptr(json) };
    let Ok(src) = src.to_str() else {
        return std::ptr::null_mut();
    };
    match Config::from_json(src) {
        Ok(cfg) => Box::into_raw(Box::new(Game::from_config(&cfg))),
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn core_game_free(game: *mut Game) {
    if !game.is_null() {
        drop(unsafe { Box::from_raw(game) });
    }
}

#[no_mangle]
pub extern "C" fn core_game_click(game: *mut Game, x: f32) -> u16 {
    let g = unsafe { &mut *game };
    shelfrun_core::input::apply(g, Pointer::Click { x }).bits()
}

#[no_mangle]
pub extern "C" fn core_game_double_click(game: *mut Game) -> u16 {
    let g = unsafe { &mut *game };
    shelfrun_core::input::apply(g, Pointer::DoubleClick).bits()
}

#[no_mangle]
pub extern "C" fn core_game_acknowledge_intro(game: *mut Game) {
    let g = unsafe { &mut *game };
    g.acknowledge_intro();
}

#[no_mangle]
pub extern "C" fn core_game_restart(game: *mut Game) -> u16 {
    let g = unsafe { &mut *game };
    g.restart().bits()
}

/// One frame of simulation. Returns the event bits.
#[no_mangle]
pub extern "C" fn core_game_step(game: *mut Game) -> u16 {
    let g = unsafe { &mut *game };
    shelfrun_core::step(g).bits()
}

#[no_mangle]
pub extern "C" fn core_game_entity(game: *const Game, out: *mut Entity) {
    let g = unsafe { &*game };
    unsafe { *out = g.entity; }
}

/// 0 intro, 1 playing, 2 game over, 3 win.
#[no_mangle]
pub extern "C" fn core_game_state(game: *const Game) -> u8 {
    let g = unsafe { &*game };
    g.state as u8
}

#[no_mangle]
pub extern "C" fn core_game_anim_frame(game: *const Game) -> u32 {
    let g = unsafe { &*game };
    g.anim.frame
}

#[no_mangle]
pub extern "C" fn core_game_gap_revealed(game: *const Game) -> bool {
    let g = unsafe { &*game };
    g.gap_revealed()
}
