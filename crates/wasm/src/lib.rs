use std::cell::RefCell;
use std::rc::Rc;

use shelfrun_core::{calc, input, Config, Driver, Events, Game, Pointer, Rect, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, w: f32, h: f32) {
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, color: &str, r: Rect) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
    }

    fn draw_sprite(&mut self, src: Rect, dst: Rect) {
        // Not loaded yet, or failed to load: draw nothing.
        if !self.sprite.complete() || self.sprite.natural_width() == 0 {
            return;
        }
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.sprite,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            );
    }

    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}

struct Runtime {
    driver: Driver,
    surface: CanvasSurface,
    listener: Option<js_sys::Function>,
}

type Shared = Rc<RefCell<Runtime>>;

/// Forward event names ("JUMPED", "WIN_POPUP", ...) to the page. The
/// runtime is not borrowed while the listener runs, so it may call back in.
fn dispatch(rt: &Shared, ev: Events) {
    if ev.is_empty() {
        return;
    }
    let Some(listener) = rt.borrow().listener.clone() else {
        return;
    };
    for (name, _) in ev.iter_names() {
        if let Err(e) = listener.call1(&JsValue::NULL, &JsValue::from_str(name)) {
            log::warn!("event listener threw on {name}: {e:?}");
        }
    }
}

fn pointer(rt: &Shared, p: Pointer) {
    let ev = rt.borrow_mut().driver.pointer(p);
    dispatch(rt, ev);
}

fn request_animation_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}

fn bind_pointer(canvas: &HtmlCanvasElement, rt: &Shared) -> Result<(), JsValue> {
    let click = {
        let rt = Rc::clone(rt);
        let canvas = canvas.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let left = canvas.get_bounding_client_rect().left();
            let x = input::scene_x(e.client_x() as f32, left as f32);
            pointer(&rt, Pointer::Click { x });
        })
    };
    canvas.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();

    let dblclick = {
        let rt = Rc::clone(rt);
        Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
            pointer(&rt, Pointer::DoubleClick);
        })
    };
    canvas.add_event_listener_with_callback("dblclick", dblclick.as_ref().unchecked_ref())?;
    dblclick.forget();
    Ok(())
}

#[wasm_bindgen]
pub struct Runner {
    rt: Shared,
    next_href: String,
}

#[wasm_bindgen]
impl Runner {
    /// Bind to `<canvas id=canvas_id>`. `config_json` overrides the default
    /// layout and tuning.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        sprite_src: &str,
        config_json: Option<String>,
    ) -> Result<Runner, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let cfg = match config_json {
            Some(src) => Config::from_json(&src).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Config::default(),
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;
        canvas.set_width(cfg.params.surface_w as u32);
        canvas.set_height(cfg.params.surface_h as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;

        let sprite = HtmlImageElement::new()?;
        sprite.set_src(sprite_src);

        let rt = Rc::new(RefCell::new(Runtime {
            driver: Driver::new(Game::from_config(&cfg)),
            surface: CanvasSurface { ctx, sprite },
            listener: None,
        }));
        bind_pointer(&canvas, &rt)?;
        log::info!(
            "bound #{canvas_id} at {}x{}",
            cfg.params.surface_w,
            cfg.params.surface_h
        );

        Ok(Runner {
            rt,
            next_href: cfg.next_href,
        })
    }

    /// Called with each event name as it happens.
    pub fn on_event(&self, listener: js_sys::Function) {
        self.rt.borrow_mut().listener = Some(listener);
    }

    /// Run update-then-render on every display refresh, for the lifetime of
    /// the page.
    pub fn start(&self) -> Result<(), JsValue> {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::clone(&tick);
        let rt = Rc::clone(&self.rt);

        *handle.borrow_mut() = Some(Closure::new(move || {
            let ev = {
                let mut guard = rt.borrow_mut();
                let r = &mut *guard;
                r.driver.frame(&mut r.surface)
            };
            dispatch(&rt, ev);
            if let Some(cb) = tick.borrow().as_ref() {
                if let Err(e) = request_animation_frame(cb) {
                    log::error!("requestAnimationFrame failed: {e:?}");
                }
            }
        }));

        let first = handle.borrow();
        match first.as_ref() {
            Some(cb) => request_animation_frame(cb).map(|_| ()),
            None => Ok(()),
        }
    }

    pub fn acknowledge_intro(&self) {
        self.rt.borrow_mut().driver.game.acknowledge_intro();
    }

    pub fn restart(&self) {
        let ev = self.rt.borrow_mut().driver.game.restart();
        dispatch(&self.rt, ev);
    }

    pub fn state(&self) -> String {
        self.rt.borrow().driver.game.state.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn next_href(&self) -> String {
        self.next_href.clone()
    }

    /// Entity and state as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let rt = self.rt.borrow();
        let g = &rt.driver.game;

        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"x".into(), &JsValue::from_f64(g.entity.x as f64))?;
        js_sys::Reflect::set(&obj, &"y".into(), &JsValue::from_f64(g.entity.y as f64))?;
        js_sys::Reflect::set(&obj, &"vy".into(), &JsValue::from_f64(g.entity.vy as f64))?;
        js_sys::Reflect::set(&obj, &"grounded".into(), &JsValue::from_bool(g.entity.on_ground))?;
        js_sys::Reflect::set(&obj, &"state".into(), &JsValue::from_str(g.state.as_str()))?;
        js_sys::Reflect::set(&obj, &"frame".into(), &JsValue::from_f64(rt.driver.frames() as f64))?;
        js_sys::Reflect::set(&obj, &"gap_revealed".into(), &JsValue::from_bool(g.gap_revealed()))?;

        Ok(JsValue::from(obj))
    }
}

struct BrowserAlert;

impl calc::Alert for BrowserAlert {
    fn alert(&mut self, msg: &str) {
        alert(msg);
    }
}

/// Calculator form handler. `None` means an alert was shown and the result
/// field should be cleared.
#[wasm_bindgen]
pub fn perform_operation(operation: &str, num1: &str, num2: &str) -> Option<String> {
    calc::submit(operation, num1, num2, &mut BrowserAlert)
}
