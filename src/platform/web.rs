//! Browser front end
//!
//! Wires the page's control surface to a [`Session`], drives it from
//! `requestAnimationFrame` and plays the cues each frame produces.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlInputElement};

use super::{LoopToken, Session};
use crate::audio::{AudioLevels, AudioManager, SoundEffect};
use crate::config::SimConfig;
use crate::controls::SceneRequest;
use crate::renderer::{CanvasSink, Painter};

/// Frames between stats log lines
const STATS_INTERVAL: u64 = 600;

/// Page state shared by the event handlers and the frame loop
struct App {
    session: Session,
    canvas: CanvasSink,
    audio: AudioManager,
    /// Id of the scheduled animation frame, if any
    pending_frame: Option<i32>,
}

impl App {
    /// Cancel the running loop and generate a new scene
    fn start(&mut self, request: SceneRequest) -> LoopToken {
        self.cancel_pending_frame();
        // First click is the user gesture that unlocks audio
        self.audio.resume();
        self.session.start(request)
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    /// Step, draw and play cues. False when the chain was cancelled.
    fn frame(&mut self, token: &LoopToken) -> bool {
        let mut painter = Painter::new(&mut self.canvas);
        let Some(events) = self.session.frame(token, &mut painter) else {
            return false;
        };

        for event in &events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.audio.play(effect);
            }
        }

        let stats = self.session.state.stats;
        if stats.frames % STATS_INTERVAL == 0 {
            log::debug!(
                "{} frames, {} collisions, {} live particles",
                stats.frames,
                stats.collisions,
                self.session.state.particles.len()
            );
        }
        true
    }
}

/// Read config overrides from `<script id="sim-config" type="application/json">`
fn load_config(document: &Document) -> SimConfig {
    let Some(json) = document
        .get_element_by_id("sim-config")
        .and_then(|el| el.text_content())
    else {
        return SimConfig::default();
    };

    match SimConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded config overrides");
            config
        }
        Err(e) => {
            log::warn!("Ignoring config overrides: {}", e);
            SimConfig::default()
        }
    }
}

/// Current text of an `<input>` element
fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Page entry point: wire the controls and wait for the first start click
#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Circle Burst starting...");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document - not running in a browser page?");
        return;
    };

    let Some(canvas) = document
        .get_element_by_id("canvas")
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::error!("No <canvas id=\"canvas\"> element");
        return;
    };

    let config = load_config(&document);
    let Some(sink) = CanvasSink::new(&canvas, config.width, config.height) else {
        log::error!("Canvas 2D context unavailable");
        return;
    };
    let audio = AudioManager::new(AudioLevels::from_config(&config));

    let seed = js_sys::Date::now() as u64;
    log::info!("Session seed: {}", seed);

    let app = Rc::new(RefCell::new(App {
        session: Session::new(config, seed),
        canvas: sink,
        audio,
        pending_frame: None,
    }));

    setup_start_button(&document, app);

    log::info!("Circle Burst ready");
}

fn setup_start_button(document: &Document, app: Rc<RefCell<App>>) {
    let Some(btn) = document.get_element_by_id("startButton") else {
        log::error!("No start button");
        return;
    };

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let count = input_value(&document, "circleCount");
        let speed = input_value(&document, "circleSpeed");

        let Some(request) = SceneRequest::parse(&count, &speed) else {
            log::warn!("Ignoring start: count {:?}, speed {:?}", count, speed);
            return;
        };

        let token = app.borrow_mut().start(request);
        request_animation_frame(app.clone(), token);
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(app: Rc<RefCell<App>>, token: LoopToken) {
    let Some(window) = web_sys::window() else { return };
    let app_for_frame = app.clone();
    let closure = Closure::once(move |_time: f64| {
        game_loop(app_for_frame, token);
    });
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => app.borrow_mut().pending_frame = Some(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>, token: LoopToken) {
    let keep_running = {
        let mut a = app.borrow_mut();
        a.pending_frame = None;
        a.frame(&token)
    };

    if keep_running {
        request_animation_frame(app, token);
    }
}
