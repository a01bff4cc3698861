use crate::audio::WebAudioOutput;
use crate::dom;
use crate::input;
use crate::lifecycle;
use bloom_core::{Scene, SoundBank};
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ClickWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene<StdRng>>>,
    pub sounds: Rc<SoundBank<web::AudioBuffer>>,
    pub output: Rc<RefCell<WebAudioOutput>>,
}

/// Each click on the canvas blooms at the pointer and plays one random clip.
pub fn wire_click(w: ClickWiring) {
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::click_canvas_px(&ev, &w.canvas);
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return;
        }
        let mut scene = w.scene.borrow_mut();
        scene.handle_click(pos.x, pos.y);
        let played = w
            .sounds
            .play_random(scene.rng_mut(), &mut *w.output.borrow_mut());
        log::info!(
            "[click] bloom at ({:.0}, {:.0}), sound {}; {} effects, {} particles live",
            pos.x,
            pos.y,
            played.unwrap_or("skipped"),
            scene.effects().len(),
            scene.particles().len()
        );
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas at window size and tell the scene about the new bounds.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene<StdRng>>>) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::fit_canvas_to_window(&canvas_resize);
        scene.borrow_mut().resize(viewport.width, viewport.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Stop the frame loop and release audio when the page is discarded.
/// Pages parked in the back/forward cache keep both and resume on restore.
pub fn wire_teardown(
    running: Rc<Cell<bool>>,
    scene: Rc<RefCell<Scene<StdRng>>>,
    audio_ctx: web::AudioContext,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if !lifecycle::claim_shutdown(ev.persisted(), &running) {
            return;
        }
        log::info!("[page] shutting down");
        scene.borrow_mut().teardown();
        _ = audio_ctx.close();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
