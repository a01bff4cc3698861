#![cfg(target_arch = "wasm32")]
use bloom_core::{Scene, SceneParams};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bloom-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    let ctx2d = dom::context_2d(&canvas)?;

    let viewport = dom::fit_canvas_to_window(&canvas);
    let scene = Rc::new(RefCell::new(Scene::new(
        viewport,
        SceneParams::default(),
        StdRng::from_entropy(),
    )));
    events::wire_resize(&canvas, scene.clone());

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Nothing animates until every clip has been attempted
    let sounds = Rc::new(audio::load_sounds(&audio_ctx).await);
    log::info!(
        "[sound] ready: {}/{} clips",
        sounds.loaded_count(),
        sounds.files().len()
    );

    events::wire_click(events::ClickWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        sounds,
        output: Rc::new(RefCell::new(audio::WebAudioOutput::new(audio_ctx.clone()))),
    });

    let running = Rc::new(Cell::new(true));
    events::wire_teardown(running.clone(), scene.clone(), audio_ctx);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        painter: render::Painter::new(ctx2d),
        running,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
